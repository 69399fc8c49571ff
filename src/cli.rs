use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "size-fit")]
#[command(about = "採寸データからサイズ推奨・注文シートを生成するツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 採寸値からサイズを推奨
    Recommend {
        /// 製品ID（例: classic-shirt）
        #[arg(required = true)]
        product: String,

        /// 採寸値（形式: コード=値、例: B=95）
        #[arg(short, long, value_name = "CODE=VALUE")]
        measure: Vec<String>,

        /// サイズ表CSVのパス（省略時は設定または data/sizes.csv）
        #[arg(short, long)]
        table: Option<PathBuf>,

        /// 照合に使う寸法（省略時は設定の primary_dimension）
        #[arg(long)]
        dimension: Option<String>,
    },

    /// 選択した製品ラインに必要な採寸コードを表示
    Codes {
        /// 製品ID（複数指定可）
        #[arg(required = true)]
        products: Vec<String>,
    },

    /// 対話式で採寸値を入力してサイズを推奨
    Measure {
        /// 製品ID（複数指定可）
        #[arg(required = true)]
        products: Vec<String>,

        /// サイズ表CSVのパス
        #[arg(short, long)]
        table: Option<PathBuf>,

        /// 注文シートJSONの出力先
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// テスト用の採寸値を自動入力
        #[arg(long)]
        dev_data: bool,
    },

    /// 採寸値から注文シートJSONを生成
    Export {
        /// 製品ID（複数指定可）
        #[arg(required = true)]
        products: Vec<String>,

        /// 採寸値（形式: コード=値、例: B=95）
        #[arg(short, long, value_name = "CODE=VALUE")]
        measure: Vec<String>,

        /// 出力JSONファイル（デフォルト: order.json）
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// サイズ表の情報を表示
    Table {
        /// サイズ表CSVのパス
        #[arg(short, long)]
        table: Option<PathBuf>,
    },

    /// 設定を表示/編集
    Config {
        /// サイズ表CSVのデフォルトパスを設定
        #[arg(long)]
        set_table: Option<PathBuf>,

        /// 照合に使う寸法を設定
        #[arg(long)]
        set_dimension: Option<String>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}
