//! 対話式採寸入力モジュール
//!
//! 選択した製品ラインの必要採寸コードを1つずつ聞き取り、
//! 推奨サイズを表示する。出力先を指定すれば注文シートも書き出す。

use chrono::Utc;
use dialoguer::Input;
use std::path::Path;

use crate::catalog;
use crate::config::Config;
use crate::error::{Result, SizeFitError};
use crate::export::OrderSheet;
use crate::measure;
use crate::report;
use crate::state::Session;
use crate::table::SizeTable;

/// 対話式で採寸値を入力して推奨サイズを表示
pub fn run_interactive_measure(
    config: &Config,
    products: &[String],
    table: &SizeTable,
    output: Option<&Path>,
    dev_data: bool,
) -> Result<()> {
    let mut session = Session::new();
    for id in products {
        if catalog::product(id).is_none() {
            return Err(SizeFitError::UnknownProduct(id.clone()));
        }
        session = session.toggle_product(id);
    }

    if dev_data {
        session = session.with_dev_data();
        println!("✔ テスト用の採寸値を適用しました\n");
    }

    let codes = session.required_codes();
    println!("📏 必要な採寸項目: {}件", codes.len());
    println!("---");
    println!("操作: 値を入力してEnter（空のままEnterでスキップ）");
    println!("---\n");

    for (count, code) in codes.iter().enumerate() {
        let Some(def) = catalog::measurement(*code) else {
            continue;
        };
        println!("[{}/{}] {} ({})", count + 1, codes.len(), def.label, def.code);
        println!("  {}", def.description);

        let current = session.measurement(*code).map(str::to_string);
        let mut prompt = Input::<String>::new()
            .with_prompt(format!("  {} (cm)", def.label))
            .allow_empty(true);
        if let Some(value) = current {
            prompt = prompt.default(value);
        }
        let text = prompt
            .interact_text()
            .map_err(|e| SizeFitError::Input(e.to_string()))?;

        let text = text.trim();
        if text.is_empty() {
            println!("  → スキップ\n");
            continue;
        }
        if !measure::is_valid(text) {
            // 数値化できない入力も保持はするが、照合では未入力扱いになる
            println!("  ⚠ 数値として解釈できません（照合では未入力扱い）");
        }
        session = session.with_measurement(*code, text);
        println!("  → {}\n", text);
    }

    println!("---\n");

    if table.is_empty() {
        println!("⚠ サイズ表が空のため照合は行われません\n");
    } else {
        for id in session.selection().to_vec() {
            report::print_recommendation(table, &id, &config.primary_dimension, &session);
        }
    }

    if let Some(path) = output {
        let sheet = OrderSheet::from_session(&session, Utc::now());
        sheet.write(path)?;
        println!("✔ 注文シートを保存: {}", path.display());
    }

    Ok(())
}
