use chrono::Utc;
use clap::Parser;
use size_fit_rust::{catalog, cli, config, error, interactive, matcher, report};

use cli::{Cli, Commands};
use config::Config;
use error::Result;
use size_fit_rust::{OrderSheet, Session, SizeFitError, SizeTable};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        Commands::Recommend { product, measure, table, dimension } => {
            println!("📏 size-fit - サイズ推奨\n");

            if catalog::product(&product).is_none() {
                return Err(SizeFitError::UnknownProduct(product));
            }

            let path = config.resolve_table_path(table);
            let table = SizeTable::load_or_empty(&path);
            if cli.verbose {
                println!("- サイズ表: {} ({}行)", path.display(), table.len());
            }
            if table.is_empty() {
                println!("⚠ サイズ表が空です。採寸値を確認のうえ再度お試しください。\n");
            }

            let mut session = Session::new().toggle_product(&product);
            for (code, value) in matcher::parse_measure_args(&measure)? {
                session = session.with_measurement(code, &value);
            }

            let dimension = dimension.unwrap_or_else(|| config.primary_dimension.clone());
            report::print_recommendation(&table, &product, &dimension, &session);
        }

        Commands::Codes { products } => {
            println!("🧵 size-fit - 必要採寸コード\n");

            for id in &products {
                if catalog::product(id).is_none() {
                    return Err(SizeFitError::UnknownProduct(id.clone()));
                }
            }

            let ids: Vec<&str> = products.iter().map(|s| s.as_str()).collect();
            let codes = catalog::required_codes(&ids);
            println!("必要な採寸項目: {}件", codes.len());
            for code in codes {
                if let Some(def) = catalog::measurement(code) {
                    println!("  {}: {}", def.code, def.label);
                    println!("     {}", def.description);
                }
            }
        }

        Commands::Measure { products, table, output, dev_data } => {
            println!("🧷 size-fit - 対話式採寸\n");

            let path = config.resolve_table_path(table);
            let table = SizeTable::load_or_empty(&path);
            if cli.verbose {
                println!("- サイズ表: {} ({}行)\n", path.display(), table.len());
            }

            interactive::run_interactive_measure(
                &config,
                &products,
                &table,
                output.as_deref(),
                dev_data,
            )?;

            println!("\n✅ 完了");
        }

        Commands::Export { products, measure, output } => {
            println!("📄 size-fit - 注文シート出力\n");

            let mut session = Session::new();
            for id in &products {
                if catalog::product(id).is_none() {
                    return Err(SizeFitError::UnknownProduct(id.clone()));
                }
                session = session.toggle_product(id);
            }
            for (code, value) in matcher::parse_measure_args(&measure)? {
                session = session.with_measurement(code, &value);
            }

            let sheet = OrderSheet::from_session(&session, Utc::now());
            let path = output.unwrap_or_else(|| std::path::PathBuf::from("order.json"));
            sheet.write(&path)?;
            println!("✔ 注文シートを保存: {}", path.display());
        }

        Commands::Table { table } => {
            let path = config.resolve_table_path(table);
            let table = SizeTable::load_or_empty(&path);

            println!("サイズ表情報:");
            println!("  パス: {}", path.display());
            println!("  行数: {}", table.len());
            println!("  製品: {}", table.product_ids().join(", "));
            println!("  寸法: {}", table.dimensions().join(", "));
        }

        Commands::Config { set_table, set_dimension, show } => {
            let mut config = config;

            if let Some(path) = set_table {
                config.set_table_path(path)?;
                println!("✔ サイズ表パスを設定しました");
            }

            if let Some(dimension) = set_dimension {
                config.set_primary_dimension(dimension)?;
                println!("✔ 照合寸法を設定しました");
            }

            if show {
                println!("設定:");
                println!(
                    "  サイズ表: {}",
                    config
                        .table_path
                        .as_ref()
                        .map(|p| p.display().to_string())
                        .unwrap_or_else(|| "未設定 (data/sizes.csv)".into())
                );
                println!("  照合寸法: {}", config.primary_dimension);
            }
        }
    }

    Ok(())
}
