//! 推奨結果の表示モジュール
//!
//! 照合結果とフィット感スケールを端末向けに整形する。

use crate::catalog;
use crate::matcher::{self, MatchOutcome};
use crate::scale::FitScale;
use crate::state::Session;
use crate::table::SizeTable;

/// 1製品分の推奨結果を表示
pub fn print_recommendation(
    table: &SizeTable,
    product_id: &str,
    dimension: &str,
    session: &Session,
) {
    let name = catalog::product(product_id)
        .map(|p| p.name)
        .unwrap_or(product_id);
    let raw = session.measurement_for_dimension(dimension);

    match matcher::match_size(table, product_id, dimension, raw) {
        MatchOutcome::CustomFit => {
            println!("⚠ {}: 標準サイズに一致なし", name);
            println!("  採寸値が標準表の範囲に収まりません。オーダーメイドをご検討ください。");
        }
        MatchOutcome::Matched(row) => {
            println!("✅ {}: 推奨サイズ {}", name, row.size);
            for dim in row.dimensions() {
                let Some(def) = catalog::measurement_by_id(dim) else {
                    continue;
                };
                let Some(value) = session.measurement(def.code) else {
                    continue;
                };
                if let Some(scale) = FitScale::evaluate(row, dim, value) {
                    println!(
                        "  {} |{}| {}",
                        def.label,
                        render_track(&scale),
                        scale.category.label()
                    );
                    println!("    {}", scale.category.description());
                }
            }
        }
    }
    println!();
}

/// フィット感スケールの目盛り（マーカー1個の固定幅トラック）
fn render_track(scale: &FitScale) -> String {
    const WIDTH: usize = 26;
    // 表示ポジションは[-2,102]なので0..WIDTH-1に写像
    let pos = scale.display_position();
    let idx = ((pos + 2.0) / 104.0 * (WIDTH as f64 - 1.0)).round() as usize;
    (0..WIDTH).map(|i| if i == idx { '●' } else { '─' }).collect()
}
