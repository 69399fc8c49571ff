//! サイズ照合モジュール
//!
//! 採寸値とサイズ表を照合して推奨サイズを決定する。
//! 照合に使うのは主要寸法1つだけで、行が持つ他の寸法は
//! フィット感表示のための参考情報。

use crate::error::{Result, SizeFitError};
use crate::measure;
use crate::table::{SizeRow, SizeTable};

/// 照合に使う既定の寸法
pub const PRIMARY_DIMENSION: &str = "chest";

/// 照合結果
///
/// 一致なしはエラーではなく、オーダーメイド案内につながる正規の状態。
#[derive(Debug, Clone, Copy)]
pub enum MatchOutcome<'a> {
    /// 一致した行（サイズ表が所有する行への参照）
    Matched(&'a SizeRow),
    /// 標準サイズに一致なし（オーダーメイド対象）
    CustomFit,
}

impl<'a> MatchOutcome<'a> {
    pub fn is_custom_fit(&self) -> bool {
        matches!(self, MatchOutcome::CustomFit)
    }

    pub fn row(&self) -> Option<&'a SizeRow> {
        match self {
            MatchOutcome::Matched(row) => Some(row),
            MatchOutcome::CustomFit => None,
        }
    }
}

/// 製品IDと主要寸法の採寸値からサイズを照合
///
/// 指定製品の行をファイル順に走査し、主要寸法の範囲（両端含む）に
/// 採寸値が入る最初の行を返す。範囲が重複していても先の行が勝つ
/// （表の並び順が事実上のタイブレーク。意図的にこの挙動を保持する）。
///
/// 採寸値が未入力・数値化不能の場合はCustomFitを返す。
pub fn match_size<'a>(
    table: &'a SizeTable,
    product_id: &str,
    dimension: &str,
    raw_value: Option<&str>,
) -> MatchOutcome<'a> {
    let value = match raw_value.and_then(measure::parse_value) {
        Some(v) => v,
        None => return MatchOutcome::CustomFit,
    };

    table
        .rows_for_product(product_id)
        .into_iter()
        .find(|row| {
            row.range(dimension)
                .map(|range| range.contains(value))
                .unwrap_or(false)
        })
        .map(MatchOutcome::Matched)
        .unwrap_or(MatchOutcome::CustomFit)
}

/// `コード=値` 形式の引数列をパース
///
/// 例: `B=95` `C=88,5`。コードはカタログに存在する1文字である必要がある。
pub fn parse_measure_args(args: &[String]) -> Result<Vec<(char, String)>> {
    let mut pairs = Vec::new();
    for arg in args {
        let (code_str, value) = arg
            .split_once('=')
            .ok_or_else(|| SizeFitError::Input(format!("コード=値 の形式で指定してください: {}", arg)))?;
        let code_str = code_str.trim();
        let mut chars = code_str.chars();
        let code = match (chars.next(), chars.next()) {
            (Some(c), None) => c,
            _ => return Err(SizeFitError::UnknownCode(code_str.to_string())),
        };
        if crate::catalog::measurement(code).is_none() {
            return Err(SizeFitError::UnknownCode(code.to_string()));
        }
        pairs.push((code, value.trim().to_string()));
    }
    Ok(pairs)
}
