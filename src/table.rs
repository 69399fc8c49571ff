//! サイズ表モジュール
//!
//! CSVから読み込んだサイズ表を管理する。
//! 各行は製品ID・サイズ名と、寸法ごとの許容範囲（`<寸法>_min` / `<寸法>_max` 列）を持つ。

use std::collections::BTreeSet;
use std::path::Path;

use crate::error::{Result, SizeFitError};

/// 1寸法の許容範囲（cm）
///
/// 数値化できなかったセルはNaNになる。NaNを含む範囲は
/// どの値とも一致しない（比較が常にfalseになるため）。
#[derive(Debug, Clone, Copy)]
pub struct DimensionRange {
    pub min: f64,
    pub max: f64,
}

impl DimensionRange {
    /// 値が範囲内か（両端を含む）
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// サイズ表の1行（製品×サイズ）
#[derive(Debug, Clone)]
pub struct SizeRow {
    pub product_id: String,
    pub size: String,
    /// 寸法名→範囲（ヘッダー順を保持）
    ranges: Vec<(String, DimensionRange)>,
}

impl SizeRow {
    /// 指定した寸法の範囲を取得
    pub fn range(&self, dimension: &str) -> Option<DimensionRange> {
        self.ranges
            .iter()
            .find(|(name, _)| name == dimension)
            .map(|(_, r)| *r)
    }

    /// この行が持つ寸法名の一覧（ヘッダー順）
    pub fn dimensions(&self) -> impl Iterator<Item = &str> {
        self.ranges.iter().map(|(name, _)| name.as_str())
    }
}

/// サイズ表全体
#[derive(Debug, Clone, Default)]
pub struct SizeTable {
    rows: Vec<SizeRow>,
}

impl SizeTable {
    /// CSVファイルから読み込み
    pub fn from_csv(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(SizeFitError::FileNotFound(path.display().to_string()));
        }
        let content = std::fs::read_to_string(path)?;
        Self::from_csv_str(&content)
    }

    /// CSV文字列から読み込み
    ///
    /// 1行目はヘッダー。空行は無視。各フィールドは前後の空白をトリム。
    /// 区切り文字のクォート/エスケープには対応しない。
    /// 数値列の検証は行わず、数値化できないセルはNaNとして保持する。
    pub fn from_csv_str(content: &str) -> Result<Self> {
        let mut lines = content.lines().filter(|line| !line.trim().is_empty());

        let header_line = lines
            .next()
            .ok_or_else(|| SizeFitError::InvalidTable("ヘッダー行がありません".into()))?;
        let headers: Vec<&str> = header_line.split(',').map(|h| h.trim()).collect();

        if !headers.contains(&"product_id") || !headers.contains(&"size") {
            return Err(SizeFitError::InvalidTable(
                "product_id / size 列が必要です".into(),
            ));
        }

        // `<寸法>_min` 列から寸法名を抽出（ヘッダー順）
        let dimensions: Vec<&str> = headers
            .iter()
            .filter_map(|h| h.strip_suffix("_min"))
            .collect();

        let mut rows = Vec::new();

        for line in lines {
            let values: Vec<&str> = line.split(',').map(|v| v.trim()).collect();

            let ranges = dimensions
                .iter()
                .map(|dim| {
                    let min = field(&headers, &values, &format!("{}_min", dim));
                    let max = field(&headers, &values, &format!("{}_max", dim));
                    (
                        dim.to_string(),
                        DimensionRange {
                            min: min.parse().unwrap_or(f64::NAN),
                            max: max.parse().unwrap_or(f64::NAN),
                        },
                    )
                })
                .collect();

            rows.push(SizeRow {
                product_id: field(&headers, &values, "product_id").to_string(),
                size: field(&headers, &values, "size").to_string(),
                ranges,
            });
        }

        Ok(Self { rows })
    }

    /// CSVファイルから読み込み、失敗時は空の表を返す
    ///
    /// 読み込み失敗は診断を出力するだけで、呼び出し側にはエラーを返さない。
    /// 空の表では照合が一切成立しない（= 未入力と同じ扱い）。
    pub fn load_or_empty(path: &Path) -> Self {
        match Self::from_csv(path) {
            Ok(table) => table,
            Err(e) => {
                eprintln!("⚠ サイズ表の読み込みに失敗: {}", e);
                Self::default()
            }
        }
    }

    /// 全行を取得（ファイル順）
    pub fn rows(&self) -> &[SizeRow] {
        &self.rows
    }

    /// 指定した製品の行のみをファイル順で返す
    pub fn rows_for_product<'a>(&'a self, product_id: &str) -> Vec<&'a SizeRow> {
        self.rows
            .iter()
            .filter(|r| r.product_id == product_id)
            .collect()
    }

    /// 行数
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// 表に含まれる製品IDの一覧（重複除去、ソート済み）
    pub fn product_ids(&self) -> Vec<&str> {
        let set: BTreeSet<&str> = self.rows.iter().map(|r| r.product_id.as_str()).collect();
        set.into_iter().collect()
    }

    /// 表に含まれる寸法名の一覧（重複除去、ソート済み）
    pub fn dimensions(&self) -> Vec<&str> {
        let set: BTreeSet<&str> = self
            .rows
            .iter()
            .flat_map(|r| r.dimensions())
            .collect();
        set.into_iter().collect()
    }
}

/// ヘッダー名に対応するフィールドを取得（列がなければ空文字列）
fn field<'a>(headers: &[&str], values: &[&'a str], name: &str) -> &'a str {
    headers
        .iter()
        .position(|h| *h == name)
        .and_then(|i| values.get(i).copied())
        .unwrap_or("")
}
