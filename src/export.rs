//! 注文シート出力モジュール
//!
//! 選択した製品と入力済み採寸値をJSONの注文シートにまとめて書き出す。

use std::collections::BTreeMap;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::state::Session;

/// 注文シート（JSON出力の形）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderSheet {
    /// 選択した製品の表示名
    pub selected_products: Vec<String>,
    /// 採寸コード→入力値（現在必要なコードで値があるもののみ）
    pub measurements: BTreeMap<String, String>,
    /// 作成日時（ISO-8601）
    pub date: String,
}

impl OrderSheet {
    /// セッションから注文シートを作成
    pub fn from_session(session: &Session, now: DateTime<Utc>) -> Self {
        let measurements = session
            .required_codes()
            .into_iter()
            .filter_map(|code| {
                session
                    .measurement(code)
                    .filter(|v| !v.trim().is_empty())
                    .map(|v| (code.to_string(), v.to_string()))
            })
            .collect();

        Self {
            selected_products: session
                .selected_names()
                .into_iter()
                .map(|s| s.to_string())
                .collect(),
            measurements,
            date: now.to_rfc3339(),
        }
    }

    /// JSONファイルに書き出し
    pub fn write(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}
