//! セッション状態モジュール
//!
//! 元のリアクティブなUI状態の置き換え。更新関数は状態を書き換える
//! 代わりに新しいスナップショットを返す。状態はプロセス内のみで、
//! 永続化はしない。

use std::collections::BTreeMap;

use crate::catalog;

/// 1セッション分の入力状態
///
/// 採寸値は入力されたままの文字列で保持する。必要コードの和集合から
/// 外れたコードの値も消さずに残す（再び必要になれば表示に戻る）。
#[derive(Debug, Clone, Default)]
pub struct Session {
    /// 選択中の製品ID（選択順を保持）
    selection: Vec<String>,
    /// 採寸コード→入力文字列
    measurements: BTreeMap<char, String>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// 製品の選択をトグルした新しいスナップショットを返す
    pub fn toggle_product(mut self, product_id: &str) -> Self {
        if let Some(pos) = self.selection.iter().position(|id| id == product_id) {
            self.selection.remove(pos);
        } else {
            self.selection.push(product_id.to_string());
        }
        self
    }

    /// 採寸値を設定した新しいスナップショットを返す（最後の入力が勝つ）
    pub fn with_measurement(mut self, code: char, value: &str) -> Self {
        self.measurements.insert(code, value.to_string());
        self
    }

    /// テスト用の採寸値を一括設定（開発モード相当）
    pub fn with_dev_data(mut self) -> Self {
        for (code, value) in [
            ('A', "57"),
            ('B', "99"),
            ('C', "88"),
            ('D', "64"),
            ('E', "72"),
            ('F', "96"),
            ('G', "46"),
        ] {
            self.measurements.insert(code, value.to_string());
        }
        self
    }

    /// 選択中の製品ID一覧（選択順）
    pub fn selection(&self) -> &[String] {
        &self.selection
    }

    /// 選択中の製品の表示名一覧（カタログにあるもののみ）
    pub fn selected_names(&self) -> Vec<&'static str> {
        self.selection
            .iter()
            .filter_map(|id| catalog::product(id))
            .map(|line| line.name)
            .collect()
    }

    /// 採寸値を取得（入力されたままの文字列）
    pub fn measurement(&self, code: char) -> Option<&str> {
        self.measurements.get(&code).map(|s| s.as_str())
    }

    /// 寸法名で採寸値を取得（コード経由でカタログを引く）
    pub fn measurement_for_dimension(&self, dimension: &str) -> Option<&str> {
        let def = catalog::measurement_by_id(dimension)?;
        self.measurement(def.code)
    }

    /// 現在の選択に必要な採寸コード（和集合、コード順）
    ///
    /// 選択から外れた製品のコードは含まれないが、入力済みの値自体は
    /// 消えない。
    pub fn required_codes(&self) -> Vec<char> {
        let ids: Vec<&str> = self.selection.iter().map(|s| s.as_str()).collect();
        catalog::required_codes(&ids)
    }
}
