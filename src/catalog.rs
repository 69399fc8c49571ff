//! 採寸項目カタログモジュール
//!
//! 採寸コード（A〜G）の定義と、製品ラインごとの必要採寸コードを管理する。
//! どちらも静的データで、セッション中は読み取り専用。

use std::collections::BTreeSet;

/// 採寸項目の定義
#[derive(Debug, Clone, Copy)]
pub struct MeasurementDef {
    /// 採寸コード（1文字）
    pub code: char,
    /// 寸法名（サイズ表の列名と対応）
    pub id: &'static str,
    /// 表示名
    pub label: &'static str,
    /// 測り方の説明
    pub description: &'static str,
}

/// 採寸項目の一覧（コード順）
pub const MEASUREMENTS: &[MeasurementDef] = &[
    MeasurementDef {
        code: 'A',
        id: "head",
        label: "頭囲",
        description: "眉の上を通る、頭の最も太い位置の周囲を測ります。",
    },
    MeasurementDef {
        code: 'B',
        id: "chest",
        label: "胸囲",
        description: "脇の下を通る、胸の最も厚い位置の周囲を測ります。",
    },
    MeasurementDef {
        code: 'C',
        id: "waist",
        label: "胴囲",
        description: "腰骨の上、胴の最も細い位置の周囲を測ります。",
    },
    MeasurementDef {
        code: 'D',
        id: "sleeve",
        label: "袖丈",
        description: "肩先から手首のくるぶしまでの長さを測ります。",
    },
    MeasurementDef {
        code: 'E',
        id: "length",
        label: "着丈",
        description: "首の付け根から裾の位置までの長さを測ります。",
    },
    MeasurementDef {
        code: 'F',
        id: "hip",
        label: "腰囲",
        description: "腰の最も太い位置の周囲を水平に測ります。",
    },
    MeasurementDef {
        code: 'G',
        id: "shoulder",
        label: "肩幅",
        description: "左右の肩先の間を背中側で測ります。",
    },
];

/// 製品ラインの定義
#[derive(Debug, Clone, Copy)]
pub struct ProductLine {
    pub id: &'static str,
    pub name: &'static str,
    /// 必要な採寸コード（定義順）
    pub requirements: &'static [char],
}

/// 製品ラインの一覧
pub const PRODUCT_LINES: &[ProductLine] = &[
    ProductLine {
        id: "classic-shirt",
        name: "クラシックシャツ",
        requirements: &['B', 'C', 'D', 'G'],
    },
    ProductLine {
        id: "slim-shirt",
        name: "スリムシャツ",
        requirements: &['B', 'C', 'D', 'G'],
    },
    ProductLine {
        id: "tunic",
        name: "チュニック",
        requirements: &['B', 'C', 'D', 'E', 'G'],
    },
    ProductLine {
        id: "hood",
        name: "フード",
        requirements: &['A', 'B'],
    },
    ProductLine {
        id: "trousers",
        name: "トラウザーズ",
        requirements: &['C', 'E', 'F'],
    },
];

/// コードから採寸項目を取得
pub fn measurement(code: char) -> Option<&'static MeasurementDef> {
    MEASUREMENTS.iter().find(|m| m.code == code)
}

/// 寸法名から採寸項目を取得
pub fn measurement_by_id(id: &str) -> Option<&'static MeasurementDef> {
    MEASUREMENTS.iter().find(|m| m.id == id)
}

/// IDから製品ラインを取得
pub fn product(id: &str) -> Option<&'static ProductLine> {
    PRODUCT_LINES.iter().find(|p| p.id == id)
}

/// 選択した製品ラインの必要採寸コードの和集合
///
/// 重複を除去し、コードの辞書順でソートして返す。
/// 未知の製品IDは何も寄与しない。
pub fn required_codes(selected_ids: &[&str]) -> Vec<char> {
    let mut codes = BTreeSet::new();
    for id in selected_ids {
        if let Some(line) = product(id) {
            codes.extend(line.requirements.iter().copied());
        }
    }
    codes.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_measurement_lookup() {
        let def = measurement('B').unwrap();
        assert_eq!(def.id, "chest");
        assert_eq!(def.label, "胸囲");
        assert!(measurement('Z').is_none());
    }

    #[test]
    fn test_measurement_by_id() {
        let def = measurement_by_id("waist").unwrap();
        assert_eq!(def.code, 'C');
        assert!(measurement_by_id("unknown").is_none());
    }

    #[test]
    fn test_product_lookup() {
        let line = product("tunic").unwrap();
        assert_eq!(line.name, "チュニック");
        assert!(product("unknown").is_none());
    }

    #[test]
    fn test_requirements_refer_to_defined_codes() {
        // 製品ラインの必要コードはすべてカタログに存在する
        for line in PRODUCT_LINES {
            for &code in line.requirements {
                assert!(measurement(code).is_some(), "{} の {} が未定義", line.id, code);
            }
        }
    }

    #[test]
    fn test_required_codes_single() {
        let codes = required_codes(&["tunic"]);
        assert_eq!(codes, vec!['B', 'C', 'D', 'E', 'G']);
    }

    #[test]
    fn test_required_codes_union_dedup() {
        // tunic {B,C,D,E,G} + hood {A,B} → Bは1回だけ
        let codes = required_codes(&["tunic", "hood"]);
        assert_eq!(codes, vec!['A', 'B', 'C', 'D', 'E', 'G']);
    }

    #[test]
    fn test_required_codes_order_independent() {
        assert_eq!(
            required_codes(&["hood", "tunic"]),
            required_codes(&["tunic", "hood"])
        );
    }

    #[test]
    fn test_required_codes_empty_selection() {
        assert!(required_codes(&[]).is_empty());
    }

    #[test]
    fn test_required_codes_unknown_product() {
        // 未知の製品IDは無視される
        let codes = required_codes(&["hood", "no-such-product"]);
        assert_eq!(codes, vec!['A', 'B']);
    }
}
