//! 採寸値の正規化
//!
//! ユーザー入力は自由テキストなので、数値部分を抽出してcm単位に正規化する。
//! 抽出できない入力は「未入力」と同じ扱いになる（エラーにはしない）。

use regex::Regex;

/// 入力テキストから採寸値を抽出（cm単位に正規化）
///
/// `"95"`, `"95.5"`, `"95,5"`, `"95 cm"`, `"950mm"`, `"0.95m"` を受け付ける。
/// 単位省略時はcmとみなす。
pub fn parse_value(text: &str) -> Option<f64> {
    lazy_static::lazy_static! {
        static ref VALUE_RE: Regex =
            Regex::new(r"^\s*(\d+(?:[.,]\d+)?)\s*(mm|cm|m)?\s*$").unwrap();
    }

    VALUE_RE.captures(text).and_then(|cap| {
        let value: f64 = cap[1].replace(',', ".").parse().ok()?;
        let unit = cap.get(2).map(|m| m.as_str()).unwrap_or("cm");
        Some(match unit {
            "mm" => value / 10.0,
            "m" => value * 100.0,
            _ => value, // cm
        })
    })
}

/// 入力テキストに採寸値が含まれているか
pub fn is_valid(text: &str) -> bool {
    parse_value(text).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_number() {
        assert_eq!(parse_value("95"), Some(95.0));
        assert_eq!(parse_value("95.5"), Some(95.5));
    }

    #[test]
    fn test_parse_comma_decimal() {
        assert_eq!(parse_value("95,5"), Some(95.5));
    }

    #[test]
    fn test_parse_with_unit() {
        assert_eq!(parse_value("95 cm"), Some(95.0));
        assert_eq!(parse_value("950mm"), Some(95.0));
        assert_eq!(parse_value("0.95m"), Some(95.0));
    }

    #[test]
    fn test_parse_with_whitespace() {
        assert_eq!(parse_value("  95  "), Some(95.0));
    }

    #[test]
    fn test_parse_invalid() {
        assert_eq!(parse_value(""), None);
        assert_eq!(parse_value("abc"), None);
        assert_eq!(parse_value("95x"), None);
        assert_eq!(parse_value("95 inch"), None);
    }

    #[test]
    fn test_is_valid() {
        assert!(is_valid("88"));
        assert!(!is_valid("不明"));
    }
}
