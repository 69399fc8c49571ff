//! エラーケーステスト
//!
//! 各種エラー条件でのエラーハンドリングを検証

use size_fit_rust::error::SizeFitError;
use size_fit_rust::table::SizeTable;
use std::path::Path;
use tempfile::tempdir;

/// 存在しないファイルを読み込んだ場合
#[test]
fn test_from_csv_nonexistent_file() {
    let result = SizeTable::from_csv(Path::new("/nonexistent/path/sizes.csv"));
    assert!(result.is_err());

    let err = result.unwrap_err();
    assert!(matches!(err, SizeFitError::FileNotFound(_)));
}

/// 読み込み失敗はload_or_emptyでは空の表に退避する
#[test]
fn test_load_or_empty_never_fails() {
    let table = SizeTable::load_or_empty(Path::new("/nonexistent/path/sizes.csv"));
    assert!(table.is_empty());
}

/// ヘッダーだけのCSVはエラーではなく空の表
#[test]
fn test_header_only_csv() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("sizes.csv");
    std::fs::write(&path, "product_id,size,chest_min,chest_max\n").unwrap();

    let table = SizeTable::from_csv(&path).unwrap();
    assert!(table.is_empty());
}

/// 必須列のないCSVはInvalidTable
#[test]
fn test_missing_columns_csv() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("sizes.csv");
    std::fs::write(&path, "foo,bar\n1,2\n").unwrap();

    let result = SizeTable::from_csv(&path);
    assert!(matches!(result, Err(SizeFitError::InvalidTable(_))));
}

/// SizeFitErrorのDisplay実装確認
#[test]
fn test_error_display() {
    let errors = vec![
        SizeFitError::Config("テスト設定エラー".to_string()),
        SizeFitError::FileNotFound("sizes.csv".to_string()),
        SizeFitError::InvalidTable("不正な表".to_string()),
        SizeFitError::UnknownProduct("no-such-product".to_string()),
        SizeFitError::UnknownCode("Z".to_string()),
        SizeFitError::Input("不正な入力".to_string()),
    ];

    for err in errors {
        let display = format!("{}", err);
        assert!(!display.is_empty(), "エラーメッセージが空: {:?}", err);
    }
}

/// エラーのDebug実装確認
#[test]
fn test_error_debug() {
    let err = SizeFitError::Config("テスト".to_string());
    let debug = format!("{:?}", err);
    assert!(debug.contains("Config"));
    assert!(debug.contains("テスト"));
}

/// io::Errorからの変換
#[test]
fn test_error_from_io() {
    let io_error = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
    let err: SizeFitError = io_error.into();
    assert!(matches!(err, SizeFitError::Io(_)));
}

/// serde_json::Errorからの変換
#[test]
fn test_error_from_json() {
    let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let err: SizeFitError = json_error.into();
    assert!(matches!(err, SizeFitError::JsonParse(_)));
}
