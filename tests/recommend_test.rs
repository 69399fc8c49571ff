//! サイズ推奨の結合テスト
//!
//! サイズ表の読み込みから照合・フィット感評価までを通しで検証

use size_fit_rust::scale::{FitCategory, FitScale};
use size_fit_rust::{Session, SizeTable, match_size};
use tempfile::tempdir;

const DEMO_CSV: &str = "\
product_id,size,chest_min,chest_max,waist_min,waist_max
classic-shirt,S,82,89,70,78
classic-shirt,M,90,100,79,88
classic-shirt,L,101,110,89,98
slim-shirt,M,88,96,75,83
";

#[test]
fn test_recommend_from_file() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("sizes.csv");
    std::fs::write(&path, DEMO_CSV).unwrap();

    let table = SizeTable::from_csv(&path).unwrap();
    assert_eq!(table.len(), 4);

    let session = Session::new()
        .toggle_product("classic-shirt")
        .with_measurement('B', "95")
        .with_measurement('C', "85");

    let outcome = match_size(
        &table,
        "classic-shirt",
        "chest",
        session.measurement_for_dimension("chest"),
    );
    let row = outcome.row().expect("一致するはず");
    assert_eq!(row.size, "M");

    // 一致した行の各寸法についてフィット感を評価できる
    let chest = FitScale::evaluate(row, "chest", "95").unwrap();
    assert_eq!(chest.position, 50.0);
    assert_eq!(chest.category, FitCategory::Ideal);

    let waist = FitScale::evaluate(row, "waist", "85").unwrap();
    assert_eq!(waist.category, FitCategory::Ideal);
}

#[test]
fn test_recommend_custom_fit() {
    let table = SizeTable::from_csv_str(DEMO_CSV).unwrap();

    // 範囲外の採寸値はオーダーメイド案内
    let outcome = match_size(&table, "classic-shirt", "chest", Some("150"));
    assert!(outcome.is_custom_fit());
}

#[test]
fn test_recommend_waits_for_primary_dimension() {
    let table = SizeTable::from_csv_str(DEMO_CSV).unwrap();
    let session = Session::new()
        .toggle_product("classic-shirt")
        .with_measurement('C', "85"); // 胴囲だけでは照合しない

    let outcome = match_size(
        &table,
        "classic-shirt",
        "chest",
        session.measurement_for_dimension("chest"),
    );
    assert!(outcome.is_custom_fit());
}

#[test]
fn test_products_share_table_but_not_rows() {
    let table = SizeTable::from_csv_str(DEMO_CSV).unwrap();

    // 同じ採寸値でも製品ごとに行が異なる
    let classic = match_size(&table, "classic-shirt", "chest", Some("95"));
    assert_eq!(classic.row().unwrap().size, "M");

    let slim = match_size(&table, "slim-shirt", "chest", Some("95"));
    assert_eq!(slim.row().unwrap().size, "M");
    assert_eq!(slim.row().unwrap().product_id, "slim-shirt");
}

#[test]
fn test_secondary_dimension_out_of_range_shows_on_scale() {
    // 副次寸法は照合には使わないがスケールでは範囲外と出る
    let table = SizeTable::from_csv_str(DEMO_CSV).unwrap();
    let outcome = match_size(&table, "classic-shirt", "chest", Some("95"));
    let row = outcome.row().unwrap();

    let waist = FitScale::evaluate(row, "waist", "120").unwrap();
    assert_eq!(waist.category, FitCategory::TooSmall);
    assert!(waist.category.is_out_of_range());
    // 表示位置はクランプされる
    assert_eq!(waist.display_position(), 102.0);
}

#[test]
fn test_bundled_demo_table() {
    // 同梱のdata/sizes.csvがそのまま読めること
    let table = SizeTable::from_csv(std::path::Path::new("data/sizes.csv")).unwrap();
    assert!(!table.is_empty());
    assert!(table.product_ids().contains(&"classic-shirt"));
    assert_eq!(table.dimensions(), vec!["chest", "waist"]);

    let outcome = match_size(&table, "classic-shirt", "chest", Some("95"));
    assert_eq!(outcome.row().unwrap().size, "M");
}
