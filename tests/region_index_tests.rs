use china_map::MapError;
use china_map::core::{RegionCode, RegionNameIndex};

#[test]
fn builtin_index_covers_all_top_level_divisions() {
    let index = RegionNameIndex::china();

    assert_eq!(index.len(), 35);
    assert_eq!(index.lookup("江西省"), Some(RegionCode::new(360000)));
    assert_eq!(index.lookup("新疆维吾尔自治区"), Some(RegionCode::new(650000)));
    assert_eq!(index.lookup("澳门特别行政区"), Some(RegionCode::new(820000)));
    assert_eq!(index.lookup("中国"), Some(RegionCode::CHINA));
    assert_eq!(index.lookup("不存在的地名"), None);
    assert_eq!(index.lookup("江西"), None);
}

#[test]
fn builtin_index_is_shared_process_wide() {
    assert!(std::ptr::eq(RegionNameIndex::china(), RegionNameIndex::china()));
}

#[test]
fn reverse_lookup_returns_display_name() {
    let index = RegionNameIndex::china();
    assert_eq!(index.name_of(RegionCode::JIANGXI), Some("江西省"));
    assert_eq!(index.name_of(RegionCode::new(1)), None);
}

#[test]
fn region_code_displays_as_six_digits() {
    assert_eq!(RegionCode::new(360000).to_string(), "360000");
    assert_eq!(RegionCode::new(42).to_string(), "000042");
}

#[test]
fn custom_index_parses_from_json() {
    let index =
        RegionNameIndex::from_json_str(r#"{"江西省": 360000, "江西": 360000, "浙江省": 330000}"#)
            .expect("index");

    assert_eq!(index.len(), 3);
    assert_eq!(index.lookup("江西"), Some(RegionCode::JIANGXI));
    assert_eq!(index.name_of(RegionCode::JIANGXI), Some("江西省"));
}

#[test]
fn custom_index_rejects_empty_and_duplicate_names() {
    let empty = RegionNameIndex::from_entries([(" ", RegionCode::new(1))]);
    assert!(matches!(empty, Err(MapError::InvalidData(_))));

    let duplicate = RegionNameIndex::from_entries([
        ("江西省", RegionCode::new(360000)),
        ("江西省", RegionCode::new(360001)),
    ]);
    assert!(matches!(duplicate, Err(MapError::InvalidData(_))));

    let malformed = RegionNameIndex::from_json_str("[1, 2]");
    assert!(matches!(malformed, Err(MapError::InvalidData(_))));
}

#[test]
fn repeated_json_key_is_rejected_instead_of_overwritten() {
    let result = RegionNameIndex::from_json_str(r#"{"江西省": 360000, "江西省": 1}"#);
    assert!(matches!(result, Err(MapError::InvalidData(_))));
}

#[test]
fn direct_deserialization_applies_name_checks() {
    assert!(serde_json::from_str::<RegionNameIndex>(r#"{"": 1}"#).is_err());
    assert!(serde_json::from_str::<RegionNameIndex>(r#"{"浙江省": 330000, "浙江省": 330000}"#).is_err());

    let index: RegionNameIndex =
        serde_json::from_str(r#"{"浙江省": 330000}"#).expect("valid index");
    assert_eq!(index.lookup("浙江省"), Some(RegionCode::new(330000)));
}

#[test]
fn index_serializes_as_ordered_json_object() {
    let index = RegionNameIndex::from_entries([
        ("江西省", RegionCode::new(360000)),
        ("安徽省", RegionCode::new(340000)),
    ])
    .expect("index");

    let json = serde_json::to_string(&index).expect("serialize");
    assert_eq!(json, r#"{"江西省":360000,"安徽省":340000}"#);
    assert_eq!(RegionNameIndex::from_json_str(&json).expect("reparse"), index);
}
