use approx::assert_relative_eq;
use china_map::MapError;
use china_map::core::{Color, MapKey};
use china_map::view::{
    OverlayKind, TooltipTrigger, VIEW_CONFIGURATION_JSON_SCHEMA_V1, ViewConfiguration,
};
use serde_json::Value;

#[test]
fn css_colors_parse_into_normalized_channels() {
    let short = Color::parse_css("#fff").expect("short hex");
    assert_eq!(short, Color::WHITE);

    let hex = Color::parse_css("#84F670").expect("hex");
    assert_eq!((hex.red, hex.green, hex.blue), (0x84, 0xf6, 0x70));
    assert_relative_eq!(hex.alpha, 1.0);

    let rgba = Color::parse_css("rgba(37, 213, 94, 0.58)").expect("rgba");
    assert_eq!(rgba.green, 213);
    assert_relative_eq!(rgba.alpha, 0.58);
    assert_eq!(rgba.to_css(), "rgba(37,213,94,0.58)");

    assert_eq!(Color::parse_css("rgb(0,0,0)").expect("rgb"), Color::BLACK);
}

#[test]
fn malformed_css_colors_are_rejected() {
    for input in ["", "#12", "#gggggg", "rgba(1,2,3)", "rgba(1,2,3,1.5)", "red"] {
        assert!(
            matches!(Color::parse_css(input), Err(MapError::InvalidData(_))),
            "`{input}` should be rejected"
        );
    }
}

#[test]
fn national_preset_matches_component_defaults() {
    let config = ViewConfiguration::national();

    assert_eq!(config.map_key, MapKey::national());
    assert_eq!(config.title, "全国地图");
    assert_eq!(config.tooltip_trigger, TooltipTrigger::Item);
    assert!(config.roam);
    assert_relative_eq!(config.zoom, 1.1);
    assert_eq!(config.border_color.to_css(), "#ff5555");
    assert_eq!(config.hover_label_color.to_css(), "#ff4242");

    let visual_map = config.visual_map.as_ref().expect("visual map");
    assert_relative_eq!(visual_map.min, 100.0);
    assert_relative_eq!(visual_map.max, 10_000.0);

    let choropleth = config.choropleth.as_ref().expect("choropleth");
    let names: Vec<&str> = choropleth.values.iter().map(|v| v.name.as_str()).collect();
    assert_eq!(names, ["安徽省", "台湾省", "四川省"]);

    assert_eq!(config.overlays.len(), 2);
    assert_eq!(config.overlays[1].kind, OverlayKind::EffectScatter);
    assert_eq!(config.overlays[1].points[0].name, "济南市");
    config.validate().expect("preset validates");
}

#[test]
fn province_preset_is_plain_outline() {
    let config = ViewConfiguration::jiangxi();

    assert_eq!(config.map_key.as_str(), "江西省");
    assert_eq!(config.title, "用户注册区域展示");
    assert_eq!(config.border_color.to_css(), "#8b8b8b");
    assert!(config.visual_map.is_none());
    assert!(config.choropleth.is_none());
    assert!(config.overlays.is_empty());
    config.validate().expect("preset validates");
}

#[test]
fn contract_v1_round_trips_configuration() {
    let config = ViewConfiguration::jiangxi().with_zoom(2.5);
    let json = config.to_json_contract_v1_pretty().expect("serialize");

    let value: Value = serde_json::from_str(&json).expect("valid json");
    assert_eq!(value["schema_version"], VIEW_CONFIGURATION_JSON_SCHEMA_V1);
    assert_eq!(value["configuration"]["background"], "#ffffff");

    let parsed = ViewConfiguration::from_json_compat_str(&json).expect("parse contract");
    assert_eq!(parsed, config);
}

#[test]
fn contract_v1_preserves_arbitrary_colors() {
    let mut config = ViewConfiguration::national();
    config.default_fill = Color::rgba8(127, 128, 1, 1.0);
    config.hover_fill = Color::rgba8(3, 250, 99, 1.0 / 3.0);
    config.title_color = Color::rgba8(0, 0, 0, 0.0);
    if let Some(choropleth) = config.choropleth.as_mut() {
        choropleth.border_color = Color::rgba8(200, 17, 64, 0.125);
    }
    let json = config.to_json_contract_v1_pretty().expect("serialize");

    let parsed = ViewConfiguration::from_json_compat_str(&json).expect("parse contract");

    assert_eq!(parsed.default_fill, config.default_fill);
    assert_eq!(parsed.hover_fill, config.hover_fill);
    assert_eq!(parsed.title_color, config.title_color);
    assert_eq!(parsed.choropleth, config.choropleth);
}

#[test]
fn color_css_form_is_lossless() {
    for color in [
        Color::rgba8(0, 0, 0, 1.0),
        Color::rgba8(1, 2, 3, 0.1),
        Color::rgba8(254, 127, 128, 2.0 / 3.0),
        Color::rgba8(255, 255, 255, 0.0),
    ] {
        let css = color.to_css();
        assert_eq!(Color::parse_css(&css).expect("reparse"), color, "{css}");
    }
}

#[test]
fn out_of_range_alpha_fails_validation() {
    assert!(matches!(
        Color::rgba8(10, 20, 30, 1.5).validate(),
        Err(MapError::InvalidData(_))
    ));
    assert!(matches!(
        Color::rgba8(10, 20, 30, f64::NAN).validate(),
        Err(MapError::InvalidData(_))
    ));
}

#[test]
fn compat_parser_accepts_bare_configuration() {
    let config = ViewConfiguration::jiangxi();
    let bare = serde_json::to_string(&config).expect("serialize");

    let parsed = ViewConfiguration::from_json_compat_str(&bare).expect("parse bare");
    assert_eq!(parsed, config);
}

#[test]
fn compat_parser_rejects_unknown_schema_version() {
    let config = ViewConfiguration::jiangxi();
    let mut value: Value = serde_json::from_str(
        &config.to_json_contract_v1_pretty().expect("serialize"),
    )
    .expect("json");
    value["schema_version"] = Value::from(99);

    let result = ViewConfiguration::from_json_compat_str(&value.to_string());
    assert!(matches!(result, Err(MapError::InvalidData(_))));
}

#[test]
fn validation_rejects_out_of_range_overlay_point() {
    let mut config = ViewConfiguration::national();
    config.overlays[0].points[0].lat = 120.0;

    assert!(matches!(
        config.validate(),
        Err(MapError::InvalidConfiguration(_))
    ));
}

#[test]
fn validation_rejects_inverted_visual_map() {
    let mut config = ViewConfiguration::national();
    if let Some(visual_map) = config.visual_map.as_mut() {
        visual_map.min = 10_000.0;
        visual_map.max = 100.0;
    }

    assert!(matches!(
        config.validate(),
        Err(MapError::InvalidConfiguration(_))
    ));
}
