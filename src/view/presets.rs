use crate::core::{Color, MapKey, RegionCode, RegionNameIndex};
use crate::error::{MapError, MapResult};

use super::{
    ChoroplethSeries, MarkerShape, OverlayKind, OverlayLabelFormat, OverlayPoint, OverlaySeries,
    RegionValue, TooltipTrigger, ViewConfiguration, VisualMapConfig,
};

fn label_grey() -> Color {
    Color::rgba8(0x48, 0x48, 0x48, 1.0)
}

impl ViewConfiguration {
    /// National choropleth with the registration heat scale and city markers.
    #[must_use]
    pub fn national() -> Self {
        let mut config = Self::outline(MapKey::national(), "全国地图");
        config.border_color = Color::rgba8(0xff, 0x55, 0x55, 1.0);
        config.hover_label_color = Color::rgba8(0xff, 0x42, 0x42, 1.0);

        config
            .with_visual_map(VisualMapConfig {
                min: 100.0,
                max: 10_000.0,
                low_color: Color::rgba8(0x84, 0xf6, 0x70, 1.0),
                high_color: Color::rgba8(0xff, 0x42, 0x60, 1.0),
                high_text: "高".to_owned(),
                low_text: "低".to_owned(),
                calculable: true,
                right_px: 20.0,
                bottom_px: 20.0,
            })
            .with_choropleth(ChoroplethSeries {
                name: "mapName".to_owned(),
                values: vec![
                    RegionValue::new("安徽省", 2000.0),
                    RegionValue::new("台湾省", 5000.0),
                    RegionValue::new("四川省", 8000.0),
                ],
                fill: Color::rgba8(0x45, 0x9b, 0xd0, 1.0),
                border_color: Color::rgba8(37, 213, 94, 0.58),
                hover_fill: Color::rgba8(0x90, 0xea, 0xff, 1.0),
                selected_fill: Color::rgba8(0x90, 0xea, 0xff, 1.0),
                hover_border_width: 2.0,
                label_visible: true,
                label_font_size: 12.0,
                label_font_weight: 400,
                label_color: label_grey(),
            })
            .with_overlay(OverlaySeries {
                name: "scatterName".to_owned(),
                kind: OverlayKind::Scatter,
                shape: MarkerShape::Diamond,
                size: 20.0,
                label: OverlayLabelFormat::prefix_only("¥"),
                label_font_size: 12.0,
                label_font_weight: 400,
                label_color: label_grey(),
                points: vec![OverlayPoint::new("哈尔滨市", 126.642464, 45.756967, 6000.0)],
            })
            .with_overlay(OverlaySeries {
                name: "effectScatterName".to_owned(),
                kind: OverlayKind::EffectScatter,
                shape: MarkerShape::Circle,
                size: 15.0,
                label: OverlayLabelFormat::prefix_only("$"),
                label_font_size: 12.0,
                label_font_weight: 400,
                label_color: label_grey(),
                points: vec![OverlayPoint::new("济南市", 117.000923, 36.675807, 9000.0)],
            })
    }

    /// Outline view of a single province registered under `map_key`.
    #[must_use]
    pub fn province_outline(map_key: MapKey, title: impl Into<String>) -> Self {
        Self::outline(map_key, title).with_tooltip_trigger(TooltipTrigger::None)
    }

    /// Province outline keyed by the first display name `index` lists for `code`.
    pub fn province(code: RegionCode, index: &RegionNameIndex, title: &str) -> MapResult<Self> {
        let name = index
            .name_of(code)
            .ok_or_else(|| MapError::UnknownRegion(code.to_string()))?;
        Ok(Self::province_outline(MapKey::new(name)?, title))
    }

    /// Drill-down view of 江西省 showing user registration areas.
    #[must_use]
    pub fn jiangxi() -> Self {
        Self::province_outline(MapKey::from_static("江西省"), "用户注册区域展示")
    }
}
