//! Immutable per-scope rendering configuration.
//!
//! A [`ViewConfiguration`] is handed to the chart surface unchanged; the only
//! behavior attached to it is validation and export into engine formats.

mod echarts;
mod json_contract;
mod presets;

pub use json_contract::{VIEW_CONFIGURATION_JSON_SCHEMA_V1, ViewConfigurationJsonContractV1};

use serde::{Deserialize, Serialize};

use crate::core::{Color, MapKey};
use crate::error::{MapError, MapResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TooltipTrigger {
    #[default]
    Item,
    Axis,
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkerShape {
    #[default]
    Circle,
    Rect,
    RoundRect,
    Triangle,
    Diamond,
    Pin,
    Arrow,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverlayKind {
    #[default]
    Scatter,
    /// Scatter with a ripple animation around each marker.
    EffectScatter,
}

/// Continuous color scale mapping region values to fills.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisualMapConfig {
    pub min: f64,
    pub max: f64,
    pub low_color: Color,
    pub high_color: Color,
    pub high_text: String,
    pub low_text: String,
    pub calculable: bool,
    pub right_px: f64,
    pub bottom_px: f64,
}

/// Magnitude attached to one named feature of the map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionValue {
    pub name: String,
    pub value: f64,
}

impl RegionValue {
    #[must_use]
    pub fn new(name: impl Into<String>, value: f64) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// Choropleth data layer drawn over the base geography.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChoroplethSeries {
    pub name: String,
    pub values: Vec<RegionValue>,
    pub fill: Color,
    pub border_color: Color,
    pub hover_fill: Color,
    pub selected_fill: Color,
    pub hover_border_width: f64,
    pub label_visible: bool,
    pub label_font_size: f64,
    pub label_font_weight: u16,
    pub label_color: Color,
}

/// Text shown next to an overlay marker.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct OverlayLabelFormat {
    pub prefix: String,
    #[serde(default)]
    pub include_value: bool,
}

impl OverlayLabelFormat {
    #[must_use]
    pub fn prefix_only(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            include_value: false,
        }
    }

    #[must_use]
    pub fn format(&self, value: f64) -> String {
        if self.include_value {
            format!("{}{value}", self.prefix)
        } else {
            self.prefix.clone()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverlayPoint {
    pub name: String,
    pub lng: f64,
    pub lat: f64,
    pub value: f64,
}

impl OverlayPoint {
    #[must_use]
    pub fn new(name: impl Into<String>, lng: f64, lat: f64, value: f64) -> Self {
        Self {
            name: name.into(),
            lng,
            lat,
            value,
        }
    }
}

/// Point markers placed on the geographic coordinate system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverlaySeries {
    pub name: String,
    pub kind: OverlayKind,
    pub shape: MarkerShape,
    pub size: f64,
    pub label: OverlayLabelFormat,
    pub label_font_size: f64,
    pub label_font_weight: u16,
    pub label_color: Color,
    pub points: Vec<OverlayPoint>,
}

/// Everything a surface needs to render one map scope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewConfiguration {
    /// Boundary dataset this view draws.
    pub map_key: MapKey,
    pub background: Color,
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    pub title_top_px: f64,
    pub title_color: Color,
    #[serde(default)]
    pub tooltip_trigger: TooltipTrigger,
    /// Enables mouse pan and zoom.
    pub roam: bool,
    pub zoom: f64,
    pub default_fill: Color,
    pub border_color: Color,
    pub hover_fill: Color,
    pub label_visible: bool,
    pub label_color: Color,
    pub hover_label_color: Color,
    #[serde(default)]
    pub visual_map: Option<VisualMapConfig>,
    #[serde(default)]
    pub choropleth: Option<ChoroplethSeries>,
    #[serde(default)]
    pub overlays: Vec<OverlaySeries>,
}

impl ViewConfiguration {
    /// Plain outline view of one boundary dataset, no data layers.
    #[must_use]
    pub fn outline(map_key: MapKey, title: impl Into<String>) -> Self {
        Self {
            map_key,
            background: Color::WHITE,
            title: title.into(),
            subtitle: String::new(),
            title_top_px: 20.0,
            title_color: Color::BLACK,
            tooltip_trigger: TooltipTrigger::Item,
            roam: true,
            zoom: 1.1,
            default_fill: Color::rgba8(0xee, 0xee, 0xee, 1.0),
            border_color: Color::rgba8(0x8b, 0x8b, 0x8b, 1.0),
            hover_fill: Color::WHITE,
            label_visible: true,
            label_color: Color::BLACK,
            hover_label_color: Color::BLACK,
            visual_map: None,
            choropleth: None,
            overlays: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    #[must_use]
    pub fn with_zoom(mut self, zoom: f64) -> Self {
        self.zoom = zoom;
        self
    }

    #[must_use]
    pub fn with_roam(mut self, roam: bool) -> Self {
        self.roam = roam;
        self
    }

    #[must_use]
    pub fn with_tooltip_trigger(mut self, trigger: TooltipTrigger) -> Self {
        self.tooltip_trigger = trigger;
        self
    }

    #[must_use]
    pub fn with_visual_map(mut self, visual_map: VisualMapConfig) -> Self {
        self.visual_map = Some(visual_map);
        self
    }

    #[must_use]
    pub fn with_choropleth(mut self, series: ChoroplethSeries) -> Self {
        self.choropleth = Some(series);
        self
    }

    #[must_use]
    pub fn with_overlay(mut self, series: OverlaySeries) -> Self {
        self.overlays.push(series);
        self
    }

    pub fn validate(&self) -> MapResult<()> {
        if self.map_key.as_str().trim().is_empty() {
            return Err(invalid("map key must not be empty"));
        }
        for color in [
            self.background,
            self.title_color,
            self.default_fill,
            self.border_color,
            self.hover_fill,
            self.label_color,
            self.hover_label_color,
        ] {
            color.validate()?;
        }
        if !self.title_top_px.is_finite() {
            return Err(invalid("title offset must be finite"));
        }
        if !self.zoom.is_finite() || self.zoom <= 0.0 {
            return Err(invalid("zoom must be finite and > 0"));
        }
        if let Some(visual_map) = &self.visual_map {
            validate_visual_map(visual_map)?;
        }
        if let Some(series) = &self.choropleth {
            validate_choropleth(series)?;
        }
        for series in &self.overlays {
            validate_overlay(series)?;
        }
        Ok(())
    }
}

fn invalid(message: &str) -> MapError {
    MapError::InvalidConfiguration(message.to_owned())
}

fn validate_visual_map(visual_map: &VisualMapConfig) -> MapResult<()> {
    if !visual_map.min.is_finite() || !visual_map.max.is_finite() {
        return Err(invalid("visual map bounds must be finite"));
    }
    if visual_map.min >= visual_map.max {
        return Err(invalid("visual map min must be < max"));
    }
    if !visual_map.right_px.is_finite() || !visual_map.bottom_px.is_finite() {
        return Err(invalid("visual map offsets must be finite"));
    }
    visual_map.low_color.validate()?;
    visual_map.high_color.validate()
}

fn validate_choropleth(series: &ChoroplethSeries) -> MapResult<()> {
    for color in [
        series.fill,
        series.border_color,
        series.hover_fill,
        series.selected_fill,
        series.label_color,
    ] {
        color.validate()?;
    }
    if !series.hover_border_width.is_finite() || series.hover_border_width < 0.0 {
        return Err(invalid("hover border width must be finite and >= 0"));
    }
    if !series.label_font_size.is_finite() || series.label_font_size <= 0.0 {
        return Err(invalid("label font size must be finite and > 0"));
    }
    if let Some(entry) = series.values.iter().find(|entry| !entry.value.is_finite()) {
        return Err(MapError::InvalidConfiguration(format!(
            "region value for `{}` must be finite",
            entry.name
        )));
    }
    Ok(())
}

fn validate_overlay(series: &OverlaySeries) -> MapResult<()> {
    series.label_color.validate()?;
    if !series.size.is_finite() || series.size <= 0.0 {
        return Err(MapError::InvalidConfiguration(format!(
            "overlay `{}` marker size must be finite and > 0",
            series.name
        )));
    }
    if !series.label_font_size.is_finite() || series.label_font_size <= 0.0 {
        return Err(invalid("label font size must be finite and > 0"));
    }
    for point in &series.points {
        let in_range = point.lng.is_finite()
            && point.lat.is_finite()
            && (-180.0..=180.0).contains(&point.lng)
            && (-90.0..=90.0).contains(&point.lat);
        if !in_range {
            return Err(MapError::InvalidConfiguration(format!(
                "overlay point `{}` has out-of-range coordinates ({}, {})",
                point.name, point.lng, point.lat
            )));
        }
        if !point.value.is_finite() {
            return Err(MapError::InvalidConfiguration(format!(
                "overlay point `{}` value must be finite",
                point.name
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_format_appends_value_only_when_requested() {
        let bare = OverlayLabelFormat::prefix_only("¥");
        assert_eq!(bare.format(6000.0), "¥");

        let with_value = OverlayLabelFormat {
            prefix: "$".to_owned(),
            include_value: true,
        };
        assert_eq!(with_value.format(9000.0), "$9000");
    }

    #[test]
    fn outline_rejects_non_positive_zoom() {
        let config = ViewConfiguration::outline(MapKey::national(), "x").with_zoom(0.0);
        assert!(matches!(
            config.validate(),
            Err(MapError::InvalidConfiguration(_))
        ));
    }
}
