use serde_json::{Map, Value, json};

use super::{
    ChoroplethSeries, MarkerShape, OverlayKind, OverlaySeries, TooltipTrigger, ViewConfiguration,
    VisualMapConfig,
};

impl ViewConfiguration {
    /// Renders this view as an ECharts option document.
    ///
    /// Geography goes into `geo` (index 0); the choropleth layer and overlays
    /// become `series` bound to it. Colors are emitted as CSS strings.
    #[must_use]
    pub fn to_echarts_option(&self) -> Value {
        let mut option = Map::new();
        option.insert("backgroundColor".to_owned(), json!(self.background.to_css()));
        option.insert(
            "title".to_owned(),
            json!({
                "top": self.title_top_px,
                "text": self.title,
                "subtext": self.subtitle,
                "left": "center",
                "textStyle": { "color": self.title_color.to_css() },
            }),
        );
        if let Some(trigger) = tooltip_trigger_name(self.tooltip_trigger) {
            option.insert("tooltip".to_owned(), json!({ "trigger": trigger }));
        }
        option.insert("geo".to_owned(), self.geo_component());
        if let Some(visual_map) = &self.visual_map {
            option.insert("visualMap".to_owned(), visual_map_component(visual_map));
        }

        let mut series = Vec::with_capacity(self.overlays.len() + 1);
        if let Some(choropleth) = &self.choropleth {
            series.push(choropleth_series(choropleth, self.map_key.as_str(), self.roam));
        }
        series.extend(self.overlays.iter().map(overlay_series));
        option.insert("series".to_owned(), Value::Array(series));

        Value::Object(option)
    }

    fn geo_component(&self) -> Value {
        json!({
            "map": self.map_key.as_str(),
            "roam": self.roam,
            "zoom": self.zoom,
            "label": {
                "show": self.label_visible,
                "color": self.label_color.to_css(),
            },
            "itemStyle": {
                "areaColor": self.default_fill.to_css(),
                "borderColor": self.border_color.to_css(),
            },
            "emphasis": {
                "label": { "color": self.hover_label_color.to_css() },
                "itemStyle": { "areaColor": self.hover_fill.to_css() },
            },
        })
    }
}

fn tooltip_trigger_name(trigger: TooltipTrigger) -> Option<&'static str> {
    match trigger {
        TooltipTrigger::Item => Some("item"),
        TooltipTrigger::Axis => Some("axis"),
        TooltipTrigger::None => None,
    }
}

fn marker_shape_name(shape: MarkerShape) -> &'static str {
    match shape {
        MarkerShape::Circle => "circle",
        MarkerShape::Rect => "rect",
        MarkerShape::RoundRect => "roundRect",
        MarkerShape::Triangle => "triangle",
        MarkerShape::Diamond => "diamond",
        MarkerShape::Pin => "pin",
        MarkerShape::Arrow => "arrow",
    }
}

fn visual_map_component(visual_map: &VisualMapConfig) -> Value {
    json!({
        "right": visual_map.right_px,
        "bottom": visual_map.bottom_px,
        "min": visual_map.min,
        "max": visual_map.max,
        "inRange": {
            "color": [visual_map.low_color.to_css(), visual_map.high_color.to_css()],
        },
        "text": [visual_map.high_text, visual_map.low_text],
        "calculable": visual_map.calculable,
    })
}

fn choropleth_series(series: &ChoroplethSeries, map: &str, roam: bool) -> Value {
    let data: Vec<Value> = series
        .values
        .iter()
        .map(|entry| json!({ "name": entry.name, "value": entry.value }))
        .collect();
    let hover_style = json!({
        "areaColor": series.hover_fill.to_css(),
        "borderWidth": series.hover_border_width,
    });
    let selected_style = json!({
        "areaColor": series.selected_fill.to_css(),
        "borderWidth": series.hover_border_width,
    });
    json!({
        "type": "map",
        "name": series.name,
        "map": map,
        "geoIndex": 0,
        "roam": roam,
        "data": data,
        "itemStyle": {
            "areaColor": series.fill.to_css(),
            "borderColor": series.border_color.to_css(),
        },
        "emphasis": { "itemStyle": hover_style },
        "select": { "itemStyle": selected_style },
        "label": {
            "show": series.label_visible,
            "fontSize": series.label_font_size,
            "fontWeight": series.label_font_weight,
            "color": series.label_color.to_css(),
        },
    })
}

fn overlay_series(series: &OverlaySeries) -> Value {
    let kind = match series.kind {
        OverlayKind::Scatter => "scatter",
        OverlayKind::EffectScatter => "effectScatter",
    };
    let data: Vec<Value> = series
        .points
        .iter()
        .map(|point| {
            json!({
                "name": point.name,
                "value": [point.lng, point.lat, point.value],
                "label": { "formatter": series.label.format(point.value) },
            })
        })
        .collect();
    json!({
        "type": kind,
        "name": series.name,
        "coordinateSystem": "geo",
        "symbol": marker_shape_name(series.shape),
        "symbolSize": series.size,
        "label": {
            "show": true,
            "fontSize": series.label_font_size,
            "fontWeight": series.label_font_weight,
            "color": series.label_color.to_css(),
        },
        "data": data,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn national_option_binds_series_to_geo() {
        let option = ViewConfiguration::national().to_echarts_option();

        assert_eq!(option["geo"]["map"], "china");
        assert_eq!(option["tooltip"]["trigger"], "item");
        assert_eq!(option["visualMap"]["text"], json!(["高", "低"]));

        let series = option["series"].as_array().expect("series array");
        assert_eq!(series.len(), 3);
        assert_eq!(series[0]["type"], "map");
        assert_eq!(series[0]["itemStyle"]["borderColor"], "rgba(37,213,94,0.58)");
        assert_eq!(series[1]["symbol"], "diamond");
        assert_eq!(series[1]["data"][0]["label"]["formatter"], "¥");
        assert_eq!(series[2]["type"], "effectScatter");
    }

    #[test]
    fn province_option_omits_tooltip_and_data_layers() {
        let option = ViewConfiguration::jiangxi().to_echarts_option();

        assert_eq!(option["geo"]["map"], "江西省");
        assert!(option.get("tooltip").is_none());
        assert!(option.get("visualMap").is_none());
        assert_eq!(option["series"], json!([]));
    }
}
