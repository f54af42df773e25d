//! Backend-facing payload shapes.
//!
//! Field names follow the camelCase contracts of the two chart backends so a
//! payload can be handed over as JSON without any further mapping.

use serde::Serialize;

use crate::core::platform::Platform;

use super::error::{ChartError, ChartResult};
use super::model::ChartKind;

/// Accent used for single-series charts on both backends.
pub const ACCENT: &str = "#2563eb";
/// Legend text color for native pie slices.
pub const LEGEND_TEXT: &str = "#1e293b";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum RenderPayload {
    Web(WebChartPayload),
    Native(NativeChartPayload),
}

impl RenderPayload {
    pub fn platform(&self) -> Platform {
        match self {
            RenderPayload::Web(_) => Platform::Web,
            RenderPayload::Native(_) => Platform::Native,
        }
    }

    pub fn to_json(&self) -> ChartResult<String> {
        serde_json::to_string(self).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize chart payload: {e}"))
        })
    }
}

// ---------------------------------------------------------------------------
// Web (Chart.js style)
// ---------------------------------------------------------------------------

/// Complete `new Chart(canvas, config)` configuration.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WebChartPayload {
    #[serde(rename = "type")]
    pub kind: ChartKind,
    pub data: WebChartData,
    pub options: WebChartOptions,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WebChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<WebDataset>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WebDataset {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub data: Vec<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tension: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<ColorFill>,
}

impl WebDataset {
    pub fn new(data: Vec<f64>) -> Self {
        Self {
            label: None,
            data,
            fill: None,
            border_color: None,
            tension: None,
            background_color: None,
        }
    }
}

/// Chart.js accepts either one color for the whole dataset or one per point.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ColorFill {
    Solid(String),
    PerSlice(Vec<String>),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WebChartOptions {
    pub responsive: bool,
    pub maintain_aspect_ratio: bool,
    pub plugins: WebPlugins,
    pub scales: WebScales,
}

impl Default for WebChartOptions {
    fn default() -> Self {
        Self {
            responsive: true,
            maintain_aspect_ratio: false,
            plugins: WebPlugins {
                legend: WebLegend {
                    position: "bottom",
                },
            },
            scales: WebScales {
                y: WebAxis {
                    begin_at_zero: true,
                },
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WebPlugins {
    pub legend: WebLegend,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WebLegend {
    pub position: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WebScales {
    pub y: WebAxis,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WebAxis {
    pub begin_at_zero: bool,
}

// ---------------------------------------------------------------------------
// Native (chart-kit style)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "chart", rename_all = "lowercase")]
pub enum NativeChartPayload {
    Line(NativeSeriesChart),
    Bar(NativeSeriesChart),
    Pie(NativePieChart),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NativeSeriesChart {
    pub data: NativeSeriesData,
    pub width: u32,
    pub height: u32,
    pub chart_config: NativeChartConfig,
    pub bezier: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y_axis_label: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NativeSeriesData {
    pub labels: Vec<String>,
    pub datasets: Vec<NativeDataset>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NativeDataset {
    pub data: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NativePieChart {
    pub data: Vec<NativePieSlice>,
    pub width: u32,
    pub height: u32,
    pub chart_config: NativeChartConfig,
    pub accessor: String,
    pub background_color: String,
    pub padding_left: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NativePieSlice {
    pub name: String,
    pub population: f64,
    pub color: String,
    pub legend_font_color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NativeChartConfig {
    pub background_color: String,
    pub background_gradient_from: String,
    pub background_gradient_to: String,
    pub decimal_places: u8,
    pub color: ColorRamp,
    pub style: NativeChartStyle,
}

impl Default for NativeChartConfig {
    fn default() -> Self {
        Self {
            background_color: "#ffffff".to_string(),
            background_gradient_from: "#ffffff".to_string(),
            background_gradient_to: "#ffffff".to_string(),
            decimal_places: 0,
            color: ColorRamp::ACCENT,
            style: NativeChartStyle { border_radius: 16 },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NativeChartStyle {
    pub border_radius: u32,
}

/// Opacity-driven color function of the native backend, kept as data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ColorRamp {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl ColorRamp {
    pub const ACCENT: ColorRamp = ColorRamp {
        r: 37,
        g: 99,
        b: 235,
    };

    pub fn at(&self, opacity: f64) -> String {
        let opacity = opacity.clamp(0.0, 1.0);
        format!("rgba({}, {}, {}, {opacity})", self.r, self.g, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn color_ramp_matches_native_format() {
        assert_eq!(ColorRamp::ACCENT.at(1.0), "rgba(37, 99, 235, 1)");
        assert_eq!(ColorRamp::ACCENT.at(0.2), "rgba(37, 99, 235, 0.2)");
        assert_eq!(ColorRamp::ACCENT.at(3.0), "rgba(37, 99, 235, 1)");
    }

    #[test]
    fn default_web_options_serialize_to_backend_names() {
        let value = serde_json::to_value(WebChartOptions::default()).unwrap();
        assert_eq!(
            value,
            json!({
                "responsive": true,
                "maintainAspectRatio": false,
                "plugins": { "legend": { "position": "bottom" } },
                "scales": { "y": { "beginAtZero": true } },
            })
        );
    }

    #[test]
    fn unset_dataset_fields_are_omitted() {
        let value = serde_json::to_value(WebDataset::new(vec![1.5])).unwrap();
        assert_eq!(value, json!({ "data": [1.5] }));
    }
}
