//! Translation of a [`ChartSpec`] into the payload of each backend.
//!
//! Both functions validate first, so a payload only exists for a chart the
//! backend can draw. An empty series still produces a payload: the backend
//! draws its frame and nothing else.

use super::error::ChartResult;
use super::model::{ChartData, ChartKind, ChartSpec};
use super::payload::{
    ColorFill, NativeChartConfig, NativeChartPayload, NativeDataset, NativePieChart,
    NativePieSlice, NativeSeriesChart, NativeSeriesData, WebChartData, WebChartOptions,
    WebChartPayload, WebDataset, ACCENT, LEGEND_TEXT,
};

const LINE_TENSION: f64 = 0.4;

/// Fixed pixel box the native backend draws into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NativeFrame {
    pub width: u32,
    pub height: u32,
}

impl Default for NativeFrame {
    fn default() -> Self {
        // 375 pt phone width minus the 16 pt section padding on each side.
        Self {
            width: 343,
            height: 220,
        }
    }
}

pub fn to_web(spec: &ChartSpec, options: &WebChartOptions) -> ChartResult<WebChartPayload> {
    spec.validate()?;

    let data = match &spec.data {
        ChartData::Series { categories, series } => {
            let mut dataset = WebDataset::new(series.values.clone());
            dataset.label = Some(series.label.clone());
            match spec.kind {
                ChartKind::Line => {
                    dataset.fill = Some(false);
                    dataset.border_color = Some(ACCENT.to_string());
                    dataset.tension = Some(LINE_TENSION);
                }
                _ => {
                    dataset.background_color = Some(ColorFill::Solid(ACCENT.to_string()));
                }
            }
            WebChartData {
                labels: categories.clone(),
                datasets: vec![dataset],
            }
        }
        ChartData::Distribution { distribution } => {
            let mut dataset =
                WebDataset::new(distribution.iter().map(|slice| slice.value).collect());
            dataset.background_color = Some(ColorFill::PerSlice(
                distribution.iter().map(|slice| slice.color.clone()).collect(),
            ));
            WebChartData {
                labels: distribution.iter().map(|slice| slice.name.clone()).collect(),
                datasets: vec![dataset],
            }
        }
    };

    Ok(WebChartPayload {
        kind: spec.kind,
        data,
        options: options.clone(),
    })
}

pub fn to_native(
    spec: &ChartSpec,
    frame: NativeFrame,
    config: &NativeChartConfig,
) -> ChartResult<NativeChartPayload> {
    spec.validate()?;

    let payload = match &spec.data {
        ChartData::Series { categories, series } => {
            let chart = NativeSeriesChart {
                data: NativeSeriesData {
                    labels: categories.clone(),
                    datasets: vec![NativeDataset {
                        data: series.values.clone(),
                    }],
                },
                width: frame.width,
                height: frame.height,
                chart_config: config.clone(),
                bezier: spec.kind == ChartKind::Line,
                y_axis_label: (spec.kind == ChartKind::Bar).then(String::new),
            };
            if spec.kind == ChartKind::Line {
                NativeChartPayload::Line(chart)
            } else {
                NativeChartPayload::Bar(chart)
            }
        }
        ChartData::Distribution { distribution } => NativeChartPayload::Pie(NativePieChart {
            data: distribution
                .iter()
                .map(|slice| NativePieSlice {
                    name: slice.name.clone(),
                    population: slice.value,
                    color: slice.color.clone(),
                    legend_font_color: LEGEND_TEXT.to_string(),
                })
                .collect(),
            width: frame.width,
            height: frame.height,
            chart_config: config.clone(),
            accessor: "population".to_string(),
            background_color: "transparent".to_string(),
            padding_left: "15".to_string(),
        }),
    };

    Ok(payload)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::{CategoryDistribution, ChartError, ChartSeries};

    fn weekdays() -> Vec<&'static str> {
        vec!["Mon", "Tue", "Wed", "Thu", "Fri"]
    }

    #[test]
    fn bar_uses_solid_background_on_web() {
        let spec = ChartSpec::bar(
            "Daily Shipments",
            weekdays(),
            ChartSeries::new("Daily Shipments", vec![20.0, 45.0, 28.0, 80.0, 99.0]),
        );
        let payload = to_web(&spec, &WebChartOptions::default()).unwrap();
        let dataset = &payload.data.datasets[0];
        assert_eq!(dataset.label.as_deref(), Some("Daily Shipments"));
        assert_eq!(dataset.background_color, Some(ColorFill::Solid(ACCENT.into())));
        assert_eq!(dataset.tension, None);
        assert_eq!(payload.kind, ChartKind::Bar);
    }

    #[test]
    fn bar_on_native_carries_empty_axis_label() {
        let spec = ChartSpec::bar("Daily", weekdays(), ChartSeries::new("d", vec![1.0; 5]));
        let payload = to_native(&spec, NativeFrame::default(), &NativeChartConfig::default()).unwrap();
        match payload {
            NativeChartPayload::Bar(chart) => {
                assert_eq!(chart.y_axis_label.as_deref(), Some(""));
                assert!(!chart.bezier);
            }
            other => panic!("expected bar payload, got {other:?}"),
        }
    }

    #[test]
    fn native_pie_keeps_legend_color_and_accessor() {
        let spec = ChartSpec::pie("Share", [CategoryDistribution::new("A", 3.0, "#22c55e")]);
        let payload = to_native(&spec, NativeFrame::default(), &NativeChartConfig::default()).unwrap();
        let NativeChartPayload::Pie(chart) = payload else {
            panic!("expected pie payload");
        };
        assert_eq!(chart.accessor, "population");
        assert_eq!(chart.data[0].legend_font_color, LEGEND_TEXT);
        assert_eq!(chart.data[0].population, 3.0);
    }

    #[test]
    fn validation_runs_before_adaptation() {
        let spec = ChartSpec::line("Trend", weekdays(), ChartSeries::new("v", vec![1.0]));
        assert!(matches!(
            to_web(&spec, &WebChartOptions::default()),
            Err(ChartError::MalformedSeries { .. })
        ));
        assert!(matches!(
            to_native(&spec, NativeFrame::default(), &NativeChartConfig::default()),
            Err(ChartError::MalformedSeries { .. })
        ));
    }
}
