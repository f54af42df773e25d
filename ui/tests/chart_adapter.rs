//! End-to-end adapter behaviour across both backends.

use ui::charts::{
    adapt, present, to_native, to_web, CategoryDistribution, ChartError, ChartKind, ChartOutcome,
    ChartRenderer, ChartSeries, ChartSpec, ColorFill, NativeChartConfig, NativeChartPayload,
    NativeFrame, NativeRenderer, RenderPayload, WebChartOptions, WebRenderer, ACCENT,
};
use serde_json::json;
use ui::core::platform::Platform;

fn order_volume() -> ChartSpec {
    ChartSpec::line(
        "Order Volume Trends",
        ["Jan", "Feb", "Mar", "Apr", "May", "Jun"],
        ChartSeries::new("Order Volume", vec![20.0, 45.0, 28.0, 80.0, 99.0, 43.0]),
    )
}

fn inventory_share() -> ChartSpec {
    ChartSpec::pie(
        "Inventory Distribution",
        [
            CategoryDistribution::new("Electronics", 45.0, "#2563eb"),
            CategoryDistribution::new("Accessories", 28.0, "#eab308"),
            CategoryDistribution::new("Peripherals", 27.0, "#22c55e"),
        ],
    )
}

#[test]
fn line_chart_on_web_is_a_smooth_unfilled_line() {
    let payload = to_web(&order_volume(), &WebChartOptions::default()).unwrap();
    assert_eq!(payload.kind, ChartKind::Line);
    assert_eq!(payload.data.labels, ["Jan", "Feb", "Mar", "Apr", "May", "Jun"]);

    let dataset = &payload.data.datasets[0];
    assert_eq!(dataset.label.as_deref(), Some("Order Volume"));
    assert_eq!(dataset.data, [20.0, 45.0, 28.0, 80.0, 99.0, 43.0]);
    assert_eq!(dataset.fill, Some(false));
    assert_eq!(dataset.border_color.as_deref(), Some(ACCENT));
    assert_eq!(dataset.tension, Some(0.4));

    let json: serde_json::Value = serde_json::to_value(&payload).unwrap();
    assert_eq!(json["type"], "line");
    assert_eq!(json["options"]["maintainAspectRatio"], false);
    assert_eq!(json["options"]["plugins"]["legend"]["position"], "bottom");
    assert_eq!(json["options"]["scales"]["y"]["beginAtZero"], true);
}

#[test]
fn line_chart_on_native_is_a_bezier_in_a_fixed_frame() {
    let frame = NativeFrame {
        width: 343,
        height: 220,
    };
    let payload = to_native(&order_volume(), frame, &NativeChartConfig::default()).unwrap();
    let NativeChartPayload::Line(chart) = payload else {
        panic!("expected a line payload");
    };
    assert!(chart.bezier);
    assert_eq!((chart.width, chart.height), (343, 220));
    assert_eq!(chart.data.labels.len(), 6);
    assert_eq!(chart.data.datasets[0].data, [20.0, 45.0, 28.0, 80.0, 99.0, 43.0]);
    assert_eq!(chart.chart_config.color.at(1.0), "rgba(37, 99, 235, 1)");
}

#[test]
fn pie_keeps_declared_order_on_both_backends() {
    let spec = inventory_share();

    let web = to_web(&spec, &WebChartOptions::default()).unwrap();
    assert_eq!(web.data.labels, ["Electronics", "Accessories", "Peripherals"]);
    assert_eq!(web.data.datasets[0].data, [45.0, 28.0, 27.0]);
    assert_eq!(
        web.data.datasets[0].background_color,
        Some(ColorFill::PerSlice(vec![
            "#2563eb".into(),
            "#eab308".into(),
            "#22c55e".into()
        ]))
    );

    let native = to_native(&spec, NativeFrame::default(), &NativeChartConfig::default()).unwrap();
    let NativeChartPayload::Pie(chart) = native else {
        panic!("expected a pie payload");
    };
    let names: Vec<_> = chart.data.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, ["Electronics", "Accessories", "Peripherals"]);
    let colors: Vec<_> = chart.data.iter().map(|s| s.color.as_str()).collect();
    assert_eq!(colors, ["#2563eb", "#eab308", "#22c55e"]);
}

#[test]
fn adapting_twice_is_byte_identical() {
    for spec in [order_volume(), inventory_share()] {
        for platform in [Platform::Web, Platform::Native] {
            let first = adapt(&spec, platform).unwrap().to_json().unwrap();
            let second = adapt(&spec, platform).unwrap().to_json().unwrap();
            assert_eq!(first, second, "{platform} payload for {} drifted", spec.title);
        }
    }
}

#[test]
fn empty_series_still_yields_a_frame() {
    let spec = ChartSpec::bar(
        "Daily Shipments",
        ["Mon", "Tue", "Wed"],
        ChartSeries::new("Daily Shipments", Vec::new()),
    );
    assert!(spec.is_empty());

    let web = WebRenderer::default().adapt(&spec).unwrap();
    assert_eq!(web.platform(), Platform::Web);

    match NativeRenderer::default().adapt(&spec).unwrap() {
        RenderPayload::Native(NativeChartPayload::Bar(chart)) => {
            assert!(chart.data.datasets[0].data.is_empty());
            assert_eq!(chart.width, NativeFrame::default().width);
        }
        other => panic!("expected a native bar payload, got {other:?}"),
    }
}

#[test]
fn malformed_input_becomes_a_placeholder() {
    let spec = ChartSpec::line(
        "Order Volume Trends",
        ["Jan", "Feb", "Mar"],
        ChartSeries::new("Order Volume", vec![1.0, 2.0]),
    );
    let renderers: [&dyn ChartRenderer; 2] = [&WebRenderer::default(), &NativeRenderer::default()];
    for renderer in renderers {
        let outcome = present(renderer, &spec);
        assert!(!outcome.is_ready());
        let ChartOutcome::Unavailable { reason } = outcome else {
            unreachable!();
        };
        assert_eq!(reason, "series `Order Volume` has 2 values for 3 categories");
    }
}

#[test]
fn mismatched_shape_is_rejected() {
    let mut spec = inventory_share();
    spec.kind = ChartKind::Bar;
    assert_eq!(
        adapt(&spec, Platform::Web),
        Err(ChartError::DataShapeMismatch {
            kind: ChartKind::Bar,
            expected: "categories and a series",
        })
    );
}

#[test]
fn unknown_kind_is_unsupported() {
    assert_eq!(
        "radar".parse::<ChartKind>(),
        Err(ChartError::UnsupportedChartKind("radar".into()))
    );

    let err = serde_json::from_str::<ChartSpec>(
        r#"{ "kind": "radar", "title": "Spokes", "categories": ["a"], "series": { "label": "v", "values": [1] } }"#,
    )
    .unwrap_err();
    assert!(err.to_string().contains("unsupported chart kind `radar`"));
}

#[test]
fn spec_round_trips_from_json() {
    let spec: ChartSpec = serde_json::from_str(
        r##"{ "kind": "pie", "title": "Share", "distribution": [ { "name": "A", "value": 1, "color": "#000" } ] }"##,
    )
    .unwrap();
    assert_eq!(spec.kind, ChartKind::Pie);
    assert!(adapt(&spec, Platform::Native).is_ok());

    let err = serde_json::from_str::<ChartSpec>(
        r#"{ "kind": "PIE", "title": "Share", "distribution": [] }"#,
    )
    .unwrap_err();
    assert!(err.to_string().contains("unsupported chart kind `PIE`"));
}

const PHONE: NativeFrame = NativeFrame {
    width: 343,
    height: 220,
};

fn native_json(spec: &ChartSpec) -> serde_json::Value {
    let payload = to_native(spec, PHONE, &NativeChartConfig::default()).unwrap();
    let encoded = RenderPayload::Native(payload).to_json().unwrap();
    serde_json::from_str(&encoded).unwrap()
}

fn fixed_chart_config() -> serde_json::Value {
    json!({
        "backgroundColor": "#ffffff",
        "backgroundGradientFrom": "#ffffff",
        "backgroundGradientTo": "#ffffff",
        "decimalPlaces": 0,
        "color": { "r": 37, "g": 99, "b": 235 },
        "style": { "borderRadius": 16 },
    })
}

#[test]
fn native_line_payload_is_complete() {
    assert_eq!(
        native_json(&order_volume()),
        json!({
            "chart": "line",
            "data": {
                "labels": ["Jan", "Feb", "Mar", "Apr", "May", "Jun"],
                "datasets": [ { "data": [20.0, 45.0, 28.0, 80.0, 99.0, 43.0] } ],
            },
            "width": 343,
            "height": 220,
            "chartConfig": fixed_chart_config(),
            "bezier": true,
        })
    );
}

#[test]
fn native_pie_payload_is_complete() {
    let slice = |name: &str, population: f64, color: &str| {
        json!({
            "name": name,
            "population": population,
            "color": color,
            "legendFontColor": "#1e293b",
        })
    };
    assert_eq!(
        native_json(&inventory_share()),
        json!({
            "chart": "pie",
            "data": [
                slice("Electronics", 45.0, "#2563eb"),
                slice("Accessories", 28.0, "#eab308"),
                slice("Peripherals", 27.0, "#22c55e"),
            ],
            "width": 343,
            "height": 220,
            "chartConfig": fixed_chart_config(),
            "accessor": "population",
            "backgroundColor": "transparent",
            "paddingLeft": "15",
        })
    );
}
