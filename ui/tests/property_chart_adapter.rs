use proptest::prelude::*;
use ui::charts::svg::{pie_slices, series_geometry};
use ui::charts::{
    adapt, to_native, to_web, CategoryDistribution, ChartError, ChartSeries, ChartSpec,
    NativeChartConfig, NativeChartPayload, NativeFrame, WebChartOptions,
};
use ui::core::platform::Platform;

fn labels(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("c{i}")).collect()
}

proptest! {
    #[test]
    fn series_survives_both_backends_unchanged(
        values in prop::collection::vec(0.0f64..10_000.0, 1..24)
    ) {
        let spec = ChartSpec::bar("Volume", labels(values.len()), ChartSeries::new("v", values.clone()));

        let web = to_web(&spec, &WebChartOptions::default()).expect("web payload");
        prop_assert_eq!(web.data.labels.len(), values.len());
        prop_assert_eq!(&web.data.datasets[0].data, &values);

        let native = to_native(&spec, NativeFrame::default(), &NativeChartConfig::default())
            .expect("native payload");
        match native {
            NativeChartPayload::Bar(chart) => prop_assert_eq!(&chart.data.datasets[0].data, &values),
            other => prop_assert!(false, "expected bar payload, got {:?}", other),
        }
    }

    #[test]
    fn length_mismatch_is_always_malformed(
        categories in 1usize..16,
        extra in 1usize..8
    ) {
        let values = vec![1.0; categories + extra];
        let spec = ChartSpec::line("Trend", labels(categories), ChartSeries::new("v", values));
        for platform in [Platform::Web, Platform::Native] {
            let is_malformed = matches!(
                adapt(&spec, platform),
                Err(ChartError::MalformedSeries { .. })
            );
            prop_assert!(is_malformed);
        }
    }

    #[test]
    fn projected_points_stay_inside_plot(
        values in prop::collection::vec(0.0f64..1_000.0, 1..32),
        width in 120u32..1200,
        height in 120u32..600
    ) {
        let geometry = series_geometry(&labels(values.len()), &values, width, height, 0);
        let plot = geometry.plot;
        for (x, y) in geometry.points {
            prop_assert!(x >= plot.left && x <= plot.right);
            prop_assert!(y >= plot.top - 1e-9 && y <= plot.bottom + 1e-9);
        }
    }

    #[test]
    fn pie_legends_follow_input_order(
        shares in prop::collection::vec(0.1f64..500.0, 1..8)
    ) {
        let distribution: Vec<_> = shares
            .iter()
            .enumerate()
            .map(|(i, value)| CategoryDistribution::new(format!("slice{i}"), *value, "#2563eb"))
            .collect();
        let spec = ChartSpec::pie("Share", distribution);
        let NativeChartPayload::Pie(chart) =
            to_native(&spec, NativeFrame::default(), &NativeChartConfig::default()).expect("pie")
        else {
            panic!("expected pie payload");
        };

        let slices = pie_slices(&chart.data, 100.0, 100.0, 80.0);
        prop_assert_eq!(slices.len(), shares.len());
        for (i, slice) in slices.iter().enumerate() {
            let suffix = format!(" slice{i}");
            prop_assert!(slice.legend.ends_with(&suffix));
        }
        let total: f64 = slices.iter().map(|s| s.percent).sum();
        prop_assert!((total - 100.0).abs() <= shares.len() as f64);
    }
}
