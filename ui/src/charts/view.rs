use dioxus::prelude::*;
use tracing::warn;

use super::payload::{NativeChartPayload, NativePieChart, NativeSeriesChart, RenderPayload};
use super::presenter::ChartPlaceholder;
use super::svg::{self, bar_rects, bezier_path, pie_slices};

/// Chart.js bundle loaded by shells that may pick the web backend.
pub const CHART_JS_SRC: &str = "https://cdn.jsdelivr.net/npm/chart.js@4.4.1/dist/chart.umd.min.js";

const WEB_CHART_HEIGHT: u32 = 220;

/// Status the mount script reports once the chart is drawn.
const MOUNTED: &str = "mounted";

#[component]
pub fn ChartView(payload: RenderPayload, dom_id: String) -> Element {
    match &payload {
        RenderPayload::Web(_) => match payload.to_json() {
            Ok(config) => rsx! {
                WebChartCanvas { config, dom_id }
            },
            Err(err) => {
                warn!(%dom_id, "failed to encode chart config: {err}");
                rsx! {
                    ChartPlaceholder { reason: err.to_string() }
                }
            }
        },
        RenderPayload::Native(native) => rsx! {
            NativeChart { payload: native.clone() }
        },
    }
}

#[component]
fn WebChartCanvas(config: String, dom_id: String) -> Element {
    let mut failed = use_signal(|| None::<String>);

    use_effect(use_reactive((&config, &dom_id), move |(config, dom_id)| {
        failed.set(None);
        let mut eval = document::eval(&mount_script(&dom_id, &config));
        spawn(async move {
            let outcome = match eval.recv::<String>().await {
                Ok(status) => mount_result(&status),
                Err(err) => Err(format!("{err:?}")),
            };
            if let Err(reason) = outcome {
                warn!(%dom_id, "chart failed to mount: {reason}");
                failed.set(Some(reason));
            }
        });
    }));

    if let Some(reason) = failed() {
        return rsx! {
            ChartPlaceholder { reason }
        };
    }

    rsx! {
        div {
            class: "chart-card chart-card--web",
            style: "height: {WEB_CHART_HEIGHT}px",
            canvas { id: "{dom_id}", role: "img" }
        }
    }
}

/// Maps the status sent back by [`mount_script`] to an outcome.
pub(crate) fn mount_result(status: &str) -> Result<(), String> {
    if status == MOUNTED {
        Ok(())
    } else {
        Err(status.to_string())
    }
}

/// Script that (re)creates a Chart.js instance on `dom_id`, waiting for the
/// bundle when it is still loading. An existing instance is destroyed first so
/// remounting never stacks charts. The outcome is sent back through the eval
/// channel: `mounted`, or the reason the chart could not be drawn.
pub(crate) fn mount_script(dom_id: &str, config_json: &str) -> String {
    format!(
        r#"(function mount(attempt) {{
  const el = document.getElementById("{dom_id}");
  if (!el || !window.Chart) {{
    if (attempt < 50) {{
      setTimeout(function () {{ mount(attempt + 1); }}, 100);
    }} else {{
      dioxus.send(el ? "Chart.js did not load" : "chart canvas is missing");
    }}
    return;
  }}
  try {{
    const existing = window.Chart.getChart(el);
    if (existing) existing.destroy();
    new window.Chart(el, {config_json});
    dioxus.send("{MOUNTED}");
  }} catch (err) {{
    dioxus.send(String(err && err.message ? err.message : err));
  }}
}})(0);"#
    )
}

#[component]
fn NativeChart(payload: NativeChartPayload) -> Element {
    match payload {
        NativeChartPayload::Line(chart) => render_series(&chart, true),
        NativeChartPayload::Bar(chart) => render_series(&chart, false),
        NativeChartPayload::Pie(chart) => render_pie(&chart),
    }
}

fn render_series(chart: &NativeSeriesChart, as_line: bool) -> Element {
    let values = chart
        .data
        .datasets
        .first()
        .map(|d| d.data.as_slice())
        .unwrap_or_default();
    let geometry = svg::series_geometry(
        &chart.data.labels,
        values,
        chart.width,
        chart.height,
        chart.chart_config.decimal_places,
    );
    let config = &chart.chart_config;
    let stroke = config.color.at(1.0);
    let guide = config.color.at(0.2);
    let label_color = config.color.at(0.8);
    let fill = config.color.at(0.6);
    let line_path = if as_line {
        bezier_path(&geometry.points)
    } else {
        None
    };
    let bars = if as_line {
        Vec::new()
    } else {
        bar_rects(&geometry)
    };
    let plot = geometry.plot;
    let x_label_y = plot.bottom + 20.0;
    let y_label_x = plot.left - 8.0;

    rsx! {
        svg {
            class: "chart-card chart-card--native",
            width: "{chart.width}",
            height: "{chart.height}",
            view_box: "0 0 {chart.width} {chart.height}",
            rect {
                width: "{chart.width}",
                height: "{chart.height}",
                rx: "{config.style.border_radius}",
                fill: "{config.background_color}",
            }
            for tick in geometry.y_ticks.iter() {
                line {
                    x1: "{plot.left}",
                    x2: "{plot.right}",
                    y1: "{tick.y:.2}",
                    y2: "{tick.y:.2}",
                    stroke: "{guide}",
                    stroke_dasharray: "5, 10",
                }
                text {
                    x: "{y_label_x}",
                    y: "{tick.y:.2}",
                    fill: "{label_color}",
                    font_size: "12",
                    text_anchor: "end",
                    dominant_baseline: "middle",
                    "{tick.label}"
                }
            }
            for tick in geometry.x_ticks.iter() {
                text {
                    x: "{tick.x:.2}",
                    y: "{x_label_y}",
                    fill: "{label_color}",
                    font_size: "12",
                    text_anchor: "middle",
                    "{tick.label}"
                }
            }
            for bar in bars.iter() {
                rect {
                    x: "{bar.x:.2}",
                    y: "{bar.y:.2}",
                    width: "{bar.width:.2}",
                    height: "{bar.height:.2}",
                    fill: "{fill}",
                }
            }
            if let Some(d) = line_path {
                path { d: "{d}", fill: "none", stroke: "{stroke}", stroke_width: "3" }
                for (x, y) in geometry.points.iter() {
                    circle { cx: "{x:.2}", cy: "{y:.2}", r: "4", fill: "{stroke}" }
                }
            }
        }
    }
}

fn render_pie(chart: &NativePieChart) -> Element {
    let padding_left: f64 = chart.padding_left.parse().unwrap_or(0.0);
    let height = f64::from(chart.height);
    let radius = (height / 2.0 - 12.0).max(8.0);
    let cx = padding_left + radius + 8.0;
    let cy = height / 2.0;
    let slices = pie_slices(&chart.data, cx, cy, radius);
    let legend_x = cx + radius + 24.0;
    let legend_text_x = legend_x + 14.0;
    let empty_stroke = chart.chart_config.color.at(0.2);
    let legend_top = cy - (slices.len() as f64 * 24.0) / 2.0 + 12.0;
    let legend_rows: Vec<(f64, _)> = slices
        .iter()
        .enumerate()
        .map(|(idx, slice)| (legend_top + idx as f64 * 24.0, slice))
        .collect();

    rsx! {
        svg {
            class: "chart-card chart-card--native",
            width: "{chart.width}",
            height: "{chart.height}",
            view_box: "0 0 {chart.width} {chart.height}",
            rect {
                width: "{chart.width}",
                height: "{chart.height}",
                rx: "{chart.chart_config.style.border_radius}",
                fill: "{chart.background_color}",
            }
            if slices.is_empty() {
                circle {
                    cx: "{cx:.2}",
                    cy: "{cy:.2}",
                    r: "{radius:.2}",
                    fill: "none",
                    stroke: "{empty_stroke}",
                }
            }
            for slice in slices.iter() {
                path { d: "{slice.path}", fill: "{slice.color}" }
            }
            for (y, slice) in legend_rows {
                circle { cx: "{legend_x:.2}", cy: "{y:.2}", r: "6", fill: "{slice.color}" }
                text {
                    x: "{legend_text_x:.2}",
                    y: "{y:.2}",
                    fill: "{slice.legend_color}",
                    font_size: "14",
                    dominant_baseline: "middle",
                    "{slice.legend}"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mount_script_targets_canvas_and_destroys_previous() {
        let js = mount_script("chart-line-trend", r#"{"type":"line"}"#);
        assert!(js.contains(r#"document.getElementById("chart-line-trend")"#));
        assert!(js.contains("existing.destroy()"));
        assert!(js.contains(r#"new window.Chart(el, {"type":"line"})"#));
    }

    #[test]
    fn mount_script_reports_every_outcome() {
        let js = mount_script("chart-bar-sales", "{}");
        assert!(js.contains(r#"dioxus.send("mounted")"#));
        assert!(js.contains(r#"dioxus.send(el ? "Chart.js did not load""#));
        assert!(js.contains("catch (err)"));
    }

    #[test]
    fn only_mounted_status_counts_as_success() {
        assert_eq!(mount_result(MOUNTED), Ok(()));
        assert_eq!(
            mount_result("Chart.js did not load"),
            Err("Chart.js did not load".to_string())
        );
        assert!(mount_result("").is_err());
    }
}
