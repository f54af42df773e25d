use dioxus::prelude::*;

use crate::charts::{ChartPanel, ChartSeries, ChartSpec};
use crate::core::format::{
    format_change, format_count, format_currency, format_currency_compact, format_percent,
};
use crate::data::{Kpi, Repositories, StatCard, StatValue};
use crate::t;

use super::use_lang_marker;

fn kpi_label(kpi: Kpi) -> String {
    match kpi {
        Kpi::TotalOrders => t!("kpi-total-orders"),
        Kpi::Revenue => t!("kpi-revenue"),
        Kpi::AvgOrderValue => t!("kpi-avg-order-value"),
        Kpi::ReturnRate => t!("kpi-return-rate"),
    }
}

pub(crate) fn stat_value_text(value: StatValue) -> String {
    match value {
        StatValue::Count(n) => format_count(n),
        StatValue::Currency(v) => format_currency(v),
        StatValue::CompactCurrency(v) => format_currency_compact(v),
        StatValue::Percent(v) => format_percent(v),
    }
}

/// One KPI card, already localized and formatted.
struct KpiRow {
    key: String,
    label: String,
    value: String,
    change: String,
    change_class: &'static str,
}

impl From<StatCard> for KpiRow {
    fn from(card: StatCard) -> Self {
        Self {
            key: format!("{:?}", card.kpi),
            label: kpi_label(card.kpi),
            value: stat_value_text(card.value),
            change: format_change(card.change),
            change_class: if card.is_negative() {
                "change change--negative"
            } else {
                "change change--positive"
            },
        }
    }
}

#[component]
pub fn Analytics() -> Element {
    let lang = use_lang_marker();
    let repos = use_context::<Repositories>();
    let metrics = &repos.metrics;

    let volume = metrics.order_volume();
    let shipments = metrics.daily_shipments();
    let charts = [
        ChartSpec::line(
            t!("chart-order-volume"),
            volume.categories,
            ChartSeries::new(t!("series-order-volume"), volume.values),
        ),
        ChartSpec::bar(
            t!("chart-daily-shipments"),
            shipments.categories,
            ChartSeries::new(t!("series-daily-shipments"), shipments.values),
        ),
        ChartSpec::pie(
            t!("chart-inventory-distribution"),
            metrics.inventory_distribution(),
        ),
    ];
    let kpis: Vec<KpiRow> = metrics.kpis().into_iter().map(KpiRow::from).collect();

    rsx! {
        section { class: "page page-analytics", "data-lang": "{lang}",
            header { class: "page__header",
                h1 { {t!("analytics-title")} }
                p { class: "page__subtitle", {t!("analytics-subtitle")} }
            }

            for (key, spec) in charts.into_iter().map(|spec| (spec.dom_id(), spec)) {
                ChartPanel { key: "{key}", spec }
            }

            div { class: "stat-grid stat-grid--kpi",
                for row in kpis {
                    div { key: "{row.key}", class: "stat-card",
                        span { class: "stat-card__label", "{row.label}" }
                        span { class: "stat-card__value", "{row.value}" }
                        span { class: row.change_class, "{row.change}" }
                    }
                }
            }
        }
    }
}
