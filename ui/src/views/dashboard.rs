use dioxus::prelude::*;
use tracing::debug;

use crate::charts::{ChartPanel, ChartSeries, ChartSpec};
use crate::core::format::format_count;
use crate::data::Repositories;
use crate::t;

use super::use_lang_marker;

#[component]
pub fn Dashboard() -> Element {
    let lang = use_lang_marker();
    let repos = use_context::<Repositories>();
    let summary = repos.metrics.dashboard_summary();
    let operations = repos.metrics.daily_operations();
    let in_stock = format_count(summary.items_in_stock);
    let pending = format_count(summary.pending_orders);
    let low_stock = format_count(summary.low_stock_items);

    let chart = ChartSpec::line(
        t!("dashboard-daily-operations"),
        operations.categories,
        ChartSeries::new(t!("series-daily-operations"), operations.values),
    );

    let actions = [
        ("scan", "⌖", t!("action-scan-item")),
        ("new-order", "+", t!("action-new-order")),
        ("find", "⌕", t!("action-find-item")),
        ("settings", "⚙", t!("action-settings")),
    ];

    rsx! {
        section { class: "page page-dashboard", "data-lang": "{lang}",
            header { class: "page__header",
                h1 { {t!("dashboard-title")} }
                p { class: "page__subtitle", {t!("dashboard-subtitle")} }
            }

            div { class: "stat-grid",
                div { class: "stat-card",
                    span { class: "stat-card__value", "{in_stock}" }
                    span { class: "stat-card__label", {t!("stat-items-in-stock")} }
                }
                div { class: "stat-card",
                    span { class: "stat-card__value", "{pending}" }
                    span { class: "stat-card__label", {t!("stat-pending-orders")} }
                }
                div { class: "stat-card stat-card--alert",
                    span { class: "stat-card__value", "{low_stock}" }
                    span { class: "stat-card__label", {t!("stat-low-stock")} }
                }
            }

            ChartPanel { spec: chart }

            section { class: "section",
                h2 { class: "section__title", {t!("dashboard-quick-actions")} }
                div { class: "action-grid",
                    for (id, icon, label) in actions {
                        button {
                            key: "{id}",
                            class: "action-card",
                            onclick: move |_| debug!(action = id, "quick action pressed"),
                            span { class: "action-card__icon", "{icon}" }
                            span { class: "action-card__label", "{label}" }
                        }
                    }
                }
            }
        }
    }
}
