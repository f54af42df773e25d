use dioxus::prelude::*;
use tracing::debug;

use crate::data::{sort_orders, Repositories};
use crate::t;

use super::use_lang_marker;

#[component]
pub fn Orders() -> Element {
    let lang = use_lang_marker();
    let repos = use_context::<Repositories>();
    let mut newest_first = use_signal(|| false);

    let orders: Vec<_> = sort_orders(repos.orders.orders(), newest_first())
        .into_iter()
        .map(|order| {
            let badge = order.status.color();
            let status = t!("order-status", status = order.status.key());
            let count = t!("order-items", count = order.items);
            let date = order.date_label();
            (order, badge, status, count, date)
        })
        .collect();
    let sort_class = if newest_first() {
        "button button--ghost button--active"
    } else {
        "button button--ghost"
    };
    let add_label = t!("add-new");

    rsx! {
        section { class: "page page-orders", "data-lang": "{lang}",
            header { class: "page__header page__header--row",
                h1 { {t!("orders-title")} }
                div { class: "toolbar",
                    button {
                        class: "button button--ghost",
                        onclick: move |_| debug!("orders filter pressed"),
                        {t!("filter")}
                    }
                    button {
                        class: sort_class,
                        onclick: move |_| {
                            let next = !newest_first();
                            newest_first.set(next);
                            debug!(newest_first = next, "orders sort toggled");
                        },
                        {t!("sort")}
                    }
                }
            }

            if orders.is_empty() {
                p { class: "empty-state", {t!("orders-empty")} }
            }

            ul { class: "card-list",
                for (order, badge, status, count, date) in orders {
                    li { key: "{order.id}", class: "order-card",
                        div { class: "order-card__header",
                            div {
                                h3 { class: "order-card__number", "{order.order_number}" }
                                p { class: "order-card__customer", "{order.customer}" }
                            }
                            span {
                                class: "status-badge",
                                style: "background-color: {badge}",
                                "{status}"
                            }
                        }
                        div { class: "order-card__meta",
                            span { "{count}" }
                            span { "{date}" }
                        }
                        div { class: "order-card__actions",
                            button {
                                class: "button button--ghost",
                                onclick: {
                                    let number = order.order_number.clone();
                                    move |_| debug!(order = %number, "view order details")
                                },
                                {t!("order-view-details")}
                            }
                            button {
                                class: "button button--primary",
                                onclick: {
                                    let number = order.order_number.clone();
                                    move |_| debug!(order = %number, "track order")
                                },
                                {t!("order-track")}
                            }
                        }
                    }
                }
            }

            button {
                class: "fab",
                aria_label: "{add_label}",
                onclick: move |_| debug!("new order pressed"),
                "+"
            }
        }
    }
}
