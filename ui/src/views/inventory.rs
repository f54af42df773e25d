use dioxus::prelude::*;
use tracing::debug;

use crate::data::{filter_inventory, Repositories};
use crate::t;

use super::use_lang_marker;

#[component]
pub fn Inventory() -> Element {
    let lang = use_lang_marker();
    let repos = use_context::<Repositories>();
    let mut query = use_signal(String::new);
    let mut sort_by_name = use_signal(|| false);

    let items: Vec<_> = filter_inventory(&repos.inventory.items(), &query(), sort_by_name())
        .into_iter()
        .map(|item| {
            let badge = item.status.css_class();
            let status = t!("stock-status", status = item.status.key());
            (item, badge, status)
        })
        .collect();
    let placeholder = t!("inventory-search-placeholder");
    let search_label = t!("inventory-search-label");
    let add_label = t!("add-new");
    let sort_class = if sort_by_name() {
        "button button--ghost button--active"
    } else {
        "button button--ghost"
    };

    rsx! {
        section { class: "page page-inventory", "data-lang": "{lang}",
            div { class: "search-bar",
                input {
                    r#type: "search",
                    class: "search-bar__input",
                    aria_label: "{search_label}",
                    placeholder: "{placeholder}",
                    value: "{query}",
                    oninput: move |evt| query.set(evt.value()),
                }
            }

            div { class: "toolbar",
                button {
                    class: "button button--ghost",
                    onclick: move |_| debug!("inventory filter pressed"),
                    {t!("filter")}
                }
                button {
                    class: sort_class,
                    onclick: move |_| {
                        let next = !sort_by_name();
                        sort_by_name.set(next);
                        debug!(sort_by_name = next, "inventory sort toggled");
                    },
                    {t!("sort")}
                }
            }

            if items.is_empty() {
                p { class: "empty-state", {t!("inventory-empty")} }
            }

            ul { class: "card-list",
                for (item, badge, status) in items {
                    li { key: "{item.id}", class: "item-card",
                        div { class: "item-card__header",
                            h3 { class: "item-card__name", "{item.name}" }
                            span { class: "status-badge {badge}", "{status}" }
                        }
                        dl { class: "item-card__details",
                            dt { {t!("inventory-sku")} }
                            dd { "{item.sku}" }
                            dt { {t!("inventory-quantity")} }
                            dd { "{item.quantity}" }
                            dt { {t!("inventory-location")} }
                            dd { "{item.location}" }
                        }
                    }
                }
            }

            button {
                class: "fab",
                aria_label: "{add_label}",
                onclick: move |_| debug!("add inventory item pressed"),
                "+"
            }
        }
    }
}
