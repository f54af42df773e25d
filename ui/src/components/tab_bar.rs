use crate::i18n::{self};
use crate::t;
use dioxus::prelude::*;
use once_cell::sync::OnceCell;
use tracing::debug;

/// Route links supplied by each shell.
///
/// `ui` does not know the shells' `Route` enums, so every shell registers a
/// `NavBuilder` whose functions wrap the localized label in a `Link` to the
/// matching route. `TabBar` calls them on every render so labels follow the
/// active language.
///
/// ```ignore
/// register_nav(NavBuilder {
///     dashboard: |label| rsx!( Link { class: "tab-bar__link", to: Route::Dashboard {}, "{label}" } ),
///     inventory: |label| rsx!( Link { class: "tab-bar__link", to: Route::Inventory {}, "{label}" } ),
///     orders: |label| rsx!( Link { class: "tab-bar__link", to: Route::Orders {}, "{label}" } ),
///     analytics: |label| rsx!( Link { class: "tab-bar__link", to: Route::Analytics {}, "{label}" } ),
/// });
/// ```
pub struct NavBuilder {
    pub dashboard: fn(label: &str) -> Element,
    pub inventory: fn(label: &str) -> Element,
    pub orders: fn(label: &str) -> Element,
    pub analytics: fn(label: &str) -> Element,
}

static NAV_BUILDER: OnceCell<NavBuilder> = OnceCell::new();

pub fn register_nav(builder: NavBuilder) {
    if NAV_BUILDER.set(builder).is_err() {
        debug!("tab navigation already registered; keeping the first builder");
    }
}

#[component]
pub fn TabBar() -> Element {
    i18n::init();

    let mut current_lang = use_signal(i18n::current_language);
    let langs = use_signal(i18n::available_languages);
    let lang_list = langs();
    let show_switcher = lang_list.len() > 1;
    // Shells provide a global language signal so every screen re-renders on change.
    let lang_code_ctx: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let _lang_marker = lang_code_ctx.as_ref().map(|c| c()).unwrap_or_default();

    let on_change = move |evt: FormEvent| {
        let val = evt.value();
        match i18n::set_language(&val) {
            Ok(()) => {
                debug!(lang = %val, "language switched");
                current_lang.set(val.clone());
                if let Some(mut code) = lang_code_ctx {
                    code.set(val);
                }
            }
            Err(err) => tracing::warn!(lang = %val, "language switch failed: {err}"),
        }
    };

    let tabs = NAV_BUILDER.get().map(|b| {
        let dashboard = (b.dashboard)(&t!("nav-dashboard"));
        let inventory = (b.inventory)(&t!("nav-inventory"));
        let orders = (b.orders)(&t!("nav-orders"));
        let analytics = (b.analytics)(&t!("nav-analytics"));
        rsx! {
            nav { class: "tab-bar__links",
                {dashboard}
                {inventory}
                {orders}
                {analytics}
            }
        }
    });

    let tagline = t!("tagline");

    rsx! {
        header { id: "tab-bar", class: "tab-bar",
            div { style: "display:none", "{_lang_marker}" }
            div { class: "tab-bar__inner",
                div { class: "tab-bar__brand",
                    span { class: "tab-bar__brand-mark", "Stockroom" }
                    span { class: "tab-bar__brand-subtitle", "{tagline}" }
                }

                if let Some(tabs) = tabs {
                    {tabs}
                }

                if show_switcher {
                    div { class: "tab-bar__locale",
                        label {
                            class: "visually-hidden",
                            r#for: "locale-select",
                            {t!("nav-language-label")}
                        }
                        select {
                            id: "locale-select",
                            value: "{current_lang()}",
                            oninput: on_change,
                            for code in lang_list.iter() {
                                option { key: "{code}", value: "{code}", "{code}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
