use dioxus::logger::tracing::info;
use dioxus::prelude::*;

use ui::charts::CHART_JS_SRC;
use ui::components::{register_nav, NavBuilder, TabBar};
use ui::core::config::AppConfig;
use ui::views::{Analytics, Dashboard, Inventory, Orders};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebTabs)]
    #[route("/")]
    Dashboard {},
    #[route("/inventory")]
    Inventory {},
    #[route("/orders")]
    Orders {},
    #[route("/analytics")]
    Analytics {},
}

const THEME_CSS: &str = ui::THEME_CSS;

fn nav_dashboard(label: &str) -> Element {
    rsx!(Link {
        class: "tab-bar__link",
        to: Route::Dashboard {},
        "{label}"
    })
}
fn nav_inventory(label: &str) -> Element {
    rsx!(Link {
        class: "tab-bar__link",
        to: Route::Inventory {},
        "{label}"
    })
}
fn nav_orders(label: &str) -> Element {
    rsx!(Link {
        class: "tab-bar__link",
        to: Route::Orders {},
        "{label}"
    })
}
fn nav_analytics(label: &str) -> Element {
    rsx!(Link {
        class: "tab-bar__link",
        to: Route::Analytics {},
        "{label}"
    })
}

fn main() {
    let config = AppConfig::load();
    if let Err(err) = dioxus::logger::init(config.log_level()) {
        eprintln!("[stockroom] logger init failed: {err}");
    }
    info!(backend = ?config.chart_backend, "starting stockroom web");
    LaunchBuilder::new().with_context(config).launch(App);
}

#[component]
fn App() -> Element {
    ui::i18n::init();
    register_nav(NavBuilder {
        dashboard: nav_dashboard,
        inventory: nav_inventory,
        orders: nav_orders,
        analytics: nav_analytics,
    });

    let lang_code = use_signal(ui::i18n::current_language);
    use_context_provider(|| lang_code);
    ui::use_app_services();

    rsx! {
        document::Style { "{THEME_CSS}" }
        document::Script { src: CHART_JS_SRC }

        div {
            key: "{lang_code()}",
            Router::<Route> {}
        }
    }
}

/// Web layout wrapping the shared `TabBar` around the web `Route` outlet.
#[component]
fn WebTabs() -> Element {
    rsx! {
        TabBar {}
        Outlet::<Route> {}
    }
}
