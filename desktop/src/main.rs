#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

#[cfg(feature = "desktop")]
use dioxus::desktop::{tao::window::WindowBuilder, Config};
use dioxus::logger::tracing::info;
use dioxus::prelude::*;

use ui::charts::CHART_JS_SRC;
use ui::components::{register_nav, NavBuilder, TabBar};
use ui::core::config::AppConfig;
use ui::views::{Analytics, Dashboard, Inventory, Orders};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(DesktopTabs)]
    #[route("/")]
    Dashboard {},
    #[route("/inventory")]
    Inventory {},
    #[route("/orders")]
    Orders {},
    #[route("/analytics")]
    Analytics {},
}

const MAIN_CSS_INLINE: &str = ui::THEME_CSS;

fn init_logging(config: &AppConfig) {
    if let Err(err) = dioxus::logger::init(config.log_level()) {
        eprintln!("[stockroom] logger init failed: {err}");
    }
    info!(backend = ?config.chart_backend, "starting stockroom desktop");
}

#[cfg(feature = "desktop")]
fn main() {
    let config = AppConfig::load();
    init_logging(&config);

    LaunchBuilder::desktop()
        .with_context(config)
        .with_cfg(
            Config::new()
                .with_window(
                    WindowBuilder::new()
                        .with_title(format!("Stockroom – v{}", env!("CARGO_PKG_VERSION")))
                        .with_maximized(true),
                ),
        )
        .launch(App);
}

#[cfg(not(feature = "desktop"))]
fn main() {
    let config = AppConfig::load();
    init_logging(&config);
    LaunchBuilder::new().with_context(config).launch(App);
}

fn nav_dashboard(label: &str) -> Element {
    rsx!(Link { class: "tab-bar__link", to: Route::Dashboard {}, "{label}" })
}
fn nav_inventory(label: &str) -> Element {
    rsx!(Link { class: "tab-bar__link", to: Route::Inventory {}, "{label}" })
}
fn nav_orders(label: &str) -> Element {
    rsx!(Link { class: "tab-bar__link", to: Route::Orders {}, "{label}" })
}
fn nav_analytics(label: &str) -> Element {
    rsx!(Link { class: "tab-bar__link", to: Route::Analytics {}, "{label}" })
}

#[component]
fn App() -> Element {
    ui::i18n::init();

    // TabBar updates this on language selection; keyed subtree below remounts.
    let lang_code = use_signal(ui::i18n::current_language);
    use_context_provider(|| lang_code);
    let renderer = ui::use_app_services();

    register_nav(NavBuilder {
        dashboard: nav_dashboard,
        inventory: nav_inventory,
        orders: nav_orders,
        analytics: nav_analytics,
    });

    rsx! {
        document::Style { "{MAIN_CSS_INLINE}" }
        // Only needed when STOCKROOM_CHART_BACKEND=web forces the canvas backend.
        if renderer.platform() == ui::core::platform::Platform::Web {
            document::Script { src: CHART_JS_SRC }
        }

        div {
            key: "{lang_code()}",
            div { style: "display:none", "{lang_code()}" }
            Router::<Route> { }
        }
    }
}

/// Desktop layout wrapping the shared `TabBar` around the desktop `Route` outlet.
#[component]
fn DesktopTabs() -> Element {
    rsx! {
        TabBar { }

        Outlet::<Route> {}
    }
}
