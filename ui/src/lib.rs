//! Shared UI crate for Stockroom. Screens, chart adapters and data providers
//! live here; the `web`, `desktop` and `mobile` shells only add routing and
//! platform launch code.

pub mod charts;
pub mod core;
pub mod data;
pub mod i18n;
pub mod views;

pub mod components {
    // Bottom/top tab navigation (components/tab_bar.rs)
    pub mod tab_bar;
    pub use tab_bar::register_nav;
    pub use tab_bar::NavBuilder;
    pub use tab_bar::TabBar;
}

use dioxus::prelude::*;

use crate::charts::RendererHandle;
use crate::core::config::AppConfig;
use crate::data::Repositories;

/// Shared theme, embedded so every shell can inline it.
pub const THEME_CSS: &str = include_str!("../assets/theme/main.css");

/// Provides the chart renderer and data repositories to the view tree.
///
/// Call once from the shell's root component. Shells load [`AppConfig`] in
/// `main` and hand it to the launcher with `with_context`; the renderer is
/// chosen from it on the first render and screens read it back with
/// `use_context`.
pub fn use_app_services() -> RendererHandle {
    let renderer = use_context_provider(|| RendererHandle::select(&use_context::<AppConfig>()));
    use_context_provider(Repositories::mock);
    renderer
}
