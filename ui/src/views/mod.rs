mod analytics;
mod dashboard;
mod inventory;
mod orders;

pub use analytics::Analytics;
pub use dashboard::Dashboard;
pub use inventory::Inventory;
pub use orders::Orders;

use dioxus::prelude::*;

/// Subscribes the calling screen to the shell's language signal so localized
/// strings refresh on a language switch. Returns the active language tag.
pub(crate) fn use_lang_marker() -> String {
    try_use_context::<Signal<String>>()
        .map(|code| code())
        .unwrap_or_else(|| "en-US".to_string())
}
