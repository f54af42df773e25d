//! Fluent catalogs for the Stockroom screens.
//!
//! Every locale lives in `i18n/<tag>/stockroom-ui.ftl` and is embedded at
//! compile time, so switching language never touches the filesystem. `en-US`
//! is the reference catalog and the fallback for any message a locale lacks.
//!
//! Components look messages up through [`t!`](crate::t), which routes through
//! the shared [`LOADER`]:
//!
//! ```ignore
//! let title = t!("orders-title");
//! let items = t!("order-items", count = order.items);
//! ```
use std::sync::Once;

use i18n_embed::fluent::FluentLanguageLoader;
use i18n_embed::{I18nEmbedError, LanguageLoader};
use once_cell::sync::Lazy;
use rust_embed::Embed;
use thiserror::Error;
use tracing::{debug, info, warn};
use unic_langid::LanguageIdentifier;

#[doc(hidden)]
pub use i18n_embed_fl::fl;

/// Looks up a message in the active locale, with optional Fluent arguments.
#[macro_export]
macro_rules! t {
    ($key:literal) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key)
    };
    ($key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key, $( $arg = $value ),+ )
    };
}

const DOMAIN: &str = "stockroom-ui";
const FALLBACK: &str = "en-US";

#[derive(Embed)]
#[folder = "i18n"]
struct Catalogs;

#[derive(Debug, Error)]
pub enum LanguageError {
    #[error("`{0}` is not a language tag")]
    UnknownTag(String),
    #[error("no catalog is embedded for `{0}`")]
    NotEmbedded(String),
    #[error(transparent)]
    Load(#[from] I18nEmbedError),
}

/// Loader shared by every `t!` lookup.
pub static LOADER: Lazy<FluentLanguageLoader> = Lazy::new(new_loader);

static INIT: Once = Once::new();

fn new_loader() -> FluentLanguageLoader {
    // Bidi isolation marks would end up inside badges and counts.
    let loader = FluentLanguageLoader::new(DOMAIN, FALLBACK.parse().unwrap_or_default());
    loader.set_use_isolating(false);
    loader
}

/// Loads the catalogs matching the user's OS or browser languages. Later
/// calls are no-ops.
pub fn init() {
    INIT.call_once(|| match select(&LOADER, &requested_languages()) {
        Ok(()) => info!(language = %LOADER.current_language(), "catalogs loaded"),
        Err(err) => warn!("falling back to {FALLBACK}: {err}"),
    });
}

fn select(loader: &FluentLanguageLoader, requested: &[LanguageIdentifier]) -> Result<(), LanguageError> {
    let selected = i18n_embed::select(loader, &Catalogs, requested)?;
    debug!(?requested, ?selected, "negotiated languages");
    Ok(())
}

/// Switches the shared loader to `tag`. Unknown or missing locales leave the
/// active language untouched.
pub fn set_language(tag: &str) -> Result<(), LanguageError> {
    switch(&LOADER, tag)
}

fn switch(loader: &FluentLanguageLoader, tag: &str) -> Result<(), LanguageError> {
    let lang: LanguageIdentifier = tag
        .parse()
        .map_err(|_| LanguageError::UnknownTag(tag.to_string()))?;
    if !available_languages().contains(&lang.to_string()) {
        return Err(LanguageError::NotEmbedded(lang.to_string()));
    }
    let mut chain = vec![lang];
    if let Ok(fallback) = FALLBACK.parse::<LanguageIdentifier>() {
        if !chain.contains(&fallback) {
            chain.push(fallback);
        }
    }
    loader.load_languages(&Catalogs, &chain)?;
    Ok(())
}

/// Tag of the locale messages currently resolve in.
pub fn current_language() -> String {
    LOADER.current_language().to_string()
}

/// Embedded locale tags, sorted.
pub fn available_languages() -> Vec<String> {
    let mut tags: Vec<String> = Catalogs::iter()
        .filter_map(|path| path.split('/').next().map(str::to_string))
        .collect();
    tags.sort();
    tags.dedup();
    tags
}

#[cfg(target_arch = "wasm32")]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::WebLanguageRequester::requested_languages()
}

#[cfg(not(target_arch = "wasm32"))]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::DesktopLanguageRequester::requested_languages()
}

#[cfg(test)]
mod tests {
    use std::collections::{BTreeSet, HashMap};

    use super::*;
    use crate::data::{OrderStatus, StockStatus};

    fn english() -> FluentLanguageLoader {
        let loader = new_loader();
        select(&loader, &[FALLBACK.parse().unwrap()]).unwrap();
        loader
    }

    #[test]
    fn every_locale_is_embedded() {
        assert_eq!(available_languages(), ["en-US", "es-ES", "fr-FR"]);
    }

    #[test]
    fn english_is_the_reference_catalog() {
        let loader = english();
        assert_eq!(loader.current_language().to_string(), "en-US");
        assert_eq!(loader.get("nav-dashboard"), "Dashboard");
    }

    #[test]
    fn switching_reloads_messages() {
        let loader = english();
        switch(&loader, "es-ES").unwrap();
        assert_eq!(loader.current_language().to_string(), "es-ES");
        assert_eq!(loader.get("nav-orders"), "Pedidos");

        switch(&loader, "fr-FR").unwrap();
        assert_eq!(loader.get("nav-inventory"), "Inventaire");
    }

    #[test]
    fn rejected_switch_keeps_active_language() {
        let loader = english();
        switch(&loader, "es-ES").unwrap();

        assert!(matches!(
            switch(&loader, "zz-ZZ"),
            Err(LanguageError::NotEmbedded(tag)) if tag == "zz-ZZ"
        ));
        assert!(matches!(
            switch(&loader, "not a tag!"),
            Err(LanguageError::UnknownTag(_))
        ));
        assert_eq!(loader.current_language().to_string(), "es-ES");
        assert_eq!(loader.get("nav-orders"), "Pedidos");
    }

    #[test]
    fn arguments_render_without_isolation_marks() {
        let loader = english();
        let args = HashMap::from([("count", 3u32)]);
        assert_eq!(loader.get_args("order-items", args), "3 items");
    }

    #[test]
    fn counts_pick_the_plural_form() {
        let loader = english();
        assert_eq!(loader.get_args("order-items", HashMap::from([("count", 1u32)])), "1 item");

        switch(&loader, "es-ES").unwrap();
        assert_eq!(loader.get_args("order-items", HashMap::from([("count", 1u32)])), "1 artículo");
        assert_eq!(loader.get_args("order-items", HashMap::from([("count", 8u32)])), "8 artículos");
    }

    #[test]
    fn every_status_has_its_own_label() {
        let loader = english();
        for tag in available_languages() {
            switch(&loader, &tag).unwrap();
            let orders: BTreeSet<String> = [
                OrderStatus::Processing,
                OrderStatus::Shipped,
                OrderStatus::Pending,
                OrderStatus::Delivered,
            ]
            .into_iter()
            .map(|status| loader.get_args("order-status", HashMap::from([("status", status.key())])))
            .collect();
            assert_eq!(orders.len(), 4, "{tag} merges order statuses: {orders:?}");

            let stock: BTreeSet<String> = [StockStatus::InStock, StockStatus::LowStock, StockStatus::Critical]
                .into_iter()
                .map(|status| loader.get_args("stock-status", HashMap::from([("status", status.key())])))
                .collect();
            assert_eq!(stock.len(), 3, "{tag} merges stock statuses: {stock:?}");
        }
    }

    #[test]
    fn statuses_follow_the_active_language() {
        let loader = english();
        let low = HashMap::from([("status", StockStatus::LowStock.key())]);
        assert_eq!(loader.get_args("stock-status", low.clone()), "Low Stock");

        switch(&loader, "fr-FR").unwrap();
        assert_eq!(loader.get_args("stock-status", low), "Stock faible");
        let shipped = HashMap::from([("status", OrderStatus::Shipped.key())]);
        assert_eq!(loader.get_args("order-status", shipped), "Expédiée");
    }
}
