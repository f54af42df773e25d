//! Boundary between screens and chart backends.
//!
//! Every adapter failure stops here: it is logged and turned into a visible
//! "chart unavailable" card instead of reaching the rest of the screen.

use dioxus::prelude::*;
use tracing::warn;

use crate::t;

use super::model::ChartSpec;
use super::payload::RenderPayload;
use super::renderer::{ChartRenderer, RendererHandle};
use super::view::ChartView;

#[derive(Debug, Clone, PartialEq)]
pub enum ChartOutcome {
    Ready(RenderPayload),
    Unavailable { reason: String },
}

impl ChartOutcome {
    pub fn is_ready(&self) -> bool {
        matches!(self, ChartOutcome::Ready(_))
    }
}

pub fn present(renderer: &dyn ChartRenderer, spec: &ChartSpec) -> ChartOutcome {
    match renderer.adapt(spec) {
        Ok(payload) => ChartOutcome::Ready(payload),
        Err(err) => {
            warn!(
                title = %spec.title,
                kind = %spec.kind,
                platform = %renderer.platform(),
                "chart unavailable: {err}"
            );
            ChartOutcome::Unavailable {
                reason: err.to_string(),
            }
        }
    }
}

/// Titled chart section. Requires a [`RendererHandle`] in context.
#[component]
pub fn ChartPanel(spec: ChartSpec) -> Element {
    let renderer = use_context::<RendererHandle>();
    let outcome = present(&*renderer, &spec);
    let dom_id = spec.dom_id();

    rsx! {
        section { class: "section chart-panel",
            h2 { class: "section__title", "{spec.title}" }
            match outcome {
                ChartOutcome::Ready(payload) => rsx! {
                    ChartView { payload, dom_id }
                },
                ChartOutcome::Unavailable { reason } => rsx! {
                    ChartPlaceholder { reason }
                },
            }
        }
    }
}

#[component]
pub fn ChartPlaceholder(reason: String) -> Element {
    rsx! {
        div { class: "chart-card chart-card__placeholder", role: "status",
            strong { {t!("chart-unavailable")} }
            span { class: "chart-card__reason", "{reason}" }
        }
    }
}
