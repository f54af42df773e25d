//! Cross-platform chart adaptation.
//!
//! Screens describe charts as [`ChartSpec`]s; the injected [`ChartRenderer`]
//! turns them into the payload of the active backend and mounts it.

mod adapter;
mod error;
mod model;
mod payload;
mod presenter;
mod renderer;
pub mod svg;
mod view;

pub use adapter::{to_native, to_web, NativeFrame};
pub use error::{ChartError, ChartResult};
pub use model::{is_color_token, CategoryDistribution, ChartData, ChartKind, ChartSeries, ChartSpec};
pub use payload::*;
pub use presenter::{present, ChartOutcome, ChartPanel, ChartPlaceholder};
pub use renderer::{adapt, ChartRenderer, NativeRenderer, RendererHandle, WebRenderer};
pub use view::{ChartView, CHART_JS_SRC};
