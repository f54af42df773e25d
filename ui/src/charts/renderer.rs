//! Chart backends behind one capability.
//!
//! A renderer only produces the payload; [`ChartView`](super::ChartView)
//! mounts it.
//!
//! The renderer is picked once at application start (see
//! [`RendererHandle::select`]) and handed to the view tree through context.
//! Views never branch on the platform themselves.

use std::ops::Deref;
use std::sync::Arc;

use tracing::debug;

use crate::core::config::AppConfig;
use crate::core::platform::Platform;

use super::adapter::{self, NativeFrame};
use super::error::ChartResult;
use super::model::ChartSpec;
use super::payload::{NativeChartConfig, RenderPayload, WebChartOptions};

pub trait ChartRenderer: Send + Sync {
    fn platform(&self) -> Platform;

    /// Builds the backend payload for `spec`. Pure: the same spec always
    /// yields the same payload.
    fn adapt(&self, spec: &ChartSpec) -> ChartResult<RenderPayload>;
}

/// Chart.js-style backend drawing on a canvas.
#[derive(Debug, Clone, Default)]
pub struct WebRenderer {
    options: WebChartOptions,
}

impl WebRenderer {
    pub fn new(options: WebChartOptions) -> Self {
        Self { options }
    }
}

impl ChartRenderer for WebRenderer {
    fn platform(&self) -> Platform {
        Platform::Web
    }

    fn adapt(&self, spec: &ChartSpec) -> ChartResult<RenderPayload> {
        adapter::to_web(spec, &self.options).map(RenderPayload::Web)
    }
}

/// Chart-kit-style backend drawing fixed-size SVG.
#[derive(Debug, Clone, Default)]
pub struct NativeRenderer {
    frame: NativeFrame,
    config: NativeChartConfig,
}

impl NativeRenderer {
    pub fn new(frame: NativeFrame) -> Self {
        Self {
            frame,
            config: NativeChartConfig::default(),
        }
    }

    pub fn frame(&self) -> NativeFrame {
        self.frame
    }
}

impl ChartRenderer for NativeRenderer {
    fn platform(&self) -> Platform {
        Platform::Native
    }

    fn adapt(&self, spec: &ChartSpec) -> ChartResult<RenderPayload> {
        adapter::to_native(spec, self.frame, &self.config).map(RenderPayload::Native)
    }
}

/// Adapts `spec` for `platform` with the default backend settings.
pub fn adapt(spec: &ChartSpec, platform: Platform) -> ChartResult<RenderPayload> {
    match platform {
        Platform::Web => WebRenderer::default().adapt(spec),
        Platform::Native => NativeRenderer::default().adapt(spec),
    }
}

/// Shared, cheaply clonable renderer provided through Dioxus context.
#[derive(Clone)]
pub struct RendererHandle(Arc<dyn ChartRenderer>);

impl RendererHandle {
    pub fn new(renderer: impl ChartRenderer + 'static) -> Self {
        Self(Arc::new(renderer))
    }

    pub fn select(config: &AppConfig) -> Self {
        let platform = config.chart_backend.resolve();
        debug!(%platform, preference = ?config.chart_backend, "selected chart renderer");
        match platform {
            Platform::Web => Self::new(WebRenderer::default()),
            Platform::Native => Self::new(NativeRenderer::new(config.native_frame())),
        }
    }
}

impl Deref for RendererHandle {
    type Target = dyn ChartRenderer;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

impl std::fmt::Debug for RendererHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("RendererHandle")
            .field(&self.0.platform())
            .finish()
    }
}
