//! Platform detection helpers.

use std::fmt;

/// Chart backend family. Web builds draw through Chart.js on a canvas, every
/// other build draws native-style SVG.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    Web,
    Native,
}

impl Platform {
    pub fn current() -> Self {
        if cfg!(target_arch = "wasm32") {
            Self::Web
        } else {
            Self::Native
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Platform::Web => "web",
            Platform::Native => "native",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Current browser window width in CSS pixels (web builds only).
#[cfg(target_arch = "wasm32")]
pub fn window_width() -> Option<f64> {
    web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
}

#[cfg(not(target_arch = "wasm32"))]
pub fn window_width() -> Option<f64> {
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn native_is_default_off_wasm() {
        assert_eq!(Platform::current(), Platform::Native);
    }

    #[test]
    fn display_uses_lowercase_names() {
        assert_eq!(Platform::Web.to_string(), "web");
        assert_eq!(Platform::Native.to_string(), "native");
    }
}
