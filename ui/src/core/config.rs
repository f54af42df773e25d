//! Runtime configuration shared by every shell.
//!
//! Sources, lowest precedence first: built-in defaults, the JSON file named
//! by `STOCKROOM_CONFIG`, then the individual `STOCKROOM_*` variables. Every
//! value goes through the same per-field parser; anything unparsable keeps
//! its previous value with a warning so a typo never keeps the app from
//! starting.

use serde_json::{Map, Value};
use tracing::{debug, warn, Level};

use crate::charts::NativeFrame;
use crate::core::platform::{self, Platform};

pub const ENV_CONFIG: &str = "STOCKROOM_CONFIG";
pub const ENV_CHART_BACKEND: &str = "STOCKROOM_CHART_BACKEND";
pub const ENV_CHART_WIDTH: &str = "STOCKROOM_CHART_WIDTH";
pub const ENV_CHART_HEIGHT: &str = "STOCKROOM_CHART_HEIGHT";
pub const ENV_LOG: &str = "STOCKROOM_LOG";

/// Environment variable and JSON field carrying the same setting.
const FIELDS: [(&str, &str); 4] = [
    (ENV_CHART_BACKEND, "chart_backend"),
    (ENV_CHART_WIDTH, "chart_width"),
    (ENV_CHART_HEIGHT, "chart_height"),
    (ENV_LOG, "log_level"),
];

/// Horizontal padding subtracted from the viewport width for native charts.
const SECTION_GUTTER: f64 = 32.0;

/// Which chart backend to construct at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BackendPreference {
    /// Web on wasm32, native everywhere else.
    #[default]
    Auto,
    Web,
    Native,
}

impl BackendPreference {
    pub fn resolve(self) -> Platform {
        match self {
            BackendPreference::Auto => Platform::current(),
            BackendPreference::Web => Platform::Web,
            BackendPreference::Native => Platform::Native,
        }
    }

    fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "auto" | "" => Some(BackendPreference::Auto),
            "web" => Some(BackendPreference::Web),
            "native" => Some(BackendPreference::Native),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub chart_backend: BackendPreference,
    /// Fixed native chart width. `None` derives it from the window width.
    pub chart_width: Option<u32>,
    pub chart_height: u32,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            chart_backend: BackendPreference::Auto,
            chart_width: None,
            chart_height: NativeFrame::default().height,
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Defaults, then the `STOCKROOM_CONFIG` file, then `STOCKROOM_*` variables.
    pub fn load() -> Self {
        Self::layered(|key| std::env::var(key).ok(), |path: &str| std::fs::read_to_string(path))
    }

    fn layered(
        env: impl Fn(&str) -> Option<String>,
        read_file: impl Fn(&str) -> std::io::Result<String>,
    ) -> Self {
        let mut config = Self::default();
        if let Some(path) = env(ENV_CONFIG) {
            match read_file(&path) {
                Ok(raw) => match Self::from_json_str(&raw) {
                    Ok(from_file) => {
                        debug!(%path, "loaded config file");
                        config = from_file;
                    }
                    Err(err) => warn!(%path, "ignoring malformed config file: {err}"),
                },
                Err(err) => warn!(%path, "ignoring unreadable config file: {err}"),
            }
        }
        config.apply(env);
        config
    }

    /// Reads a JSON object such as `{"chart_backend": "web", "chart_height": 240}`.
    ///
    /// Only a document that is not a JSON object is an error. Individual
    /// fields are validated like their environment counterparts.
    fn from_json_str(input: &str) -> Result<Self, serde_json::Error> {
        let fields: Map<String, Value> = serde_json::from_str(input)?;
        for key in fields.keys() {
            if !FIELDS.iter().any(|(_, field)| *field == key.as_str()) {
                warn!(%key, "ignoring unknown config field");
            }
        }

        let mut config = Self::default();
        config.apply(|env_key| {
            let (_, field) = FIELDS.iter().find(|(key, _)| *key == env_key)?;
            match fields.get(*field)? {
                Value::Null => None,
                Value::String(raw) => Some(raw.clone()),
                other => Some(other.to_string()),
            }
        });
        Ok(config)
    }

    /// Overrides every field `lookup` has a usable value for.
    fn apply(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(raw) = lookup(ENV_CHART_BACKEND) {
            match BackendPreference::parse(&raw) {
                Some(pref) => self.chart_backend = pref,
                None => warn!(key = ENV_CHART_BACKEND, value = %raw, "ignoring unknown chart backend"),
            }
        }
        if let Some(raw) = lookup(ENV_CHART_WIDTH) {
            match parse_dimension(&raw) {
                Some(width) => self.chart_width = Some(width),
                None => warn!(key = ENV_CHART_WIDTH, value = %raw, "ignoring invalid chart width"),
            }
        }
        if let Some(raw) = lookup(ENV_CHART_HEIGHT) {
            match parse_dimension(&raw) {
                Some(height) => self.chart_height = height,
                None => warn!(key = ENV_CHART_HEIGHT, value = %raw, "ignoring invalid chart height"),
            }
        }
        if let Some(raw) = lookup(ENV_LOG) {
            match raw.trim().parse::<Level>() {
                Ok(_) => self.log_level = raw.trim().to_string(),
                Err(_) => warn!(key = ENV_LOG, value = %raw, "ignoring unknown log level"),
            }
        }
    }

    /// Parsed log level; unknown names fall back to `INFO`.
    pub fn log_level(&self) -> Level {
        self.log_level.parse().unwrap_or(Level::INFO)
    }

    /// Pixel box for native charts: the configured width, or the window width
    /// minus the section gutter, or the phone-sized default.
    pub fn native_frame(&self) -> NativeFrame {
        let fallback = NativeFrame::default();
        let width = self
            .chart_width
            .or_else(|| {
                platform::window_width()
                    .map(|w| (w - SECTION_GUTTER).max(SECTION_GUTTER) as u32)
            })
            .unwrap_or(fallback.width);
        NativeFrame {
            width,
            height: self.chart_height,
        }
    }
}

/// Positive pixel count.
fn parse_dimension(raw: &str) -> Option<u32> {
    raw.trim().parse::<u32>().ok().filter(|px| *px > 0)
}
