//! Platform-agnostic helpers shared by the views and the chart layer.

pub mod config;
pub mod format;
pub mod platform;
