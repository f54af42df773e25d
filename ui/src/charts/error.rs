use thiserror::Error;

use super::model::ChartKind;

pub type ChartResult<T> = Result<T, ChartError>;

/// Failures raised while adapting a chart for a backend. None of these are
/// fatal: the presenter turns them into a visible placeholder.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ChartError {
    #[error("unsupported chart kind `{0}`")]
    UnsupportedChartKind(String),

    #[error("series `{label}` has {values} values for {categories} categories")]
    MalformedSeries {
        label: String,
        categories: usize,
        values: usize,
    },

    #[error("{kind} chart expects {expected}")]
    DataShapeMismatch {
        kind: ChartKind,
        expected: &'static str,
    },

    #[error("invalid chart data: {0}")]
    InvalidData(String),
}
