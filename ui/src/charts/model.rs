//! Platform-independent chart descriptions.
//!
//! A [`ChartSpec`] is built fresh from repository data on every render pass and
//! handed to a [`ChartRenderer`](super::ChartRenderer). It never carries any
//! backend-specific styling; that is the adapter's job.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::{ChartError, ChartResult};

/// The chart kinds both backends know how to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum ChartKind {
    Line,
    Bar,
    Pie,
}

impl ChartKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ChartKind::Line => "line",
            ChartKind::Bar => "bar",
            ChartKind::Pie => "pie",
        }
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChartKind {
    type Err = ChartError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            "line" => Ok(ChartKind::Line),
            "bar" => Ok(ChartKind::Bar),
            "pie" => Ok(ChartKind::Pie),
            _ => Err(ChartError::UnsupportedChartKind(raw.to_string())),
        }
    }
}

impl TryFrom<String> for ChartKind {
    type Error = ChartError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        raw.parse()
    }
}

/// One named, ordered sequence of observations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    pub label: String,
    pub values: Vec<f64>,
}

impl ChartSeries {
    pub fn new(label: impl Into<String>, values: impl Into<Vec<f64>>) -> Self {
        Self {
            label: label.into(),
            values: values.into(),
        }
    }
}

/// A named share of a proportion chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryDistribution {
    pub name: String,
    pub value: f64,
    pub color: String,
}

impl CategoryDistribution {
    pub fn new(name: impl Into<String>, value: f64, color: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value,
            color: color.into(),
        }
    }
}

/// Values carried by a chart. Line and bar charts use `Series`, pie charts use
/// `Distribution`. Distribution entries keep their declared order so slice
/// colors stay attached to the right category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ChartData {
    Series {
        categories: Vec<String>,
        series: ChartSeries,
    },
    Distribution {
        distribution: Vec<CategoryDistribution>,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSpec {
    pub kind: ChartKind,
    pub title: String,
    #[serde(flatten)]
    pub data: ChartData,
}

impl ChartSpec {
    pub fn line<I, S>(title: impl Into<String>, categories: I, series: ChartSeries) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::series(ChartKind::Line, title, categories, series)
    }

    pub fn bar<I, S>(title: impl Into<String>, categories: I, series: ChartSeries) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::series(ChartKind::Bar, title, categories, series)
    }

    pub fn pie(
        title: impl Into<String>,
        distribution: impl IntoIterator<Item = CategoryDistribution>,
    ) -> Self {
        Self {
            kind: ChartKind::Pie,
            title: title.into(),
            data: ChartData::Distribution {
                distribution: distribution.into_iter().collect(),
            },
        }
    }

    fn series<I, S>(
        kind: ChartKind,
        title: impl Into<String>,
        categories: I,
        series: ChartSeries,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            kind,
            title: title.into(),
            data: ChartData::Series {
                categories: categories.into_iter().map(Into::into).collect(),
                series,
            },
        }
    }

    /// Checks the structural invariants both backends rely on.
    ///
    /// An empty series is valid regardless of the category count: it renders as
    /// an empty frame.
    pub fn validate(&self) -> ChartResult<()> {
        match (self.kind, &self.data) {
            (ChartKind::Line | ChartKind::Bar, ChartData::Series { categories, series }) => {
                validate_series(categories, series)
            }
            (ChartKind::Pie, ChartData::Distribution { distribution }) => {
                validate_distribution(distribution)
            }
            (ChartKind::Line | ChartKind::Bar, ChartData::Distribution { .. }) => {
                Err(ChartError::DataShapeMismatch {
                    kind: self.kind,
                    expected: "categories and a series",
                })
            }
            (ChartKind::Pie, ChartData::Series { .. }) => Err(ChartError::DataShapeMismatch {
                kind: self.kind,
                expected: "a category distribution",
            }),
        }
    }

    /// True when there is nothing to plot and only the frame should be drawn.
    pub fn is_empty(&self) -> bool {
        match &self.data {
            ChartData::Series { series, .. } => series.values.is_empty(),
            ChartData::Distribution { distribution } => {
                distribution.iter().all(|slice| slice.value <= 0.0)
            }
        }
    }

    /// Stable DOM-safe identifier derived from the kind and title.
    pub fn dom_id(&self) -> String {
        let slug: String = self
            .title
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() {
                    c.to_ascii_lowercase()
                } else {
                    '-'
                }
            })
            .collect();
        let slug = slug
            .split('-')
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join("-");
        format!("chart-{}-{slug}", self.kind)
    }
}

fn validate_series(categories: &[String], series: &ChartSeries) -> ChartResult<()> {
    if series.label.trim().is_empty() {
        return Err(ChartError::InvalidData(
            "series label must not be empty".to_string(),
        ));
    }
    if let Some(bad) = series.values.iter().find(|v| !v.is_finite()) {
        return Err(ChartError::InvalidData(format!(
            "series `{}` contains non-finite value {bad}",
            series.label
        )));
    }
    if !series.values.is_empty() && series.values.len() != categories.len() {
        return Err(ChartError::MalformedSeries {
            label: series.label.clone(),
            categories: categories.len(),
            values: series.values.len(),
        });
    }
    Ok(())
}

fn validate_distribution(distribution: &[CategoryDistribution]) -> ChartResult<()> {
    let mut seen = HashSet::new();
    for slice in distribution {
        if slice.name.trim().is_empty() {
            return Err(ChartError::InvalidData(
                "distribution entry without a name".to_string(),
            ));
        }
        if !seen.insert(slice.name.as_str()) {
            return Err(ChartError::InvalidData(format!(
                "duplicate distribution entry `{}`",
                slice.name
            )));
        }
        if !slice.value.is_finite() || slice.value < 0.0 {
            return Err(ChartError::InvalidData(format!(
                "distribution entry `{}` has invalid value {}",
                slice.name, slice.value
            )));
        }
        if !is_color_token(&slice.color) {
            return Err(ChartError::InvalidData(format!(
                "distribution entry `{}` has invalid color `{}`",
                slice.name, slice.color
            )));
        }
    }
    Ok(())
}

/// Accepts `#rgb`, `#rrggbb`, `#rrggbbaa`, `rgb(...)`, `rgba(...)` and `transparent`.
pub fn is_color_token(raw: &str) -> bool {
    let token = raw.trim();
    if let Some(hex) = token.strip_prefix('#') {
        return matches!(hex.len(), 3 | 6 | 8) && hex.chars().all(|c| c.is_ascii_hexdigit());
    }
    if token == "transparent" {
        return true;
    }
    (token.starts_with("rgb(") || token.starts_with("rgba(")) && token.ends_with(')')
}
