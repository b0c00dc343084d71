//! Tracked metrics and their fixed normalization ranges.

use crate::error::{CompareError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// A season counter shown on the comparison chart.
///
/// Declaration order is the chart's axis order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Metric {
    DuelsWon,
    AerialDuelsWon,
    Tackles,
    Interceptions,
    TouchesInBox,
    PassesCompleted,
    ExpectedAssists,
    DribblesCompleted,
    CrossesCompleted,
}

impl Metric {
    /// All metrics in axis order.
    pub const ALL: [Metric; 9] = [
        Metric::DuelsWon,
        Metric::AerialDuelsWon,
        Metric::Tackles,
        Metric::Interceptions,
        Metric::TouchesInBox,
        Metric::PassesCompleted,
        Metric::ExpectedAssists,
        Metric::DribblesCompleted,
        Metric::CrossesCompleted,
    ];

    /// Field name used in season records and bounds files.
    pub fn key(&self) -> &'static str {
        match self {
            Metric::DuelsWon => "duelsWon",
            Metric::AerialDuelsWon => "aerialDuelsWon",
            Metric::Tackles => "tackles",
            Metric::Interceptions => "interceptions",
            Metric::TouchesInBox => "touchesInBox",
            Metric::PassesCompleted => "passesCompleted",
            Metric::ExpectedAssists => "expectedAssists",
            Metric::DribblesCompleted => "dribblesCompleted",
            Metric::CrossesCompleted => "crossesCompleted",
        }
    }

    /// Axis label.
    pub fn label(&self) -> &'static str {
        match self {
            Metric::DuelsWon => "Duels Won",
            Metric::AerialDuelsWon => "Aerial Duels",
            Metric::Tackles => "Tackles",
            Metric::Interceptions => "Interceptions",
            Metric::TouchesInBox => "Touches in Box",
            Metric::PassesCompleted => "Passes",
            Metric::ExpectedAssists => "Expected Assists",
            Metric::DribblesCompleted => "Dribbles",
            Metric::CrossesCompleted => "Crosses",
        }
    }

    /// Decimal places used when showing the raw averaged value.
    pub fn display_decimals(&self) -> usize {
        match self {
            Metric::TouchesInBox | Metric::PassesCompleted => 0,
            _ => 1,
        }
    }

    fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Metric {
    type Err = CompareError;

    fn from_str(s: &str) -> Result<Self> {
        Metric::ALL
            .into_iter()
            .find(|m| m.key() == s)
            .ok_or_else(|| CompareError::UnknownMetric {
                name: s.to_string(),
            })
    }
}

/// A validated `[lower, upper]` range with positive, finite width.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MetricBounds {
    lower: f64,
    upper: f64,
}

impl MetricBounds {
    pub fn new(lower: f64, upper: f64) -> Result<Self> {
        let width = upper - lower;
        if !(width.is_finite() && width > 0.0) {
            return Err(CompareError::ZeroWidthBounds { lower, upper });
        }
        Ok(Self { lower, upper })
    }

    pub fn lower(&self) -> f64 {
        self.lower
    }

    pub fn upper(&self) -> f64 {
        self.upper
    }

    pub(crate) fn width(&self) -> f64 {
        self.upper - self.lower
    }
}

/// Normalization range for every tracked metric.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricBoundsTable {
    bounds: [MetricBounds; 9],
}

impl Default for MetricBoundsTable {
    fn default() -> Self {
        const fn b(lower: f64, upper: f64) -> MetricBounds {
            MetricBounds { lower, upper }
        }
        Self {
            bounds: [
                b(0.0, 150.0),
                b(0.0, 50.0),
                b(0.0, 80.0),
                b(0.0, 50.0),
                b(0.0, 2000.0),
                b(0.0, 2500.0),
                b(0.0, 15.0),
                b(0.0, 100.0),
                b(0.0, 80.0),
            ],
        }
    }
}

impl MetricBoundsTable {
    pub fn get(&self, metric: Metric) -> MetricBounds {
        self.bounds[metric.index()]
    }

    /// Replace one metric's range. The range must be increasing.
    pub fn set(&mut self, metric: Metric, lower: f64, upper: f64) -> Result<()> {
        if !(lower.is_finite() && upper.is_finite() && upper > lower) {
            return Err(CompareError::InvalidBounds {
                metric: metric.key().to_string(),
                lower,
                upper,
            });
        }
        self.bounds[metric.index()] = MetricBounds::new(lower, upper)?;
        Ok(())
    }

    /// Apply `{ "tackles": [0, 120], ... }` on top of the defaults.
    pub fn from_overrides(overrides: &BTreeMap<String, [f64; 2]>) -> Result<Self> {
        let mut table = Self::default();
        for (name, [lower, upper]) in overrides {
            let metric: Metric = name.parse()?;
            table.set(metric, *lower, *upper)?;
        }
        Ok(table)
    }

    pub fn from_json_str(contents: &str) -> Result<Self> {
        let overrides: BTreeMap<String, [f64; 2]> = serde_json::from_str(contents)?;
        Self::from_overrides(&overrides)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Metric, MetricBounds)> + '_ {
        Metric::ALL.into_iter().map(move |m| (m, self.get(m)))
    }
}
