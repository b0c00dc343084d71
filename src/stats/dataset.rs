//! Labeled radar-chart dataset for the primary player.

use super::aggregate::{aggregate, AggregatedProfile};
use super::bounds::{Metric, MetricBoundsTable};
use super::normalize::scale;
use crate::format::fixed;
use crate::search::types::Player;
use serde::Serialize;

/// One chart axis: label, averaged raw value and its 0-100 position.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormalizedAxis {
    pub metric: Metric,
    pub label: &'static str,
    pub raw: f64,
    /// Raw value rounded for legends and tooltips.
    pub display: String,
    pub normalized: f64,
}

/// Build the nine axes in fixed order.
///
/// Positions in the returned vector line up with [`Metric::ALL`]; chart
/// widgets rely on that correspondence.
pub fn build(profile: &AggregatedProfile, bounds: &MetricBoundsTable) -> Vec<NormalizedAxis> {
    Metric::ALL
        .into_iter()
        .map(|metric| {
            let raw = profile.get(metric);
            NormalizedAxis {
                metric,
                label: metric.label(),
                raw,
                display: fixed(raw, metric.display_decimals()),
                normalized: scale(raw, bounds.get(metric)),
            }
        })
        .collect()
}

/// Chart-ready dataset for a single player.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonDataset {
    pub player_name: String,
    pub seasons_counted: usize,
    pub axes: Vec<NormalizedAxis>,
}

impl ComparisonDataset {
    pub fn for_player(player: &Player, bounds: &MetricBoundsTable) -> Self {
        let profile = aggregate(&player.season_statistics);
        Self {
            player_name: player
                .full_name
                .clone()
                .unwrap_or_else(|| "Unknown Player".to_string()),
            seasons_counted: profile.seasons_counted,
            axes: build(&profile, bounds),
        }
    }

    pub fn labels(&self) -> Vec<&'static str> {
        self.axes.iter().map(|a| a.label).collect()
    }

    pub fn values(&self) -> Vec<f64> {
        self.axes.iter().map(|a| a.normalized).collect()
    }

    /// `(label, rounded raw value)` pairs shown beside the chart.
    pub fn legend(&self) -> Vec<(&'static str, &str)> {
        self.axes
            .iter()
            .map(|a| (a.label, a.display.as_str()))
            .collect()
    }
}
