//! Reduce a player's season history to one averaged profile.

use super::bounds::Metric;
use crate::search::types::SeasonStatistic;
use serde::Serialize;

/// Per-metric arithmetic mean over valid seasons.
///
/// With no valid seasons every metric is `0.0`: a normalization zero point,
/// not missing data.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregatedProfile {
    pub duels_won: f64,
    pub aerial_duels_won: f64,
    pub tackles: f64,
    pub interceptions: f64,
    pub touches_in_box: f64,
    pub passes_completed: f64,
    pub expected_assists: f64,
    pub dribbles_completed: f64,
    pub crosses_completed: f64,
    /// Number of seasons that contributed.
    pub seasons_counted: usize,
}

impl AggregatedProfile {
    pub fn get(&self, metric: Metric) -> f64 {
        match metric {
            Metric::DuelsWon => self.duels_won,
            Metric::AerialDuelsWon => self.aerial_duels_won,
            Metric::Tackles => self.tackles,
            Metric::Interceptions => self.interceptions,
            Metric::TouchesInBox => self.touches_in_box,
            Metric::PassesCompleted => self.passes_completed,
            Metric::ExpectedAssists => self.expected_assists,
            Metric::DribblesCompleted => self.dribbles_completed,
            Metric::CrossesCompleted => self.crosses_completed,
        }
    }

    fn set(&mut self, metric: Metric, value: f64) {
        let slot = match metric {
            Metric::DuelsWon => &mut self.duels_won,
            Metric::AerialDuelsWon => &mut self.aerial_duels_won,
            Metric::Tackles => &mut self.tackles,
            Metric::Interceptions => &mut self.interceptions,
            Metric::TouchesInBox => &mut self.touches_in_box,
            Metric::PassesCompleted => &mut self.passes_completed,
            Metric::ExpectedAssists => &mut self.expected_assists,
            Metric::DribblesCompleted => &mut self.dribbles_completed,
            Metric::CrossesCompleted => &mut self.crosses_completed,
        };
        *slot = value;
    }
}

impl SeasonStatistic {
    /// Raw counter for a tracked metric; absent or non-finite reads as zero.
    pub fn metric(&self, metric: Metric) -> f64 {
        let value = match metric {
            Metric::DuelsWon => self.duels_won,
            Metric::AerialDuelsWon => self.aerial_duels_won,
            Metric::Tackles => self.tackles,
            Metric::Interceptions => self.interceptions,
            Metric::TouchesInBox => self.touches_in_box,
            Metric::PassesCompleted => self.passes_completed,
            Metric::ExpectedAssists => self.expected_assists,
            Metric::DribblesCompleted => self.dribbles_completed,
            Metric::CrossesCompleted => self.crosses_completed,
        };
        value.filter(|v| v.is_finite()).unwrap_or(0.0)
    }
}

/// Average every tracked metric over seasons with `minutesPlayed > 0`.
pub fn aggregate(seasons: &[SeasonStatistic]) -> AggregatedProfile {
    let valid: Vec<&SeasonStatistic> = seasons.iter().filter(|s| s.is_valid()).collect();
    if valid.is_empty() {
        return AggregatedProfile::default();
    }

    let count = valid.len();
    let mut profile = AggregatedProfile {
        seasons_counted: count,
        ..Default::default()
    };

    let mut values = Vec::with_capacity(count);
    for metric in Metric::ALL {
        values.clear();
        values.extend(valid.iter().map(|s| s.metric(metric)));
        // Sum in sorted order so any permutation of seasons yields identical bits.
        values.sort_by(f64::total_cmp);
        let total: f64 = values.iter().sum();
        profile.set(metric, total / count as f64);
    }

    profile
}
