//! Unit tests for aggregation, normalization and dataset building

use super::*;
use crate::search::types::{Player, SeasonStatistic};
use serde_json::json;

fn season(minutes: Option<f64>, tackles: Option<f64>) -> SeasonStatistic {
    SeasonStatistic {
        minutes_played: minutes,
        tackles,
        ..Default::default()
    }
}

#[cfg(test)]
mod aggregate_tests {
    use super::*;

    #[test]
    fn test_invalid_seasons_are_skipped() {
        let seasons = vec![
            season(Some(0.0), Some(10.0)),
            season(Some(1800.0), Some(40.0)),
            season(Some(900.0), Some(20.0)),
        ];

        let profile = aggregate(&seasons);
        assert_eq!(profile.tackles, 30.0);
        assert_eq!(profile.seasons_counted, 2);
    }

    #[test]
    fn test_all_invalid_yields_zero_profile() {
        let seasons = vec![
            season(None, Some(50.0)),
            season(Some(0.0), Some(12.0)),
            season(Some(-30.0), Some(7.0)),
        ];

        assert_eq!(aggregate(&seasons), AggregatedProfile::default());
        assert_eq!(aggregate(&[]), AggregatedProfile::default());
    }

    #[test]
    fn test_missing_metric_counts_as_zero() {
        let seasons = vec![season(Some(90.0), Some(9.0)), season(Some(90.0), None)];

        let profile = aggregate(&seasons);
        assert_eq!(profile.tackles, 4.5);
        assert_eq!(profile.crosses_completed, 0.0);
    }

    #[test]
    fn test_season_without_identifier_still_counts() {
        let seasons = vec![SeasonStatistic {
            season_id: None,
            minutes_played: Some(270.0),
            duels_won: Some(21.0),
            ..Default::default()
        }];

        assert_eq!(aggregate(&seasons).duels_won, 21.0);
    }

    #[test]
    fn test_non_finite_counter_contributes_zero() {
        let seasons = vec![
            SeasonStatistic {
                minutes_played: Some(900.0),
                interceptions: Some(f64::NAN),
                ..Default::default()
            },
            SeasonStatistic {
                minutes_played: Some(900.0),
                interceptions: Some(8.0),
                ..Default::default()
            },
        ];

        assert_eq!(aggregate(&seasons).interceptions, 4.0);
    }

    #[test]
    fn test_order_independence() {
        let seasons = vec![
            SeasonStatistic {
                minutes_played: Some(1234.0),
                expected_assists: Some(0.1),
                passes_completed: Some(811.0),
                ..Default::default()
            },
            SeasonStatistic {
                minutes_played: Some(2000.0),
                expected_assists: Some(0.2),
                passes_completed: Some(1403.0),
                ..Default::default()
            },
            SeasonStatistic {
                minutes_played: Some(45.0),
                expected_assists: Some(0.3),
                passes_completed: Some(12.0),
                ..Default::default()
            },
            season(Some(0.0), Some(99.0)),
        ];

        let forward = aggregate(&seasons);
        let mut reversed = seasons.clone();
        reversed.reverse();
        let mut rotated = seasons.clone();
        rotated.rotate_left(1);

        assert_eq!(forward, aggregate(&reversed));
        assert_eq!(forward, aggregate(&rotated));
    }
}

#[cfg(test)]
mod normalize_tests {
    use super::*;
    use crate::error::CompareError;

    #[test]
    fn test_endpoints() {
        assert_eq!(normalize(0.0, 0.0, 150.0).unwrap(), 0.0);
        assert_eq!(normalize(150.0, 0.0, 150.0).unwrap(), 100.0);
        assert_eq!(normalize(20.0, 10.0, 30.0).unwrap(), 50.0);
    }

    #[test]
    fn test_saturates_outside_range() {
        assert_eq!(normalize(-5.0, 0.0, 50.0).unwrap(), 0.0);
        assert_eq!(normalize(5000.0, 0.0, 2500.0).unwrap(), 100.0);
    }

    #[test]
    fn test_monotonic_and_bounded() {
        let mut previous = f64::NEG_INFINITY;
        for step in -20..=120 {
            let value = step as f64;
            let n = normalize(value, 0.0, 80.0).unwrap();
            assert!((0.0..=100.0).contains(&n), "{value} -> {n}");
            assert!(n >= previous, "not monotonic at {value}");
            previous = n;
        }
    }

    #[test]
    fn test_zero_width_fails_fast() {
        match normalize(3.0, 7.0, 7.0).unwrap_err() {
            CompareError::ZeroWidthBounds { lower, upper } => {
                assert_eq!((lower, upper), (7.0, 7.0));
            }
            other => panic!("Expected ZeroWidthBounds, got {other:?}"),
        }
    }

    #[test]
    fn test_inverted_range_is_rejected() {
        assert!(matches!(
            normalize(40.0, 80.0, 0.0),
            Err(CompareError::ZeroWidthBounds { .. })
        ));
    }

    #[test]
    fn test_nan_value_scales_to_zero() {
        let bounds = MetricBounds::new(0.0, 10.0).unwrap();
        assert_eq!(scale(f64::NAN, bounds), 0.0);
    }
}

#[cfg(test)]
mod dataset_tests {
    use super::*;

    #[test]
    fn test_axis_order_and_labels() {
        let axes = build(&AggregatedProfile::default(), &MetricBoundsTable::default());
        let labels: Vec<&str> = axes.iter().map(|a| a.label).collect();

        assert_eq!(
            labels,
            vec![
                "Duels Won",
                "Aerial Duels",
                "Tackles",
                "Interceptions",
                "Touches in Box",
                "Passes",
                "Expected Assists",
                "Dribbles",
                "Crosses",
            ]
        );
        assert!(axes.iter().all(|a| a.normalized == 0.0));
    }

    #[test]
    fn test_raw_and_normalized_values() {
        let profile = AggregatedProfile {
            duels_won: 75.0,
            touches_in_box: 1234.56,
            passes_completed: 3000.0,
            expected_assists: 2.25,
            ..Default::default()
        };

        let axes = build(&profile, &MetricBoundsTable::default());

        assert_eq!(axes[0].normalized, 50.0);
        assert_eq!(axes[0].display, "75.0");
        assert_eq!(axes[4].display, "1235");
        assert_eq!(axes[5].normalized, 100.0);
        assert_eq!(axes[5].raw, 3000.0);
        assert_eq!(axes[5].display, "3000");
        assert_eq!(axes[6].display, "2.3");
        assert_eq!(axes[6].normalized, 15.0);
    }

    #[test]
    fn test_dataset_for_player() {
        let player: Player = serde_json::from_value(json!({
            "playerId": 10,
            "fullName": "Lena Winger",
            "season_statistics": [
                { "minutesPlayed": 2000, "crossesCompleted": 60, "dribblesCompleted": 50 },
                { "minutesPlayed": 1000, "crossesCompleted": 20, "dribblesCompleted": 30 },
                { "minutesPlayed": 0, "crossesCompleted": 80 }
            ]
        }))
        .unwrap();

        let dataset = ComparisonDataset::for_player(&player, &MetricBoundsTable::default());

        assert_eq!(dataset.player_name, "Lena Winger");
        assert_eq!(dataset.seasons_counted, 2);
        assert_eq!(dataset.values()[7], 40.0);
        assert_eq!(dataset.values()[8], 50.0);
        assert_eq!(dataset.legend()[8], ("Crosses", "40.0"));
        assert_eq!(dataset.labels().len(), 9);
    }

    #[test]
    fn test_dataset_for_player_without_history() {
        let player: Player = serde_json::from_value(json!({ "playerId": 3 })).unwrap();
        let dataset = ComparisonDataset::for_player(&player, &MetricBoundsTable::default());

        assert_eq!(dataset.player_name, "Unknown Player");
        assert_eq!(dataset.seasons_counted, 0);
        assert!(dataset.values().iter().all(|v| *v == 0.0));
        assert_eq!(dataset.legend()[4], ("Touches in Box", "0"));
    }
}
