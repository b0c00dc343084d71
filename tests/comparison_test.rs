//! End-to-end behavior of the comparison engine through the public API

use player_compare::{
    format::{self, NOT_AVAILABLE},
    search::{resolve, CandidateRankingList, SearchResult, SeasonStatistic},
    stats::{aggregate, build, normalize, ComparisonDataset, Metric, MetricBoundsTable},
    CompareError,
};
use serde_json::json;

fn result(id: &str, combine: Option<f64>, similarity: Option<f64>) -> SearchResult {
    let mut r: SearchResult = serde_json::from_value(json!({
        "player_data": { "playerId": id, "fullName": id }
    }))
    .unwrap();
    r.combine_score = combine;
    r.similarity_score = similarity;
    r
}

fn names(list: &CandidateRankingList) -> Vec<&str> {
    list.iter()
        .map(|r| r.player_data.player_id.as_str())
        .collect()
}

#[test]
fn test_tackles_scenario() {
    let seasons: Vec<SeasonStatistic> = serde_json::from_value(json!([
        { "minutesPlayed": 0, "tackles": 10 },
        { "minutesPlayed": 1800, "tackles": 40 },
        { "minutesPlayed": 900, "tackles": 20 }
    ]))
    .unwrap();

    let profile = aggregate(&seasons);
    assert_eq!(profile.tackles, 30.0);
    assert_eq!(profile.get(Metric::Tackles), 30.0);
}

#[test]
fn test_promote_scenario() {
    let mut list = CandidateRankingList::new(vec![
        result("A", None, None),
        result("B", None, None),
        result("C", None, None),
        result("D", None, None),
    ]);

    list.promote(2).unwrap();
    assert_eq!(names(&list), vec!["C", "A", "B", "D"]);
}

#[test]
fn test_promote_out_of_range_reports_error() {
    let mut list = CandidateRankingList::new(vec![result("A", None, None)]);
    let err = list.promote(1).unwrap_err();

    assert!(matches!(err, CompareError::PromoteOutOfRange { index: 1, len: 1 }));
    assert_eq!(names(&list), vec!["A"]);
}

#[test]
fn test_minutes_scenario() {
    assert_eq!(format::format_minutes(Some(195.0)), "195 min (~2.1 games)");
}

#[test]
fn test_progressive_scenario() {
    let season = SeasonStatistic {
        minutes_played: Some(1800.0),
        passes_completed: Some(900.0),
        ..Default::default()
    };
    assert_eq!(format::progressive_per_90(Some(&season)), "45.0");
}

#[test]
fn test_combine_score_wins_when_both_present() {
    for (combine, similarity) in [(0.2, 0.9), (0.9, 0.2), (0.0, 1.0)] {
        let r = result("X", Some(combine), Some(similarity));
        assert_eq!(resolve(&r), combine);
    }
    assert_eq!(resolve(&result("Y", None, Some(0.33))), 0.33);
    assert_eq!(resolve(&result("Z", None, None)), 0.0);
}

#[test]
fn test_normalize_properties() {
    let table = MetricBoundsTable::default();
    for (metric, bounds) in table.iter() {
        let lo = bounds.lower();
        let hi = bounds.upper();
        assert_eq!(normalize(lo, lo, hi).unwrap(), 0.0, "{metric}");
        assert_eq!(normalize(hi, lo, hi).unwrap(), 100.0, "{metric}");
        assert_eq!(normalize(hi * 3.0, lo, hi).unwrap(), 100.0, "{metric}");
        assert_eq!(normalize(lo - 1.0, lo, hi).unwrap(), 0.0, "{metric}");
    }
    assert!(normalize(1.0, 2.0, 2.0).is_err());
}

#[test]
fn test_dataset_matches_axis_order() {
    let seasons: Vec<SeasonStatistic> = serde_json::from_value(json!([
        { "minutesPlayed": 3000, "duelsWon": 150, "passesCompleted": 1250, "touchesInBox": 500 }
    ]))
    .unwrap();

    let axes = build(&aggregate(&seasons), &MetricBoundsTable::default());
    let metrics: Vec<Metric> = axes.iter().map(|a| a.metric).collect();

    assert_eq!(metrics, Metric::ALL.to_vec());
    assert_eq!(axes[0].normalized, 100.0);
    assert_eq!(axes[4].normalized, 25.0);
    assert_eq!(axes[4].display, "500");
    assert_eq!(axes[5].normalized, 50.0);
    assert_eq!(axes[5].display, "1250");
    assert_eq!(axes[1].display, "0.0");
}

#[test]
fn test_promotion_changes_comparison_subject() {
    let mut first: SearchResult = serde_json::from_value(json!({
        "player_data": {
            "playerId": 1,
            "fullName": "Crosser",
            "season_statistics": [{ "minutesPlayed": 900, "crossesCompleted": 80 }]
        }
    }))
    .unwrap();
    first.combine_score = Some(0.9);
    let second = result("Dribbler", Some(0.8), None);

    let mut list = CandidateRankingList::new(vec![first, second]);
    let bounds = MetricBoundsTable::default();

    let before = ComparisonDataset::for_player(&list.primary().unwrap().player_data, &bounds);
    assert_eq!(before.values()[8], 100.0);

    list.promote(1).unwrap();
    let after = ComparisonDataset::for_player(&list.primary().unwrap().player_data, &bounds);
    assert_eq!(after.player_name, "Dribbler");
    assert!(after.values().iter().all(|v| *v == 0.0));
}

#[test]
fn test_missing_data_degrades_to_sentinels() {
    let bare = result("bare", None, None);
    let summary = format::primary_summary(&bare);

    assert_eq!(summary.score, "0.000");
    assert_eq!(summary.born, NOT_AVAILABLE);
    assert_eq!(summary.minutes, NOT_AVAILABLE);
    assert_eq!(summary.progressive_passes, NOT_AVAILABLE);
    assert_eq!(summary.goals, "0");
}
