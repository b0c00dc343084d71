//! Display-ready field sets for the rendering layer.
//!
//! Renderers show these strings as-is. Scores, dates, minutes and derived
//! rates are all resolved here, and every missing value becomes
//! [`NOT_AVAILABLE`] (or a documented zero) instead of an error.

use crate::search::score::resolve;
use crate::search::session::ResponseMeta;
use crate::search::types::{Player, SearchResult, SeasonStatistic};
use crate::search::CandidateRankingList;
use crate::stats::{ComparisonDataset, MetricBoundsTable};
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::Serialize;


/// Sentinel for missing or unparseable values.
pub const NOT_AVAILABLE: &str = "N/A";

const UNKNOWN_PLAYER: &str = "Unknown Player";

/// Round half away from zero to `decimals` places and format.
pub fn fixed(value: f64, decimals: usize) -> String {
    let factor = 10f64.powi(decimals as i32);
    let mut rounded = (value * factor).round() / factor;
    if rounded == 0.0 {
        // drop the sign of -0.0
        rounded = 0.0;
    }
    format!("{:.*}", decimals, rounded)
}

/// Resolved score with three decimals.
pub fn format_score(result: &SearchResult) -> String {
    fixed(resolve(result), 3)
}

/// Escape text for safe insertion into markup.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

fn text_or(value: Option<&str>, fallback: &str) -> String {
    match value.map(str::trim).filter(|v| !v.is_empty()) {
        Some(v) => escape_html(v),
        None => fallback.to_string(),
    }
}

fn number(value: f64) -> String {
    format!("{}", value)
}

fn number_or(value: Option<f64>, fallback: &str) -> String {
    value
        .filter(|v| v.is_finite())
        .map(number)
        .unwrap_or_else(|| fallback.to_string())
}

fn count_or_zero(value: Option<f64>) -> String {
    number_or(value, "0")
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt.date());
    }
    ["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y"]
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(raw, fmt).ok())
}

/// `"Jan 5, 1998"`, or [`NOT_AVAILABLE`] for missing or unparseable input.
pub fn format_date(raw: Option<&str>) -> String {
    raw.map(str::trim)
        .filter(|s| !s.is_empty())
        .and_then(parse_date)
        .map(|d| d.format("%b %-d, %Y").to_string())
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

/// Minutes with an approximate match count: `"195 min (~2.1 games)"`.
///
/// The digit after the point is `floor(remainder / 9)`, a tenth of a match.
pub fn format_minutes(minutes: Option<f64>) -> String {
    let Some(m) = minutes.filter(|m| m.is_finite() && *m > 0.0) else {
        return NOT_AVAILABLE.to_string();
    };
    if m < 90.0 {
        return format!("{} min", number(m));
    }
    let games = (m / 90.0).floor() as u64;
    let remainder = m % 90.0;
    if remainder > 0.0 {
        let tenths = (remainder / 9.0).floor() as u64;
        format!("{} min (~{}.{} games)", number(m), games, tenths)
    } else {
        format!("{} min (~{} games)", number(m), games)
    }
}

/// Passes completed per 90 minutes, one decimal.
///
/// Gated on minutes played first so the division never sees zero.
pub fn progressive_per_90(season: Option<&SeasonStatistic>) -> String {
    let Some(season) = season else {
        return NOT_AVAILABLE.to_string();
    };
    let Some(minutes) = season.minutes_played.filter(|m| m.is_finite() && *m > 0.0) else {
        return NOT_AVAILABLE.to_string();
    };
    match season.passes_completed.filter(|p| p.is_finite()) {
        Some(passes) => fixed(passes / (minutes / 90.0), 1),
        None => NOT_AVAILABLE.to_string(),
    }
}

/// Summary card for one search result.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CandidateCard {
    pub player_id: String,
    pub score: String,
    pub name: String,
    pub position: String,
    pub nationality: String,
    pub club: String,
    pub age: String,
}

pub fn card(result: &SearchResult) -> CandidateCard {
    let player = &result.player_data;
    CandidateCard {
        player_id: escape_html(player.player_id.as_str()),
        score: format_score(result),
        name: text_or(player.full_name.as_deref(), UNKNOWN_PLAYER),
        position: text_or(player.position.as_deref(), NOT_AVAILABLE),
        nationality: text_or(player.nationality.as_deref(), NOT_AVAILABLE),
        club: text_or(player.club_name(), NOT_AVAILABLE),
        age: player
            .age
            .filter(|a| a.is_finite())
            .map(|a| format!("{} years", number(a)))
            .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BasicInfo {
    pub full_name: String,
    pub date_of_birth: String,
    pub height: String,
    pub weight: String,
    pub preferred_foot: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CareerStats {
    pub total_appearances: String,
    pub career_goals: String,
    pub career_assists: String,
    pub total_seasons: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LatestSeason {
    pub season: String,
    pub appearances: String,
    pub goals: String,
    pub assists: String,
    pub minutes: String,
    pub yellow_cards: String,
    pub tackles: String,
    pub dribbles_completed: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClubInfo {
    pub current_club: String,
    pub stadium: String,
    pub joined_season: String,
    pub shirt_number: String,
    /// Present only when the player has been at more than one club.
    pub clubs_played: Option<String>,
}

/// Expanded detail panel for one player.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerDetail {
    pub basic: BasicInfo,
    pub career: CareerStats,
    pub latest_season: Option<LatestSeason>,
    pub club: ClubInfo,
}

fn with_unit(value: Option<f64>, unit: &str) -> String {
    value
        .filter(|v| v.is_finite() && *v > 0.0)
        .map(|v| format!("{} {}", number(v), unit))
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

pub fn detail(player: &Player) -> PlayerDetail {
    let latest_season = player.latest_season().map(|s| LatestSeason {
        season: text_or(s.season_id.as_deref(), "Unknown"),
        appearances: count_or_zero(s.appearances),
        goals: count_or_zero(s.goals),
        assists: count_or_zero(s.assists),
        minutes: format_minutes(s.minutes_played),
        yellow_cards: count_or_zero(s.yellow_cards),
        tackles: count_or_zero(s.tackles),
        dribbles_completed: count_or_zero(s.dribbles_completed),
    });

    let club = player.current_club.as_ref();
    PlayerDetail {
        basic: BasicInfo {
            full_name: text_or(player.full_name.as_deref(), UNKNOWN_PLAYER),
            date_of_birth: format_date(player.date_of_birth.as_deref()),
            height: with_unit(player.height_cm, "cm"),
            weight: with_unit(player.weight_kg, "kg"),
            preferred_foot: text_or(player.preferred_foot.as_deref(), NOT_AVAILABLE),
        },
        career: CareerStats {
            total_appearances: count_or_zero(player.total_appearances),
            career_goals: count_or_zero(player.career_goals),
            career_assists: count_or_zero(player.career_assists),
            total_seasons: number_or(player.total_seasons, NOT_AVAILABLE),
        },
        latest_season,
        club: ClubInfo {
            current_club: text_or(player.club_name(), NOT_AVAILABLE),
            stadium: text_or(club.and_then(|c| c.stadium.as_deref()), NOT_AVAILABLE),
            joined_season: text_or(player.joined_season.as_deref(), NOT_AVAILABLE),
            shirt_number: number_or(player.shirt_number, NOT_AVAILABLE),
            clubs_played: (player.club_history.len() > 1)
                .then(|| format!("{} clubs", player.club_history.len())),
        },
    }
}

/// Full-detail header for the primary player.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PrimarySummary {
    pub score: String,
    pub name: String,
    pub nationality: String,
    pub born: String,
    pub age: String,
    pub club: String,
    pub position: String,
    pub goals: String,
    pub assists: String,
    pub appearances: String,
    pub expected_assists: String,
    pub minutes: String,
    pub progressive_passes: String,
    pub passes: String,
    pub aerial_duels: String,
}

pub fn primary_summary(result: &SearchResult) -> PrimarySummary {
    let player = &result.player_data;
    let latest = player.latest_season();
    let latest_metric = |pick: fn(&SeasonStatistic) -> Option<f64>| {
        number_or(latest.and_then(pick), NOT_AVAILABLE)
    };

    PrimarySummary {
        score: format_score(result),
        name: text_or(player.full_name.as_deref(), UNKNOWN_PLAYER),
        nationality: text_or(player.nationality.as_deref(), NOT_AVAILABLE),
        born: format_date(player.date_of_birth.as_deref()),
        age: number_or(player.age, NOT_AVAILABLE),
        club: text_or(player.club_name(), NOT_AVAILABLE),
        position: text_or(player.position.as_deref(), NOT_AVAILABLE),
        goals: count_or_zero(player.total_goals),
        assists: count_or_zero(player.total_assists),
        appearances: count_or_zero(player.total_appearances),
        expected_assists: latest_metric(|s| s.expected_assists),
        minutes: format_minutes(latest.and_then(|s| s.minutes_played)),
        progressive_passes: progressive_per_90(latest),
        passes: latest_metric(|s| s.passes_completed),
        aerial_duels: latest_metric(|s| s.aerial_duels_won),
    }
}

/// One row of the similar-players table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimilarPlayerRow {
    /// 1-based list position; the first similar player is rank 2.
    pub rank: usize,
    /// Index to pass to a promotion.
    pub index: usize,
    pub player_id: String,
    pub name: String,
    pub nationality: String,
    pub club: String,
    pub position: String,
    pub age: String,
}

pub fn similar_rows(ranking: &CandidateRankingList) -> Vec<SimilarPlayerRow> {
    ranking
        .similar()
        .iter()
        .enumerate()
        .map(|(i, result)| {
            let player = &result.player_data;
            SimilarPlayerRow {
                rank: i + 2,
                index: i + 1,
                player_id: escape_html(player.player_id.as_str()),
                name: text_or(player.full_name.as_deref(), NOT_AVAILABLE),
                nationality: text_or(player.nationality.as_deref(), NOT_AVAILABLE),
                club: text_or(player.club_name(), NOT_AVAILABLE),
                position: text_or(player.position.as_deref(), NOT_AVAILABLE),
                age: number_or(player.age, NOT_AVAILABLE),
            }
        })
        .collect()
}

/// Heading shown above the result list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultsHeader {
    pub title: String,
    pub query: String,
    pub total_results: usize,
    pub empty_message: Option<String>,
}

pub fn header(meta: &ResponseMeta, shown: usize) -> ResultsHeader {
    ResultsHeader {
        title: format!("Search Results ({})", meta.search_type.display_name()),
        query: escape_html(&meta.query),
        total_results: meta.total_results,
        empty_message: (shown == 0).then(|| {
            "No players found matching your search criteria. \
             Try different keywords or search type."
                .to_string()
        }),
    }
}

/// Everything the rendering layer needs for the current list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Overview {
    pub header: ResultsHeader,
    pub primary: Option<PrimarySummary>,
    pub detail: Option<PlayerDetail>,
    pub comparison: Option<ComparisonDataset>,
    pub candidates: Vec<CandidateCard>,
    pub similar: Vec<SimilarPlayerRow>,
}

pub fn overview(
    meta: &ResponseMeta,
    ranking: &CandidateRankingList,
    bounds: &MetricBoundsTable,
) -> Overview {
    let primary = ranking.primary();
    Overview {
        header: header(meta, ranking.len()),
        primary: primary.map(primary_summary),
        detail: primary.map(|p| detail(&p.player_data)),
        comparison: primary.map(|p| ComparisonDataset::for_player(&p.player_data, bounds)),
        candidates: ranking.iter().map(card).collect(),
        similar: similar_rows(ranking),
    }
}
