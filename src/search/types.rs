//! Search response payloads: players, their season history, and score signals.
//!
//! Every statistic is optional. Consumers resolve absent values through
//! the aggregation and formatting rules instead of probing fields ad hoc.

use crate::cli::types::ids::PlayerId;
use crate::cli::types::SearchType;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;


/// One season's raw counters for a player.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeasonStatistic {
    #[serde(default, deserialize_with = "de_lenient_text")]
    pub season_id: Option<String>,
    #[serde(default, deserialize_with = "de_lenient_number")]
    pub minutes_played: Option<f64>,
    #[serde(default, deserialize_with = "de_lenient_number")]
    pub appearances: Option<f64>,
    #[serde(default, deserialize_with = "de_lenient_number")]
    pub goals: Option<f64>,
    #[serde(default, deserialize_with = "de_lenient_number")]
    pub assists: Option<f64>,
    #[serde(default, deserialize_with = "de_lenient_number")]
    pub yellow_cards: Option<f64>,
    #[serde(default, deserialize_with = "de_lenient_number")]
    pub duels_won: Option<f64>,
    #[serde(default, deserialize_with = "de_lenient_number")]
    pub aerial_duels_won: Option<f64>,
    #[serde(default, deserialize_with = "de_lenient_number")]
    pub tackles: Option<f64>,
    #[serde(default, deserialize_with = "de_lenient_number")]
    pub interceptions: Option<f64>,
    #[serde(default, deserialize_with = "de_lenient_number")]
    pub touches_in_box: Option<f64>,
    #[serde(default, deserialize_with = "de_lenient_number")]
    pub passes_completed: Option<f64>,
    #[serde(default, deserialize_with = "de_lenient_number")]
    pub expected_assists: Option<f64>,
    #[serde(default, deserialize_with = "de_lenient_number")]
    pub dribbles_completed: Option<f64>,
    #[serde(default, deserialize_with = "de_lenient_number")]
    pub crosses_completed: Option<f64>,
}

impl SeasonStatistic {
    /// A season counts towards averages only when minutes were actually played.
    pub fn is_valid(&self) -> bool {
        self.minutes_played.is_some_and(|m| m > 0.0)
    }
}

/// Club the player is currently registered with.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Club {
    #[serde(default, deserialize_with = "de_lenient_text")]
    pub club_name: Option<String>,
    #[serde(default, deserialize_with = "de_lenient_text")]
    pub stadium: Option<String>,
}

/// Player identity, affiliation, career totals and season history.
///
/// `season_statistics` is ordered most recent first.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Player {
    #[serde(rename = "playerId")]
    pub player_id: PlayerId,
    #[serde(rename = "fullName", default, deserialize_with = "de_lenient_text")]
    pub full_name: Option<String>,
    #[serde(default, deserialize_with = "de_lenient_text")]
    pub nationality: Option<String>,
    #[serde(default, deserialize_with = "de_lenient_text")]
    pub position: Option<String>,
    #[serde(rename = "dateOfBirth", default, deserialize_with = "de_lenient_text")]
    pub date_of_birth: Option<String>,
    #[serde(default, deserialize_with = "de_lenient_number")]
    pub age: Option<f64>,
    #[serde(rename = "heightCm", default, deserialize_with = "de_lenient_number")]
    pub height_cm: Option<f64>,
    #[serde(rename = "weightKg", default, deserialize_with = "de_lenient_number")]
    pub weight_kg: Option<f64>,
    #[serde(rename = "preferredFoot", default, deserialize_with = "de_lenient_text")]
    pub preferred_foot: Option<String>,
    #[serde(default, deserialize_with = "de_lenient_club")]
    pub current_club: Option<Club>,
    #[serde(default, deserialize_with = "de_lenient_list")]
    pub club_history: Vec<Value>,
    #[serde(rename = "joinedSeason", default, deserialize_with = "de_lenient_text")]
    pub joined_season: Option<String>,
    #[serde(rename = "shirtNumber", default, deserialize_with = "de_lenient_number")]
    pub shirt_number: Option<f64>,
    #[serde(rename = "totalGoals", default, deserialize_with = "de_lenient_number")]
    pub total_goals: Option<f64>,
    #[serde(rename = "totalAssists", default, deserialize_with = "de_lenient_number")]
    pub total_assists: Option<f64>,
    #[serde(rename = "totalAppearances", default, deserialize_with = "de_lenient_number")]
    pub total_appearances: Option<f64>,
    #[serde(default, deserialize_with = "de_lenient_number")]
    pub career_goals: Option<f64>,
    #[serde(default, deserialize_with = "de_lenient_number")]
    pub career_assists: Option<f64>,
    #[serde(default, deserialize_with = "de_lenient_number")]
    pub total_seasons: Option<f64>,
    #[serde(default, deserialize_with = "de_seasons")]
    pub season_statistics: Vec<SeasonStatistic>,
}

impl Player {
    /// Most recent season, if any history exists.
    pub fn latest_season(&self) -> Option<&SeasonStatistic> {
        self.season_statistics.first()
    }

    pub fn club_name(&self) -> Option<&str> {
        self.current_club
            .as_ref()
            .and_then(|club| club.club_name.as_deref())
    }
}

/// A player plus whichever score signals the backend attached.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SearchResult {
    pub player_data: Player,
    #[serde(
        default,
        deserialize_with = "de_lenient_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub combine_score: Option<f64>,
    #[serde(
        default,
        deserialize_with = "de_lenient_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub similarity_score: Option<f64>,
}

/// Top-level envelope returned by the search endpoint.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub query: String,
    #[serde(default)]
    pub total_results: Option<usize>,
    #[serde(default, deserialize_with = "de_lenient_text")]
    pub search_type: Option<String>,
    #[serde(default, deserialize_with = "de_results")]
    pub results: Vec<SearchResult>,
}

impl SearchResponse {
    /// Anything other than an explicit `hybrid` is treated as semantic-only.
    pub fn search_type(&self) -> SearchType {
        match self.search_type.as_deref() {
            Some(t) if t.eq_ignore_ascii_case("hybrid") => SearchType::Hybrid,
            _ => SearchType::Semantic,
        }
    }

    /// Reported total, falling back to the number of results actually present.
    pub fn total_results(&self) -> usize {
        self.total_results.unwrap_or(self.results.len())
    }
}

/// Numeric counter; anything other than a JSON number reads as absent.
fn de_lenient_number<'de, D>(deserializer: D) -> std::result::Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_f64(),
        _ => None,
    })
}

/// Identifier-like text that may arrive as a string or a number.
fn de_lenient_text<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    })
}

fn de_lenient_club<'de, D>(deserializer: D) -> std::result::Result<Option<Club>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(serde_json::from_value(Value::deserialize(deserializer)?).ok())
}

/// `null` or a non-array reads as an empty list.
fn de_lenient_list<'de, D>(deserializer: D) -> std::result::Result<Vec<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => items,
        _ => Vec::new(),
    })
}

/// Malformed entries become empty seasons so positions (and the latest
/// season) are preserved while contributing nothing to averages.
fn de_seasons<'de, D>(deserializer: D) -> std::result::Result<Vec<SeasonStatistic>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(de_lenient_list(deserializer)?
        .into_iter()
        .map(|entry| serde_json::from_value(entry).unwrap_or_default())
        .collect())
}

/// Results that cannot be read as a player are skipped.
fn de_results<'de, D>(deserializer: D) -> std::result::Result<Vec<SearchResult>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(de_lenient_list(deserializer)?
        .into_iter()
        .enumerate()
        .filter_map(|(position, entry)| match serde_json::from_value(entry) {
            Ok(result) => Some(result),
            Err(e) => {
                tracing::warn!(position, error = %e, "Skipping unreadable search result");
                None
            }
        })
        .collect())
}
