//! Common utilities and helper functions shared across commands.
//!
//! This module contains shared functionality that would otherwise be duplicated
//! across different command implementations.

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use crate::{
    cli::OutputArgs,
    core::{cache, config},
    error::{CompareError, Result},
    format::{self, Overview},
    search::SearchSession,
    stats::MetricBoundsTable,
};

/// Context containing common resources needed by most commands
pub struct CommandContext {
    pub session_path: PathBuf,
    pub bounds: MetricBoundsTable,
}

impl CommandContext {
    /// Resolve the session cache and bounds configuration from the environment.
    pub fn new(bounds_override: Option<&Path>) -> Result<Self> {
        Ok(Self {
            session_path: cache::session_path(),
            bounds: config::load_bounds_table(bounds_override)?,
        })
    }

    /// Context with explicit paths, bypassing env lookup.
    pub fn with_paths(session_path: PathBuf, bounds: MetricBoundsTable) -> Self {
        Self {
            session_path,
            bounds,
        }
    }

    /// Restore the stored session, or report that nothing was loaded yet.
    pub fn load_session(&self) -> Result<SearchSession> {
        cache::load_session(&self.session_path)?
            .map(SearchSession::restore)
            .ok_or(CompareError::NoSession)
    }

    pub fn save_session(&self, session: &SearchSession) -> Result<()> {
        cache::save_session(&self.session_path, &session.snapshot())
    }

    pub fn overview(&self, session: &SearchSession) -> Overview {
        let meta = session.meta().cloned().unwrap_or_default();
        format::overview(&meta, session.ranking(), &self.bounds)
    }
}

/// Print an overview as JSON or text.
pub fn print_overview(overview: &Overview, output: OutputArgs) -> Result<()> {
    if output.json {
        println!("{}", serde_json::to_string_pretty(overview)?); // tarpaulin::skip
    } else {
        print!("{}", render_overview(overview)); // tarpaulin::skip
    }
    Ok(())
}

fn bar(normalized: f64) -> String {
    let filled = (normalized / 5.0).round().clamp(0.0, 20.0) as usize;
    format!("{}{}", "#".repeat(filled), ".".repeat(20 - filled))
}

/// Plain-text rendering of an overview.
pub fn render_overview(overview: &Overview) -> String {
    let mut out = String::new();
    let header = &overview.header;

    let _ = writeln!(out, "{}", header.title);
    let _ = writeln!(
        out,
        "Query: \"{}\" | Found: {} players",
        header.query, header.total_results
    );
    if let Some(message) = &header.empty_message {
        let _ = writeln!(out, "{}", message);
        return out;
    }

    if let Some(p) = &overview.primary {
        let _ = writeln!(out);
        let _ = writeln!(out, "★ {} (score {})", p.name, p.score);
        let _ = writeln!(
            out,
            "  Nationality: {} | Born: {} | Age: {}",
            p.nationality, p.born, p.age
        );
        let _ = writeln!(out, "  Club: {} | Position: {}", p.club, p.position);
        let _ = writeln!(
            out,
            "  Goals: {} | Assists: {} | Appearances: {}",
            p.goals, p.assists, p.appearances
        );
        let _ = writeln!(
            out,
            "  Minutes: {} | xA: {} | Passes: {} | Progressive/90: {} | Aerial duels: {}",
            p.minutes, p.expected_assists, p.passes, p.progressive_passes, p.aerial_duels
        );
    }

    if let Some(dataset) = &overview.comparison {
        let _ = writeln!(out);
        let _ = writeln!(
            out,
            "Comparison ({} seasons averaged)",
            dataset.seasons_counted
        );
        for axis in &dataset.axes {
            let _ = writeln!(
                out,
                "  {:<17} {:>7}  [{}] {:>3.0}",
                axis.label,
                axis.display,
                bar(axis.normalized),
                axis.normalized
            );
        }
    }

    if !overview.similar.is_empty() {
        let name = overview
            .primary
            .as_ref()
            .map(|p| p.name.as_str())
            .unwrap_or("Unknown Player");
        let _ = writeln!(out);
        let _ = writeln!(out, "Similar to {}", name);
        for row in &overview.similar {
            let _ = writeln!(
                out,
                "  {:>2}. {} | {} | {} | {} | {}",
                row.rank, row.name, row.nationality, row.club, row.position, row.age
            );
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::SearchResponse;
    use serde_json::json;
    use tempfile::TempDir;

    fn response() -> SearchResponse {
        serde_json::from_value(json!({
            "query": "target man",
            "search_type": "semantic",
            "results": [
                { "player_data": { "playerId": 1, "fullName": "Big Nine",
                    "season_statistics": [{ "minutesPlayed": 900, "aerialDuelsWon": 25 }] },
                  "similarity_score": 0.9 },
                { "player_data": { "playerId": 2, "fullName": "Second Nine" },
                  "similarity_score": 0.8 }
            ]
        }))
        .unwrap()
    }

    #[test]
    fn test_load_session_without_cache_is_no_session() {
        let dir = TempDir::new().unwrap();
        let ctx = CommandContext::with_paths(
            dir.path().join("session.json"),
            MetricBoundsTable::default(),
        );

        assert!(matches!(ctx.load_session(), Err(CompareError::NoSession)));
    }

    #[test]
    fn test_save_then_load_session() {
        let dir = TempDir::new().unwrap();
        let ctx = CommandContext::with_paths(
            dir.path().join("session.json"),
            MetricBoundsTable::default(),
        );
        let mut session = SearchSession::new();
        session.apply(response());
        session.select(1).unwrap();

        ctx.save_session(&session).unwrap();
        let restored = ctx.load_session().unwrap();

        assert_eq!(restored.ranking(), session.ranking());
    }

    #[test]
    fn test_render_overview_text() {
        let mut session = SearchSession::new();
        session.apply(response());
        let ctx = CommandContext::with_paths(PathBuf::from("unused"), MetricBoundsTable::default());

        let text = render_overview(&ctx.overview(&session));

        assert!(text.starts_with("Search Results (Semantic Only)\n"));
        assert!(text.contains("★ Big Nine (score 0.900)"));
        assert!(text.contains("Aerial Duels"));
        assert!(text.contains("[##########..........]"));
        assert!(text.contains(" 2. Second Nine"));
    }

    #[test]
    fn test_render_overview_empty() {
        let session = SearchSession::new();
        let ctx = CommandContext::with_paths(PathBuf::from("unused"), MetricBoundsTable::default());

        let text = render_overview(&ctx.overview(&session));
        assert!(text.contains("No players found"));
        assert!(!text.contains('★'));
    }

    #[test]
    fn test_bar_width() {
        assert_eq!(bar(0.0), ".".repeat(20));
        assert_eq!(bar(100.0), "#".repeat(20));
        assert_eq!(bar(52.0), format!("{}{}", "#".repeat(10), ".".repeat(10)));
    }
}
