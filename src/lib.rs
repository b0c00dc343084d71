//! Football Player Comparison Library
//!
//! Turns player search results into a ranked candidate list with one pinned
//! "primary" player, and derives everything a front end needs to compare
//! that player against the rest.
//!
//! ## Features
//!
//! - **Season Aggregation**: Average a player's history over seasons with minutes played
//! - **Metric Normalization**: Scale counts, rates and ratios onto a shared 0-100 axis
//! - **Comparison Dataset**: Nine fixed radar-chart axes with raw legend values
//! - **Score Resolution**: Prefer hybrid `combine_score` over `similarity_score`
//! - **Candidate Ranking**: Promote any candidate to primary without losing order
//! - **Display Formatting**: Dates, minutes, per-90 rates and "N/A" fallbacks
//!
//! ## Quick Start
//!
//! ```rust
//! use player_compare::{format, search::SearchSession, stats::MetricBoundsTable, SearchType};
//! use serde_json::json;
//!
//! # fn example() -> player_compare::Result<()> {
//! let mut session = SearchSession::new();
//! let ticket = session
//!     .begin("creative left-footed winger", 10, SearchType::Hybrid)
//!     .expect("valid request");
//!
//! let response = serde_json::from_value(json!({
//!     "query": "creative left-footed winger",
//!     "search_type": "hybrid",
//!     "results": [
//!         { "player_data": { "playerId": 1, "fullName": "A. Winger" }, "combine_score": 0.91 },
//!         { "player_data": { "playerId": 2, "fullName": "B. Winger" }, "combine_score": 0.84 }
//!     ]
//! }))?;
//! session.complete(&ticket, Ok(response));
//! session.select(1)?;
//!
//! let meta = session.meta().cloned().unwrap_or_default();
//! let view = format::overview(&meta, session.ranking(), &MetricBoundsTable::default());
//! assert_eq!(view.primary.unwrap().name, "B. Winger");
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
//!
//! ## Environment Configuration
//!
//! Override normalization ranges with a JSON file of `metric: [min, max]` pairs:
//! ```bash
//! export PLAYER_COMPARE_BOUNDS=~/bounds.json
//! ```

pub mod cli;
pub mod commands;
pub mod core;
pub mod error;
pub mod format;
pub mod logging;
pub mod search;
pub mod stats;

// Re-export commonly used types
pub use cli::types::{PlayerId, SearchType, TopK};
pub use error::{CompareError, Result};
pub use search::{CandidateRankingList, SearchResponse, SearchResult};
pub use stats::{Metric, MetricBoundsTable};

pub const BOUNDS_ENV_VAR: &str = "PLAYER_COMPARE_BOUNDS";
pub const CACHE_DIR_ENV_VAR: &str = "PLAYER_COMPARE_CACHE_DIR";
