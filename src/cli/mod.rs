//! CLI argument definitions and parsing.

pub mod types;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use types::PlayerId;

/// Output switches shared between commands
#[derive(Debug, Clone, Copy, Default, Args)]
pub struct OutputArgs {
    /// Output results as JSON instead of text lines.
    #[clap(long)]
    pub json: bool,

    /// Show progress information.
    #[clap(long)]
    pub verbose: bool,
}

#[derive(Debug, Parser)]
#[clap(name = "player-compare", about = "Football player search comparison CLI")]
pub struct PlayerCompare {
    /// Normalization bounds file (or set `PLAYER_COMPARE_BOUNDS` env var).
    #[clap(long, global = true)]
    pub bounds: Option<PathBuf>,

    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Load a search response and make its first result the primary player.
    ///
    /// Reads the JSON body returned by the search endpoint (`-` for stdin)
    /// and replaces the stored candidate list.
    Load {
        /// Path to the search response JSON.
        file: PathBuf,

        #[clap(flatten)]
        output: OutputArgs,
    },

    /// Promote a candidate to primary.
    Select {
        /// List position of the candidate (0 is the current primary).
        #[clap(required_unless_present = "player_id")]
        index: Option<usize>,

        /// Select by player ID instead of position.
        #[clap(long, conflicts_with = "index")]
        player_id: Option<PlayerId>,

        #[clap(flatten)]
        output: OutputArgs,
    },

    /// Show the primary player, comparison chart data and similar players.
    Show {
        #[clap(flatten)]
        output: OutputArgs,
    },

    /// Validate a search request and print the body a client would send.
    Request {
        /// Free-text search query.
        #[clap(long, short)]
        query: String,

        /// Number of results (1-50).
        #[clap(long, short = 'k', default_value_t = 10, allow_negative_numbers = true)]
        top_k: i64,

        /// `hybrid` or `semantic`.
        #[clap(long, short = 't', default_value = "hybrid")]
        search_type: String,
    },
}
