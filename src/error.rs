//! Error types for the player comparison engine

use thiserror::Error;


pub type Result<T> = std::result::Result<T, CompareError>;

#[derive(Error, Debug)]
pub enum CompareError {
    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Please enter a search query")]
    EmptyQuery,

    #[error("Number of results must be between {min} and {max} (got {requested})")]
    ResultCountOutOfRange { requested: i64, min: u8, max: u8 },

    #[error("Failed to parse result count: {0}")]
    InvalidResultCount(#[from] std::num::ParseIntError),

    #[error("Invalid search type: {value}")]
    InvalidSearchType { value: String },

    #[error("Normalization bounds [{lower}, {upper}] must have a positive, finite width")]
    ZeroWidthBounds { lower: f64, upper: f64 },

    #[error("Invalid normalization bounds for {metric}: [{lower}, {upper}] (max must exceed min)")]
    InvalidBounds {
        metric: String,
        lower: f64,
        upper: f64,
    },

    #[error("Unknown metric: {name}")]
    UnknownMetric { name: String },

    #[error("Cannot promote candidate {index}: list holds {len} candidates")]
    PromoteOutOfRange { index: usize, len: usize },

    #[error("Player not found in candidate list: {player_id}")]
    PlayerNotFound { player_id: String },

    #[error("No search results loaded; run `load` first")]
    NoSession,

    #[error("Search failed: {message}")]
    Transport { message: String },
}

impl CompareError {
    /// Input validation problems the user can fix by editing the request.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            CompareError::EmptyQuery
                | CompareError::ResultCountOutOfRange { .. }
                | CompareError::InvalidResultCount(_)
                | CompareError::InvalidSearchType { .. }
        )
    }
}
