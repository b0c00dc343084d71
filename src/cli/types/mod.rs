//! Type-safe wrappers for search identifiers and request parameters.

pub mod ids;
pub mod search;


pub use ids::PlayerId;
pub use search::{SearchType, TopK};
