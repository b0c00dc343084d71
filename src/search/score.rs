//! Pick the display score for a search result.

use super::types::SearchResult;

/// `combine_score` when present, else `similarity_score`, else `0.0`.
///
/// The hybrid signal always wins so ordering stays stable no matter which
/// backend produced the result. Non-finite signals count as absent.
pub fn resolve(result: &SearchResult) -> f64 {
    let finite = |score: Option<f64>| score.filter(|s| s.is_finite());
    finite(result.combine_score)
        .or_else(|| finite(result.similarity_score))
        .unwrap_or(0.0)
}
