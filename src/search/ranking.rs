//! Ordered candidate list with the primary player pinned at the head.

use super::types::SearchResult;
use crate::cli::types::PlayerId;
use crate::error::{CompareError, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Search results in display order. Position 0 is the primary player.
///
/// An empty list is the "no primary" state: [`primary`](Self::primary)
/// returns `None` and every promotion is out of range.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CandidateRankingList {
    candidates: Vec<SearchResult>,
}

impl CandidateRankingList {
    pub fn new(results: Vec<SearchResult>) -> Self {
        Self {
            candidates: results,
        }
    }

    /// Replace the whole list; the first result becomes primary.
    pub fn initialize(&mut self, results: Vec<SearchResult>) {
        debug!(count = results.len(), "initializing candidate list");
        self.candidates = results;
    }

    pub fn primary(&self) -> Option<&SearchResult> {
        self.candidates.first()
    }

    /// Every candidate after the primary, in order.
    pub fn similar(&self) -> &[SearchResult] {
        self.candidates.get(1..).unwrap_or(&[])
    }

    pub fn iter(&self) -> impl Iterator<Item = &SearchResult> {
        self.candidates.iter()
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Move the candidate at `index` to the head.
    ///
    /// The result is `[selected] ++ (old list without selected)`, so the old
    /// primary keeps its place relative to the other unselected candidates.
    /// Promoting index 0 leaves the list unchanged. An out-of-range index is
    /// reported and the list is not touched.
    pub fn promote(&mut self, index: usize) -> Result<()> {
        if index >= self.candidates.len() {
            return Err(CompareError::PromoteOutOfRange {
                index,
                len: self.candidates.len(),
            });
        }
        if index == 0 {
            return Ok(());
        }
        let selected = self.candidates.remove(index);
        self.candidates.insert(0, selected);
        debug!(index, "promoted candidate to primary");
        Ok(())
    }

    pub fn position_of(&self, player_id: &PlayerId) -> Option<usize> {
        self.candidates
            .iter()
            .position(|c| &c.player_data.player_id == player_id)
    }

    /// Promote by player id; returns the position the player was found at.
    pub fn promote_player(&mut self, player_id: &PlayerId) -> Result<usize> {
        let index = self
            .position_of(player_id)
            .ok_or_else(|| CompareError::PlayerNotFound {
                player_id: player_id.to_string(),
            })?;
        self.promote(index)?;
        Ok(index)
    }
}

impl From<Vec<SearchResult>> for CandidateRankingList {
    fn from(results: Vec<SearchResult>) -> Self {
        Self::new(results)
    }
}
