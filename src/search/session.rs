//! Request validation and last-wins application of search responses.
//!
//! The transport layer lives outside this crate. A caller asks the session
//! for a [`SearchTicket`], performs the fetch however it likes, and hands the
//! outcome back with the same ticket. Only the newest ticket may replace the
//! candidate list; anything older is discarded as stale.

use super::ranking::CandidateRankingList;
use super::types::SearchResponse;
use crate::cli::types::{SearchType, TopK};
use crate::error::{CompareError, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, warn};

/// How long a transient notice stays on screen.
pub const NOTICE_DISMISS_AFTER: Duration = Duration::from_secs(5);

/// Validated body for the search endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRequest {
    pub query: String,
    pub top_k: TopK,
    pub search_type: SearchType,
}

impl SearchRequest {
    /// Trim the query and check the result count.
    pub fn new(query: &str, top_k: i64, search_type: SearchType) -> Result<Self> {
        let query = query.trim();
        if query.is_empty() {
            return Err(CompareError::EmptyQuery);
        }
        Ok(Self {
            query: query.to_string(),
            top_k: TopK::try_from(top_k)?,
            search_type,
        })
    }
}

/// A user-facing message that dismisses itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub message: String,
    #[serde(with = "duration_secs")]
    pub dismiss_after: Duration,
}

impl Notice {
    pub fn transient(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            dismiss_after: NOTICE_DISMISS_AFTER,
        }
    }
}

impl From<&CompareError> for Notice {
    fn from(error: &CompareError) -> Self {
        Notice::transient(error.to_string())
    }
}

mod duration_secs {
    use serde::Serializer;
    use std::time::Duration;

    pub fn serialize<S: Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_u64(d.as_secs())
    }
}

/// Sequence token for one issued request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTicket {
    token: u64,
    pub request: SearchRequest,
}

impl SearchTicket {
    pub fn token(&self) -> u64 {
        self.token
    }
}

/// Query metadata for the results header.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResponseMeta {
    pub query: String,
    pub total_results: usize,
    pub search_type: SearchType,
}

impl From<&SearchResponse> for ResponseMeta {
    fn from(response: &SearchResponse) -> Self {
        Self {
            query: response.query.clone(),
            total_results: response.total_results(),
            search_type: response.search_type(),
        }
    }
}

/// What happened to a completed fetch.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    /// The list was replaced with this many candidates.
    Applied { count: usize },
    /// A newer request was issued since; nothing changed.
    Stale,
    /// The fetch failed; nothing changed.
    Failed(Notice),
}

/// Persistable part of a session: the header and the current ordering.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub meta: ResponseMeta,
    pub ranking: CandidateRankingList,
}

/// Owns the candidate list and the sequence counter.
#[derive(Debug, Default)]
pub struct SearchSession {
    ranking: CandidateRankingList,
    meta: Option<ResponseMeta>,
    issued: u64,
}

impl SearchSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn restore(snapshot: SessionSnapshot) -> Self {
        Self {
            ranking: snapshot.ranking,
            meta: Some(snapshot.meta),
            issued: 0,
        }
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            meta: self.meta.clone().unwrap_or_default(),
            ranking: self.ranking.clone(),
        }
    }

    pub fn ranking(&self) -> &CandidateRankingList {
        &self.ranking
    }

    pub fn meta(&self) -> Option<&ResponseMeta> {
        self.meta.as_ref()
    }

    /// Validate a request and issue the next sequence token.
    ///
    /// Validation failures come back as a notice for the user; no token is
    /// consumed and in-flight requests stay current.
    pub fn begin(
        &mut self,
        query: &str,
        top_k: i64,
        search_type: SearchType,
    ) -> std::result::Result<SearchTicket, Notice> {
        let request = SearchRequest::new(query, top_k, search_type).map_err(|e| Notice::from(&e))?;
        self.issued += 1;
        debug!(token = self.issued, query = %request.query, "search issued");
        Ok(SearchTicket {
            token: self.issued,
            request,
        })
    }

    /// Apply the transport's outcome for `ticket`.
    ///
    /// `Err` carries the transport's failure message.
    pub fn complete(
        &mut self,
        ticket: &SearchTicket,
        outcome: std::result::Result<SearchResponse, String>,
    ) -> SearchOutcome {
        if ticket.token != self.issued {
            warn!(
                token = ticket.token,
                latest = self.issued,
                "discarding stale search response"
            );
            return SearchOutcome::Stale;
        }
        match outcome {
            Ok(response) => SearchOutcome::Applied {
                count: self.apply(response),
            },
            Err(message) => {
                let error = CompareError::Transport { message };
                SearchOutcome::Failed(Notice::from(&error))
            }
        }
    }

    /// Replace the list with a response outside of the ticket flow.
    pub fn apply(&mut self, response: SearchResponse) -> usize {
        self.meta = Some(ResponseMeta::from(&response));
        self.ranking.initialize(response.results);
        self.ranking.len()
    }

    /// Promote the candidate at `index` to primary.
    pub fn select(&mut self, index: usize) -> Result<()> {
        self.ranking.promote(index)
    }

    pub fn ranking_mut(&mut self) -> &mut CandidateRankingList {
        &mut self.ranking
    }
}
