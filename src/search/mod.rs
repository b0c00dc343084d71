//! Search results and the state built from them
//!
//! - `types`: response payloads (players, seasons, score signals)
//! - `score`: display score resolution
//! - `ranking`: candidate ordering with promote-to-primary
//! - `session`: request validation and stale-response handling

pub mod ranking;
pub mod score;
pub mod session;
pub mod types;


pub use ranking::CandidateRankingList;
pub use score::resolve;
pub use session::{
    Notice, ResponseMeta, SearchOutcome, SearchRequest, SearchSession, SearchTicket,
    SessionSnapshot,
};
pub use types::{Club, Player, SearchResponse, SearchResult, SeasonStatistic};
