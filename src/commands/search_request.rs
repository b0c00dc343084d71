//! Validate search parameters before they reach a transport.

use crate::{
    cli::types::SearchType,
    error::Result,
    search::{Notice, SearchRequest},
};

/// Build a request body from raw CLI input.
///
/// Invalid input is reported as a transient notice on stderr and yields
/// `Ok(None)`; it never aborts the program.
pub fn handle_request(query: &str, top_k: i64, search_type: &str) -> Result<Option<SearchRequest>> {
    let validated = search_type
        .parse::<SearchType>()
        .and_then(|search_type| SearchRequest::new(query, top_k, search_type));

    match validated {
        Ok(request) => {
            println!("{}", serde_json::to_string_pretty(&request)?); // tarpaulin::skip
            Ok(Some(request))
        }
        Err(e) if e.is_validation() => {
            let notice = Notice::from(&e);
            eprintln!("⚠ {}", notice.message);
            Ok(None)
        }
        Err(e) => Err(e),
    }
}
