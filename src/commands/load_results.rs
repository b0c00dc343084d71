//! Load a search response and start a new comparison session.

use std::io::Read;
use std::path::Path;

use crate::{
    cli::OutputArgs,
    commands::common::{print_overview, CommandContext},
    format::Overview,
    search::{SearchResponse, SearchSession},
    Result,
};

/// Read a search response from `path`, or stdin when `path` is `-`.
pub fn read_response(path: &Path) -> Result<SearchResponse> {
    let contents = if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        std::fs::read_to_string(path)?
    };
    Ok(serde_json::from_str(&contents)?)
}

/// Replace the stored candidate list with a fresh response.
pub fn handle_load(ctx: &CommandContext, path: &Path, output: OutputArgs) -> Result<Overview> {
    if output.verbose {
        println!("Reading search response from {}...", path.display());
    }
    let response = read_response(path)?;

    let mut session = SearchSession::new();
    let count = session.apply(response);
    ctx.save_session(&session)?;

    if output.verbose {
        println!("✓ Loaded {} candidates", count);
        println!("✓ Session saved to {}", ctx.session_path.display());
    }

    let overview = ctx.overview(&session);
    print_overview(&overview, output)?;
    Ok(overview)
}
