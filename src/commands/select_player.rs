//! Promote a candidate in the stored list to primary.

use crate::{
    cli::{types::PlayerId, OutputArgs},
    commands::common::{print_overview, CommandContext},
    format::Overview,
    Result,
};

/// Which candidate to promote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectTarget {
    Index(usize),
    Player(PlayerId),
}

pub fn handle_select(
    ctx: &CommandContext,
    target: SelectTarget,
    output: OutputArgs,
) -> Result<Overview> {
    let mut session = ctx.load_session()?;

    let index = match target {
        SelectTarget::Index(index) => {
            session.select(index)?;
            index
        }
        SelectTarget::Player(player_id) => session.ranking_mut().promote_player(&player_id)?,
    };
    ctx.save_session(&session)?;

    if output.verbose {
        println!("✓ Promoted candidate at position {} to primary", index);
    }

    let overview = ctx.overview(&session);
    print_overview(&overview, output)?;
    Ok(overview)
}
