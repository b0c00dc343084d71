//! Print the stored comparison session.

use crate::{
    cli::OutputArgs,
    commands::common::{print_overview, CommandContext},
    format::Overview,
    Result,
};

pub fn handle_show(ctx: &CommandContext, output: OutputArgs) -> Result<Overview> {
    let session = ctx.load_session()?;
    if output.verbose {
        println!("Loaded session from {}", ctx.session_path.display());
    }
    let overview = ctx.overview(&session);
    print_overview(&overview, output)?;
    Ok(overview)
}
