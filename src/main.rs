//! Entry point: parse CLI and dispatch to command handlers.

use clap::Parser;
use player_compare::{
    cli::{Commands, PlayerCompare},
    commands::{
        common::CommandContext,
        load_results::handle_load,
        search_request::handle_request,
        select_player::{handle_select, SelectTarget},
        show_results::handle_show,
    },
    logging::init_logging,
    Result,
};

/// Run the CLI.
fn main() -> Result<()> {
    init_logging();
    let app = PlayerCompare::parse();

    match app.command {
        Commands::Load { file, output } => {
            let ctx = CommandContext::new(app.bounds.as_deref())?;
            handle_load(&ctx, &file, output)?;
        }

        Commands::Select {
            index,
            player_id,
            output,
        } => {
            let ctx = CommandContext::new(app.bounds.as_deref())?;
            let target = match (index, player_id) {
                (_, Some(player_id)) => SelectTarget::Player(player_id),
                (Some(index), None) => SelectTarget::Index(index),
                (None, None) => {
                    eprintln!("Error: provide a candidate position or --player-id");
                    std::process::exit(1);
                }
            };
            handle_select(&ctx, target, output)?;
        }

        Commands::Show { output } => {
            let ctx = CommandContext::new(app.bounds.as_deref())?;
            handle_show(&ctx, output)?;
        }

        Commands::Request {
            query,
            top_k,
            search_type,
        } => {
            handle_request(&query, top_k, &search_type)?;
        }
    }

    Ok(())
}
