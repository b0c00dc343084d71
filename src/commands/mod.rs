//! Command implementations for the player comparison CLI

pub mod common;
pub mod load_results;
pub mod search_request;
pub mod select_player;
pub mod show_results;
