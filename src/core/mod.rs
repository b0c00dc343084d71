//! Core utilities for the player comparison CLI
//!
//! This module consolidates the filesystem-facing pieces:
//! - `cache`: session persistence between invocations
//! - `config`: normalization bounds overrides

pub mod cache;
pub mod config;

// Re-export commonly used items for convenience
pub use cache::{load_session, save_session, session_path, try_read_to_string, write_string};
pub use config::{load_bounds_table, resolve_bounds_path};
