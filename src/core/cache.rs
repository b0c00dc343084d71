//! On-disk session cache
//!
//! The current candidate list and header live in a single JSON file so that
//! successive CLI invocations (`load`, `select`, `show`) share state.

use std::{
    fs,
    io::{Read, Write},
    path::{Path, PathBuf},
};

use crate::{error::Result, search::SessionSnapshot, CACHE_DIR_ENV_VAR};

/// Base directory: `$PLAYER_COMPARE_CACHE_DIR`, else `~/.cache/player-compare`.
pub fn cache_dir() -> PathBuf {
    if let Some(dir) = std::env::var_os(CACHE_DIR_ENV_VAR).filter(|d| !d.is_empty()) {
        return PathBuf::from(dir);
    }
    let base = dirs::cache_dir().unwrap_or_else(|| {
        let mut home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        home.push(".cache");
        home
    });
    base.join("player-compare")
}

/// Path: <cache_dir>/session.json
pub fn session_path() -> PathBuf {
    cache_dir().join("session.json")
}

/// Try to read a file into a String
pub fn try_read_to_string(path: &Path) -> Option<String> {
    let mut f = fs::File::open(path).ok()?;
    let mut s = String::new();

    f.read_to_string(&mut s).ok()?;

    Some(s)
}

/// Write a string to file
pub fn write_string(path: &Path, contents: &str) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut f = fs::File::create(path)?;
    f.write_all(contents.as_bytes())
}

/// Load a stored session; `None` when nothing has been saved yet.
pub fn load_session(path: &Path) -> Result<Option<SessionSnapshot>> {
    match try_read_to_string(path) {
        Some(contents) => Ok(Some(serde_json::from_str(&contents)?)),
        None => Ok(None),
    }
}

pub fn save_session(path: &Path, snapshot: &SessionSnapshot) -> Result<()> {
    let contents = serde_json::to_string_pretty(snapshot)?;
    write_string(path, &contents)?;
    Ok(())
}
