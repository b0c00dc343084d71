//! Normalization bounds configuration
//!
//! Lookup order for an override file: explicit `--bounds` path, then the
//! `PLAYER_COMPARE_BOUNDS` env var, then `<config_dir>/player-compare/bounds.json`
//! if it exists. With none of these the compiled-in table is used.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::{error::Result, stats::MetricBoundsTable, BOUNDS_ENV_VAR};

/// Path: <config_dir>/player-compare/bounds.json
pub fn default_bounds_path() -> Option<PathBuf> {
    dirs::config_dir().map(|base| base.join("player-compare").join("bounds.json"))
}

/// Pick the override file to read, if any.
pub fn resolve_bounds_path(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }
    if let Some(path) = std::env::var_os(BOUNDS_ENV_VAR).filter(|p| !p.is_empty()) {
        return Some(PathBuf::from(path));
    }
    default_bounds_path().filter(|p| p.is_file())
}

/// Read and validate a bounds override file.
pub fn read_bounds_file(path: &Path) -> Result<MetricBoundsTable> {
    let contents = std::fs::read_to_string(path)?;
    let table = MetricBoundsTable::from_json_str(&contents)?;
    info!(path = %path.display(), "loaded normalization bounds override");
    Ok(table)
}

/// Bounds table after applying whichever override file applies.
pub fn load_bounds_table(explicit: Option<&Path>) -> Result<MetricBoundsTable> {
    match resolve_bounds_path(explicit) {
        Some(path) => read_bounds_file(&path),
        None => Ok(MetricBoundsTable::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CompareError;
    use crate::stats::Metric;
    use tempfile::TempDir;

    #[test]
    fn test_explicit_path_wins() {
        let path = PathBuf::from("/tmp/custom-bounds.json");
        assert_eq!(resolve_bounds_path(Some(&path)), Some(path));
    }

    #[test]
    fn test_read_bounds_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bounds.json");
        std::fs::write(&path, r#"{ "passesCompleted": [0, 3000] }"#).unwrap();

        let table = load_bounds_table(Some(&path)).unwrap();
        assert_eq!(table.get(Metric::PassesCompleted).upper(), 3000.0);
        assert_eq!(table.get(Metric::Tackles).upper(), 80.0);
    }

    #[test]
    fn test_zero_width_override_fails_at_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bounds.json");
        std::fs::write(&path, r#"{ "tackles": [40, 40] }"#).unwrap();

        match load_bounds_table(Some(&path)).unwrap_err() {
            CompareError::InvalidBounds {
                metric,
                lower,
                upper,
            } => {
                assert_eq!(metric, "tackles");
                assert_eq!((lower, upper), (40.0, 40.0));
            }
            other => panic!("Expected InvalidBounds, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_explicit_file_is_io_error() {
        let dir = TempDir::new().unwrap();
        let error = load_bounds_table(Some(&dir.path().join("absent.json"))).unwrap_err();
        assert!(matches!(error, CompareError::Io(_)));
    }
}
