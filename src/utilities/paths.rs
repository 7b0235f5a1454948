//! Path resolution for persisted profile documents.

use std::env;
use std::path::PathBuf;

/// Environment variable that overrides the profile storage directory.
pub const STORAGE_DIR_ENV: &str = "APLS_STORAGE_DIR";

/// Returns the directory profile documents are written to.
///
/// Uses the `APLS_STORAGE_DIR` environment variable if set, otherwise
/// the current working directory. The directory is created on first
/// write, not here.
pub fn profile_storage_dir() -> PathBuf {
    match env::var(STORAGE_DIR_ENV) {
        Ok(dir) if !dir.is_empty() => PathBuf::from(dir),
        _ => PathBuf::from("."),
    }
}
