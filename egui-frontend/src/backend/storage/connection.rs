//! # Storage Connection
//!
//! File-backed storage "connection": a handle on the data directory that
//! all repositories share.
//!
//! ## File Structure
//!
//! ```text
//! data/
//! ├── cash_state.json    ← tally repository
//! ├── reset_skip         ← preferences repository
//! └── language           ← preferences repository
//! ```
//!
//! ## Features
//!
//! - Platform data directory resolution via `directories`
//! - Atomic file writes with temp files

use anyhow::{Context, Result};
use directories::ProjectDirs;
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

/// Shared handle on the directory holding every persisted record.
#[derive(Debug, Clone)]
pub struct StorageConnection {
    base_directory: PathBuf,
}

impl StorageConnection {
    /// Create a connection rooted at an explicit directory, creating it if
    /// needed. Tests use this with a temp directory.
    pub fn new(base_directory: impl AsRef<Path>) -> Result<Self> {
        let base_directory = base_directory.as_ref().to_path_buf();
        fs::create_dir_all(&base_directory).with_context(|| {
            format!("failed to create data directory {:?}", base_directory)
        })?;
        debug!("Storage connection rooted at {:?}", base_directory);
        Ok(Self { base_directory })
    }

    /// Create a connection at the platform data directory
    /// (e.g. `~/.local/share/cash-counter` on Linux).
    pub fn new_default() -> Result<Self> {
        let base = ProjectDirs::from("com", "sweethut", "cash-counter")
            .map(|dirs| dirs.data_dir().to_path_buf())
            .context("could not resolve a platform data directory")?;
        Self::new(base)
    }

    pub fn base_directory(&self) -> &Path {
        &self.base_directory
    }

    /// Write `contents` to `path` atomically: write a temp file in the same
    /// directory, then rename over the target.
    pub fn write_atomic(&self, path: &Path, contents: &str) -> Result<()> {
        let temp_path = path.with_extension("tmp");
        fs::write(&temp_path, contents)
            .with_context(|| format!("failed to write temp file {:?}", temp_path))?;
        fs::rename(&temp_path, path)
            .with_context(|| format!("failed to move {:?} into place", path))?;
        Ok(())
    }

    /// Remove a record file. Missing files are fine (idempotent).
    pub fn remove_record(&self, path: &Path) -> Result<()> {
        match fs::remove_file(path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => {
                Err(err).with_context(|| format!("failed to remove {:?}", path))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_atomic_replaces_contents() {
        let temp = TempDir::new().unwrap();
        let connection = StorageConnection::new(temp.path()).unwrap();
        let path = temp.path().join("record");

        connection.write_atomic(&path, "first").unwrap();
        connection.write_atomic(&path, "second").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "second");
        assert!(!path.with_extension("tmp").exists());
    }

    #[test]
    fn test_remove_record_is_idempotent() {
        let temp = TempDir::new().unwrap();
        let connection = StorageConnection::new(temp.path()).unwrap();
        let path = temp.path().join("record");

        connection.write_atomic(&path, "x").unwrap();
        connection.remove_record(&path).unwrap();
        connection.remove_record(&path).unwrap();
        assert!(!path.exists());
    }
}
