//! Persistent storage
//!
//! The only thing this app stores on disk: user preferences, as JSON in the
//! platform data directory.

pub mod settings;

use directories::ProjectDirs;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("could not determine the platform data directory")]
    DataDirUnavailable,
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Platform data directory for the app
pub fn get_data_dir() -> Result<PathBuf, StorageError> {
    let dirs =
        ProjectDirs::from("com", "molina-aquino", "folio").ok_or(StorageError::DataDirUnavailable)?;
    Ok(dirs.data_dir().to_path_buf())
}
