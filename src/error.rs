use std::path::PathBuf;
use thiserror::Error;

/// Rejected user input for the work/break duration fields
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("{field} minutes must be a whole number, got {value:?}")]
    InvalidMinutes { field: &'static str, value: String },
}

impl InputError {
    pub fn invalid_minutes(field: &'static str, value: impl Into<String>) -> Self {
        InputError::InvalidMinutes {
            field,
            value: value.into(),
        }
    }
}

/// Failures of the on-disk history and settings files
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to create directory {}: {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
