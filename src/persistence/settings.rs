use super::files::{atomic_write, read_file};
use crate::error::StorageError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// User settings stored in settings.json
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppSettings {
    /// Prefill for the work-minutes input
    #[serde(default)]
    pub default_work_minutes: Option<u32>,
    /// Prefill for the break-minutes input
    #[serde(default)]
    pub default_break_minutes: Option<u32>,
    #[serde(default = "default_use_emoji")]
    pub use_emoji: bool,
}

fn default_use_emoji() -> bool {
    true
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            default_work_minutes: None,
            default_break_minutes: None,
            use_emoji: default_use_emoji(),
        }
    }
}

impl AppSettings {
    /// Apply command-line overrides on top of the file values
    pub fn with_overrides(mut self, work: Option<u32>, brk: Option<u32>) -> Self {
        if work.is_some() {
            self.default_work_minutes = work;
        }
        if brk.is_some() {
            self.default_break_minutes = brk;
        }
        self
    }

    pub fn work_input(&self) -> String {
        self.default_work_minutes
            .map(|m| m.to_string())
            .unwrap_or_default()
    }

    pub fn break_input(&self) -> String {
        self.default_break_minutes
            .map(|m| m.to_string())
            .unwrap_or_default()
    }
}

/// Load settings from settings.json
pub fn load_settings<P: AsRef<Path>>(path: P) -> Result<AppSettings, StorageError> {
    let path = path.as_ref();

    let Some(content) = read_file(path)? else {
        return Ok(AppSettings::default());
    };

    serde_json::from_str(&content).map_err(|source| StorageError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Save settings to settings.json
pub fn save_settings<P: AsRef<Path>>(path: P, settings: &AppSettings) -> Result<(), StorageError> {
    let path = path.as_ref();
    let json = serde_json::to_string_pretty(settings).map_err(|source| StorageError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    atomic_write(path, &json)
}
