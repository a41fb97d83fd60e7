use super::files::{atomic_write, ensure_dir, read_file};
use crate::domain::{DailyHistory, DailyStats, TaskRecord};
use crate::error::StorageError;
use chrono::NaiveDate;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Day-keyed task history backed by a single JSON file
///
/// Every write replaces the whole file. There is no locking; one process
/// owns the file at a time.
#[derive(Debug, Clone)]
pub struct HistoryStore {
    path: PathBuf,
}

/// Key used in the history file for a date
pub fn date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

impl HistoryStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the whole history, empty when the file does not exist yet
    pub fn load(&self) -> Result<DailyHistory, StorageError> {
        let Some(content) = read_file(&self.path)? else {
            return Ok(DailyHistory::new());
        };

        serde_json::from_str(&content).map_err(|source| StorageError::Parse {
            path: self.path.clone(),
            source,
        })
    }

    fn save(&self, history: &DailyHistory) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            ensure_dir(parent)?;
        }

        let json = serde_json::to_string_pretty(history).map_err(|source| StorageError::Parse {
            path: self.path.clone(),
            source,
        })?;
        atomic_write(&self.path, &json)
    }

    /// Append a record under `date`, rewriting the file
    pub fn append_record(&self, date: NaiveDate, record: TaskRecord) -> Result<(), StorageError> {
        let mut history = self.load()?;
        let key = date_key(date);

        info!(
            date = %key,
            name = %record.name,
            duration = record.duration,
            status = record.status.to_tag(),
            "Recording task"
        );

        history.entry(key).or_default().push(record);
        self.save(&history)
    }

    /// Totals and records for one day
    pub fn daily_stats(&self, date: NaiveDate) -> Result<DailyStats, StorageError> {
        let mut history = self.load()?;
        let records = history.shift_remove(&date_key(date)).unwrap_or_default();
        debug!(date = %date, count = records.len(), "Loaded daily stats");
        Ok(DailyStats::from_records(records))
    }
}
