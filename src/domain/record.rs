use super::enums::TaskStatus;
use serde::{Deserialize, Serialize};
use indexmap::IndexMap;

/// One persisted task outcome
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskRecord {
    pub name: String,
    /// Whole minutes of work, floor-divided from seconds
    pub duration: u64,
    pub status: TaskStatus,
}

impl TaskRecord {
    pub fn new(name: impl Into<String>, duration: u64, status: TaskStatus) -> Self {
        Self {
            name: name.into(),
            duration,
            status,
        }
    }

    /// Build a record from accumulated work seconds
    pub fn from_seconds(name: impl Into<String>, work_seconds: u64, status: TaskStatus) -> Self {
        Self::new(name, work_seconds / 60, status)
    }

    pub fn is_completed(&self) -> bool {
        self.status == TaskStatus::Completed
    }
}

/// Whole content of the history file, keyed by `YYYY-MM-DD` in file order
pub type DailyHistory = IndexMap<String, Vec<TaskRecord>>;

/// Totals for a single day
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DailyStats {
    pub total_minutes: u64,
    pub completed_count: usize,
    pub records: Vec<TaskRecord>,
}

impl DailyStats {
    pub fn from_records(records: Vec<TaskRecord>) -> Self {
        let total_minutes = records.iter().map(|r| r.duration).sum();
        let completed_count = records.iter().filter(|r| r.is_completed()).count();
        Self {
            total_minutes,
            completed_count,
            records,
        }
    }

    pub fn dismissed_count(&self) -> usize {
        self.records.len() - self.completed_count
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_from_seconds_floors_to_minutes() {
        let record = TaskRecord::from_seconds("Write", 119, TaskStatus::Completed);
        assert_eq!(record.duration, 1);

        let record = TaskRecord::from_seconds("Write", 59, TaskStatus::Dismissed);
        assert_eq!(record.duration, 0);
    }

    #[test]
    fn test_record_json_shape() {
        let record = TaskRecord::new("Review", 25, TaskStatus::Completed);
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"name": "Review", "duration": 25, "status": "completed"})
        );
    }

    #[test]
    fn test_daily_stats_totals() {
        let stats = DailyStats::from_records(vec![
            TaskRecord::new("Task 1", 30, TaskStatus::Completed),
            TaskRecord::new("Task 2", 45, TaskStatus::Dismissed),
            TaskRecord::new("Task 3", 60, TaskStatus::Completed),
        ]);

        assert_eq!(stats.total_minutes, 135);
        assert_eq!(stats.completed_count, 2);
        assert_eq!(stats.dismissed_count(), 1);
        assert_eq!(stats.records.len(), 3);
        assert_eq!(stats.records[0].name, "Task 1");
        assert_eq!(stats.records[1].duration, 45);
        assert_eq!(stats.records[2].status, TaskStatus::Completed);
    }

    #[test]
    fn test_empty_stats() {
        let stats = DailyStats::from_records(Vec::new());
        assert_eq!(stats, DailyStats::default());
        assert!(stats.is_empty());
    }
}
