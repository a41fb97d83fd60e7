use super::enums::TaskStatus;
use super::record::TaskRecord;
use super::timer::TimerState;

/// Format seconds as `MM:SS`; minutes are not wrapped into hours
pub fn format_time(seconds: u64) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

/// Phase line shown under the countdown, e.g. "Work Time (Cycle 1)"
pub fn phase_line(state: &TimerState) -> String {
    format!("{} Time (Cycle {})", state.phase().name(), state.cycle_index + 1)
}

/// Running total of work, in whole minutes
pub fn total_work_line(state: &TimerState) -> String {
    format!("Total work time: {} minutes", state.total_work_seconds() / 60)
}

/// One history entry, e.g. "25min - Write docs (dismissed)"
pub fn record_line(record: &TaskRecord) -> String {
    let mut line = format!("{}min - {}", record.duration, record.name);
    if record.status == TaskStatus::Dismissed {
        line.push_str(" (dismissed)");
    }
    line
}

/// Status glyph for a record
pub fn status_badge(status: TaskStatus, use_emoji: bool) -> &'static str {
    match (status, use_emoji) {
        (TaskStatus::Completed, true) => "✓",
        (TaskStatus::Dismissed, true) => "✗",
        (TaskStatus::Completed, false) => "[x]",
        (TaskStatus::Dismissed, false) => "[-]",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_time() {
        assert_eq!(format_time(0), "00:00");
        assert_eq!(format_time(61), "01:01");
        assert_eq!(format_time(3600), "60:00");
        assert_eq!(format_time(30), "00:30");
        assert_eq!(format_time(90), "01:30");
    }

    #[test]
    fn test_format_time_matches_divmod() {
        for s in [0, 1, 59, 60, 599, 600, 5999, 6000, 7261] {
            assert_eq!(format_time(s), format!("{:02}:{:02}", s / 60, s % 60));
        }
        assert_eq!(format_time(6000), "100:00");
    }

    #[test]
    fn test_phase_line() {
        let mut state = TimerState::default();
        assert_eq!(phase_line(&state), "Work Time (Cycle 1)");

        state.on_break = true;
        state.cycle_index = 1;
        assert_eq!(phase_line(&state), "Break Time (Cycle 2)");
    }

    #[test]
    fn test_total_work_line_floors() {
        let state = TimerState {
            cumulative_work_seconds: 120,
            current_phase_work_seconds: 59,
            ..TimerState::default()
        };
        assert_eq!(total_work_line(&state), "Total work time: 2 minutes");
    }

    #[test]
    fn test_record_line() {
        let done = TaskRecord::new("Write docs", 25, TaskStatus::Completed);
        assert_eq!(record_line(&done), "25min - Write docs");

        let dropped = TaskRecord::new("Inbox", 3, TaskStatus::Dismissed);
        assert_eq!(record_line(&dropped), "3min - Inbox (dismissed)");
    }

    #[test]
    fn test_status_badge() {
        assert_eq!(status_badge(TaskStatus::Completed, true), "✓");
        assert_eq!(status_badge(TaskStatus::Dismissed, false), "[-]");
    }
}
