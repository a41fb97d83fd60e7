use crate::domain::{
    DailyStats, InputField, IntervalTimer, PhaseChange, PhaseInputs, TaskRecord, TaskStatus,
    Toggle, UiMode,
};
use crate::error::StorageError;
use crate::notifications;
use crate::persistence::{save_settings, AppSettings, HistoryStore};
use crate::ticker::Ticker;
use chrono::NaiveDate;
use std::path::PathBuf;
use std::time::Instant;
use tracing::{error, info, warn};

/// Severity of the message in the status line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Error,
}

/// One-line feedback shown under the timer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub kind: StatusKind,
    pub text: String,
}

/// Task name and duration inputs
#[derive(Debug, Clone)]
pub struct TaskForm {
    pub task_name: String,
    pub inputs: PhaseInputs,
    pub focused: InputField,
}

impl TaskForm {
    pub fn new(settings: &AppSettings) -> Self {
        Self {
            task_name: String::new(),
            inputs: PhaseInputs::new(settings.work_input(), settings.break_input()),
            focused: InputField::TaskName,
        }
    }

    pub fn value(&self, field: InputField) -> &str {
        match field {
            InputField::TaskName => &self.task_name,
            InputField::WorkMinutes => &self.inputs.work_minutes,
            InputField::BreakMinutes => &self.inputs.break_minutes,
        }
    }

    fn value_mut(&mut self, field: InputField) -> &mut String {
        match field {
            InputField::TaskName => &mut self.task_name,
            InputField::WorkMinutes => &mut self.inputs.work_minutes,
            InputField::BreakMinutes => &mut self.inputs.break_minutes,
        }
    }

    pub fn push_char(&mut self, c: char) {
        let field = self.focused;
        self.value_mut(field).push(c);
    }

    pub fn backspace(&mut self) {
        let field = self.focused;
        self.value_mut(field).pop();
    }

    /// Empty the name and restore the configured duration defaults
    pub fn clear(&mut self, settings: &AppSettings) {
        *self = Self::new(settings);
    }
}

/// Main application state
pub struct AppState {
    pub timer: IntervalTimer,
    pub form: TaskForm,
    pub history: HistoryStore,
    pub ticker: Ticker,
    pub ui_mode: UiMode,
    pub status: Option<StatusMessage>,
    /// Day and stats shown by the progress view
    pub progress: Option<(NaiveDate, DailyStats)>,
    pub settings: AppSettings,
    pub settings_path: PathBuf,
}

impl AppState {
    pub fn new(history: HistoryStore, settings: AppSettings, settings_path: PathBuf) -> Self {
        Self {
            timer: IntervalTimer::new(),
            form: TaskForm::new(&settings),
            history,
            ticker: Ticker::default(),
            ui_mode: UiMode::Normal,
            status: None,
            progress: None,
            settings,
            settings_path,
        }
    }

    fn info(&mut self, text: impl Into<String>) {
        self.status = Some(StatusMessage {
            kind: StatusKind::Info,
            text: text.into(),
        });
    }

    fn report_error(&mut self, text: impl Into<String>) {
        self.status = Some(StatusMessage {
            kind: StatusKind::Error,
            text: text.into(),
        });
    }

    /// Start or pause the countdown
    pub fn toggle_timer(&mut self, now: Instant) {
        match self.timer.toggle(&self.form.inputs) {
            Ok(Toggle::Started) => {
                self.ticker.arm(now);
                info!(
                    remaining = self.timer.state().remaining_seconds,
                    phase = self.timer.state().phase().name(),
                    "Timer started"
                );
                self.status = None;
            }
            Ok(Toggle::Paused) => {
                self.ticker.cancel();
                info!(remaining = self.timer.state().remaining_seconds, "Timer paused");
                self.info("Paused");
            }
            Err(e) => {
                warn!(error = %e, "Timer not started");
                self.report_error(e.to_string());
            }
        }
    }

    /// Deliver every pulse that is due at `now`
    pub fn tick(&mut self, now: Instant) {
        for _ in 0..self.ticker.poll(now) {
            self.pulse();
        }
    }

    /// One second of countdown
    pub fn pulse(&mut self) {
        match self.timer.tick(&self.form.inputs) {
            Ok(None) => {}
            Ok(Some(change)) => self.on_phase_change(change),
            Err(e) => {
                self.ticker.cancel();
                warn!(error = %e, "Phase transition aborted");
                self.report_error(e.to_string());
            }
        }
    }

    fn on_phase_change(&mut self, change: PhaseChange) {
        info!(?change, cycle = self.timer.state().cycle_index, "Phase change");
        notifications::notify_phase_change(change);

        match change {
            PhaseChange::BreakStarted { cycle } => {
                self.info(format!("Cycle {} done, break started", cycle));
            }
            PhaseChange::WorkResumed => self.info("Back to work"),
            PhaseChange::Finished => {
                self.ticker.cancel();
                self.info("Timer finished");
            }
        }
    }

    /// Stop the countdown and clear the cycle
    pub fn reset_timer(&mut self) {
        self.timer.reset();
        self.ticker.cancel();
        info!("Timer reset");
        self.status = None;
    }

    /// Record the current task under `date`
    ///
    /// Returns None without touching anything when no task name is set.
    pub fn finish_task_on(
        &mut self,
        date: NaiveDate,
        status: TaskStatus,
    ) -> Result<Option<TaskRecord>, StorageError> {
        let history = &self.history;
        let recorded = self.timer.finish(&self.form.task_name, status, |record| {
            history.append_record(date, record.clone())
        })?;

        if recorded.is_some() {
            self.ticker.cancel();
            self.form.clear(&self.settings);
        }
        Ok(recorded)
    }

    fn finish_task(&mut self, status: TaskStatus) {
        let today = chrono::Local::now().date_naive();
        match self.finish_task_on(today, status) {
            Ok(Some(record)) => {
                self.info(format!(
                    "Saved \"{}\" ({} min, {})",
                    record.name,
                    record.duration,
                    record.status.to_tag()
                ));
            }
            Ok(None) => self.report_error("Enter a task name first"),
            Err(e) => {
                error!(error = %e, "Failed to save task");
                self.report_error(e.to_string());
            }
        }
    }

    pub fn complete_task(&mut self) {
        self.finish_task(TaskStatus::Completed);
    }

    pub fn dismiss_task(&mut self) {
        self.finish_task(TaskStatus::Dismissed);
    }

    /// Open the progress view for `date`
    pub fn show_progress_on(&mut self, date: NaiveDate) -> Result<(), StorageError> {
        let stats = self.history.daily_stats(date)?;
        self.progress = Some((date, stats));
        self.ui_mode = UiMode::Progress;
        Ok(())
    }

    pub fn show_progress(&mut self) {
        let today = chrono::Local::now().date_naive();
        if let Err(e) = self.show_progress_on(today) {
            error!(error = %e, "Failed to load progress");
            self.report_error(e.to_string());
        }
    }

    pub fn close_progress(&mut self) {
        self.progress = None;
        self.ui_mode = UiMode::Normal;
    }

    pub fn start_editing(&mut self, field: InputField) {
        self.form.focused = field;
        self.ui_mode = UiMode::Editing;
    }

    pub fn stop_editing(&mut self) {
        self.ui_mode = UiMode::Normal;
    }

    pub fn focus_next_field(&mut self) {
        self.form.focused = self.form.focused.next();
    }

    pub fn focus_previous_field(&mut self) {
        self.form.focused = self.form.focused.previous();
    }

    pub fn input_char(&mut self, c: char) {
        self.form.push_char(c);
    }

    pub fn input_backspace(&mut self) {
        self.form.backspace();
    }

    /// Store the current duration inputs as the defaults for new tasks
    pub fn save_defaults(&mut self) {
        let work = match parse_optional(&self.form.inputs.work_minutes, "Work") {
            Ok(v) => v,
            Err(msg) => return self.report_error(msg),
        };
        let brk = match parse_optional(&self.form.inputs.break_minutes, "Break") {
            Ok(v) => v,
            Err(msg) => return self.report_error(msg),
        };

        let mut settings = self.settings.clone();
        settings.default_work_minutes = work;
        settings.default_break_minutes = brk;

        match save_settings(&self.settings_path, &settings) {
            Ok(()) => {
                info!(?work, ?brk, "Saved default durations");
                self.settings = settings;
                self.info("Saved as defaults");
            }
            Err(e) => {
                error!(error = %e, "Failed to save settings");
                self.report_error(e.to_string());
            }
        }
    }
}

fn parse_optional(value: &str, field: &'static str) -> Result<Option<u32>, String> {
    if value.trim().is_empty() {
        return Ok(None);
    }
    crate::domain::timer::parse_minutes(field, value)
        .map(|seconds| Some((seconds / 60) as u32))
        .map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::time::Duration;
    use tempfile::{tempdir, TempDir};

    fn app_in(dir: &TempDir) -> AppState {
        let store = HistoryStore::new(dir.path().join("history.json"));
        AppState::new(store, AppSettings::default(), dir.path().join("settings.json"))
    }

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    fn type_into(app: &mut AppState, field: InputField, text: &str) {
        app.start_editing(field);
        for c in text.chars() {
            app.input_char(c);
        }
        app.stop_editing();
    }

    #[test]
    fn test_toggle_arms_and_cancels_ticker() {
        let dir = tempdir().unwrap();
        let mut app = app_in(&dir);
        type_into(&mut app, InputField::WorkMinutes, "1");

        let start = Instant::now();
        app.toggle_timer(start);
        assert!(app.timer.is_running());
        assert!(app.ticker.is_armed());

        app.tick(start + Duration::from_secs(3));
        assert_eq!(app.timer.state().remaining_seconds, 57);

        app.toggle_timer(start + Duration::from_secs(3));
        assert!(!app.ticker.is_armed());
        app.tick(start + Duration::from_secs(10));
        assert_eq!(app.timer.state().remaining_seconds, 57);
    }

    #[test]
    fn test_invalid_work_input_reports_error() {
        let dir = tempdir().unwrap();
        let mut app = app_in(&dir);
        type_into(&mut app, InputField::WorkMinutes, "ten");

        app.toggle_timer(Instant::now());
        assert!(!app.timer.is_running());
        assert!(!app.ticker.is_armed());
        assert_eq!(app.status.as_ref().map(|s| s.kind), Some(StatusKind::Error));
    }

    #[test]
    fn test_session_end_cancels_ticker() {
        let dir = tempdir().unwrap();
        let mut app = app_in(&dir);
        type_into(&mut app, InputField::WorkMinutes, "1");

        let start = Instant::now();
        app.toggle_timer(start);
        app.tick(start + Duration::from_secs(60));

        assert!(app.timer.state().is_idle());
        assert!(!app.ticker.is_armed());
    }

    #[test]
    fn test_reset_cancels_armed_ticker() {
        let dir = tempdir().unwrap();
        let mut app = app_in(&dir);
        type_into(&mut app, InputField::WorkMinutes, "1");

        let start = Instant::now();
        app.toggle_timer(start);
        app.tick(start + Duration::from_secs(2));
        assert!(app.ticker.is_armed());

        app.reset_timer();
        assert!(!app.ticker.is_armed());

        app.tick(start + Duration::from_secs(10));
        assert_eq!(app.timer.state().remaining_seconds, 0);
        assert!(!app.timer.is_running());
    }

    #[test]
    fn test_complete_cancels_armed_ticker() {
        let dir = tempdir().unwrap();
        let mut app = app_in(&dir);
        type_into(&mut app, InputField::TaskName, "Triage");
        type_into(&mut app, InputField::WorkMinutes, "1");

        let start = Instant::now();
        app.toggle_timer(start);
        app.tick(start + Duration::from_secs(5));
        assert!(app.ticker.is_armed());

        app.finish_task_on(day(), TaskStatus::Completed)
            .unwrap()
            .unwrap();
        assert!(!app.ticker.is_armed());

        app.tick(start + Duration::from_secs(10));
        assert_eq!(app.timer.state().remaining_seconds, 0);
        assert_eq!(app.timer.state().total_work_seconds(), 0);
    }

    #[test]
    fn test_complete_saves_and_clears_form() {
        let dir = tempdir().unwrap();
        let mut app = app_in(&dir);
        type_into(&mut app, InputField::TaskName, "Write docs");
        type_into(&mut app, InputField::WorkMinutes, "2");
        type_into(&mut app, InputField::BreakMinutes, "1");

        app.toggle_timer(Instant::now());
        for _ in 0..90 {
            app.pulse();
        }

        let record = app
            .finish_task_on(day(), TaskStatus::Completed)
            .unwrap()
            .unwrap();
        assert_eq!(record, TaskRecord::new("Write docs", 1, TaskStatus::Completed));
        assert_eq!(app.form.task_name, "");
        assert_eq!(app.form.inputs, PhaseInputs::default());
        assert!(app.timer.state().is_idle());
        assert_eq!(app.timer.state().total_work_seconds(), 0);

        let stats = app.history.daily_stats(day()).unwrap();
        assert_eq!(stats.records, vec![record]);
    }

    #[test]
    fn test_finish_without_name_keeps_session() {
        let dir = tempdir().unwrap();
        let mut app = app_in(&dir);
        type_into(&mut app, InputField::WorkMinutes, "5");
        app.toggle_timer(Instant::now());
        app.pulse();

        let result = app.finish_task_on(day(), TaskStatus::Dismissed).unwrap();
        assert!(result.is_none());
        assert!(app.timer.is_running());
        assert_eq!(app.form.inputs.work_minutes, "5");
        assert!(!app.history.path().exists());
    }

    #[test]
    fn test_storage_failure_keeps_session() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("history.json");
        std::fs::write(&path, "{broken").unwrap();
        let mut app = AppState::new(
            HistoryStore::new(&path),
            AppSettings::default(),
            dir.path().join("settings.json"),
        );
        type_into(&mut app, InputField::TaskName, "Deploy");
        type_into(&mut app, InputField::WorkMinutes, "5");
        app.toggle_timer(Instant::now());
        app.pulse();

        assert!(app.finish_task_on(day(), TaskStatus::Completed).is_err());
        assert_eq!(app.form.task_name, "Deploy");
        assert_eq!(app.timer.state().total_work_seconds(), 1);

        app.complete_task();
        assert_eq!(app.status.as_ref().map(|s| s.kind), Some(StatusKind::Error));
    }

    #[test]
    fn test_progress_view() {
        let dir = tempdir().unwrap();
        let mut app = app_in(&dir);
        app.history
            .append_record(day(), TaskRecord::new("A", 30, TaskStatus::Completed))
            .unwrap();
        app.history
            .append_record(day(), TaskRecord::new("B", 45, TaskStatus::Dismissed))
            .unwrap();

        app.show_progress_on(day()).unwrap();
        assert_eq!(app.ui_mode, UiMode::Progress);
        let (date, stats) = app.progress.as_ref().unwrap();
        assert_eq!(*date, day());
        assert_eq!(stats.total_minutes, 75);
        assert_eq!(stats.completed_count, 1);

        app.close_progress();
        assert_eq!(app.ui_mode, UiMode::Normal);
        assert!(app.progress.is_none());
    }

    #[test]
    fn test_form_editing() {
        let dir = tempdir().unwrap();
        let mut app = app_in(&dir);

        app.start_editing(InputField::TaskName);
        app.input_char('a');
        app.input_char('b');
        app.input_backspace();
        app.focus_next_field();
        app.input_char('9');
        app.focus_previous_field();
        app.focus_previous_field();
        app.input_char('3');

        assert_eq!(app.form.task_name, "a");
        assert_eq!(app.form.inputs.work_minutes, "9");
        assert_eq!(app.form.inputs.break_minutes, "3");
        assert_eq!(app.ui_mode, UiMode::Editing);
    }

    #[test]
    fn test_save_defaults_prefills_next_task() {
        let dir = tempdir().unwrap();
        let mut app = app_in(&dir);
        type_into(&mut app, InputField::TaskName, "Plan");
        type_into(&mut app, InputField::WorkMinutes, "50");
        type_into(&mut app, InputField::BreakMinutes, "10");

        app.save_defaults();
        assert_eq!(app.settings.default_work_minutes, Some(50));

        let saved = crate::persistence::load_settings(dir.path().join("settings.json")).unwrap();
        assert_eq!(saved.default_break_minutes, Some(10));

        app.finish_task_on(day(), TaskStatus::Completed).unwrap();
        assert_eq!(app.form.task_name, "");
        assert_eq!(app.form.inputs, PhaseInputs::new("50", "10"));
    }

    #[test]
    fn test_save_defaults_rejects_invalid() {
        let dir = tempdir().unwrap();
        let mut app = app_in(&dir);
        type_into(&mut app, InputField::WorkMinutes, "x");

        app.save_defaults();
        assert_eq!(app.status.as_ref().map(|s| s.kind), Some(StatusKind::Error));
        assert!(!dir.path().join("settings.json").exists());
    }
}
