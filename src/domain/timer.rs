use super::enums::{Phase, TaskStatus};
use super::record::TaskRecord;
use crate::error::InputError;

/// Raw duration inputs as typed by the user
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PhaseInputs {
    pub work_minutes: String,
    pub break_minutes: String,
}

impl PhaseInputs {
    pub fn new(work_minutes: impl Into<String>, break_minutes: impl Into<String>) -> Self {
        Self {
            work_minutes: work_minutes.into(),
            break_minutes: break_minutes.into(),
        }
    }

    pub fn has_work(&self) -> bool {
        !self.work_minutes.trim().is_empty()
    }

    pub fn has_break(&self) -> bool {
        !self.break_minutes.trim().is_empty()
    }

    pub fn work_seconds(&self) -> Result<u64, InputError> {
        parse_minutes("Work", &self.work_minutes)
    }

    pub fn break_seconds(&self) -> Result<u64, InputError> {
        parse_minutes("Break", &self.break_minutes)
    }
}

/// Parse a whole number of minutes into seconds
pub fn parse_minutes(field: &'static str, value: &str) -> Result<u64, InputError> {
    value
        .trim()
        .parse::<u32>()
        .map(|minutes| u64::from(minutes) * 60)
        .map_err(|_| InputError::invalid_minutes(field, value))
}

/// Snapshot of the countdown, rebuilt every session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TimerState {
    pub running: bool,
    pub on_break: bool,
    pub remaining_seconds: u64,
    pub cycle_index: u32,
    /// Work seconds of phases that already ended
    pub cumulative_work_seconds: u64,
    /// Work seconds of the phase in progress
    pub current_phase_work_seconds: u64,
}

impl TimerState {
    pub fn phase(&self) -> Phase {
        if self.on_break {
            Phase::Break
        } else {
            Phase::Work
        }
    }

    pub fn total_work_seconds(&self) -> u64 {
        self.cumulative_work_seconds + self.current_phase_work_seconds
    }

    /// Idle terminal state (cumulative counters are not part of it)
    pub fn is_idle(&self) -> bool {
        !self.running && !self.on_break && self.remaining_seconds == 0 && self.cycle_index == 0
    }
}

/// Result of a start/pause toggle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    Started,
    Paused,
}

/// Phase boundary crossed during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhaseChange {
    BreakStarted { cycle: u32 },
    WorkResumed,
    Finished,
}

/// Work/break interval state machine
///
/// The timer has no thread of its own. The caller delivers one `tick()` per
/// second of wall clock while the timer is running (see `crate::ticker`).
///
/// ```text
/// Idle -> Work -> Break -> Work -> ... -> Idle
/// ```
///
/// Phase lengths are read from the raw text inputs at the moment a phase
/// begins, so editing the break field mid-session affects the next break.
#[derive(Debug, Clone, Default)]
pub struct IntervalTimer {
    state: TimerState,
    /// Length of the current phase, for progress display
    phase_length_seconds: u64,
}

impl IntervalTimer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &TimerState {
        &self.state
    }

    pub fn is_running(&self) -> bool {
        self.state.running
    }

    pub fn phase_length_seconds(&self) -> u64 {
        self.phase_length_seconds
    }

    /// Elapsed fraction of the current phase (0.0 to 1.0)
    pub fn phase_progress(&self) -> f64 {
        if self.phase_length_seconds == 0 {
            return 0.0;
        }
        let elapsed = self.phase_length_seconds.saturating_sub(self.state.remaining_seconds);
        (elapsed as f64 / self.phase_length_seconds as f64).clamp(0.0, 1.0)
    }

    /// A session is in progress (started and not reset)
    pub fn has_session(&self) -> bool {
        !self.state.is_idle()
    }

    pub fn toggle(&mut self, inputs: &PhaseInputs) -> Result<Toggle, InputError> {
        if self.state.running {
            self.pause();
            Ok(Toggle::Paused)
        } else {
            self.start(inputs)?;
            Ok(Toggle::Started)
        }
    }

    /// Start or resume the countdown
    ///
    /// With nothing left on the clock a new work phase is loaded from the
    /// work input; an invalid input leaves the state untouched.
    pub fn start(&mut self, inputs: &PhaseInputs) -> Result<(), InputError> {
        if self.state.remaining_seconds == 0 {
            let seconds = inputs.work_seconds()?;
            self.state.on_break = false;
            self.state.remaining_seconds = seconds;
            self.phase_length_seconds = seconds;
        }
        self.state.running = true;
        Ok(())
    }

    pub fn pause(&mut self) {
        self.state.running = false;
    }

    /// Advance the countdown by one second
    ///
    /// Returns the phase change when the countdown hits zero. If the input
    /// for the next phase is invalid the transition is aborted and the timer
    /// stops at the boundary.
    pub fn tick(&mut self, inputs: &PhaseInputs) -> Result<Option<PhaseChange>, InputError> {
        if !self.state.running {
            return Ok(None);
        }

        if self.state.remaining_seconds > 0 {
            self.state.remaining_seconds -= 1;
            if !self.state.on_break {
                self.state.current_phase_work_seconds += 1;
            }
        }

        if self.state.remaining_seconds > 0 {
            return Ok(None);
        }

        match self.advance_phase(inputs) {
            Ok(change) => Ok(Some(change)),
            Err(e) => {
                self.state.running = false;
                Err(e)
            }
        }
    }

    fn advance_phase(&mut self, inputs: &PhaseInputs) -> Result<PhaseChange, InputError> {
        if !self.state.on_break && inputs.has_break() {
            let seconds = inputs.break_seconds()?;
            self.state.cumulative_work_seconds += self.state.current_phase_work_seconds;
            self.state.current_phase_work_seconds = 0;
            self.state.on_break = true;
            self.state.remaining_seconds = seconds;
            self.phase_length_seconds = seconds;
            self.state.cycle_index += 1;
            Ok(PhaseChange::BreakStarted {
                cycle: self.state.cycle_index,
            })
        } else if self.state.on_break && inputs.has_work() {
            let seconds = inputs.work_seconds()?;
            self.state.on_break = false;
            self.state.remaining_seconds = seconds;
            self.phase_length_seconds = seconds;
            Ok(PhaseChange::WorkResumed)
        } else {
            self.reset();
            Ok(PhaseChange::Finished)
        }
    }

    /// Back to the idle terminal state. Work counters survive.
    pub fn reset(&mut self) {
        self.state.running = false;
        self.state.on_break = false;
        self.state.remaining_seconds = 0;
        self.state.cycle_index = 0;
        self.phase_length_seconds = 0;
    }

    /// Record for the current task, or None when the name is empty
    pub fn record(&self, task_name: &str, status: TaskStatus) -> Option<TaskRecord> {
        if task_name.is_empty() {
            return None;
        }
        Some(TaskRecord::from_seconds(
            task_name,
            self.state.total_work_seconds(),
            status,
        ))
    }

    /// Close out the current task
    ///
    /// `persist` runs before any state is touched; when it fails the session
    /// is left as it was.
    pub fn finish<E, F>(
        &mut self,
        task_name: &str,
        status: TaskStatus,
        persist: F,
    ) -> Result<Option<TaskRecord>, E>
    where
        F: FnOnce(&TaskRecord) -> Result<(), E>,
    {
        let Some(record) = self.record(task_name, status) else {
            return Ok(None);
        };
        persist(&record)?;
        self.reset();
        self.state.cumulative_work_seconds = 0;
        self.state.current_phase_work_seconds = 0;
        Ok(Some(record))
    }
}
