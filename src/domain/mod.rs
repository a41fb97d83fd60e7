pub mod enums;
pub mod record;
pub mod timer;
pub mod views;

pub use enums::{InputField, Phase, TaskStatus, UiMode};
pub use record::{DailyHistory, DailyStats, TaskRecord};
pub use timer::{IntervalTimer, PhaseChange, PhaseInputs, TimerState, Toggle};
pub use views::{format_time, phase_line, record_line, status_badge, total_work_line};
