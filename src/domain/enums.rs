use serde::{Deserialize, Serialize};

/// Terminal outcome of a tracked task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    Completed,
    Dismissed,
}

impl TaskStatus {
    /// Lowercase tag as stored in the history file
    pub fn to_tag(&self) -> &'static str {
        match self {
            Self::Completed => "completed",
            Self::Dismissed => "dismissed",
        }
    }
}

/// Active mode of the interval timer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Work,
    Break,
}

impl Phase {
    pub fn name(&self) -> &'static str {
        match self {
            Phase::Work => "Work",
            Phase::Break => "Break",
        }
    }
}

/// UI mode for the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiMode {
    Normal,
    Editing,
    Progress,
}

/// Input field currently receiving keystrokes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputField {
    TaskName,
    WorkMinutes,
    BreakMinutes,
}

impl InputField {
    pub fn label(&self) -> &'static str {
        match self {
            InputField::TaskName => "Task Name",
            InputField::WorkMinutes => "Work (min)",
            InputField::BreakMinutes => "Break (min)",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            InputField::TaskName => InputField::WorkMinutes,
            InputField::WorkMinutes => InputField::BreakMinutes,
            InputField::BreakMinutes => InputField::TaskName,
        }
    }

    pub fn previous(&self) -> Self {
        match self {
            InputField::TaskName => InputField::BreakMinutes,
            InputField::WorkMinutes => InputField::TaskName,
            InputField::BreakMinutes => InputField::WorkMinutes,
        }
    }

    /// Minute fields; any text is accepted, non-numbers are flagged as invalid
    pub fn is_numeric(&self) -> bool {
        !matches!(self, InputField::TaskName)
    }
}
