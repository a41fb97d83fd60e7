// Cross-platform notification support
// Currently only implements macOS notifications

use crate::domain::PhaseChange;

#[cfg(target_os = "macos")]
use std::process::Command;

/// Title and body for a phase change
pub fn phase_message(change: PhaseChange) -> (&'static str, String) {
    match change {
        PhaseChange::BreakStarted { cycle } => {
            ("Break Time", format!("Cycle {} done, take a break", cycle))
        }
        PhaseChange::WorkResumed => ("Work Time", "Break is over, back to work".to_string()),
        PhaseChange::Finished => ("Timer Finished", "Interval complete".to_string()),
    }
}

/// Send a notification when the timer crosses a phase boundary
pub fn notify_phase_change(change: PhaseChange) {
    let (title, body) = phase_message(change);

    #[cfg(target_os = "macos")]
    {
        let script = format!(
            r#"display notification "{}" with title "Task Timer - {}""#,
            body.replace('"', "\\\""),
            title
        );

        if let Err(e) = Command::new("osascript").arg("-e").arg(&script).output() {
            tracing::debug!(error = %e, "Notification failed");
        }
    }

    #[cfg(not(target_os = "macos"))]
    {
        // No-op on other platforms
        let _ = (title, body);
    }
}
