use crate::domain::{record_line, DailyStats, TaskStatus};
use crate::persistence::{atomic_write, report_file, HistoryStore};
use anyhow::{Context, Result};
use chrono::NaiveDate;
use std::path::{Path, PathBuf};
use tracing::info;

/// Format minutes as "Xh Ym" or "Xm" for display
fn format_minutes(total_mins: u64) -> String {
    if total_mins < 60 {
        format!("{}m", total_mins)
    } else {
        let hours = total_mins / 60;
        let mins = total_mins % 60;
        if mins == 0 {
            format!("{}h", hours)
        } else {
            format!("{}h {}m", hours, mins)
        }
    }
}

/// Render the markdown report for one day
pub fn render_report(date: NaiveDate, stats: &DailyStats) -> String {
    let mut report = String::new();

    report.push_str(&format!("# Daily Report - {}\n\n", date));

    report.push_str("## Summary\n\n");
    report.push_str(&format!("- **Total Time:** {}\n", format_minutes(stats.total_minutes)));
    report.push_str(&format!(
        "- **Tasks:** {} (Completed: {}, Dismissed: {})\n",
        stats.records.len(),
        stats.completed_count,
        stats.dismissed_count()
    ));

    let completed_minutes: u64 = stats
        .records
        .iter()
        .filter(|r| r.is_completed())
        .map(|r| r.duration)
        .sum();
    report.push_str(&format!(
        "- **Time on Completed Tasks:** {}\n\n",
        format_minutes(completed_minutes)
    ));

    report.push_str("## Tasks\n\n");
    if stats.is_empty() {
        report.push_str("_No tasks recorded._\n");
    } else {
        for record in &stats.records {
            let mark = match record.status {
                TaskStatus::Completed => "x",
                TaskStatus::Dismissed => " ",
            };
            report.push_str(&format!("- [{}] {}\n", mark, record_line(record)));
        }
    }

    report.push_str("\n---\n\n");
    report.push_str(&format!(
        "_Report generated at {}_\n",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    ));

    report
}

/// Generate a daily report for the specified date
///
/// Writes to `output_path`, or `report-YYYY-MM-DD.md` in `data_dir`.
pub fn generate_report(
    store: &HistoryStore,
    data_dir: &Path,
    date: NaiveDate,
    output_path: Option<PathBuf>,
) -> Result<PathBuf> {
    let stats = store
        .daily_stats(date)
        .with_context(|| format!("Failed to load history for {}", date))?;

    let report = render_report(date, &stats);
    let path = output_path.unwrap_or_else(|| report_file(data_dir, date));
    atomic_write(&path, &report)?;

    info!(date = %date, path = %path.display(), "Report generated");
    Ok(path)
}
