use crate::app::AppState;
use crate::domain::{record_line, status_badge, DailyStats, TaskStatus};
use crate::ui::{
    layout::create_modal_area,
    styles::{done_style, idle_style, modal_bg_style, modal_title_style},
};
use chrono::NaiveDate;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
    Frame,
};

/// Header lines: day, minutes and completed count
fn summary_lines(date: NaiveDate, stats: &DailyStats) -> Vec<Line<'static>> {
    vec![
        Line::from(Span::styled(format!("Today ({})", date), modal_title_style())),
        Line::raw(""),
        Line::raw(format!(
            "Minutes {}    Completed {}",
            stats.total_minutes, stats.completed_count
        )),
    ]
}

/// Create a line for one recorded task
fn create_record_line(record: &crate::domain::TaskRecord, use_emoji: bool) -> Line<'static> {
    let style = match record.status {
        TaskStatus::Completed => done_style(),
        TaskStatus::Dismissed => idle_style(),
    };
    Line::from(vec![
        Span::styled(format!("{} ", status_badge(record.status, use_emoji)), style),
        Span::raw(record_line(record)),
    ])
}

/// Render the progress view for the loaded day
pub fn render_progress_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let Some((date, stats)) = &app.progress else {
        return;
    };

    let modal_area = create_modal_area(area);

    // Clear the area behind the modal
    f.render_widget(Clear, modal_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(" Progress ", modal_title_style()))
        .style(modal_bg_style());
    let inner = block.inner(modal_area);
    f.render_widget(block, modal_area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Summary
            Constraint::Min(0),    // Records
        ])
        .split(inner);

    let summary = Paragraph::new(summary_lines(*date, stats)).alignment(Alignment::Center);
    f.render_widget(summary, chunks[0]);

    let items: Vec<ListItem> = if stats.is_empty() {
        vec![ListItem::new(Line::raw("No tasks recorded yet"))]
    } else {
        stats
            .records
            .iter()
            .map(|record| ListItem::new(create_record_line(record, app.settings.use_emoji)))
            .collect()
    };
    f.render_widget(List::new(items), chunks[1]);
}
