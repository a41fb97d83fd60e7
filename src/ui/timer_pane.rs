use crate::app::AppState;
use crate::domain::{format_time, phase_line, total_work_line, IntervalTimer, Phase};
use crate::ui::styles::{
    border_style, break_style, default_style, gauge_style, idle_style, paused_style,
    running_style, title_style,
};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

/// Style of the countdown for the current timer state
fn countdown_style(timer: &IntervalTimer) -> Style {
    let state = timer.state();
    if !timer.has_session() {
        idle_style()
    } else if !state.running {
        paused_style()
    } else if state.phase() == Phase::Break {
        break_style()
    } else {
        running_style()
    }
}

/// Short run-state label shown above the countdown
fn run_label(timer: &IntervalTimer) -> &'static str {
    if timer.is_running() {
        "RUNNING"
    } else if timer.has_session() {
        "PAUSED"
    } else {
        "IDLE"
    }
}

/// Text lines under the countdown; empty while no session is active
pub fn timer_lines(timer: &IntervalTimer) -> Vec<String> {
    if !timer.has_session() && timer.state().total_work_seconds() == 0 {
        return Vec::new();
    }

    let mut lines = Vec::new();
    if timer.has_session() {
        lines.push(phase_line(timer.state()));
    }
    lines.push(total_work_line(timer.state()));
    lines
}

/// Render the countdown pane
pub fn render_timer_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let timer = &app.timer;
    let state = timer.state();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style())
        .title(Span::styled(" Timer ", title_style()));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Top padding
            Constraint::Length(1), // Run state
            Constraint::Length(1), // Countdown
            Constraint::Length(1), // Spacing
            Constraint::Length(2), // Phase and total lines
            Constraint::Length(1), // Spacing
            Constraint::Length(1), // Gauge
            Constraint::Min(0),    // Bottom padding
        ])
        .split(inner);

    let label = Paragraph::new(Span::styled(run_label(timer), countdown_style(timer)))
        .alignment(Alignment::Center);
    f.render_widget(label, chunks[1]);

    let countdown = Paragraph::new(Span::styled(
        format_time(state.remaining_seconds),
        countdown_style(timer),
    ))
    .alignment(Alignment::Center);
    f.render_widget(countdown, chunks[2]);

    let lines: Vec<Line> = timer_lines(timer)
        .into_iter()
        .map(|text| Line::from(Span::styled(text, default_style())))
        .collect();
    f.render_widget(Paragraph::new(lines).alignment(Alignment::Center), chunks[4]);

    if timer.has_session() {
        let gauge_area = centered_width(chunks[6], 60);
        let gauge = Gauge::default()
            .gauge_style(gauge_style())
            .ratio(timer.phase_progress())
            .label(format!("of {}", format_time(timer.phase_length_seconds())));
        f.render_widget(gauge, gauge_area);
    }
}

/// Horizontally centered slice of `area`, `percent` wide
fn centered_width(area: Rect, percent: u16) -> Rect {
    let side = (100 - percent) / 2;
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(side),
            Constraint::Percentage(percent),
            Constraint::Percentage(side),
        ])
        .split(area)[1]
}
