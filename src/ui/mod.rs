pub mod form_pane;
pub mod keybindings;
pub mod layout;
pub mod progress_pane;
pub mod styles;
pub mod timer_pane;

use crate::app::{AppState, StatusKind};
use crate::domain::UiMode;
use form_pane::render_form_pane;
use keybindings::render_keybindings;
use layout::create_layout;
use progress_pane::render_progress_pane;
use ratatui::{layout::Rect, text::Span, widgets::Paragraph, Frame};
use styles::{default_style, error_style};
use timer_pane::render_timer_pane;

/// Render the status message line
fn render_status_line(f: &mut Frame, app: &AppState, area: Rect) {
    let Some(status) = &app.status else {
        return;
    };

    let style = match status.kind {
        StatusKind::Info => default_style(),
        StatusKind::Error => error_style(),
    };
    let paragraph = Paragraph::new(Span::styled(format!(" {}", status.text), style));
    f.render_widget(paragraph, area);
}

/// Main render function - draws the entire UI
pub fn render(f: &mut Frame, app: &AppState) {
    let size = f.size();
    let layout = create_layout(size);

    render_keybindings(f, app.ui_mode, layout.keybindings_area);
    render_form_pane(f, app, layout.form_area);
    render_timer_pane(f, app, layout.timer_area);
    render_status_line(f, app, layout.status_area);

    // Progress view draws over everything else
    if app.ui_mode == UiMode::Progress {
        render_progress_pane(f, app, size);
    }
}
