use crate::domain::UiMode;
use crate::ui::styles::hint_style;
use ratatui::{layout::Rect, text::{Line, Span}, widgets::Paragraph, Frame};

/// Hints for the current mode
pub fn hints(mode: UiMode) -> Vec<&'static str> {
    match mode {
        UiMode::Normal => vec![
            " Space start/pause   ",
            "c complete   ",
            "x dismiss   ",
            "r reset   ",
            "p progress   ",
            "e edit   ",
            "s save defaults   ",
            "q quit",
        ],
        UiMode::Editing => vec![
            " Tab next field   ",
            "Shift+Tab previous   ",
            "Enter/Esc done",
        ],
        UiMode::Progress => vec![" Esc close"],
    }
}

/// Render the keybindings hint bar
pub fn render_keybindings(f: &mut Frame, mode: UiMode, area: Rect) {
    let line = Line::from(hints(mode).into_iter().map(Span::raw).collect::<Vec<_>>());
    let paragraph = Paragraph::new(line).style(hint_style());
    f.render_widget(paragraph, area);
}
