use crate::app::{AppState, TaskForm};
use crate::domain::timer::parse_minutes;
use crate::domain::{InputField, UiMode};
use crate::ui::styles::{border_style, default_style, error_style, selected_style, title_style};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// A numeric field holding something that will not parse
fn is_invalid(form: &TaskForm, field: InputField) -> bool {
    let value = form.value(field);
    field.is_numeric()
        && !value.trim().is_empty()
        && parse_minutes(field.label(), value).is_err()
}

/// Build one "Label  > value" line
fn field_line(form: &TaskForm, field: InputField, editing: bool) -> Line<'_> {
    let focused = editing && form.focused == field;
    let label_style = if focused { selected_style() } else { title_style() };
    let value_style = if is_invalid(form, field) {
        error_style()
    } else {
        default_style()
    };

    let mut spans = vec![
        Span::styled(format!(" {:<11}", field.label()), label_style),
        Span::raw(" > "),
        Span::styled(form.value(field), value_style),
    ];
    if focused {
        spans.push(Span::styled("█", title_style())); // Cursor
    }
    Line::from(spans)
}

/// Render the task name and duration inputs
pub fn render_form_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let editing = app.ui_mode == UiMode::Editing;
    let form = &app.form;

    let lines = vec![
        field_line(form, InputField::TaskName, editing),
        field_line(form, InputField::WorkMinutes, editing),
        field_line(form, InputField::BreakMinutes, editing),
    ];

    let title = if editing { " Task (editing) " } else { " Task " };
    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(if editing { title_style() } else { border_style() })
            .title(Span::styled(title, title_style())),
    );

    f.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::AppSettings;

    #[test]
    fn test_is_invalid() {
        let mut form = TaskForm::new(&AppSettings::default());
        assert!(!is_invalid(&form, InputField::WorkMinutes));

        form.inputs.work_minutes = "2x".to_string();
        form.task_name = "anything".to_string();
        assert!(is_invalid(&form, InputField::WorkMinutes));
        assert!(!is_invalid(&form, InputField::TaskName));
        assert!(!is_invalid(&form, InputField::BreakMinutes));
    }
}
