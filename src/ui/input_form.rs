use crate::app::AppState;
use crate::domain::UiMode;
use crate::ui::{
    layout::create_modal_area,
    styles::{modal_bg_style, modal_title_style, tag_style},
};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

fn field_label(label: &str, active: bool) -> Line<'static> {
    if active {
        Line::raw(format!("{} (editing)", label))
    } else {
        Line::raw(label.to_string())
    }
}

/// Render the add/edit task form
pub fn render_input_form(f: &mut Frame, app: &AppState, area: Rect) {
    if let Some(form) = &app.task_form {
        let modal_area = create_modal_area(area, 14);

        // Clear the area behind the form
        f.render_widget(Clear, modal_area);

        let title_text = if app.ui_mode == UiMode::EditingTask {
            " Edit Task "
        } else {
            " Add Task "
        };

        let mut lines = vec![Line::raw("")];

        // Title field
        lines.push(field_label("What are you working on?", form.editing_field == 0));
        lines.push(Line::from(vec![
            Span::raw("> "),
            Span::styled(form.title.as_str(), modal_title_style()),
            if form.editing_field == 0 {
                Span::styled("█", modal_title_style()) // Cursor
            } else {
                Span::raw("")
            },
        ]));
        lines.push(Line::raw(""));

        // Estimate field
        lines.push(field_label("Est. Pomodoros:", form.editing_field == 1));
        lines.push(Line::from(vec![
            Span::raw("< "),
            Span::styled(form.estimate.to_string(), modal_title_style()),
            Span::raw(" >"),
        ]));
        lines.push(Line::raw(""));

        // Tag field
        lines.push(field_label("Tag:", form.editing_field == 2));
        lines.push(Line::from(vec![
            Span::raw("< "),
            Span::styled(form.tag.name(), tag_style(form.tag)),
            Span::raw(" >"),
        ]));
        lines.push(Line::raw(""));

        lines.push(Line::raw("Tab next field  ·  ←/→ change  ·  Enter save  ·  Esc cancel"));

        let paragraph = Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(Span::styled(title_text, modal_title_style()))
                    .style(modal_bg_style()),
            )
            .wrap(Wrap { trim: false });

        f.render_widget(paragraph, modal_area);
    }
}
