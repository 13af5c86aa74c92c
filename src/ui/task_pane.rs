use crate::app::AppState;
use crate::domain::Task;
use crate::ui::styles::{
    active_style, border_style, default_style, done_style, hint_style, over_estimate_style,
    selected_style, tag_style, title_style,
};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

/// Render the task list
pub fn render_task_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let visible = app.visible_tasks();
    let done = app.tasks.tasks().iter().filter(|t| t.completed).count();
    let title = format!(" Tasks ({}/{} done) ", done, app.tasks.len());
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style())
        .title(Span::styled(title, title_style()));

    if visible.is_empty() {
        let message = if app.tasks.is_empty() {
            "No tasks yet. Press [a] to add one."
        } else {
            "All done! Press [c] to show completed tasks."
        };
        let paragraph = Paragraph::new(Line::styled(message, hint_style())).block(block);
        f.render_widget(paragraph, area);
        return;
    }

    let active_id = app.tasks.active_id();
    let items: Vec<ListItem> = visible
        .iter()
        .enumerate()
        .map(|(idx, task)| {
            let line = create_task_line(task, active_id == Some(task.id));
            let style = if idx == app.selected_task {
                selected_style()
            } else {
                default_style()
            };
            ListItem::new(line).style(style)
        })
        .collect();

    let list = List::new(items).block(block);
    f.render_widget(list, area);
}

/// One row: `▶ [x] Write report  [Work]  🍅 1/3`
fn create_task_line(task: &Task, is_active: bool) -> Line<'static> {
    let mut spans = Vec::new();

    if is_active {
        spans.push(Span::styled("▶ ", active_style()));
    } else {
        spans.push(Span::raw("  "));
    }

    let check = if task.completed { "[x] " } else { "[ ] " };
    spans.push(Span::raw(check));

    if task.completed {
        spans.push(Span::styled(task.title.clone(), done_style()));
    } else {
        spans.push(Span::raw(task.title.clone()));
    }

    spans.push(Span::raw("  "));
    spans.push(Span::styled(format!("[{}]", task.tag.name()), tag_style(task.tag)));
    spans.push(Span::raw("  "));

    let progress = format!("🍅 {}", task.pomo_progress());
    if task.is_over_estimate() {
        spans.push(Span::styled(progress, over_estimate_style()));
    } else {
        spans.push(Span::raw(progress));
    }

    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TaskTag;

    #[test]
    fn test_create_task_line() {
        let task = Task::new("Write report".to_string(), 3, TaskTag::Study);
        let line_str = format!("{:?}", create_task_line(&task, false));
        assert!(line_str.contains("Write report"));
        assert!(line_str.contains("[Study]"));
        assert!(line_str.contains("0/3"));
    }

    #[test]
    fn test_active_task_line_has_marker() {
        let task = Task::new("Focus".to_string(), 1, TaskTag::Work);
        let line_str = format!("{:?}", create_task_line(&task, true));
        assert!(line_str.contains("▶"));
    }
}
