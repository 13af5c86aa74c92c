use crate::app::AppState;
use crate::domain::SettingRow;
use crate::ui::styles::{border_style, default_style, hint_style, selected_style, title_style};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

/// Render the settings list
pub fn render_settings_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style())
        .title(Span::styled(" Settings ", title_style()));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(2)])
        .split(inner);

    let items: Vec<ListItem> = SettingRow::all()
        .iter()
        .enumerate()
        .map(|(idx, row)| {
            let line = Line::from(vec![
                Span::raw(format!(" {:<28}", row.label())),
                Span::raw(row.value(&app.settings)),
            ]);
            let style = if idx == app.selected_setting {
                selected_style()
            } else {
                default_style()
            };
            ListItem::new(line).style(style)
        })
        .collect();
    f.render_widget(List::new(items), chunks[0]);

    let footer = Paragraph::new(Line::styled(
        " Changes are saved immediately. An idle timer picks up new durations.",
        hint_style(),
    ));
    f.render_widget(footer, chunks[1]);
}
