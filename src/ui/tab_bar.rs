use crate::app::AppState;
use crate::domain::Tab;
use crate::ui::styles::{hint_style, selected_style};
use ratatui::{layout::Rect, text::Line, widgets::Tabs, Frame};

/// Render the tab strip along the top
pub fn render_tab_bar(f: &mut Frame, app: &AppState, area: Rect) {
    let titles: Vec<Line> = Tab::all().iter().map(|t| Line::raw(t.title())).collect();
    let selected = Tab::all().iter().position(|t| *t == app.tab).unwrap_or(0);

    let tabs = Tabs::new(titles)
        .select(selected)
        .style(hint_style())
        .highlight_style(selected_style())
        .divider("│");

    f.render_widget(tabs, area);
}
