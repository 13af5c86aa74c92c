use crate::app::AppState;
use crate::domain::{Tab, UiMode};
use crate::timer::Phase;
use crate::ui::styles::hint_style;
use ratatui::{layout::Rect, text::Line, widgets::Paragraph, Frame};

/// Hints for whatever currently has the keyboard
pub fn hints(app: &AppState) -> &'static str {
    if app.ui_mode != UiMode::Normal {
        return " Tab field   ←/→ change   Enter save   Esc cancel";
    }
    match app.session.phase() {
        Phase::PendingSwitch { .. } => return " f finish   a abandon   Esc keep going",
        Phase::Completed { .. } => return " Enter continue   f/s/l pick mode   q quit",
        _ => {}
    }
    match app.tab {
        Tab::Timer => " Space start/pause   r reset   f/s/l mode   Tab next tab   q quit",
        Tab::Tasks => {
            " ↑/↓ select   a add   e edit   x done   d delete   Enter set active   c hide done   q quit"
        }
        Tab::Stats => " Tab next tab   Shift+Tab previous   q quit",
        Tab::Settings => " ↑/↓ select   ←/→ adjust   Enter toggle   p focus preset   q quit",
    }
}

/// Render the keybindings hint bar
pub fn render_keybindings(f: &mut Frame, app: &AppState, area: Rect) {
    let paragraph = Paragraph::new(Line::raw(hints(app))).style(hint_style());
    f.render_widget(paragraph, area);
}
