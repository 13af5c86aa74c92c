pub mod input_form;
pub mod keybindings;
pub mod layout;
pub mod modal;
pub mod settings_pane;
pub mod stats_pane;
pub mod styles;
pub mod tab_bar;
pub mod task_pane;
pub mod timer_pane;

use crate::app::AppState;
use crate::domain::Tab;
use crate::timer::Phase;
use input_form::render_input_form;
use keybindings::render_keybindings;
use layout::create_layout;
use modal::{render_completion_modal, render_switch_modal};
use ratatui::Frame;
use settings_pane::render_settings_pane;
use stats_pane::render_stats_pane;
use tab_bar::render_tab_bar;
use task_pane::render_task_pane;
use timer_pane::render_timer_pane;

/// Main render function - draws the entire UI
pub fn render(f: &mut Frame, app: &AppState) {
    let size = f.size();
    let layout = create_layout(size);

    render_tab_bar(f, app, layout.tabs_area);
    render_keybindings(f, app, layout.keybindings_area);

    match app.tab {
        Tab::Timer => render_timer_pane(f, app, layout.content_area),
        Tab::Tasks => render_task_pane(f, app, layout.content_area),
        Tab::Stats => render_stats_pane(f, app, layout.content_area),
        Tab::Settings => render_settings_pane(f, app, layout.content_area),
    }

    // Session overlays sit above every tab
    match app.session.phase() {
        Phase::PendingSwitch { .. } => render_switch_modal(f, app, size),
        Phase::Completed { .. } => render_completion_modal(f, app, size),
        _ => {}
    }

    if app.task_form.is_some() {
        render_input_form(f, app, size);
    }
}
