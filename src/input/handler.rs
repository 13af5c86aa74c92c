use crate::app::AppState;
use crate::domain::{Tab, TimerMode, UiMode};
use crate::timer::Phase;
use anyhow::Result;
use chrono::{DateTime, Local};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Handle keyboard input events. Returns true when the app should quit.
pub fn handle_key(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    handle_key_at(app, key, Local::now())
}

/// Same as `handle_key` with an explicit clock
pub fn handle_key_at(app: &mut AppState, key: KeyEvent, now: DateTime<Local>) -> Result<bool> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Ok(true);
    }

    match app.ui_mode {
        UiMode::AddingTask | UiMode::EditingTask => return handle_input_form_mode(app, key),
        UiMode::Normal => {}
    }

    match app.session.phase() {
        Phase::PendingSwitch { .. } => handle_switch_prompt(app, key, now),
        Phase::Completed { .. } => handle_completion_screen(app, key, now),
        _ => handle_normal_mode(app, key, now),
    }
}

/// Mode letters shared by the timer tab and the completion screen
fn mode_for_key(code: KeyCode) -> Option<TimerMode> {
    match code {
        KeyCode::Char('f') => Some(TimerMode::Focus),
        KeyCode::Char('s') => Some(TimerMode::ShortBreak),
        KeyCode::Char('l') => Some(TimerMode::LongBreak),
        _ => None,
    }
}

/// Keys while a mode change waits for confirmation
fn handle_switch_prompt(app: &mut AppState, key: KeyEvent, now: DateTime<Local>) -> Result<bool> {
    match key.code {
        KeyCode::Char('f') => app.confirm_finish(now),
        KeyCode::Char('a') => app.confirm_abandon(),
        KeyCode::Esc => app.cancel_switch(now),
        KeyCode::Char('q') => return Ok(true),
        _ => {}
    }
    Ok(false)
}

/// Keys on the completion overlay
fn handle_completion_screen(
    app: &mut AppState,
    key: KeyEvent,
    now: DateTime<Local>,
) -> Result<bool> {
    match key.code {
        KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('n') => app.advance(),
        KeyCode::Char('q') => return Ok(true),
        code => {
            if let Some(mode) = mode_for_key(code) {
                app.select_mode(mode, now);
            }
        }
    }
    Ok(false)
}

/// Handle keys in normal mode
fn handle_normal_mode(app: &mut AppState, key: KeyEvent, now: DateTime<Local>) -> Result<bool> {
    match key.code {
        KeyCode::Char('q') => return Ok(true),
        KeyCode::Tab => {
            app.next_tab();
            return Ok(false);
        }
        KeyCode::BackTab => {
            app.previous_tab();
            return Ok(false);
        }
        _ => {}
    }

    match app.tab {
        Tab::Timer => handle_timer_tab(app, key, now),
        Tab::Tasks => handle_tasks_tab(app, key),
        Tab::Stats => {}
        Tab::Settings => handle_settings_tab(app, key),
    }
    Ok(false)
}

fn handle_timer_tab(app: &mut AppState, key: KeyEvent, now: DateTime<Local>) {
    match key.code {
        KeyCode::Char(' ') | KeyCode::Enter => app.toggle_timer(now),
        KeyCode::Char('r') => app.reset_timer(),
        code => {
            if let Some(mode) = mode_for_key(code) {
                app.select_mode(mode, now);
            }
        }
    }
}

fn handle_tasks_tab(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => app.move_selection_up(),
        KeyCode::Down | KeyCode::Char('j') => app.move_selection_down(),
        KeyCode::Char('a') => app.start_add_task(),
        KeyCode::Char('e') => app.start_edit_task(),
        KeyCode::Char(' ') | KeyCode::Char('x') => app.toggle_selected_complete(),
        KeyCode::Char('d') | KeyCode::Delete => app.delete_selected(),
        KeyCode::Enter => app.activate_selected(),
        KeyCode::Char('c') => app.toggle_show_completed(),
        _ => {}
    }
}

fn handle_settings_tab(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => app.move_setting_up(),
        KeyCode::Down | KeyCode::Char('j') => app.move_setting_down(),
        KeyCode::Left | KeyCode::Char('-') => app.adjust_selected_setting(-1),
        KeyCode::Right | KeyCode::Char('+') | KeyCode::Char('=') => {
            app.adjust_selected_setting(1)
        }
        KeyCode::Enter | KeyCode::Char(' ') => app.activate_selected_setting(),
        KeyCode::Char('p') => app.cycle_focus_preset(),
        _ => {}
    }
}

/// Handle keys in the add/edit task form
fn handle_input_form_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Esc => app.cancel_task_form(),
        KeyCode::Enter => app.submit_task_form(),
        KeyCode::Tab => app.form_toggle_field(),
        KeyCode::Backspace => app.form_backspace(),
        KeyCode::Left => app.form_adjust(-1),
        KeyCode::Right => app.form_adjust(1),
        KeyCode::Char(c) => {
            let on_title = app.task_form.as_ref().map_or(false, |f| f.editing_field == 0);
            match c {
                '-' if !on_title => app.form_adjust(-1),
                '+' if !on_title => app.form_adjust(1),
                _ => app.form_add_char(c),
            }
        }
        _ => {}
    }
    Ok(false)
}
