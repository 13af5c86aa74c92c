use crate::domain::stats::{self, Summary};
use crate::domain::{
    AppSettings, DailyStat, SettingRow, SettingsPatch, Tab, Task, TaskStore, TaskTag, TimerMode,
    UiMode, WhiteNoise,
};
use crate::notifications;
use crate::persistence::{PersistedState, StorageKey, Store};
use crate::timer::{format_clock, Completion, ModeRequest, Phase, Session, TickOutcome};
use anyhow::{Context, Result};
use chrono::{DateTime, Local, NaiveDate};
use rand::seq::SliceRandom;
use tracing::{debug, info};
use uuid::Uuid;

/// Shown after a finished focus session
const AFFIRMATIONS: [&str; 6] = [
    "Productivity level: Expert! 🚀",
    "Look at you go! 🔥",
    "Another block secured. 🧱",
    "Brain gains! 🧠",
    "You are on fire today! ✨",
    "Consistency is key. Great job! 🔑",
];

/// Upper bound for the estimate field of the task form
pub const MAX_ESTIMATE_POMOS: u32 = 20;

/// Number of fields in the task form (title, estimate, tag)
pub const TASK_FORM_FIELDS: usize = 3;

/// Input form state for adding or editing a task
#[derive(Debug, Clone)]
pub struct TaskFormState {
    pub title: String,
    pub estimate: u32,
    pub tag: TaskTag,
    /// Task being edited; `None` when adding
    pub editing_id: Option<Uuid>,
    pub editing_field: usize, // 0 = title, 1 = estimate, 2 = tag
}

impl Default for TaskFormState {
    fn default() -> Self {
        Self {
            title: String::new(),
            estimate: 1,
            tag: TaskTag::Work,
            editing_id: None,
            editing_field: 0,
        }
    }
}

/// Storage keys changed since the last save
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PendingWrites {
    pub settings: bool,
    pub tasks: bool,
    pub stats: bool,
}

impl PendingWrites {
    pub fn any(&self) -> bool {
        self.settings || self.tasks || self.stats
    }
}

/// Main application state
pub struct AppState {
    pub settings: AppSettings,
    pub tasks: TaskStore,
    pub stats: Vec<DailyStat>,
    pub session: Session,
    pub tab: Tab,
    pub ui_mode: UiMode,
    pub task_form: Option<TaskFormState>,
    pub selected_task: usize,
    pub selected_setting: usize,
    pub show_completed: bool,
    pub affirmation: Option<&'static str>,
    pub pending_writes: PendingWrites,
    /// Desktop notifications and the terminal bell on completion
    pub notifications_enabled: bool,
}

impl AppState {
    pub fn new(state: PersistedState) -> Self {
        let session = Session::new(TimerMode::Focus, &state.settings.durations);
        Self {
            settings: state.settings,
            tasks: TaskStore::new(state.tasks),
            stats: state.stats,
            session,
            tab: Tab::Timer,
            ui_mode: UiMode::Normal,
            task_form: None,
            selected_task: 0,
            selected_setting: 0,
            show_completed: true,
            affirmation: None,
            pending_writes: PendingWrites::default(),
            notifications_enabled: true,
        }
    }

    // ---- Timer ----

    /// Start, pause or resume the current session
    pub fn toggle_timer(&mut self, now: DateTime<Local>) {
        if self.session.toggle(now) {
            debug!(mode = self.session.mode().name(), phase = ?self.session.phase(), "timer toggled");
        }
    }

    pub fn reset_timer(&mut self) {
        self.session.reset(&self.settings.durations);
    }

    /// Pick a mode; asks for confirmation if a session is running
    pub fn select_mode(&mut self, target: TimerMode, now: DateTime<Local>) {
        match self.session.request_mode_change(target, &self.settings.durations, now) {
            ModeRequest::Switched => {
                self.affirmation = None;
                debug!(mode = target.name(), "mode switched");
            }
            ModeRequest::Pending => debug!(to = target.name(), "mode switch awaiting confirmation"),
        }
    }

    /// Credit the running session, then switch to the pending mode
    pub fn confirm_finish(&mut self, now: DateTime<Local>) {
        if let Some(completion) = self.session.confirm_finish(&self.settings.durations) {
            self.apply_completion(completion, now);
        }
    }

    /// Switch to the pending mode without credit
    pub fn confirm_abandon(&mut self) {
        if self.session.confirm_abandon(&self.settings.durations) {
            info!(mode = self.session.mode().name(), "session abandoned");
        }
    }

    /// Dismiss the switch prompt and carry on
    pub fn cancel_switch(&mut self, now: DateTime<Local>) {
        self.session.cancel_switch(now);
    }

    /// Continue from the completion screen to the suggested mode
    pub fn advance(&mut self) {
        if self.session.manual_advance(&self.settings.durations) {
            self.affirmation = None;
        }
    }

    pub fn tick(&mut self) {
        self.tick_at(Local::now());
    }

    pub fn tick_at(&mut self, now: DateTime<Local>) -> TickOutcome {
        let outcome = self.session.tick(&self.settings, now);
        match outcome {
            TickOutcome::Completed(completion) => self.apply_completion(completion, now),
            TickOutcome::AutoAdvanced(mode) => {
                self.affirmation = None;
                info!(mode = mode.name(), "auto-started next session");
            }
            TickOutcome::Nothing => {}
        }
        outcome
    }

    /// Side effects of a finished session: task credit, daily stats, notification
    fn apply_completion(&mut self, completion: Completion, now: DateTime<Local>) {
        if completion.mode.is_focus() {
            if let Some(id) = self.tasks.credit_pomodoro() {
                debug!(task = %id, "credited pomodoro");
                self.pending_writes.tasks = true;
            }
            stats::record_focus_session(&mut self.stats, now.date_naive(), self.settings.durations.focus);
            self.pending_writes.stats = true;
            self.affirmation = AFFIRMATIONS.choose(&mut rand::thread_rng()).copied();
        } else {
            self.affirmation = None;
        }

        info!(mode = completion.mode.name(), kind = ?completion.kind, "session complete");

        if self.notifications_enabled {
            notifications::notify_session_complete(completion.kind);
            notifications::ring_alarm();
        }
    }

    /// Title for the terminal window
    pub fn window_title(&self) -> String {
        match self.session.phase() {
            Phase::Running => format!(
                "{} - {} | Lumina",
                format_clock(self.session.remaining_secs()),
                self.session.mode().label()
            ),
            Phase::Paused => "⏸️ Paused | Lumina".to_string(),
            _ => "Lumina Focus".to_string(),
        }
    }

    /// Ambient sound that should be playing right now
    pub fn now_playing(&self) -> Option<WhiteNoise> {
        let focus_running = self.session.is_running() && self.session.mode().is_focus();
        (focus_running && self.settings.white_noise != WhiteNoise::None).then_some(self.settings.white_noise)
    }

    // ---- Stats ----

    pub fn sessions_on(&self, date: NaiveDate) -> u32 {
        stats::sessions_on(&self.stats, date)
    }

    pub fn streak(&self, today: NaiveDate) -> u32 {
        stats::current_streak(&self.stats, today)
    }

    pub fn summary(&self) -> Summary {
        stats::summarize(&self.stats)
    }

    // ---- Tabs ----

    pub fn next_tab(&mut self) {
        self.tab = self.tab.next();
    }

    pub fn previous_tab(&mut self) {
        self.tab = self.tab.previous();
    }

    // ---- Settings ----

    /// Apply a partial settings update
    pub fn update_settings(&mut self, patch: SettingsPatch) {
        let durations_changed = self.settings.apply(patch);
        self.pending_writes.settings = true;
        if durations_changed {
            self.session.durations_changed(&self.settings.durations);
        }
    }

    pub fn selected_setting_row(&self) -> SettingRow {
        let rows = SettingRow::all();
        rows[self.selected_setting.min(rows.len() - 1)]
    }

    pub fn move_setting_up(&mut self) {
        self.selected_setting = self.selected_setting.saturating_sub(1);
    }

    pub fn move_setting_down(&mut self) {
        if self.selected_setting + 1 < SettingRow::all().len() {
            self.selected_setting += 1;
        }
    }

    pub fn adjust_selected_setting(&mut self, delta: i32) {
        let patch = self.selected_setting_row().adjust(&self.settings, delta);
        self.update_settings(patch);
    }

    pub fn activate_selected_setting(&mut self) {
        let patch = self.selected_setting_row().activate(&self.settings);
        if patch != SettingsPatch::default() {
            self.update_settings(patch);
        }
    }

    /// Jump the focus length to the next preset
    pub fn cycle_focus_preset(&mut self) {
        let patch = SettingRow::Focus.activate(&self.settings);
        self.update_settings(patch);
    }

    // ---- Tasks ----

    pub fn visible_tasks(&self) -> Vec<&Task> {
        self.tasks.visible(self.show_completed)
    }

    pub fn selected_task_id(&self) -> Option<Uuid> {
        self.visible_tasks().get(self.selected_task).map(|t| t.id)
    }

    pub fn move_selection_up(&mut self) {
        if self.selected_task > 0 {
            self.selected_task -= 1;
        }
    }

    pub fn move_selection_down(&mut self) {
        if self.selected_task + 1 < self.visible_tasks().len() {
            self.selected_task += 1;
        }
    }

    fn clamp_selection(&mut self) {
        let len = self.visible_tasks().len();
        self.selected_task = self.selected_task.min(len.saturating_sub(1));
    }

    pub fn toggle_show_completed(&mut self) {
        self.show_completed = !self.show_completed;
        self.clamp_selection();
    }

    pub fn toggle_selected_complete(&mut self) {
        if let Some(id) = self.selected_task_id() {
            self.tasks.toggle_complete(id);
            self.pending_writes.tasks = true;
            self.clamp_selection();
        }
    }

    pub fn delete_selected(&mut self) {
        if let Some(id) = self.selected_task_id() {
            if let Some(task) = self.tasks.delete(id) {
                debug!(title = %task.title, "task deleted");
                self.pending_writes.tasks = true;
            }
            self.clamp_selection();
        }
    }

    /// Make the selected task the one the timer credits (or clear it)
    pub fn activate_selected(&mut self) {
        if let Some(id) = self.selected_task_id() {
            self.tasks.set_active(id);
        }
    }

    /// Add a task directly (for testing and programmatic use)
    pub fn add_task(&mut self, title: &str, estimated_pomos: u32, tag: TaskTag) -> Option<Uuid> {
        let id = self.tasks.add(title, estimated_pomos, tag)?;
        self.pending_writes.tasks = true;
        self.selected_task = 0;
        Some(id)
    }

    /// Start adding a new task (opens input form)
    pub fn start_add_task(&mut self) {
        self.task_form = Some(TaskFormState::default());
        self.ui_mode = UiMode::AddingTask;
    }

    /// Open the form prefilled with the selected task
    pub fn start_edit_task(&mut self) {
        let Some(task) = self.selected_task_id().and_then(|id| self.tasks.get(id)) else {
            return;
        };
        self.task_form = Some(TaskFormState {
            title: task.title.clone(),
            estimate: task.estimated_pomos,
            tag: task.tag,
            editing_id: Some(task.id),
            editing_field: 0,
        });
        self.ui_mode = UiMode::EditingTask;
    }

    /// Cycle title -> estimate -> tag
    pub fn form_toggle_field(&mut self) {
        if let Some(form) = &mut self.task_form {
            form.editing_field = (form.editing_field + 1) % TASK_FORM_FIELDS;
        }
    }

    /// Type into the title field
    pub fn form_add_char(&mut self, c: char) {
        if let Some(form) = &mut self.task_form {
            if form.editing_field == 0 {
                form.title.push(c);
            }
        }
    }

    pub fn form_backspace(&mut self) {
        if let Some(form) = &mut self.task_form {
            if form.editing_field == 0 {
                form.title.pop();
            }
        }
    }

    /// Left/right on the estimate or tag field
    pub fn form_adjust(&mut self, delta: i32) {
        if let Some(form) = &mut self.task_form {
            match form.editing_field {
                1 => {
                    let estimate = form.estimate as i64 + delta as i64;
                    form.estimate = estimate.clamp(1, MAX_ESTIMATE_POMOS as i64) as u32;
                }
                2 => form.tag = form.tag.cycle(),
                _ => {}
            }
        }
    }

    /// Submit the form, creating or updating a task
    pub fn submit_task_form(&mut self) {
        if let Some(form) = self.task_form.take() {
            let changed = match form.editing_id {
                Some(id) => self.tasks.edit(id, &form.title, form.estimate, form.tag),
                None => {
                    let added = self.tasks.add(&form.title, form.estimate, form.tag).is_some();
                    if added {
                        self.selected_task = 0;
                    }
                    added
                }
            };
            if changed {
                self.pending_writes.tasks = true;
            }
            self.ui_mode = UiMode::Normal;
        }
    }

    /// Cancel input form
    pub fn cancel_task_form(&mut self) {
        self.task_form = None;
        self.ui_mode = UiMode::Normal;
    }

    // ---- Persistence ----

    /// Write every changed key to disk
    pub fn save(&mut self, store: &Store) -> Result<()> {
        if self.pending_writes.settings {
            store
                .save(StorageKey::Settings, &self.settings)
                .context("Failed to save settings")?;
            self.pending_writes.settings = false;
        }
        if self.pending_writes.tasks {
            store
                .save(StorageKey::Tasks, self.tasks.tasks())
                .context("Failed to save tasks")?;
            self.pending_writes.tasks = false;
        }
        if self.pending_writes.stats {
            store
                .save(StorageKey::Stats, &self.stats)
                .context("Failed to save stats")?;
            self.pending_writes.stats = false;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::stats::date_key;
    use crate::domain::CompletionKind;
    use chrono::{Duration, TimeZone};
    use pretty_assertions::assert_eq;

    fn t0() -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 3, 10, 9, 0, 0).unwrap()
    }

    fn secs(n: i64) -> Duration {
        Duration::seconds(n)
    }

    fn create_test_app() -> AppState {
        let mut app = AppState::new(PersistedState::default());
        app.notifications_enabled = false;
        app.add_task("Task 2", 2, TaskTag::Study);
        app.add_task("Task 1", 3, TaskTag::Work);
        app.pending_writes = PendingWrites::default();
        app
    }

    fn today_stat(app: &AppState) -> Option<&DailyStat> {
        let key = date_key(t0().date_naive());
        app.stats.iter().find(|s| s.date == key)
    }

    #[test]
    fn test_app_state_new() {
        let app = create_test_app();
        assert_eq!(app.tasks.len(), 2);
        assert_eq!(app.tab, Tab::Timer);
        assert_eq!(app.session.mode(), TimerMode::Focus);
        assert_eq!(app.session.remaining_secs(), 1500);
        assert_eq!(app.ui_mode, UiMode::Normal);
    }

    #[test]
    fn test_focus_then_manual_advance_scenario() {
        let mut app = create_test_app();
        app.toggle_timer(t0());
        let outcome = app.tick_at(t0() + secs(1500));

        assert!(matches!(outcome, TickOutcome::Completed(_)));
        assert_eq!(
            today_stat(&app),
            Some(&DailyStat {
                date: "2024-03-10".to_string(),
                minutes: 25,
                sessions: 1
            })
        );
        assert_eq!(app.session.completion_kind(), Some(CompletionKind::FocusDone));
        assert!(app.affirmation.is_some());
        assert!(app.pending_writes.stats);

        app.advance();
        assert_eq!(app.session.mode(), TimerMode::ShortBreak);
        assert_eq!(app.session.remaining_secs(), 300);
        assert!(app.affirmation.is_none());
    }

    #[test]
    fn test_focus_completion_credits_only_active_task() {
        let mut app = create_test_app();
        let active = app.tasks.tasks()[1].id;
        let other = app.tasks.tasks()[0].id;
        app.tasks.set_active(active);

        app.toggle_timer(t0());
        app.tick_at(t0() + secs(1500));

        assert_eq!(app.tasks.get(active).unwrap().completed_pomos, 1);
        assert_eq!(app.tasks.get(other).unwrap().completed_pomos, 0);
        assert!(app.pending_writes.tasks);
    }

    #[test]
    fn test_focus_completion_without_active_task() {
        let mut app = create_test_app();
        app.toggle_timer(t0());
        app.tick_at(t0() + secs(1500));

        assert!(app.tasks.tasks().iter().all(|t| t.completed_pomos == 0));
        assert!(!app.pending_writes.tasks);
        assert_eq!(today_stat(&app).unwrap().sessions, 1);
    }

    #[test]
    fn test_two_focus_sessions_same_day_accumulate() {
        let mut app = create_test_app();
        app.toggle_timer(t0());
        app.tick_at(t0() + secs(1500));
        app.advance();
        app.select_mode(TimerMode::Focus, t0() + secs(1600));

        app.update_settings(SettingsPatch {
            durations: Some(app.settings.durations.with(TimerMode::Focus, 50)),
            ..Default::default()
        });
        app.toggle_timer(t0() + secs(1600));
        app.tick_at(t0() + secs(1600 + 3000));

        assert_eq!(app.stats.len(), 1);
        let stat = today_stat(&app).unwrap();
        assert_eq!(stat.minutes, 75);
        assert_eq!(stat.sessions, 2);
    }

    #[test]
    fn test_break_completion_has_no_side_effects() {
        let mut app = create_test_app();
        app.tasks.set_active(app.tasks.tasks()[0].id);
        app.select_mode(TimerMode::ShortBreak, t0());
        app.toggle_timer(t0());
        app.tick_at(t0() + secs(300));

        assert_eq!(app.session.completion_kind(), Some(CompletionKind::BreakDone));
        assert!(app.stats.is_empty());
        assert!(app.tasks.tasks().iter().all(|t| t.completed_pomos == 0));
        assert!(app.affirmation.is_none());

        app.advance();
        assert_eq!(app.session.mode(), TimerMode::Focus);
    }

    #[test]
    fn test_confirm_abandon_leaves_stats_and_tasks() {
        let mut app = create_test_app();
        let active = app.tasks.tasks()[0].id;
        app.tasks.set_active(active);
        let tasks_before = app.tasks.tasks().to_vec();

        app.toggle_timer(t0());
        app.select_mode(TimerMode::LongBreak, t0() + secs(600));
        assert_eq!(app.session.pending_target(), Some(TimerMode::LongBreak));

        app.confirm_abandon();
        assert_eq!(app.session.mode(), TimerMode::LongBreak);
        assert_eq!(app.session.phase(), Phase::Idle);
        assert!(app.stats.is_empty());
        assert_eq!(app.tasks.tasks(), tasks_before.as_slice());
    }

    #[test]
    fn test_confirm_finish_applies_completion_then_switches() {
        let mut app = create_test_app();
        let active = app.tasks.tasks()[0].id;
        app.tasks.set_active(active);

        app.toggle_timer(t0());
        app.select_mode(TimerMode::ShortBreak, t0() + secs(600));
        app.confirm_finish(t0() + secs(620));

        assert_eq!(app.tasks.get(active).unwrap().completed_pomos, 1);
        let stat = today_stat(&app).unwrap();
        assert_eq!(stat.minutes, 25);
        assert_eq!(stat.sessions, 1);
        assert_eq!(app.session.mode(), TimerMode::ShortBreak);
        assert_eq!(app.session.phase(), Phase::Idle);
        assert_eq!(app.session.remaining_secs(), 300);
    }

    #[test]
    fn test_cancel_switch_keeps_session() {
        let mut app = create_test_app();
        app.toggle_timer(t0());
        app.select_mode(TimerMode::ShortBreak, t0() + secs(100));
        app.cancel_switch(t0() + secs(400));

        assert_eq!(app.session.mode(), TimerMode::Focus);
        assert!(app.session.is_running());
        app.tick_at(t0() + secs(400));
        assert_eq!(app.session.remaining_secs(), 1400);
    }

    #[test]
    fn test_auto_start_break_after_focus() {
        let mut app = create_test_app();
        app.update_settings(SettingsPatch {
            auto_start_breaks: Some(true),
            ..Default::default()
        });
        app.toggle_timer(t0());
        app.tick_at(t0() + secs(1500));
        let outcome = app.tick_at(t0() + secs(1504));

        assert_eq!(outcome, TickOutcome::AutoAdvanced(TimerMode::ShortBreak));
        assert!(app.session.is_running());
        assert!(app.affirmation.is_none());
    }

    #[test]
    fn test_settings_change_resets_idle_timer() {
        let mut app = create_test_app();
        app.selected_setting = 0;
        app.adjust_selected_setting(5);
        assert_eq!(app.settings.durations.focus, 30);
        assert_eq!(app.session.remaining_secs(), 1800);
        assert!(app.pending_writes.settings);

        app.activate_selected_setting();
        assert_eq!(app.settings.durations.focus, 45);
        assert_eq!(app.session.remaining_secs(), 2700);
    }

    #[test]
    fn test_settings_change_leaves_running_timer() {
        let mut app = create_test_app();
        app.toggle_timer(t0());
        app.adjust_selected_setting(10);
        app.tick_at(t0() + secs(10));
        assert_eq!(app.session.remaining_secs(), 1490);
    }

    #[test]
    fn test_settings_rows_navigation() {
        let mut app = create_test_app();
        app.move_setting_up();
        assert_eq!(app.selected_setting_row(), SettingRow::Focus);
        for _ in 0..20 {
            app.move_setting_down();
        }
        assert_eq!(app.selected_setting_row(), SettingRow::Volume);
        app.adjust_selected_setting(1);
        assert_eq!(app.settings.volume, 0.6);

        app.move_setting_up();
        app.activate_selected_setting();
        assert_eq!(app.settings.white_noise, WhiteNoise::Rain);
    }

    #[test]
    fn test_window_title() {
        let mut app = create_test_app();
        assert_eq!(app.window_title(), "Lumina Focus");
        app.toggle_timer(t0());
        app.tick_at(t0() + secs(61));
        assert_eq!(app.window_title(), "23:59 - FOCUS TIME | Lumina");
        app.toggle_timer(t0() + secs(61));
        assert_eq!(app.window_title(), "⏸️ Paused | Lumina");
    }

    #[test]
    fn test_now_playing_only_during_running_focus() {
        let mut app = create_test_app();
        app.settings.white_noise = WhiteNoise::Brown;
        assert_eq!(app.now_playing(), None);
        app.toggle_timer(t0());
        assert_eq!(app.now_playing(), Some(WhiteNoise::Brown));
        app.toggle_timer(t0());
        assert_eq!(app.now_playing(), None);

        app.select_mode(TimerMode::ShortBreak, t0());
        app.toggle_timer(t0());
        assert_eq!(app.now_playing(), None);
    }

    #[test]
    fn test_task_form_add() {
        let mut app = create_test_app();
        app.start_add_task();
        assert_eq!(app.ui_mode, UiMode::AddingTask);
        for c in "Plan week".chars() {
            app.form_add_char(c);
        }
        app.form_toggle_field();
        app.form_adjust(1);
        app.form_adjust(1);
        app.form_toggle_field();
        app.form_adjust(1);
        app.submit_task_form();

        assert_eq!(app.ui_mode, UiMode::Normal);
        assert_eq!(app.tasks.len(), 3);
        let task = &app.tasks.tasks()[0];
        assert_eq!(task.title, "Plan week");
        assert_eq!(task.estimated_pomos, 3);
        assert_eq!(task.tag, TaskTag::Study);
        assert!(app.pending_writes.tasks);
    }

    #[test]
    fn test_task_form_blank_title_closes_without_adding() {
        let mut app = create_test_app();
        app.start_add_task();
        app.form_add_char(' ');
        app.submit_task_form();
        assert_eq!(app.tasks.len(), 2);
        assert!(app.task_form.is_none());
        assert!(!app.pending_writes.tasks);
    }

    #[test]
    fn test_task_form_edit() {
        let mut app = create_test_app();
        app.move_selection_down();
        let id = app.selected_task_id().unwrap();
        app.start_edit_task();
        assert_eq!(app.ui_mode, UiMode::EditingTask);
        app.form_backspace();
        app.form_add_char('X');
        app.form_toggle_field();
        app.form_adjust(-5);
        app.submit_task_form();

        let task = app.tasks.get(id).unwrap();
        assert_eq!(task.title, "Task X");
        assert_eq!(task.estimated_pomos, 1);
        assert_eq!(app.tasks.len(), 2);
    }

    #[test]
    fn test_delete_selected_clears_active() {
        let mut app = create_test_app();
        app.activate_selected();
        let id = app.selected_task_id().unwrap();
        assert_eq!(app.tasks.active_id(), Some(id));

        app.delete_selected();
        assert_eq!(app.tasks.len(), 1);
        assert_eq!(app.tasks.active_id(), None);
    }

    #[test]
    fn test_hide_completed_clamps_selection() {
        let mut app = create_test_app();
        app.move_selection_down();
        app.toggle_selected_complete();
        app.toggle_show_completed();
        assert_eq!(app.visible_tasks().len(), 1);
        assert_eq!(app.selected_task, 0);
        assert_eq!(app.tasks.len(), 2);
    }

    #[test]
    fn test_sessions_and_streak_helpers() {
        let mut app = create_test_app();
        app.toggle_timer(t0());
        app.tick_at(t0() + secs(1500));
        let today = t0().date_naive();
        assert_eq!(app.sessions_on(today), 1);
        assert_eq!(app.streak(today), 1);
        assert_eq!(app.summary().total_minutes, 25);
    }

    #[test]
    fn test_save_writes_pending_keys() {
        let temp_dir = tempfile::tempdir().unwrap();
        let store = Store::open(temp_dir.path()).unwrap();
        let mut app = create_test_app();
        app.pending_writes.tasks = true;
        app.toggle_timer(t0());
        app.tick_at(t0() + secs(1500));

        app.save(&store).unwrap();
        assert!(!app.pending_writes.any());

        let state = store.load_state();
        assert_eq!(state.tasks.len(), 2);
        assert_eq!(state.stats.len(), 1);
        assert!(!store.path(StorageKey::Settings).exists());
    }
}
