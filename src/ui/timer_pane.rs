use crate::app::AppState;
use crate::domain::TimerMode;
use crate::timer::{format_clock, Phase};
use crate::ui::styles::{
    active_style, border_style, clock_style, default_style, gauge_style, hint_style, mode_color,
    paused_style, title_style,
};
use chrono::Local;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

/// Row of mode chips with the current one highlighted
fn mode_chips(current: TimerMode) -> Line<'static> {
    let mut spans = Vec::new();
    for (idx, mode) in TimerMode::all().iter().enumerate() {
        if idx > 0 {
            spans.push(Span::raw("   "));
        }
        let text = format!(" {} ", mode.name());
        if *mode == current {
            spans.push(Span::styled(
                text,
                Style::default()
                    .bg(mode_color(*mode))
                    .fg(ratatui::style::Color::Black)
                    .add_modifier(Modifier::BOLD),
            ));
        } else {
            spans.push(Span::styled(text, hint_style()));
        }
    }
    Line::from(spans)
}

/// Status line under the clock
fn status_line(app: &AppState) -> Line<'static> {
    let mode = app.session.mode();
    match app.session.phase() {
        Phase::Idle => Line::styled(format!("[Space] Start {}", mode.action()), hint_style()),
        Phase::Running => Line::styled(format!("[Space] Pause {}", mode.action()), hint_style()),
        Phase::Paused => Line::styled("⏸  Paused · [Space] resume  [r] reset", paused_style()),
        Phase::PendingSwitch { target } => Line::styled(
            format!("Switch to {}?", target.name()),
            paused_style(),
        ),
        Phase::Completed { .. } => Line::styled("Session complete", title_style()),
    }
}

/// Render the timer tab
pub fn render_timer_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let mode = app.session.mode();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style())
        .title(Span::styled(format!(" {} ", mode.label()), title_style()));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Mode chips
            Constraint::Length(5), // Title + clock + status
            Constraint::Length(3), // Progress gauge
            Constraint::Min(0),    // Details
        ])
        .split(inner);

    f.render_widget(
        Paragraph::new(mode_chips(mode)).alignment(Alignment::Center),
        chunks[0],
    );

    let clock_lines = vec![
        Line::styled(mode.title(), default_style().add_modifier(Modifier::BOLD)),
        Line::raw(""),
        Line::styled(format_clock(app.session.remaining_secs()), clock_style(mode)),
        Line::raw(""),
        status_line(app),
    ];
    f.render_widget(
        Paragraph::new(clock_lines).alignment(Alignment::Center),
        chunks[1],
    );

    let progress = app.session.progress(&app.settings.durations);
    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::NONE))
        .gauge_style(gauge_style(mode))
        .ratio(progress)
        .label(format!("{:.0}%", progress * 100.0));
    let gauge_area = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(15),
            Constraint::Percentage(70),
            Constraint::Percentage(15),
        ])
        .split(chunks[2])[1];
    f.render_widget(gauge, gauge_area);

    let today = Local::now().date_naive();
    let mut details = Vec::new();
    match app.tasks.active() {
        Some(task) => details.push(Line::from(vec![
            Span::raw("Working on: "),
            Span::styled(task.title.clone(), active_style()),
            Span::styled(format!("  ({} 🍅)", task.pomo_progress()), hint_style()),
        ])),
        None => details.push(Line::styled(
            "No active task · pick one on the Tasks tab",
            hint_style(),
        )),
    }
    details.push(Line::raw(format!(
        "Sessions today: {}",
        app.sessions_on(today)
    )));
    if let Some(noise) = app.now_playing() {
        details.push(Line::styled(
            format!("♪ {} · {:.0}%", noise.name(), app.settings.volume * 100.0),
            hint_style(),
        ));
    }
    f.render_widget(
        Paragraph::new(details).alignment(Alignment::Center),
        chunks[3],
    );
}
