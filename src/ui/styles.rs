use crate::domain::{TaskTag, TimerMode};
use ratatui::style::{Color, Modifier, Style};

/// Default text style
pub fn default_style() -> Style {
    Style::default().fg(Color::White)
}

/// Selected row highlight style
pub fn selected_style() -> Style {
    Style::default()
        .fg(Color::Black)
        .bg(Color::LightGreen)
        .add_modifier(Modifier::BOLD)
}

/// Accent colour for each timer mode
pub fn mode_color(mode: TimerMode) -> Color {
    match mode {
        TimerMode::Focus => Color::Green,
        TimerMode::ShortBreak => Color::LightBlue,
        TimerMode::LongBreak => Color::Magenta,
    }
}

/// Big clock digits
pub fn clock_style(mode: TimerMode) -> Style {
    Style::default()
        .fg(mode_color(mode))
        .add_modifier(Modifier::BOLD)
}

/// Paused indicator style
pub fn paused_style() -> Style {
    Style::default().fg(Color::Yellow)
}

/// Over-estimate warning style
pub fn over_estimate_style() -> Style {
    Style::default()
        .fg(Color::Red)
        .add_modifier(Modifier::BOLD)
}

/// Title style for panes
pub fn title_style() -> Style {
    Style::default()
        .fg(Color::Green)
        .add_modifier(Modifier::BOLD)
}

/// Border style
pub fn border_style() -> Style {
    Style::default().fg(Color::Gray)
}

/// Modal background style
pub fn modal_bg_style() -> Style {
    Style::default().bg(Color::DarkGray).fg(Color::White)
}

/// Modal title style
pub fn modal_title_style() -> Style {
    Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD)
}

/// Keybinding hint style
pub fn hint_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

/// Gauge style, tinted by mode
pub fn gauge_style(mode: TimerMode) -> Style {
    Style::default().fg(mode_color(mode)).bg(Color::DarkGray)
}

/// Done/completed task style
pub fn done_style() -> Style {
    Style::default()
        .fg(Color::DarkGray)
        .add_modifier(Modifier::CROSSED_OUT)
}

/// Active task marker style
pub fn active_style() -> Style {
    Style::default()
        .fg(Color::Green)
        .add_modifier(Modifier::BOLD)
}

/// Tag badge style
pub fn tag_style(tag: TaskTag) -> Style {
    let color = match tag {
        TaskTag::Work => Color::Blue,
        TaskTag::Study => Color::Cyan,
        TaskTag::Personal => Color::Magenta,
        TaskTag::Creative => Color::Yellow,
    };
    Style::default().fg(color)
}
