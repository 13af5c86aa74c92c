use crate::app::AppState;
use crate::domain::{CompletionKind, TimerMode};
use crate::timer::Phase;
use crate::ui::{
    layout::create_modal_area,
    styles::{modal_bg_style, modal_title_style},
};
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Render the "switch mode while running" confirmation
pub fn render_switch_modal(f: &mut Frame, app: &AppState, area: Rect) {
    let Phase::PendingSwitch { target } = app.session.phase() else {
        return;
    };
    let modal_area = create_modal_area(area, 11);

    // Clear the area behind the modal
    f.render_widget(Clear, modal_area);

    let current = app.session.mode();
    let mut lines = vec![
        Line::raw(""),
        Line::raw(format!(
            "  The {} timer is still running.",
            current.name()
        )),
        Line::raw(format!("  Switch to {}?", target.name())),
        Line::raw(""),
    ];

    let finish = if current == TimerMode::Focus {
        " Finish now and count it"
    } else {
        " Finish now"
    };
    lines.push(Line::from(vec![
        Span::styled("  [f]", modal_title_style()),
        Span::raw(finish),
    ]));
    lines.push(Line::from(vec![
        Span::styled("  [a]", modal_title_style()),
        Span::raw(" Abandon this session"),
    ]));
    lines.push(Line::from(vec![
        Span::styled("  [Esc]", modal_title_style()),
        Span::raw(" Keep going"),
    ]));

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(Span::styled(" Switch Mode? ", modal_title_style()))
                .style(modal_bg_style()),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, modal_area);
}

/// Render the completion overlay
pub fn render_completion_modal(f: &mut Frame, app: &AppState, area: Rect) {
    let Some(kind) = app.session.completion_kind() else {
        return;
    };
    let modal_area = create_modal_area(area, 11);
    f.render_widget(Clear, modal_area);

    let (title, body) = kind.notification();
    let next = kind.next_mode();
    let mut lines = vec![Line::raw(""), Line::raw(body)];

    if let Some(affirmation) = app.affirmation {
        lines.push(Line::styled(affirmation, modal_title_style()));
    }
    lines.push(Line::raw(""));

    if app.settings.auto_start_after(kind) {
        lines.push(Line::raw(format!("{} starts in a moment…", next.name())));
    } else {
        lines.push(Line::from(vec![
            Span::styled("[Enter]", modal_title_style()),
            Span::raw(format!(" Start {}", next.name())),
        ]));
    }
    if kind == CompletionKind::FocusDone {
        lines.push(Line::from(vec![
            Span::styled("[l]", modal_title_style()),
            Span::raw(" Take a long break"),
        ]));
    }

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(Span::styled(format!(" {} ", title), modal_title_style()))
                .style(modal_bg_style()),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, modal_area);
}
