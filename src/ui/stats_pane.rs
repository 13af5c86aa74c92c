use crate::app::AppState;
use crate::domain::stats::{chart_scale, daily_tip, format_minutes, last_seven_days, DayBar};
use crate::ui::layout::split_columns;
use crate::ui::styles::{active_style, border_style, default_style, hint_style, title_style};
use chrono::{Local, NaiveDate};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph, Wrap},
    Frame,
};

fn bar(day: &DayBar) -> Bar<'static> {
    let color = if day.is_today {
        Color::Green
    } else {
        Color::Gray
    };
    Bar::default()
        .value(u64::from(day.minutes))
        .label(Line::raw(day.day.clone()))
        .text_value(day.minutes.to_string())
        .style(Style::default().fg(color))
}

/// Render the stats tab
pub fn render_stats_pane(f: &mut Frame, app: &AppState, area: Rect) {
    render_stats_at(f, app, area, Local::now().date_naive());
}

fn render_stats_at(f: &mut Frame, app: &AppState, area: Rect, today: NaiveDate) {
    let (summary_area, chart_area) = split_columns(area, 35);
    let summary = app.summary();

    let summary_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(10), Constraint::Min(0)])
        .split(summary_area);

    let lines = vec![
        Line::raw(""),
        Line::from(vec![
            Span::raw(" Total focus:   "),
            Span::styled(format_minutes(summary.total_minutes), active_style()),
        ]),
        Line::from(vec![
            Span::raw(" Sessions:      "),
            Span::styled(summary.total_sessions.to_string(), active_style()),
        ]),
        Line::from(vec![
            Span::raw(" Day streak:    "),
            Span::styled(format!("{} 🔥", app.streak(today)), active_style()),
        ]),
        Line::from(vec![
            Span::raw(" Today:         "),
            Span::styled(
                format!("{} sessions", app.sessions_on(today)),
                default_style(),
            ),
        ]),
    ];
    let totals = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style())
            .title(Span::styled(" Progress ", title_style())),
    );
    f.render_widget(totals, summary_chunks[0]);

    let tip = Paragraph::new(Line::styled(daily_tip(today), hint_style()))
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style())
                .title(Span::styled(" Tip of the day ", title_style())),
        );
    f.render_widget(tip, summary_chunks[1]);

    let days = last_seven_days(&app.stats, today);
    let (max, axis) = chart_scale(&days);
    let bars: Vec<Bar> = days.iter().map(bar).collect();
    let axis_label = axis
        .iter()
        .map(|m| format!("{}m", m))
        .collect::<Vec<_>>()
        .join(" · ");

    let chart = BarChart::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style())
                .title(Span::styled(" Last 7 days (minutes) ", title_style()))
                .title_bottom(Line::styled(format!(" {} ", axis_label), hint_style())),
        )
        .data(BarGroup::default().bars(&bars))
        .bar_width(5)
        .bar_gap(2)
        .max(u64::from(max));
    f.render_widget(chart, chart_area);
}
