//! Home page: name banner, typed subtitle, command terminal, metrics.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
};

use folio_content::{COMMANDS, STATS, banner, profile};
use folio_core::theme;

use crate::App;
use super::{centered, panel};

/// Typing cadence of the subtitle, one character per tick.
const TYPE_MS: u64 = 100;

pub fn render(app: &App, frame: &mut Frame, area: Rect, now_ms: u64) {
    let area = centered(area, 84, area.height);
    let chunks = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(1), // Hire badge
        Constraint::Length(1),
        Constraint::Length(7), // Banner
        Constraint::Length(2), // Typed subtitle
        Constraint::Length(8), // Terminal + metrics
        Constraint::Fill(1),
    ])
    .split(area);

    let badge = Line::from(vec![
        Span::styled("[ ", Style::new().fg(theme::ACCENT)),
        Span::styled(profile::TAGLINE, Style::new().fg(theme::BRIGHT).bold()),
        Span::styled(" ]", Style::new().fg(theme::ACCENT)),
    ])
    .centered();
    frame.render_widget(Paragraph::new(badge), chunks[1]);

    let banner_lines: Vec<Line> = banner::build_name_banner()
        .into_iter()
        .map(|row| Line::from(row).style(Style::new().fg(theme::TEXT).bold()))
        .collect();
    frame.render_widget(
        Paragraph::new(banner_lines).alignment(Alignment::Center),
        chunks[3],
    );

    frame.render_widget(
        Paragraph::new(typed_subtitle(app, now_ms)).alignment(Alignment::Center),
        chunks[4],
    );

    let cols =
        Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)]).split(chunks[5]);
    render_terminal(app, frame, cols[0]);
    render_metrics(frame, cols[1]);
}

/// The subtitle revealed one character at a time after boot completes.
fn typed_subtitle(app: &App, now_ms: u64) -> Line<'static> {
    let title = profile::TITLE;
    let count = match app.typed_since_ms {
        Some(since) => {
            let typed = (now_ms.saturating_sub(since) / TYPE_MS) as usize + 1;
            typed.min(title.chars().count())
        }
        None => 0,
    };
    let typed: String = title.chars().take(count).collect();

    let mut spans = vec![Span::styled(typed, Style::new().fg(theme::BRIGHT))];
    if count < title.chars().count() {
        spans.push(Span::styled("█", Style::new().fg(theme::BRIGHT)));
    }
    Line::from(spans)
}

fn render_terminal(app: &App, frame: &mut Frame, area: Rect) {
    let mut lines = vec![Line::from(Span::styled(
        "Available commands:",
        Style::new().fg(theme::ACCENT),
    ))];
    for (i, command) in COMMANDS.iter().enumerate() {
        let text = format!("$ {} - {}", command.name, command.description);
        let style = if i == app.command_index {
            Style::new().fg(theme::SURFACE).bg(theme::ACCENT)
        } else {
            Style::new().fg(theme::TEXT)
        };
        lines.push(Line::from(Span::styled(text, style)));
    }
    frame.render_widget(Paragraph::new(lines).block(panel("TERMINAL")), area);
}

fn render_metrics(frame: &mut Frame, area: Rect) {
    let lines: Vec<Line> = STATS
        .iter()
        .map(|stat| {
            Line::from(vec![
                Span::styled(format!("{:>5}  ", stat.value), Style::new().fg(theme::BRIGHT).bold()),
                Span::styled(stat.label, Style::new().fg(theme::TEXT)),
            ])
        })
        .collect();
    frame.render_widget(
        Paragraph::new(lines).block(panel("PORTFOLIO_METRICS")),
        area,
    );
}
