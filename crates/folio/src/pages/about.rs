//! About page: identity, journey, executed programs, future protocols.

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use folio_content::{EXECUTED_PROGRAMS, profile};
use folio_core::theme;

use super::{centered, panel};

pub fn render(frame: &mut Frame, area: Rect) {
    let area = centered(area, 80, area.height);
    let chunks = Layout::vertical([
        Constraint::Length(6), // Identity
        Constraint::Length(4), // Journey
        Constraint::Length(5), // Executed programs
        Constraint::Length(4), // Future protocols
        Constraint::Length(1), // Status line
        Constraint::Fill(1),
    ])
    .split(area);

    let identity = vec![
        Line::from(Span::styled(profile::BIO, Style::new().fg(theme::TEXT))),
        Line::default(),
        Line::from(vec![
            Span::styled("01", Style::new().fg(theme::BRIGHT).bold()),
            Span::styled(" Years of Experience   ", Style::new().fg(theme::ACCENT)),
            Span::styled("15+", Style::new().fg(theme::BRIGHT).bold()),
            Span::styled(" Projects   ", Style::new().fg(theme::ACCENT)),
            Span::styled("100%", Style::new().fg(theme::BRIGHT).bold()),
            Span::styled(" Client Satisfaction   ", Style::new().fg(theme::ACCENT)),
            Span::styled("24/7", Style::new().fg(theme::BRIGHT).bold()),
            Span::styled(" Support", Style::new().fg(theme::ACCENT)),
        ]),
    ];
    frame.render_widget(
        Paragraph::new(identity)
            .wrap(Wrap { trim: true })
            .block(panel("SYSTEM.IDENTITY")),
        chunks[0],
    );

    frame.render_widget(
        Paragraph::new(Span::styled(profile::JOURNEY, Style::new().fg(theme::TEXT)))
            .wrap(Wrap { trim: true })
            .block(panel("INITIALIZATION_SEQUENCE")),
        chunks[1],
    );

    let programs: Vec<Line> = EXECUTED_PROGRAMS
        .iter()
        .map(|program| {
            Line::from(vec![
                Span::styled("▸ ", Style::new().fg(theme::ACCENT)),
                Span::styled(program.name, Style::new().fg(theme::BRIGHT).bold()),
                Span::styled(format!(" · {}", program.summary), Style::new().fg(theme::TEXT)),
            ])
        })
        .collect();
    frame.render_widget(
        Paragraph::new(programs).block(panel("EXECUTED_PROGRAMS")),
        chunks[2],
    );

    frame.render_widget(
        Paragraph::new(Span::styled(profile::VISION, Style::new().fg(theme::TEXT)))
            .wrap(Wrap { trim: true })
            .block(panel("FUTURE_PROTOCOLS")),
        chunks[3],
    );

    let status = Line::from(vec![
        Span::styled("● ", Style::new().fg(theme::BRIGHT)),
        Span::styled("SYSTEM.STATUS: OPERATIONAL", Style::new().fg(theme::ACCENT)),
    ]);
    frame.render_widget(Paragraph::new(status), chunks[4]);
}
