//! Contact page: channel list with copy indicators, and the message form.

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
};

use folio_content::profile;
use folio_core::theme;

use crate::App;
use crate::form::Field;
use super::{centered, panel};

pub fn render(app: &App, frame: &mut Frame, area: Rect, now_ms: u64) {
    let area = centered(area, 90, area.height);
    let cols =
        Layout::horizontal([Constraint::Length(42), Constraint::Fill(1)]).split(area);

    render_channels(app, frame, cols[0], now_ms);
    render_form(app, frame, cols[1]);
}

fn channel_line(label: &'static str, value: &'static str, copied: bool) -> Line<'static> {
    let mut spans = vec![
        Span::styled(format!("{label:<9}"), Style::new().fg(theme::ACCENT)),
        Span::styled(value, Style::new().fg(theme::TEXT)),
    ];
    if copied {
        spans.push(Span::styled(" ✓ copied", Style::new().fg(theme::BRIGHT).bold()));
    }
    Line::from(spans)
}

fn render_channels(app: &App, frame: &mut Frame, area: Rect, now_ms: u64) {
    let lines = vec![
        channel_line("EMAIL", profile::EMAIL, app.email_copied.is_copied(now_ms)),
        channel_line("PHONE", profile::PHONE, app.phone_copied.is_copied(now_ms)),
        Line::default(),
        channel_line("GITHUB", profile::GITHUB, false),
        channel_line("LINKEDIN", profile::LINKEDIN, false),
    ];
    frame.render_widget(
        Paragraph::new(lines).block(panel("COMM_CHANNELS")),
        area,
    );
}

fn render_form(app: &App, frame: &mut Frame, area: Rect) {
    let block = panel("TRANSMISSION_FORM");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::vertical([
        Constraint::Length(2), // Name
        Constraint::Length(2), // Email
        Constraint::Fill(1),   // Message
        Constraint::Length(1), // Status
    ])
    .split(inner);

    for (i, field) in [Field::Name, Field::Email, Field::Message].into_iter().enumerate() {
        render_field(app, field, frame, chunks[i]);
    }

    let status = app.form.status();
    let status = Line::from(vec![
        Span::styled("▸ ", Style::new().fg(theme::ACCENT)),
        Span::styled(status.label(), Style::new().fg(status.color()).bold()),
    ]);
    frame.render_widget(Paragraph::new(status), chunks[3]);
}

fn render_field(app: &App, field: Field, frame: &mut Frame, area: Rect) {
    let focused = app.form.focus == field;
    let marker = if focused { "▸ " } else { "  " };
    let label_style = if focused {
        Style::new().fg(theme::BRIGHT).bold()
    } else {
        Style::new().fg(theme::ACCENT)
    };

    let mut lines = vec![Line::from(Span::styled(
        format!("{marker}{}", field.label()),
        label_style,
    ))];

    let value = app.form.field(field);
    let cursor = focused && app.form.editing;
    for (i, row) in value.split('\n').enumerate() {
        let mut spans = vec![
            Span::raw("  "),
            Span::styled(row.to_string(), Style::new().fg(theme::TEXT)),
        ];
        // Cursor sits at the end of the last input line while editing.
        if cursor && i == value.split('\n').count() - 1 {
            spans.push(Span::styled("█", Style::new().fg(theme::BRIGHT)));
        }
        lines.push(Line::from(spans));
    }

    frame.render_widget(Paragraph::new(lines), area);
}
