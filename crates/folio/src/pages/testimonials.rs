//! Testimonials page: a rotating carousel of client feedback.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use folio_content::TESTIMONIALS;
use folio_core::theme;

use crate::App;
use super::{centered, panel};

/// Auto-advance cadence of the carousel.
pub const ROTATE_MS: u64 = 5000;

pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let area = centered(area, 70, 12.min(area.height));
    let selected = app.testimonial_index.min(TESTIMONIALS.len() - 1);
    let testimonial = &TESTIMONIALS[selected];

    let block = panel("CLIENT_FEEDBACK_MATRIX");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::vertical([
        Constraint::Length(1), // Rating
        Constraint::Length(1),
        Constraint::Fill(1),   // Quote
        Constraint::Length(1), // Attribution
        Constraint::Length(1), // Dots
    ])
    .split(inner);

    let stars = "★".repeat(testimonial.rating as usize);
    frame.render_widget(
        Paragraph::new(Span::styled(stars, Style::new().fg(theme::BRIGHT)))
            .alignment(Alignment::Center),
        chunks[0],
    );

    let quote = format!("\"{}\"", testimonial.message);
    frame.render_widget(
        Paragraph::new(Span::styled(quote, Style::new().fg(theme::TEXT)))
            .wrap(Wrap { trim: true })
            .alignment(Alignment::Center),
        chunks[2],
    );

    let attribution = Line::from(vec![
        Span::styled(testimonial.name, Style::new().fg(theme::BRIGHT).bold()),
        Span::styled(format!(" · {}", testimonial.role), Style::new().fg(theme::ACCENT)),
    ])
    .centered();
    frame.render_widget(Paragraph::new(attribution), chunks[3]);

    let dots: Vec<Span> = (0..TESTIMONIALS.len())
        .map(|i| {
            if i == selected {
                Span::styled("● ", Style::new().fg(theme::BRIGHT))
            } else {
                Span::styled("○ ", Style::new().fg(theme::DIM))
            }
        })
        .collect();
    frame.render_widget(
        Paragraph::new(Line::from(dots)).alignment(Alignment::Center),
        chunks[4],
    );
}
