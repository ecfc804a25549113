//! Page rendering for the portfolio.

pub mod about;
pub mod contact;
pub mod home;
pub mod projects;
pub mod skills;
pub mod testimonials;

use ratatui::{
    Frame,
    layout::{Constraint, Flex, Layout, Rect},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Paragraph},
};

use folio_core::theme;

/// Bordered panel in the cyber style.
pub fn panel(title: &str) -> Block<'_> {
    let block = Block::bordered().border_style(Style::new().fg(theme::ACCENT));
    if title.is_empty() {
        block
    } else {
        block.title(Span::styled(
            format!(" {title} "),
            Style::new().fg(theme::TEXT).bold(),
        ))
    }
}

/// Center a fixed-size rect inside `area`, clamped to it.
pub fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let [area] = Layout::horizontal([Constraint::Length(width.min(area.width))])
        .flex(Flex::Center)
        .areas(area);
    let [area] = Layout::vertical([Constraint::Length(height.min(area.height))])
        .flex(Flex::Center)
        .areas(area);
    area
}

/// Render the boot log overlay shown before a page's content.
pub fn render_boot_log(revealed: &[String], frame: &mut Frame, area: Rect) {
    let height = revealed.len() as u16 + 2;
    let area = centered(area, 64, height.max(3));

    let lines: Vec<Line> = revealed
        .iter()
        .map(|message| {
            Line::from(vec![
                Span::styled("▸ ", Style::new().fg(theme::ACCENT)),
                Span::styled(message.clone(), Style::new().fg(theme::TEXT)),
            ])
        })
        .collect();

    let log = Paragraph::new(lines).block(panel("SYSTEM_BOOT"));
    frame.render_widget(log, area);
}
