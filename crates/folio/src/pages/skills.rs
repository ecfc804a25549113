//! Skills page: category tabs and proficiency bars.

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
};

use folio_content::SKILL_CATEGORIES;
use folio_core::theme;

use crate::App;
use super::{centered, panel};

/// Width of a proficiency bar, in cells.
const BAR_WIDTH: usize = 30;

pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let area = centered(area, 80, area.height);
    let cols = Layout::horizontal([Constraint::Length(24), Constraint::Fill(1)]).split(area);

    let categories: Vec<Line> = SKILL_CATEGORIES
        .iter()
        .enumerate()
        .map(|(i, category)| {
            let style = if i == app.category_index {
                Style::new().fg(theme::SURFACE).bg(theme::ACCENT).bold()
            } else {
                Style::new().fg(theme::TEXT)
            };
            Line::from(Span::styled(format!(" {} ", category.title), style))
        })
        .collect();
    frame.render_widget(
        Paragraph::new(categories).block(panel("CATEGORIES")),
        cols[0],
    );

    let category = &SKILL_CATEGORIES[app.category_index.min(SKILL_CATEGORIES.len() - 1)];
    let mut lines = Vec::with_capacity(category.skills.len() * 2);
    for skill in category.skills {
        lines.push(Line::from(Span::styled(
            skill.name,
            Style::new().fg(theme::TEXT),
        )));
        lines.push(proficiency_bar(skill.proficiency));
    }
    frame.render_widget(
        Paragraph::new(lines).block(panel("SKILL_MATRIX")),
        cols[1],
    );
}

fn proficiency_bar(proficiency: u8) -> Line<'static> {
    let filled = proficiency as usize * BAR_WIDTH / 100;
    Line::from(vec![
        Span::styled("█".repeat(filled), Style::new().fg(theme::BRIGHT)),
        Span::styled("░".repeat(BAR_WIDTH - filled), Style::new().fg(theme::DIM)),
        Span::styled(format!(" {proficiency}%"), Style::new().fg(theme::ACCENT)),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bar_fill_scales_with_proficiency() {
        let full = proficiency_bar(100);
        assert_eq!(full.spans[0].content.chars().count(), BAR_WIDTH);
        assert!(full.spans[1].content.is_empty());

        let half = proficiency_bar(50);
        assert_eq!(half.spans[0].content.chars().count(), BAR_WIDTH / 2);
    }
}
