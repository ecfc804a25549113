//! Projects page: filterable list with a detail panel.

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use folio_content::{PROJECTS, Project, ProjectKind};
use folio_core::theme;

use crate::App;
use super::{centered, panel};

/// Which project kinds are listed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ProjectFilter {
    #[default]
    All,
    Dev,
    Design,
}

impl ProjectFilter {
    pub fn next(self) -> Self {
        match self {
            ProjectFilter::All => ProjectFilter::Dev,
            ProjectFilter::Dev => ProjectFilter::Design,
            ProjectFilter::Design => ProjectFilter::All,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            ProjectFilter::All => ProjectFilter::Design,
            ProjectFilter::Dev => ProjectFilter::All,
            ProjectFilter::Design => ProjectFilter::Dev,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ProjectFilter::All => "ALL",
            ProjectFilter::Dev => "DEV",
            ProjectFilter::Design => "DESIGN",
        }
    }

    fn matches(self, kind: ProjectKind) -> bool {
        match self {
            ProjectFilter::All => true,
            ProjectFilter::Dev => kind == ProjectKind::Dev,
            ProjectFilter::Design => kind == ProjectKind::Design,
        }
    }
}

/// Projects visible under the given filter, in catalog order.
pub fn filtered(filter: ProjectFilter) -> Vec<&'static Project> {
    PROJECTS.iter().filter(|p| filter.matches(p.kind)).collect()
}

pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let area = centered(area, 90, area.height);
    let chunks = Layout::vertical([Constraint::Length(1), Constraint::Fill(1)]).split(area);

    render_filter_tabs(app, frame, chunks[0]);

    let cols = Layout::horizontal([Constraint::Length(30), Constraint::Fill(1)]).split(chunks[1]);
    let projects = filtered(app.project_filter);
    let selected = app.project_index.min(projects.len().saturating_sub(1));

    let list: Vec<Line> = projects
        .iter()
        .enumerate()
        .map(|(i, project)| {
            let marker = if i == selected { "▸ " } else { "  " };
            let style = if i == selected {
                Style::new().fg(theme::BRIGHT).bold()
            } else {
                Style::new().fg(theme::TEXT)
            };
            Line::from(Span::styled(format!("{marker}{}", project.title), style))
        })
        .collect();
    frame.render_widget(Paragraph::new(list).block(panel("PROJECT_MATRIX")), cols[0]);

    if let Some(project) = projects.get(selected) {
        render_detail(project, frame, cols[1]);
    }
}

fn render_filter_tabs(app: &App, frame: &mut Frame, area: Rect) {
    let mut spans = vec![Span::styled("FILTER: ", Style::new().fg(theme::DIM))];
    for (i, filter) in [ProjectFilter::All, ProjectFilter::Dev, ProjectFilter::Design]
        .into_iter()
        .enumerate()
    {
        if i > 0 {
            spans.push(Span::styled(" / ", Style::new().fg(theme::DIM)));
        }
        let style = if filter == app.project_filter {
            Style::new().fg(theme::SURFACE).bg(theme::BRIGHT).bold()
        } else {
            Style::new().fg(theme::ACCENT)
        };
        spans.push(Span::styled(format!(" {} ", filter.label()), style));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_detail(project: &Project, frame: &mut Frame, area: Rect) {
    let kind = match project.kind {
        ProjectKind::Dev => "DEV",
        ProjectKind::Design => "DESIGN",
    };

    let mut lines = vec![
        Line::from(vec![
            Span::styled(project.title, Style::new().fg(theme::BRIGHT).bold()),
            Span::styled(format!("  [{kind}]"), Style::new().fg(theme::DIM)),
        ]),
        Line::default(),
        Line::from(Span::styled(project.description, Style::new().fg(theme::TEXT))),
        Line::default(),
    ];

    if !project.technologies.is_empty() {
        lines.push(Line::from(vec![
            Span::styled("STACK: ", Style::new().fg(theme::ACCENT)),
            Span::styled(project.technologies.join(" · "), Style::new().fg(theme::TEXT)),
        ]));
    }
    lines.push(Line::from(vec![
        Span::styled("LIVE:  ", Style::new().fg(theme::ACCENT)),
        Span::styled(project.live_url, Style::new().fg(theme::DIM)),
    ]));
    if let Some(github) = project.github_url {
        lines.push(Line::from(vec![
            Span::styled("REPO:  ", Style::new().fg(theme::ACCENT)),
            Span::styled(github, Style::new().fg(theme::DIM)),
        ]));
    }

    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(panel("PROJECT_DETAIL")),
        area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filters_partition_the_catalog() {
        let all = filtered(ProjectFilter::All).len();
        let dev = filtered(ProjectFilter::Dev).len();
        let design = filtered(ProjectFilter::Design).len();
        assert_eq!(all, PROJECTS.len());
        assert_eq!(dev + design, all);
        assert!(dev > 0 && design > 0);
    }

    #[test]
    fn filter_cycle_is_closed() {
        let mut filter = ProjectFilter::All;
        for _ in 0..3 {
            filter = filter.next();
        }
        assert_eq!(filter, ProjectFilter::All);
        assert_eq!(ProjectFilter::Dev.prev(), ProjectFilter::All);
    }
}
