//! Project table and detail card for the dashboard.

use super::Palette;
use crate::core::{ProjectMetrics, RiskLevel};
use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

/// Draw the project metrics table.
#[inline]
pub fn draw_project_table(
    frame: &mut Frame,
    area: Rect,
    projects: &[ProjectMetrics],
    selected: Option<usize>,
    palette: Palette,
) {
    // Header
    let header = Row::new(vec![
        "Project", "Util%", "Eff%", "Done%", "Risk%", "Budget", "Staff", "Equip",
    ])
    .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD));

    // Rows
    let rows = projects.iter().enumerate().map(|(idx, project)| {
        let is_selected = selected == Some(idx);
        let style = if is_selected {
            Style::default().bg(palette.selection_bg)
        } else {
            Style::default()
        };

        Row::new(vec![
            Cell::from(project.name.as_str()),
            Cell::from(format!("{:.1}", project.utilization)),
            Cell::from(format!("{:.1}", project.efficiency)),
            Cell::from(format!("{:.1}", project.completion)),
            Cell::from(format!("{:.1}", project.risk)).style(risk_color(project.risk_level())),
            Cell::from(format!("{:.0}", project.budget)),
            Cell::from(project.staff.to_string()),
            Cell::from(project.equipment.to_string()),
        ])
        .style(style)
    });

    let table = Table::new(
        rows,
        [
            Constraint::Percentage(28),
            Constraint::Length(7),
            Constraint::Length(7),
            Constraint::Length(7),
            Constraint::Length(7),
            Constraint::Length(9),
            Constraint::Length(6),
            Constraint::Length(6),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Projects ")
            .border_style(Style::default().fg(palette.border)),
    );

    frame.render_widget(table, area);
}

/// Draw the detail card for the selected project.
pub fn draw_project_detail(
    frame: &mut Frame,
    area: Rect,
    project: Option<&ProjectMetrics>,
    palette: Palette,
) {
    let lines = match project {
        Some(p) => vec![
            Line::from(format!("{} [{}]", p.name, p.status)),
            Line::from(""),
            Line::from(format!("Utilization  {:>6.1}%", p.utilization)),
            Line::from(format!("Efficiency   {:>6.1}%", p.efficiency)),
            Line::from(format!("Completion   {:>6.1}%", p.completion)),
            Line::styled(
                format!("Risk         {:>6.1}%", p.risk),
                risk_color(p.risk_level()),
            ),
            Line::from(""),
            Line::from(format!("Budget       {:>10.0}", p.budget)),
            Line::from(format!("Staff        {:>10}", p.staff)),
            Line::from(format!("Equipment    {:>10}", p.equipment)),
        ],
        None => vec![Line::from("Select a project with ↑↓ / Enter")],
    };

    let detail = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Detail ")
            .border_style(Style::default().fg(palette.border)),
    );

    frame.render_widget(detail, area);
}

/// Style for a risk band.
fn risk_color(level: RiskLevel) -> Style {
    match level {
        RiskLevel::High => Style::default().fg(Color::Red),
        RiskLevel::Elevated => Style::default().fg(Color::Yellow),
        RiskLevel::Low => Style::default().fg(Color::Green),
    }
}
