//! Dashboard top talkers component

use super::super::state::DashboardState;
use super::charts::{panel_block, render_placeholder};
use crate::consts::dashboard_consts::top_talkers;

use ratatui::Frame;
use ratatui::layout::{Constraint, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Row, Table};

/// Render the source address table, or a note when the table has no sources.
pub fn render_talkers_panel(f: &mut Frame, area: Rect, state: &DashboardState) {
    let Some(view) = state.table() else {
        let text = if state.dashboard.widgets().next().is_some() {
            "No source column in this capture"
        } else {
            "Waiting for packets..."
        };
        render_placeholder(f, area, top_talkers::TITLE, text);
        return;
    };

    let header = Row::new(view.header.iter().cloned()).style(
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    );

    let rows = view.rows.iter().enumerate().map(|(i, (address, count))| {
        let style = if i % 2 == 0 {
            Style::default().fg(Color::White)
        } else {
            Style::default().fg(Color::Gray)
        };
        Row::new(vec![address.clone(), count.to_string()]).style(style)
    });

    let table = Table::new(rows, [Constraint::Percentage(65), Constraint::Percentage(35)])
        .header(header)
        .block(panel_block(&view.title));
    f.render_widget(table, area);
}
