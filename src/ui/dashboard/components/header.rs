//! Dashboard header component
//!
//! Renders the title and the status banner of the last rendering pass

use super::super::state::DashboardState;
use super::super::utils::get_notice_color;
use crate::consts::dashboard_consts::DASHBOARD_HEADING;

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// Render header with title and status banner.
pub fn render_header(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let header_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Length(2)])
        .split(area);

    let heading = state.dashboard.heading_text().unwrap_or(DASHBOARD_HEADING);
    let title_text = format!(
        "{} v{}",
        heading.to_uppercase(),
        env!("CARGO_PKG_VERSION")
    );

    let title = Paragraph::new(title_text)
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_type(BorderType::Thick),
        );
    f.render_widget(title, header_chunks[0]);

    let mut spans = vec![Span::styled(
        format!(
            "{} | {} packets | {} ",
            state.input.display(),
            state.packet_count,
            state.updated_at.format("%H:%M:%S")
        ),
        Style::default().fg(Color::DarkGray),
    )];
    if let Some((level, text)) = state.banner() {
        spans.push(Span::styled(
            format!("[{}] {}", level.to_string().to_uppercase(), text),
            Style::default()
                .fg(get_notice_color(level))
                .add_modifier(Modifier::BOLD),
        ));
    }

    let banner = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
    f.render_widget(banner, header_chunks[1]);
}
