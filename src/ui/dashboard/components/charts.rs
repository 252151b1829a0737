//! Dashboard chart components
//!
//! Renders the protocol distribution, packet rate and average size panels

use super::super::state::DashboardState;
use super::super::utils::{format_clock, series_color, truncate_label};
use crate::widgets::{BarChart, LineChart, PieChart};

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::symbols::Marker;
use ratatui::text::Line;
use ratatui::widgets::{
    Axis, Bar, BarChart as BarChartWidget, BarGroup, Block, BorderType, Borders, Chart, Dataset,
    Gauge, GraphType, Padding, Paragraph, Wrap,
};

/// Rounded panel shared by every chart.
pub fn panel_block(title: &str) -> Block<'_> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::horizontal(1))
}

/// Panel drawn in place of a widget the pass did not produce.
pub fn render_placeholder(f: &mut Frame, area: Rect, title: &str, text: &str) {
    let placeholder = Paragraph::new(Line::from(text.to_string()))
        .style(Style::default().fg(Color::DarkGray))
        .block(panel_block(title))
        .wrap(Wrap { trim: true });
    f.render_widget(placeholder, area);
}

/// Render the protocol distribution as one share gauge per protocol.
pub fn render_protocol_panel(f: &mut Frame, area: Rect, state: &DashboardState) {
    match state.pie() {
        Some(chart) => render_pie(f, area, chart),
        None => render_placeholder(f, area, "Protocol Distribution", "Waiting for packets..."),
    }
}

fn render_pie(f: &mut Frame, area: Rect, chart: &PieChart) {
    let block = panel_block(&chart.title);
    let inner = block.inner(area);
    f.render_widget(block, area);

    // One row per slice; slices that do not fit are dropped from the bottom
    let visible = (inner.height as usize).min(chart.slices.len());
    if visible == 0 {
        return;
    }
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Length(1); visible])
        .split(inner);

    let label_width = (inner.width / 3).max(4) as usize;
    for (i, (label, count)) in chart.slices.iter().take(visible).enumerate() {
        let percent = chart.percent(*count);
        let gauge = Gauge::default()
            .gauge_style(
                Style::default()
                    .fg(series_color(i))
                    .bg(Color::Black)
                    .add_modifier(Modifier::BOLD),
            )
            .ratio((percent / 100.0).clamp(0.0, 1.0))
            .label(format!(
                "{} {} ({:.1}%)",
                truncate_label(label, label_width),
                count,
                percent
            ));
        f.render_widget(gauge, rows[i]);
    }
}

/// Render packets per second as a line with point markers.
pub fn render_rate_panel(f: &mut Frame, area: Rect, state: &DashboardState) {
    match state.line() {
        Some(chart) if !chart.points.is_empty() => render_line(f, area, chart),
        _ => render_placeholder(f, area, "Packets per Second", "Waiting for packets..."),
    }
}

fn render_line(f: &mut Frame, area: Rect, chart: &LineChart) {
    let data: Vec<(f64, f64)> = chart
        .points
        .iter()
        .map(|(ts, count)| (ts.timestamp() as f64, *count as f64))
        .collect();

    let (first, last) = match (chart.points.first(), chart.points.last()) {
        (Some(first), Some(last)) => (first.0, last.0),
        _ => return,
    };
    let x_min = first.timestamp() as f64;
    let x_max = (last.timestamp() as f64).max(x_min + 1.0);
    let y_max = chart.points.iter().map(|(_, c)| *c).max().unwrap_or(0) as f64;
    let y_top = (y_max * 1.1).max(y_max + 1.0);

    // Braille gives the smoother curve; the scatter set marks each bucket
    let line_marker = if chart.smooth { Marker::Braille } else { Marker::Dot };
    let mut datasets = vec![
        Dataset::default()
            .name(chart.y_title.clone())
            .marker(line_marker)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::Cyan))
            .data(&data),
    ];
    if chart.markers {
        datasets.push(
            Dataset::default()
                .marker(Marker::Dot)
                .graph_type(GraphType::Scatter)
                .style(Style::default().fg(Color::LightYellow))
                .data(&data),
        );
    }

    let widget = Chart::new(datasets)
        .block(panel_block(&chart.title))
        .x_axis(
            Axis::default()
                .title("Time")
                .style(Style::default().fg(Color::Gray))
                .bounds([x_min, x_max])
                .labels(vec![format_clock(&first), format_clock(&last)]),
        )
        .y_axis(
            Axis::default()
                .title(chart.y_title.clone())
                .style(Style::default().fg(Color::Gray))
                .bounds([0.0, y_top])
                .labels(vec!["0".to_string(), format!("{}", y_max as u64)]),
        );
    f.render_widget(widget, area);
}

/// Render the average packet size per protocol as labelled bars.
pub fn render_size_panel(f: &mut Frame, area: Rect, state: &DashboardState) {
    match state.bar() {
        Some(chart) if !chart.bars.is_empty() => render_bars(f, area, chart),
        _ => render_placeholder(f, area, "Average Packet Size", "Waiting for packets..."),
    }
}

fn render_bars(f: &mut Frame, area: Rect, chart: &BarChart) {
    let block = panel_block(&chart.title);
    let inner_width = block.inner(area).width.max(1);

    // Split the width evenly, keeping roughly 30% of each slot as gap
    let slots = chart.bars.len() as u16;
    let slot = (inner_width / slots.max(1)).max(2);
    let bar_gap = (slot * 3 / 10).max(1);
    let bar_width = slot.saturating_sub(bar_gap).max(1);

    let bars: Vec<Bar> = chart
        .bars
        .iter()
        .enumerate()
        .map(|(i, bar)| {
            Bar::default()
                .value(bar.value.round().max(0.0) as u64)
                .text_value(bar.text.clone())
                .label(Line::from(truncate_label(&bar.label, bar_width as usize)))
                .style(Style::default().fg(series_color(i)))
                .value_style(
                    Style::default()
                        .fg(Color::Black)
                        .bg(series_color(i))
                        .add_modifier(Modifier::BOLD),
                )
        })
        .collect();

    let widget = BarChartWidget::default()
        .block(block.title_bottom(format!("{} / {}", chart.x_title, chart.y_title)))
        .bar_width(bar_width)
        .bar_gap(bar_gap)
        .data(BarGroup::default().bars(&bars));
    f.render_widget(widget, area);
}
