//! Widget descriptions handed to a dashboard session.
//!
//! These carry data and presentation hints only; drawing is up to the session.

use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq)]
pub enum Widget {
    Pie(PieChart),
    Line(LineChart),
    Bar(BarChart),
    Table(TableView),
}

impl Widget {
    pub fn title(&self) -> &str {
        match self {
            Widget::Pie(chart) => &chart.title,
            Widget::Line(chart) => &chart.title,
            Widget::Bar(chart) => &chart.title,
            Widget::Table(table) => &table.title,
        }
    }
}

/// Proportion chart: each slice's share is its value over the total.
#[derive(Debug, Clone, PartialEq)]
pub struct PieChart {
    pub title: String,
    pub slices: Vec<(String, u64)>,
}

impl PieChart {
    pub fn total(&self) -> u64 {
        self.slices.iter().map(|(_, v)| v).sum()
    }

    /// Share of a slice in percent.
    pub fn percent(&self, value: u64) -> f64 {
        match self.total() {
            0 => 0.0,
            total => value as f64 * 100.0 / total as f64,
        }
    }
}

/// Time series, ordered by time.
#[derive(Debug, Clone, PartialEq)]
pub struct LineChart {
    pub title: String,
    pub y_title: String,
    pub points: Vec<(DateTime<Utc>, u64)>,
    /// Draw an interpolated (spline) curve rather than straight segments.
    pub smooth: bool,
    /// Mark every data point.
    pub markers: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub label: String,
    pub value: f64,
    /// Text drawn on or above the bar.
    pub text: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BarChart {
    pub title: String,
    pub x_title: String,
    pub y_title: String,
    pub bars: Vec<Bar>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TableView {
    pub title: String,
    pub header: [String; 2],
    pub rows: Vec<(String, u64)>,
}
