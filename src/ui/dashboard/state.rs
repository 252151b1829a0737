//! Dashboard state management
//!
//! Holds the latest rendering pass and what the header needs to describe it.

use crate::session::{Dashboard, NoticeLevel};
use crate::ui::app::UIConfig;
use crate::widgets::{BarChart, LineChart, PieChart, TableView, Widget};

use chrono::{DateTime, Local};
use std::path::{Path, PathBuf};

/// Snapshot of one rendering pass.
#[derive(Debug, Clone)]
pub struct DashboardState {
    /// File the table was loaded from.
    pub input: PathBuf,
    /// Items emitted by the renderer.
    pub dashboard: Dashboard,
    /// Load or render failure of this pass, if any.
    pub failure: Option<String>,
    /// Rows left after timestamp normalization.
    pub packet_count: usize,
    /// When this pass was produced.
    pub updated_at: DateTime<Local>,
    /// Whether to enable background colors
    pub with_background_color: bool,
    /// Automatic reload interval, shown in the footer.
    pub refresh_secs: Option<u64>,
}

impl DashboardState {
    /// Creates a new instance of the dashboard state.
    pub fn new(
        input: &Path,
        dashboard: Dashboard,
        failure: Option<String>,
        packet_count: usize,
        ui_config: &UIConfig,
    ) -> Self {
        Self {
            input: input.to_path_buf(),
            dashboard,
            failure,
            packet_count,
            updated_at: Local::now(),
            with_background_color: ui_config.with_background_color,
            refresh_secs: ui_config.refresh_interval.map(|d| d.as_secs()),
        }
    }

    /// Status banner: a failure wins over the last notice of the pass.
    pub fn banner(&self) -> Option<(NoticeLevel, &str)> {
        if let Some(failure) = &self.failure {
            return Some((NoticeLevel::Error, failure.as_str()));
        }
        self.dashboard
            .last_notice()
            .map(|notice| (notice.level, notice.text.as_str()))
    }

    pub fn pie(&self) -> Option<&PieChart> {
        self.dashboard.widgets().find_map(|w| match w {
            Widget::Pie(chart) => Some(chart),
            _ => None,
        })
    }

    pub fn line(&self) -> Option<&LineChart> {
        self.dashboard.widgets().find_map(|w| match w {
            Widget::Line(chart) => Some(chart),
            _ => None,
        })
    }

    pub fn bar(&self) -> Option<&BarChart> {
        self.dashboard.widgets().find_map(|w| match w {
            Widget::Bar(chart) => Some(chart),
            _ => None,
        })
    }

    pub fn table(&self) -> Option<&TableView> {
        self.dashboard.widgets().find_map(|w| match w {
            Widget::Table(table) => Some(table),
            _ => None,
        })
    }
}
