//! Dashboard utility functions
//!
//! Contains helper functions used across dashboard components

use crate::session::NoticeLevel;
use chrono::{DateTime, Local, Utc};
use ratatui::prelude::Color;

/// Colors cycled through for pie slices and bars.
pub const SERIES_COLORS: [Color; 8] = [
    Color::Cyan,
    Color::LightRed,
    Color::LightGreen,
    Color::LightYellow,
    Color::LightMagenta,
    Color::LightBlue,
    Color::Red,
    Color::Green,
];

/// Get a ratatui color for a status banner
pub fn get_notice_color(level: NoticeLevel) -> Color {
    match level {
        NoticeLevel::Warning => Color::LightYellow,
        NoticeLevel::Error => Color::Red,
        NoticeLevel::Success => Color::LightGreen,
    }
}

pub fn series_color(index: usize) -> Color {
    SERIES_COLORS[index % SERIES_COLORS.len()]
}

/// Format a bucket time as local HH:MM:SS
pub fn format_clock(ts: &DateTime<Utc>) -> String {
    ts.with_timezone(&Local).format("%H:%M:%S").to_string()
}

/// Shorten a label to `max` characters, marking the cut with '…'
pub fn truncate_label(label: &str, max: usize) -> String {
    if label.chars().count() <= max {
        return label.to_string();
    }
    let keep = max.saturating_sub(1);
    let mut short: String = label.chars().take(keep).collect();
    short.push('…');
    short
}
