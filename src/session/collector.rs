//! In-memory session used by the terminal UI.

use super::{DashboardItem, DashboardSession, Notice, NoticeLevel};
use crate::widgets::Widget;

/// Every item of one rendering pass, in order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dashboard {
    items: Vec<DashboardItem>,
}

impl Dashboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn heading_text(&self) -> Option<&str> {
        self.items.iter().find_map(|item| match item {
            DashboardItem::Heading(text) => Some(text.as_str()),
            _ => None,
        })
    }

    pub fn widgets(&self) -> impl Iterator<Item = &Widget> {
        self.items.iter().filter_map(|item| match item {
            DashboardItem::Widget(widget) => Some(widget),
            _ => None,
        })
    }

    pub fn notices(&self) -> impl Iterator<Item = &Notice> {
        self.items.iter().filter_map(|item| match item {
            DashboardItem::Notice(notice) => Some(notice),
            _ => None,
        })
    }

    /// The most recent status banner, if any.
    pub fn last_notice(&self) -> Option<&Notice> {
        self.notices().last()
    }

    fn notice(&mut self, level: NoticeLevel, text: &str) {
        self.items.push(DashboardItem::Notice(Notice {
            level,
            text: text.to_string(),
        }));
    }
}

impl DashboardSession for Dashboard {
    fn heading(&mut self, text: &str) {
        self.items.push(DashboardItem::Heading(text.to_string()));
    }

    fn subheader(&mut self, text: &str) {
        self.items.push(DashboardItem::Subheader(text.to_string()));
    }

    fn warning(&mut self, text: &str) {
        self.notice(NoticeLevel::Warning, text);
    }

    fn error(&mut self, text: &str) {
        self.notice(NoticeLevel::Error, text);
    }

    fn success(&mut self, text: &str) {
        self.notice(NoticeLevel::Success, text);
    }

    fn widget(&mut self, widget: Widget) {
        self.items.push(DashboardItem::Widget(widget));
    }
}
