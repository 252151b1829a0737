//! Dashboard sessions
//!
//! A session is the surface the renderer draws into. `Dashboard` keeps every
//! item for the terminal UI, `ConsoleSession` prints them as they arrive.

pub mod collector;
pub mod console;
pub mod headless_mode;
pub mod messages;
pub mod tui_mode;

pub use collector::Dashboard;
pub use console::ConsoleSession;
pub use headless_mode::run_headless_mode;
pub use tui_mode::run_tui_mode;

use crate::widgets::Widget;

/// Severity of a status banner.
#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum NoticeLevel {
    Warning,
    Error,
    Success,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub text: String,
}

/// One entry emitted to a session, in emission order.
#[derive(Debug, Clone, PartialEq)]
pub enum DashboardItem {
    Heading(String),
    Subheader(String),
    Notice(Notice),
    Widget(Widget),
}

/// Host surface receiving the dashboard output.
#[cfg_attr(test, mockall::automock)]
pub trait DashboardSession {
    fn heading(&mut self, text: &str);
    fn subheader(&mut self, text: &str);
    fn warning(&mut self, text: &str);
    fn error(&mut self, text: &str);
    fn success(&mut self, text: &str);
    fn widget(&mut self, widget: Widget);
}
