//! Main application state and UI loop
//!
//! Contains the App struct and main UI event handling logic

use crate::consts::dashboard_consts::ui::poll_interval;
use crate::renderer::render;
use crate::session::Dashboard;
use crate::table::{InputFormat, load_table};
use crate::ui::dashboard::{DashboardState, render_dashboard};
use crossterm::event::{self, Event, KeyCode};
use ratatui::{Terminal, backend::Backend};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

/// UI configuration data grouped by concern
#[derive(Debug, Clone)]
pub struct UIConfig {
    pub with_background_color: bool,
    /// Reload the input on this interval; `None` means manual reload only.
    pub refresh_interval: Option<Duration>,
}

impl UIConfig {
    pub fn new(with_background_color: bool, refresh_interval: Option<Duration>) -> Self {
        Self {
            with_background_color,
            refresh_interval,
        }
    }
}

/// Application state
#[derive(Debug)]
pub struct App {
    /// Packet table file shown by the dashboard.
    input: PathBuf,

    /// Explicit input format, otherwise guessed from the extension.
    format: Option<InputFormat>,

    ui_config: UIConfig,

    /// The latest rendering pass.
    state: DashboardState,

    /// When the input was last loaded.
    last_reload: Instant,
}

impl App {
    /// Creates the application and performs the first rendering pass.
    pub fn new(input: PathBuf, format: Option<InputFormat>, ui_config: UIConfig) -> Self {
        let state = Self::render_pass(&input, format, &ui_config);
        Self {
            input,
            format,
            ui_config,
            state,
            last_reload: Instant::now(),
        }
    }

    pub fn state(&self) -> &DashboardState {
        &self.state
    }

    /// Loads the input again and replaces the dashboard with a fresh pass.
    pub fn reload(&mut self) {
        self.state = Self::render_pass(&self.input, self.format, &self.ui_config);
        self.last_reload = Instant::now();
    }

    fn refresh_due(&self) -> bool {
        self.ui_config
            .refresh_interval
            .is_some_and(|interval| self.last_reload.elapsed() >= interval)
    }

    fn render_pass(
        input: &Path,
        format: Option<InputFormat>,
        ui_config: &UIConfig,
    ) -> DashboardState {
        let mut dashboard = Dashboard::new();
        let (failure, packet_count) = match load_table(input, format) {
            Ok(mut table) => match render(&mut table, &mut dashboard) {
                Ok(()) => (None, table.len()),
                Err(e) => (Some(e.to_string()), table.len()),
            },
            Err(e) => (Some(format!("Failed to load {}: {}", input.display(), e)), 0),
        };
        DashboardState::new(input, dashboard, failure, packet_count, ui_config)
    }
}

/// Runs the application UI in a loop, handling events and rendering the dashboard.
pub fn run<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> std::io::Result<()> {
    loop {
        if app.refresh_due() {
            app.reload();
        }

        terminal.draw(|f| render_dashboard(f, app.state()))?;

        // Poll for key events
        if event::poll(poll_interval())? {
            if let Event::Key(key) = event::read()? {
                // Skip events that are not KeyEventKind::Press
                if key.kind == event::KeyEventKind::Release {
                    continue;
                }

                match key.code {
                    KeyCode::Esc | KeyCode::Char('q') => return Ok(()),
                    KeyCode::Char('r') | KeyCode::Char('R') => app.reload(),
                    _ => {}
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::NoticeLevel;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_reload_picks_up_new_rows() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("capture.csv");
        fs::write(&path, "timestamp,protocol,size\n").unwrap();

        let mut app = App::new(path.clone(), None, UIConfig::new(false, None));
        assert_eq!(
            app.state().banner().map(|(level, _)| level),
            Some(NoticeLevel::Warning)
        );

        fs::write(&path, "timestamp,protocol,size\n0,TCP,10\n1,UDP,20\n").unwrap();
        app.reload();
        assert_eq!(app.state().packet_count, 2);
        assert_eq!(
            app.state().banner().map(|(level, _)| level),
            Some(NoticeLevel::Success)
        );
    }

    #[test]
    fn test_load_failure_becomes_banner() {
        let dir = tempdir().unwrap();
        let app = App::new(dir.path().join("missing.csv"), None, UIConfig::new(false, None));
        let (level, text) = app.state().banner().unwrap();
        assert_eq!(level, NoticeLevel::Error);
        assert!(text.starts_with("Failed to load"));
    }

    #[test]
    fn test_render_error_becomes_banner() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("capture.csv");
        fs::write(&path, "timestamp,protocol\n0,TCP\n").unwrap();

        let app = App::new(path, Some(InputFormat::Csv), UIConfig::new(false, None));
        let (level, text) = app.state().banner().unwrap();
        assert_eq!(level, NoticeLevel::Error);
        assert!(text.contains("column 'size' not found"));
        // Widgets drawn before the failure stay visible
        assert!(app.state().pie().is_some());
    }

    #[test]
    fn test_refresh_due_only_with_interval() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("capture.csv");
        fs::write(&path, "timestamp,protocol,size\n").unwrap();

        let manual = App::new(path.clone(), None, UIConfig::new(false, None));
        assert!(!manual.refresh_due());

        let auto = App::new(path, None, UIConfig::new(false, Some(Duration::ZERO)));
        assert!(auto.refresh_due());
    }
}
