//! Logging setup for headless mode.
//!
//! The terminal UI installs no logger so nothing writes over the alternate
//! screen.

use env_logger::{Builder, Env, Target};
use log::SetLoggerError;

/// Threshold used when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "info";

fn stderr_builder(env: Env<'_>) -> Builder {
    let mut builder = Builder::from_env(env);
    builder.target(Target::Stderr);
    builder
}

/// Installs a stderr logger filtered by `RUST_LOG` (default `info`), keeping
/// stdout for the dashboard itself.
pub fn init_stderr_logger() -> Result<(), SetLoggerError> {
    stderr_builder(Env::default().default_filter_or(DEFAULT_FILTER)).try_init()
}
