mod aggregate;
mod cli_messages;
mod config;
mod consts;
mod logging;
mod renderer;
mod session;
mod table;
mod ui;
mod widgets;

use crate::config::{Config, get_config_path};
use crate::session::{run_headless_mode, run_tui_mode};
use crate::table::InputFormat;
use clap::{Parser, Subcommand};
use std::error::Error;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
/// Dashboard of captured network packet summaries
struct Args {
    /// Command to execute
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render the dashboard for a packet table
    Render {
        /// CSV or JSON file with timestamp, protocol, size and optional source columns
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Input format; guessed from the file extension when omitted
        #[arg(long, value_enum)]
        format: Option<InputFormat>,

        /// Print the dashboard to stdout instead of opening the terminal UI
        #[arg(long, default_value_t = false, conflicts_with_all = ["with_background", "config"])]
        headless: bool,

        /// Enable background colors in the terminal UI (not with --headless)
        #[arg(long = "with-background", action = clap::ArgAction::SetTrue)]
        with_background: bool,

        /// Terminal UI configuration file instead of ~/.packet-dashboard/config.json
        #[arg(long, value_name = "PATH")]
        config: Option<PathBuf>,
    },
    /// Write a configuration file with the given settings
    InitConfig {
        /// Reload interval of the terminal UI in seconds (0 disables)
        #[arg(long, default_value_t = 0)]
        refresh_interval_secs: u64,

        /// Enable background colors in the terminal UI
        #[arg(long = "with-background", action = clap::ArgAction::SetTrue)]
        with_background: bool,

        /// Where to write the file instead of ~/.packet-dashboard/config.json
        #[arg(long, value_name = "PATH")]
        config: Option<PathBuf>,
    },
}

fn resolve_config_path(config: Option<PathBuf>) -> Result<PathBuf, std::io::Error> {
    match config {
        Some(path) => Ok(path),
        None => get_config_path(),
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    match args.command {
        Command::Render {
            input,
            format,
            headless,
            with_background,
            config,
        } => {
            if headless {
                if let Err(e) = logging::init_stderr_logger() {
                    eprintln!("Failed to initialize logging: {}", e);
                }
                return run_headless_mode(&input, format).inspect_err(|e| {
                    crate::print_cmd_error!("Failed to render dashboard", e.to_string().as_str());
                });
            }

            let config_path = resolve_config_path(config)?;
            let config = Config::load_or_default(&config_path).map_err(|e| {
                format!(
                    "Failed to load config {}: {}",
                    config_path.display(),
                    e
                )
            })?;
            run_tui_mode(input, format, config.ui_config(with_background))
        }
        Command::InitConfig {
            refresh_interval_secs,
            with_background,
            config,
        } => {
            let config_path = resolve_config_path(config)?;
            let config = Config {
                with_background_color: with_background,
                refresh_interval_secs,
            };
            config
                .save(&config_path)
                .map_err(|e| format!("Failed to save config: {}", e))?;
            crate::print_cmd_info!("Configuration saved", "{}", config_path.display());
            Ok(())
        }
    }
}
