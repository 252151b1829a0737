//! CLI command messaging system
//!
//! Consistent coloured status lines for the console: command feedback from
//! `main` and the banners of the headless dashboard.

const INFO_TAG: &str = "\x1b[1;33m[INFO]\x1b[0m";
const WARN_TAG: &str = "\x1b[1;91m[WARN]\x1b[0m";
const ERROR_TAG: &str = "\x1b[1;31m[ERROR]\x1b[0m";
const SUCCESS_TAG: &str = "\x1b[1;32m[SUCCESS]\x1b[0m";

fn tagged(tag: &str, title: &str, details: &str) -> String {
    if details.is_empty() {
        format!("{} {}", tag, title)
    } else {
        format!("{} {}\t {}", tag, title, details)
    }
}

pub fn format_info(title: &str, details: &str) -> String {
    tagged(INFO_TAG, title, details)
}

pub fn format_warn(title: &str, details: &str) -> String {
    tagged(WARN_TAG, title, details)
}

pub fn format_error(title: &str, details: Option<&str>) -> String {
    match details {
        Some(details) => format!("{} {}\n{} Details: {}", ERROR_TAG, title, ERROR_TAG, details),
        None => format!("{} {}", ERROR_TAG, title),
    }
}

pub fn format_success(title: &str, details: &str) -> String {
    tagged(SUCCESS_TAG, title, details)
}

/// Print CLI command info message
pub fn print_info(title: &str, details: &str) {
    println!("{}", format_info(title, details));
}

/// Print CLI command error
pub fn print_error(title: &str, details: Option<&str>) {
    println!("{}", format_error(title, details));
}

/// Macro for CLI info messages
#[macro_export]
macro_rules! print_cmd_info {
    ($title:expr, $($details:tt)*) => {
        $crate::cli_messages::print_info($title, &format!($($details)*))
    };
}

/// Macro for CLI errors
#[macro_export]
macro_rules! print_cmd_error {
    ($title:expr) => {
        $crate::cli_messages::print_error($title, None)
    };
    ($title:expr, $details:expr) => {
        $crate::cli_messages::print_error($title, Some($details))
    };
}
