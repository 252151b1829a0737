//! Headless mode execution

use super::ConsoleSession;
use super::messages::{print_session_exit_success, print_session_starting};
use crate::renderer::render;
use crate::table::{InputFormat, load_table};
use std::error::Error;
use std::io;
use std::path::Path;

/// Runs a single rendering pass and prints it to stdout
///
/// # Arguments
/// * `input` - Packet table file
/// * `format` - Explicit input format, otherwise guessed from the extension
///
/// # Returns
/// * `Ok(())` - The dashboard was printed, including empty-table and
///   timestamp-failure notices
/// * `Err` - The file could not be loaded or the table is malformed
pub fn run_headless_mode(input: &Path, format: Option<InputFormat>) -> Result<(), Box<dyn Error>> {
    print_session_starting("headless", input);

    let mut table = load_table(input, format)?;

    let stdout = io::stdout();
    let mut session = ConsoleSession::new(stdout.lock());
    let result = render(&mut table, &mut session);
    drop(session.finish()?);
    result?;

    print_session_exit_success();
    Ok(())
}
