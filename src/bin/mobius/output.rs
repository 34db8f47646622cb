//! Result printing shared by the commands.

use serde::Serialize;

use crate::OutputFormat;

/// Prints `value` as pretty JSON when JSON output is selected.
///
/// Text output is written by each command itself.
pub fn print<T: Serialize>(value: &T, format: OutputFormat, quiet: bool) {
    if quiet {
        return;
    }
    if let OutputFormat::Json = format {
        match serde_json::to_string_pretty(value) {
            Ok(json) => println!("{json}"),
            Err(e) => eprintln!("Error: failed to serialize output: {e}"),
        }
    }
}
