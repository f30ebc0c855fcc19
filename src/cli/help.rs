//! Usage and error display for CLI.

#![allow(clippy::print_stderr)]

use std::error::Error as _;

use crate::Error;

/// Render the usage text.
#[must_use]
pub fn usage_text() -> String {
    super::args::command().render_help().to_string()
}

/// Print an optional one-line message followed by usage, to stderr.
pub fn print_usage(message: Option<&str>) {
    if let Some(message) = message.filter(|m| !m.is_empty()) {
        eprintln!("{message}");
        eprintln!();
    }
    eprint!("{}", usage_text());
}

/// Report a failed run on stderr.
///
/// Argument and preflight errors get a one-line diagnostic plus usage;
/// a bare usage request gets usage only; a failing external tool gets
/// nothing, since the tool already printed its own diagnostics.
pub fn report_error(error: &Error) {
    match error {
        Error::UsageRequested => print_usage(None),
        Error::ToolFailed { .. } => {}
        e if e.shows_usage() => print_usage(Some(&e.to_string())),
        e => {
            eprintln!("error: {e}");
            let mut source = e.source();
            while let Some(cause) = source {
                eprintln!("  caused by: {cause}");
                source = cause.source();
            }
        }
    }
}
