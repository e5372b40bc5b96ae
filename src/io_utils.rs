use std::fmt;
use std::io;
use std::path::Path;

use crate::WortError;

#[derive(Debug)]
pub struct CliError {
    pub msg: String,
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.msg.fmt(f)
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}

/// Format a user friendly I/O error message with suggestions.
pub fn format_io_error(operation: &str, path: &Path, err: &io::Error) -> String {
    use io::ErrorKind::*;
    let suggestion = match err.kind() {
        NotFound => "Check that the file exists or pass --words <path>.",
        PermissionDenied => "Check the file permissions.",
        InvalidData => "The file must be UTF-8 encoded CSV.",
        _ => "Check the path and try again.",
    };
    format!(
        "Error {} '{}': {}. {}",
        operation,
        path.display(),
        err,
        suggestion
    )
}

/// Convert an I/O error into a std::io::Error with context.
pub fn io_error(operation: &str, path: &Path, err: io::Error) -> io::Error {
    io::Error::new(err.kind(), format_io_error(operation, path, &err))
}

/// Simple CLI error from string.
pub fn simple_cli_error(msg: &str) -> CliError {
    CliError {
        msg: msg.to_string(),
        source: None,
    }
}

/// Convert a library error into a CLI error with a hint.
pub fn wort_cli_error(context: &str, err: WortError) -> CliError {
    CliError {
        msg: format!("{}: {}", context, cli_hint(&err)),
        source: Some(Box::new(err)),
    }
}

/// Return an actionable hint for an error variant.
pub fn cli_hint(err: &WortError) -> String {
    use WortError::*;
    match err {
        InsufficientCandidates { requested, available } => format!(
            "requested {requested} words but the list only has {available}. Use a smaller --count."
        ),
        InvalidCount { requested, max } => {
            format!("--count {requested} is out of range. Pick a value from 1 to {max}.")
        }
        UnparsableCount { input, max } => {
            format!("'{input}' is not a word count. Pick a value from 1 to {max}.")
        }
        LookupUnavailable(msg) => {
            format!("{msg}. Check the network or retry with --no-definitions.")
        }
        Config(msg) => format!("{msg}. Invalid configuration."),
        Csv(e) => format!("{e}. Check the word list format."),
        Io(io) => format!("{io}"),
    }
}
