use thiserror::Error;

#[derive(Error, Debug)]
pub enum WortError {
    /// More words were requested than the word list holds.
    #[error("cannot draw {requested} words from a list of {available}")]
    InsufficientCandidates { requested: usize, available: usize },

    /// Requested batch size outside `1..=max`.
    #[error("word count must be between 1 and {max}, got {requested}")]
    InvalidCount { requested: usize, max: usize },

    /// Batch size that is not a number at all.
    #[error("word count must be a number between 1 and {max}, got '{input}'")]
    UnparsableCount { input: String, max: usize },

    /// Dictionary service unreachable or answered with an error status.
    #[error("dictionary lookup unavailable: {0}")]
    LookupUnavailable(String),

    /// Configuration or input schema error.
    #[error("config error: {0}")]
    Config(String),

    /// Propagated CSV decoding error.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Propagated I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<reqwest::Error> for WortError {
    fn from(err: reqwest::Error) -> Self {
        WortError::LookupUnavailable(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, WortError>;
