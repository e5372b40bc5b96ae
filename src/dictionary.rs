//! Dictionary collaborator interface and its record types.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::WortError;

/// Meaning summary of a dictionary entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MeaningOverview {
    /// Word with exactly one meaning.
    Single(String),
    /// Enumerated meanings, most common first.
    Many(Vec<String>),
}

impl MeaningOverview {
    /// The first listed meaning; the whole text for `Single`.
    pub fn first(&self) -> Option<&str> {
        match self {
            MeaningOverview::Single(text) => Some(text.as_str()),
            MeaningOverview::Many(items) => items.first().map(String::as_str),
        }
    }

    /// Full summary as one line of text.
    pub fn render(&self) -> String {
        match self {
            MeaningOverview::Single(text) => text.clone(),
            MeaningOverview::Many(items) => items.join("; "),
        }
    }
}

/// One dictionary record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub name: String,
    pub meaning_overview: Option<MeaningOverview>,
    /// Usage frequency, higher means more common. Zero when unknown.
    pub frequency: u8,
}

impl Entry {
    pub fn new(name: impl Into<String>, meaning: MeaningOverview, frequency: u8) -> Self {
        Self {
            name: name.into(),
            meaning_overview: Some(meaning),
            frequency,
        }
    }
}

/// Lexical lookup service.
///
/// Transport failures are reported as [`WortError::LookupUnavailable`].
/// "Not found" is never an error: it is `Ok(None)` or an empty list.
#[async_trait]
pub trait Dictionary: Send + Sync {
    /// Direct match on the word's own dictionary page.
    async fn lookup_exact(&self, word: &str) -> Result<Option<Entry>, WortError>;

    /// Broader search returning every candidate entry for `word`.
    async fn search(&self, word: &str) -> Result<Vec<Entry>, WortError>;
}
