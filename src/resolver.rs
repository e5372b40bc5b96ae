//! Definition resolution with frequency based disambiguation.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::dictionary::{Dictionary, Entry};
use crate::WortError;

/// Returned whenever no usable definition exists.
pub const NO_DEFINITION: &str = "Keine Definition gefunden.";

/// A sampled word together with its resolved definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Annotated {
    pub word: String,
    pub definition: String,
}

/// Picks one definition string per word from a [`Dictionary`].
#[derive(Clone)]
pub struct Resolver {
    dictionary: Option<Arc<dyn Dictionary>>,
}

impl Resolver {
    pub fn new(dictionary: Arc<dyn Dictionary>) -> Self {
        Self {
            dictionary: Some(dictionary),
        }
    }

    /// Resolver that never contacts a dictionary and always yields
    /// [`NO_DEFINITION`].
    pub fn without_definitions() -> Self {
        Self { dictionary: None }
    }

    /// Best-guess definition for `word`, newlines replaced by spaces.
    pub async fn resolve(&self, word: &str) -> Result<String, WortError> {
        let Some(dictionary) = &self.dictionary else {
            return Ok(NO_DEFINITION.to_string());
        };

        if let Some(entry) = dictionary.lookup_exact(word).await? {
            if let Some(meaning) = &entry.meaning_overview {
                debug!(word, "exact dictionary match");
                return Ok(normalize(&meaning.render()));
            }
        }

        let candidates = dictionary.search(word).await?;
        debug!(word, candidates = candidates.len(), "dictionary search");
        let text = match candidates.as_slice() {
            [] => None,
            [only] => only.meaning_overview.as_ref().map(|m| m.render()),
            many => most_frequent(many)
                .and_then(|e| e.meaning_overview.as_ref())
                .and_then(|m| m.first())
                .map(str::to_string),
        };
        Ok(normalize(text.as_deref().unwrap_or(NO_DEFINITION)))
    }

    /// Like [`Resolver::resolve`] but substitutes [`NO_DEFINITION`] when the
    /// dictionary is unavailable, so a batch is never aborted by one word.
    pub async fn resolve_or_sentinel(&self, word: &str) -> String {
        match self.resolve(word).await {
            Ok(definition) => definition,
            Err(e) => {
                warn!(word, error = %e, "definition lookup failed");
                NO_DEFINITION.to_string()
            }
        }
    }

    /// Resolve a batch one word after another.
    pub async fn annotate(&self, words: Vec<String>) -> Vec<Annotated> {
        let mut out = Vec::with_capacity(words.len());
        for word in words {
            let definition = self.resolve_or_sentinel(&word).await;
            out.push(Annotated { word, definition });
        }
        out
    }
}

/// Highest frequency wins; on ties the earliest candidate wins.
pub fn most_frequent(candidates: &[Entry]) -> Option<&Entry> {
    let mut order: Vec<usize> = (0..candidates.len()).collect();
    // stable sort keeps first-seen order among equal frequencies
    order.sort_by(|&a, &b| candidates[b].frequency.cmp(&candidates[a].frequency));
    order.first().map(|&i| &candidates[i])
}

/// Replace every line break with a single space.
pub fn normalize(text: &str) -> String {
    text.replace("\r\n", " ").replace(['\n', '\r'], " ")
}
