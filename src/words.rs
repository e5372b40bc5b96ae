//! Loading of the noun list from a tagged CSV file.

use std::collections::HashSet;
use std::fs::File;
use std::io::Read;

use tracing::info;

use crate::config::WordSource;
use crate::io_utils::io_error;
use crate::WortError;

/// Distinct noun lemmas in first-seen order. Immutable once loaded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordList {
    words: Vec<String>,
}

impl WordList {
    /// Load and filter the file named by `source`.
    pub fn load(source: &WordSource) -> Result<Self, WortError> {
        let file = File::open(&source.path)
            .map_err(|e| io_error("opening word list", &source.path, e))?;
        let list = Self::from_reader(file, source)?;
        info!(
            path = %source.path.display(),
            count = list.len(),
            "loaded word list"
        );
        Ok(list)
    }

    /// Parse CSV with a header row, keeping only rows tagged as nouns.
    pub fn from_reader<R: Read>(reader: R, source: &WordSource) -> Result<Self, WortError> {
        let mut rdr = csv::ReaderBuilder::new().flexible(true).from_reader(reader);
        let headers = rdr.headers()?.clone();
        let column = |name: &str| {
            headers
                .iter()
                .position(|h| h.trim() == name)
                .ok_or_else(|| WortError::Config(format!("word list has no '{name}' column")))
        };
        let pos_idx = column(&source.pos_column)?;
        let lemma_idx = column(&source.lemma_column)?;

        let mut seen = HashSet::new();
        let mut words = Vec::new();
        for record in rdr.records() {
            let record = record?;
            if record.get(pos_idx).map(str::trim) != Some(source.noun_tag.as_str()) {
                continue;
            }
            let lemma = match record.get(lemma_idx).map(str::trim) {
                Some(l) if !l.is_empty() => l,
                _ => continue,
            };
            if seen.insert(lemma.to_string()) {
                words.push(lemma.to_string());
            }
        }
        Ok(Self { words })
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.words
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|w| w == word)
    }
}

impl<S: Into<String>> FromIterator<S> for WordList {
    /// Build from in-memory words, dropping duplicates.
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut seen = HashSet::new();
        let words = iter
            .into_iter()
            .map(Into::into)
            .filter(|w: &String| seen.insert(w.clone()))
            .collect();
        Self { words }
    }
}
