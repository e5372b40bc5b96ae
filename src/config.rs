use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::WortError;

/// Upper bound for a single batch, matching the form's `max` attribute.
pub const MAX_COUNT: usize = 25;
/// Batch size pre-filled in the form.
pub const DEFAULT_COUNT: usize = 5;

/// Where the noun list comes from and how its columns are named.
#[derive(Debug, Clone)]
pub struct WordSource {
    pub path: PathBuf,
    /// Column holding the part-of-speech tag.
    pub pos_column: String,
    /// Column holding the lemma.
    pub lemma_column: String,
    /// Tag value marking common nouns.
    pub noun_tag: String,
}

impl Default for WordSource {
    fn default() -> Self {
        Self {
            path: PathBuf::from("nouns.csv"),
            pos_column: "pos".to_string(),
            lemma_column: "lemma".to_string(),
            noun_tag: "Substantiv".to_string(),
        }
    }
}

/// Settings for the Duden HTTP client.
#[derive(Debug, Clone)]
pub struct DictionaryConfig {
    pub base_url: String,
    /// Bound applied to every single request.
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            base_url: "https://www.duden.de".to_string(),
            timeout: Duration::from_secs(10),
            user_agent: concat!("wortgenerator/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

/// Runtime configuration for the CLI and the web server.
#[derive(Debug, Clone)]
pub struct Config {
    pub words: WordSource,
    pub dictionary: DictionaryConfig,
    pub max_count: usize,
    pub default_count: usize,
    pub bind: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            words: WordSource::default(),
            dictionary: DictionaryConfig::default(),
            max_count: MAX_COUNT,
            default_count: DEFAULT_COUNT,
            bind: "127.0.0.1:8501".to_string(),
        }
    }
}

impl Config {
    /// Defaults overridden by `WORTGEN_*` environment variables. A `.env`
    /// file in the working directory is honoured.
    pub fn from_env() -> Result<Self, WortError> {
        dotenvy::dotenv().ok();
        let mut config = Self::default();
        config.apply_vars(|key| env::var(key).ok())?;
        Ok(config)
    }

    /// Apply overrides from an arbitrary variable lookup.
    pub fn apply_vars<F>(&mut self, lookup: F) -> Result<(), WortError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path) = lookup("WORTGEN_WORDS") {
            self.words.path = PathBuf::from(path);
        }
        if let Some(url) = lookup("WORTGEN_DICTIONARY_URL") {
            self.dictionary.base_url = url;
        }
        if let Some(secs) = lookup("WORTGEN_TIMEOUT_SECS") {
            let secs: u64 = secs.trim().parse().map_err(|_| {
                WortError::Config(format!("WORTGEN_TIMEOUT_SECS is not a number: {secs}"))
            })?;
            self.dictionary.timeout = Duration::from_secs(secs);
        }
        if let Some(bind) = lookup("WORTGEN_BIND") {
            self.bind = bind;
        }
        Ok(())
    }
}
