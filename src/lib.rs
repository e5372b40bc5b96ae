//! Random German noun generator with Duden definitions.
//!
//! A [`WordList`] is loaded once from a tagged CSV file, [`sample`] draws a
//! batch of distinct words, and a [`Resolver`] annotates each word with one
//! definition taken from a [`Dictionary`] (by default [`DudenClient`]).

pub mod config;
pub mod dictionary;
pub mod duden;
mod error;
pub mod io_utils;
pub mod render;
pub mod resolver;
pub mod sampler;
pub mod server;
pub mod words;

pub use config::{Config, DictionaryConfig, WordSource, DEFAULT_COUNT, MAX_COUNT};
pub use dictionary::{Dictionary, Entry, MeaningOverview};
pub use duden::DudenClient;
pub use error::{Result, WortError};
pub use resolver::{Annotated, Resolver, NO_DEFINITION};
pub use sampler::{sample, validate_count};
pub use words::WordList;
