//! Counts groups of words that share no letter, e.g. five five-letter words
//! covering 25 distinct letters.
//!
//! Words are reduced to letter bitmasks, anagrams collapse, and a backtracking
//! search over strictly descending dictionary indexes counts each group once.
//! The first word of a group picks the partition, and partitions run in
//! parallel on rayon.

use std::path::Path;
use std::time::Instant;

use log::debug;

pub mod config;
pub mod driver;
pub mod error;
pub mod letters;
pub mod search;
pub mod words;

pub use config::SearchConfig;
pub use driver::{run, CancellationToken, NoProgress, ProgressSink, SearchReport};
pub use error::{Error, Result};
pub use search::count_combinations;
pub use words::{load_words, load_words_from_path, Bitword, Dictionary};

/// Loads the word list at `path` and searches it.
///
/// The elapsed time covers both loading and searching.
pub fn solve(
    path: impl AsRef<Path>,
    config: &SearchConfig,
    progress: &dyn ProgressSink,
    cancel: &CancellationToken,
) -> Result<SearchReport> {
    config.validate()?;
    debug!("solving with {config:?}");

    let start = Instant::now();
    let dict = load_words_from_path(path, config.word_length)?;
    if cancel.is_cancelled() {
        return Err(Error::Cancelled);
    }
    let mut report = run(&dict, config, progress, cancel)?;
    report.elapsed = start.elapsed();
    Ok(report)
}
