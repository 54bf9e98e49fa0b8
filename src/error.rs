use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Everything that can stop a search from producing a count.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid configuration (word length {word_length}, count {target_count}): {reason}")]
    InvalidConfig {
        word_length: usize,
        target_count: usize,
        reason: String,
    },

    #[error("failed to read word source {}: {source}", path.display())]
    SourceRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("search cancelled")]
    Cancelled,

    #[error("worker failed on partition {partition}: {message}")]
    WorkerFailure { partition: usize, message: String },

    #[error("failed to build worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

impl Error {
    /// True when the search was stopped on request rather than broken.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Error::Cancelled)
    }
}

pub type Result<T> = std::result::Result<T, Error>;
