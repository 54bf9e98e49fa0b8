use crate::error::{Error, Result};
use crate::letters::ALPHABET_SIZE;

/// Shape of the search: how long each word is and how many words form a group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    pub word_length: usize,
    pub target_count: usize,
    /// Worker count; `None` runs on rayon's global pool.
    pub threads: Option<usize>,
    /// Keep the word groups instead of only counting them.
    pub collect_solutions: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            word_length: 5,
            target_count: 5,
            threads: None,
            collect_solutions: false,
        }
    }
}

impl SearchConfig {
    pub fn new(word_length: usize, target_count: usize) -> Self {
        SearchConfig {
            word_length,
            target_count,
            ..Default::default()
        }
    }

    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = Some(threads);
        self
    }

    pub fn with_solutions(mut self, collect: bool) -> Self {
        self.collect_solutions = collect;
        self
    }

    /// Rejects shapes that can never fit in the alphabet.
    pub fn validate(&self) -> Result<()> {
        let invalid = |reason: String| Error::InvalidConfig {
            word_length: self.word_length,
            target_count: self.target_count,
            reason,
        };

        if self.word_length == 0 {
            return Err(invalid("word length must be positive".into()));
        }
        if self.target_count == 0 {
            return Err(invalid("word count must be positive".into()));
        }
        match self.word_length.checked_mul(self.target_count) {
            Some(letters) if letters <= ALPHABET_SIZE => {}
            _ => {
                return Err(invalid(format!(
                    "{} x {} letters exceed the {ALPHABET_SIZE}-letter alphabet",
                    self.target_count, self.word_length
                )))
            }
        }
        if self.threads == Some(0) {
            return Err(invalid("thread count must be positive".into()));
        }
        Ok(())
    }
}
