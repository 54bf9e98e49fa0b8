//! Word list filtering and bitword encoding.

use std::collections::HashMap;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use itertools::Itertools;
use log::{debug, info, warn};

use crate::error::{Error, Result};
use crate::letters;

/// Letter set of one word, one bit per distinct letter.
pub type Bitword = u32;

/// Why a candidate line was left out of the dictionary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    Length,
    RepeatedLetter,
    ForeignCharacter,
}

/// Encodes an already normalised word, rejecting anything that is not exactly
/// `word_length` distinct letters from `a..=z`.
pub fn encode_word(word: &str, word_length: usize) -> std::result::Result<Bitword, Rejection> {
    let mut mask = 0;
    for c in word.bytes() {
        let bit = letters::letter_bit(c).ok_or(Rejection::ForeignCharacter)?;
        if mask & bit != 0 {
            return Err(Rejection::RepeatedLetter);
        }
        mask |= bit;
    }
    if word.len() != word_length {
        return Err(Rejection::Length);
    }
    Ok(mask)
}

/// Counters collected while loading a word source.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LoadStats {
    pub lines: usize,
    pub accepted: usize,
    pub duplicates: usize,
    pub wrong_length: usize,
    pub repeated_letter: usize,
    pub foreign_character: usize,
    pub bad_encoding: usize,
}

impl LoadStats {
    fn reject(&mut self, why: Rejection) {
        match why {
            Rejection::Length => self.wrong_length += 1,
            Rejection::RepeatedLetter => self.repeated_letter += 1,
            Rejection::ForeignCharacter => self.foreign_character += 1,
        }
    }
}

/// Distinct letter sets of the eligible words, in first-seen order.
///
/// Anagrams share one entry; every spelling is kept alongside it so solutions
/// can be turned back into words.
#[derive(Debug, Default, Clone)]
pub struct Dictionary {
    word_length: usize,
    masks: Vec<Bitword>,
    spellings: Vec<Vec<String>>,
    index: HashMap<Bitword, usize>,
    stats: LoadStats,
}

impl Dictionary {
    pub fn new(word_length: usize) -> Self {
        Dictionary {
            word_length,
            ..Default::default()
        }
    }

    /// Builds a dictionary from in-memory lines.
    pub fn from_words<I, S>(words: I, word_length: usize) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut dict = Dictionary::new(word_length);
        for word in words {
            dict.insert_line(word.as_ref());
        }
        dict
    }

    /// Normalises one raw line and adds it if it is eligible.
    pub fn insert_line(&mut self, line: &str) -> Option<Bitword> {
        self.stats.lines += 1;
        let word = line.trim().to_lowercase();
        let mask = match encode_word(&word, self.word_length) {
            Ok(mask) => mask,
            Err(why) => {
                self.stats.reject(why);
                return None;
            }
        };

        self.stats.accepted += 1;
        match self.index.get(&mask) {
            Some(&idx) => {
                self.stats.duplicates += 1;
                let group = &mut self.spellings[idx];
                if !group.contains(&word) {
                    group.push(word);
                }
            }
            None => {
                self.index.insert(mask, self.masks.len());
                self.masks.push(mask);
                self.spellings.push(vec![word]);
            }
        }
        Some(mask)
    }

    pub fn len(&self) -> usize {
        self.masks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.masks.is_empty()
    }

    /// Bitwords in dictionary order; this is the array the search indexes.
    pub fn masks(&self) -> &[Bitword] {
        &self.masks
    }

    /// Every accepted spelling of a letter set.
    pub fn words_for(&self, mask: Bitword) -> &[String] {
        self.index
            .get(&mask)
            .map(|&idx| self.spellings[idx].as_slice())
            .unwrap_or(&[])
    }

    pub fn stats(&self) -> &LoadStats {
        &self.stats
    }

    /// Expands a combination of letter sets into every word group spelling it,
    /// each group sorted.
    pub fn spell(&self, combination: &[Bitword]) -> Vec<Vec<String>> {
        if combination.is_empty() {
            return vec![vec![]];
        }
        combination
            .iter()
            .map(|&mask| self.words_for(mask).iter())
            .multi_cartesian_product()
            .map(|group| group.into_iter().cloned().sorted().collect_vec())
            .collect()
    }
}

/// Reads one candidate word per line. Lines that are not valid UTF-8 are
/// skipped; any other read error aborts the load.
pub fn load_words<R: BufRead>(mut reader: R, word_length: usize) -> io::Result<Dictionary> {
    let mut dict = Dictionary::new(word_length);
    let mut buf = Vec::new();
    let mut line_no = 0usize;
    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        line_no += 1;
        match std::str::from_utf8(&buf) {
            Ok(line) => {
                dict.insert_line(line);
            }
            Err(e) => {
                warn!("skipping line {line_no}: {e}");
                dict.stats.lines += 1;
                dict.stats.bad_encoding += 1;
            }
        }
    }

    debug!("load stats: {:?}", dict.stats);
    info!(
        "loaded {} unique {word_length}-letter words from {line_no} lines",
        dict.len()
    );
    Ok(dict)
}

/// Opens `path` and loads it with [`load_words`].
pub fn load_words_from_path(path: impl AsRef<Path>, word_length: usize) -> Result<Dictionary> {
    let path = path.as_ref();
    let source_error = |source| Error::SourceRead {
        path: path.to_path_buf(),
        source,
    };
    let file = File::open(path).map_err(source_error)?;
    load_words(BufReader::new(file), word_length).map_err(source_error)
}
