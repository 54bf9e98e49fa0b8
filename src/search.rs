//! Backtracking over disjoint bitwords.
//!
//! Candidates are always taken below a shrinking ceiling, highest index first,
//! so every set of words is reached through exactly one index order.

use crate::driver::CancellationToken;
use crate::error::{Error, Result};
use crate::letters::ALPHABET_SIZE;
use crate::words::Bitword;

/// Counts the ways to pick `target - chosen` more entries from `dict[..ceiling]`
/// that are pairwise disjoint and disjoint from `used_bits`.
pub fn count_combinations(
    dict: &[Bitword],
    used_bits: Bitword,
    chosen: usize,
    ceiling: usize,
    target: usize,
) -> u64 {
    if chosen >= target {
        return 1;
    }
    let remaining = target - chosen;
    let ceiling = ceiling.min(dict.len());
    if remaining > ceiling {
        return 0;
    }

    let mut total = 0;
    for i in (remaining - 1..ceiling).rev() {
        let mask = dict[i];
        if used_bits & mask == 0 {
            total += count_combinations(dict, used_bits | mask, chosen + 1, i, target);
        }
    }
    total
}

/// Same walk as [`count_combinations`], handing each completed set to `visit`
/// as the chosen bitwords in descending index order.
pub fn visit_combinations<F>(
    dict: &[Bitword],
    used_bits: Bitword,
    ceiling: usize,
    target: usize,
    chosen: &mut Vec<Bitword>,
    visit: &mut F,
) where
    F: FnMut(&[Bitword]),
{
    if chosen.len() >= target {
        visit(chosen);
        return;
    }
    let remaining = target - chosen.len();
    let ceiling = ceiling.min(dict.len());
    if remaining > ceiling {
        return;
    }

    for i in (remaining - 1..ceiling).rev() {
        let mask = dict[i];
        if used_bits & mask == 0 {
            chosen.push(mask);
            visit_combinations(dict, used_bits | mask, i, target, chosen, visit);
            chosen.pop();
        }
    }
}

/// Search over one dictionary, split into partitions by the first chosen word.
///
/// Partition `i` covers every combination whose highest index is `i`, so the
/// partitions never overlap and their counts simply add up.
pub struct Search<'a> {
    dict: &'a [Bitword],
    word_length: usize,
    target: usize,
    cancel: Option<&'a CancellationToken>,
}

impl<'a> Search<'a> {
    /// Partitions need a first word, so `target` must be at least one.
    pub fn new(dict: &'a [Bitword], word_length: usize, target: usize) -> Result<Self> {
        if target == 0 {
            return Err(Error::InvalidConfig {
                word_length,
                target_count: target,
                reason: "word count must be positive".into(),
            });
        }
        Ok(Search {
            dict,
            word_length,
            target,
            cancel: None,
        })
    }

    pub fn with_cancellation(mut self, token: &'a CancellationToken) -> Self {
        self.cancel = Some(token);
        self
    }

    pub fn partitions(&self) -> usize {
        self.dict.len()
    }

    /// Whether any combination can exist at all.
    pub fn feasible(&self) -> bool {
        match self.target.checked_mul(self.word_length) {
            Some(letters) => letters <= ALPHABET_SIZE && self.target <= self.dict.len(),
            None => false,
        }
    }

    fn check_cancelled(&self) -> Result<()> {
        match self.cancel {
            Some(token) if token.is_cancelled() => Err(Error::Cancelled),
            _ => Ok(()),
        }
    }

    /// Number of combinations rooted at `dict[root]`.
    pub fn count_partition(&self, root: usize) -> Result<u64> {
        self.check_cancelled()?;
        let root_mask = self.dict[root];
        if self.target == 1 {
            return Ok(1);
        }

        let mut total = 0;
        for j in (0..root).rev() {
            self.check_cancelled()?;
            let mask = self.dict[j];
            if root_mask & mask == 0 {
                total += count_combinations(self.dict, root_mask | mask, 2, j, self.target);
            }
        }
        Ok(total)
    }

    /// Combinations rooted at `dict[root]`, as bitwords.
    pub fn collect_partition(&self, root: usize) -> Result<Vec<Vec<Bitword>>> {
        self.check_cancelled()?;
        let mut found = Vec::new();
        let mut chosen = Vec::with_capacity(self.target);
        chosen.push(self.dict[root]);
        visit_combinations(
            self.dict,
            self.dict[root],
            root,
            self.target,
            &mut chosen,
            &mut |set: &[Bitword]| found.push(set.to_vec()),
        );
        Ok(found)
    }
}
