//! Parallel driver: one partition per dictionary entry, spread over rayon.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::atomic::{AtomicBool, AtomicU64, AtomicU8, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use itertools::Itertools;
use log::{debug, info, trace};
use rayon::prelude::*;

use crate::config::SearchConfig;
use crate::error::{Error, Result};
use crate::search::Search;
use crate::words::{Bitword, Dictionary};

/// Receives completion percentages in `0..=100`.
///
/// May be called from several workers at once, and updates below 100 can
/// arrive out of order. A finished run reports 100 once, from the calling
/// thread, after every worker has returned.
pub trait ProgressSink: Sync {
    fn report(&self, percent: u8);
}

impl<F> ProgressSink for F
where
    F: Fn(u8) + Sync,
{
    fn report(&self, percent: u8) {
        self(percent)
    }
}

/// Sink that drops every update.
pub struct NoProgress;

impl ProgressSink for NoProgress {
    fn report(&self, _percent: u8) {}
}

/// Shared flag a caller flips to stop a running search.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken(Arc<AtomicBool>);

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Outcome of a completed run.
#[derive(Debug, Clone, Default)]
pub struct SearchReport {
    /// Distinct letter-set combinations found.
    pub combinations: u64,
    /// Unique letter sets in the dictionary.
    pub dictionary_size: usize,
    pub elapsed: Duration,
    /// Word groups, present when the config asked for them.
    pub solutions: Option<Vec<Vec<String>>>,
}

/// Tracks finished partitions and forwards rising percentages.
struct Progress<'a> {
    sink: &'a dyn ProgressSink,
    total: usize,
    done: AtomicUsize,
    reported: AtomicU8,
}

impl<'a> Progress<'a> {
    fn new(sink: &'a dyn ProgressSink, total: usize) -> Self {
        Progress {
            sink,
            total,
            done: AtomicUsize::new(0),
            reported: AtomicU8::new(0),
        }
    }

    /// Forwards intermediate percentages only; 100 is left to [`Progress::finish`].
    fn partition_done(&self) {
        let done = self.done.fetch_add(1, Ordering::AcqRel) + 1;
        let percent = (done * 100 / self.total.max(1)).min(99) as u8;
        if self.reported.fetch_max(percent, Ordering::AcqRel) < percent {
            self.sink.report(percent);
        }
    }

    fn finish(&self) {
        self.sink.report(100);
    }
}

fn panic_message(payload: Box<dyn Any + Send>) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "worker panicked".to_string()
    }
}

/// Runs `work` for one partition, turning a panic into a worker failure.
fn guarded<T>(partition: usize, work: impl FnOnce() -> Result<T>) -> Result<T> {
    panic::catch_unwind(AssertUnwindSafe(work)).unwrap_or_else(|payload| {
        Err(Error::WorkerFailure {
            partition,
            message: panic_message(payload),
        })
    })
}

/// Counts (and optionally collects) every combination in `dict`.
///
/// The report's elapsed time covers the search alone.
pub fn run(
    dict: &Dictionary,
    config: &SearchConfig,
    progress: &dyn ProgressSink,
    cancel: &CancellationToken,
) -> Result<SearchReport> {
    config.validate()?;
    let start = Instant::now();
    let mut report = match config.threads {
        Some(threads) => {
            let pool = rayon::ThreadPoolBuilder::new().num_threads(threads).build()?;
            pool.install(|| run_partitions(dict, config, progress, cancel))
        }
        None => run_partitions(dict, config, progress, cancel),
    }?;
    report.elapsed = start.elapsed();
    Ok(report)
}

fn run_partitions(
    dict: &Dictionary,
    config: &SearchConfig,
    progress: &dyn ProgressSink,
    cancel: &CancellationToken,
) -> Result<SearchReport> {
    let masks = dict.masks();
    let search =
        Search::new(masks, config.word_length, config.target_count)?.with_cancellation(cancel);
    let mut report = SearchReport {
        dictionary_size: dict.len(),
        solutions: config.collect_solutions.then(Vec::new),
        ..Default::default()
    };

    if !search.feasible() {
        debug!(
            "no {}-word combination possible among {} entries",
            config.target_count,
            masks.len()
        );
        if cancel.is_cancelled() {
            return Err(Error::Cancelled);
        }
        progress.report(100);
        return Ok(report);
    }

    debug!(
        "searching {} partitions on {} threads",
        search.partitions(),
        rayon::current_num_threads()
    );
    let tracker = Progress::new(progress, search.partitions());
    let total = AtomicU64::new(0);
    let found: Mutex<Vec<Vec<Bitword>>> = Mutex::new(Vec::new());

    (0..search.partitions())
        .into_par_iter()
        .try_for_each(|root| -> Result<()> {
            let count = if config.collect_solutions {
                let sets = guarded(root, || search.collect_partition(root))?;
                let count = sets.len() as u64;
                found
                    .lock()
                    .map_err(|e| Error::WorkerFailure {
                        partition: root,
                        message: e.to_string(),
                    })?
                    .extend(sets);
                count
            } else {
                guarded(root, || search.count_partition(root))?
            };
            total.fetch_add(count, Ordering::Relaxed);
            trace!("partition {root} done: {count}");
            tracker.partition_done();
            Ok(())
        })?;
    tracker.finish();

    report.combinations = total.into_inner();
    if let Some(solutions) = report.solutions.as_mut() {
        let sets = found.into_inner().map_err(|e| Error::WorkerFailure {
            partition: 0,
            message: e.to_string(),
        })?;
        *solutions = sets
            .iter()
            .flat_map(|set| dict.spell(set))
            .sorted()
            .collect_vec();
    }

    info!(
        "found {} combinations of {} words",
        report.combinations, config.target_count
    );
    Ok(report)
}
