//! Parallel fitness evaluation.
//!
//! A batch of unranked genomes is split into one contiguous slice per
//! worker. Each worker evaluates its slice in order and builds a private
//! [`RankedPopulation`] by repeated insertion. After every worker has
//! finished, the coordinator merges the local populations into one.
//!
//! Workers share nothing writable: the evaluator is only borrowed
//! (`Sync`), each slice is moved into exactly one worker, and the merge
//! runs on the calling thread after the join.
//!
//! # Ordering
//!
//! Local populations are merged in worker-index order, so among entries
//! with equal cost those from lower-indexed workers rank first. Within a
//! worker, insertion is lower-bound, so equal-cost entries end up in
//! reverse slice order. No other ordering across workers is observable,
//! and evaluation order across workers is unspecified.
//!
//! # Limitations
//!
//! There is no timeout: an evaluator call that never returns stalls the
//! whole batch.

use std::ops::Range;

use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};

use crate::error::{Result, SearchError};
use crate::fitness::FitnessEvaluator;
use crate::genome::Genome;
use crate::population::RankedPopulation;

/// Splits `total` items into `workers` contiguous, disjoint ranges.
///
/// Every range but the last has `ceil(total / workers)` items; the last
/// one extends to `total`. When there are more workers than items the
/// trailing ranges are empty. The returned vector always has exactly
/// `workers` entries.
///
/// # Panics
/// Panics if `workers` is zero.
///
/// # Examples
///
/// ```
/// use evosearch::parallel::partition;
///
/// assert_eq!(partition(10, 3), vec![0..4, 4..8, 8..10]);
/// assert_eq!(partition(2, 3), vec![0..1, 1..2, 2..2]);
/// ```
pub fn partition(total: usize, workers: usize) -> Vec<Range<usize>> {
    assert!(workers > 0, "partition requires at least one worker");
    let chunk = total.div_ceil(workers);
    (0..workers)
        .map(|w| {
            let start = (w * chunk).min(total);
            let end = if w + 1 == workers {
                total
            } else {
                ((w + 1) * chunk).min(total)
            };
            start..end
        })
        .collect()
}

/// Evaluates batches of genomes on a fixed-size worker pool.
///
/// The pool is created once and reused for every batch, so a search run
/// pays thread start-up only once.
#[derive(Debug)]
pub struct ParallelEvaluator {
    pool: ThreadPool,
    worker_count: usize,
}

impl ParallelEvaluator {
    /// Starts a pool of `worker_count` threads.
    ///
    /// Fails with [`SearchError::InvalidConfiguration`] if `worker_count`
    /// is zero or the threads cannot be spawned.
    pub fn new(worker_count: usize) -> Result<Self> {
        if worker_count == 0 {
            return Err(SearchError::InvalidConfiguration(
                "worker_count must be at least 1".into(),
            ));
        }
        let pool = ThreadPoolBuilder::new()
            .num_threads(worker_count)
            .thread_name(|i| format!("evosearch-worker-{i}"))
            .build()
            .map_err(|e| {
                SearchError::InvalidConfiguration(format!("cannot start worker pool: {e}"))
            })?;
        Ok(Self { pool, worker_count })
    }

    /// Number of workers in the pool.
    pub fn worker_count(&self) -> usize {
        self.worker_count
    }

    /// Evaluates every genome of `batch` exactly once and ranks the results.
    ///
    /// Blocks until all workers have finished. If any evaluation fails, or
    /// returns a cost that is negative, infinite or NaN, the whole batch is
    /// aborted and one of the worker errors is returned. Nothing from a
    /// failed batch is kept.
    ///
    /// # Panics
    /// Panics if the partition does not cover the batch exactly once, or if
    /// the merged population does not have one entry per input genome.
    pub fn evaluate_all<E>(&self, evaluator: &E, batch: Vec<Genome>) -> Result<RankedPopulation>
    where
        E: FitnessEvaluator + ?Sized,
    {
        let total = batch.len();
        if total == 0 {
            return Ok(RankedPopulation::new());
        }
        if self.worker_count > total {
            log::warn!(
                "{} workers for a batch of {} genomes; {} workers will idle",
                self.worker_count,
                total,
                self.worker_count - total
            );
        }

        let ranges = partition(total, self.worker_count);
        let covered: usize = ranges.iter().map(|r| r.len()).sum();
        assert_eq!(covered, total, "partition must cover every genome exactly once");

        let mut genomes = batch.into_iter();
        let slices: Vec<Vec<Genome>> = ranges
            .iter()
            .map(|r| genomes.by_ref().take(r.len()).collect())
            .collect();
        assert!(genomes.next().is_none(), "genomes left over after partitioning");

        let locals: Vec<RankedPopulation> = self.pool.install(|| {
            slices
                .into_par_iter()
                .enumerate()
                .map(|(worker, slice)| rank_slice(evaluator, worker, slice))
                .collect::<Result<Vec<_>>>()
        })?;

        let merged = locals
            .into_iter()
            .reduce(RankedPopulation::merge)
            .unwrap_or_default();

        assert_eq!(merged.len(), total, "merged population lost or duplicated genomes");
        debug_assert!(merged.is_ranked());
        Ok(merged)
    }
}

/// Evaluates `batch` on a temporary pool of `worker_count` threads.
///
/// Convenience wrapper around [`ParallelEvaluator`] for one-off batches.
pub fn evaluate_all<E>(evaluator: &E, batch: Vec<Genome>, worker_count: usize) -> Result<RankedPopulation>
where
    E: FitnessEvaluator + ?Sized,
{
    ParallelEvaluator::new(worker_count)?.evaluate_all(evaluator, batch)
}

/// Worker body: evaluate a slice in order, inserting into a private population.
fn rank_slice<E>(evaluator: &E, worker: usize, slice: Vec<Genome>) -> Result<RankedPopulation>
where
    E: FitnessEvaluator + ?Sized,
{
    log::debug!("worker {worker}: evaluating {} genomes", slice.len());
    let mut local = RankedPopulation::with_capacity(slice.len());
    for genome in slice {
        let cost = evaluator.evaluate(&genome)?;
        if !cost.is_finite() || cost < 0.0 {
            return Err(SearchError::InvalidCost { cost });
        }
        local.insert(genome, cost);
    }
    Ok(local)
}
