//! Ranked population: genomes kept sorted ascending by cost.
//!
//! [`RankedPopulation`] stores genomes and costs in two parallel vectors.
//! Every mutating operation preserves the invariant
//! `costs[i] <= costs[j]` for all `i < j`, with `genomes[i]` being the
//! genome whose cost is `costs[i]`.
//!
//! Insertion uses lower-bound placement: a new entry goes before every
//! existing entry of equal cost, so among ties the most recently inserted
//! ranks first. [`merge`](RankedPopulation::merge) places equal-cost
//! entries of the left operand before those of the right one.

use crate::error::{Result, SearchError};
use crate::genome::Genome;

/// Genomes paired with their costs, sorted ascending by cost.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RankedPopulation {
    genomes: Vec<Genome>,
    costs: Vec<f64>,
}

impl RankedPopulation {
    /// Creates an empty population.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty population with room for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            genomes: Vec::with_capacity(capacity),
            costs: Vec::with_capacity(capacity),
        }
    }

    /// Builds a population from unordered `(genome, cost)` pairs by
    /// repeated [`insert`](Self::insert).
    pub fn from_unsorted<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (Genome, f64)>,
    {
        let mut pop = Self::new();
        for (genome, cost) in entries {
            pop.insert(genome, cost);
        }
        pop
    }

    /// Inserts `genome` with `cost` at its rank.
    ///
    /// The position is found by binary search over the costs (lower
    /// bound): the entry goes before the first existing entry with cost
    /// `>= cost`.
    ///
    /// # Complexity
    /// O(log n) search + O(n) shift
    pub fn insert(&mut self, genome: Genome, cost: f64) {
        debug_assert!(!cost.is_nan(), "cost must not be NaN");
        let index = self.costs.partition_point(|&c| c < cost);
        self.costs.insert(index, cost);
        self.genomes.insert(index, genome);
    }

    /// Merges two ranked populations into one.
    ///
    /// Linear two-pointer merge of the already-sorted inputs. On equal
    /// costs, entries from `self` come before entries from `other`.
    ///
    /// # Complexity
    /// O(|self| + |other|)
    pub fn merge(self, other: RankedPopulation) -> RankedPopulation {
        if other.is_empty() {
            return self;
        }
        if self.is_empty() {
            return other;
        }

        let total = self.len() + other.len();
        let mut merged = RankedPopulation::with_capacity(total);

        let mut left = self.genomes.into_iter().zip(self.costs).peekable();
        let mut right = other.genomes.into_iter().zip(other.costs).peekable();

        loop {
            let take_left = match (left.peek(), right.peek()) {
                (Some((_, lc)), Some((_, rc))) => lc <= rc,
                (Some(_), None) => true,
                (None, Some(_)) => false,
                (None, None) => break,
            };
            let next = if take_left { left.next() } else { right.next() };
            if let Some((genome, cost)) = next {
                merged.genomes.push(genome);
                merged.costs.push(cost);
            }
        }

        debug_assert_eq!(merged.len(), total);
        merged
    }

    /// Lowest cost in the population.
    pub fn best(&self) -> Result<f64> {
        self.costs.first().copied().ok_or(SearchError::EmptyPopulation)
    }

    /// Highest cost in the population.
    pub fn worst(&self) -> Result<f64> {
        self.costs.last().copied().ok_or(SearchError::EmptyPopulation)
    }

    /// Genome with the lowest cost.
    pub fn best_genome(&self) -> Result<&Genome> {
        self.genomes.first().ok_or(SearchError::EmptyPopulation)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.costs.len()
    }

    /// Returns `true` if the population has no entries.
    pub fn is_empty(&self) -> bool {
        self.costs.is_empty()
    }

    /// Genomes in rank order.
    pub fn genomes(&self) -> &[Genome] {
        &self.genomes
    }

    /// Costs in ascending order.
    pub fn costs(&self) -> &[f64] {
        &self.costs
    }

    /// Iterates `(genome, cost)` pairs in rank order.
    pub fn iter(&self) -> impl Iterator<Item = (&Genome, f64)> {
        self.genomes.iter().zip(self.costs.iter().copied())
    }

    /// Consumes the population, returning its genomes in rank order.
    pub fn into_genomes(self) -> Vec<Genome> {
        self.genomes
    }

    /// Checks the sort invariant. Used by tests and debug assertions.
    pub fn is_ranked(&self) -> bool {
        self.genomes.len() == self.costs.len() && self.costs.windows(2).all(|w| w[0] <= w[1])
    }
}
