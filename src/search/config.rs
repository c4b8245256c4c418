//! Search configuration.
//!
//! [`SearchConfig`] holds every parameter of a run. It is set once before
//! the search starts and read-only afterwards.

use crate::error::{Result, SearchError};

/// Configuration for an evolutionary search run.
///
/// # Defaults
///
/// ```
/// use evosearch::search::SearchConfig;
///
/// let config = SearchConfig::default();
/// assert_eq!(config.generation_size, 100);
/// assert_eq!(config.iterations, 100);
/// assert!(config.worker_count >= 1);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use evosearch::search::SearchConfig;
///
/// let config = SearchConfig::default()
///     .with_dna_length(4)
///     .with_gene_num(2)
///     .with_generation_size(8)
///     .with_mutation_rate(0.1)
///     .with_worker_count(2)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchConfig {
    /// Number of genes in every genome.
    pub dna_length: usize,

    /// Alphabet size: each gene takes a value in `0 .. gene_num`.
    pub gene_num: usize,

    /// Number of genomes per generation. Must be even: the better half is
    /// kept, the worse half is replaced.
    pub generation_size: usize,

    /// Probability (0.0–1.0) that a single gene is resampled during breeding.
    pub mutation_rate: f64,

    /// Number of threads used for fitness evaluation.
    pub worker_count: usize,

    /// Number of generations [`run`](super::EvolutionarySearch::run) executes
    /// when driven through [`search`](super::search).
    pub iterations: usize,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed, reported back in the result.
    pub seed: Option<u64>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            dna_length: 20,
            gene_num: 4,
            generation_size: 100,
            mutation_rate: 0.01,
            worker_count: std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(1),
            iterations: 100,
            seed: None,
        }
    }
}

impl SearchConfig {
    /// Sets the genome length.
    pub fn with_dna_length(mut self, n: usize) -> Self {
        self.dna_length = n;
        self
    }

    /// Sets the gene alphabet size.
    pub fn with_gene_num(mut self, n: usize) -> Self {
        self.gene_num = n;
        self
    }

    /// Sets the generation size.
    pub fn with_generation_size(mut self, n: usize) -> Self {
        self.generation_size = n;
        self
    }

    /// Sets the per-gene mutation rate.
    ///
    /// The value is stored as given; [`validate`](Self::validate) rejects
    /// rates outside `[0, 1]`.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate;
        self
    }

    /// Sets the number of evaluation workers.
    pub fn with_worker_count(mut self, n: usize) -> Self {
        self.worker_count = n;
        self
    }

    /// Sets the number of generations.
    pub fn with_iterations(mut self, n: usize) -> Self {
        self.iterations = n;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    ///
    /// Returns [`SearchError::InvalidConfiguration`] describing the first
    /// invalid parameter.
    pub fn validate(&self) -> Result<()> {
        let invalid = |msg: &str| Err(SearchError::InvalidConfiguration(msg.into()));
        if self.dna_length == 0 {
            return invalid("dna_length must be at least 1");
        }
        if self.gene_num == 0 {
            return invalid("gene_num must be at least 1");
        }
        if self.generation_size == 0 {
            return invalid("generation_size must be at least 2");
        }
        if self.generation_size % 2 != 0 {
            return invalid("generation_size must be even");
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return invalid("mutation_rate must be in [0, 1]");
        }
        if self.worker_count == 0 {
            return invalid("worker_count must be at least 1");
        }
        Ok(())
    }
}
