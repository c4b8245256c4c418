//! Population-based evolutionary search over fixed-length integer genomes.
//!
//! The engine looks for the genome that minimizes a cost returned by an
//! external, possibly expensive [`FitnessEvaluator`](fitness::FitnessEvaluator).
//!
//! - **Genome**: fixed-length sequence of genes in `[0, gene_num)`.
//! - **Ranked population**: genomes paired with costs, always sorted
//!   ascending by cost; supports ordered insertion and linear merge.
//! - **Parallel evaluation**: a batch is partitioned over a fixed worker
//!   pool, each worker ranks its slice privately, and the coordinator
//!   merges every local result after the join.
//! - **Breeding**: the better half survives unchanged, the worse half is
//!   replaced by uniform crossover plus per-gene mutation.
//! - **Search loop**: breed → evaluate → report for a fixed number of
//!   generations.
//!
//! # Example
//!
//! ```
//! use evosearch::fitness::HammingDistance;
//! use evosearch::search::{search, SearchConfig};
//!
//! let config = SearchConfig::default()
//!     .with_dna_length(4)
//!     .with_gene_num(2)
//!     .with_generation_size(8)
//!     .with_mutation_rate(0.1)
//!     .with_worker_count(2)
//!     .with_iterations(20)
//!     .with_seed(1);
//! let result = search(config, HammingDistance::new(vec![1, 0, 1, 0])).unwrap();
//! assert_eq!(result.history.len(), 20);
//! ```

pub mod breeding;
pub mod error;
pub mod fitness;
pub mod genome;
pub mod parallel;
pub mod population;
pub mod random;
pub mod search;

pub use error::{EvaluationError, Result, SearchError};
pub use genome::Genome;
pub use population::RankedPopulation;
