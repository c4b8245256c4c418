//! Generational evolutionary search.
//!
//! Ties the pieces together: random initial genomes, parallel evaluation
//! into a [`RankedPopulation`](crate::population::RankedPopulation), and
//! elitist breeding, repeated for a fixed number of generations.
//!
//! # Key Types
//!
//! - [`SearchConfig`]: Run parameters (genome shape, population, rates, workers)
//! - [`EvolutionarySearch`]: Stateful loop with `init` / `step` / `run`
//! - [`Reporter`]: Sink for per-generation [`GenerationReport`]s
//! - [`SearchResult`]: Best genome ever seen plus run history

mod config;
mod report;
mod runner;

pub use config::SearchConfig;
pub use report::{GenerationReport, LogReporter, NullReporter, Reporter, SearchResult};
pub use runner::{search, EvolutionarySearch, SearchState};
