//! Generational search loop.
//!
//! [`EvolutionarySearch`] drives the cycle
//! breed → evaluate (parallel) → report → repeat.
//!
//! The loop is sequential: concurrency only exists inside one
//! generation's fitness evaluation, on the worker pool owned by the
//! search.

use crate::breeding::breed;
use crate::error::{Result, SearchError};
use crate::fitness::FitnessEvaluator;
use crate::genome::Genome;
use crate::parallel::ParallelEvaluator;
use crate::population::RankedPopulation;
use crate::random::{create_rng, fresh_seed, SearchRng};

use super::config::SearchConfig;
use super::report::{GenerationReport, LogReporter, Reporter, SearchResult};

/// Lifecycle of a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchState {
    /// Created, no population yet.
    Uninitialized,
    /// Initial population evaluated; generations may be stepped.
    Running,
    /// [`run`](EvolutionarySearch::run) completed.
    Done,
}

/// An evolutionary search over a fixed configuration and evaluator.
///
/// # Usage
///
/// ```
/// use evosearch::fitness::HammingDistance;
/// use evosearch::search::{EvolutionarySearch, NullReporter, SearchConfig};
///
/// let config = SearchConfig::default()
///     .with_dna_length(4)
///     .with_gene_num(2)
///     .with_generation_size(8)
///     .with_mutation_rate(0.1)
///     .with_worker_count(2)
///     .with_seed(42);
/// let evaluator = HammingDistance::new(vec![1, 0, 1, 0]);
///
/// let mut search = EvolutionarySearch::new(config, evaluator)
///     .unwrap()
///     .with_reporter(NullReporter);
/// search.init().unwrap();
/// let result = search.run(20).unwrap();
/// assert_eq!(result.generations, 20);
/// ```
pub struct EvolutionarySearch<E> {
    config: SearchConfig,
    evaluator: E,
    workers: ParallelEvaluator,
    reporter: Box<dyn Reporter + Send>,
    seed: u64,
    rng: SearchRng,
    state: SearchState,
    population: RankedPopulation,
    generation: usize,
    best: Option<(Genome, f64)>,
    history: Vec<GenerationReport>,
}

impl<E: FitnessEvaluator> EvolutionarySearch<E> {
    /// Validates `config` and starts the worker pool.
    ///
    /// Nothing is evaluated yet. Reports go to [`LogReporter`] unless
    /// replaced with [`with_reporter`](Self::with_reporter).
    pub fn new(config: SearchConfig, evaluator: E) -> Result<Self> {
        config.validate()?;
        let workers = ParallelEvaluator::new(config.worker_count)?;
        let seed = config.seed.unwrap_or_else(fresh_seed);
        log::debug!(
            "search configured: {} genomes x {} genes over {} values, {} workers, seed {}",
            config.generation_size,
            config.dna_length,
            config.gene_num,
            config.worker_count,
            seed
        );
        Ok(Self {
            config,
            evaluator,
            workers,
            reporter: Box::new(LogReporter),
            seed,
            rng: create_rng(seed),
            state: SearchState::Uninitialized,
            population: RankedPopulation::new(),
            generation: 0,
            best: None,
            history: Vec::new(),
        })
    }

    /// Replaces the generation reporter.
    pub fn with_reporter<R: Reporter + Send + 'static>(mut self, reporter: R) -> Self {
        self.reporter = Box::new(reporter);
        self
    }

    /// Generates and evaluates the initial population.
    ///
    /// Transitions `Uninitialized → Running`. The initial population is
    /// not reported as a generation. On evaluator failure the search stays
    /// `Uninitialized`.
    pub fn init(&mut self) -> Result<&RankedPopulation> {
        if self.state != SearchState::Uninitialized {
            return Err(SearchError::InvalidState(format!(
                "init called in state {:?}",
                self.state
            )));
        }

        let batch: Vec<Genome> = (0..self.config.generation_size)
            .map(|_| Genome::random(self.config.dna_length, self.config.gene_num, &mut self.rng))
            .collect();
        let population = self.workers.evaluate_all(&self.evaluator, batch)?;
        log::debug!(
            "initial population: best {} worst {}",
            population.best()?,
            population.worst()?
        );

        self.track_best(&population)?;
        self.population = population;
        self.state = SearchState::Running;
        Ok(&self.population)
    }

    /// Runs one generation: breed, evaluate, report.
    ///
    /// If evaluation fails the generation is aborted: the error is returned,
    /// the current population is kept and the generation counter does not
    /// advance.
    pub fn step(&mut self) -> Result<GenerationReport> {
        if self.state != SearchState::Running {
            return Err(SearchError::InvalidState(format!(
                "step called in state {:?}",
                self.state
            )));
        }

        let batch = breed(
            &self.population,
            self.config.generation_size,
            self.config.mutation_rate,
            self.config.gene_num,
            &mut self.rng,
        );
        let next = self.workers.evaluate_all(&self.evaluator, batch)?;

        let report = GenerationReport {
            generation: self.generation,
            best_cost: next.best()?,
            worst_cost: next.worst()?,
        };
        self.track_best(&next)?;
        self.population = next;
        self.generation += 1;
        self.history.push(report);
        self.reporter.report(&report);
        Ok(report)
    }

    /// Executes exactly `iterations` generations and finishes the search.
    ///
    /// Initializes first if [`init`](Self::init) has not been called.
    /// Transitions to `Done` on normal completion; on error the search
    /// stays `Running` and may be resumed with [`step`](Self::step).
    pub fn run(&mut self, iterations: usize) -> Result<SearchResult> {
        match self.state {
            SearchState::Uninitialized => {
                self.init()?;
            }
            SearchState::Running => {}
            SearchState::Done => {
                return Err(SearchError::InvalidState("run called on a finished search".into()));
            }
        }

        for _ in 0..iterations {
            self.step()?;
        }
        self.state = SearchState::Done;
        log::debug!("search finished after {} generations", self.generation);
        self.result()
    }

    /// Snapshot of the run so far.
    ///
    /// Fails with [`SearchError::EmptyPopulation`] before initialization.
    pub fn result(&self) -> Result<SearchResult> {
        let (best, best_cost) = self.best.clone().ok_or(SearchError::EmptyPopulation)?;
        Ok(SearchResult {
            best,
            best_cost,
            generations: self.generation,
            seed: self.seed,
            history: self.history.clone(),
            population: self.population.clone(),
        })
    }

    /// Current lifecycle state.
    pub fn state(&self) -> SearchState {
        self.state
    }

    /// Current ranked population. Empty before initialization.
    pub fn population(&self) -> &RankedPopulation {
        &self.population
    }

    /// Number of generations stepped so far.
    pub fn generation(&self) -> usize {
        self.generation
    }

    /// Seed the run was started with.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// The run configuration.
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    fn track_best(&mut self, population: &RankedPopulation) -> Result<()> {
        let cost = population.best()?;
        let improved = match &self.best {
            Some((_, best)) => cost < *best,
            None => true,
        };
        if improved {
            self.best = Some((population.best_genome()?.clone(), cost));
        }
        Ok(())
    }
}

/// Runs a complete search: init followed by `config.iterations` generations.
///
/// Reports are written through [`LogReporter`].
pub fn search<E: FitnessEvaluator>(config: SearchConfig, evaluator: E) -> Result<SearchResult> {
    let iterations = config.iterations;
    EvolutionarySearch::new(config, evaluator)?.run(iterations)
}

// ============================================================================
// Tests
// ============================================================================
