//! Fitness evaluator contract.
//!
//! The engine treats the evaluator as an opaque, possibly expensive
//! function from a genome to a non-negative cost. Lower is better.

use crate::error::EvaluationError;
use crate::genome::Genome;

/// Computes the cost of a genome.
///
/// # Contract
///
/// - The returned cost must be finite and `>= 0`. Anything else is
///   rejected by the engine as an evaluator failure.
/// - The result must depend only on the genome. Implementations build any
///   simulation state they need inside `evaluate` and drop it before
///   returning, so calls never observe each other.
/// - Calls are made concurrently from several worker threads, hence the
///   `Send + Sync` bound.
pub trait FitnessEvaluator: Send + Sync {
    /// Evaluates `genome` and returns its cost.
    fn evaluate(&self, genome: &Genome) -> Result<f64, EvaluationError>;
}

impl<F> FitnessEvaluator for F
where
    F: Fn(&Genome) -> Result<f64, EvaluationError> + Send + Sync,
{
    fn evaluate(&self, genome: &Genome) -> Result<f64, EvaluationError> {
        self(genome)
    }
}

/// Cost equal to the number of genes that differ from a fixed target.
///
/// Useful as a cheap, deterministic stand-in for a real target process.
#[derive(Debug, Clone)]
pub struct HammingDistance {
    target: Genome,
}

impl HammingDistance {
    /// Creates an evaluator that scores genomes against `target`.
    pub fn new(target: impl Into<Genome>) -> Self {
        Self {
            target: target.into(),
        }
    }

    /// The target genome. Its cost is zero.
    pub fn target(&self) -> &Genome {
        &self.target
    }
}

impl FitnessEvaluator for HammingDistance {
    fn evaluate(&self, genome: &Genome) -> Result<f64, EvaluationError> {
        if genome.len() != self.target.len() {
            return Err(EvaluationError::new(format!(
                "genome length {} does not match target length {}",
                genome.len(),
                self.target.len()
            )));
        }
        Ok(genome.hamming_distance(&self.target) as f64)
    }
}
