//! Per-generation reporting.

use crate::genome::Genome;
use crate::population::RankedPopulation;

/// Summary emitted after every generation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GenerationReport {
    /// Zero-based index of the generation.
    pub generation: usize,

    /// Lowest cost in the generation.
    pub best_cost: f64,

    /// Highest cost in the generation.
    pub worst_cost: f64,
}

/// Sink for generation reports.
///
/// Closures taking `&GenerationReport` implement this trait, so a caller
/// can collect or forward reports without defining a type.
pub trait Reporter {
    /// Receives the report of a finished generation.
    fn report(&mut self, report: &GenerationReport);
}

impl<F> Reporter for F
where
    F: FnMut(&GenerationReport),
{
    fn report(&mut self, report: &GenerationReport) {
        self(report)
    }
}

/// Writes reports to the `log` facade at info level.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogReporter;

impl Reporter for LogReporter {
    fn report(&mut self, report: &GenerationReport) {
        log::info!(
            "generation {}\tbest {}\tworst {}",
            report.generation,
            report.best_cost,
            report.worst_cost
        );
    }
}

/// Discards every report.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullReporter;

impl Reporter for NullReporter {
    fn report(&mut self, _report: &GenerationReport) {}
}

/// Result of a search run.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Lowest-cost genome seen at any point of the run.
    pub best: Genome,

    /// Cost of [`best`](Self::best).
    pub best_cost: f64,

    /// Number of generations executed after initialization.
    pub generations: usize,

    /// Seed the run was started with.
    pub seed: u64,

    /// Report of every generation, in order.
    pub history: Vec<GenerationReport>,

    /// Population at the end of the run.
    pub population: RankedPopulation,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closure_reporter_collects() {
        let mut seen = Vec::new();
        {
            let mut reporter = |r: &GenerationReport| seen.push(r.generation);
            for generation in 0..3 {
                reporter.report(&GenerationReport {
                    generation,
                    best_cost: 0.0,
                    worst_cost: 1.0,
                });
            }
        }
        assert_eq!(seen, vec![0, 1, 2]);
    }

    #[test]
    fn test_builtin_reporters_accept_reports() {
        let report = GenerationReport {
            generation: 0,
            best_cost: 1.0,
            worst_cost: 2.0,
        };
        LogReporter.report(&report);
        NullReporter.report(&report);
    }
}
