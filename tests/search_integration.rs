//! End-to-end search scenarios.

use evosearch::fitness::HammingDistance;
use evosearch::search::{search, EvolutionarySearch, NullReporter, SearchConfig, SearchState};
use evosearch::{EvaluationError, Genome, SearchError};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn hamming_config(seed: u64) -> SearchConfig {
    SearchConfig::default()
        .with_dna_length(4)
        .with_gene_num(2)
        .with_generation_size(8)
        .with_mutation_rate(0.2)
        .with_worker_count(3)
        .with_seed(seed)
}

#[test]
fn target_genome_is_discovered() {
    init_logger();
    let target = HammingDistance::new(vec![1, 0, 1, 0]);

    let mut hits = 0;
    for seed in 0..20 {
        let mut s = EvolutionarySearch::new(hamming_config(seed), target.clone())
            .unwrap()
            .with_reporter(NullReporter);
        let initial = s.init().unwrap().best().unwrap();
        let result = s.run(20).unwrap();

        let min_seen = result
            .history
            .iter()
            .map(|r| r.best_cost)
            .fold(initial, f64::min);
        assert_eq!(result.best_cost, min_seen, "seed {seed}");
        assert_eq!(s.state(), SearchState::Done);

        if result.best_cost == 0.0 {
            assert_eq!(result.best.genes(), &[1, 0, 1, 0]);
            hits += 1;
        }
    }
    // Discovery is probabilistic; nearly every seed must find the target.
    assert!(hits >= 17, "target found in only {hits}/20 runs");
}

#[test]
fn logs_through_default_reporter() {
    init_logger();
    let result = search(
        hamming_config(123).with_iterations(3),
        HammingDistance::new(vec![1, 0, 1, 0]),
    )
    .unwrap();
    assert_eq!(result.generations, 3);
    assert_eq!(result.seed, 123);
}

#[test]
fn larger_problem_improves() {
    init_logger();
    let target: Vec<usize> = (0..24).map(|i| i % 4).collect();
    let config = SearchConfig::default()
        .with_dna_length(24)
        .with_gene_num(4)
        .with_generation_size(40)
        .with_mutation_rate(0.05)
        .with_worker_count(4)
        .with_seed(42);
    let mut s = EvolutionarySearch::new(config, HammingDistance::new(target))
        .unwrap()
        .with_reporter(NullReporter);
    let initial = s.init().unwrap().best().unwrap();
    let result = s.run(60).unwrap();
    assert!(
        result.best_cost < initial,
        "expected improvement from {initial}, got {}",
        result.best_cost
    );
}

#[test]
fn invalid_configuration_rejected_before_evaluation() {
    let calls = std::sync::atomic::AtomicUsize::new(0);
    let eval = |_: &Genome| -> Result<f64, EvaluationError> {
        calls.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
        Ok(0.0)
    };
    let err = search(hamming_config(1).with_generation_size(5), &eval).unwrap_err();
    assert!(matches!(err, SearchError::InvalidConfiguration(_)));
    assert_eq!(calls.load(std::sync::atomic::Ordering::SeqCst), 0);
}

#[test]
fn evaluator_failure_surfaces() {
    let eval = |g: &Genome| -> Result<f64, EvaluationError> {
        if g.genes()[0] == 1 {
            Err(EvaluationError::new("no convergence"))
        } else {
            Ok(1.0)
        }
    };
    // Sixteen random 4-gene genomes: some start with 1 for any practical seed.
    let config = hamming_config(8).with_generation_size(16);
    let err = search(config, eval).unwrap_err();
    assert_eq!(err, SearchError::Evaluation(EvaluationError::new("no convergence")));
}
