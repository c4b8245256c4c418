//! Property-based tests for evosearch
//!
//! Uses proptest to verify the ranking, merge, partitioning and operator
//! invariants over random inputs.

use evosearch::breeding::crossover_mutate;
use evosearch::parallel::{evaluate_all, partition};
use evosearch::random::create_rng;
use evosearch::{EvaluationError, Genome, RankedPopulation};
use proptest::prelude::*;

fn entries() -> impl Strategy<Value = Vec<(Vec<usize>, u32)>> {
    prop::collection::vec((prop::collection::vec(0usize..4, 3), 0u32..20), 0..40)
}

fn ranked(entries: &[(Vec<usize>, u32)]) -> RankedPopulation {
    RankedPopulation::from_unsorted(
        entries
            .iter()
            .map(|(genes, cost)| (Genome::from(genes.clone()), *cost as f64)),
    )
}

fn multiset(pop: &RankedPopulation) -> Vec<(Genome, u64)> {
    let mut v: Vec<_> = pop.iter().map(|(g, c)| (g.clone(), c.to_bits())).collect();
    v.sort();
    v
}

fn gene_sum(g: &Genome) -> Result<f64, EvaluationError> {
    Ok(g.genes().iter().sum::<usize>() as f64)
}

proptest! {
    // ==================== Ranked population ====================

    #[test]
    fn insert_keeps_costs_sorted(entries in entries()) {
        let pop = ranked(&entries);
        prop_assert_eq!(pop.len(), entries.len());
        prop_assert!(pop.costs().windows(2).all(|w| w[0] <= w[1]));
        prop_assert_eq!(pop.genomes().len(), pop.costs().len());
    }

    #[test]
    fn merge_is_sorted_multiset_union(a in entries(), b in entries()) {
        let left = ranked(&a);
        let right = ranked(&b);

        let mut expected = multiset(&left);
        expected.extend(multiset(&right));
        expected.sort();

        let merged = left.merge(right);
        prop_assert_eq!(merged.len(), a.len() + b.len());
        prop_assert!(merged.is_ranked());
        prop_assert_eq!(multiset(&merged), expected);
    }

    #[test]
    fn best_and_worst_bound_all_costs(entries in entries()) {
        let pop = ranked(&entries);
        match (pop.best(), pop.worst()) {
            (Ok(best), Ok(worst)) => {
                prop_assert!(pop.costs().iter().all(|&c| best <= c && c <= worst));
            }
            _ => prop_assert!(pop.is_empty()),
        }
    }

    // ==================== Partitioning ====================

    #[test]
    fn partition_covers_exactly_once(total in 0usize..500, workers in 1usize..64) {
        let ranges = partition(total, workers);
        prop_assert_eq!(ranges.len(), workers);
        let mut next = 0;
        for r in &ranges {
            prop_assert_eq!(r.start, next);
            prop_assert!(r.end >= r.start);
            next = r.end;
        }
        prop_assert_eq!(next, total);
    }

    // ==================== Crossover ====================

    #[test]
    fn crossover_without_mutation_stays_in_parents(
        pair in (1usize..30).prop_flat_map(|n| (
            prop::collection::vec(0usize..6, n),
            prop::collection::vec(0usize..6, n),
        )),
        seed in any::<u64>(),
    ) {
        let (a, b) = pair;
        let (a, b) = (Genome::from(a), Genome::from(b));
        let mut rng = create_rng(seed);
        let child = crossover_mutate(&a, &b, 0.0, 6, &mut rng);
        prop_assert_eq!(child.len(), a.len());
        for (k, &v) in child.genes().iter().enumerate() {
            prop_assert!(v == a.genes()[k] || v == b.genes()[k]);
        }
    }

    #[test]
    fn crossover_stays_in_alphabet(
        genes in prop::collection::vec(0usize..3, 1..30),
        rate in 0.0f64..=1.0,
        seed in any::<u64>(),
    ) {
        let a = Genome::from(genes.clone());
        let b = Genome::from(genes.into_iter().rev().collect::<Vec<_>>());
        let mut rng = create_rng(seed);
        let child = crossover_mutate(&a, &b, rate, 3, &mut rng);
        prop_assert!(child.genes().iter().all(|&v| v < 3));
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    // ==================== Parallel evaluation ====================

    #[test]
    fn evaluate_all_covers_batch(
        genes in prop::collection::vec(prop::collection::vec(0usize..5, 4), 1..30),
    ) {
        let batch: Vec<Genome> = genes.into_iter().map(Genome::from).collect();
        let mut expected = batch.clone();
        expected.sort();

        for workers in [1, 2, batch.len()] {
            let pop = evaluate_all(&gene_sum, batch.clone(), workers).unwrap();
            prop_assert_eq!(pop.len(), batch.len());
            prop_assert!(pop.is_ranked());
            let mut got = pop.genomes().to_vec();
            got.sort();
            prop_assert_eq!(&got, &expected);
        }
    }
}
