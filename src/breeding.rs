//! Breeding: elitist replacement with uniform crossover and gene mutation.
//!
//! # Selection Policy
//!
//! Given a ranked population of size `n` (even):
//!
//! - Ranks `0 .. n/2` (the elite) are copied unchanged into positions
//!   `0 .. n/2` of the next batch.
//! - For `i` in `0 .. n/2`, the weak individual at rank `j = n - i - 1` is
//!   replaced by `crossover_mutate(pop[j], pop[a])`, where `a` is drawn
//!   uniformly from `0 .. n`. All parents are read from the previous
//!   population, never from offspring produced in the same call.
//!
//! The weakest individuals are thus always used as the first parent: the
//! elite drives the search through the random second parent while the
//! bottom half keeps diversity.

use rand::Rng;

use crate::genome::Genome;
use crate::population::RankedPopulation;

/// Uniform crossover followed by per-gene mutation.
///
/// For every position independently:
///
/// 1. With probability 0.5 the gene is taken from `parent_b`, otherwise
///    from `parent_a`.
/// 2. With probability `mutation_rate` the gene is then overwritten with a
///    value drawn uniformly from `0 .. gene_num`, regardless of step 1.
///
/// Parents are not modified; the offspring is a fresh genome.
///
/// # Complexity
/// O(n) where n is the genome length
///
/// # Panics
/// Panics if the parents differ in length, if `mutation_rate` is outside
/// `[0, 1]`, or if `gene_num` is zero.
pub fn crossover_mutate<R: Rng>(
    parent_a: &Genome,
    parent_b: &Genome,
    mutation_rate: f64,
    gene_num: usize,
    rng: &mut R,
) -> Genome {
    assert_eq!(
        parent_a.len(),
        parent_b.len(),
        "parents must have equal length"
    );
    assert!(
        (0.0..=1.0).contains(&mutation_rate),
        "mutation_rate must be in [0, 1], got {mutation_rate}"
    );
    assert!(gene_num > 0, "gene_num must be positive");

    let mut child = parent_a.clone();
    for (gene, &donor) in child.genes_mut().iter_mut().zip(parent_b.genes()) {
        if rng.random_bool(0.5) {
            *gene = donor;
        }
        if rng.random_bool(mutation_rate) {
            *gene = rng.random_range(0..gene_num);
        }
    }
    child
}

/// Produces the next generation's unranked batch from a ranked population.
///
/// The returned vector has `generation_size` genomes: the elite half first,
/// in rank order, followed by the offspring that replace the weak half
/// (offspring of rank `j` sits at index `j`). Costs are unknown until the
/// batch is evaluated again.
///
/// # Panics
/// Panics if `population.len() != generation_size`, if `generation_size`
/// is odd, or under the conditions listed on [`crossover_mutate`].
pub fn breed<R: Rng>(
    population: &RankedPopulation,
    generation_size: usize,
    mutation_rate: f64,
    gene_num: usize,
    rng: &mut R,
) -> Vec<Genome> {
    assert_eq!(
        population.len(),
        generation_size,
        "population size must equal generation_size"
    );
    assert!(generation_size % 2 == 0, "generation_size must be even");

    let parents = population.genomes();
    let mut next = parents.to_vec();
    for i in 0..generation_size / 2 {
        let j = generation_size - i - 1;
        let a = rng.random_range(0..generation_size);
        next[j] = crossover_mutate(&parents[j], &parents[a], mutation_rate, gene_num, rng);
    }
    next
}
