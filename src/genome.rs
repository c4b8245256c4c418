//! Fixed-length integer genomes.

use rand::Rng;

/// A candidate solution: a fixed-length sequence of genes in `[0, gene_num)`.
///
/// Genomes are plain values. Cloning copies the genes, so an offspring
/// never shares storage with its parents.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Genome {
    genes: Vec<usize>,
}

impl Genome {
    /// Wraps an existing gene sequence.
    pub fn new(genes: Vec<usize>) -> Self {
        Self { genes }
    }

    /// Generates a genome of `dna_length` genes, each uniform in `[0, gene_num)`.
    ///
    /// # Panics
    /// Panics if `gene_num` is zero and `dna_length` is not.
    pub fn random<R: Rng>(dna_length: usize, gene_num: usize, rng: &mut R) -> Self {
        let genes = (0..dna_length)
            .map(|_| rng.random_range(0..gene_num))
            .collect();
        Self { genes }
    }

    /// The gene values.
    pub fn genes(&self) -> &[usize] {
        &self.genes
    }

    /// Number of genes.
    pub fn len(&self) -> usize {
        self.genes.len()
    }

    /// Returns `true` if the genome has no genes.
    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }

    /// Number of positions at which `self` and `other` differ.
    ///
    /// Positions beyond the shorter genome count as mismatches.
    pub fn hamming_distance(&self, other: &Genome) -> usize {
        let common = self
            .genes
            .iter()
            .zip(&other.genes)
            .filter(|(a, b)| a != b)
            .count();
        common + self.genes.len().abs_diff(other.genes.len())
    }

    pub(crate) fn genes_mut(&mut self) -> &mut [usize] {
        &mut self.genes
    }
}

impl From<Vec<usize>> for Genome {
    fn from(genes: Vec<usize>) -> Self {
        Self::new(genes)
    }
}

impl AsRef<[usize]> for Genome {
    fn as_ref(&self) -> &[usize] {
        &self.genes
    }
}

/// Generates a random genome. Free-function form of [`Genome::random`].
pub fn generate_genome<R: Rng>(dna_length: usize, gene_num: usize, rng: &mut R) -> Genome {
    Genome::random(dna_length, gene_num, rng)
}
