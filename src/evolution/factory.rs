//! # GenomeFactory
//!
//! Produces random genomes of the configured length. Used to seed the first
//! generation and to reseed every agent after a total extinction.

use super::options::GeneticOptions;
use crate::{genome::Genome, rng::RandomNumberGenerator};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenomeFactory {
    dna_size: usize,
}

impl GenomeFactory {
    pub fn new(options: &GeneticOptions) -> Self {
        Self {
            dna_size: options.get_dna_size(),
        }
    }

    pub fn get_dna_size(&self) -> usize {
        self.dna_size
    }

    /// A genome of `dna_size` genes, each drawn independently and uniformly
    /// from the gene alphabet.
    pub fn create_random_genome(&self, rng: &mut RandomNumberGenerator) -> Genome {
        Genome::new((0..self.dna_size).map(|_| rng.gen_gene()).collect())
    }

    /// `count` independent random genomes.
    pub fn create_population(&self, count: usize, rng: &mut RandomNumberGenerator) -> Vec<Genome> {
        (0..count).map(|_| self.create_random_genome(rng)).collect()
    }
}
