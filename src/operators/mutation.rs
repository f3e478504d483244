//! # PointMutation
//!
//! Bounded random point mutation. Each call draws a trial count uniformly from
//! `[0, mutation_size]`, then for every trial overwrites a uniformly chosen
//! locus with a fresh random gene. Loci may be hit more than once and a fresh
//! gene may equal the old one, so at most `mutation_size` loci change.

use tracing::trace;

use crate::{evolution::GeneticOptions, genome::Genome, rng::RandomNumberGenerator};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointMutation {
    mutation_size: usize,
}

impl PointMutation {
    pub fn new(options: &GeneticOptions) -> Self {
        Self {
            mutation_size: options.get_mutation_size(),
        }
    }

    pub fn get_mutation_size(&self) -> usize {
        self.mutation_size
    }

    /// Mutates `genome` in place and returns the number of trials performed.
    pub fn mutate(&self, genome: &mut Genome, rng: &mut RandomNumberGenerator) -> usize {
        let mutation_count = rng.gen_count_inclusive(self.mutation_size);
        if genome.is_empty() {
            return 0;
        }

        let len = genome.len();
        let genes = genome.genes_mut();
        for _ in 0..mutation_count {
            let locus = rng.gen_index(len);
            genes[locus] = rng.gen_gene();
        }

        trace!(mutation_count, "mutated offspring");
        mutation_count
    }
}
