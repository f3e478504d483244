//! # BlockCrossover
//!
//! Uniform block crossover. The genome is cut into `dna_size / gene_size`
//! contiguous blocks starting at locus 0, and a single fair coin flip per
//! block decides which parent the whole block is copied from. Genes are never
//! mixed inside a block.
//!
//! The child buffer starts zeroed. When `dna_size` is not a multiple of
//! `gene_size`, the trailing loci past the last whole block are not covered by
//! any block and stay `0`. [`GeneticOptions`] rejects such configurations, so
//! this only happens when the operator is built with
//! [`BlockCrossover::with_sizes`].

use crate::{
    error::{GeneticError, Result},
    evolution::GeneticOptions,
    genome::Genome,
    rng::RandomNumberGenerator,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockCrossover {
    dna_size: usize,
    gene_size: usize,
}

impl BlockCrossover {
    pub fn new(options: &GeneticOptions) -> Self {
        Self {
            dna_size: options.get_dna_size(),
            gene_size: options.get_gene_size(),
        }
    }

    /// Builds the operator from raw sizes, allowing a block size that does not
    /// divide the genome length.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::Configuration` if either size is zero.
    pub fn with_sizes(dna_size: usize, gene_size: usize) -> Result<Self> {
        if dna_size == 0 || gene_size == 0 {
            return Err(GeneticError::Configuration(format!(
                "Crossover needs positive sizes, got dna size {} and gene size {}",
                dna_size, gene_size
            )));
        }
        Ok(Self {
            dna_size,
            gene_size,
        })
    }

    pub fn get_dna_size(&self) -> usize {
        self.dna_size
    }

    pub fn get_gene_size(&self) -> usize {
        self.gene_size
    }

    pub fn get_block_count(&self) -> usize {
        self.dna_size / self.gene_size
    }

    /// Produces a child from two parents of length `dna_size`.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::GenomeLength` if either parent has the wrong length.
    pub fn crossover(
        &self,
        parent_a: &Genome,
        parent_b: &Genome,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Genome> {
        parent_a.ensure_len(self.dna_size)?;
        parent_b.ensure_len(self.dna_size)?;

        let mut child = Genome::zeroed(self.dna_size);
        let genes = child.genes_mut();

        for block in 0..self.get_block_count() {
            let source = if rng.coin_flip() { parent_a } else { parent_b };
            let start = block * self.gene_size;
            let end = start + self.gene_size;
            genes[start..end].copy_from_slice(&source.genes()[start..end]);
        }

        Ok(child)
    }
}
