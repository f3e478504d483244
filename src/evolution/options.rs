//! # GeneticOptions
//!
//! The `GeneticOptions` struct holds the run-wide genome configuration: the
//! genome length, the size of the gene blocks swapped during crossover, and the
//! upper bound on point mutations per offspring. It is set once per run and
//! read-only afterwards.
//!
//! ## Example
//!
//! ```rust
//! use wayfinder::evolution::GeneticOptions;
//!
//! // Positional constructor
//! let options = GeneticOptions::new(60, 4, 3).unwrap();
//! assert_eq!(options.get_block_count(), 15);
//!
//! // Builder, falling back to defaults for anything unset
//! let options = GeneticOptions::builder()
//!     .dna_size(40)
//!     .gene_size(5)
//!     .build()
//!     .unwrap();
//! assert_eq!(options.get_mutation_size(), GeneticOptions::default().get_mutation_size());
//! ```
//!
//! ## Validation
//!
//! `dna_size` and `gene_size` must be positive and `dna_size` must be a
//! multiple of `gene_size`, so that crossover covers every locus.
//! `mutation_size` may be zero, which turns mutation into a no-op.

use crate::error::{GeneticError, Result};

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneticOptions {
    dna_size: usize,
    gene_size: usize,
    mutation_size: usize,
}

impl GeneticOptions {
    /// Creates a validated `GeneticOptions` instance.
    ///
    /// # Arguments
    ///
    /// * `dna_size` - Number of genes in every genome.
    /// * `gene_size` - Number of genes in one crossover block.
    /// * `mutation_size` - Inclusive upper bound on mutated loci per offspring.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::Configuration` if the values are inconsistent.
    pub fn new(dna_size: usize, gene_size: usize, mutation_size: usize) -> Result<Self> {
        let options = Self {
            dna_size,
            gene_size,
            mutation_size,
        };
        options.validate()?;
        Ok(options)
    }

    /// Checks the invariants listed in the module docs.
    ///
    /// Deserialized options bypass [`GeneticOptions::new`], so consumers call
    /// this again before using them.
    pub fn validate(&self) -> Result<()> {
        if self.dna_size == 0 {
            return Err(GeneticError::Configuration(
                "DNA size cannot be zero".to_string(),
            ));
        }

        if self.gene_size == 0 {
            return Err(GeneticError::Configuration(
                "Gene size cannot be zero".to_string(),
            ));
        }

        if self.dna_size % self.gene_size != 0 {
            return Err(GeneticError::Configuration(format!(
                "DNA size ({}) must be a multiple of gene size ({})",
                self.dna_size, self.gene_size
            )));
        }

        Ok(())
    }

    pub fn get_dna_size(&self) -> usize {
        self.dna_size
    }

    pub fn get_gene_size(&self) -> usize {
        self.gene_size
    }

    pub fn get_mutation_size(&self) -> usize {
        self.mutation_size
    }

    /// Number of whole gene blocks in a genome.
    pub fn get_block_count(&self) -> usize {
        self.dna_size / self.gene_size
    }

    /// Returns a builder for creating a `GeneticOptions` instance.
    pub fn builder() -> GeneticOptionsBuilder {
        GeneticOptionsBuilder::default()
    }
}

impl Default for GeneticOptions {
    fn default() -> Self {
        Self {
            dna_size: 100,
            gene_size: 5,
            mutation_size: 3,
        }
    }
}

/// Builder for `GeneticOptions`.
///
/// Provides a fluent interface for constructing `GeneticOptions` instances.
#[derive(Debug, Clone, Default)]
pub struct GeneticOptionsBuilder {
    dna_size: Option<usize>,
    gene_size: Option<usize>,
    mutation_size: Option<usize>,
}

impl GeneticOptionsBuilder {
    /// Sets the genome length.
    pub fn dna_size(mut self, value: usize) -> Self {
        self.dna_size = Some(value);
        self
    }

    /// Sets the crossover block size.
    pub fn gene_size(mut self, value: usize) -> Self {
        self.gene_size = Some(value);
        self
    }

    /// Sets the mutation bound.
    pub fn mutation_size(mut self, value: usize) -> Self {
        self.mutation_size = Some(value);
        self
    }

    /// Builds and validates the `GeneticOptions` instance.
    pub fn build(self) -> Result<GeneticOptions> {
        let defaults = GeneticOptions::default();
        GeneticOptions::new(
            self.dna_size.unwrap_or(defaults.dna_size),
            self.gene_size.unwrap_or(defaults.gene_size),
            self.mutation_size.unwrap_or(defaults.mutation_size),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(GeneticOptions::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_zero_dna_size() {
        match GeneticOptions::new(0, 5, 1) {
            Err(GeneticError::Configuration(msg)) => {
                assert!(msg.contains("DNA size cannot be zero"));
            }
            _ => panic!("Expected Configuration error"),
        }
    }

    #[test]
    fn test_rejects_zero_gene_size() {
        match GeneticOptions::new(10, 0, 1) {
            Err(GeneticError::Configuration(msg)) => {
                assert!(msg.contains("Gene size cannot be zero"));
            }
            _ => panic!("Expected Configuration error"),
        }
    }

    #[test]
    fn test_rejects_unaligned_blocks() {
        match GeneticOptions::new(10, 4, 1) {
            Err(GeneticError::Configuration(msg)) => {
                assert!(msg.contains("multiple of gene size"));
            }
            _ => panic!("Expected Configuration error"),
        }
    }

    #[test]
    fn test_zero_mutation_size_is_valid() {
        let options = GeneticOptions::new(12, 3, 0).unwrap();
        assert_eq!(options.get_mutation_size(), 0);
        assert_eq!(options.get_block_count(), 4);
    }

    #[test]
    fn test_builder_validates() {
        let result = GeneticOptions::builder().dna_size(7).gene_size(2).build();
        assert!(result.is_err());

        let options = GeneticOptions::builder()
            .dna_size(8)
            .gene_size(2)
            .mutation_size(1)
            .build()
            .unwrap();
        assert_eq!(options, GeneticOptions::new(8, 2, 1).unwrap());
    }
}
