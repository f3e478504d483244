//! # Genome
//!
//! A [`Genome`] is a fixed-length sequence of genes, each drawn from a six
//! symbol alphabet. During a simulation round an agent reads one gene per
//! action interval and decodes it into an [`Action`]:
//!
//! | gene | action                |
//! |------|-----------------------|
//! | 0    | stand still           |
//! | 1    | move, heading 90°     |
//! | 2    | move, heading 180°    |
//! | 3    | move, heading 270°    |
//! | 4    | move, heading 0°      |
//! | 5    | stand still           |
//!
//! A [`GaAgent`] pairs a genome with the fitness it earned in one round and
//! is the unit the evolutionary engine works on.
//!
//! ## Example
//!
//! ```rust
//! use wayfinder::genome::{Action, Genome, Heading};
//!
//! let genome = Genome::try_new(vec![0, 1, 4]).unwrap();
//! assert_eq!(genome.action_at(0), Some(Action::Idle));
//! assert_eq!(genome.action_at(1), Some(Action::Move(Heading::East)));
//! assert_eq!(genome.action_at(2), Some(Action::Move(Heading::North)));
//! assert_eq!(genome.action_at(3), None);
//! ```

use std::ops::Index;

use crate::error::{GeneticError, Result};

/// A single gene.
pub type Gene = u8;

/// Number of distinct gene values. Genes live in `[0, GENE_ALPHABET_SIZE)`.
pub const GENE_ALPHABET_SIZE: Gene = 6;

/// An ordered, fixed-length sequence of genes.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Genome {
    genes: Vec<Gene>,
}

impl Genome {
    /// Wraps a gene vector without checking the alphabet.
    pub fn new(genes: Vec<Gene>) -> Self {
        Self { genes }
    }

    /// Wraps a gene vector, rejecting values outside the alphabet.
    pub fn try_new(genes: Vec<Gene>) -> Result<Self> {
        if let Some((locus, &value)) = genes
            .iter()
            .enumerate()
            .find(|(_, gene)| **gene >= GENE_ALPHABET_SIZE)
        {
            return Err(GeneticError::InvalidGene { locus, value });
        }
        Ok(Self { genes })
    }

    /// A genome of `len` zero genes.
    pub fn zeroed(len: usize) -> Self {
        Self {
            genes: vec![0; len],
        }
    }

    pub fn len(&self) -> usize {
        self.genes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }

    pub fn genes(&self) -> &[Gene] {
        &self.genes
    }

    pub(crate) fn genes_mut(&mut self) -> &mut [Gene] {
        &mut self.genes
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Gene> {
        self.genes.iter()
    }

    /// Decodes the gene at `index`, or `None` once the genome is exhausted.
    pub fn action_at(&self, index: usize) -> Option<Action> {
        self.genes.get(index).copied().map(Action::from_gene)
    }

    /// Returns an error unless the genome has exactly `expected` genes.
    pub fn ensure_len(&self, expected: usize) -> Result<()> {
        if self.genes.len() != expected {
            return Err(GeneticError::GenomeLength {
                expected,
                actual: self.genes.len(),
            });
        }
        Ok(())
    }
}

impl From<Vec<Gene>> for Genome {
    fn from(genes: Vec<Gene>) -> Self {
        Self::new(genes)
    }
}

impl AsRef<[Gene]> for Genome {
    fn as_ref(&self) -> &[Gene] {
        &self.genes
    }
}

impl Index<usize> for Genome {
    type Output = Gene;

    fn index(&self, index: usize) -> &Self::Output {
        &self.genes[index]
    }
}

impl<'a> IntoIterator for &'a Genome {
    type Item = &'a Gene;
    type IntoIter = std::slice::Iter<'a, Gene>;

    fn into_iter(self) -> Self::IntoIter {
        self.genes.iter()
    }
}

/// One of the four compass headings an agent can face.
///
/// `North` is heading 0°, and headings increase clockwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Heading {
    North,
    East,
    South,
    West,
}

impl Heading {
    /// Heading after `quarter_turns` clockwise quarter turns from north.
    pub fn from_quarter_turns(quarter_turns: u8) -> Self {
        match quarter_turns % 4 {
            0 => Heading::North,
            1 => Heading::East,
            2 => Heading::South,
            _ => Heading::West,
        }
    }

    pub fn degrees(self) -> u16 {
        match self {
            Heading::North => 0,
            Heading::East => 90,
            Heading::South => 180,
            Heading::West => 270,
        }
    }

    /// Grid offset as `(row, column)`, rows growing southwards.
    pub fn offset(self) -> (isize, isize) {
        match self {
            Heading::North => (-1, 0),
            Heading::East => (0, 1),
            Heading::South => (1, 0),
            Heading::West => (0, -1),
        }
    }
}

/// What an agent does during one action interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Idle,
    Move(Heading),
}

impl Action {
    /// Genes 1 through 4 move with heading `(gene % 4) * 90°`; anything else idles.
    pub fn from_gene(gene: Gene) -> Self {
        match gene {
            1..=4 => Action::Move(Heading::from_quarter_turns(gene % 4)),
            _ => Action::Idle,
        }
    }
}

/// A genome annotated with the fitness it earned in one simulation round.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GaAgent {
    pub genome: Genome,
    pub fitness: u32,
}

impl GaAgent {
    pub fn new(genome: Genome, fitness: u32) -> Self {
        Self { genome, fitness }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gene_decoding_table() {
        assert_eq!(Action::from_gene(0), Action::Idle);
        assert_eq!(Action::from_gene(1), Action::Move(Heading::East));
        assert_eq!(Action::from_gene(2), Action::Move(Heading::South));
        assert_eq!(Action::from_gene(3), Action::Move(Heading::West));
        assert_eq!(Action::from_gene(4), Action::Move(Heading::North));
        assert_eq!(Action::from_gene(5), Action::Idle);
    }

    #[test]
    fn test_heading_degrees_match_quarter_turns() {
        for gene in 1..=4u8 {
            if let Action::Move(heading) = Action::from_gene(gene) {
                assert_eq!(heading.degrees(), u16::from(gene % 4) * 90);
            } else {
                panic!("gene {} should move", gene);
            }
        }
    }

    #[test]
    fn test_try_new_rejects_out_of_alphabet() {
        let result = Genome::try_new(vec![0, 5, 6, 1]);
        match result {
            Err(GeneticError::InvalidGene { locus, value }) => {
                assert_eq!(locus, 2);
                assert_eq!(value, 6);
            }
            _ => panic!("Expected InvalidGene error"),
        }
    }

    #[test]
    fn test_action_at_past_end() {
        let genome = Genome::zeroed(2);
        assert_eq!(genome.action_at(1), Some(Action::Idle));
        assert_eq!(genome.action_at(2), None);
    }

    #[test]
    fn test_ensure_len() {
        let genome = Genome::from(vec![1, 2, 3]);
        assert!(genome.ensure_len(3).is_ok());
        assert!(matches!(
            genome.ensure_len(4),
            Err(GeneticError::GenomeLength {
                expected: 4,
                actual: 3
            })
        ));
    }
}
