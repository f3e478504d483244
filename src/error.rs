//! # Error Types
//!
//! This module defines the error type shared by the whole crate. Total
//! extinction of a population is *not* an error: the engine reports it as
//! [`Generation::Extinct`](crate::evolution::Generation::Extinct). Errors are
//! reserved for malformed configuration and malformed input.
//!
//! ## Examples
//!
//! Rejecting a configuration whose genome does not split into whole blocks:
//!
//! ```rust
//! use wayfinder::error::GeneticError;
//! use wayfinder::evolution::GeneticOptions;
//!
//! let result = GeneticOptions::new(10, 3, 2);
//! assert!(matches!(result, Err(GeneticError::Configuration(_))));
//! ```
//!
//! Using the `OptionExt` trait to convert `Option` to `Result`:
//!
//! ```rust
//! use wayfinder::error::{GeneticError, OptionExt};
//!
//! fn first_score(scores: &[u32]) -> wayfinder::error::Result<u32> {
//!     scores.first().copied().ok_or_else_genetic(|| GeneticError::EmptyPopulation)
//! }
//!
//! assert!(first_score(&[]).is_err());
//! ```

use thiserror::Error;

/// Represents errors that can occur while evolving or simulating agents.
#[derive(Error, Debug)]
pub enum GeneticError {
    /// Error that occurs when an invalid configuration is provided.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Error that occurs when an operation needs at least one individual.
    #[error("Empty population error: Cannot operate on an empty population")]
    EmptyPopulation,

    /// A genome did not have the configured length.
    #[error("Genome length error: expected {expected} genes, found {actual}")]
    GenomeLength { expected: usize, actual: usize },

    /// A breed strategy produced fewer genomes than the generation needs.
    #[error("Population size error: expected at least {expected} genomes, found {actual}")]
    PopulationSize { expected: usize, actual: usize },

    /// A gene value fell outside of the gene alphabet.
    #[error("Invalid gene {value} at locus {locus}")]
    InvalidGene { locus: usize, value: u8 },

    /// A report referenced an agent slot that does not exist.
    #[error("Agent index {index} out of range for {count} agents")]
    AgentIndex { index: usize, count: usize },

    /// Maze text could not be parsed.
    #[error("Maze parse error: {0}")]
    MazeParse(String),

    /// Error that occurs when an I/O operation fails.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized Result type for this crate.
pub type Result<T> = std::result::Result<T, GeneticError>;

/// Extension trait for Option to convert to Result with a custom error.
pub trait OptionExt<T> {
    /// Converts an `Option<T>` to a `Result<T, GeneticError>` using
    /// a closure to generate the error.
    fn ok_or_else_genetic<F>(self, err_fn: F) -> Result<T>
    where
        F: FnOnce() -> GeneticError;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_else_genetic<F>(self, err_fn: F) -> Result<T>
    where
        F: FnOnce() -> GeneticError,
    {
        self.ok_or_else(err_fn)
    }
}
