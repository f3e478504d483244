pub mod arena;
pub mod driver;
pub mod error;
pub mod evolution;
pub mod genome;
pub mod operators;
pub mod rng;
pub mod selection;
pub mod strategy;

// Re-export commonly used types for convenience
pub use error::{GeneticError, OptionExt, Result};
pub use evolution::{EvolutionEngine, Generation, GeneticOptions, GenomeFactory};
pub use genome::{GaAgent, Gene, Genome, GENE_ALPHABET_SIZE};
