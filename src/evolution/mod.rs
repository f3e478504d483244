pub mod builder;
pub mod engine;
pub mod factory;
pub mod options;

pub use builder::EvolutionEngineBuilder;
pub use engine::{EvolutionEngine, Generation};
pub use factory::GenomeFactory;
pub use options::{GeneticOptions, GeneticOptionsBuilder};
