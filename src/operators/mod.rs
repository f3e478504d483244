//! Genetic operators applied to offspring: block crossover and bounded point
//! mutation.
pub mod crossover;
pub mod mutation;

pub use crossover::BlockCrossover;
pub use mutation::PointMutation;
