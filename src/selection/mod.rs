pub mod average;
pub mod selection_strategy;

pub use average::{mean_fitness, AverageFitnessSelection};
pub use selection_strategy::SelectionStrategy;
