use std::fmt::Debug;

use crate::genome::GaAgent;

/// Trait for elite selection strategies.
///
/// A selection strategy picks the agents whose genomes survive into the next
/// generation unchanged and serve as parents for the offspring. An empty
/// selection signals extinction to the engine, so a strategy should only return
/// an empty vector when no agent deserves to survive.
///
/// # Examples
///
/// ```
/// use wayfinder::genome::{GaAgent, Genome};
/// use wayfinder::selection::{AverageFitnessSelection, SelectionStrategy};
///
/// let population = vec![
///     GaAgent::new(Genome::zeroed(4), 2),
///     GaAgent::new(Genome::zeroed(4), 6),
///     GaAgent::new(Genome::zeroed(4), 4),
/// ];
///
/// let elites = AverageFitnessSelection::new().select(&population);
///
/// // Mean is 4, so the agents scoring 6 and 4 survive, in input order.
/// assert_eq!(elites.len(), 2);
/// assert_eq!(elites[0].fitness, 6);
/// assert_eq!(elites[1].fitness, 4);
/// ```
pub trait SelectionStrategy: Debug + Send + Sync {
    /// Selects the elites of `population`, preserving input order.
    fn select(&self, population: &[GaAgent]) -> Vec<GaAgent>;
}
