//! # BreedStrategy
//!
//! The `BreedStrategy` trait defines the interface for strategies responsible for
//! producing the next generation's genomes from a set of elites.
pub mod elite;

use std::fmt::Debug;

use crate::{
    error::Result,
    evolution::GeneticOptions,
    genome::{GaAgent, Genome},
    rng::RandomNumberGenerator,
};

/// # BreedStrategy
///
/// Produces the genomes of the next generation from the elites selected in the
/// current one.
pub trait BreedStrategy
where
    Self: Debug + Clone + Send + Sync,
{
    /// Breeds the next generation.
    ///
    /// ## Parameters
    ///
    /// - `elites`: The agents that survived selection, in selection order.
    /// - `target_size`: The requested size of the next generation.
    /// - `rng`: The random number generator driving parent choice, crossover
    ///   and mutation.
    ///
    /// ## Errors
    ///
    /// This method can fail if:
    /// - The elites slice is empty
    /// - An elite genome has the wrong length
    fn breed(
        &self,
        elites: &[GaAgent],
        target_size: usize,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<Genome>>;

    /// Checks that the strategy can breed genomes of the shape `options`
    /// describes. Called once when an engine is built.
    ///
    /// ## Errors
    ///
    /// Returns `GeneticError::Configuration` on a mismatch. The default
    /// accepts any options.
    fn check_options(&self, _options: &GeneticOptions) -> Result<()> {
        Ok(())
    }
}

pub use elite::EliteBreedStrategy;
