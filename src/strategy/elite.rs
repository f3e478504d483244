use tracing::trace;

use super::BreedStrategy;
use crate::{
    error::{GeneticError, Result},
    evolution::GeneticOptions,
    genome::{GaAgent, Genome},
    operators::{BlockCrossover, PointMutation},
    rng::RandomNumberGenerator,
};

/// # EliteBreedStrategy
///
/// Every elite survives verbatim, in selection order. The rest of the
/// generation is filled with offspring: two parents drawn uniformly with
/// replacement from the elites are combined with block crossover, and the child
/// is then point-mutated in place. The same elite may be drawn twice, in which
/// case the child starts as an exact copy.
///
/// There is no truncation. If there are more elites than `target_size`, all of
/// them are returned and no offspring are bred.
#[derive(Debug, Clone)]
pub struct EliteBreedStrategy {
    crossover: BlockCrossover,
    mutation: PointMutation,
}

impl EliteBreedStrategy {
    pub fn new(options: &GeneticOptions) -> Self {
        Self::with_operators(BlockCrossover::new(options), PointMutation::new(options))
    }

    /// Builds the strategy from explicit operators.
    pub fn with_operators(crossover: BlockCrossover, mutation: PointMutation) -> Self {
        Self {
            crossover,
            mutation,
        }
    }

    pub fn crossover(&self) -> &BlockCrossover {
        &self.crossover
    }

    pub fn mutation(&self) -> &PointMutation {
        &self.mutation
    }
}

impl BreedStrategy for EliteBreedStrategy {
    fn breed(
        &self,
        elites: &[GaAgent],
        target_size: usize,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<Genome>> {
        if elites.is_empty() {
            return Err(GeneticError::EmptyPopulation);
        }

        let offspring_count = target_size.saturating_sub(elites.len());
        let mut next = Vec::with_capacity(elites.len() + offspring_count);

        next.extend(elites.iter().map(|elite| elite.genome.clone()));

        for offspring in 0..offspring_count {
            let parent_a = &elites[rng.gen_index(elites.len())];
            let parent_b = &elites[rng.gen_index(elites.len())];

            let mut child = self
                .crossover
                .crossover(&parent_a.genome, &parent_b.genome, rng)?;
            self.mutation.mutate(&mut child, rng);

            trace!(
                offspring,
                parent_a = parent_a.fitness,
                parent_b = parent_b.fitness,
                "bred offspring"
            );
            next.push(child);
        }

        Ok(next)
    }

    fn check_options(&self, options: &GeneticOptions) -> Result<()> {
        if self.crossover.get_dna_size() != options.get_dna_size() {
            return Err(GeneticError::Configuration(format!(
                "Crossover breeds {} genes, options expect {}",
                self.crossover.get_dna_size(),
                options.get_dna_size()
            )));
        }
        Ok(())
    }
}
