use tracing::debug;

use super::{factory::GenomeFactory, options::GeneticOptions};
use crate::{
    error::{GeneticError, Result},
    genome::{GaAgent, Genome},
    rng::RandomNumberGenerator,
    selection::{mean_fitness, AverageFitnessSelection, SelectionStrategy},
    strategy::{BreedStrategy, EliteBreedStrategy},
};

/// The outcome of one call to [`EvolutionEngine::evolve`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Generation {
    /// No elites survived selection. The caller reseeds the whole population.
    Extinct,
    /// The next generation's genomes: the elites first, then the offspring.
    Produced(Vec<Genome>),
}

impl Generation {
    pub fn is_extinct(&self) -> bool {
        matches!(self, Generation::Extinct)
    }

    pub fn into_genomes(self) -> Option<Vec<Genome>> {
        match self {
            Generation::Extinct => None,
            Generation::Produced(genomes) => Some(genomes),
        }
    }
}

/// Turns one generation's scored agents into the next generation's genomes.
///
/// The engine is stateless across calls: generation counters, scores and
/// live/eliminated bookkeeping belong to the caller.
#[derive(Debug, Clone)]
pub struct EvolutionEngine<Selection = AverageFitnessSelection, Breed = EliteBreedStrategy>
where
    Selection: SelectionStrategy,
    Breed: BreedStrategy,
{
    options: GeneticOptions,
    selection: Selection,
    breed: Breed,
}

impl EvolutionEngine<AverageFitnessSelection, EliteBreedStrategy> {
    /// Creates an engine with average-fitness selection and elite breeding.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::Configuration` if `options` is invalid.
    pub fn new(options: GeneticOptions) -> Result<Self> {
        options.validate()?;
        let breed = EliteBreedStrategy::new(&options);
        Ok(Self {
            options,
            selection: AverageFitnessSelection::new(),
            breed,
        })
    }
}

impl<Selection, Breed> EvolutionEngine<Selection, Breed>
where
    Selection: SelectionStrategy,
    Breed: BreedStrategy,
{
    /// Creates an engine with custom strategies.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::Configuration` if `options` is invalid or the
    /// breed strategy rejects them.
    pub fn with_strategies(
        options: GeneticOptions,
        selection: Selection,
        breed: Breed,
    ) -> Result<Self> {
        options.validate()?;
        breed.check_options(&options)?;
        Ok(Self {
            options,
            selection,
            breed,
        })
    }

    pub fn get_options(&self) -> &GeneticOptions {
        &self.options
    }

    /// A genome factory matching this engine's genome length.
    pub fn factory(&self) -> GenomeFactory {
        GenomeFactory::new(&self.options)
    }

    /// Selects the elites of `population` with the configured strategy.
    pub fn select_elites(&self, population: &[GaAgent]) -> Vec<GaAgent> {
        self.selection.select(population)
    }

    /// Produces the next generation from `population`.
    ///
    /// # Arguments
    ///
    /// * `population` - The live agents of the finished round with their fitness.
    /// * `target_size` - The requested size of the next generation.
    /// * `rng` - The random number generator for breeding.
    ///
    /// # Returns
    ///
    /// `Generation::Extinct` when no elite survives, otherwise the elite
    /// genomes followed by `target_size - elites` offspring. The result is
    /// never truncated, so it is longer than `target_size` when more elites
    /// than that survive.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::GenomeLength` if any agent's genome, or any bred
    /// genome, does not have the configured length, and
    /// `GeneticError::PopulationSize` if the breed strategy returns fewer than
    /// `max(target_size, elites)` genomes.
    pub fn evolve(
        &self,
        population: &[GaAgent],
        target_size: usize,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Generation> {
        for agent in population {
            agent.genome.ensure_len(self.options.get_dna_size())?;
        }

        let elites = self.selection.select(population);
        if elites.is_empty() {
            debug!(population = population.len(), "no elites, population extinct");
            return Ok(Generation::Extinct);
        }

        debug!(
            population = population.len(),
            mean_fitness = mean_fitness(population).unwrap_or_default(),
            elites = elites.len(),
            offspring = target_size.saturating_sub(elites.len()),
            "evolving generation"
        );

        let genomes = self.breed.breed(&elites, target_size, rng)?;

        let expected = target_size.max(elites.len());
        if genomes.len() < expected {
            return Err(GeneticError::PopulationSize {
                expected,
                actual: genomes.len(),
            });
        }
        for genome in &genomes {
            genome.ensure_len(self.options.get_dna_size())?;
        }

        Ok(Generation::Produced(genomes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_options_never_reach_the_engine() {
        let result = GeneticOptions::new(9, 2, 1).and_then(EvolutionEngine::new);
        assert!(matches!(result, Err(GeneticError::Configuration(_))));
    }

    #[test]
    fn test_evolve_rejects_wrong_genome_length() {
        let engine = EvolutionEngine::new(GeneticOptions::new(6, 3, 1).unwrap()).unwrap();
        let population = vec![GaAgent::new(Genome::zeroed(5), 1)];
        let mut rng = RandomNumberGenerator::from_seed(1);

        let result = engine.evolve(&population, 3, &mut rng);
        assert!(matches!(result, Err(GeneticError::GenomeLength { .. })));
    }

    /// Breeds nothing: returns the elites and ignores the target size.
    #[derive(Debug, Clone)]
    struct ElitesOnly;

    impl BreedStrategy for ElitesOnly {
        fn breed(
            &self,
            elites: &[GaAgent],
            _target_size: usize,
            _rng: &mut RandomNumberGenerator,
        ) -> Result<Vec<Genome>> {
            Ok(elites.iter().map(|elite| elite.genome.clone()).collect())
        }
    }

    #[test]
    fn test_short_breed_output_is_an_error() {
        let options = GeneticOptions::new(4, 2, 1).unwrap();
        let engine =
            EvolutionEngine::with_strategies(options, AverageFitnessSelection::new(), ElitesOnly)
                .unwrap();
        let population = vec![
            GaAgent::new(Genome::zeroed(4), 1),
            GaAgent::new(Genome::zeroed(4), 5),
        ];
        let mut rng = RandomNumberGenerator::from_seed(1);

        match engine.evolve(&population, 4, &mut rng) {
            Err(GeneticError::PopulationSize { expected, actual }) => {
                assert_eq!(expected, 4);
                assert_eq!(actual, 1);
            }
            other => panic!("Expected PopulationSize error, got {:?}", other),
        }

        // Asking for no more than the elites is fine.
        assert!(engine.evolve(&population, 1, &mut rng).is_ok());
    }

    #[test]
    fn test_mismatched_breed_strategy_is_rejected() {
        let options = GeneticOptions::new(6, 3, 1).unwrap();
        let breed = EliteBreedStrategy::new(&GeneticOptions::new(4, 2, 1).unwrap());

        let result =
            EvolutionEngine::with_strategies(options, AverageFitnessSelection::new(), breed);
        assert!(matches!(result, Err(GeneticError::Configuration(_))));
    }

    #[test]
    fn test_generation_helpers() {
        assert!(Generation::Extinct.is_extinct());
        assert_eq!(Generation::Extinct.into_genomes(), None);

        let produced = Generation::Produced(vec![Genome::zeroed(2)]);
        assert!(!produced.is_extinct());
        assert_eq!(produced.into_genomes().map(|g| g.len()), Some(1));
    }

    #[test]
    fn test_factory_matches_options() {
        let engine = EvolutionEngine::new(GeneticOptions::new(12, 4, 0).unwrap()).unwrap();
        assert_eq!(engine.factory().get_dna_size(), 12);
    }
}
