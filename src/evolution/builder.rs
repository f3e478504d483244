use crate::{
    error::{GeneticError, Result},
    selection::SelectionStrategy,
    strategy::BreedStrategy,
};

use super::{EvolutionEngine, GeneticOptions};

pub struct EvolutionEngineBuilder<S, B>
where
    S: SelectionStrategy,
    B: BreedStrategy,
{
    options: Option<GeneticOptions>,
    selection_strategy: Option<S>,
    breed_strategy: Option<B>,
}

impl<S, B> EvolutionEngineBuilder<S, B>
where
    S: SelectionStrategy,
    B: BreedStrategy,
{
    pub fn new() -> Self {
        Self {
            options: None,
            selection_strategy: None,
            breed_strategy: None,
        }
    }

    pub fn with_options(mut self, options: GeneticOptions) -> Self {
        self.options = Some(options);
        self
    }

    pub fn with_selection_strategy(mut self, selection_strategy: S) -> Self {
        self.selection_strategy = Some(selection_strategy);
        self
    }

    pub fn with_breed_strategy(mut self, breed_strategy: B) -> Self {
        self.breed_strategy = Some(breed_strategy);
        self
    }

    pub fn build(self) -> Result<EvolutionEngine<S, B>> {
        let options = self
            .options
            .ok_or_else(|| GeneticError::Configuration("Options not specified".to_string()))?;

        let selection_strategy = self.selection_strategy.ok_or_else(|| {
            GeneticError::Configuration("Selection strategy not specified".to_string())
        })?;

        let breed_strategy = self.breed_strategy.ok_or_else(|| {
            GeneticError::Configuration("Breeding strategy not specified".to_string())
        })?;

        EvolutionEngine::with_strategies(options, selection_strategy, breed_strategy)
    }
}

impl<S, B> Default for EvolutionEngineBuilder<S, B>
where
    S: SelectionStrategy,
    B: BreedStrategy,
{
    fn default() -> Self {
        Self::new()
    }
}
