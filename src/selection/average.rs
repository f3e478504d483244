use crate::genome::GaAgent;
use crate::selection::selection_strategy::SelectionStrategy;

/// Keeps every agent whose fitness is at or above the population mean.
///
/// The mean is computed in `f64` and compared with `>=`, so an agent scoring
/// exactly the mean survives. Because the mean always lies between the lowest
/// and highest fitness, the selection is empty only for an empty population.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, Default)]
pub struct AverageFitnessSelection;

impl AverageFitnessSelection {
    pub fn new() -> Self {
        Self
    }
}

/// Arithmetic mean of the population's fitness, `None` for an empty population.
pub fn mean_fitness(population: &[GaAgent]) -> Option<f64> {
    if population.is_empty() {
        return None;
    }

    let total: f64 = population.iter().map(|agent| f64::from(agent.fitness)).sum();
    Some(total / population.len() as f64)
}

impl SelectionStrategy for AverageFitnessSelection {
    fn select(&self, population: &[GaAgent]) -> Vec<GaAgent> {
        let Some(mean) = mean_fitness(population) else {
            return Vec::new();
        };

        population
            .iter()
            .filter(|agent| f64::from(agent.fitness) >= mean)
            .cloned()
            .collect()
    }
}
