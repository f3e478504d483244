//! # GenerationDriver
//!
//! The driver owns one slot per agent and runs the generational loop around an
//! [`EvolutionEngine`]:
//!
//! 1. Seed every slot with a random genome.
//! 2. Let an [`Arena`] play the round, collecting scores and eliminations.
//! 3. Once the live count drops to `reset_count` (or everyone is gone, or no
//!    live agent has genes left), hand the live agents to the engine.
//! 4. Write the produced genomes back into the slots, or reseed every slot on
//!    extinction, and start the next round.
//!
//! The loop stops when an agent reports the target score. Time is an explicit
//! tick counter; an agent reads gene `(now - start_tick) / action_interval`.
pub mod options;

use tracing::{debug, info, warn};

use crate::{
    arena::{AgentHost, Arena},
    error::{GeneticError, OptionExt, Result},
    evolution::{EvolutionEngine, Generation, GenomeFactory},
    genome::{Action, GaAgent, Genome},
    rng::RandomNumberGenerator,
    selection::{AverageFitnessSelection, SelectionStrategy},
    strategy::{BreedStrategy, EliteBreedStrategy},
};

pub use options::{DriverOptions, DriverOptionsBuilder};

/// One agent's state for the current round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentSlot {
    genome: Genome,
    score: u32,
    alive: bool,
    start_tick: u64,
}

impl AgentSlot {
    fn fresh(genome: Genome, start_tick: u64) -> Self {
        Self {
            genome,
            score: 0,
            alive: true,
            start_tick,
        }
    }

    pub fn genome(&self) -> &Genome {
        &self.genome
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    pub fn start_tick(&self) -> u64 {
        self.start_tick
    }
}

/// Where and when the target score was first reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Goal {
    pub agent: usize,
    pub generation: u64,
    pub tick: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreReport {
    Recorded,
    GoalReached,
    /// The agent was already eliminated this round.
    Ignored,
}

/// How the population was replaced at a generation change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// The engine produced `produced` genomes; the first `player_count` were used.
    Evolved { produced: usize },
    /// No agent survived, every slot got a fresh random genome.
    Reseeded,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    GoalReached(Goal),
    GenerationLimit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub outcome: RunOutcome,
    /// The generation counter when the run stopped.
    pub generations: u64,
    pub ticks: u64,
}

#[derive(Debug)]
pub struct GenerationDriver<S = AverageFitnessSelection, B = EliteBreedStrategy>
where
    S: SelectionStrategy,
    B: BreedStrategy,
{
    options: DriverOptions,
    engine: EvolutionEngine<S, B>,
    factory: GenomeFactory,
    rng: RandomNumberGenerator,
    slots: Vec<AgentSlot>,
    live_count: usize,
    generation: u64,
    tick: u64,
    goal: Option<Goal>,
}

impl<S, B> GenerationDriver<S, B>
where
    S: SelectionStrategy,
    B: BreedStrategy,
{
    /// Creates a driver whose first generation is random.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::Configuration` if `options` is invalid.
    pub fn new(
        options: DriverOptions,
        engine: EvolutionEngine<S, B>,
        mut rng: RandomNumberGenerator,
    ) -> Result<Self> {
        options.validate()?;
        let factory = engine.factory();
        let genomes = factory.create_population(options.get_player_count(), &mut rng);
        Ok(Self::assemble(options, engine, factory, rng, genomes))
    }

    /// Creates a driver whose first generation is `genomes`.
    ///
    /// # Errors
    ///
    /// Returns an error if `options` is invalid, if the number of genomes is not
    /// the player count, or if any genome has the wrong length.
    pub fn with_genomes(
        options: DriverOptions,
        engine: EvolutionEngine<S, B>,
        rng: RandomNumberGenerator,
        genomes: Vec<Genome>,
    ) -> Result<Self> {
        options.validate()?;
        if genomes.len() != options.get_player_count() {
            return Err(GeneticError::Configuration(format!(
                "Expected {} genomes, got {}",
                options.get_player_count(),
                genomes.len()
            )));
        }

        let dna_size = engine.get_options().get_dna_size();
        for genome in &genomes {
            genome.ensure_len(dna_size)?;
        }

        let factory = engine.factory();
        Ok(Self::assemble(options, engine, factory, rng, genomes))
    }

    fn assemble(
        options: DriverOptions,
        engine: EvolutionEngine<S, B>,
        factory: GenomeFactory,
        rng: RandomNumberGenerator,
        genomes: Vec<Genome>,
    ) -> Self {
        let slots: Vec<AgentSlot> = genomes
            .into_iter()
            .map(|genome| AgentSlot::fresh(genome, 0))
            .collect();

        Self {
            live_count: slots.len(),
            options,
            engine,
            factory,
            rng,
            slots,
            generation: 1,
            tick: 0,
            goal: None,
        }
    }

    pub fn get_options(&self) -> &DriverOptions {
        &self.options
    }

    pub fn engine(&self) -> &EvolutionEngine<S, B> {
        &self.engine
    }

    pub fn slots(&self) -> &[AgentSlot] {
        &self.slots
    }

    pub fn slot(&self, index: usize) -> Result<&AgentSlot> {
        let count = self.slots.len();
        self.slots
            .get(index)
            .ok_or_else_genetic(|| GeneticError::AgentIndex { index, count })
    }

    fn slot_mut(&mut self, index: usize) -> Result<&mut AgentSlot> {
        let count = self.slots.len();
        self.slots
            .get_mut(index)
            .ok_or_else_genetic(|| GeneticError::AgentIndex { index, count })
    }

    /// The current generation, starting at 1.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn now(&self) -> u64 {
        self.tick
    }

    pub fn live_count(&self) -> usize {
        self.live_count
    }

    pub fn goal(&self) -> Option<Goal> {
        self.goal
    }

    /// Advances the clock by one tick and returns the new time.
    pub fn tick(&mut self) -> u64 {
        self.tick += 1;
        self.tick
    }

    /// Index of the gene the agent reads at the current tick.
    pub fn gene_index(&self, index: usize) -> Result<usize> {
        let slot = self.slot(index)?;
        let elapsed = self.tick.saturating_sub(slot.start_tick);
        Ok((elapsed / self.options.get_action_interval()) as usize)
    }

    pub fn action_for(&self, index: usize) -> Result<Option<Action>> {
        let slot = self.slot(index)?;
        if !slot.alive {
            return Ok(None);
        }
        let gene_index = self.gene_index(index)?;
        Ok(slot.genome.action_at(gene_index))
    }

    /// Sets the agent's score to the value of the tile it just entered.
    ///
    /// The first agent to report the target score records the [`Goal`].
    pub fn report_score(&mut self, index: usize, score: u32) -> Result<ScoreReport> {
        let target = self.options.get_target_score();
        let slot = self.slot_mut(index)?;
        if !slot.alive {
            return Ok(ScoreReport::Ignored);
        }
        slot.score = score;

        if score != target {
            return Ok(ScoreReport::Recorded);
        }

        if self.goal.is_none() {
            let goal = Goal {
                agent: index,
                generation: self.generation,
                tick: self.tick,
            };
            info!(
                agent = index,
                generation = goal.generation,
                tick = goal.tick,
                "goal reached"
            );
            self.goal = Some(goal);
        }
        Ok(ScoreReport::GoalReached)
    }

    /// Marks the agent as eliminated. Repeated reports are ignored.
    pub fn report_elimination(&mut self, index: usize) -> Result<()> {
        let slot = self.slot_mut(index)?;
        if slot.alive {
            slot.alive = false;
            self.live_count -= 1;
        }
        Ok(())
    }

    /// True while some agents live but no more than `reset_count` of them.
    pub fn should_evolve(&self) -> bool {
        self.live_count > 0 && self.live_count <= self.options.get_reset_count()
    }

    pub fn is_wiped_out(&self) -> bool {
        self.live_count == 0
    }

    /// The live agents of the current round with their scores.
    pub fn population(&self) -> Vec<GaAgent> {
        self.slots
            .iter()
            .filter(|slot| slot.alive)
            .map(|slot| GaAgent::new(slot.genome.clone(), slot.score))
            .collect()
    }

    /// Replaces the population and starts the next round.
    ///
    /// Produced genomes are written to the slots in order; any beyond the
    /// player count are dropped. On extinction every slot is reseeded.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::PopulationSize` if the engine produced fewer
    /// genomes than the player count. The current round is left untouched.
    pub fn advance_generation(&mut self) -> Result<Transition> {
        let population = self.population();
        let player_count = self.options.get_player_count();

        let generation = self
            .engine
            .evolve(&population, player_count, &mut self.rng)?;

        let transition = match generation {
            Generation::Extinct => {
                warn!(
                    generation = self.generation,
                    "population extinct, reseeding"
                );
                let genomes = self.factory.create_population(player_count, &mut self.rng);
                self.refill(genomes);
                Transition::Reseeded
            }
            Generation::Produced(genomes) => {
                let produced = genomes.len();
                if produced < player_count {
                    return Err(GeneticError::PopulationSize {
                        expected: player_count,
                        actual: produced,
                    });
                }
                if produced > player_count {
                    debug!(produced, player_count, "dropping surplus elites");
                }
                self.refill(genomes.into_iter().take(player_count).collect());
                Transition::Evolved { produced }
            }
        };

        self.generation += 1;
        self.live_count = player_count;
        info!(
            generation = self.generation,
            survivors = population.len(),
            ?transition,
            "next generation"
        );
        Ok(transition)
    }

    fn refill(&mut self, genomes: Vec<Genome>) {
        let now = self.tick;
        self.slots = genomes
            .into_iter()
            .map(|genome| AgentSlot::fresh(genome, now))
            .collect();
    }

    /// Plays rounds in `arena` until the goal is reached or the generation
    /// counter passes `max_generations`.
    pub fn run<A>(&mut self, arena: &mut A, max_generations: Option<u64>) -> Result<RunSummary>
    where
        A: Arena + ?Sized,
    {
        arena.reset(&*self)?;

        loop {
            if let Some(goal) = self.goal {
                return Ok(self.summary(RunOutcome::GoalReached(goal)));
            }
            if max_generations.is_some_and(|max| self.generation > max) {
                return Ok(self.summary(RunOutcome::GenerationLimit));
            }

            arena.step(self)?;
            self.tick();

            let round_over =
                self.should_evolve() || self.is_wiped_out() || arena.round_finished();
            if self.goal.is_none() && round_over {
                self.advance_generation()?;
                arena.reset(&*self)?;
            }
        }
    }

    fn summary(&self, outcome: RunOutcome) -> RunSummary {
        RunSummary {
            outcome,
            generations: self.generation,
            ticks: self.tick,
        }
    }
}

impl<S, B> AgentHost for GenerationDriver<S, B>
where
    S: SelectionStrategy,
    B: BreedStrategy,
{
    fn agent_count(&self) -> usize {
        self.slots.len()
    }

    fn is_alive(&self, index: usize) -> bool {
        self.slots.get(index).is_some_and(AgentSlot::is_alive)
    }

    fn action_for(&self, index: usize) -> Result<Option<Action>> {
        GenerationDriver::action_for(self, index)
    }

    fn report_score(&mut self, index: usize, score: u32) -> Result<ScoreReport> {
        GenerationDriver::report_score(self, index, score)
    }

    fn report_elimination(&mut self, index: usize) -> Result<()> {
        GenerationDriver::report_elimination(self, index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evolution::GeneticOptions;
    use crate::genome::Heading;

    fn engine() -> EvolutionEngine {
        EvolutionEngine::new(GeneticOptions::new(4, 2, 1).unwrap()).unwrap()
    }

    fn driver(players: usize, reset: usize) -> GenerationDriver {
        let options = DriverOptions::new(players, reset, 9, 1).unwrap();
        GenerationDriver::new(options, engine(), RandomNumberGenerator::from_seed(12)).unwrap()
    }

    #[test]
    fn test_new_seeds_every_slot() {
        let driver = driver(6, 2);

        assert_eq!(driver.slots().len(), 6);
        assert_eq!(driver.live_count(), 6);
        assert_eq!(driver.generation(), 1);
        assert!(driver
            .slots()
            .iter()
            .all(|slot| slot.is_alive() && slot.score() == 0 && slot.genome().len() == 4));
    }

    #[test]
    fn test_with_genomes_checks_count_and_length() {
        let options = DriverOptions::new(2, 1, 9, 1).unwrap();
        let rng = RandomNumberGenerator::from_seed(0);

        let too_few = GenerationDriver::with_genomes(
            options.clone(),
            engine(),
            rng.clone(),
            vec![Genome::zeroed(4)],
        );
        assert!(matches!(too_few, Err(GeneticError::Configuration(_))));

        let too_short = GenerationDriver::with_genomes(
            options,
            engine(),
            rng,
            vec![Genome::zeroed(4), Genome::zeroed(3)],
        );
        assert!(matches!(too_short, Err(GeneticError::GenomeLength { .. })));
    }

    #[test]
    fn test_elimination_is_idempotent() {
        let mut driver = driver(4, 1);

        driver.report_elimination(2).unwrap();
        driver.report_elimination(2).unwrap();

        assert_eq!(driver.live_count(), 3);
        assert!(!driver.slot(2).unwrap().is_alive());
    }

    #[test]
    fn test_bad_index_is_an_error() {
        let mut driver = driver(3, 1);

        assert!(matches!(
            driver.report_elimination(3),
            Err(GeneticError::AgentIndex { index: 3, count: 3 })
        ));
        assert!(driver.report_score(7, 1).is_err());
        assert!(driver.action_for(3).is_err());
    }

    #[test]
    fn test_score_and_goal() {
        let mut driver = driver(3, 1);

        assert_eq!(driver.report_score(0, 4).unwrap(), ScoreReport::Recorded);
        assert_eq!(driver.report_score(0, 2).unwrap(), ScoreReport::Recorded);
        assert_eq!(driver.slot(0).unwrap().score(), 2);
        assert_eq!(driver.goal(), None);

        driver.tick();
        assert_eq!(driver.report_score(1, 9).unwrap(), ScoreReport::GoalReached);
        assert_eq!(
            driver.goal(),
            Some(Goal {
                agent: 1,
                generation: 1,
                tick: 1
            })
        );

        // The first goal sticks.
        driver.report_score(2, 9).unwrap();
        assert_eq!(driver.goal().map(|g| g.agent), Some(1));
    }

    #[test]
    fn test_scores_of_eliminated_agents_are_ignored() {
        let mut driver = driver(3, 1);
        driver.report_elimination(0).unwrap();

        assert_eq!(driver.report_score(0, 9).unwrap(), ScoreReport::Ignored);
        assert_eq!(driver.goal(), None);
    }

    #[test]
    fn test_should_evolve_threshold() {
        let mut driver = driver(4, 2);
        assert!(!driver.should_evolve());

        driver.report_elimination(0).unwrap();
        assert!(!driver.should_evolve());

        driver.report_elimination(1).unwrap();
        assert!(driver.should_evolve());

        driver.report_elimination(2).unwrap();
        driver.report_elimination(3).unwrap();
        assert!(!driver.should_evolve());
        assert!(driver.is_wiped_out());
    }

    #[test]
    fn test_advance_generation_applies_genomes() {
        let options = DriverOptions::new(3, 1, 9, 1).unwrap();
        let genomes = vec![
            Genome::new(vec![1; 4]),
            Genome::new(vec![2; 4]),
            Genome::new(vec![3; 4]),
        ];
        let mut driver = GenerationDriver::with_genomes(
            options,
            engine(),
            RandomNumberGenerator::from_seed(3),
            genomes.clone(),
        )
        .unwrap();

        driver.report_score(0, 1).unwrap();
        driver.report_score(1, 5).unwrap();
        driver.report_elimination(2).unwrap();
        for _ in 0..5 {
            driver.tick();
        }

        // Mean of live scores is 3, so only slot 1 is an elite.
        let transition = driver.advance_generation().unwrap();

        assert_eq!(transition, Transition::Evolved { produced: 3 });
        assert_eq!(driver.generation(), 2);
        assert_eq!(driver.live_count(), 3);
        assert_eq!(driver.slot(0).unwrap().genome(), &genomes[1]);
        assert!(driver.slots().iter().all(|slot| slot.is_alive()
            && slot.score() == 0
            && slot.start_tick() == 5));
    }

    /// Returns the elites as they are, never filling up to the target size.
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
    fn test_short_generation_keeps_the_round() {
        let engine = crate::evolution::EvolutionEngineBuilder::new()
            .with_options(GeneticOptions::new(4, 2, 1).unwrap())
            .with_selection_strategy(AverageFitnessSelection::new())
            .with_breed_strategy(ElitesOnly)
            .build()
            .unwrap();
        let options = DriverOptions::new(4, 1, 9, 1).unwrap();
        let mut driver =
            GenerationDriver::new(options, engine, RandomNumberGenerator::from_seed(5)).unwrap();

        driver.report_score(0, 3).unwrap();
        for index in 1..4 {
            driver.report_elimination(index).unwrap();
        }

        match driver.advance_generation() {
            Err(GeneticError::PopulationSize { expected, actual }) => {
                assert_eq!(expected, 4);
                assert_eq!(actual, 1);
            }
            other => panic!("Expected PopulationSize error, got {:?}", other),
        }

        assert_eq!(driver.generation(), 1);
        assert_eq!(driver.slots().len(), 4);
        assert_eq!(driver.live_count(), 1);
        assert_eq!(
            driver.slots().iter().filter(|slot| slot.is_alive()).count(),
            driver.live_count()
        );

        driver.report_elimination(0).unwrap();
        assert!(driver.is_wiped_out());
    }

    #[test]
    fn test_extinction_reseeds() {
        let mut driver = driver(3, 1);
        for index in 0..3 {
            driver.report_elimination(index).unwrap();
        }

        let transition = driver.advance_generation().unwrap();

        assert_eq!(transition, Transition::Reseeded);
        assert_eq!(driver.generation(), 2);
        assert_eq!(driver.live_count(), 3);
        assert_eq!(driver.slots().len(), 3);
    }

    #[test]
    fn test_equal_scores_carry_everyone_over() {
        let options = DriverOptions::new(2, 1, 9, 1).unwrap();
        let genomes = vec![Genome::new(vec![1; 4]), Genome::new(vec![2; 4])];
        let mut driver = GenerationDriver::with_genomes(
            options,
            engine(),
            RandomNumberGenerator::from_seed(3),
            genomes.clone(),
        )
        .unwrap();

        let transition = driver.advance_generation().unwrap();

        assert_eq!(transition, Transition::Evolved { produced: 2 });
        let next: Vec<Genome> = driver.slots().iter().map(|s| s.genome().clone()).collect();
        assert_eq!(next, genomes);
    }

    #[test]
    fn test_gene_index_follows_action_interval() {
        let options = DriverOptions::new(1, 0, 9, 2).unwrap();
        let genome = Genome::new(vec![1, 2, 0, 0]);
        let mut driver = GenerationDriver::with_genomes(
            options,
            engine(),
            RandomNumberGenerator::from_seed(0),
            vec![genome],
        )
        .unwrap();

        assert_eq!(
            driver.action_for(0).unwrap(),
            Some(Action::Move(Heading::East))
        );
        driver.tick();
        assert_eq!(
            driver.action_for(0).unwrap(),
            Some(Action::Move(Heading::East))
        );
        driver.tick();
        assert_eq!(
            driver.action_for(0).unwrap(),
            Some(Action::Move(Heading::South))
        );
        for _ in 0..6 {
            driver.tick();
        }
        assert_eq!(driver.gene_index(0).unwrap(), 4);
        assert_eq!(driver.action_for(0).unwrap(), None);
    }
}
