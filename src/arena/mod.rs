//! # Arena
//!
//! An arena is the simulation a population plays in. It never owns genomes or
//! scores: it reads each agent's current [`Action`] through an [`AgentHost`]
//! and reports back what happened, either a score or an elimination.
//! [`GenerationDriver`](crate::driver::GenerationDriver) is the host used in
//! practice; tests can supply their own.
pub mod grid;

use crate::{driver::ScoreReport, error::Result, genome::Action};

pub use grid::{GridMaze, Tile};

/// The narrow interface an arena uses to talk to the agents it simulates.
pub trait AgentHost {
    fn agent_count(&self) -> usize;

    /// Whether the agent is still playing this round.
    fn is_alive(&self, index: usize) -> bool;

    /// The agent's action for the current tick, `None` once its genome is
    /// exhausted or it has been eliminated.
    fn action_for(&self, index: usize) -> Result<Option<Action>>;

    /// Records the score of the tile the agent just entered.
    fn report_score(&mut self, index: usize, score: u32) -> Result<ScoreReport>;

    /// Removes the agent from the current round.
    fn report_elimination(&mut self, index: usize) -> Result<()>;
}

/// A simulation that advances one tick at a time.
pub trait Arena {
    /// Places every agent at its starting point. Called before the first round
    /// and after every generation change.
    fn reset(&mut self, host: &dyn AgentHost) -> Result<()>;

    /// Advances every live agent by one tick.
    fn step(&mut self, host: &mut dyn AgentHost) -> Result<()>;

    /// True once no live agent can act any more this round.
    fn round_finished(&self) -> bool {
        false
    }
}
