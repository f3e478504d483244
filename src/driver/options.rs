//! # DriverOptions
//!
//! Population-level settings for a [`GenerationDriver`](super::GenerationDriver):
//! how many agents play each round, how few survivors end a round, which tile
//! score wins the game, and how many ticks each gene is acted on.
//!
//! ## Example
//!
//! ```rust
//! use wayfinder::driver::DriverOptions;
//!
//! let options = DriverOptions::builder()
//!     .player_count(30)
//!     .reset_count(3)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(options.get_target_score(), DriverOptions::DEFAULT_TARGET_SCORE);
//! ```

use crate::error::{GeneticError, Result};

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriverOptions {
    player_count: usize,
    /// A round ends once the live count drops to this value.
    reset_count: usize,
    target_score: u32,
    /// Ticks spent on each gene.
    action_interval: u64,
}

impl DriverOptions {
    pub const DEFAULT_TARGET_SCORE: u32 = 19;

    /// Creates a validated `DriverOptions` instance.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::Configuration` if the values are inconsistent.
    pub fn new(
        player_count: usize,
        reset_count: usize,
        target_score: u32,
        action_interval: u64,
    ) -> Result<Self> {
        let options = Self {
            player_count,
            reset_count,
            target_score,
            action_interval,
        };
        options.validate()?;
        Ok(options)
    }

    pub fn validate(&self) -> Result<()> {
        if self.player_count == 0 {
            return Err(GeneticError::Configuration(
                "Player count cannot be zero".to_string(),
            ));
        }

        if self.reset_count >= self.player_count {
            return Err(GeneticError::Configuration(format!(
                "Reset count ({}) must be smaller than player count ({})",
                self.reset_count, self.player_count
            )));
        }

        if self.action_interval == 0 {
            return Err(GeneticError::Configuration(
                "Action interval cannot be zero".to_string(),
            ));
        }

        Ok(())
    }

    pub fn get_player_count(&self) -> usize {
        self.player_count
    }

    pub fn get_reset_count(&self) -> usize {
        self.reset_count
    }

    pub fn get_target_score(&self) -> u32 {
        self.target_score
    }

    pub fn get_action_interval(&self) -> u64 {
        self.action_interval
    }

    pub fn builder() -> DriverOptionsBuilder {
        DriverOptionsBuilder::default()
    }
}

impl Default for DriverOptions {
    fn default() -> Self {
        Self {
            player_count: 50,
            reset_count: 5,
            target_score: Self::DEFAULT_TARGET_SCORE,
            action_interval: 1,
        }
    }
}

/// Builder for `DriverOptions`.
#[derive(Debug, Clone, Default)]
pub struct DriverOptionsBuilder {
    player_count: Option<usize>,
    reset_count: Option<usize>,
    target_score: Option<u32>,
    action_interval: Option<u64>,
}

impl DriverOptionsBuilder {
    pub fn player_count(mut self, value: usize) -> Self {
        self.player_count = Some(value);
        self
    }

    pub fn reset_count(mut self, value: usize) -> Self {
        self.reset_count = Some(value);
        self
    }

    pub fn target_score(mut self, value: u32) -> Self {
        self.target_score = Some(value);
        self
    }

    pub fn action_interval(mut self, value: u64) -> Self {
        self.action_interval = Some(value);
        self
    }

    /// Builds and validates the `DriverOptions` instance.
    pub fn build(self) -> Result<DriverOptions> {
        let defaults = DriverOptions::default();
        DriverOptions::new(
            self.player_count.unwrap_or(defaults.player_count),
            self.reset_count.unwrap_or(defaults.reset_count),
            self.target_score.unwrap_or(defaults.target_score),
            self.action_interval.unwrap_or(defaults.action_interval),
        )
    }
}
