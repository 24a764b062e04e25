//! Scenario configuration.
//!
//! # Design
//!
//! Every tunable of a scenario lives in one plain struct so a host can load
//! it from a file (with the `serde` feature) or build it in code.  Defaults
//! reproduce the 7×7 LED-matrix build: a runner that moves every 4th tick and
//! a sentry that moves every 6th, both able to sense two cells away.
//!
//! Speeds are cooldowns: after moving, an agent waits `speed` ticks before
//! its next move, so a *larger* value means a *slower* agent.

use crate::{CoreError, CoreResult, MazeRng};

/// Top-level scenario configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MazeConfig {
    /// Grid width in cells.
    pub width: u32,

    /// Grid height in cells.
    pub height: u32,

    /// How many steps away the runner can sense the sentry.
    pub runner_sense: u32,

    /// Extra search depth the runner uses when planning an escape, on top of
    /// `runner_sense`.
    pub runner_fear: u32,

    /// Runner cooldown after each move.
    pub runner_speed: u32,

    /// How many steps away the sentry can sense the runner.
    pub sentry_sense: u32,

    /// Sentry cooldown after each move.  Half of it is the reaction delay
    /// applied when the runner walks onto the sentry's cell.
    pub sentry_speed: u32,

    /// Frozen ticks after the runner reaches the exit.
    pub goal_delay: u32,

    /// Frozen ticks after the sentry catches the runner.
    pub catch_delay: u32,

    /// Frozen ticks after an internal fault.
    pub error_delay: u32,

    /// Walls knocked out after carving to introduce loops.
    pub extra_walls: u32,

    /// Master RNG seed.  `None` seeds from OS entropy, so every run differs.
    pub seed: Option<u64>,
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self {
            width:        7,
            height:       7,
            runner_sense: 2,
            runner_fear:  10,
            runner_speed: 3,
            sentry_sense: 2,
            sentry_speed: 5,
            goal_delay:   10,
            catch_delay:  30,
            error_delay:  100,
            extra_walls:  1,
            seed:         None,
        }
    }
}

impl MazeConfig {
    /// Default tunables on a `width` × `height` grid.
    pub fn with_size(width: u32, height: u32) -> Self {
        Self { width, height, ..Self::default() }
    }

    /// Reject configurations the engine cannot run.
    pub fn validate(&self) -> CoreResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(CoreError::InvalidDimensions {
                width:  self.width,
                height: self.height,
            });
        }
        if self.width > i32::MAX as u32 || self.height > i32::MAX as u32 {
            return Err(CoreError::InvalidDimensions {
                width:  self.width,
                height: self.height,
            });
        }
        if self.runner_sense == 0 {
            return Err(CoreError::Config("runner_sense must be at least 1".into()));
        }
        if self.sentry_sense == 0 {
            return Err(CoreError::Config("sentry_sense must be at least 1".into()));
        }
        Ok(())
    }

    /// Construct the RNG this configuration asks for.
    pub fn make_rng(&self) -> MazeRng {
        match self.seed {
            Some(seed) => MazeRng::new(seed),
            None       => MazeRng::from_entropy(),
        }
    }
}
