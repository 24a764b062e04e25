//! The sentry: waits, senses the runner nearby, and gives chase.

use mz_core::{Coord, MazeConfig, MazeRng};
use mz_maze::PathFinder;

use crate::{Agent, AgentResult, AgentState, StepContext};

/// Sentry tunables, normally taken from [`MazeConfig`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SentryTuning {
    /// Steps within which the runner is sensed.
    pub sense: u32,
    /// Cooldown after each move.  Also the cooldown of a freshly placed
    /// sentry, and twice the reaction delay.
    pub speed: u32,
}

impl From<&MazeConfig> for SentryTuning {
    fn from(cfg: &MazeConfig) -> Self {
        Self {
            sense: cfg.sentry_sense,
            speed: cfg.sentry_speed,
        }
    }
}

/// The pursuing agent.
///
/// A scenario without a sentry simply has no `Sentry` value; there is no
/// disabled state to check here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sentry {
    pub state: AgentState,
    pub tuning: SentryTuning,
}

impl Sentry {
    /// A sentry at `location` that waits one full cooldown before its first
    /// move, giving the runner a head start.
    pub fn new(location: Coord, tuning: SentryTuning) -> Self {
        Self {
            state: AgentState::new(location, tuning.speed),
            tuning,
        }
    }
}

impl Agent for Sentry {
    fn name(&self) -> &'static str {
        "sentry"
    }

    fn state(&self) -> &AgentState {
        &self.state
    }

    fn step<F: PathFinder>(
        &mut self,
        ctx:    &StepContext<'_>,
        finder: &F,
        rng:    &mut MazeRng,
    ) -> AgentResult<bool> {
        if self.state.cool_down() {
            return Ok(false);
        }

        let here = self.state.location;
        let SentryTuning { sense, speed } = self.tuning;

        match finder.bounded_sense(ctx.grid, here, None, ctx.runner, Some(sense), rng) {
            // The runner walked onto the sentry's own cell: hesitate briefly
            // before reacting.
            Some(path) if path.is_empty() => {
                tracing::trace!(runner = %ctx.runner, "sentry sensed runner on its own cell");
                self.state.cooldown = speed / 2;
                return Ok(false);
            }
            Some(path) => self.state.path = path,
            // Out of range: keep following whatever trail was last planned.
            None => {}
        }

        let name = self.name();
        self.state.advance(name, ctx.grid, speed)
    }
}
