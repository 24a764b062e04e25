//! The runner: heads for the exit, bolts when it senses the sentry.

use mz_core::{Coord, MazeConfig, MazeRng};
use mz_maze::PathFinder;

use crate::{Agent, AgentResult, AgentState, StepContext};

/// Runner tunables, normally taken from [`MazeConfig`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunnerTuning {
    /// Steps within which the sentry is sensed.  Also the length of each
    /// flight leg.
    pub sense: u32,
    /// Extra search depth when looking for somewhere to flee to.
    pub fear: u32,
    /// Cooldown after each move.
    pub speed: u32,
}

impl From<&MazeConfig> for RunnerTuning {
    fn from(cfg: &MazeConfig) -> Self {
        Self {
            sense: cfg.runner_sense,
            fear:  cfg.runner_fear,
            speed: cfg.runner_speed,
        }
    }
}

/// The agent trying to reach the exit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Runner {
    pub state: AgentState,

    /// Where the sentry was last sensed.  Cleared the next time the runner
    /// replans towards the exit.
    pub known_sentry: Option<Coord>,

    pub tuning: RunnerTuning,
}

impl Runner {
    /// A runner standing at `location`, ready to move on the first tick.
    pub fn new(location: Coord, tuning: RunnerTuning) -> Self {
        Self {
            state: AgentState::new(location, 0),
            known_sentry: None,
            tuning,
        }
    }

    /// The sentry's location if a route of at most `sense` steps leads to it.
    fn sense_sentry<F: PathFinder>(
        &self,
        ctx:    &StepContext<'_>,
        finder: &F,
        rng:    &mut MazeRng,
    ) -> Option<Coord> {
        let sentry = ctx.sentry?;
        finder
            .bounded_sense(ctx.grid, self.state.location, None, sentry, Some(self.tuning.sense), rng)
            .is_some_and(|p| !p.is_empty())
            .then_some(sentry)
    }
}

impl Agent for Runner {
    fn name(&self) -> &'static str {
        "runner"
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
        let RunnerTuning { sense, fear, speed } = self.tuning;

        if let Some(sentry) = self.sense_sentry(ctx, finder, rng) {
            // Flee: aim for the farthest cell that keeps clear of the sentry,
            // but only commit to the first few steps of the route.
            self.known_sentry = Some(sentry);
            let mut flight = finder.longest_path(ctx.grid, here, Some(sentry), Some(sense + fear), rng);
            flight.truncate(sense as usize);
            tracing::trace!(%sentry, steps = flight.len(), "runner fleeing");
            self.state.path = flight;
        } else if self.state.path.is_empty() {
            // NOTE: the plan that avoids the remembered sentry is thrown away
            // and replaced by an unconstrained one.  Probably unintended, but
            // it is the established behaviour (RNG draws included) until it
            // is decided whether runners should route around a sentry they
            // no longer sense.
            let _avoiding = finder.bounded_sense(ctx.grid, here, self.known_sentry, ctx.exit, None, rng);
            self.known_sentry = None;
            self.state.path = finder
                .bounded_sense(ctx.grid, here, None, ctx.exit, None, rng)
                .unwrap_or_default();
        }

        let name = self.name();
        self.state.advance(name, ctx.grid, speed)
    }
}
