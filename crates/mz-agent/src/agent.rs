//! The `Agent` trait — one movement decision per simulation tick.

use mz_core::{Coord, MazeRng};
use mz_maze::PathFinder;

use crate::{AgentResult, AgentState, StepContext};

/// An autonomous mover on the maze grid.
///
/// `step` is called once per tick.  It returns `Ok(true)` if the agent
/// changed cell, `Ok(false)` if it stayed put (cooling down, hesitating, or
/// nothing planned), and an error only if its own plan turned out to be
/// illegal.
pub trait Agent {
    /// Short label used in logs and errors.
    fn name(&self) -> &'static str;

    fn state(&self) -> &AgentState;

    #[inline]
    fn location(&self) -> Coord {
        self.state().location
    }

    fn step<F: PathFinder>(
        &mut self,
        ctx:    &StepContext<'_>,
        finder: &F,
        rng:    &mut MazeRng,
    ) -> AgentResult<bool>;
}
