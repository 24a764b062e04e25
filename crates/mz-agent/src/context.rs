//! Read-only scenario state passed to every agent step.

use mz_core::Coord;
use mz_maze::Grid;

/// A snapshot of everything an agent may look at while deciding its move.
///
/// Built by the simulation right before each agent steps, so the sentry sees
/// the runner's location *after* the runner's move in the same tick.
#[derive(Clone, Copy, Debug)]
pub struct StepContext<'a> {
    pub grid:   &'a Grid,
    pub exit:   Coord,
    pub runner: Coord,
    /// `None` when the scenario has no sentry.
    pub sentry: Option<Coord>,
}

impl<'a> StepContext<'a> {
    #[inline]
    pub fn new(grid: &'a Grid, exit: Coord, runner: Coord, sentry: Option<Coord>) -> Self {
        Self { grid, exit, runner, sentry }
    }
}
