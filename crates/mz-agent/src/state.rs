//! Per-agent movement state.

use mz_core::Coord;
use mz_maze::{Grid, Path};

use crate::{AgentError, AgentResult};

/// Location, plan, and cooldown shared by both agent kinds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentState {
    pub location: Coord,

    /// Remaining planned steps; the head is the next cell to enter.
    pub path: Path,

    /// Ticks left before the agent may move again.
    pub cooldown: u32,
}

impl AgentState {
    #[inline]
    pub fn new(location: Coord, cooldown: u32) -> Self {
        Self { location, path: Path::default(), cooldown }
    }

    /// Burn one tick of cooldown.  Returns `true` if the agent was still
    /// cooling down and must not act this tick.
    #[inline]
    pub fn cool_down(&mut self) -> bool {
        if self.cooldown > 0 {
            self.cooldown -= 1;
            true
        } else {
            false
        }
    }

    /// Take the next planned step, if any, and restart the cooldown.
    ///
    /// The step must be an open cell adjacent to the current one; anything
    /// else means the plan is corrupt and is reported as an error.
    pub fn advance(&mut self, agent: &'static str, grid: &Grid, speed: u32) -> AgentResult<bool> {
        let Some(next) = self.path.next_step() else {
            return Ok(false);
        };

        let from = self.location;
        if !grid.is_open(next) || !from.is_adjacent(next) {
            return Err(AgentError::InvalidStep { agent, from, to: next });
        }

        self.location = next;
        self.cooldown = speed;
        tracing::trace!(agent, %from, to = %next, "moved");
        Ok(true)
    }
}
