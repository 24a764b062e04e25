//! Placing the runner, the sentry, and the exit on a freshly generated grid.
//!
//! Placement runs in that order on every (re)initialisation: the sentry is
//! placed relative to the runner and the exit is the cell farthest from the
//! runner, so the runner must come first.

use mz_core::{Coord, MazeRng};

use crate::{Grid, MazeError, MazeResult, PathFinder};

/// Extra sentry sampling attempts allowed after the distance threshold has
/// shrunk to zero.  Only exhausted when no open cell other than the runner's
/// exists.
const SENTRY_EXTRA_ATTEMPTS: u32 = 1000;

/// Where the sentry ended up and how hard it was to get there.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SentryPlacement {
    pub location: Coord,
    /// Random draws taken, including the accepted one.
    pub attempts: u32,
    /// Distance threshold in force when the location was accepted.
    pub min_distance: u32,
}

/// Keep the runner where the last scenario ended, or pick a random open cell.
///
/// After a goal the runner stands on the old exit, after a catch on the old
/// sentry cell; the maze is regenerated around that cell so the runner
/// visibly continues from there.  Anything else (first start, or a reset
/// after a fault) gets a fresh random cell.
pub fn place_runner(
    grid:         &Grid,
    prior:        Option<Coord>,
    prior_exit:   Option<Coord>,
    prior_sentry: Option<Coord>,
    rng:          &mut MazeRng,
) -> MazeResult<Coord> {
    if let Some(prev) = prior {
        let ended_on_marker = Some(prev) == prior_exit || Some(prev) == prior_sentry;
        if ended_on_marker && grid.is_open(prev) {
            tracing::debug!(runner = %prev, "runner stays at its previous location");
            return Ok(prev);
        }
        if !ended_on_marker {
            tracing::warn!(runner = %prev, "runner unexpectedly not at exit or sentry location");
        }
    }

    let open: Vec<Coord> = grid.open_cells().collect();
    let runner = rng.choose(&open).copied().ok_or(MazeError::NoOpenCell)?;
    tracing::debug!(%runner, candidates = open.len(), "placed runner");
    Ok(runner)
}

/// Minimum Manhattan distance (exclusive) between sentry and runner after
/// `attempts` rejected draws: half the grid's perimeter, shrinking by one
/// every ten attempts.
#[inline]
pub fn sentry_min_distance(grid: &Grid, attempts: u32) -> u32 {
    ((grid.width() + grid.height()) / 2).saturating_sub(attempts / 10)
}

/// Rejection-sample a sentry cell far from the runner.
///
/// The distance threshold decays with each failed draw, so placement always
/// succeeds on any maze with a second open cell.
pub fn place_sentry(grid: &Grid, runner: Coord, rng: &mut MazeRng) -> MazeResult<SentryPlacement> {
    let decay_attempts = (grid.width() + grid.height()) / 2 * 10;
    let budget = decay_attempts.saturating_add(SENTRY_EXTRA_ATTEMPTS);

    for attempt in 0..budget {
        let c = grid.random_cell(rng);
        let min_distance = sentry_min_distance(grid, attempt);
        if grid.is_open(c) && c.manhattan(runner) > min_distance {
            tracing::debug!(sentry = %c, attempts = attempt + 1, "placed sentry");
            return Ok(SentryPlacement { location: c, attempts: attempt + 1, min_distance });
        }
    }

    Err(MazeError::SentryUnplaceable { runner })
}

/// The exit goes on the reachable cell farthest from the runner.
pub fn place_exit<F: PathFinder>(
    grid:   &Grid,
    runner: Coord,
    finder: &F,
    rng:    &mut MazeRng,
) -> MazeResult<Coord> {
    let path = finder.longest_path(grid, runner, None, None, rng);
    let exit = path.destination().ok_or(MazeError::UnreachableExit { runner })?;
    tracing::debug!(%exit, distance = path.len(), "placed exit");
    Ok(exit)
}
