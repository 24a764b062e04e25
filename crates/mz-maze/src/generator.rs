//! Randomized growing-tree maze generation.
//!
//! # Algorithm
//!
//! 1. Fill the grid with walls and open a seed cell.
//! 2. Keep a stack of open cells.  Look at the top cell's neighbours in a
//!    random order and carve the first one that is a wall and has at least
//!    three wall-or-border neighbours of its own (i.e. touches no open cell
//!    other than the one we came from).  Push it.  If no neighbour
//!    qualifies, pop.
//! 3. Knock out `extra_walls` walls that have at least two wall-or-border
//!    neighbours and at least one open neighbour, adding loops without
//!    creating isolated pockets.
//!
//! The three-wall rule keeps corridors one cell wide and the passage graph a
//! tree, so step 2 always yields a single connected component containing the
//! seed.  Step 3 only ever opens a cell next to an already open one, so the
//! component stays connected.

use mz_core::{Coord, Direction, MazeRng};

use crate::{Grid, MazeResult};

/// Iteration cap for carving and for extra-wall removal.
///
/// Carving a tree visits each carved cell about twice, so a 7×7 matrix needs
/// well under 100 iterations; the cap exists only so that a pathological
/// grid (or an unlucky removal target that no wall can satisfy) cannot stall
/// a step.  Hitting it is logged and the partial result is kept.
pub const GENERATION_BUDGET: usize = 1000;

/// Outcome of one [`MazeGenerator::generate`] call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenerationStats {
    /// The cell carving started from.
    pub seed: Coord,
    /// Cells opened by the growing-tree pass (seed included).
    pub carved: usize,
    /// Extra walls knocked out after carving.
    pub extra_walls_removed: u32,
    /// Carving stopped with cells still on the stack.
    pub carve_budget_exhausted: bool,
    /// Fewer than the requested extra walls could be removed.
    pub removal_budget_exhausted: bool,
}

/// Growing-tree maze generator.
#[derive(Debug, Clone, Copy)]
pub struct MazeGenerator {
    /// Walls to remove after carving.
    pub extra_walls: u32,
}

impl Default for MazeGenerator {
    fn default() -> Self {
        Self { extra_walls: 1 }
    }
}

impl MazeGenerator {
    pub fn new(extra_walls: u32) -> Self {
        Self { extra_walls }
    }

    /// Regenerate `grid` in place.
    ///
    /// Carving starts at `seed` when it is inside the grid, otherwise at a
    /// random cell.  Any previous contents of `grid` are discarded.
    pub fn generate(
        &self,
        grid: &mut Grid,
        seed: Option<Coord>,
        rng:  &mut MazeRng,
    ) -> MazeResult<GenerationStats> {
        tracing::debug!(width = grid.width(), height = grid.height(), "starting maze generation");

        let mut stats = self.carve(grid, seed, rng)?;
        let (removed, exhausted) = self.remove_extra_walls(grid, rng)?;
        stats.extra_walls_removed = removed;
        stats.removal_budget_exhausted = exhausted;

        tracing::debug!(
            carved = stats.carved,
            extra_walls = removed,
            "maze generation complete"
        );
        Ok(stats)
    }

    /// The growing-tree pass alone (no extra-wall removal).
    pub fn carve(
        &self,
        grid: &mut Grid,
        seed: Option<Coord>,
        rng:  &mut MazeRng,
    ) -> MazeResult<GenerationStats> {
        grid.fill_walls();

        let seed = match seed {
            Some(c) if grid.in_bounds(c) => c,
            _ => grid.random_cell(rng),
        };
        grid.set_wall(seed, false)?;

        let mut stats = GenerationStats { seed, carved: 1, ..GenerationStats::default() };
        let mut stack = vec![seed];
        let mut budget = GENERATION_BUDGET;

        while let Some(&top) = stack.last() {
            if budget == 0 {
                tracing::warn!(
                    pending = stack.len(),
                    carved = stats.carved,
                    "carving budget exhausted; keeping partial maze"
                );
                stats.carve_budget_exhausted = true;
                break;
            }
            budget -= 1;

            let mut dirs = Direction::ALL;
            rng.shuffle(&mut dirs);

            let next = dirs.into_iter().map(|d| top.step(d)).find(|&n| {
                grid.in_bounds(n) && grid.is_wall(n) && grid.wall_and_border_count(n) >= 3
            });

            match next {
                Some(n) => {
                    grid.set_wall(n, false)?;
                    stack.push(n);
                    stats.carved += 1;
                }
                None => {
                    stack.pop();
                }
            }
        }

        Ok(stats)
    }

    /// Open up to `extra_walls` redundant walls.  Returns how many were
    /// removed and whether the budget ran out first.
    pub fn remove_extra_walls(&self, grid: &mut Grid, rng: &mut MazeRng) -> MazeResult<(u32, bool)> {
        let mut removed = 0;
        let mut budget = GENERATION_BUDGET;

        while removed < self.extra_walls {
            if budget == 0 {
                tracing::warn!(
                    removed,
                    wanted = self.extra_walls,
                    "failed to remove extra walls within budget"
                );
                return Ok((removed, true));
            }
            budget -= 1;

            let c = grid.random_cell(rng);
            if grid.is_wall(c)
                && grid.wall_and_border_count(c) >= 2
                && grid.open_neighbors(c).next().is_some()
            {
                grid.set_wall(c, false)?;
                removed += 1;
            }
        }

        Ok((removed, false))
    }
}
