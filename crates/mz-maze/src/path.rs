//! Grid search: the `PathFinder` trait and the default [`GridSearch`].
//!
//! # Two searches
//!
//! - [`PathFinder::bounded_sense`] answers "can I reach `goal` within `n`
//!   steps?"  Agents use it to sense each other and the runner uses it to
//!   plan towards the exit.  It is a depth-first search, so the route it
//!   returns is plausible rather than shortest.
//! - [`PathFinder::longest_path`] answers "which reachable cell is farthest
//!   away?"  It places the exit and drives the runner's flight.
//!
//! Both shuffle the direction order at every expansion, so repeated calls on
//! the same maze can return different (equally valid) routes.  That variety
//! is what makes the chase look alive; seed the RNG to pin it down.
//!
//! # Avoidance
//!
//! Both searches accept an optional cell to avoid.  A cell is impassable if
//! it *is* that cell or is orthogonally adjacent to it, which models "never
//! step within reach of a sensed threat".  The start cell is exempt.

use std::collections::VecDeque;

use rustc_hash::FxHashMap;

use mz_core::{Coord, Direction, MazeRng};

use crate::Grid;

// ── Path ──────────────────────────────────────────────────────────────────────

/// An ordered list of cells to visit.  The head is the next step; the
/// agent's current cell is never included.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path {
    pub steps: VecDeque<Coord>,
}

impl Path {
    #[inline]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Remove and return the next step.
    #[inline]
    pub fn next_step(&mut self) -> Option<Coord> {
        self.steps.pop_front()
    }

    /// The final cell of the path, if any.
    #[inline]
    pub fn destination(&self) -> Option<Coord> {
        self.steps.back().copied()
    }

    /// Keep only the first `len` steps.
    #[inline]
    pub fn truncate(&mut self, len: usize) {
        self.steps.truncate(len);
    }

    #[inline]
    pub fn clear(&mut self) {
        self.steps.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &Coord> {
        self.steps.iter()
    }
}

impl FromIterator<Coord> for Path {
    fn from_iter<I: IntoIterator<Item = Coord>>(iter: I) -> Self {
        Path { steps: iter.into_iter().collect() }
    }
}

impl From<Vec<Coord>> for Path {
    fn from(steps: Vec<Coord>) -> Self {
        Path { steps: steps.into() }
    }
}

// ── PathFinder trait ──────────────────────────────────────────────────────────

/// Pluggable grid search.
///
/// Implement this trait to give agents a different notion of sensing or
/// fleeing (e.g. line-of-sight sensing) without touching the agents or the
/// simulation loop.  `max_distance = None` means unbounded.
pub trait PathFinder {
    /// Find a route from `start` to `goal` of at most `max_distance` steps
    /// that never enters `avoid` or a cell adjacent to it.
    ///
    /// Returns `None` if no such route exists and `Some(empty)` when
    /// `start == goal`.
    fn bounded_sense(
        &self,
        grid:         &Grid,
        start:        Coord,
        avoid:        Option<Coord>,
        goal:         Coord,
        max_distance: Option<u32>,
        rng:          &mut MazeRng,
    ) -> Option<Path>;

    /// Route to the reachable cell farthest (in steps) from `start`, under the
    /// same avoidance and bound rules.  Empty if nothing beyond `start` can
    /// be reached.
    fn longest_path(
        &self,
        grid:         &Grid,
        start:        Coord,
        avoid:        Option<Coord>,
        max_distance: Option<u32>,
        rng:          &mut MazeRng,
    ) -> Path;
}

/// `true` if an agent avoiding `avoid` may stand on `cell`.
#[inline]
pub fn respects_avoidance(cell: Coord, avoid: Option<Coord>) -> bool {
    avoid.is_none_or(|a| cell != a && !cell.is_adjacent(a))
}

#[inline]
fn passable(grid: &Grid, cell: Coord, avoid: Option<Coord>) -> bool {
    grid.is_open(cell) && respects_avoidance(cell, avoid)
}

#[inline]
fn beyond_bound(dist: u32, max_distance: Option<u32>) -> bool {
    max_distance.is_some_and(|max| dist + 1 > max)
}

fn shuffled_directions(rng: &mut MazeRng) -> [Direction; 4] {
    let mut dirs = Direction::ALL;
    rng.shuffle(&mut dirs);
    dirs
}

// ── GridSearch ────────────────────────────────────────────────────────────────

/// Explicit-stack DFS sensing plus BFS farthest-cell search.
///
/// Neither search recurses, so stack depth is constant regardless of maze
/// size.
#[derive(Debug, Clone, Copy, Default)]
pub struct GridSearch;

impl PathFinder for GridSearch {
    fn bounded_sense(
        &self,
        grid:         &Grid,
        start:        Coord,
        avoid:        Option<Coord>,
        goal:         Coord,
        max_distance: Option<u32>,
        rng:          &mut MazeRng,
    ) -> Option<Path> {
        // Frontier of (cell, distance from start).  `trail` mirrors the
        // recursion stack of a recursive DFS: before a popped entry at depth
        // d is expanded, the trail is cut back to its first d cells, which at
        // that moment are exactly the entry's ancestors.
        let mut frontier: Vec<(Coord, u32)> = vec![(start, 0)];
        let mut trail: Vec<Coord> = Vec::new();
        // Shallowest depth at which each cell has been expanded.  A cell is
        // expanded again only via a strictly shorter route, which keeps the
        // search complete within `max_distance`.
        let mut expanded: FxHashMap<Coord, u32> = FxHashMap::default();

        while let Some((cell, dist)) = frontier.pop() {
            if expanded.get(&cell).is_some_and(|&d| d <= dist) {
                continue;
            }
            expanded.insert(cell, dist);

            trail.truncate(dist as usize);
            trail.push(cell);

            if cell == goal {
                tracing::trace!(%start, %goal, steps = dist, "sensed path");
                return Some(trail.into_iter().skip(1).collect());
            }

            if beyond_bound(dist, max_distance) {
                continue;
            }

            for dir in shuffled_directions(rng) {
                let next = cell.step(dir);
                if passable(grid, next, avoid)
                    && expanded.get(&next).is_none_or(|&d| d > dist + 1)
                {
                    frontier.push((next, dist + 1));
                }
            }
        }

        None
    }

    fn longest_path(
        &self,
        grid:         &Grid,
        start:        Coord,
        avoid:        Option<Coord>,
        max_distance: Option<u32>,
        rng:          &mut MazeRng,
    ) -> Path {
        let mut queue: VecDeque<(Coord, u32)> = VecDeque::from([(start, 0)]);
        // came_from[v] = cell that discovered v.  Start maps to itself.
        let mut came_from: FxHashMap<Coord, Coord> = FxHashMap::default();
        came_from.insert(start, start);
        let mut farthest = (start, 0u32);

        while let Some((cell, dist)) = queue.pop_front() {
            if beyond_bound(dist, max_distance) {
                continue;
            }

            for dir in shuffled_directions(rng) {
                let next = cell.step(dir);
                if !passable(grid, next, avoid) || came_from.contains_key(&next) {
                    continue;
                }
                came_from.insert(next, cell);
                queue.push_back((next, dist + 1));

                // Strict `>`: the first cell discovered at a new depth wins.
                if dist + 1 > farthest.1 {
                    farthest = (next, dist + 1);
                }
            }
        }

        if farthest.1 == 0 {
            return Path::default();
        }

        reconstruct(&came_from, start, farthest.0)
    }
}

fn reconstruct(came_from: &FxHashMap<Coord, Coord>, start: Coord, end: Coord) -> Path {
    let mut steps = VecDeque::new();
    let mut cur = end;
    while cur != start {
        steps.push_front(cur);
        let Some(&prev) = came_from.get(&cur) else {
            break;
        };
        cur = prev;
    }
    Path { steps }
}
