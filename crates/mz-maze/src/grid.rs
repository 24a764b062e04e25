//! Maze grid representation.
//!
//! # Data layout
//!
//! Walls are a single row-major `Vec<bool>` (`true` = wall), indexed as
//! `y * width + x`.  Cells outside the grid behave as walls for every query,
//! so callers can probe neighbours of border cells without bounds checks of
//! their own.

use std::fmt;

use mz_core::{Coord, MazeRng};

use crate::{MazeError, MazeResult};

/// A rectangular wall/path matrix.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    width:  u32,
    height: u32,
    walls:  Vec<bool>,
}

impl Grid {
    /// A `width` × `height` grid filled entirely with walls.
    pub fn new(width: u32, height: u32) -> MazeResult<Self> {
        if width == 0 || height == 0 || width > i32::MAX as u32 || height > i32::MAX as u32 {
            return Err(MazeError::EmptyGrid { width, height });
        }
        Ok(Self {
            width,
            height,
            walls: vec![true; width as usize * height as usize],
        })
    }

    /// Parse a grid from text rows: `#` is a wall, anything else is open.
    ///
    /// Mostly useful for fixtures and tests.
    pub fn from_rows(rows: &[&str]) -> MazeResult<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, |r| r.chars().count());
        let mut grid = Grid::new(width as u32, height as u32)?;
        for (y, row) in rows.iter().enumerate() {
            let got = row.chars().count();
            if got != width {
                return Err(MazeError::RaggedRows { row: y, expected: width, got });
            }
            for (x, ch) in row.chars().enumerate() {
                grid.walls[y * width + x] = ch == '#';
            }
        }
        Ok(grid)
    }

    // ── Dimensions ────────────────────────────────────────────────────────

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn cell_count(&self) -> usize {
        self.walls.len()
    }

    // ── Cell queries ──────────────────────────────────────────────────────

    #[inline]
    pub fn in_bounds(&self, c: Coord) -> bool {
        c.x >= 0 && c.y >= 0 && (c.x as u32) < self.width && (c.y as u32) < self.height
    }

    #[inline]
    fn index(&self, c: Coord) -> Option<usize> {
        self.in_bounds(c)
            .then(|| c.y as usize * self.width as usize + c.x as usize)
    }

    /// `true` for walls and for every out-of-bounds coordinate.
    #[inline]
    pub fn is_wall(&self, c: Coord) -> bool {
        self.index(c).is_none_or(|i| self.walls[i])
    }

    /// `true` for in-bounds path cells.
    #[inline]
    pub fn is_open(&self, c: Coord) -> bool {
        !self.is_wall(c)
    }

    /// Number of orthogonal neighbours that are walls or lie off the grid.
    pub fn wall_and_border_count(&self, c: Coord) -> u32 {
        c.neighbors().filter(|&n| self.is_wall(n)).count() as u32
    }

    /// Orthogonal neighbours of `c` that are open.
    pub fn open_neighbors(&self, c: Coord) -> impl Iterator<Item = Coord> + '_ {
        c.neighbors().filter(move |&n| self.is_open(n))
    }

    /// Every cell in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Coord> + '_ {
        let w = self.width as i32;
        (0..self.walls.len()).map(move |i| Coord::new(i as i32 % w, i as i32 / w))
    }

    /// Every open cell in row-major order.
    pub fn open_cells(&self) -> impl Iterator<Item = Coord> + '_ {
        self.cells().filter(move |&c| self.is_open(c))
    }

    pub fn open_count(&self) -> usize {
        self.walls.iter().filter(|&&w| !w).count()
    }

    /// A uniformly random cell, wall or not.
    pub fn random_cell(&self, rng: &mut MazeRng) -> Coord {
        Coord::new(
            rng.gen_range(0..self.width as i32),
            rng.gen_range(0..self.height as i32),
        )
    }

    // ── Mutation ──────────────────────────────────────────────────────────

    pub fn set_wall(&mut self, c: Coord, wall: bool) -> MazeResult<()> {
        let i = self.index(c).ok_or(MazeError::OutOfBounds(c))?;
        self.walls[i] = wall;
        Ok(())
    }

    /// Turn every cell back into a wall.
    pub fn fill_walls(&mut self) {
        self.walls.fill(true);
    }
}

impl fmt::Display for Grid {
    /// One text line per row, `#` for walls and a space for path cells.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, &wall) in self.walls.iter().enumerate() {
            if i > 0 && i % self.width as usize == 0 {
                f.write_str("\n")?;
            }
            f.write_str(if wall { "#" } else { " " })?;
        }
        Ok(())
    }
}
