//! Seedable simulation RNG.
//!
//! Maze carving, agent placement, and search tie-breaking all draw from one
//! `MazeRng` owned by the simulation.  Seeding it with a fixed value makes
//! an entire run (every maze, every chase) reproducible, which is what the
//! tests rely on.  Hosts that want a different maze on every power-up use
//! [`MazeRng::from_entropy`].

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Simulation-level RNG.
///
/// Single-threaded by construction: the engine is stepped by one driver and
/// never shares the RNG.
pub struct MazeRng(SmallRng);

impl MazeRng {
    pub fn new(seed: u64) -> Self {
        MazeRng(SmallRng::seed_from_u64(seed))
    }

    /// Seed from the operating system's entropy source.
    pub fn from_entropy() -> Self {
        MazeRng(SmallRng::from_entropy())
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// Shuffle a mutable slice in-place (Fisher-Yates).
    #[inline]
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.0);
    }

    /// Choose a random element from a slice.
    /// Returns `None` if the slice is empty.
    #[inline]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.0)
    }
}
