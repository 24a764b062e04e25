//! `mz-maze` — maze grid, generation, placement, and grid search.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                     |
//! |---------------|--------------------------------------------------------------|
//! | [`grid`]      | `Grid` — wall matrix, bounds and adjacency queries           |
//! | [`generator`] | `MazeGenerator` (growing-tree carve + extra-wall removal)    |
//! | [`placement`] | `place_runner`, `place_sentry`, `place_exit`                 |
//! | [`path`]      | `Path`, `PathFinder` trait, `GridSearch`                     |
//! | [`error`]     | `MazeError`, `MazeResult<T>`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types.           |

pub mod error;
pub mod generator;
pub mod grid;
pub mod path;
pub mod placement;

#[cfg(test)]
mod tests;

pub use error::{MazeError, MazeResult};
pub use generator::{GENERATION_BUDGET, GenerationStats, MazeGenerator};
pub use grid::Grid;
pub use path::{GridSearch, Path, PathFinder, respects_avoidance};
pub use placement::{SentryPlacement, place_exit, place_runner, place_sentry, sentry_min_distance};
