//! `mz-core` — foundational types for the maze runner engine.
//!
//! This crate is a dependency of every other `mz-*` crate.  It has no
//! `mz-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                                |
//! |-------------|---------------------------------------------------------|
//! | [`coord`]   | `Coord`, `Direction`                                    |
//! | [`color`]   | `Color`, `Palette`, `Status`                            |
//! | [`config`]  | `MazeConfig` — grid size, agent tunables, reset delays  |
//! | [`rng`]     | `MazeRng` — seedable simulation RNG                     |
//! | [`error`]   | `CoreError`, `CoreResult`                               |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod color;
pub mod config;
pub mod coord;
pub mod error;
pub mod rng;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use color::{Color, Palette, Status};
pub use config::MazeConfig;
pub use coord::{Coord, Direction};
pub use error::{CoreError, CoreResult};
pub use rng::MazeRng;
