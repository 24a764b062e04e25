//! `mz-sim` — tick orchestrator for the maze runner engine.
//!
//! # Tick state machine
//!
//! ```text
//! ResetPending(0)  → init(), full redraw, Running            "changed"
//! ResetPending(n)  → ResetPending(n - 1)                     "unchanged"
//! Running:
//!   ① runner steps;  on the exit  → Goal,   redraw, ResetPending(goal_delay)
//!   ② sentry steps;  on runner    → Caught,         ResetPending(catch_delay)
//!   ③ redraw if anything moved
//!   any error                     → Fault,          ResetPending(error_delay)
//! ```
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use mz_core::{MazeConfig, Palette};
//! use mz_sim::{DisplayTask, FrameBuffer, MazeSimBuilder, SimHost};
//!
//! let sim = MazeSimBuilder::new(MazeConfig::default(), Palette::default(), FrameBuffer::new(7, 7))
//!     .build()?;
//! let mut host = SimHost::new(sim);
//! host.start();
//! loop {
//!     host.poll();
//!     std::thread::sleep(std::time::Duration::from_millis(60));
//! }
//! ```

pub mod builder;
pub mod error;
pub mod host;
pub mod sim;
pub mod sink;


pub use builder::MazeSimBuilder;
pub use error::{SimError, SimResult};
pub use host::{DisplayTask, SimHost};
pub use sim::{MazeSim, Phase};
pub use sink::{DrawSink, FrameBuffer, NoopStatus, StatusSink};
