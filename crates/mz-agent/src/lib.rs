//! `mz-agent` — per-tick movement policies for the runner and the sentry.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                      |
//! |-------------|---------------------------------------------------------------|
//! | [`state`]   | `AgentState` — location, planned path, cooldown               |
//! | [`context`] | `StepContext<'a>` — read-only view of the scenario for a step |
//! | [`agent`]   | `Agent` trait                                                 |
//! | [`runner`]  | `Runner`, `RunnerTuning` — heads for the exit, flees the sentry |
//! | [`sentry`]  | `Sentry`, `SentryTuning` — chases a sensed runner             |
//! | [`error`]   | `AgentError`, `AgentResult<T>`                                |
//!
//! # Movement model
//!
//! Agents move at most one orthogonal cell per step.  After moving, an agent
//! waits out a cooldown (its *speed*) before it may move again, so relative
//! speeds are expressed purely in ticks.  Each agent follows a planned
//! [`Path`][mz_maze::Path] and only replans when its policy says so; terminal
//! conditions (reaching the exit, being caught) are detected by the
//! simulation, not by the agents.

pub mod agent;
pub mod context;
pub mod error;
pub mod runner;
pub mod sentry;
pub mod state;


pub use agent::Agent;
pub use context::StepContext;
pub use error::{AgentError, AgentResult};
pub use runner::{Runner, RunnerTuning};
pub use sentry::{Sentry, SentryTuning};
pub use state::AgentState;
