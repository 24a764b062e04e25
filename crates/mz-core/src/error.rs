//! Core error type.
//!
//! Sub-crates define their own error enums and wrap `CoreError` as one
//! variant via `#[from]` where configuration problems can reach them.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("grid dimensions {width}x{height} are invalid")]
    InvalidDimensions { width: u32, height: u32 },
}

/// Shorthand result type for `mz-core`.
pub type CoreResult<T> = Result<T, CoreError>;
