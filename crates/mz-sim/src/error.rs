use mz_agent::AgentError;
use mz_core::CoreError;
use mz_maze::MazeError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(#[from] CoreError),

    #[error("maze error: {0}")]
    Maze(#[from] MazeError),

    #[error("agent error: {0}")]
    Agent(#[from] AgentError),

    /// A step was attempted while the scenario has no runner or exit, e.g.
    /// after a failed layout.
    #[error("scenario is not initialised")]
    NotInitialized,
}

pub type SimResult<T> = Result<T, SimError>;
