use mz_core::Coord;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AgentError {
    #[error("{agent} planned an illegal step from {from} to {to}")]
    InvalidStep {
        agent: &'static str,
        from:  Coord,
        to:    Coord,
    },
}

pub type AgentResult<T> = Result<T, AgentError>;
