//! Error types for the matching engine

use thiserror::Error;

/// Errors surfaced by the engine and its dispatch layer.
///
/// An empty candidate batch is deliberately NOT an error: a session over
/// zero profiles succeeds with an empty ranking.
#[derive(Error, Debug)]
pub enum EngineError {
    /// Malformed or out-of-range input data (e.g. negative experience).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Rejected session configuration (e.g. top_k of zero).
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// The session was cancelled between profile scorings.
    #[error("match session cancelled")]
    Cancelled,

    /// The dispatch worker is unavailable or dropped the task.
    #[error("dispatch error: {0}")]
    Dispatch(String),
}

pub type Result<T> = std::result::Result<T, EngineError>;
