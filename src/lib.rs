//! RankItech Engine - consultant matching and ranking for RankItech
//!
//! This library ranks consultant profiles against a job description by
//! computing explainable fit scores and returning the top-K matches. The
//! core is a pure, deterministic computation; the `services` module adds
//! the background dispatch and notification ports that surround it.

pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod services;

// Re-export commonly used types
pub use crate::core::{CancellationToken, MatchSession};
pub use crate::error::{EngineError, Result};
pub use crate::models::{
    ConsultantProfile, JobDescription, MatchConfig, MatchRequest, MatchScore, RankedResult,
    SkillSet,
};
pub use crate::services::{EmailSimulationNotifier, MatchDispatcher, MatchNotifier};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        // Verify that the library exports work correctly
        let session = MatchSession::with_defaults();
        assert_eq!(session.config().top_k, 3);
    }
}
