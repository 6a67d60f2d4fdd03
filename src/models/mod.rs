// Model exports
pub mod domain;
pub mod requests;

pub use domain::{
    ConsultantProfile, JobDescription, MatchConfig, MatchScore, RankedResult, ScoreBreakdown,
    ScoringWeights, SkillSet,
};
pub use requests::MatchRequest;
