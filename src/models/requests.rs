use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::domain::{ConsultantProfile, JobDescription};

/// Request to run a matching session, as handed over by the API layer.
///
/// Carries the JD, the candidate batch and the recruiter address the
/// result digest should go to. Wire (de)serialization is owned by the
/// caller; this type only defines the fields the engine recognizes.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct MatchRequest {
    pub job: JobDescription,
    #[serde(default)]
    pub profiles: Vec<ConsultantProfile>,
    #[validate(email)]
    pub notify_email: String,
    /// Per-request override of the configured top-K.
    #[serde(default)]
    pub top_k: Option<usize>,
}
