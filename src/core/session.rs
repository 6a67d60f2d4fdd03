//! Match session orchestration.

use chrono::Utc;
use tracing::debug;
use uuid::Uuid;

use crate::core::extractor::SkillExtractor;
use crate::core::normalizer::Normalizer;
use crate::core::ranker::{CancellationToken, Ranker};
use crate::error::Result;
use crate::models::{ConsultantProfile, JobDescription, MatchConfig, RankedResult};

/// Ties one job description to one candidate batch and produces the final
/// ranked result.
///
/// This is the single externally callable entry point of the core. A run
/// is a pure, synchronous function over its inputs and the session
/// configuration: it either fully succeeds with a [`RankedResult`] or
/// fails before producing any partial output.
#[derive(Debug, Clone)]
pub struct MatchSession {
    config: MatchConfig,
}

impl MatchSession {
    pub fn new(config: MatchConfig) -> Self {
        Self { config }
    }

    pub fn with_defaults() -> Self {
        Self::new(MatchConfig::default())
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Run the session to completion.
    pub fn run(
        &self,
        job: &JobDescription,
        profiles: &[ConsultantProfile],
    ) -> Result<RankedResult> {
        self.run_with_cancel(job, profiles, &CancellationToken::new())
    }

    /// Run the session with a cooperative cancellation token, checked
    /// between per-profile scorings.
    pub fn run_with_cancel(
        &self,
        job: &JobDescription,
        profiles: &[ConsultantProfile],
        cancel: &CancellationToken,
    ) -> Result<RankedResult> {
        self.config.validate()?;

        let normalizer = Normalizer::new(self.config.stop_words.clone());
        let extractor = SkillExtractor::new(normalizer, self.config.inferred_skill_discount);

        // Job skills are extracted once; per-profile extraction happens
        // inside the ranker.
        let job_skills = extractor.extract(&job.body, &job.required_skills);
        debug!(
            job_id = %job.id,
            job_terms = job_skills.len(),
            candidates = profiles.len(),
            "starting match session"
        );

        let ranker = Ranker::new(extractor, self.config.weights());
        let ranked = ranker.rank(
            &job_skills,
            job.min_experience_years,
            profiles,
            self.config.top_k,
            cancel,
        )?;

        Ok(RankedResult {
            session_id: Uuid::new_v4(),
            job_id: job.id.clone(),
            job_title: job.title.clone(),
            ranked,
            total_candidates: profiles.len(),
            created_at: Utc::now(),
        })
    }
}

impl Default for MatchSession {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;

    fn job() -> JobDescription {
        JobDescription {
            id: "jd-1".to_string(),
            title: "Senior Python Developer".to_string(),
            body: "We need a senior developer fluent in Python and SQL, \
                   comfortable with Docker."
                .to_string(),
            required_skills: vec!["python".to_string(), "sql".to_string()],
            min_experience_years: Some(3.0),
        }
    }

    fn profile(id: &str, name: &str, skills: &[&str], experience_years: f64) -> ConsultantProfile {
        ConsultantProfile {
            id: id.to_string(),
            name: name.to_string(),
            summary: String::new(),
            skills: skills.iter().map(|s| s.to_string()).collect(),
            experience_years,
        }
    }

    #[test]
    fn test_run_ranks_batch() {
        let session = MatchSession::with_defaults();
        let profiles = vec![
            profile("c102", "Bob", &["java", "spring"], 3.0),
            profile("c101", "Alice", &["python", "sql", "docker"], 5.0),
        ];

        let result = session.run(&job(), &profiles).unwrap();

        assert_eq!(result.job_id, "jd-1");
        assert_eq!(result.total_candidates, 2);
        assert_eq!(result.ranked[0].consultant_id, "c101");
    }

    #[test]
    fn test_empty_batch_is_not_an_error() {
        let result = MatchSession::with_defaults().run(&job(), &[]).unwrap();

        assert!(result.ranked.is_empty());
        assert_eq!(result.total_candidates, 0);
    }

    #[test]
    fn test_invalid_config_fails_before_scoring() {
        let session = MatchSession::new(MatchConfig {
            top_k: 0,
            ..MatchConfig::default()
        });

        let result = session.run(&job(), &[profile("c1", "A", &["python"], 2.0)]);
        assert!(matches!(result, Err(EngineError::InvalidConfiguration(_))));
    }

    #[test]
    fn test_negative_experience_fails_whole_session() {
        let result = MatchSession::with_defaults()
            .run(&job(), &[profile("c1", "A", &["python"], -2.0)]);

        assert!(matches!(result, Err(EngineError::InvalidInput(_))));
    }

    #[test]
    fn test_deterministic_modulo_timestamp() {
        let session = MatchSession::with_defaults();
        let profiles = vec![
            profile("c103", "Charlie", &["python", "fastapi", "docker", "git"], 4.0),
            profile("c101", "Alice", &["python", "flask", "docker"], 5.0),
            profile("c104", "David", &["python", "fastapi"], 2.0),
        ];

        let first = session.run(&job(), &profiles).unwrap();
        let second = session.run(&job(), &profiles).unwrap();

        let a = serde_json::to_string(&first.ranked).unwrap();
        let b = serde_json::to_string(&second.ranked).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_free_text_only_job_still_matches() {
        let jd = JobDescription {
            id: "jd-2".to_string(),
            title: "Data Engineer".to_string(),
            body: "Python pipelines, Python tooling, SQL warehousing".to_string(),
            required_skills: vec![],
            min_experience_years: None,
        };
        let profiles = vec![
            profile("c1", "A", &["python", "sql"], 1.0),
            profile("c2", "B", &["cobol"], 10.0),
        ];

        let result = MatchSession::with_defaults().run(&jd, &profiles).unwrap();
        assert_eq!(result.ranked[0].consultant_id, "c1");
    }
}
