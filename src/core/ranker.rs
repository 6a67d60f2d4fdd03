//! Batch scoring, ordering and top-K selection.

use std::cmp::Ordering;
use std::sync::atomic::{AtomicBool, Ordering as AtomicOrdering};
use std::sync::Arc;

use crate::core::extractor::SkillExtractor;
use crate::core::scorer::score_profile;
use crate::error::{EngineError, Result};
use crate::models::{ConsultantProfile, MatchScore, ScoringWeights, SkillSet};

/// Cooperative cancellation signal for long-running sessions.
///
/// Checked between per-profile scorings, never mid-computation of a single
/// score: one score is cheap and indivisible.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
}

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, AtomicOrdering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(AtomicOrdering::SeqCst)
    }
}

/// Scores every candidate against one job and keeps the best K.
#[derive(Debug, Clone)]
pub struct Ranker {
    extractor: SkillExtractor,
    weights: ScoringWeights,
}

impl Ranker {
    pub fn new(extractor: SkillExtractor, weights: ScoringWeights) -> Self {
        Self { extractor, weights }
    }

    /// Score all profiles independently, sort by overall score descending
    /// and truncate to the top K. Output length is
    /// `min(k, profiles.len())`; an empty batch yields an empty ranking,
    /// not an error.
    ///
    /// Scoring aborts with `Cancelled` if `cancel` fires between profiles.
    pub fn rank(
        &self,
        job_skills: &SkillSet,
        job_min_experience: Option<f64>,
        profiles: &[ConsultantProfile],
        k: usize,
        cancel: &CancellationToken,
    ) -> Result<Vec<MatchScore>> {
        if k == 0 {
            return Err(EngineError::InvalidConfiguration(
                "top_k must be at least 1".to_string(),
            ));
        }

        let mut scored = Vec::with_capacity(profiles.len());

        for profile in profiles {
            if cancel.is_cancelled() {
                return Err(EngineError::Cancelled);
            }

            let profile_skills = self.extractor.extract(&profile.summary, &profile.skills);
            scored.push(score_profile(
                job_skills,
                job_min_experience,
                profile,
                &profile_skills,
                &self.weights,
            )?);
        }

        scored.sort_by(compare_scores);
        scored.truncate(k);

        Ok(scored)
    }
}

/// Total order over match scores: overall descending, then skill overlap
/// descending, then experience descending, then consultant id ascending.
///
/// The id tie-break makes ranking fully deterministic for identical
/// inputs. `total_cmp` keeps the comparison a total order even for
/// degenerate float values.
fn compare_scores(a: &MatchScore, b: &MatchScore) -> Ordering {
    b.overall
        .total_cmp(&a.overall)
        .then_with(|| b.breakdown.skill_overlap.total_cmp(&a.breakdown.skill_overlap))
        .then_with(|| b.breakdown.experience.total_cmp(&a.breakdown.experience))
        .then_with(|| a.consultant_id.cmp(&b.consultant_id))
}
