use std::collections::{btree_map, BTreeMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::core::normalizer::default_stop_words;
use crate::error::{EngineError, Result};

/// Job description to match consultants against.
///
/// Immutable for the lifetime of a session; the engine never writes back
/// to it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobDescription {
    pub id: String,
    pub title: String,
    /// Free-text body of the JD.
    pub body: String,
    /// Structured required-skill list, if the recruiter supplied one.
    #[serde(default)]
    pub required_skills: Vec<String>,
    /// Minimum years of experience. `None` (or zero) means no requirement
    /// and must never penalize a candidate.
    #[serde(default)]
    pub min_experience_years: Option<f64>,
}

/// A consultant profile supplied as part of a candidate batch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsultantProfile {
    pub id: String,
    pub name: String,
    /// Free-text skills/summary section.
    #[serde(default)]
    pub summary: String,
    /// Structured skill list, if the profile carries one.
    #[serde(default)]
    pub skills: Vec<String>,
    pub experience_years: f64,
}

/// Weighted sparse skill mapping derived from one document.
///
/// Weights are in [0, 1] and express relative importance within the source
/// text; they are not a probability distribution and do not sum to 1.
/// Zero-weight terms are absent rather than stored. Backed by a `BTreeMap`
/// so iteration order is deterministic.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SkillSet {
    terms: BTreeMap<String, f64>,
}

impl SkillSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a term, keeping the higher weight if it is already present.
    /// Non-positive weights are dropped; weights above 1.0 are capped.
    pub fn insert(&mut self, term: String, weight: f64) {
        if weight <= 0.0 {
            return;
        }
        let weight = weight.min(1.0);
        let entry = self.terms.entry(term).or_insert(0.0);
        if weight > *entry {
            *entry = weight;
        }
    }

    pub fn weight(&self, term: &str) -> Option<f64> {
        self.terms.get(term).copied()
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, f64> {
        self.terms.iter()
    }

    /// Sum of all weights, used as the scorer's overlap denominator.
    pub fn total_weight(&self) -> f64 {
        self.terms.values().sum()
    }
}

impl FromIterator<(String, f64)> for SkillSet {
    fn from_iter<I: IntoIterator<Item = (String, f64)>>(iter: I) -> Self {
        let mut set = SkillSet::new();
        for (term, weight) in iter {
            set.insert(term, weight);
        }
        set
    }
}

/// Per-component breakdown of a fit score, kept for explainability.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ScoreBreakdown {
    pub skill_overlap: f64,
    pub experience: f64,
}

/// Fit score for one (job, consultant) pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchScore {
    pub consultant_id: String,
    pub consultant_name: String,
    /// Overall fit in [0, 1].
    pub overall: f64,
    pub breakdown: ScoreBreakdown,
    /// Job skill terms the consultant covers.
    pub matched_skills: Vec<String>,
    /// Job skill terms the consultant lacks.
    pub missing_skills: Vec<String>,
}

/// Final output of a match session: the top-K scores in rank order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedResult {
    pub session_id: uuid::Uuid,
    pub job_id: String,
    pub job_title: String,
    /// Non-increasing by `overall`; ties resolved deterministically.
    pub ranked: Vec<MatchScore>,
    pub total_candidates: usize,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// Component weights for the overall score combination.
#[derive(Debug, Clone, Copy)]
pub struct ScoringWeights {
    pub skill: f64,
    pub experience: f64,
}

impl ScoringWeights {
    /// Build the convex pair from a single skill weight in [0, 1].
    pub fn from_skill_weight(skill_weight: f64) -> Self {
        Self {
            skill: skill_weight,
            experience: 1.0 - skill_weight,
        }
    }
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            skill: 0.7,
            experience: 0.3,
        }
    }
}

/// Session configuration recognized by the engine.
#[derive(Debug, Clone)]
pub struct MatchConfig {
    /// Number of top candidates to return. Must be at least 1.
    pub top_k: usize,
    /// Share of the overall score taken by skill overlap, in [0, 1].
    pub skill_weight: f64,
    /// Weight discount applied to skills inferred from free text relative
    /// to explicitly listed ones, in [0, 1].
    pub inferred_skill_discount: f64,
    pub stop_words: HashSet<String>,
}

impl MatchConfig {
    pub fn validate(&self) -> Result<()> {
        if self.top_k == 0 {
            return Err(EngineError::InvalidConfiguration(
                "top_k must be at least 1".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&self.skill_weight) {
            return Err(EngineError::InvalidConfiguration(format!(
                "skill_weight must be in [0, 1], got {}",
                self.skill_weight
            )));
        }
        if !(0.0..=1.0).contains(&self.inferred_skill_discount) {
            return Err(EngineError::InvalidConfiguration(format!(
                "inferred_skill_discount must be in [0, 1], got {}",
                self.inferred_skill_discount
            )));
        }
        Ok(())
    }

    pub fn weights(&self) -> ScoringWeights {
        ScoringWeights::from_skill_weight(self.skill_weight)
    }
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            top_k: 3,
            skill_weight: 0.7,
            inferred_skill_discount: 0.5,
            stop_words: default_stop_words(),
        }
    }
}
