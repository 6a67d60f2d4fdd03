//! Fit scoring for one (job, consultant) pair.

use crate::error::{EngineError, Result};
use crate::models::{ConsultantProfile, MatchScore, ScoreBreakdown, ScoringWeights, SkillSet};

/// Compute the fit score for a single consultant against a job's skill
/// requirements.
///
/// Scoring formula:
/// ```text
/// overall = clamp(skill_overlap * w_skill + experience * w_experience, 0, 1)
/// ```
/// where `skill_overlap` is the weighted intersection of job and profile
/// skill terms and `experience` measures adequacy against the job's
/// minimum. Pure function: no side effects, no hidden state, no
/// randomness, so a score is exactly reproducible from its inputs.
pub fn score_profile(
    job_skills: &SkillSet,
    job_min_experience: Option<f64>,
    profile: &ConsultantProfile,
    profile_skills: &SkillSet,
    weights: &ScoringWeights,
) -> Result<MatchScore> {
    if profile.experience_years < 0.0 {
        return Err(EngineError::InvalidInput(format!(
            "profile {} has negative experience ({})",
            profile.id, profile.experience_years
        )));
    }

    let (skill_overlap, matched_skills, missing_skills) =
        calculate_skill_overlap(job_skills, profile_skills);

    let experience =
        calculate_experience_score(profile.experience_years, job_min_experience);

    let overall =
        (skill_overlap * weights.skill + experience * weights.experience).clamp(0.0, 1.0);

    Ok(MatchScore {
        consultant_id: profile.id.clone(),
        consultant_name: profile.name.clone(),
        overall,
        breakdown: ScoreBreakdown {
            skill_overlap,
            experience,
        },
        matched_skills,
        missing_skills,
    })
}

/// Weighted skill intersection (0-1) plus the matched/missing term lists.
///
/// Each job term with weight `w_j` contributes `min(w_j, w_p)` when the
/// profile carries it with weight `w_p`, else 0 and the term is recorded
/// as missing. A job with no skill terms scores exactly 0, never NaN.
fn calculate_skill_overlap(
    job_skills: &SkillSet,
    profile_skills: &SkillSet,
) -> (f64, Vec<String>, Vec<String>) {
    let denominator = job_skills.total_weight();
    if denominator <= 0.0 {
        return (0.0, Vec::new(), Vec::new());
    }

    let mut contribution = 0.0;
    let mut matched = Vec::new();
    let mut missing = Vec::new();

    for (term, &job_weight) in job_skills.iter() {
        match profile_skills.weight(term) {
            Some(profile_weight) => {
                contribution += job_weight.min(profile_weight);
                matched.push(term.clone());
            }
            None => missing.push(term.clone()),
        }
    }

    (contribution / denominator, matched, missing)
}

/// Experience adequacy score (0-1).
///
/// Exactly 1.0 when the job specifies no minimum: the absence of a
/// requirement must never penalize a candidate.
fn calculate_experience_score(profile_years: f64, job_min_years: Option<f64>) -> f64 {
    match job_min_years {
        Some(min) if min > 0.0 => (profile_years / min.max(1.0)).clamp(0.0, 1.0),
        _ => 1.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(id: &str, experience_years: f64) -> ConsultantProfile {
        ConsultantProfile {
            id: id.to_string(),
            name: format!("Consultant {}", id),
            summary: String::new(),
            skills: vec![],
            experience_years,
        }
    }

    fn skills(entries: &[(&str, f64)]) -> SkillSet {
        entries
            .iter()
            .map(|(term, weight)| (term.to_string(), *weight))
            .collect()
    }

    #[test]
    fn test_full_match_scores_one() {
        let job = skills(&[("python", 1.0), ("sql", 0.6)]);
        let profile_skills = skills(&[("python", 1.0), ("sql", 1.0)]);

        let score = score_profile(
            &job,
            Some(3.0),
            &profile("a", 5.0),
            &profile_skills,
            &ScoringWeights::default(),
        )
        .unwrap();

        assert!((score.breakdown.skill_overlap - 1.0).abs() < 1e-12);
        assert!((score.breakdown.experience - 1.0).abs() < 1e-12);
        assert!((score.overall - 1.0).abs() < 1e-12);
        assert_eq!(score.matched_skills, vec!["python", "sql"]);
        assert!(score.missing_skills.is_empty());
    }

    #[test]
    fn test_partial_match_worked_example() {
        // python covered, sql missing, 1 of 3 required years
        let job = skills(&[("python", 1.0), ("sql", 0.6)]);
        let profile_skills = skills(&[("python", 1.0)]);

        let score = score_profile(
            &job,
            Some(3.0),
            &profile("b", 1.0),
            &profile_skills,
            &ScoringWeights::default(),
        )
        .unwrap();

        assert!((score.breakdown.skill_overlap - 0.625).abs() < 1e-12);
        assert!((score.breakdown.experience - 1.0 / 3.0).abs() < 1e-12);
        assert!((score.overall - 0.5375).abs() < 1e-12);
        assert_eq!(score.missing_skills, vec!["sql"]);
    }

    #[test]
    fn test_lower_profile_weight_caps_contribution() {
        let job = skills(&[("python", 1.0)]);
        let profile_skills = skills(&[("python", 0.5)]);

        let score = score_profile(
            &job,
            None,
            &profile("c", 2.0),
            &profile_skills,
            &ScoringWeights::default(),
        )
        .unwrap();

        assert!((score.breakdown.skill_overlap - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_empty_job_skills_guarded() {
        let score = score_profile(
            &SkillSet::new(),
            None,
            &profile("d", 2.0),
            &skills(&[("python", 1.0)]),
            &ScoringWeights::default(),
        )
        .unwrap();

        assert_eq!(score.breakdown.skill_overlap, 0.0);
        assert!(score.overall.is_finite());
    }

    #[test]
    fn test_no_minimum_experience_is_neutral() {
        for years in [0.0, 0.5, 20.0] {
            assert_eq!(calculate_experience_score(years, None), 1.0);
            assert_eq!(calculate_experience_score(years, Some(0.0)), 1.0);
        }
    }

    #[test]
    fn test_experience_clamped_at_one() {
        assert_eq!(calculate_experience_score(10.0, Some(3.0)), 1.0);
        assert!((calculate_experience_score(1.0, Some(4.0)) - 0.25).abs() < 1e-12);
    }

    #[test]
    fn test_negative_experience_rejected() {
        let result = score_profile(
            &skills(&[("python", 1.0)]),
            None,
            &profile("e", -1.0),
            &SkillSet::new(),
            &ScoringWeights::default(),
        );

        assert!(matches!(result, Err(EngineError::InvalidInput(_))));
    }

    #[test]
    fn test_adding_required_skill_never_decreases_score() {
        let job = skills(&[("python", 1.0), ("sql", 0.6)]);
        let without = skills(&[("python", 1.0)]);
        let with = skills(&[("python", 1.0), ("sql", 1.0)]);

        let weights = ScoringWeights::default();
        let before = score_profile(&job, Some(3.0), &profile("f", 2.0), &without, &weights)
            .unwrap()
            .overall;
        let after = score_profile(&job, Some(3.0), &profile("f", 2.0), &with, &weights)
            .unwrap()
            .overall;

        assert!(after >= before);
    }
}
