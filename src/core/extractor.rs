//! Skill extraction: canonical tokens -> weighted skill terms.

use std::collections::HashMap;

use crate::core::normalizer::Normalizer;
use crate::models::SkillSet;

/// Derives a [`SkillSet`] from a document's free text plus an optional
/// structured skill list.
///
/// There is deliberately no fixed skill vocabulary: unknown or garbled
/// tokens are kept as skill terms rather than dropped, trading false
/// positives for recall.
#[derive(Debug, Clone)]
pub struct SkillExtractor {
    normalizer: Normalizer,
    /// Discount applied to terms inferred from free text, relative to the
    /// 1.0 weight of explicitly listed skills.
    inferred_discount: f64,
}

impl SkillExtractor {
    pub fn new(normalizer: Normalizer, inferred_discount: f64) -> Self {
        Self {
            normalizer,
            inferred_discount,
        }
    }

    /// Extract a weighted skill set from `text`, merged with the entries
    /// of `explicit_skills`.
    ///
    /// Explicit skills weigh 1.0 each. A free-text term weighs
    /// `discount * tf / max_tf` (proportional to its term frequency within
    /// the document), so an inferred term never outranks an explicit one.
    /// When a term appears in both forms the higher weight wins.
    pub fn extract(&self, text: &str, explicit_skills: &[String]) -> SkillSet {
        let mut skills = SkillSet::new();

        for skill in explicit_skills {
            if let Some(term) = self.normalizer.normalize_term(skill) {
                skills.insert(term, 1.0);
            }
        }

        let tokens = self.normalizer.normalize(text);
        if tokens.is_empty() {
            return skills;
        }

        let mut frequencies: HashMap<&str, usize> = HashMap::new();
        for token in &tokens {
            *frequencies.entry(token.as_str()).or_insert(0) += 1;
        }

        // max_tf is at least 1 here since tokens is non-empty.
        let max_tf = frequencies.values().copied().max().unwrap_or(1) as f64;

        for (term, count) in frequencies {
            let weight = self.inferred_discount * (count as f64 / max_tf);
            skills.insert(term.to_string(), weight);
        }

        skills
    }
}
