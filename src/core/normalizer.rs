//! Text normalization: tokenize, lowercase, strip stop words, stem.

use std::collections::HashSet;

use unicode_segmentation::UnicodeSegmentation;

/// Turns raw free text into a canonical token sequence.
///
/// Normalization is fully deterministic: the same input always yields the
/// same token sequence, which is what makes scores reproducible and
/// golden-output tests possible.
#[derive(Debug, Clone)]
pub struct Normalizer {
    stop_words: HashSet<String>,
}

impl Normalizer {
    pub fn new(stop_words: HashSet<String>) -> Self {
        Self { stop_words }
    }

    /// Lowercase, strip punctuation, drop stop words and stem each
    /// remaining word. Empty or whitespace-only input yields an empty
    /// sequence, not an error.
    pub fn normalize(&self, text: &str) -> Vec<String> {
        let mut tokens = Vec::new();

        for word in text.unicode_words() {
            let lowered = word.to_lowercase();

            // Single-character fragments and purely numeric tokens carry
            // no skill signal.
            if lowered.len() <= 1 || !lowered.chars().any(|c| c.is_alphabetic()) {
                continue;
            }
            if self.stop_words.contains(&lowered) {
                continue;
            }

            tokens.push(stem(&lowered));
        }

        tokens
    }

    /// Normalize a single term (e.g. an entry from a structured skill
    /// list) into its canonical form. Multi-word terms keep a single
    /// space between their stemmed parts.
    pub fn normalize_term(&self, term: &str) -> Option<String> {
        let tokens = self.normalize(term);
        if tokens.is_empty() {
            None
        } else {
            Some(tokens.join(" "))
        }
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new(default_stop_words())
    }
}

/// Light deterministic suffix stripper. Not a full Porter stemmer; it only
/// needs to map inflected forms of the same word to the same stem on both
/// the JD and the profile side.
fn stem(word: &str) -> String {
    let n = word.len();

    if n > 4 && word.ends_with("sses") {
        return word[..n - 2].to_string();
    }
    if n > 4 && word.ends_with("ies") {
        return format!("{}y", &word[..n - 3]);
    }
    if n > 5 && word.ends_with("ing") {
        return undouble(&word[..n - 3]);
    }
    if n > 4 && word.ends_with("ed") {
        return undouble(&word[..n - 2]);
    }
    if n > 3 && word.ends_with('s') && !word.ends_with("ss") {
        return word[..n - 1].to_string();
    }

    word.to_string()
}

/// Collapse a trailing doubled consonant left over after suffix removal
/// ("plann" -> "plan").
fn undouble(stemmed: &str) -> String {
    let chars: Vec<char> = stemmed.chars().collect();
    if chars.len() >= 4 {
        let last = chars[chars.len() - 1];
        let prev = chars[chars.len() - 2];
        if last == prev && last.is_alphabetic() && !"aeiou".contains(last) {
            return chars[..chars.len() - 1].iter().collect();
        }
    }
    stemmed.to_string()
}

/// Default English stop-word set used when the configuration does not
/// supply one.
pub fn default_stop_words() -> HashSet<String> {
    let words = [
        "a", "an", "and", "are", "as", "at", "be", "been", "but", "by", "can", "do", "for",
        "from", "had", "has", "have", "he", "her", "his", "if", "in", "into", "is", "it",
        "its", "may", "more", "most", "must", "no", "not", "of", "on", "or", "our", "she",
        "should", "so", "some", "such", "than", "that", "the", "their", "them", "then",
        "these", "they", "this", "to", "was", "we", "well", "were", "what", "when", "where",
        "which", "who", "will", "with", "would", "you", "your",
    ];

    words.iter().map(|&w| w.to_string()).collect()
}
