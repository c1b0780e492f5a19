//! Match Scorer — bag-of-words cosine similarity between a resume and a JD.
//!
//! Both texts are normalized, tokenized on whitespace and counted into term
//! vectors over their joint vocabulary. The cosine of the angle between the two
//! vectors, scaled to a percentage, is the match score.

use std::collections::HashMap;

use crate::analysis::normalize::{normalize, tokens};

/// Token → occurrence count for one normalized text.
#[derive(Debug, Default)]
struct TermVector<'a> {
    counts: HashMap<&'a str, u32>,
}

impl<'a> TermVector<'a> {
    fn from_normalized(normalized: &'a str) -> Self {
        let mut counts = HashMap::new();
        for token in tokens(normalized) {
            *counts.entry(token).or_insert(0) += 1;
        }
        Self { counts }
    }

    /// Tokens missing from `other` contribute zero, so iterating one side's
    /// vocabulary covers the joint vocabulary.
    fn dot(&self, other: &TermVector<'_>) -> f64 {
        let (small, large) = if self.counts.len() <= other.counts.len() {
            (self, other)
        } else {
            (other, self)
        };
        small
            .counts
            .iter()
            .filter_map(|(token, &a)| large.counts.get(token).map(|&b| a as f64 * b as f64))
            .sum()
    }

    fn magnitude(&self) -> f64 {
        self.counts
            .values()
            .map(|&c| (c as f64) * (c as f64))
            .sum::<f64>()
            .sqrt()
    }
}

/// Cosine similarity in `[0, 1]`; 0 when either vector has zero magnitude.
fn cosine_similarity(a: &TermVector<'_>, b: &TermVector<'_>) -> f64 {
    let denom = a.magnitude() * b.magnitude();
    if denom == 0.0 {
        return 0.0;
    }
    a.dot(b) / denom
}

/// Rounds to two decimal places, exact halves to even.
fn round2(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}

/// Similarity of `resume_text` to `jd_text` as a percentage in `[0, 100]`,
/// rounded to two decimals. Returns 0.0 when either text normalizes to empty.
pub fn match_score(resume_text: &str, jd_text: &str) -> f64 {
    let clean_resume = normalize(resume_text);
    let clean_jd = normalize(jd_text);

    if clean_resume.is_empty() || clean_jd.is_empty() {
        return 0.0;
    }

    let resume_vec = TermVector::from_normalized(&clean_resume);
    let jd_vec = TermVector::from_normalized(&clean_jd);

    round2(cosine_similarity(&resume_vec, &jd_vec) * 100.0).clamp(0.0, 100.0)
}
