// Resume vs job description analysis.
// Normalizer feeds both the cosine scorer and the missing keyword finder.

pub mod handlers;
pub mod keywords;
pub mod match_score;
pub mod normalize;
pub mod report;

use serde::Serialize;

pub use keywords::missing_keywords;
pub use match_score::match_score;

/// Result of one resume/JD comparison.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Analysis {
    pub match_score: f64,
    pub missing_keywords: Vec<String>,
}

/// Runs the scorer and the keyword finder over the same pair of texts.
pub fn analyze(resume_text: &str, jd_text: &str) -> Analysis {
    Analysis {
        match_score: match_score(resume_text, jd_text),
        missing_keywords: missing_keywords(resume_text, jd_text),
    }
}
