//! Missing Keyword Finder — JD vocabulary the resume never mentions.

use std::collections::HashSet;

use crate::analysis::normalize::{normalize, tokens};

/// Function words that carry no distinguishing signal for keyword gaps.
pub const STOP_WORDS: &[&str] = &[
    "the", "and", "is", "in", "to", "for", "of", "a", "with", "on", "at", "by", "an", "be", "are",
    "this", "will", "as", "that", "or", "from", "can", "have", "has", "but", "not", "we", "you",
    "your", "our",
];

/// Tokens this short or shorter are never reported.
pub const MAX_IGNORED_LEN: usize = 2;

pub fn is_stop_word(token: &str) -> bool {
    STOP_WORDS.contains(&token)
}

fn is_candidate(token: &str) -> bool {
    token.len() > MAX_IGNORED_LEN && !is_stop_word(token)
}

/// Distinct JD tokens absent from the resume, minus stop words and short tokens.
///
/// Ordered by first occurrence in the normalized job description.
pub fn missing_keywords(resume_text: &str, jd_text: &str) -> Vec<String> {
    let clean_resume = normalize(resume_text);
    let clean_jd = normalize(jd_text);

    let resume_tokens: HashSet<&str> = tokens(&clean_resume).collect();
    let mut seen = HashSet::new();

    tokens(&clean_jd)
        .filter(|t| seen.insert(*t))
        .filter(|t| !resume_tokens.contains(t))
        .filter(|t| is_candidate(t))
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const JD: &str = "Looking for a Python developer with AWS and Docker experience";
    const RESUME: &str = "Experienced Python developer skilled in Django and SQL";

    #[test]
    fn test_scenario_python_developer() {
        let missing = missing_keywords(RESUME, JD);
        for expected in ["aws", "docker", "experience", "looking"] {
            assert!(missing.contains(&expected.to_string()), "missing {expected}");
        }
        for absent in ["python", "developer", "for", "and", "with", "a"] {
            assert!(!missing.contains(&absent.to_string()), "unexpected {absent}");
        }
    }

    #[test]
    fn test_first_occurrence_order() {
        let missing = missing_keywords(RESUME, JD);
        assert_eq!(missing, vec!["looking", "aws", "docker", "experience"]);
    }

    #[test]
    fn test_duplicates_collapse() {
        let missing = missing_keywords("", "Kafka kafka KAFKA, rust kafka");
        assert_eq!(missing, vec!["kafka", "rust"]);
    }

    #[test]
    fn test_self_comparison_is_empty() {
        assert!(missing_keywords(JD, JD).is_empty());
        assert!(missing_keywords(RESUME, RESUME).is_empty());
    }

    #[test]
    fn test_identical_text_scenario() {
        let text = "Senior Rust engineer building distributed systems";
        assert!(missing_keywords(text, text).is_empty());
    }

    #[test]
    fn test_disjoint_single_words() {
        assert_eq!(missing_keywords("yyy", "zzz"), vec!["zzz"]);
    }

    #[test]
    fn test_short_tokens_are_dropped() {
        assert!(missing_keywords("", "go ml ai c r").is_empty());
        assert_eq!(missing_keywords("", "go sql"), vec!["sql"]);
    }

    #[test]
    fn test_stop_words_are_dropped() {
        assert!(missing_keywords("", "the and from will that this your have").is_empty());
    }

    #[test]
    fn test_empty_resume_returns_filtered_jd_vocabulary() {
        let missing = missing_keywords("", "We need Rust, Tokio and Axum experience");
        assert_eq!(missing, vec!["need", "rust", "tokio", "axum", "experience"]);
    }

    #[test]
    fn test_empty_jd_returns_nothing() {
        assert!(missing_keywords(RESUME, "").is_empty());
    }

    #[test]
    fn test_stems_are_not_merged() {
        let missing = missing_keywords("experienced engineer", "experience engineering");
        assert_eq!(missing, vec!["experience", "engineering"]);
    }

    #[test]
    fn test_stop_word_table() {
        assert!(is_stop_word("the"));
        assert!(is_stop_word("our"));
        assert!(!is_stop_word("rust"));
        assert!(STOP_WORDS.iter().all(|w| normalize(w) == *w));
    }
}
