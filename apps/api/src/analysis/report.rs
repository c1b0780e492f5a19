//! Report shaping for clients: score band, truncated keyword list, advice message.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::analysis::Analysis;

pub const STRONG_MATCH_MIN: f64 = 60.0;
pub const AVERAGE_MATCH_MIN: f64 = 40.0;

/// Presentational bucket for a match score. Not part of scoring itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreBand {
    Strong,
    Average,
    Low,
}

impl ScoreBand {
    pub fn from_score(score: f64) -> Self {
        if score >= STRONG_MATCH_MIN {
            ScoreBand::Strong
        } else if score >= AVERAGE_MATCH_MIN {
            ScoreBand::Average
        } else {
            ScoreBand::Low
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ScoreBand::Strong => "Strong Match",
            ScoreBand::Average => "Average Match",
            ScoreBand::Low => "Low Match",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub analysis_id: Uuid,
    pub analyzed_at: DateTime<Utc>,
    pub match_score: f64,
    pub band: ScoreBand,
    pub band_label: String,
    pub missing_keywords: Vec<String>,
    pub top_missing_keywords: Vec<String>,
    pub remaining_keyword_count: usize,
    pub message: String,
}

impl AnalysisReport {
    /// `display_limit` caps `top_missing_keywords`; the full list is always kept.
    pub fn build(analysis: Analysis, display_limit: usize) -> Self {
        let band = ScoreBand::from_score(analysis.match_score);
        let top_missing_keywords: Vec<String> = analysis
            .missing_keywords
            .iter()
            .take(display_limit)
            .cloned()
            .collect();
        let remaining_keyword_count = analysis
            .missing_keywords
            .len()
            .saturating_sub(top_missing_keywords.len());
        let message = build_message(&analysis.missing_keywords);

        AnalysisReport {
            analysis_id: Uuid::new_v4(),
            analyzed_at: Utc::now(),
            match_score: analysis.match_score,
            band,
            band_label: band.label().to_string(),
            missing_keywords: analysis.missing_keywords,
            top_missing_keywords,
            remaining_keyword_count,
            message,
        }
    }
}

fn build_message(missing: &[String]) -> String {
    if missing.is_empty() {
        "Your resume covers all the key terms found in the job description.".to_string()
    } else {
        format!(
            "{} keyword(s) from the job description are missing. Incorporate them into your Skills or Projects section to improve your score.",
            missing.len()
        )
    }
}
