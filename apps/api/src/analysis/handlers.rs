//! Axum route handlers for the Analysis API.

use axum::{
    extract::{Multipart, State},
    Json,
};
use bytes::Bytes;
use serde::Deserialize;
use tracing::{info, warn};

use crate::analysis::analyze;
use crate::analysis::report::AnalysisReport;
use crate::errors::AppError;
use crate::extraction::extract_pdf_text_blocking;
use crate::state::AppState;

const JD_FIELD: &str = "job_description";
const RESUME_FIELD: &str = "resume";

// ────────────────────────────────────────────────────────────────────────────
// Request types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct AnalyzeTextRequest {
    #[serde(default)]
    pub resume_text: String,
    pub job_description: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/analyze
///
/// Multipart form with a `job_description` text field and a `resume` PDF file.
pub async fn handle_analyze_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<AnalysisReport>, AppError> {
    let mut jd_text: Option<String> = None;
    let mut resume_pdf: Option<Bytes> = None;

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            JD_FIELD => jd_text = Some(field.text().await?),
            RESUME_FIELD => resume_pdf = Some(field.bytes().await?),
            _ => {} // unknown fields are ignored
        }
    }

    let (jd_text, resume_pdf) = match (jd_text, resume_pdf) {
        (Some(jd), Some(pdf)) if !jd.trim().is_empty() && !pdf.is_empty() => (jd, pdf),
        _ => {
            return Err(AppError::Validation(
                "Please provide both a job description and a resume PDF".to_string(),
            ))
        }
    };

    let resume_text = extract_pdf_text_blocking(resume_pdf).await?.map_err(|e| {
        warn!("Resume extraction failed: {e}");
        AppError::from(e)
    })?;

    Ok(Json(build_report(&state, &resume_text, &jd_text)))
}

/// POST /api/v1/analyze/text
///
/// Same report for callers that already hold the resume as plain text.
/// A blank resume is accepted and scores 0.
pub async fn handle_analyze_text(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeTextRequest>,
) -> Result<Json<AnalysisReport>, AppError> {
    if request.job_description.trim().is_empty() {
        return Err(AppError::Validation(
            "job_description cannot be empty".to_string(),
        ));
    }

    Ok(Json(build_report(
        &state,
        &request.resume_text,
        &request.job_description,
    )))
}

fn build_report(state: &AppState, resume_text: &str, jd_text: &str) -> AnalysisReport {
    let report = AnalysisReport::build(
        analyze(resume_text, jd_text),
        state.config.keyword_display_limit,
    );
    info!(
        analysis_id = %report.analysis_id,
        score = report.match_score,
        missing = report.missing_keywords.len(),
        "Analysis complete"
    );
    report
}
