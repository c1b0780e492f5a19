//! Resume text extraction. PDF only.
//!
//! Every failure mode is reported explicitly so callers can tell a blank
//! document apart from one the parser could not read.

use std::panic;

use anyhow::Context;
use bytes::Bytes;
use thiserror::Error;
use tracing::debug;

const PDF_MAGIC: &[u8] = b"%PDF-";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExtractionError {
    #[error("uploaded file is not a PDF document")]
    NotPdf,

    #[error("could not parse PDF: {0}")]
    Malformed(String),

    #[error("PDF contains no extractable text")]
    NoText,
}

/// Extracts plain text from PDF bytes.
///
/// The parser can panic on hostile input; panics are caught and reported as
/// `Malformed`.
pub fn extract_pdf_text(bytes: &[u8]) -> Result<String, ExtractionError> {
    if !looks_like_pdf(bytes) {
        return Err(ExtractionError::NotPdf);
    }

    let text = panic::catch_unwind(|| pdf_extract::extract_text_from_mem(bytes))
        .map_err(|payload| ExtractionError::Malformed(panic_message(payload.as_ref())))?
        .map_err(|e| ExtractionError::Malformed(e.to_string()))?;

    if text.trim().is_empty() {
        return Err(ExtractionError::NoText);
    }

    debug!("Extracted {} chars from {} byte PDF", text.len(), bytes.len());
    Ok(text)
}

/// Runs `extract_pdf_text` on the blocking pool.
///
/// The outer error means the worker itself died, not that the upload was bad.
pub async fn extract_pdf_text_blocking(
    bytes: Bytes,
) -> anyhow::Result<Result<String, ExtractionError>> {
    tokio::task::spawn_blocking(move || extract_pdf_text(&bytes))
        .await
        .context("PDF extraction task failed")
}

/// Leading whitespace/garbage before the header is tolerated by most readers,
/// so only the first KiB is searched.
fn looks_like_pdf(bytes: &[u8]) -> bool {
    let head = &bytes[..bytes.len().min(1024)];
    head.windows(PDF_MAGIC.len()).any(|w| w == PDF_MAGIC)
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "parser panicked".to_string()
    }
}
