#![deny(unsafe_code)]
#![warn(clippy::unwrap_used)]
#![deny(clippy::panic)]

//! Wire-shape reporter.
//!
//! Maps internal reports onto the external contract: `{ ok: true,
//! result: "valid" | "invalid" }` for checked requests, `{ ok: false,
//! error }` for anything that could not be processed, and the KAT
//! aggregate with a capped detail list. Aggregate counts always cover
//! the whole batch; only the detail list is a truncated view.

use crate::api::VerifyReport;
use serde::Serialize;
use sigvet_kat::{KatBatchResult, KatVerdict};

/// Maximum number of per-case verdicts included in a KAT response.
pub const DETAIL_CAP: usize = 50;

/// Longest error message sent over the wire; longer diagnostics are
/// truncated so oversized key or signature material never echoes back.
const MAX_ERROR_LEN: usize = 200;

/// Wire shape of a verification response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyResponse {
    /// Whether the request was processed at all.
    pub ok: bool,
    /// "valid" or "invalid" when `ok`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<&'static str>,
    /// Rejection message when not `ok`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl From<&VerifyReport> for VerifyResponse {
    fn from(report: &VerifyReport) -> Self {
        match report {
            VerifyReport::Accepted { valid: true } => {
                Self { ok: true, result: Some("valid"), error: None }
            }
            VerifyReport::Accepted { valid: false } => {
                Self { ok: true, result: Some("invalid"), error: None }
            }
            VerifyReport::Rejected { reason } => {
                Self { ok: false, result: None, error: Some(sanitize_error(&reason.to_string())) }
            }
        }
    }
}

/// Wire shape of a successful KAT batch response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KatResponse {
    /// Always true; failures to source the batch use [`ErrorResponse`].
    pub ok: bool,
    /// Number of vectors in the batch.
    pub total_vectors: usize,
    /// Vectors whose outcome matched the expected verdict.
    pub passed: usize,
    /// Vectors that mismatched or could not be decoded.
    pub failed: usize,
    /// Subset of `failed` that never reached the verifier.
    pub decode_failures: usize,
    /// Per-case verdicts, capped at [`DETAIL_CAP`].
    pub details: Vec<KatVerdict>,
}

impl From<&KatBatchResult> for KatResponse {
    fn from(result: &KatBatchResult) -> Self {
        Self {
            ok: true,
            total_vectors: result.total,
            passed: result.passed,
            failed: result.failed,
            decode_failures: result.decode_failures,
            details: result.verdicts.iter().take(DETAIL_CAP).cloned().collect(),
        }
    }
}

/// Wire shape of any failed request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorResponse {
    /// Always false.
    pub ok: bool,
    /// Sanitized failure message.
    pub error: String,
}

impl ErrorResponse {
    /// Builds an error response with the message sanitized.
    #[must_use]
    pub fn new(message: &str) -> Self {
        Self { ok: false, error: sanitize_error(message) }
    }
}

/// Truncates long diagnostics; they can embed request material.
fn sanitize_error(message: &str) -> String {
    if message.len() > MAX_ERROR_LEN {
        let mut end = MAX_ERROR_LEN;
        while !message.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...", &message[..end])
    } else {
        message.to_string()
    }
}
