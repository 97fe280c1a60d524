#![deny(unsafe_code)]
#![warn(clippy::unwrap_used)]
#![deny(clippy::panic)]

//! Request types and handlers for the diagnostics API surface.
//!
//! Transport stays outside this crate: handlers take deserialized
//! requests and return typed reports, and the reporter module shapes
//! those into wire JSON. A router binding these to HTTP endpoints needs
//! no logic of its own.

use serde::{Deserialize, Serialize};
use sigvet_core::{decode_hex, verify, MessageInput, ParamSet, RejectReason, VerifyOutcome};
use sigvet_kat::{load_vectors, run_batch, KatBatchResult, KatSourceError};
use std::path::Path;
use tracing::{info, instrument};

/// A single signature verification request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyRequest {
    /// Parameter set name, e.g. "ML-DSA-65".
    pub param_set: String,
    /// Hex-encoded public key.
    pub public_key_hex: String,
    /// Hex-encoded signature.
    pub signature_hex: String,
    /// Hex-encoded message; wins over `message` when both are present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message_hex: Option<String>,
    /// Literal UTF-8 message.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl VerifyRequest {
    /// Selects the message encoding: a non-empty `messageHex` takes
    /// precedence, then `message`; neither present is a rejection.
    fn message_input(&self) -> Result<MessageInput, RejectReason> {
        if let Some(hex) = self.message_hex.as_ref().filter(|s| !s.is_empty()) {
            return Ok(MessageInput::Hex(hex.clone()));
        }
        if let Some(text) = self.message.as_ref() {
            return Ok(MessageInput::Text(text.clone()));
        }
        Err(RejectReason::MissingMessage)
    }
}

/// A KAT batch request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KatVerifyRequest {
    /// Path to an ACVP sigVer vector file; omitted means the embedded
    /// sample set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vectors_path: Option<String>,
}

/// Result of a verification request, with the accepted/rejected split
/// made explicit instead of encoded in optional fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerifyReport {
    /// The request was well-formed and the check ran.
    Accepted {
        /// Whether the signature verified.
        valid: bool,
    },
    /// The request never reached the verifier.
    Rejected {
        /// Why the input was unusable.
        reason: RejectReason,
    },
}

impl From<VerifyOutcome> for VerifyReport {
    fn from(outcome: VerifyOutcome) -> Self {
        match outcome {
            VerifyOutcome::Valid => Self::Accepted { valid: true },
            VerifyOutcome::Invalid => Self::Accepted { valid: false },
            VerifyOutcome::Rejected(reason) => Self::Rejected { reason },
        }
    }
}

/// Handles a single verification request.
///
/// Every failure mode is a value of the report; this function never
/// errors and never panics.
#[instrument(level = "info", skip(request), fields(param_set = %request.param_set))]
#[must_use]
pub fn handle_verify(request: &VerifyRequest) -> VerifyReport {
    match evaluate(request) {
        Ok(outcome) => outcome.into(),
        Err(reason) => VerifyReport::Rejected { reason },
    }
}

fn evaluate(request: &VerifyRequest) -> Result<VerifyOutcome, RejectReason> {
    let set = ParamSet::resolve(&request.param_set)?;
    let public_key = decode_hex("public key", &request.public_key_hex)?;
    let signature = decode_hex("signature", &request.signature_hex)?;
    let message = request.message_input()?.decode()?;
    Ok(verify(set, &public_key, &signature, &message))
}

/// Handles a KAT batch request: load the vectors, run them all.
///
/// # Errors
///
/// Returns [`KatSourceError`] when the vector file cannot be sourced;
/// per-vector problems are counted inside the result instead.
#[instrument(level = "info", skip(request), fields(vectors_path = ?request.vectors_path))]
pub fn handle_kat_verify(request: &KatVerifyRequest) -> Result<KatBatchResult, KatSourceError> {
    let vectors = load_vectors(request.vectors_path.as_deref().map(Path::new))?;
    info!(total = vectors.len(), "running KAT batch");
    Ok(run_batch(&vectors))
}

/// Service health summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Health {
    /// Always "ok" when the process can answer at all.
    pub status: &'static str,
    /// Crate version.
    pub version: &'static str,
}

/// Reports service liveness and version.
#[must_use]
pub fn health() -> Health {
    Health { status: "ok", version: env!("CARGO_PKG_VERSION") }
}
