#![deny(unsafe_code)]
#![warn(clippy::unwrap_used)]
#![deny(clippy::panic)]

//! Parallel known-answer-test batch runner.
//!
//! Each vector is independent, so the batch fans out over the rayon
//! pool and the verdicts are re-sorted by case id afterwards; the
//! output is deterministic regardless of worker scheduling.
//!
//! Counting is conservative: a vector whose material cannot even be
//! decoded is a failure and a decode failure no matter what verdict the
//! file expected. A vector file claiming "this garbage should fail"
//! does not get credit for garbage the runner never checked.

use crate::vectors::{ExpectedResult, KatVector};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use sigvet_core::{decode_hex, verify, ParamSet, VerifyOutcome};
use tracing::{info, instrument};

/// Verdict for one vector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KatVerdict {
    /// Case identifier from the vector file.
    pub case_id: u64,
    /// Parameter set name the vector declared.
    pub parameter_set: String,
    /// Whether the engine's outcome matched the expected verdict.
    pub passed: bool,
    /// Set when the case failed: the rejection or the mismatch.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// Aggregate result of a KAT batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KatBatchResult {
    /// Number of vectors in the batch.
    pub total: usize,
    /// Vectors whose outcome matched the expected verdict.
    pub passed: usize,
    /// Vectors that mismatched or could not be decoded.
    pub failed: usize,
    /// Subset of `failed` that never reached the verifier.
    pub decode_failures: usize,
    /// Per-case verdicts, sorted by ascending case id.
    pub verdicts: Vec<KatVerdict>,
}

impl KatBatchResult {
    /// True when every vector in the batch passed.
    #[must_use]
    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }
}

/// Runs a batch of sigVer vectors and aggregates verdicts.
///
/// An empty batch yields an all-zero result; `passed + failed == total`
/// and `decode_failures <= failed` hold for every batch.
#[instrument(level = "info", skip(vectors), fields(total = vectors.len()))]
#[must_use]
pub fn run_batch(vectors: &[KatVector]) -> KatBatchResult {
    let mut cases: Vec<CaseResult> = vectors.par_iter().map(run_case).collect();
    cases.sort_by_key(|c| c.verdict.case_id);

    let total = cases.len();
    let decode_failures = cases.iter().filter(|c| c.decode_failure).count();
    let verdicts: Vec<KatVerdict> = cases.into_iter().map(|c| c.verdict).collect();
    let passed = verdicts.iter().filter(|v| v.passed).count();
    let failed = total - passed;

    info!(total, passed, failed, decode_failures, "KAT batch complete");
    KatBatchResult { total, passed, failed, decode_failures, verdicts }
}

/// Per-case outcome with the decode-failure classification carried as
/// a flag, independent of the reason wording.
struct CaseResult {
    verdict: KatVerdict,
    decode_failure: bool,
}

fn run_case(vector: &KatVector) -> CaseResult {
    let verdict = |passed: bool, reason: Option<String>| KatVerdict {
        case_id: vector.case_id,
        parameter_set: vector.parameter_set.clone(),
        passed,
        reason,
    };
    let rejected = |reason: String| CaseResult {
        verdict: verdict(false, Some(format!("decode: {reason}"))),
        decode_failure: true,
    };
    let checked = |passed: bool, reason: Option<String>| CaseResult {
        verdict: verdict(passed, reason),
        decode_failure: false,
    };

    let set = match ParamSet::resolve(&vector.parameter_set) {
        Ok(set) => set,
        Err(e) => return rejected(e.to_string()),
    };
    let public_key = match decode_hex("public key", &vector.public_key_hex) {
        Ok(bytes) => bytes,
        Err(e) => return rejected(e.to_string()),
    };
    let message = match decode_hex("message", &vector.message_hex) {
        Ok(bytes) => bytes,
        Err(e) => return rejected(e.to_string()),
    };
    let signature = match decode_hex("signature", &vector.signature_hex) {
        Ok(bytes) => bytes,
        Err(e) => return rejected(e.to_string()),
    };

    match verify(set, &public_key, &signature, &message) {
        VerifyOutcome::Rejected(reason) => rejected(reason.to_string()),
        VerifyOutcome::Valid => match vector.expected {
            ExpectedResult::Pass => checked(true, None),
            ExpectedResult::Fail => {
                checked(false, Some("signature verified but vector expected failure".to_string()))
            }
        },
        VerifyOutcome::Invalid => match vector.expected {
            ExpectedResult::Fail => checked(true, None),
            ExpectedResult::Pass => {
                checked(false, Some("signature rejected but vector expected success".to_string()))
            }
        },
    }
}
