#![deny(unsafe_code)]
#![warn(clippy::unwrap_used)]
#![deny(clippy::panic)]

//! ACVP sigVer vector file schema and the flattened per-case form the
//! runner consumes.
//!
//! The on-disk shape mirrors NIST ACVP ML-DSA sigVer JSON: a file holds
//! test groups, a group fixes a parameter set, and each test case
//! carries hex-encoded key, message, and signature plus the expected
//! verdict. Everything stays hex until the runner decodes it, so a
//! corrupt vector is counted rather than aborting the batch.

use serde::{Deserialize, Serialize};

/// Expected verdict recorded in a vector file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExpectedResult {
    /// The signature is expected to verify.
    Pass,
    /// The signature is expected to fail verification.
    Fail,
}

impl ExpectedResult {
    /// Maps the ACVP `testPassed` boolean.
    #[must_use]
    pub const fn from_test_passed(passed: bool) -> Self {
        if passed {
            Self::Pass
        } else {
            Self::Fail
        }
    }
}

/// A single flattened test case, ready for the runner.
///
/// `parameter_set` is kept as the raw file string: an unrecognized set
/// name is a per-case decode failure, not a load error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KatVector {
    /// Case identifier, unique within the batch (`tcId` in ACVP files).
    pub case_id: u64,
    /// Parameter set name as written in the file.
    pub parameter_set: String,
    /// Hex-encoded public key.
    pub public_key_hex: String,
    /// Hex-encoded message.
    pub message_hex: String,
    /// Hex-encoded signature.
    pub signature_hex: String,
    /// Verdict the file claims the case should produce.
    pub expected: ExpectedResult,
}

/// Top-level ACVP sigVer vector file.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SigVerFile {
    /// Vector set identifier, if the file carries one.
    #[serde(default)]
    pub vs_id: Option<u64>,
    /// Algorithm name, typically "ML-DSA".
    #[serde(default)]
    pub algorithm: Option<String>,
    /// ACVP mode; must be `sigVer` for this runner.
    pub mode: String,
    /// Test groups, each under a single parameter set.
    pub test_groups: Vec<SigVerGroup>,
}

/// One test group: a parameter set and its cases.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SigVerGroup {
    /// Group identifier.
    pub tg_id: u64,
    /// Parameter set name for every case in this group.
    pub parameter_set: String,
    /// The test cases.
    pub tests: Vec<SigVerCase>,
}

/// One raw test case as stored in the file.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SigVerCase {
    /// Case identifier.
    pub tc_id: u64,
    /// Hex-encoded public key.
    pub pk: String,
    /// Hex-encoded message.
    pub message: String,
    /// Hex-encoded signature.
    pub signature: String,
    /// Whether verification is expected to succeed.
    pub test_passed: bool,
}

impl SigVerFile {
    /// Flattens all groups into runner-ready vectors, preserving file
    /// order.
    #[must_use]
    pub fn flatten(&self) -> Vec<KatVector> {
        self.test_groups
            .iter()
            .flat_map(|group| {
                group.tests.iter().map(|case| KatVector {
                    case_id: case.tc_id,
                    parameter_set: group.parameter_set.clone(),
                    public_key_hex: case.pk.clone(),
                    message_hex: case.message.clone(),
                    signature_hex: case.signature.clone(),
                    expected: ExpectedResult::from_test_passed(case.test_passed),
                })
            })
            .collect()
    }
}
