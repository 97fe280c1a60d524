#![deny(unsafe_code)]
#![warn(clippy::unwrap_used)]
#![deny(clippy::panic)]

//! ML-DSA parameter set registry.
//!
//! Single source of truth for the fixed public-key and signature sizes
//! of the three FIPS 204 parameter sets. Sizes follow the final
//! standard (and the `fips204` crate): the draft-era 4611-byte
//! ML-DSA-87 signature is superseded by 4627.
//!
//! | Set       | Public key | Signature | NIST level |
//! |-----------|------------|-----------|------------|
//! | ML-DSA-44 | 1312       | 2420      | 2          |
//! | ML-DSA-65 | 1952       | 3309      | 3          |
//! | ML-DSA-87 | 2592       | 4627      | 5          |

use crate::reject::RejectReason;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An ML-DSA parameter set as defined in FIPS 204.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ParamSet {
    /// ML-DSA-44: NIST security category 2 (~128-bit classical security)
    #[serde(rename = "ML-DSA-44")]
    MlDsa44,
    /// ML-DSA-65: NIST security category 3 (~192-bit classical security)
    #[serde(rename = "ML-DSA-65")]
    MlDsa65,
    /// ML-DSA-87: NIST security category 5 (~256-bit classical security)
    #[serde(rename = "ML-DSA-87")]
    MlDsa87,
}

/// All supported parameter sets, in ascending security order.
pub const ALL_PARAM_SETS: [ParamSet; 3] =
    [ParamSet::MlDsa44, ParamSet::MlDsa65, ParamSet::MlDsa87];

impl ParamSet {
    /// Canonical name of the parameter set.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::MlDsa44 => "ML-DSA-44",
            Self::MlDsa65 => "ML-DSA-65",
            Self::MlDsa87 => "ML-DSA-87",
        }
    }

    /// Encoded public key length in bytes.
    #[must_use]
    pub const fn public_key_len(&self) -> usize {
        match self {
            Self::MlDsa44 => 1312,
            Self::MlDsa65 => 1952,
            Self::MlDsa87 => 2592,
        }
    }

    /// Encoded signature length in bytes.
    #[must_use]
    pub const fn signature_len(&self) -> usize {
        match self {
            Self::MlDsa44 => 2420,
            Self::MlDsa65 => 3309,
            Self::MlDsa87 => 4627,
        }
    }

    /// NIST security category.
    #[must_use]
    pub const fn security_level(&self) -> u8 {
        match self {
            Self::MlDsa44 => 2,
            Self::MlDsa65 => 3,
            Self::MlDsa87 => 5,
        }
    }

    /// Resolves a parameter set by name, case-insensitively.
    ///
    /// Fails closed: an unrecognized name is rejected, never defaulted,
    /// so structurally invalid material can never reach the verifier
    /// under a substituted set.
    ///
    /// # Errors
    ///
    /// Returns [`RejectReason::UnknownParameterSet`] for any name other
    /// than the three supported sets.
    pub fn resolve(name: &str) -> Result<Self, RejectReason> {
        match name.to_ascii_uppercase().as_str() {
            "ML-DSA-44" => Ok(Self::MlDsa44),
            "ML-DSA-65" => Ok(Self::MlDsa65),
            "ML-DSA-87" => Ok(Self::MlDsa87),
            _ => Err(RejectReason::UnknownParameterSet(name.to_string())),
        }
    }

    /// Returns the parameter set whose public key has the given length,
    /// if any. Useful for diagnostics when a caller supplies material
    /// under the wrong set.
    #[must_use]
    pub const fn from_public_key_len(len: usize) -> Option<Self> {
        match len {
            1312 => Some(Self::MlDsa44),
            1952 => Some(Self::MlDsa65),
            2592 => Some(Self::MlDsa87),
            _ => None,
        }
    }
}

impl fmt::Display for ParamSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn resolve_accepts_canonical_names() {
        assert_eq!(ParamSet::resolve("ML-DSA-44"), Ok(ParamSet::MlDsa44));
        assert_eq!(ParamSet::resolve("ML-DSA-65"), Ok(ParamSet::MlDsa65));
        assert_eq!(ParamSet::resolve("ML-DSA-87"), Ok(ParamSet::MlDsa87));
    }

    #[test]
    fn resolve_is_case_insensitive() {
        assert_eq!(ParamSet::resolve("ml-dsa-44"), Ok(ParamSet::MlDsa44));
        assert_eq!(ParamSet::resolve("Ml-Dsa-87"), Ok(ParamSet::MlDsa87));
    }

    #[test]
    fn resolve_fails_closed() {
        for name in ["ML-DSA-99", "DILITHIUM2", "", "ML-DSA-44 ", "44"] {
            assert!(
                matches!(
                    ParamSet::resolve(name),
                    Err(RejectReason::UnknownParameterSet(_))
                ),
                "{name:?} must be rejected"
            );
        }
    }

    #[test]
    fn declared_lengths_match_fips_204() {
        assert_eq!(ParamSet::MlDsa44.public_key_len(), 1312);
        assert_eq!(ParamSet::MlDsa44.signature_len(), 2420);
        assert_eq!(ParamSet::MlDsa65.public_key_len(), 1952);
        assert_eq!(ParamSet::MlDsa65.signature_len(), 3309);
        assert_eq!(ParamSet::MlDsa87.public_key_len(), 2592);
        assert_eq!(ParamSet::MlDsa87.signature_len(), 4627);
    }

    #[test]
    fn security_levels_ascend() {
        assert_eq!(ParamSet::MlDsa44.security_level(), 2);
        assert_eq!(ParamSet::MlDsa65.security_level(), 3);
        assert_eq!(ParamSet::MlDsa87.security_level(), 5);
    }

    #[test]
    fn from_public_key_len_inverts_public_key_len() {
        for set in ALL_PARAM_SETS {
            assert_eq!(ParamSet::from_public_key_len(set.public_key_len()), Some(set));
        }
        assert_eq!(ParamSet::from_public_key_len(0), None);
        assert_eq!(ParamSet::from_public_key_len(1313), None);
    }

    #[test]
    fn serde_round_trips_canonical_names() {
        let json = serde_json::to_string(&ParamSet::MlDsa65).unwrap();
        assert_eq!(json, "\"ML-DSA-65\"");
        let set: ParamSet = serde_json::from_str("\"ML-DSA-87\"").unwrap();
        assert_eq!(set, ParamSet::MlDsa87);
    }
}
