#![deny(unsafe_code)]
#![warn(clippy::unwrap_used)]
#![deny(clippy::panic)]

//! ML-DSA (FIPS 204) signature verification harness.
//!
//! Every check produces exactly one of three outcomes:
//!
//! - [`VerifyOutcome::Valid`]: the signature verifies under the key.
//! - [`VerifyOutcome::Invalid`]: well-formed material, failed check.
//! - [`VerifyOutcome::Rejected`]: structurally unusable input that was
//!   never checked at all.
//!
//! The rejected/invalid split is the whole point of the harness: a KAT
//! runner and a human diagnosing a broken client both need to know
//! whether the cryptography ran.

use crate::params::ParamSet;
use crate::reject::RejectReason;
use fips204::traits::{SerDes, Verifier};
use fips204::{ml_dsa_44, ml_dsa_65, ml_dsa_87};
use tracing::{debug, instrument};

/// Outcome of a single verification attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerifyOutcome {
    /// The signature is cryptographically valid for the message under
    /// the public key.
    Valid,
    /// All material was well-formed but the signature check failed.
    Invalid,
    /// Input was structurally unusable; no signature check ran.
    Rejected(RejectReason),
}

impl VerifyOutcome {
    /// True only for [`VerifyOutcome::Valid`].
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    /// True if the cryptographic check actually ran, regardless of its
    /// result.
    #[must_use]
    pub const fn was_checked(&self) -> bool {
        !matches!(self, Self::Rejected(_))
    }
}

/// Verifies an ML-DSA signature over a message.
///
/// Length checks run before any deserialization so that wrong-length
/// material is always [`VerifyOutcome::Rejected`], never silently
/// truncated or padded. The empty-context form of FIPS 204 `Verify` is
/// used throughout, matching ACVP sigVer vectors.
///
/// This function does not panic and does not return `Result`: every
/// failure mode is a value of [`VerifyOutcome`].
#[instrument(level = "debug", skip(public_key, signature, message), fields(set = %set, pk_len = public_key.len(), sig_len = signature.len(), msg_len = message.len()))]
#[must_use]
pub fn verify(
    set: ParamSet,
    public_key: &[u8],
    signature: &[u8],
    message: &[u8],
) -> VerifyOutcome {
    if public_key.len() != set.public_key_len() {
        if let Some(other) = ParamSet::from_public_key_len(public_key.len()) {
            debug!(supplied = %other, "public key length matches a different parameter set");
        }
        return VerifyOutcome::Rejected(RejectReason::LengthMismatch {
            field: "public key",
            expected: set.public_key_len(),
            actual: public_key.len(),
        });
    }
    if signature.len() != set.signature_len() {
        return VerifyOutcome::Rejected(RejectReason::LengthMismatch {
            field: "signature",
            expected: set.signature_len(),
            actual: signature.len(),
        });
    }

    match set {
        ParamSet::MlDsa44 => verify_ml_dsa_44(public_key, signature, message),
        ParamSet::MlDsa65 => verify_ml_dsa_65(public_key, signature, message),
        ParamSet::MlDsa87 => verify_ml_dsa_87(public_key, signature, message),
    }
}

// The three per-set helpers differ only in the fips204 module and the
// array sizes, which are const generics in neither the crate API nor
// FIPS 204 itself, so they stay written out.

fn verify_ml_dsa_44(public_key: &[u8], signature: &[u8], message: &[u8]) -> VerifyOutcome {
    let pk_bytes: [u8; 1312] = match public_key.try_into() {
        Ok(b) => b,
        Err(_) => {
            return VerifyOutcome::Rejected(RejectReason::LengthMismatch {
                field: "public key",
                expected: 1312,
                actual: public_key.len(),
            })
        }
    };
    let pk = match ml_dsa_44::PublicKey::try_from_bytes(pk_bytes) {
        Ok(pk) => pk,
        Err(e) => {
            return VerifyOutcome::Rejected(RejectReason::MalformedEncoding {
                field: "public key",
                detail: e.to_string(),
            })
        }
    };
    let sig_bytes: [u8; 2420] = match signature.try_into() {
        Ok(b) => b,
        Err(_) => {
            return VerifyOutcome::Rejected(RejectReason::LengthMismatch {
                field: "signature",
                expected: 2420,
                actual: signature.len(),
            })
        }
    };
    if pk.verify(message, &sig_bytes, &[]) {
        VerifyOutcome::Valid
    } else {
        VerifyOutcome::Invalid
    }
}

fn verify_ml_dsa_65(public_key: &[u8], signature: &[u8], message: &[u8]) -> VerifyOutcome {
    let pk_bytes: [u8; 1952] = match public_key.try_into() {
        Ok(b) => b,
        Err(_) => {
            return VerifyOutcome::Rejected(RejectReason::LengthMismatch {
                field: "public key",
                expected: 1952,
                actual: public_key.len(),
            })
        }
    };
    let pk = match ml_dsa_65::PublicKey::try_from_bytes(pk_bytes) {
        Ok(pk) => pk,
        Err(e) => {
            return VerifyOutcome::Rejected(RejectReason::MalformedEncoding {
                field: "public key",
                detail: e.to_string(),
            })
        }
    };
    let sig_bytes: [u8; 3309] = match signature.try_into() {
        Ok(b) => b,
        Err(_) => {
            return VerifyOutcome::Rejected(RejectReason::LengthMismatch {
                field: "signature",
                expected: 3309,
                actual: signature.len(),
            })
        }
    };
    if pk.verify(message, &sig_bytes, &[]) {
        VerifyOutcome::Valid
    } else {
        VerifyOutcome::Invalid
    }
}

fn verify_ml_dsa_87(public_key: &[u8], signature: &[u8], message: &[u8]) -> VerifyOutcome {
    let pk_bytes: [u8; 2592] = match public_key.try_into() {
        Ok(b) => b,
        Err(_) => {
            return VerifyOutcome::Rejected(RejectReason::LengthMismatch {
                field: "public key",
                expected: 2592,
                actual: public_key.len(),
            })
        }
    };
    let pk = match ml_dsa_87::PublicKey::try_from_bytes(pk_bytes) {
        Ok(pk) => pk,
        Err(e) => {
            return VerifyOutcome::Rejected(RejectReason::MalformedEncoding {
                field: "public key",
                detail: e.to_string(),
            })
        }
    };
    let sig_bytes: [u8; 4627] = match signature.try_into() {
        Ok(b) => b,
        Err(_) => {
            return VerifyOutcome::Rejected(RejectReason::LengthMismatch {
                field: "signature",
                expected: 4627,
                actual: signature.len(),
            })
        }
    };
    if pk.verify(message, &sig_bytes, &[]) {
        VerifyOutcome::Valid
    } else {
        VerifyOutcome::Invalid
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrong_length_public_key_is_rejected() {
        let outcome = verify(ParamSet::MlDsa44, &[0u8; 100], &[0u8; 2420], b"msg");
        assert_eq!(
            outcome,
            VerifyOutcome::Rejected(RejectReason::LengthMismatch {
                field: "public key",
                expected: 1312,
                actual: 100,
            })
        );
    }

    #[test]
    fn wrong_length_signature_is_rejected() {
        let outcome = verify(ParamSet::MlDsa65, &[0u8; 1952], &[0u8; 2420], b"msg");
        assert_eq!(
            outcome,
            VerifyOutcome::Rejected(RejectReason::LengthMismatch {
                field: "signature",
                expected: 3309,
                actual: 2420,
            })
        );
    }

    #[test]
    fn cross_set_material_is_rejected_not_invalid() {
        // ML-DSA-44 material checked under ML-DSA-87 must reject on
        // length, never reach the verifier.
        let outcome = verify(ParamSet::MlDsa87, &[0u8; 1312], &[0u8; 2420], b"msg");
        assert!(matches!(
            outcome,
            VerifyOutcome::Rejected(RejectReason::LengthMismatch { field: "public key", .. })
        ));
    }

    #[test]
    fn outcome_predicates() {
        assert!(VerifyOutcome::Valid.is_valid());
        assert!(VerifyOutcome::Valid.was_checked());
        assert!(!VerifyOutcome::Invalid.is_valid());
        assert!(VerifyOutcome::Invalid.was_checked());
        let rejected = VerifyOutcome::Rejected(RejectReason::MissingMessage);
        assert!(!rejected.is_valid());
        assert!(!rejected.was_checked());
    }
}
