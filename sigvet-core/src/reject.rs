#![deny(unsafe_code)]
#![warn(clippy::unwrap_used)]
#![deny(clippy::panic)]

//! Structural rejection taxonomy.
//!
//! A [`RejectReason`] describes input that could not be checked at all:
//! malformed hex, wrong-length material, an unrecognized parameter set.
//! It is deliberately a different type from a cryptographic `invalid`
//! verdict so the two can never be conflated downstream.

use thiserror::Error;

/// Why a request was rejected before any cryptographic work ran.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RejectReason {
    /// Input was not valid hexadecimal (odd length, non-hex characters,
    /// or embedded whitespace).
    #[error("malformed hex in {field}: {detail}")]
    MalformedHex {
        /// Which request field carried the bad input
        field: &'static str,
        /// Decoder diagnostic
        detail: String,
    },

    /// A required field was empty.
    #[error("{field} cannot be empty")]
    EmptyField {
        /// Which request field was empty
        field: &'static str,
    },

    /// Input exceeded the accepted bound.
    #[error("{field} too long (max {max} hex chars)")]
    OversizedField {
        /// Which request field was oversized
        field: &'static str,
        /// Maximum accepted length in hex characters
        max: usize,
    },

    /// Decoded material did not match the parameter set's declared length.
    #[error("invalid {field} length: expected {expected} bytes, got {actual}")]
    LengthMismatch {
        /// Which request field mismatched
        field: &'static str,
        /// Length the parameter set declares
        expected: usize,
        /// Length actually supplied
        actual: usize,
    },

    /// The named parameter set is not one of the three supported sets.
    /// The registry fails closed: nothing is ever substituted.
    #[error("unknown parameter set {0:?}: must be ML-DSA-44, ML-DSA-65, or ML-DSA-87")]
    UnknownParameterSet(String),

    /// Material of the right length that the underlying codec still
    /// could not interpret.
    #[error("malformed {field} encoding: {detail}")]
    MalformedEncoding {
        /// Which request field carried the bad encoding
        field: &'static str,
        /// Decoder diagnostic
        detail: String,
    },

    /// Neither a hex message nor a text message was supplied.
    #[error("either messageHex or message must be provided")]
    MissingMessage,
}
