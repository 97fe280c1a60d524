#![deny(unsafe_code)]
#![warn(clippy::unwrap_used)]
#![deny(clippy::panic)]

//! Strict hexadecimal and message codecs.
//!
//! All decoding happens before any cryptographic work: malformed input
//! short-circuits a request without spending a signature check on it.
//! Hex decoding is strict: even length, `[0-9a-fA-F]` only, no
//! embedded whitespace.

use crate::reject::RejectReason;

/// Upper bound on accepted hex input, in characters (~50 KB of binary).
pub const MAX_HEX_LEN: usize = 100_000;

/// Decodes a strict hex string into bytes.
///
/// `field` names the request field for diagnostics ("public key",
/// "signature", "message").
///
/// # Errors
///
/// Returns [`RejectReason::EmptyField`] for an empty string,
/// [`RejectReason::OversizedField`] past [`MAX_HEX_LEN`], and
/// [`RejectReason::MalformedHex`] for odd length, non-hex characters,
/// or whitespace.
pub fn decode_hex(field: &'static str, s: &str) -> Result<Vec<u8>, RejectReason> {
    if s.is_empty() {
        return Err(RejectReason::EmptyField { field });
    }
    if s.len() > MAX_HEX_LEN {
        return Err(RejectReason::OversizedField { field, max: MAX_HEX_LEN });
    }
    hex::decode(s).map_err(|e| RejectReason::MalformedHex { field, detail: e.to_string() })
}

/// Encodes bytes as lowercase hex.
#[must_use]
pub fn encode_hex(bytes: &[u8]) -> String {
    hex::encode(bytes)
}

/// A message in exactly one of its two accepted encodings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageInput {
    /// Literal UTF-8 text; the message bytes are the text itself.
    Text(String),
    /// Hex-encoded message bytes.
    Hex(String),
}

impl MessageInput {
    /// Decodes the message to raw bytes.
    ///
    /// # Errors
    ///
    /// Hex mode propagates [`decode_hex`] rejections; text mode cannot
    /// fail for valid Unicode input.
    pub fn decode(&self) -> Result<Vec<u8>, RejectReason> {
        match self {
            Self::Text(s) => Ok(s.clone().into_bytes()),
            Self::Hex(s) => decode_hex("message", s),
        }
    }
}
