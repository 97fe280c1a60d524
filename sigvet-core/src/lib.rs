#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::unwrap_used)]
#![deny(clippy::panic)]

//! # sigvet-core
//!
//! Parameter registry, strict codecs, and the ML-DSA (FIPS 204)
//! verification harness behind the sigvet diagnostics service.
//!
//! The crate draws one line and keeps it everywhere: structurally
//! unusable input is **rejected** with a [`RejectReason`], while
//! well-formed material that fails the cryptographic check is
//! **invalid**. Callers never have to guess whether a `false` meant
//! "forged" or "you sent garbage".
//!
//! ```
//! use sigvet_core::{verify, ParamSet};
//!
//! let outcome = verify(ParamSet::MlDsa44, &[0u8; 10], &[0u8; 2420], b"hello");
//! assert!(!outcome.was_checked()); // wrong-length key: rejected, not invalid
//! ```

pub mod codec;
pub mod params;
pub mod reject;
pub mod verify;

pub use codec::{decode_hex, encode_hex, MessageInput, MAX_HEX_LEN};
pub use params::{ParamSet, ALL_PARAM_SETS};
pub use reject::RejectReason;
pub use verify::{verify, VerifyOutcome};
