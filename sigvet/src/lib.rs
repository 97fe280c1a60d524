#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::unwrap_used)]
#![deny(clippy::panic)]

//! # sigvet
//!
//! Facade for the sigvet ML-DSA diagnostics core: request handling,
//! wire-shape reporting, bearer-token authorization, and environment
//! configuration. Transport (HTTP routing, token extraction) stays
//! outside this crate; a thin router can bind [`api::handle_verify`],
//! [`api::handle_kat_verify`], and [`api::health`] to endpoints with
//! no logic of its own.
//!
//! ```
//! use sigvet::{handle_verify, VerifyRequest, VerifyResponse};
//!
//! let request = VerifyRequest {
//!     param_set: "ML-DSA-44".to_string(),
//!     public_key_hex: "not hex".to_string(),
//!     signature_hex: "00".to_string(),
//!     message_hex: None,
//!     message: Some("hello".to_string()),
//! };
//! let response = VerifyResponse::from(&handle_verify(&request));
//! assert!(!response.ok);
//! ```

pub mod api;
pub mod auth;
pub mod config;
pub mod report;

pub use api::{
    handle_kat_verify, handle_verify, health, Health, KatVerifyRequest, VerifyReport,
    VerifyRequest,
};
pub use auth::{authorize, AuthError};
pub use config::ServiceConfig;
pub use report::{ErrorResponse, KatResponse, VerifyResponse, DETAIL_CAP};
