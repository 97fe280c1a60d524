#![deny(unsafe_code)]
#![warn(clippy::unwrap_used)]
#![deny(clippy::panic)]

//! Bearer-token authorization pass-through.
//!
//! Auth lives entirely outside the verification pipeline: the required
//! token is an explicit parameter, never ambient state, and an
//! [`AuthError`] is a different type from every verification class so
//! the two can never be conflated.

use thiserror::Error;
use tracing::warn;

/// Authorization failure, distinct from all verification outcomes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// No credential was presented.
    #[error("authorization required")]
    MissingCredential,

    /// A credential was presented but does not match.
    #[error("invalid credential")]
    InvalidCredential,
}

/// Checks a presented bearer credential against the required one.
///
/// `required == None` means auth is disabled and everything passes.
/// An empty required token is a misconfiguration and denies every
/// request, including an empty presented token.
///
/// # Errors
///
/// Returns [`AuthError::MissingCredential`] when a token is required
/// but none was presented, and [`AuthError::InvalidCredential`] on a
/// mismatch.
pub fn authorize(required: Option<&str>, presented: Option<&str>) -> Result<(), AuthError> {
    let Some(required) = required else {
        return Ok(());
    };
    match presented {
        None => {
            warn!(event = "auth_failed", detail = "missing_credential");
            Err(AuthError::MissingCredential)
        }
        Some(token) if !required.is_empty() && token == required => Ok(()),
        Some(_) => {
            warn!(event = "auth_failed", detail = "invalid_token");
            Err(AuthError::InvalidCredential)
        }
    }
}
