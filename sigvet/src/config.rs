#![deny(unsafe_code)]
#![warn(clippy::unwrap_used)]
#![deny(clippy::panic)]

//! Environment-driven service configuration.

use crate::report::DETAIL_CAP;
use sigvet_core::MAX_HEX_LEN;
use tracing::{info, warn};

/// Runtime settings for a sigvet deployment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    /// Whether requests must present a bearer token.
    pub require_auth: bool,
    /// The required token; `None` with `require_auth` set is a
    /// misconfiguration the caller must treat as deny-all.
    pub auth_token: Option<String>,
    /// Maximum accepted hex input length, in characters.
    pub max_hex_len: usize,
    /// Maximum per-case verdicts in a KAT response.
    pub detail_cap: usize,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            require_auth: false,
            auth_token: None,
            max_hex_len: MAX_HEX_LEN,
            detail_cap: DETAIL_CAP,
        }
    }
}

impl ServiceConfig {
    /// Loads settings from `SIGVET_*` environment variables, falling
    /// back to defaults for anything unset or unparseable.
    #[must_use]
    pub fn from_env() -> Self {
        let mut cfg = Self::default();

        cfg.require_auth = matches!(
            std::env::var("SIGVET_REQUIRE_AUTH").as_deref(),
            Ok("true") | Ok("1")
        );
        cfg.auth_token = std::env::var("SIGVET_AUTH_TOKEN").ok().filter(|t| !t.is_empty());

        if let Ok(raw) = std::env::var("SIGVET_MAX_HEX_LEN") {
            match raw.parse::<usize>() {
                Ok(n) if n > 0 => cfg.max_hex_len = n,
                _ => warn!(raw = %raw, "ignoring invalid SIGVET_MAX_HEX_LEN"),
            }
        }
        if let Ok(raw) = std::env::var("SIGVET_DETAIL_CAP") {
            match raw.parse::<usize>() {
                Ok(n) => cfg.detail_cap = n,
                Err(_) => warn!(raw = %raw, "ignoring invalid SIGVET_DETAIL_CAP"),
            }
        }

        if cfg.require_auth && cfg.auth_token.is_none() {
            warn!("SIGVET_REQUIRE_AUTH set without SIGVET_AUTH_TOKEN; all requests will be denied");
        }
        info!(
            require_auth = cfg.require_auth,
            max_hex_len = cfg.max_hex_len,
            detail_cap = cfg.detail_cap,
            "service configuration loaded"
        );
        cfg
    }

    /// The token requests must match, or `None` when auth is disabled.
    ///
    /// Required-but-unset is surfaced as a required empty token that
    /// can never match, so misconfiguration fails closed.
    #[must_use]
    pub fn required_token(&self) -> Option<&str> {
        if self.require_auth {
            Some(self.auth_token.as_deref().unwrap_or(""))
        } else {
            None
        }
    }
}
