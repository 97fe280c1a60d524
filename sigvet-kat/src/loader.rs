#![deny(unsafe_code)]
#![warn(clippy::unwrap_used)]
#![deny(clippy::panic)]

//! Loads ACVP sigVer vector files from disk or the embedded sample set.

use crate::vectors::{KatVector, SigVerFile};
use std::path::Path;
use thiserror::Error;
use tracing::info;

/// Sample sigVer vectors compiled into the binary so the runner works
/// with no filesystem setup.
const DEFAULT_VECTORS: &str = include_str!("../testdata/ml-dsa-sigver-sample.json");

/// Errors surfaced while sourcing a vector file.
///
/// These are load-time failures that abort the batch; per-case problems
/// (bad hex, wrong lengths) are counted by the runner instead.
#[derive(Debug, Error)]
pub enum KatSourceError {
    /// The vector file could not be read.
    #[error("failed to read vector file: {0}")]
    Io(#[from] std::io::Error),

    /// The file is not valid vector JSON.
    #[error("failed to parse vector file: {0}")]
    Parse(#[from] serde_json::Error),

    /// The file parsed but is not a sigVer vector set.
    #[error("vector file has mode {found:?}, expected \"sigVer\"")]
    WrongMode {
        /// Mode string found in the file
        found: String,
    },
}

/// Loads and flattens a sigVer vector file.
///
/// With `path == None` the embedded sample set is used.
///
/// # Errors
///
/// Returns [`KatSourceError`] if the file cannot be read, is not valid
/// JSON, or declares a mode other than `sigVer`.
pub fn load_vectors(path: Option<&Path>) -> Result<Vec<KatVector>, KatSourceError> {
    let contents = match path {
        Some(p) => {
            info!(path = %p.display(), "loading sigVer vectors");
            std::fs::read_to_string(p)?
        }
        None => {
            info!("loading embedded sigVer vectors");
            DEFAULT_VECTORS.to_string()
        }
    };
    parse_vectors(&contents)
}

/// Parses sigVer vector JSON already in memory.
///
/// # Errors
///
/// Returns [`KatSourceError::Parse`] for malformed JSON and
/// [`KatSourceError::WrongMode`] for a non-sigVer vector set.
pub fn parse_vectors(contents: &str) -> Result<Vec<KatVector>, KatSourceError> {
    let file: SigVerFile = serde_json::from_str(contents)?;
    if file.mode != "sigVer" {
        return Err(KatSourceError::WrongMode { found: file.mode });
    }
    Ok(file.flatten())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn embedded_vectors_load() {
        let vectors = load_vectors(None).unwrap();
        assert!(!vectors.is_empty());
        // Case ids must be unique within the batch.
        let mut ids: Vec<u64> = vectors.iter().map(|v| v.case_id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), vectors.len());
    }

    #[test]
    fn wrong_mode_is_refused() {
        let json = r#"{"mode": "keyGen", "testGroups": []}"#;
        let err = parse_vectors(json).unwrap_err();
        assert!(matches!(err, KatSourceError::WrongMode { found } if found == "keyGen"));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = parse_vectors("{not json").unwrap_err();
        assert!(matches!(err, KatSourceError::Parse(_)));
    }
}
