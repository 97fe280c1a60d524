//! End-to-end facade behavior: wire shapes, real material, auth.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use fips204::ml_dsa_44;
use fips204::traits::{SerDes, Signer};
use sigvet::{
    authorize, handle_kat_verify, handle_verify, health, AuthError, KatResponse,
    KatVerifyRequest, VerifyRequest, VerifyResponse,
};
use std::io::Write;

fn signed_request(message: &str) -> VerifyRequest {
    let (pk, sk) = ml_dsa_44::try_keygen().expect("keygen");
    let sig = sk.try_sign(message.as_bytes(), &[]).expect("sign");
    VerifyRequest {
        param_set: "ML-DSA-44".to_string(),
        public_key_hex: hex::encode(pk.into_bytes()),
        signature_hex: hex::encode(sig),
        message_hex: None,
        message: Some(message.to_string()),
    }
}

#[test]
fn genuine_signature_round_trips_to_valid() {
    let report = handle_verify(&signed_request("release artifact"));
    let json = serde_json::to_value(VerifyResponse::from(&report)).unwrap();
    assert_eq!(json, serde_json::json!({"ok": true, "result": "valid"}));
}

#[test]
fn tampered_message_round_trips_to_invalid() {
    let mut request = signed_request("original");
    request.message = Some("tampered".to_string());
    let report = handle_verify(&request);
    let json = serde_json::to_value(VerifyResponse::from(&report)).unwrap();
    assert_eq!(json, serde_json::json!({"ok": true, "result": "invalid"}));
}

#[test]
fn message_hex_form_verifies_the_same_bytes() {
    let mut request = signed_request("hex path");
    request.message_hex = Some(hex::encode("hex path"));
    request.message = None;
    let json = serde_json::to_value(VerifyResponse::from(&handle_verify(&request))).unwrap();
    assert_eq!(json["result"], "valid");
}

#[test]
fn malformed_hex_is_an_error_not_a_verdict() {
    let mut request = signed_request("x");
    request.public_key_hex = "zz zz".to_string();
    let json = serde_json::to_value(VerifyResponse::from(&handle_verify(&request))).unwrap();
    assert_eq!(json["ok"], false);
    assert!(json.get("result").is_none());
    assert!(json["error"].as_str().unwrap().contains("public key"));
}

#[test]
fn wrong_length_key_is_an_error_with_both_lengths() {
    let mut request = signed_request("x");
    request.public_key_hex = "aabb".to_string();
    let json = serde_json::to_value(VerifyResponse::from(&handle_verify(&request))).unwrap();
    assert_eq!(json["ok"], false);
    let error = json["error"].as_str().unwrap();
    assert!(error.contains("1312"));
    assert!(error.contains("2"));
}

#[test]
fn kat_batch_over_embedded_vectors() {
    let result = handle_kat_verify(&KatVerifyRequest::default()).unwrap();
    assert!(result.total > 0);
    assert_eq!(result.passed + result.failed, result.total);

    let json = serde_json::to_value(KatResponse::from(&result)).unwrap();
    assert_eq!(json["ok"], true);
    assert_eq!(json["totalVectors"], result.total);
    assert!(json["details"].as_array().unwrap().len() <= sigvet::DETAIL_CAP);
}

#[test]
fn kat_batch_from_file_path() {
    let json = r#"{
        "mode": "sigVer",
        "testGroups": [{
            "tgId": 1,
            "parameterSet": "ML-DSA-44",
            "tests": [
                {"tcId": 1, "pk": "aa", "message": "bb", "signature": "cc", "testPassed": false}
            ]
        }]
    }"#;
    let mut file = tempfile::NamedTempFile::new().expect("tempfile");
    file.write_all(json.as_bytes()).expect("write");

    let request = KatVerifyRequest {
        vectors_path: Some(file.path().to_string_lossy().into_owned()),
    };
    let result = handle_kat_verify(&request).unwrap();
    assert_eq!(result.total, 1);
    assert_eq!(result.decode_failures, 1);
}

#[test]
fn missing_vector_file_is_a_source_error() {
    let request = KatVerifyRequest { vectors_path: Some("/does/not/exist.json".to_string()) };
    assert!(handle_kat_verify(&request).is_err());
}

#[test]
fn health_shape() {
    let json = serde_json::to_value(health()).unwrap();
    assert_eq!(json["status"], "ok");
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
}

#[test]
fn auth_failures_are_not_verification_outcomes() {
    // An auth error never mentions signature state.
    let err = authorize(Some("token"), Some("wrong")).unwrap_err();
    assert_eq!(err, AuthError::InvalidCredential);
    assert!(!err.to_string().contains("signature"));

    let err = authorize(Some("token"), None).unwrap_err();
    assert_eq!(err, AuthError::MissingCredential);
}
