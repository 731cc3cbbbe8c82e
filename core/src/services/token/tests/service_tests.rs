//! Unit tests for token service

use base64::{engine::general_purpose, Engine};

use crate::domain::entities::token::{Claims, TOKEN_TTL_SECONDS};
use crate::errors::TokenError;
use crate::services::secret::SecretKey;
use crate::services::token::{FixedClock, TokenService};

const ISSUED_AT: i64 = 1_700_000_000;

const KNOWN_TOKEN: &str = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9.\
eyJzdWIiOjQyLCJpYXQiOjE3MDAwMDAwMDAsImV4cCI6MTcwMDAwMzYwMH0=.\
-1l8ZhT11iRBvQVnTdDcfTg0vLkFbVmrzxN4aS8s6S0";

fn create_test_service() -> TokenService<FixedClock> {
    let secret = SecretKey::new("unit-test-secret").unwrap();
    TokenService::with_clock(secret, FixedClock(ISSUED_AT))
}

fn segments(token: &str) -> Vec<String> {
    token.split('.').map(str::to_string).collect()
}

/// Signs arbitrary header and payload JSON with the test secret
fn forge(secret: &[u8], header_json: &str, payload_json: &str) -> String {
    let input = format!(
        "{}.{}",
        general_purpose::URL_SAFE_NO_PAD.encode(header_json),
        general_purpose::URL_SAFE_NO_PAD.encode(payload_json)
    );
    let signature = crate::services::token::encoding::sign(secret, &input).unwrap();
    format!("{}.{}", input, signature)
}

#[test]
fn test_mint_known_vector() {
    let service = create_test_service();
    let token = service.mint(42).unwrap();
    assert_eq!(token, KNOWN_TOKEN);
}

#[test]
fn test_mint_payload_contents() {
    let service = create_test_service();
    let token = service.mint(42).unwrap();
    let parts = segments(&token);

    let header = general_purpose::STANDARD.decode(&parts[0]).unwrap();
    assert_eq!(header, br#"{"alg":"HS256","typ":"JWT"}"#);

    let payload = general_purpose::STANDARD.decode(&parts[1]).unwrap();
    assert_eq!(payload, br#"{"sub":42,"iat":1700000000,"exp":1700003600}"#);
}

#[test]
fn test_verify_known_vector() {
    let service = create_test_service();
    assert_eq!(service.verify(KNOWN_TOKEN), Some(42));
}

#[test]
fn test_round_trip_for_various_subjects() {
    let service = create_test_service();
    for subject in [0, 1, 42, -5, 123_456_789, i64::MAX, i64::MIN] {
        let token = service.mint(subject).unwrap();
        assert_eq!(service.verify(&token), Some(subject), "subject {}", subject);
    }
}

#[test]
fn test_round_trip_with_system_clock() {
    let service = TokenService::new(SecretKey::new("wall-clock").unwrap());
    let token = service.mint(99).unwrap();
    assert_eq!(service.verify(&token), Some(99));
}

#[test]
fn test_minted_token_shape() {
    let service = create_test_service();
    for subject in [1, 1000, -1] {
        let token = service.mint(subject).unwrap();
        assert_eq!(token.matches('.').count(), 2);
        assert!(segments(&token).iter().all(|s| !s.is_empty()));
    }
}

#[test]
fn test_tampered_signature_rejected() {
    let service = create_test_service();
    let token = service.mint(42).unwrap();
    let parts = segments(&token);
    let signature = &parts[2];

    for position in 0..signature.len() {
        let mut bytes: Vec<u8> = signature.bytes().collect();
        bytes[position] = if bytes[position] == b'x' { b'y' } else { b'x' };
        let tampered = format!(
            "{}.{}.{}",
            parts[0],
            parts[1],
            String::from_utf8(bytes).unwrap()
        );
        assert_eq!(service.verify(&tampered), None, "position {}", position);
    }
}

#[test]
fn test_tampered_payload_rejected() {
    let service = create_test_service();
    let token = service.mint(42).unwrap();
    let parts = segments(&token);

    let forged_payload =
        general_purpose::STANDARD.encode(br#"{"sub":1,"iat":1700000000,"exp":1700003600}"#);
    let tampered = format!("{}.{}.{}", parts[0], forged_payload, parts[2]);
    assert_eq!(service.verify(&tampered), None);
}

#[test]
fn test_wrong_secret_rejected() {
    let token = create_test_service().mint(42).unwrap();
    let other = TokenService::with_clock(
        SecretKey::new("another-secret").unwrap(),
        FixedClock(ISSUED_AT),
    );
    assert_eq!(other.verify(&token), None);
}

#[test]
fn test_non_hs256_algorithm_rejected() {
    let secret = b"unit-test-secret";
    let service = create_test_service();
    let payload = r#"{"sub":42,"iat":1700000000,"exp":1700003600}"#;

    for header in [
        r#"{"alg":"none","typ":"JWT"}"#,
        r#"{"alg":"HS512","typ":"JWT"}"#,
        r#"{"alg":"hs256","typ":"JWT"}"#,
        r#"{"typ":"JWT"}"#,
        r#"{"alg":256}"#,
        r#"["HS256"]"#,
    ] {
        assert_eq!(service.verify(&forge(secret, header, payload)), None, "{}", header);
    }
}

#[test]
fn test_url_safe_segments_accepted() {
    let service = create_test_service();
    let token = forge(
        b"unit-test-secret",
        r#"{"alg":"HS256","typ":"JWT"}"#,
        r#"{"sub":8,"iat":1700000000,"exp":1700003600}"#,
    );
    assert_eq!(service.verify(&token), Some(8));
}

#[test]
fn test_missing_or_non_integer_subject_rejected() {
    let secret = b"unit-test-secret";
    let service = create_test_service();
    let header = r#"{"alg":"HS256","typ":"JWT"}"#;

    for payload in [
        r#"{"iat":1700000000,"exp":1700003600}"#,
        r#"{"sub":null}"#,
        r#"{"sub":"42"}"#,
        r#"{"sub":4.2}"#,
    ] {
        assert_eq!(service.verify(&forge(secret, header, payload)), None, "{}", payload);
    }
}

#[test]
fn test_wrong_segment_count_rejected() {
    let service = create_test_service();
    let token = service.mint(42).unwrap();
    let parts = segments(&token);

    assert_eq!(service.verify(""), None);
    assert_eq!(service.verify(&parts[0]), None);
    assert_eq!(service.verify(&format!("{}.{}", parts[0], parts[1])), None);
    assert_eq!(service.verify(&format!("{}.extra", token)), None);
    assert_eq!(service.verify(&format!("{}.", token)), None);
}

#[test]
fn test_empty_segments_rejected() {
    let service = create_test_service();
    let parts = segments(KNOWN_TOKEN);

    assert_eq!(service.verify(&format!(".{}.{}", parts[1], parts[2])), None);
    assert_eq!(service.verify(&format!("{}..{}", parts[0], parts[2])), None);
    assert_eq!(service.verify(&format!("{}.{}.", parts[0], parts[1])), None);
}

#[test]
fn test_garbage_rejected() {
    let service = create_test_service();
    assert_eq!(service.verify("a.b.c"), None);
    assert_eq!(service.verify("!!!.???.***"), None);
    assert_eq!(service.verify("bm90IGpzb24.bm90IGpzb24.c2ln"), None);
}

#[test]
fn test_verify_does_not_enforce_expiry() {
    let service = create_test_service();
    let token = service.mint(42).unwrap();

    let later = TokenService::with_clock(
        SecretKey::new("unit-test-secret").unwrap(),
        FixedClock(ISSUED_AT + 10 * TOKEN_TTL_SECONDS),
    );
    assert_eq!(later.verify(&token), Some(42));
}

#[test]
fn test_verify_claims() {
    let service = create_test_service();
    let claims = service.verify_claims(KNOWN_TOKEN).unwrap();
    assert_eq!(Some(claims), Claims::new(42, ISSUED_AT));
    assert!(!claims.is_expired_at(service.now()));
    assert!(claims.is_expired_at(ISSUED_AT + TOKEN_TTL_SECONDS));
}

#[test]
fn test_verify_claims_requires_timestamps() {
    let service = create_test_service();
    let token = forge(
        b"unit-test-secret",
        r#"{"alg":"HS256","typ":"JWT"}"#,
        r#"{"sub":42}"#,
    );
    assert_eq!(service.verify(&token), Some(42));
    assert_eq!(service.verify_claims(&token), None);
}

#[test]
fn test_service_is_shareable_across_threads() {
    let service = std::sync::Arc::new(create_test_service());
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let service = service.clone();
            std::thread::spawn(move || {
                let token = service.mint(i).unwrap();
                service.verify(&token)
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        assert_eq!(handle.join().unwrap(), Some(i as i64));
    }
}

#[test]
fn test_mint_with_issued_at_out_of_range() {
    let service = TokenService::with_clock(SecretKey::new("s").unwrap(), FixedClock(i64::MAX));
    let err = service.mint(1).unwrap_err();
    assert!(matches!(err, TokenError::CreationFailed { ref message } if message.contains("out of range")));

    let edge = TokenService::with_clock(
        SecretKey::new("s").unwrap(),
        FixedClock(i64::MAX - TOKEN_TTL_SECONDS),
    );
    let token = edge.mint(1).unwrap();
    assert_eq!(edge.verify_claims(&token).unwrap().exp, i64::MAX);
}
