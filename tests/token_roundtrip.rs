//! Round-trip coverage: create → parse → validate across the algorithm set.

mod common;

use chrono::{Duration, Utc};
use serde_json::json;
use signet_jwt::{create, parse, validate, JwtAlgorithm, JwtError, SignOptions};

#[tokio::test]
async fn round_trip_all_algorithms() {
    let rsa = common::rsa_keypair();
    for alg in JwtAlgorithm::ALL {
        let (private, public) = common::keypair_for(alg, &rsa);
        let claims = json!({"role": "admin", "level": 7});
        let options = SignOptions::new()
            .expires_in(Duration::seconds(3600))
            .issuer("svc");

        let token = create(alg, &claims, &private, options)
            .await
            .unwrap_or_else(|e| panic!("create under {alg}: {e}"));
        let parsed = validate(alg, &public, &token)
            .await
            .unwrap_or_else(|e| panic!("validate under {alg}: {e}"));

        assert_eq!(parsed.algorithm, alg);
        assert_eq!(parsed.header.typ, "JWT");
        assert_eq!(
            parsed.claims.get("role").and_then(|v| v.as_str()),
            Some("admin"),
            "custom claim lost under {alg}"
        );
        assert_eq!(parsed.claims.get("level").and_then(|v| v.as_i64()), Some(7));
        assert_eq!(parsed.issuer.as_deref(), Some("svc"));
        assert!(parsed.expires_at.expect("exp was set") > Utc::now());

        // only the claims the options actually set are present
        assert!(parsed.subject.is_none());
        assert!(parsed.jwt_id.is_none());
        assert!(parsed.claims.get("iat").is_none());
        assert_eq!(parsed.claims.len(), 4, "role, level, exp, iss under {alg}");
    }
}

#[tokio::test]
async fn scenario_hs256_admin_token() {
    let token = create(
        JwtAlgorithm::HS256,
        json!({"role": "admin"}),
        common::HMAC_SECRET,
        SignOptions::new()
            .expires_in(Duration::seconds(3600))
            .issuer("svc"),
    )
    .await
    .expect("create");

    let parsed = parse(&token).expect("token parses");
    assert_eq!(
        parsed.claims.get("role").and_then(|v| v.as_str()),
        Some("admin")
    );

    let validated = validate(JwtAlgorithm::HS256, common::HMAC_SECRET, &token)
        .await
        .expect("token validates");
    assert_eq!(validated.issuer.as_deref(), Some("svc"));
}

#[tokio::test]
async fn every_option_round_trips() {
    let nbf = Utc::now() - Duration::seconds(10);
    let token = create(
        JwtAlgorithm::HS256,
        json!({}),
        common::HMAC_SECRET,
        SignOptions::new()
            .expires_in(Duration::seconds(600))
            .issuer("iss-1")
            .subject("sub-1")
            .audience("aud-1")
            .jwt_id("jti-1")
            .not_before(nbf)
            .include_issued_at(),
    )
    .await
    .expect("create");

    let parsed = validate(JwtAlgorithm::HS256, common::HMAC_SECRET, &token)
        .await
        .expect("validate");
    assert_eq!(parsed.issuer.as_deref(), Some("iss-1"));
    assert_eq!(parsed.subject.as_deref(), Some("sub-1"));
    assert_eq!(parsed.audience.as_deref(), Some("aud-1"));
    assert_eq!(parsed.jwt_id.as_deref(), Some("jti-1"));
    assert_eq!(
        parsed.not_before.expect("nbf set").timestamp(),
        nbf.timestamp()
    );
    assert!(parsed.issued_at.is_some());
    assert!(parsed.expires_at.is_some());
}

#[tokio::test]
async fn typed_claim_accessor() {
    let token = create(
        JwtAlgorithm::HS256,
        json!({"role": "admin", "scopes": ["read", "write"]}),
        common::HMAC_SECRET,
        SignOptions::new(),
    )
    .await
    .expect("create");

    let parsed = parse(&token).expect("parse");
    assert_eq!(parsed.claim::<String>("role").as_deref(), Some("admin"));
    assert_eq!(
        parsed.claim::<Vec<String>>("scopes"),
        Some(vec!["read".to_string(), "write".to_string()])
    );
    assert_eq!(parsed.claim::<i64>("role"), None);
    assert_eq!(parsed.claim::<String>("missing"), None);
}

#[tokio::test]
async fn header_params_are_not_emitted() {
    let token = create(
        JwtAlgorithm::HS256,
        json!({}),
        common::HMAC_SECRET,
        SignOptions::new().header_param("kid", json!("key-7")),
    )
    .await
    .expect("create");

    // the emitted header stays the two-field literal, so it still parses
    // under the strict header shape
    let parsed = parse(&token).expect("parse");
    assert_eq!(parsed.header.typ, "JWT");
    assert_eq!(parsed.header.alg, JwtAlgorithm::HS256);
}

#[tokio::test]
async fn non_object_claims_are_rejected() {
    let err = create(
        JwtAlgorithm::HS256,
        json!(["not", "an", "object"]),
        common::HMAC_SECRET,
        SignOptions::new(),
    )
    .await
    .unwrap_err();
    assert!(matches!(err, JwtError::InvalidClaims(_)));
}

#[tokio::test]
async fn short_hmac_secret_fails_create() {
    let err = create(
        JwtAlgorithm::HS256,
        json!({"role": "admin"}),
        b"shh",
        SignOptions::new(),
    )
    .await
    .unwrap_err();
    assert!(matches!(err, JwtError::InvalidKey(_)));
}
