//! Structural parsing of compact token strings.
//!
//! Parsing is pure and synchronous and performs no cryptography: the
//! signature segment is carried through undecoded and unchecked.

use crate::algorithms::utils::base64_url_decode;
use crate::types::{JwtHeader, ParsedJwt};
use chrono::{DateTime, Utc};
use serde_json::{Map, Value};

/// Parse a compact token string into a [`ParsedJwt`].
///
/// Anything that is not a well-formed token parses to `None`: wrong
/// segment count, empty segments, bad base64url or JSON, a header that is
/// not exactly `{"typ":"JWT","alg":…}` with a recognized algorithm, a
/// non-object payload, or a reserved claim of the wrong type. There is no
/// partial result: one bad reserved claim rejects the whole token.
#[must_use]
pub fn parse(token: &str) -> Option<ParsedJwt> {
    let segments: Vec<&str> = token.split('.').collect();
    if segments.len() != 3 {
        return None;
    }
    let (header_segment, payload_segment, signature_segment) =
        (segments[0], segments[1], segments[2]);
    if header_segment.is_empty() || payload_segment.is_empty() || signature_segment.is_empty() {
        return None;
    }

    let header_bytes = base64_url_decode(header_segment).ok()?;
    let header: JwtHeader = serde_json::from_slice(&header_bytes).ok()?;
    if header.typ != "JWT" {
        return None;
    }

    let payload_bytes = base64_url_decode(payload_segment).ok()?;
    let claims = match serde_json::from_slice(&payload_bytes).ok()? {
        Value::Object(map) => map,
        _ => return None,
    };

    let expires_at = timestamp_claim(&claims, "exp")?;
    let issued_at = timestamp_claim(&claims, "iat")?;
    let not_before = timestamp_claim(&claims, "nbf")?;
    let issuer = string_claim(&claims, "iss")?;
    let subject = string_claim(&claims, "sub")?;
    let audience = string_claim(&claims, "aud")?;
    let jwt_id = string_claim(&claims, "jti")?;

    let algorithm = header.alg;
    Some(ParsedJwt {
        token: token.to_string(),
        header,
        claims,
        header_segment: header_segment.to_string(),
        payload_segment: payload_segment.to_string(),
        signature_segment: signature_segment.to_string(),
        algorithm,
        expires_at,
        issued_at,
        not_before,
        issuer,
        subject,
        audience,
        jwt_id,
    })
}

// Reserved timestamp claims must be integer seconds. Absent is fine
// (Some(None)); present-but-mistyped or out of timestamp range rejects the
// parse (None).
fn timestamp_claim(claims: &Map<String, Value>, key: &str) -> Option<Option<DateTime<Utc>>> {
    match claims.get(key) {
        None => Some(None),
        Some(value) => {
            let seconds = value.as_i64()?;
            Some(Some(DateTime::from_timestamp(seconds, 0)?))
        }
    }
}

// Reserved string claims must be JSON strings.
fn string_claim(claims: &Map<String, Value>, key: &str) -> Option<Option<String>> {
    match claims.get(key) {
        None => Some(None),
        Some(Value::String(s)) => Some(Some(s.clone())),
        Some(_) => None,
    }
}
