//! Token validation: ordered, short-circuiting gates.
//!
//! The gate order is load-bearing: algorithm identity is checked before any
//! cryptography (a token signed under one algorithm must never be accepted
//! by a check expecting another), and the time window is checked before the
//! signature so expired tokens are rejected without spending a verify.

use crate::algorithms::{self, utils::base64_url_decode, JwtAlgorithm};
use crate::error::{JwtError, JwtResult};
use crate::parse::parse;
use crate::types::ParsedJwt;
use chrono::Utc;

/// Parse and validate a compact token string.
///
/// Fails with [`JwtError::MalformedToken`] when the string does not parse;
/// otherwise behaves as [`validate_parsed`].
pub async fn validate(
    algorithm: JwtAlgorithm,
    key: &[u8],
    token: &str,
) -> JwtResult<ParsedJwt> {
    let parsed = parse(token).ok_or(JwtError::MalformedToken)?;
    validate_parsed(algorithm, key, parsed).await
}

/// Validate an already-parsed token against an expected algorithm and key.
///
/// Gates run in order and each failure aborts with its own error:
/// algorithm identity ([`JwtError::AlgorithmMismatch`]), expiry
/// ([`JwtError::TokenExpired`], the current instant must be strictly before
/// `exp`), activation ([`JwtError::TokenNotYetValid`], an instant equal to
/// `nbf` is already active), then the signature
/// ([`JwtError::InvalidSignature`]). Success returns the token unchanged.
pub async fn validate_parsed(
    algorithm: JwtAlgorithm,
    key: &[u8],
    parsed: ParsedJwt,
) -> JwtResult<ParsedJwt> {
    tokio::task::yield_now().await;

    if parsed.algorithm != algorithm {
        tracing::debug!(
            expected = %algorithm,
            found = %parsed.algorithm,
            "token algorithm mismatch"
        );
        return Err(JwtError::AlgorithmMismatch {
            expected: algorithm,
            found: parsed.algorithm,
        });
    }

    let now = Utc::now();
    if let Some(expires_at) = parsed.expires_at {
        if now >= expires_at {
            tracing::debug!(%expires_at, "token has expired");
            return Err(JwtError::TokenExpired);
        }
    }
    if let Some(not_before) = parsed.not_before {
        if now < not_before {
            tracing::debug!(%not_before, "token not yet valid");
            return Err(JwtError::TokenNotYetValid);
        }
    }

    let signature =
        base64_url_decode(&parsed.signature_segment).map_err(|_| JwtError::MalformedToken)?;
    let message = format!("{}.{}", parsed.header_segment, parsed.payload_segment);
    match algorithms::verify(algorithm, key, &signature, message.as_bytes()) {
        Ok(true) => Ok(parsed),
        Ok(false) => Err(JwtError::InvalidSignature),
        Err(err) => {
            tracing::debug!(error = %err, "signature verification failed");
            Err(JwtError::InvalidSignature)
        }
    }
}
