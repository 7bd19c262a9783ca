//! Token data model: the two-field header and the parsed token value.

use crate::algorithms::JwtAlgorithm;
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// JOSE header of a compact token.
///
/// Exactly two fields. Tokens whose header carries any other parameter are
/// rejected on parse; on write the type tag is always the literal `"JWT"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct JwtHeader {
    /// Type tag, the literal `"JWT"`.
    pub typ: String,
    /// Signing algorithm identifier.
    pub alg: JwtAlgorithm,
}

impl JwtHeader {
    /// Header for a token signed with `alg`.
    #[must_use]
    pub fn new(alg: JwtAlgorithm) -> Self {
        Self {
            typ: "JWT".to_string(),
            alg,
        }
    }
}

/// A structurally parsed compact token.
///
/// Immutable value object built atomically by [`crate::parse`]; the claims
/// map is the payload exactly as decoded, reserved keys included, while the
/// derived fields carry the reserved claims in typed form. Holding one says
/// nothing about the signature.
#[derive(Debug, Clone)]
pub struct ParsedJwt {
    /// Original compact token string.
    pub token: String,
    /// Reconstructed header.
    pub header: JwtHeader,
    /// Payload exactly as decoded.
    pub claims: Map<String, Value>,
    /// Raw base64url header segment.
    pub header_segment: String,
    /// Raw base64url payload segment.
    pub payload_segment: String,
    /// Raw base64url signature segment.
    pub signature_segment: String,
    /// Signing algorithm from the header.
    pub algorithm: JwtAlgorithm,
    /// Absolute expiry derived from `exp`.
    pub expires_at: Option<DateTime<Utc>>,
    /// Absolute issue time derived from `iat`.
    pub issued_at: Option<DateTime<Utc>>,
    /// Absolute activation time derived from `nbf`.
    pub not_before: Option<DateTime<Utc>>,
    /// `iss` claim.
    pub issuer: Option<String>,
    /// `sub` claim.
    pub subject: Option<String>,
    /// `aud` claim.
    pub audience: Option<String>,
    /// `jti` claim.
    pub jwt_id: Option<String>,
}

impl ParsedJwt {
    /// Deserialize an application claim by name.
    ///
    /// Returns `None` when the claim is absent or does not deserialize to
    /// `T`.
    #[must_use]
    pub fn claim<T: DeserializeOwned>(&self, name: &str) -> Option<T> {
        self.claims
            .get(name)
            .cloned()
            .and_then(|value| serde_json::from_value(value).ok())
    }
}
