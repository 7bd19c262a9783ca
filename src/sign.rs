//! Token creation: reserved-claim overlay, canonical encoding, signing.

use crate::algorithms::{self, utils, JwtAlgorithm};
use crate::error::{JwtError, JwtResult};
use crate::types::JwtHeader;
use chrono::{DateTime, Duration, Utc};
use serde::Serialize;
use serde_json::{Map, Value};
use tokio::sync::oneshot;
use zeroize::Zeroizing;

/// Options for [`create`].
///
/// Every reserved claim here is a true optional: an unset option leaves its
/// key out of the serialized payload entirely rather than writing `null`.
#[derive(Debug, Clone, Default)]
pub struct SignOptions {
    /// Additional header parameters. Accepted for interface compatibility
    /// but never merged: the emitted header is always
    /// `{"typ":"JWT","alg":…}`.
    pub header_params: Map<String, Value>,
    /// Token lifetime; sets `exp` to the floored current epoch second plus
    /// this duration's whole seconds.
    pub expires_in: Option<Duration>,
    /// `iss` claim.
    pub issuer: Option<String>,
    /// `sub` claim.
    pub subject: Option<String>,
    /// `aud` claim.
    pub audience: Option<String>,
    /// Absolute activation time; sets `nbf` to its floored epoch second.
    pub not_before: Option<DateTime<Utc>>,
    /// Write `iat` as the floored current epoch second.
    pub include_issued_at: bool,
    /// `jti` claim.
    pub jwt_id: Option<String>,
}

impl SignOptions {
    /// Options that set no reserved claims.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the token lifetime (`exp`).
    #[must_use]
    pub fn expires_in(mut self, dur: Duration) -> Self {
        self.expires_in = Some(dur);
        self
    }

    /// Set the issuer (`iss`) claim.
    #[must_use]
    pub fn issuer(mut self, iss: impl Into<String>) -> Self {
        self.issuer = Some(iss.into());
        self
    }

    /// Set the subject (`sub`) claim.
    #[must_use]
    pub fn subject(mut self, sub: impl Into<String>) -> Self {
        self.subject = Some(sub.into());
        self
    }

    /// Set the audience (`aud`) claim.
    #[must_use]
    pub fn audience(mut self, aud: impl Into<String>) -> Self {
        self.audience = Some(aud.into());
        self
    }

    /// Set the activation time (`nbf`) claim.
    #[must_use]
    pub fn not_before(mut self, nbf: DateTime<Utc>) -> Self {
        self.not_before = Some(nbf);
        self
    }

    /// Write an issued-at (`iat`) claim.
    #[must_use]
    pub fn include_issued_at(mut self) -> Self {
        self.include_issued_at = true;
        self
    }

    /// Set the token id (`jti`) claim.
    #[must_use]
    pub fn jwt_id(mut self, jti: impl Into<String>) -> Self {
        self.jwt_id = Some(jti.into());
        self
    }

    /// Record an additional header parameter. See the field note on
    /// [`SignOptions::header_params`].
    #[must_use]
    pub fn header_param(mut self, key: impl Into<String>, value: Value) -> Self {
        self.header_params.insert(key.into(), value);
        self
    }
}

/// Build and sign a compact token.
///
/// The payload is the caller's claims overlaid with the reserved claims the
/// options set. Header and payload serialize to canonical JSON and encode
/// base64url without padding; the signature covers the two encoded segments
/// joined by a dot. Signing runs on a spawned task; an error from the
/// signing capability propagates unchanged, with no retry and no fallback
/// algorithm.
pub async fn create<C>(
    algorithm: JwtAlgorithm,
    claims: C,
    key: &[u8],
    options: SignOptions,
) -> JwtResult<String>
where
    C: Serialize,
{
    let claims_value =
        serde_json::to_value(&claims).map_err(|e| JwtError::InvalidClaims(e.to_string()))?;
    let mut payload = match claims_value {
        Value::Object(map) => map,
        _ => {
            return Err(JwtError::InvalidClaims(
                "claims must serialize to a JSON object".to_string(),
            ))
        }
    };
    apply_reserved_claims(&mut payload, &options);

    let header_json = serde_json::to_string(&JwtHeader::new(algorithm))
        .map_err(|e| JwtError::Serialization(e.to_string()))?;
    let payload_json = serde_json::to_string(&Value::Object(payload))
        .map_err(|e| JwtError::Serialization(e.to_string()))?;

    let message = format!(
        "{}.{}",
        utils::base64_url_encode(header_json.as_bytes()),
        utils::base64_url_encode(payload_json.as_bytes())
    );

    let key = Zeroizing::new(key.to_vec());
    let (tx, rx) = oneshot::channel();
    tokio::spawn(async move {
        tokio::task::yield_now().await;
        let result = algorithms::sign(algorithm, &key, message.as_bytes())
            .map(|signature| format!("{message}.{}", utils::base64_url_encode(&signature)));
        let _ = tx.send(result);
    });

    rx.await.map_err(|_| JwtError::TaskFailed)?
}

fn apply_reserved_claims(payload: &mut Map<String, Value>, options: &SignOptions) {
    let now = Utc::now().timestamp();
    if let Some(dur) = options.expires_in {
        payload.insert("exp".to_string(), Value::from(now + dur.num_seconds()));
    }
    if let Some(nbf) = options.not_before {
        payload.insert("nbf".to_string(), Value::from(nbf.timestamp()));
    }
    if options.include_issued_at {
        payload.insert("iat".to_string(), Value::from(now));
    }
    if let Some(ref iss) = options.issuer {
        payload.insert("iss".to_string(), Value::from(iss.clone()));
    }
    if let Some(ref sub) = options.subject {
        payload.insert("sub".to_string(), Value::from(sub.clone()));
    }
    if let Some(ref aud) = options.audience {
        payload.insert("aud".to_string(), Value::from(aud.clone()));
    }
    if let Some(ref jti) = options.jwt_id {
        payload.insert("jti".to_string(), Value::from(jti.clone()));
    }
}
