//! Algorithm registry: the closed identifier set and per-family dispatch.
//!
//! Dispatch is a pure function of the identifier; the registry holds no
//! state and is safe for unbounded concurrent use.

mod ecdsa;
mod hmac;
mod rsa;
pub(crate) mod utils;

use crate::error::{JwtError, JwtResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// JWS signing algorithms supported for token creation and validation.
///
/// Each identifier fixes its cryptographic family and hash; the ES
/// identifiers additionally fix their curve. The set is closed: anything
/// else fails header parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum JwtAlgorithm {
    /// HMAC with SHA-256
    HS256,
    /// HMAC with SHA-384
    HS384,
    /// HMAC with SHA-512
    HS512,
    /// RSASSA-PKCS1-v1_5 with SHA-256
    RS256,
    /// RSASSA-PKCS1-v1_5 with SHA-384
    RS384,
    /// RSASSA-PKCS1-v1_5 with SHA-512
    RS512,
    /// RSASSA-PSS with SHA-256
    PS256,
    /// RSASSA-PSS with SHA-384
    PS384,
    /// RSASSA-PSS with SHA-512
    PS512,
    /// ECDSA with SHA-256 over P-256
    ES256,
    /// ECDSA with SHA-384 over P-384
    ES384,
    /// ECDSA with SHA-512 over P-521
    ES512,
}

/// Cryptographic family behind an algorithm identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JwtAlgorithmFamily {
    /// HMAC with SHA-2
    Hmac,
    /// RSASSA-PKCS1-v1_5
    RsaPkcs1,
    /// RSASSA-PSS
    RsaPss,
    /// ECDSA over a NIST curve
    Ecdsa,
}

impl JwtAlgorithm {
    /// Every recognized identifier.
    pub const ALL: [JwtAlgorithm; 12] = [
        JwtAlgorithm::HS256,
        JwtAlgorithm::HS384,
        JwtAlgorithm::HS512,
        JwtAlgorithm::RS256,
        JwtAlgorithm::RS384,
        JwtAlgorithm::RS512,
        JwtAlgorithm::PS256,
        JwtAlgorithm::PS384,
        JwtAlgorithm::PS512,
        JwtAlgorithm::ES256,
        JwtAlgorithm::ES384,
        JwtAlgorithm::ES512,
    ];

    /// The identifier's cryptographic family.
    #[must_use]
    pub fn family(self) -> JwtAlgorithmFamily {
        match self {
            JwtAlgorithm::HS256 | JwtAlgorithm::HS384 | JwtAlgorithm::HS512 => {
                JwtAlgorithmFamily::Hmac
            }
            JwtAlgorithm::RS256 | JwtAlgorithm::RS384 | JwtAlgorithm::RS512 => {
                JwtAlgorithmFamily::RsaPkcs1
            }
            JwtAlgorithm::PS256 | JwtAlgorithm::PS384 | JwtAlgorithm::PS512 => {
                JwtAlgorithmFamily::RsaPss
            }
            JwtAlgorithm::ES256 | JwtAlgorithm::ES384 | JwtAlgorithm::ES512 => {
                JwtAlgorithmFamily::Ecdsa
            }
        }
    }

    /// Identifier exactly as it appears in the `alg` header field.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            JwtAlgorithm::HS256 => "HS256",
            JwtAlgorithm::HS384 => "HS384",
            JwtAlgorithm::HS512 => "HS512",
            JwtAlgorithm::RS256 => "RS256",
            JwtAlgorithm::RS384 => "RS384",
            JwtAlgorithm::RS512 => "RS512",
            JwtAlgorithm::PS256 => "PS256",
            JwtAlgorithm::PS384 => "PS384",
            JwtAlgorithm::PS512 => "PS512",
            JwtAlgorithm::ES256 => "ES256",
            JwtAlgorithm::ES384 => "ES384",
            JwtAlgorithm::ES512 => "ES512",
        }
    }
}

impl fmt::Display for JwtAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for JwtAlgorithm {
    type Err = JwtError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        JwtAlgorithm::ALL
            .iter()
            .copied()
            .find(|alg| alg.as_str() == s)
            .ok_or_else(|| JwtError::UnsupportedAlgorithm(s.to_string()))
    }
}

/// Sign `message` with the capability `algorithm` resolves to.
///
/// The key is raw material interpreted by the family: HMAC secrets are the
/// bytes themselves, RSA private keys are PKCS#8 DER, ECDSA private keys
/// are a raw scalar or PKCS#8 DER.
pub(crate) fn sign(algorithm: JwtAlgorithm, key: &[u8], message: &[u8]) -> JwtResult<Vec<u8>> {
    match algorithm {
        JwtAlgorithm::HS256 => hmac::sign_hs256(key, message),
        JwtAlgorithm::HS384 => hmac::sign_hs384(key, message),
        JwtAlgorithm::HS512 => hmac::sign_hs512(key, message),
        JwtAlgorithm::RS256 => rsa::sign_rs256(key, message),
        JwtAlgorithm::RS384 => rsa::sign_rs384(key, message),
        JwtAlgorithm::RS512 => rsa::sign_rs512(key, message),
        JwtAlgorithm::PS256 => rsa::sign_ps256(key, message),
        JwtAlgorithm::PS384 => rsa::sign_ps384(key, message),
        JwtAlgorithm::PS512 => rsa::sign_ps512(key, message),
        JwtAlgorithm::ES256 => ecdsa::sign_es256(key, message),
        JwtAlgorithm::ES384 => ecdsa::sign_es384(key, message),
        JwtAlgorithm::ES512 => ecdsa::sign_es512(key, message),
    }
}

/// Verify `signature` over `message` with the capability `algorithm`
/// resolves to.
///
/// HMAC secrets verify against the raw bytes; RSA public keys are SPKI DER;
/// ECDSA public keys are a SEC1 point or SPKI DER.
pub(crate) fn verify(
    algorithm: JwtAlgorithm,
    key: &[u8],
    signature: &[u8],
    message: &[u8],
) -> JwtResult<bool> {
    match algorithm {
        JwtAlgorithm::HS256 => hmac::verify_hs256(key, signature, message),
        JwtAlgorithm::HS384 => hmac::verify_hs384(key, signature, message),
        JwtAlgorithm::HS512 => hmac::verify_hs512(key, signature, message),
        JwtAlgorithm::RS256 => rsa::verify_rs256(key, signature, message),
        JwtAlgorithm::RS384 => rsa::verify_rs384(key, signature, message),
        JwtAlgorithm::RS512 => rsa::verify_rs512(key, signature, message),
        JwtAlgorithm::PS256 => rsa::verify_ps256(key, signature, message),
        JwtAlgorithm::PS384 => rsa::verify_ps384(key, signature, message),
        JwtAlgorithm::PS512 => rsa::verify_ps512(key, signature, message),
        JwtAlgorithm::ES256 => ecdsa::verify_es256(key, signature, message),
        JwtAlgorithm::ES384 => ecdsa::verify_es384(key, signature, message),
        JwtAlgorithm::ES512 => ecdsa::verify_es512(key, signature, message),
    }
}
