//! Error types for token creation and validation.

use crate::algorithms::JwtAlgorithm;
use thiserror::Error;

/// JWT operation result type.
pub type JwtResult<T> = Result<T, JwtError>;

/// JWT error types.
///
/// Validation surfaces each rejection cause as its own variant so callers
/// can branch on why a token was refused. Parsing does not use this type;
/// a string that is not a well-formed token parses to `None`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum JwtError {
    /// Token string is not structurally a JWT
    #[error("malformed token")]
    MalformedToken,
    /// Algorithm identifier outside the supported set
    #[error("unsupported algorithm: {0}")]
    UnsupportedAlgorithm(String),
    /// Token header algorithm differs from the expected algorithm
    #[error("algorithm mismatch: expected {expected}, token uses {found}")]
    AlgorithmMismatch {
        /// Algorithm the caller asked to validate against.
        expected: JwtAlgorithm,
        /// Algorithm the token header carries.
        found: JwtAlgorithm,
    },
    /// Token has expired
    #[error("token has expired")]
    TokenExpired,
    /// Token not yet valid
    #[error("token not yet valid")]
    TokenNotYetValid,
    /// Invalid signature
    #[error("invalid JWT signature")]
    InvalidSignature,
    /// Cryptographic signing operation failed
    #[error("signing error: {0}")]
    SigningError(String),
    /// Key rejected by the signing or verification capability
    #[error("invalid key: {0}")]
    InvalidKey(String),
    /// Claims input did not serialize to a JSON object
    #[error("invalid claims: {0}")]
    InvalidClaims(String),
    /// Serialization failed
    #[error("serialization error: {0}")]
    Serialization(String),
    /// Background signing task failed
    #[error("background task failed")]
    TaskFailed,
}
