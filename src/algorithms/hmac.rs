//! HMAC-SHA implementations for the HS256, HS384, and HS512 identifiers.

use crate::error::{JwtError, JwtResult};
use hmac::{Hmac, Mac};
use sha2::{Sha256, Sha384, Sha512};
use subtle::ConstantTimeEq;

type HmacSha256 = Hmac<Sha256>;
type HmacSha384 = Hmac<Sha384>;
type HmacSha512 = Hmac<Sha512>;

/// Secrets shorter than the hash output are rejected (RFC 2104 §2).
fn check_secret_length(secret: &[u8], min: usize, algorithm: &str) -> JwtResult<()> {
    if secret.len() < min {
        return Err(JwtError::InvalidKey(format!(
            "HMAC key for {} must be at least {} bytes, got {}",
            algorithm,
            min,
            secret.len()
        )));
    }
    Ok(())
}

/// Sign with HMAC-SHA256 (HS256)
pub(crate) fn sign_hs256(secret: &[u8], message: &[u8]) -> JwtResult<Vec<u8>> {
    check_secret_length(secret, 32, "HS256")?;
    let mut mac = HmacSha256::new_from_slice(secret)
        .map_err(|_| JwtError::InvalidKey("invalid HMAC key".to_string()))?;
    mac.update(message);
    Ok(mac.finalize().into_bytes().to_vec())
}

/// Verify an HMAC-SHA256 (HS256) signature in constant time
pub(crate) fn verify_hs256(secret: &[u8], signature: &[u8], message: &[u8]) -> JwtResult<bool> {
    let expected = sign_hs256(secret, message)?;
    Ok(expected.as_slice().ct_eq(signature).into())
}

/// Sign with HMAC-SHA384 (HS384)
pub(crate) fn sign_hs384(secret: &[u8], message: &[u8]) -> JwtResult<Vec<u8>> {
    check_secret_length(secret, 48, "HS384")?;
    let mut mac = HmacSha384::new_from_slice(secret)
        .map_err(|_| JwtError::InvalidKey("invalid HMAC key".to_string()))?;
    mac.update(message);
    Ok(mac.finalize().into_bytes().to_vec())
}

/// Verify an HMAC-SHA384 (HS384) signature in constant time
pub(crate) fn verify_hs384(secret: &[u8], signature: &[u8], message: &[u8]) -> JwtResult<bool> {
    let expected = sign_hs384(secret, message)?;
    Ok(expected.as_slice().ct_eq(signature).into())
}

/// Sign with HMAC-SHA512 (HS512)
pub(crate) fn sign_hs512(secret: &[u8], message: &[u8]) -> JwtResult<Vec<u8>> {
    check_secret_length(secret, 64, "HS512")?;
    let mut mac = HmacSha512::new_from_slice(secret)
        .map_err(|_| JwtError::InvalidKey("invalid HMAC key".to_string()))?;
    mac.update(message);
    Ok(mac.finalize().into_bytes().to_vec())
}

/// Verify an HMAC-SHA512 (HS512) signature in constant time
pub(crate) fn verify_hs512(secret: &[u8], signature: &[u8], message: &[u8]) -> JwtResult<bool> {
    let expected = sign_hs512(secret, message)?;
    Ok(expected.as_slice().ct_eq(signature).into())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &[u8] = b"0123456789abcdef0123456789abcdef";

    #[test]
    fn sign_and_verify() {
        let sig = sign_hs256(SECRET, b"payload").unwrap();
        assert_eq!(sig.len(), 32);
        assert!(verify_hs256(SECRET, &sig, b"payload").unwrap());
        assert!(!verify_hs256(SECRET, &sig, b"other").unwrap());
    }

    #[test]
    fn truncated_signature_is_rejected() {
        let sig = sign_hs256(SECRET, b"payload").unwrap();
        assert!(!verify_hs256(SECRET, &sig[..31], b"payload").unwrap());
    }

    #[test]
    fn short_secret_is_rejected() {
        let err = sign_hs256(b"shh", b"payload").unwrap_err();
        assert!(matches!(err, JwtError::InvalidKey(_)));
        let err = sign_hs512(SECRET, b"payload").unwrap_err();
        assert!(matches!(err, JwtError::InvalidKey(_)));
    }
}
