//! ECDSA implementations for ES256 (P-256), ES384 (P-384), and ES512
//! (P-521).
//!
//! Signatures are the fixed-width `r || s` concatenation RFC 7515 requires,
//! not ASN.1 DER. Private keys are accepted as a raw scalar (32, 48, or 66
//! bytes) or PKCS#8 DER; public keys as a SEC1 point or SPKI DER.

use crate::error::{JwtError, JwtResult};

// An SPKI DER document always opens with an ASN.1 SEQUENCE tag; SEC1 points
// open with 0x02/0x03 (compressed) or 0x04 (uncompressed).
fn looks_like_der(bytes: &[u8]) -> bool {
    bytes.first() == Some(&0x30)
}

/// Sign with ECDSA P-256 and SHA-256 (ES256)
pub(crate) fn sign_es256(private_key: &[u8], message: &[u8]) -> JwtResult<Vec<u8>> {
    use p256::ecdsa::{signature::Signer, Signature, SigningKey};
    use p256::pkcs8::DecodePrivateKey;

    let signing_key = if private_key.len() == 32 {
        SigningKey::from_slice(private_key)
            .map_err(|_| JwtError::InvalidKey("invalid P-256 private scalar".to_string()))?
    } else {
        SigningKey::from_pkcs8_der(private_key)
            .map_err(|_| JwtError::InvalidKey("invalid P-256 PKCS#8 private key".to_string()))?
    };
    let signature: Signature = signing_key
        .try_sign(message)
        .map_err(|e| JwtError::SigningError(e.to_string()))?;
    Ok(signature.to_bytes().to_vec())
}

/// Verify an ECDSA P-256 SHA-256 (ES256) signature
pub(crate) fn verify_es256(public_key: &[u8], signature: &[u8], message: &[u8]) -> JwtResult<bool> {
    use p256::ecdsa::{signature::Verifier, Signature, VerifyingKey};
    use p256::pkcs8::DecodePublicKey;

    let verifying_key = if looks_like_der(public_key) {
        VerifyingKey::from_public_key_der(public_key)
            .map_err(|_| JwtError::InvalidKey("invalid P-256 SPKI public key".to_string()))?
    } else {
        VerifyingKey::from_sec1_bytes(public_key)
            .map_err(|_| JwtError::InvalidKey("invalid P-256 SEC1 public key".to_string()))?
    };
    let signature = Signature::from_slice(signature).map_err(|_| JwtError::InvalidSignature)?;
    Ok(verifying_key.verify(message, &signature).is_ok())
}

/// Sign with ECDSA P-384 and SHA-384 (ES384)
pub(crate) fn sign_es384(private_key: &[u8], message: &[u8]) -> JwtResult<Vec<u8>> {
    use p384::ecdsa::{signature::Signer, Signature, SigningKey};
    use p384::pkcs8::DecodePrivateKey;

    let signing_key = if private_key.len() == 48 {
        SigningKey::from_slice(private_key)
            .map_err(|_| JwtError::InvalidKey("invalid P-384 private scalar".to_string()))?
    } else {
        SigningKey::from_pkcs8_der(private_key)
            .map_err(|_| JwtError::InvalidKey("invalid P-384 PKCS#8 private key".to_string()))?
    };
    let signature: Signature = signing_key
        .try_sign(message)
        .map_err(|e| JwtError::SigningError(e.to_string()))?;
    Ok(signature.to_bytes().to_vec())
}

/// Verify an ECDSA P-384 SHA-384 (ES384) signature
pub(crate) fn verify_es384(public_key: &[u8], signature: &[u8], message: &[u8]) -> JwtResult<bool> {
    use p384::ecdsa::{signature::Verifier, Signature, VerifyingKey};
    use p384::pkcs8::DecodePublicKey;

    let verifying_key = if looks_like_der(public_key) {
        VerifyingKey::from_public_key_der(public_key)
            .map_err(|_| JwtError::InvalidKey("invalid P-384 SPKI public key".to_string()))?
    } else {
        VerifyingKey::from_sec1_bytes(public_key)
            .map_err(|_| JwtError::InvalidKey("invalid P-384 SEC1 public key".to_string()))?
    };
    let signature = Signature::from_slice(signature).map_err(|_| JwtError::InvalidSignature)?;
    Ok(verifying_key.verify(message, &signature).is_ok())
}

/// Sign with ECDSA P-521 and SHA-512 (ES512)
pub(crate) fn sign_es512(private_key: &[u8], message: &[u8]) -> JwtResult<Vec<u8>> {
    use p521::ecdsa::{signature::Signer, Signature, SigningKey};
    use p521::pkcs8::DecodePrivateKey;

    let signing_key = if private_key.len() == 66 {
        SigningKey::from_slice(private_key)
            .map_err(|_| JwtError::InvalidKey("invalid P-521 private scalar".to_string()))?
    } else {
        SigningKey::from_pkcs8_der(private_key)
            .map_err(|_| JwtError::InvalidKey("invalid P-521 PKCS#8 private key".to_string()))?
    };
    let signature: Signature = signing_key
        .try_sign(message)
        .map_err(|e| JwtError::SigningError(e.to_string()))?;
    Ok(signature.to_bytes().to_vec())
}

/// Verify an ECDSA P-521 SHA-512 (ES512) signature
pub(crate) fn verify_es512(public_key: &[u8], signature: &[u8], message: &[u8]) -> JwtResult<bool> {
    use p521::ecdsa::{signature::Verifier, Signature, VerifyingKey};
    use p521::pkcs8::DecodePublicKey;

    let verifying_key = if looks_like_der(public_key) {
        VerifyingKey::from_public_key_der(public_key)
            .map_err(|_| JwtError::InvalidKey("invalid P-521 SPKI public key".to_string()))?
    } else {
        VerifyingKey::from_sec1_bytes(public_key)
            .map_err(|_| JwtError::InvalidKey("invalid P-521 SEC1 public key".to_string()))?
    };
    let signature = Signature::from_slice(signature).map_err(|_| JwtError::InvalidSignature)?;
    Ok(verifying_key.verify(message, &signature).is_ok())
}
