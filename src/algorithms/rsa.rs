//! RSA implementations for the RS (PKCS#1 v1.5) and PS (PSS) identifier
//! families.
//!
//! Private keys are PKCS#8 DER, public keys SPKI DER. PSS signatures use a
//! random salt of the digest length, so PS signing draws from the system
//! RNG.

use crate::error::{JwtError, JwtResult};
use rsa::pkcs1v15;
use rsa::pss;
use rsa::sha2::{Sha256, Sha384, Sha512};
use rsa::signature::{RandomizedSigner, SignatureEncoding, Signer, Verifier};
use rsa::{
    pkcs8::{DecodePrivateKey, DecodePublicKey},
    RsaPrivateKey, RsaPublicKey,
};

fn private_key_from_der(der: &[u8]) -> JwtResult<RsaPrivateKey> {
    RsaPrivateKey::from_pkcs8_der(der)
        .map_err(|e| JwtError::InvalidKey(format!("invalid RSA private key: {e}")))
}

fn public_key_from_der(der: &[u8]) -> JwtResult<RsaPublicKey> {
    RsaPublicKey::from_public_key_der(der)
        .map_err(|e| JwtError::InvalidKey(format!("invalid RSA public key: {e}")))
}

/// Sign with RSASSA-PKCS1-v1_5 and SHA-256 (RS256)
pub(crate) fn sign_rs256(private_key: &[u8], message: &[u8]) -> JwtResult<Vec<u8>> {
    let signing_key = pkcs1v15::SigningKey::<Sha256>::new(private_key_from_der(private_key)?);
    let signature = signing_key
        .try_sign(message)
        .map_err(|e| JwtError::SigningError(e.to_string()))?;
    Ok(signature.to_bytes().as_ref().to_vec())
}

/// Verify an RSASSA-PKCS1-v1_5 SHA-256 (RS256) signature
pub(crate) fn verify_rs256(public_key: &[u8], signature: &[u8], message: &[u8]) -> JwtResult<bool> {
    let verifying_key = pkcs1v15::VerifyingKey::<Sha256>::new(public_key_from_der(public_key)?);
    let signature =
        pkcs1v15::Signature::try_from(signature).map_err(|_| JwtError::InvalidSignature)?;
    Ok(verifying_key.verify(message, &signature).is_ok())
}

/// Sign with RSASSA-PKCS1-v1_5 and SHA-384 (RS384)
pub(crate) fn sign_rs384(private_key: &[u8], message: &[u8]) -> JwtResult<Vec<u8>> {
    let signing_key = pkcs1v15::SigningKey::<Sha384>::new(private_key_from_der(private_key)?);
    let signature = signing_key
        .try_sign(message)
        .map_err(|e| JwtError::SigningError(e.to_string()))?;
    Ok(signature.to_bytes().as_ref().to_vec())
}

/// Verify an RSASSA-PKCS1-v1_5 SHA-384 (RS384) signature
pub(crate) fn verify_rs384(public_key: &[u8], signature: &[u8], message: &[u8]) -> JwtResult<bool> {
    let verifying_key = pkcs1v15::VerifyingKey::<Sha384>::new(public_key_from_der(public_key)?);
    let signature =
        pkcs1v15::Signature::try_from(signature).map_err(|_| JwtError::InvalidSignature)?;
    Ok(verifying_key.verify(message, &signature).is_ok())
}

/// Sign with RSASSA-PKCS1-v1_5 and SHA-512 (RS512)
pub(crate) fn sign_rs512(private_key: &[u8], message: &[u8]) -> JwtResult<Vec<u8>> {
    let signing_key = pkcs1v15::SigningKey::<Sha512>::new(private_key_from_der(private_key)?);
    let signature = signing_key
        .try_sign(message)
        .map_err(|e| JwtError::SigningError(e.to_string()))?;
    Ok(signature.to_bytes().as_ref().to_vec())
}

/// Verify an RSASSA-PKCS1-v1_5 SHA-512 (RS512) signature
pub(crate) fn verify_rs512(public_key: &[u8], signature: &[u8], message: &[u8]) -> JwtResult<bool> {
    let verifying_key = pkcs1v15::VerifyingKey::<Sha512>::new(public_key_from_der(public_key)?);
    let signature =
        pkcs1v15::Signature::try_from(signature).map_err(|_| JwtError::InvalidSignature)?;
    Ok(verifying_key.verify(message, &signature).is_ok())
}

/// Sign with RSASSA-PSS and SHA-256 (PS256)
pub(crate) fn sign_ps256(private_key: &[u8], message: &[u8]) -> JwtResult<Vec<u8>> {
    let signing_key = pss::SigningKey::<Sha256>::new(private_key_from_der(private_key)?);
    let mut rng = rand::rng();
    let signature = signing_key
        .try_sign_with_rng(&mut rng, message)
        .map_err(|e| JwtError::SigningError(e.to_string()))?;
    Ok(signature.to_bytes().as_ref().to_vec())
}

/// Verify an RSASSA-PSS SHA-256 (PS256) signature
pub(crate) fn verify_ps256(public_key: &[u8], signature: &[u8], message: &[u8]) -> JwtResult<bool> {
    let verifying_key = pss::VerifyingKey::<Sha256>::new(public_key_from_der(public_key)?);
    let signature = pss::Signature::try_from(signature).map_err(|_| JwtError::InvalidSignature)?;
    Ok(verifying_key.verify(message, &signature).is_ok())
}

/// Sign with RSASSA-PSS and SHA-384 (PS384)
pub(crate) fn sign_ps384(private_key: &[u8], message: &[u8]) -> JwtResult<Vec<u8>> {
    let signing_key = pss::SigningKey::<Sha384>::new(private_key_from_der(private_key)?);
    let mut rng = rand::rng();
    let signature = signing_key
        .try_sign_with_rng(&mut rng, message)
        .map_err(|e| JwtError::SigningError(e.to_string()))?;
    Ok(signature.to_bytes().as_ref().to_vec())
}

/// Verify an RSASSA-PSS SHA-384 (PS384) signature
pub(crate) fn verify_ps384(public_key: &[u8], signature: &[u8], message: &[u8]) -> JwtResult<bool> {
    let verifying_key = pss::VerifyingKey::<Sha384>::new(public_key_from_der(public_key)?);
    let signature = pss::Signature::try_from(signature).map_err(|_| JwtError::InvalidSignature)?;
    Ok(verifying_key.verify(message, &signature).is_ok())
}

/// Sign with RSASSA-PSS and SHA-512 (PS512)
pub(crate) fn sign_ps512(private_key: &[u8], message: &[u8]) -> JwtResult<Vec<u8>> {
    let signing_key = pss::SigningKey::<Sha512>::new(private_key_from_der(private_key)?);
    let mut rng = rand::rng();
    let signature = signing_key
        .try_sign_with_rng(&mut rng, message)
        .map_err(|e| JwtError::SigningError(e.to_string()))?;
    Ok(signature.to_bytes().as_ref().to_vec())
}

/// Verify an RSASSA-PSS SHA-512 (PS512) signature
pub(crate) fn verify_ps512(public_key: &[u8], signature: &[u8], message: &[u8]) -> JwtResult<bool> {
    let verifying_key = pss::VerifyingKey::<Sha512>::new(public_key_from_der(public_key)?);
    let signature = pss::Signature::try_from(signature).map_err(|_| JwtError::InvalidSignature)?;
    Ok(verifying_key.verify(message, &signature).is_ok())
}
