//! Shared key fixtures for the integration tests.

#![allow(dead_code)]

use hex_literal::hex;
use signet_jwt::{JwtAlgorithm, JwtAlgorithmFamily};

/// 64-byte secret, long enough for every HS identifier.
pub const HMAC_SECRET: &[u8] = b"0123456789abcdef0123456789abcdef0123456789abcdef0123456789abcdef";

pub const P256_SCALAR: [u8; 32] =
    hex!("0102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f20");
pub const P384_SCALAR: [u8; 48] = hex!(
    "0102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f20"
    "2122232425262728292a2b2c2d2e2f30"
);
pub const P521_SCALAR: [u8; 66] = hex!(
    "000102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f"
    "202122232425262728292a2b2c2d2e2f303132333435363738393a3b3c3d3e3f"
    "4041"
);

/// Generate a 2048-bit RSA keypair as (PKCS#8 DER private, SPKI DER public).
pub fn rsa_keypair() -> (Vec<u8>, Vec<u8>) {
    use rsa::pkcs8::{EncodePrivateKey, EncodePublicKey};
    use rsa::{RsaPrivateKey, RsaPublicKey};

    let mut rng = rand::rng();
    let private = RsaPrivateKey::new(&mut rng, 2048).expect("generate RSA key");
    let public = RsaPublicKey::from(&private);
    (
        private
            .to_pkcs8_der()
            .expect("encode RSA private key")
            .as_bytes()
            .to_vec(),
        public
            .to_public_key_der()
            .expect("encode RSA public key")
            .into_vec(),
    )
}

/// Fixed ECDSA keypair for `alg` as (raw scalar, SEC1 uncompressed point).
pub fn ec_keypair(alg: JwtAlgorithm) -> (Vec<u8>, Vec<u8>) {
    match alg {
        JwtAlgorithm::ES256 => {
            let key = p256::ecdsa::SigningKey::from_slice(&P256_SCALAR).expect("P-256 scalar");
            let public = key.verifying_key().to_encoded_point(false);
            (P256_SCALAR.to_vec(), public.as_bytes().to_vec())
        }
        JwtAlgorithm::ES384 => {
            let key = p384::ecdsa::SigningKey::from_slice(&P384_SCALAR).expect("P-384 scalar");
            let public = key.verifying_key().to_encoded_point(false);
            (P384_SCALAR.to_vec(), public.as_bytes().to_vec())
        }
        JwtAlgorithm::ES512 => {
            let key = p521::ecdsa::SigningKey::from_slice(&P521_SCALAR).expect("P-521 scalar");
            let public = key.verifying_key().to_sec1_point(false);
            (P521_SCALAR.to_vec(), public.as_bytes().to_vec())
        }
        other => panic!("{other} is not an ECDSA identifier"),
    }
}

/// Signing and verification keys for `alg`, reusing `rsa` for the RSA
/// families so the expensive generation happens once per test.
pub fn keypair_for(alg: JwtAlgorithm, rsa: &(Vec<u8>, Vec<u8>)) -> (Vec<u8>, Vec<u8>) {
    match alg.family() {
        JwtAlgorithmFamily::Hmac => (HMAC_SECRET.to_vec(), HMAC_SECRET.to_vec()),
        JwtAlgorithmFamily::RsaPkcs1 | JwtAlgorithmFamily::RsaPss => rsa.clone(),
        JwtAlgorithmFamily::Ecdsa => ec_keypair(alg),
    }
}
