//! Compact-serialization JSON Web Tokens: create, parse, validate.
//!
//! This crate covers the signed-token lifecycle with:
//! - The twelve JWS algorithms across the HMAC, RSA PKCS#1 v1.5, RSA-PSS,
//!   and ECDSA families
//! - Pure structural parsing with strict reserved-claim typing
//! - Ordered validation gates: algorithm identity, then time window, then
//!   signature
//! - True async signing with channels using fast crypto operations
//!
//! Tokens are built with [`create`], inspected without cryptography with
//! [`parse`], and checked against an expected algorithm and key with
//! [`validate`]. A token's only durable form is its compact string.

mod algorithms;
mod error;
mod parse;
mod sign;
mod types;
mod validate;

pub use algorithms::{JwtAlgorithm, JwtAlgorithmFamily};
pub use error::{JwtError, JwtResult};
pub use parse::parse;
pub use sign::{create, SignOptions};
pub use types::{JwtHeader, ParsedJwt};
pub use validate::{validate, validate_parsed};
