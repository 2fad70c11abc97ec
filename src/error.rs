// src/error.rs
//! Public error type for the entire crate
//!
//! Only the `Result` forms inside `core` ever hand this out. The public
//! operations collapse it into `None` / `false` after logging.

use std::str::Utf8Error;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CryptoError {
    #[error("Base64 decode failed: {0}")]
    Decode(#[from] base64::DecodeError),

    #[error("Invalid key encoding: {0}")]
    InvalidKey(String),

    #[error("Unsupported algorithm: {0}")]
    UnsupportedAlgorithm(String),

    #[error("Payload of {len} bytes exceeds the {max}-byte limit")]
    PayloadTooLarge { len: usize, max: usize },

    #[error("Crypto operation failed: {0}")]
    Operation(#[from] rsa::Error),

    #[error("Decrypted payload is not UTF-8: {0}")]
    InvalidUtf8(#[from] Utf8Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<rsa::pkcs8::Error> for CryptoError {
    fn from(err: rsa::pkcs8::Error) -> Self {
        CryptoError::InvalidKey(err.to_string())
    }
}

impl From<rsa::pkcs8::spki::Error> for CryptoError {
    fn from(err: rsa::pkcs8::spki::Error) -> Self {
        CryptoError::InvalidKey(err.to_string())
    }
}
