// src/core/codec.rs
//! Base64 transport encoding
//!
//! Every key, signature and ciphertext crosses the public boundary as a
//! standard, padded base64 string.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use super::Result;

/// Raw bytes → base64
#[inline]
pub fn encode(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

/// Base64 → raw bytes, `CryptoError::Decode` on malformed input
#[inline]
pub fn decode(encoded: &str) -> Result<Vec<u8>> {
    Ok(STANDARD.decode(encoded)?)
}
