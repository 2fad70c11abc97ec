// tests/common.rs
//! Shared test utilities — logging setup and a shared key pair
#![allow(dead_code)]

use std::sync::OnceLock;

use rsa_facade::{generate_key, CryptoKey};

#[cfg(feature = "logging")]
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize test-friendly logging
/// Call once at the start of any test that needs logs
pub fn setup() {
    #[cfg(feature = "logging")]
    tracing_subscriber::registry()
        .with(fmt::layer().with_test_writer())
        .with(EnvFilter::from_default_env()) // respects RUST_LOG=
        .try_init()
        .ok(); // idempotent — safe to call multiple times

    #[cfg(not(feature = "logging"))]
    { /* no-op */ }
}

/// One 2048-bit pair per test binary; generation is the slow part
pub fn key_pair() -> &'static CryptoKey {
    static KEY: OnceLock<CryptoKey> = OnceLock::new();
    KEY.get_or_init(generate_key)
}

/// A second, independent pair for cross-key tests
pub fn other_key_pair() -> &'static CryptoKey {
    static KEY: OnceLock<CryptoKey> = OnceLock::new();
    KEY.get_or_init(generate_key)
}

/// Flip one bit of the byte at `index` inside a base64 string's payload
pub fn flip_byte(encoded: &str, index: usize) -> String {
    use base64::engine::general_purpose::STANDARD;
    use base64::Engine;

    let mut bytes = STANDARD.decode(encoded).unwrap();
    assert!(
        index < bytes.len(),
        "flip_byte: index {index} out of range for {} decoded bytes",
        bytes.len()
    );
    bytes[index] ^= 0x01;
    STANDARD.encode(bytes)
}

#[test]
#[should_panic(expected = "out of range")]
fn flip_byte_rejects_index_past_payload() {
    flip_byte("AAAA", 3);
}
