// src/core/mod.rs
//! Pure cryptographic operations — no I/O, no shared state
//!
//! Everything here works on in-memory strings and buffers and is safe to
//! call from any number of threads at once.
pub mod codec;
pub mod key;
pub mod rsa;

pub use key::CryptoKey;
pub use self::rsa::{decrypt, encrypt, generate_key, generate_signature, verify_signature};

pub type Result<T> = std::result::Result<T, crate::error::CryptoError>;
