// src/lib.rs
//! rsa-facade — RSA operations over base64 transport strings
//!
//! Features:
//! - 2048-bit key pairs as base64 PKCS#8 / X.509 DER
//! - PKCS#1 v1.5 signatures over SHA-256/384/512
//! - PKCS#1 v1.5 and OAEP single-block encryption
//! - Failures collapse to `None` / `false`, causes go to `tracing`

pub mod algo;
pub mod config;
pub mod consts;
pub mod core;
pub mod error;
pub mod facade;
#[cfg(feature = "logging")]
pub mod logging;

// Re-export everything users need at the crate root
pub use algo::{EncryptionAlgorithm, SignatureAlgorithm};
pub use config::{load as load_config, Config};
pub use crate::core::{
    decrypt, encrypt, generate_key, generate_signature, verify_signature, CryptoKey,
};
pub use error::CryptoError;
pub use facade::RsaCrypto;
