// src/consts.rs
//! Shared constants — key parameters and defaults

/// Modulus size of every generated key pair
pub const RSA_KEY_SIZE_BITS: usize = 2048;

/// Same size in bytes, i.e. the length of every signature and ciphertext
pub const RSA_KEY_SIZE_BYTES: usize = RSA_KEY_SIZE_BITS / 8;

/// PKCS#1 v1.5 encryption padding: 00 02 PS(>= 8 bytes) 00
pub const PKCS1_PADDING_OVERHEAD: usize = 11;

/// SHA-1 output length, the OAEPPadding label hash and MGF1 digest
pub const OAEP_SHA1_DIGEST_LEN: usize = 20;

/// SHA-256 output length, the OAEPWithSHA-256AndMGF1Padding digest
pub const OAEP_SHA256_DIGEST_LEN: usize = 32;

/// Environment variable naming the configuration file
pub const CONFIG_PATH_ENV: &str = "RSA_FACADE_CONFIG";

/// Configuration file used when the environment variable is unset
pub const DEFAULT_CONFIG_PATH: &str = "rsa-facade.toml";

/// Default tracing filter for the optional subscriber
pub const DEFAULT_LOG_FILTER: &str = "info";
