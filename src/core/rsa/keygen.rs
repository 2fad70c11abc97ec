// src/core/rsa/keygen.rs
use rand::rngs::OsRng;
use rsa::{RsaPrivateKey, RsaPublicKey};
use tracing::debug;

use super::keys::{encode_private_key, encode_public_key};
use crate::consts::RSA_KEY_SIZE_BITS;
use crate::core::key::CryptoKey;
use crate::core::Result;

pub(super) fn try_generate_key() -> Result<CryptoKey> {
    debug!("Generating RSA-{RSA_KEY_SIZE_BITS} key pair");

    let private_key = RsaPrivateKey::new(&mut OsRng, RSA_KEY_SIZE_BITS)?;
    let public_key = RsaPublicKey::from(&private_key);

    Ok(CryptoKey::new(
        encode_private_key(&private_key)?,
        encode_public_key(&public_key)?,
    ))
}

/// Generate a fresh 2048-bit key pair from the OS random source.
///
/// # Panics
///
/// Only if the OS RNG or DER encoder fails, which is treated as fatal.
pub fn generate_key() -> CryptoKey {
    try_generate_key().expect("RSA key pair generation failed")
}
