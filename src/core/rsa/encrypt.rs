// src/core/rsa/encrypt.rs
use rsa::traits::PublicKeyParts;
use tracing::info;

use super::encrypt_block;
use super::keys::parse_public_key;
use crate::algo::EncryptionAlgorithm;
use crate::core::codec;
use crate::core::Result;
use crate::error::CryptoError;

pub(super) fn try_encrypt(
    public_key: &str,
    plaintext: &str,
    algorithm: EncryptionAlgorithm,
) -> Result<String> {
    let key = parse_public_key(public_key)?;
    let data = plaintext.as_bytes();

    let max = algorithm.max_plaintext_len(key.size());
    if data.len() > max {
        return Err(CryptoError::PayloadTooLarge {
            len: data.len(),
            max,
        });
    }

    let ciphertext = encrypt_block(&key, algorithm, data)?;
    Ok(codec::encode(&ciphertext))
}

/// Encrypt the UTF-8 bytes of `plaintext` as a single RSA block.
///
/// `None` when the key does not decode or the plaintext exceeds
/// [`EncryptionAlgorithm::max_plaintext_len`] for the key.
pub fn encrypt(
    public_key: &str,
    plaintext: &str,
    algorithm: EncryptionAlgorithm,
) -> Option<String> {
    try_encrypt(public_key, plaintext, algorithm)
        .map_err(|err| info!(%algorithm, "failed encrypt: {err}"))
        .ok()
}
