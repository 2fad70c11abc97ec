// src/core/rsa/decrypt.rs
use tracing::info;

use super::decrypt_block;
use super::keys::parse_private_key;
use crate::algo::EncryptionAlgorithm;
use crate::core::codec;
use crate::core::Result;

pub(super) fn try_decrypt(
    private_key: &str,
    ciphertext: &str,
    algorithm: EncryptionAlgorithm,
) -> Result<String> {
    let key = parse_private_key(private_key)?;
    let ciphertext = codec::decode(ciphertext)?;

    let plaintext = decrypt_block(&key, algorithm, &ciphertext)?;
    Ok(std::str::from_utf8(&plaintext)?.to_owned())
}

/// Decrypt a base64 ciphertext produced by [`encrypt`](super::encrypt).
///
/// Every failure, padding errors included, yields the same `None`.
pub fn decrypt(
    private_key: &str,
    ciphertext: &str,
    algorithm: EncryptionAlgorithm,
) -> Option<String> {
    try_decrypt(private_key, ciphertext, algorithm)
        .map_err(|err| info!(%algorithm, "failed decrypt: {err}"))
        .ok()
}
