// src/core/rsa/sign.rs
use rand::rngs::OsRng;
use tracing::info;

use super::keys::parse_private_key;
use super::signing_input;
use crate::algo::SignatureAlgorithm;
use crate::core::codec;
use crate::core::Result;

pub(super) fn try_generate_signature(
    private_key: &str,
    message: &str,
    algorithm: SignatureAlgorithm,
) -> Result<String> {
    let key = parse_private_key(private_key)?;
    let (scheme, hashed) = signing_input(algorithm, message.as_bytes());
    let signature = key.sign_with_rng(&mut OsRng, scheme, &hashed)?;
    Ok(codec::encode(&signature))
}

/// Sign the UTF-8 bytes of `message`, returning a base64 signature.
///
/// `None` when the key does not decode or the signer rejects it; the cause
/// is logged, never returned.
pub fn generate_signature(
    private_key: &str,
    message: &str,
    algorithm: SignatureAlgorithm,
) -> Option<String> {
    try_generate_signature(private_key, message, algorithm)
        .map_err(|err| info!(%algorithm, "failed generate_signature: {err}"))
        .ok()
}
