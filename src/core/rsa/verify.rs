// src/core/rsa/verify.rs
use tracing::info;

use super::keys::parse_public_key;
use super::signing_input;
use crate::algo::SignatureAlgorithm;
use crate::core::codec;
use crate::core::Result;

pub(super) fn try_verify_signature(
    public_key: &str,
    signature: &str,
    message: &str,
    algorithm: SignatureAlgorithm,
) -> Result<()> {
    let key = parse_public_key(public_key)?;
    let signature = codec::decode(signature)?;
    let (scheme, hashed) = signing_input(algorithm, message.as_bytes());
    key.verify(scheme, &hashed, &signature)?;
    Ok(())
}

/// `true` only if `signature` is a valid signature of `message` under
/// `public_key` with `algorithm`.
///
/// Malformed keys, malformed signatures and genuine mismatches all come back
/// as `false`; the caller cannot tell them apart.
pub fn verify_signature(
    public_key: &str,
    signature: &str,
    message: &str,
    algorithm: SignatureAlgorithm,
) -> bool {
    match try_verify_signature(public_key, signature, message, algorithm) {
        Ok(()) => true,
        Err(err) => {
            info!(%algorithm, "failed verify_signature: {err}");
            false
        }
    }
}
