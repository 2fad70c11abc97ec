// src/core/rsa/keys.rs
//! Base64 DER ⇄ rsa key structures

use rsa::pkcs8::{DecodePrivateKey, DecodePublicKey, EncodePrivateKey, EncodePublicKey};
use rsa::{RsaPrivateKey, RsaPublicKey};
use zeroize::Zeroizing;

use crate::core::codec;
use crate::core::Result;

/// Base64 PKCS#8 DER → private key. The decoded DER is wiped on drop.
pub(super) fn parse_private_key(encoded: &str) -> Result<RsaPrivateKey> {
    let der = Zeroizing::new(codec::decode(encoded)?);
    Ok(RsaPrivateKey::from_pkcs8_der(&der)?)
}

/// Base64 SubjectPublicKeyInfo DER → public key
pub(super) fn parse_public_key(encoded: &str) -> Result<RsaPublicKey> {
    let der = codec::decode(encoded)?;
    Ok(RsaPublicKey::from_public_key_der(&der)?)
}

pub(super) fn encode_private_key(key: &RsaPrivateKey) -> Result<String> {
    let der = key.to_pkcs8_der()?;
    Ok(codec::encode(der.as_bytes()))
}

pub(super) fn encode_public_key(key: &RsaPublicKey) -> Result<String> {
    let der = key.to_public_key_der()?;
    Ok(codec::encode(der.as_bytes()))
}
