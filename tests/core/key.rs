// tests/core/key.rs
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use rsa::pkcs8::{DecodePrivateKey, DecodePublicKey};
use rsa::traits::PublicKeyParts;
use rsa::{RsaPrivateKey, RsaPublicKey};
use rsa_facade::consts::{RSA_KEY_SIZE_BITS, RSA_KEY_SIZE_BYTES};
use rsa_facade::CryptoKey;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::common::{key_pair, other_key_pair};

#[test]
fn test_generated_halves_are_base64_der_of_the_same_pair() {
    let key = key_pair();

    let private_der = STANDARD.decode(key.private_key()).unwrap();
    let public_der = STANDARD.decode(key.public_key()).unwrap();

    let private = RsaPrivateKey::from_pkcs8_der(&private_der).unwrap();
    let public = RsaPublicKey::from_public_key_der(&public_der).unwrap();

    assert_eq!(RsaPublicKey::from(&private), public);
    assert_eq!(public.size(), RSA_KEY_SIZE_BYTES);
    assert_eq!(public.n().bits(), RSA_KEY_SIZE_BITS);
}

#[test]
fn test_generate_key_is_random() {
    let key1 = key_pair();
    let key2 = other_key_pair();
    assert_ne!(key1.private_key(), key2.private_key());
    assert_ne!(key1.public_key(), key2.public_key());
}

#[test]
fn test_debug_redacts_private_key() {
    let key = CryptoKey::new("c2VjcmV0", "cHVibGlj");
    let printed = format!("{key:?}");
    assert!(printed.contains("[REDACTED]"));
    assert!(printed.contains("cHVibGlj"));
    assert!(!printed.contains("c2VjcmV0"));
}

#[test]
fn test_serde_uses_camel_case_field_names() {
    let key = CryptoKey::new("cHJpdg==", "cHVi");
    let json = serde_json::to_value(&key).unwrap();
    assert_eq!(json["privateKey"], "cHJpdg==");
    assert_eq!(json["publicKey"], "cHVi");

    let back: CryptoKey = serde_json::from_value(json).unwrap();
    assert_eq!(back, key);
    let (private, public) = back.into_parts();
    assert_eq!(private.as_str(), "cHJpdg==");
    assert_eq!(public, "cHVi");
}

#[test]
fn test_crypto_key_wipes_its_private_half() {
    fn assert_zeroize_on_drop<T: ZeroizeOnDrop>() {}
    assert_zeroize_on_drop::<CryptoKey>();

    let mut key = CryptoKey::new("c2VjcmV0", "cHVibGlj");
    key.zeroize();
    assert!(key.private_key().is_empty());
    assert!(key.public_key().is_empty());
}
