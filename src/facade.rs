// src/facade.rs
//! Configured entry point
//!
//! [`RsaCrypto`] pins a signature and an encryption variant so callers that
//! always use the same pair do not repeat them. It holds nothing else and
//! every method is a direct call into [`crate::core::rsa`].

use crate::algo::{EncryptionAlgorithm, SignatureAlgorithm};
use crate::config::Config;
use crate::core::{
    decrypt, encrypt, generate_key, generate_signature, verify_signature, CryptoKey,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RsaCrypto {
    signature: SignatureAlgorithm,
    encryption: EncryptionAlgorithm,
}

impl RsaCrypto {
    pub fn new(signature: SignatureAlgorithm, encryption: EncryptionAlgorithm) -> Self {
        Self {
            signature,
            encryption,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.algorithms.signature, config.algorithms.encryption)
    }

    pub fn signature_algorithm(&self) -> SignatureAlgorithm {
        self.signature
    }

    pub fn encryption_algorithm(&self) -> EncryptionAlgorithm {
        self.encryption
    }

    pub fn generate_key(&self) -> CryptoKey {
        generate_key()
    }

    pub fn sign(&self, private_key: &str, message: &str) -> Option<String> {
        generate_signature(private_key, message, self.signature)
    }

    pub fn verify(&self, public_key: &str, signature: &str, message: &str) -> bool {
        verify_signature(public_key, signature, message, self.signature)
    }

    pub fn encrypt(&self, public_key: &str, plaintext: &str) -> Option<String> {
        encrypt(public_key, plaintext, self.encryption)
    }

    pub fn decrypt(&self, private_key: &str, ciphertext: &str) -> Option<String> {
        decrypt(private_key, ciphertext, self.encryption)
    }
}
