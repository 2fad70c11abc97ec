// src/core/key.rs
//! Key-pair value object

use std::fmt;

use serde::{Deserialize, Serialize};
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

/// A base64 PKCS#8 private key and its base64 X.509 (SPKI) public key.
///
/// Produced once by [`generate_key`](crate::core::rsa::generate_key) and
/// handed to the caller wholesale; persisting it is the caller's job.
///
/// Both strings are zeroized when the pair is dropped.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Zeroize, ZeroizeOnDrop)]
#[serde(rename_all = "camelCase")]
pub struct CryptoKey {
    private_key: String,
    public_key: String,
}

impl CryptoKey {
    /// Rebuild a pair the caller stored earlier. No validation happens here;
    /// a bad encoding surfaces as a failed operation later on.
    pub fn new(private_key: impl Into<String>, public_key: impl Into<String>) -> Self {
        Self {
            private_key: private_key.into(),
            public_key: public_key.into(),
        }
    }

    /// Base64 PKCS#8 DER private key
    pub fn private_key(&self) -> &str {
        &self.private_key
    }

    /// Base64 SubjectPublicKeyInfo DER public key
    pub fn public_key(&self) -> &str {
        &self.public_key
    }

    /// Split into `(private, public)`; the private half stays wiped-on-drop
    pub fn into_parts(mut self) -> (Zeroizing<String>, String) {
        (
            Zeroizing::new(std::mem::take(&mut self.private_key)),
            std::mem::take(&mut self.public_key),
        )
    }
}

impl fmt::Debug for CryptoKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CryptoKey")
            .field("private_key", &"[REDACTED]")
            .field("public_key", &self.public_key)
            .finish()
    }
}
