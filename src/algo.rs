// src/algo.rs
//! Algorithm registry
//!
//! Callers pick algorithms from these closed enums; the mapping to the
//! backend identifier lives here and nowhere else. Adding a variant means
//! adding its arm to every `match` below in the same change.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::consts::{OAEP_SHA1_DIGEST_LEN, OAEP_SHA256_DIGEST_LEN, PKCS1_PADDING_OVERHEAD};
use crate::error::CryptoError;

/// Digest + RSASSA-PKCS1-v1_5 signature combinations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SignatureAlgorithm {
    #[default]
    #[serde(rename = "SHA256withRSA")]
    Sha256WithRsa,
    #[serde(rename = "SHA384withRSA")]
    Sha384WithRsa,
    #[serde(rename = "SHA512withRSA")]
    Sha512WithRsa,
}

impl SignatureAlgorithm {
    pub const ALL: [SignatureAlgorithm; 3] = [
        SignatureAlgorithm::Sha256WithRsa,
        SignatureAlgorithm::Sha384WithRsa,
        SignatureAlgorithm::Sha512WithRsa,
    ];

    /// Canonical digest+padding identifier
    pub fn identifier(self) -> &'static str {
        match self {
            SignatureAlgorithm::Sha256WithRsa => "SHA256withRSA",
            SignatureAlgorithm::Sha384WithRsa => "SHA384withRSA",
            SignatureAlgorithm::Sha512WithRsa => "SHA512withRSA",
        }
    }
}

impl fmt::Display for SignatureAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.identifier())
    }
}

impl FromStr for SignatureAlgorithm {
    type Err = CryptoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|algo| algo.identifier() == s)
            .ok_or_else(|| CryptoError::UnsupportedAlgorithm(s.to_owned()))
    }
}

/// RSA cipher transformations (padding modes)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum EncryptionAlgorithm {
    #[default]
    #[serde(rename = "PKCS1Padding")]
    Pkcs1Padding,
    /// OAEP with SHA-1 and MGF1-SHA-1
    #[serde(rename = "OAEPPadding")]
    OaepPadding,
    /// OAEP with SHA-256 and MGF1-SHA-256
    #[serde(rename = "OAEPWithSHA-256AndMGF1Padding")]
    OaepSha256Padding,
}

impl EncryptionAlgorithm {
    pub const ALL: [EncryptionAlgorithm; 3] = [
        EncryptionAlgorithm::Pkcs1Padding,
        EncryptionAlgorithm::OaepPadding,
        EncryptionAlgorithm::OaepSha256Padding,
    ];

    /// Canonical cipher transformation identifier
    pub fn transformation(self) -> &'static str {
        match self {
            EncryptionAlgorithm::Pkcs1Padding => "RSA/ECB/PKCS1Padding",
            EncryptionAlgorithm::OaepPadding => "RSA/ECB/OAEPPadding",
            EncryptionAlgorithm::OaepSha256Padding => "RSA/ECB/OAEPWithSHA-256AndMGF1Padding",
        }
    }

    /// Short name, as used in configuration files
    pub fn name(self) -> &'static str {
        match self {
            EncryptionAlgorithm::Pkcs1Padding => "PKCS1Padding",
            EncryptionAlgorithm::OaepPadding => "OAEPPadding",
            EncryptionAlgorithm::OaepSha256Padding => "OAEPWithSHA-256AndMGF1Padding",
        }
    }

    /// Bytes of each block consumed by padding
    pub fn overhead(self) -> usize {
        match self {
            EncryptionAlgorithm::Pkcs1Padding => PKCS1_PADDING_OVERHEAD,
            EncryptionAlgorithm::OaepPadding => 2 * OAEP_SHA1_DIGEST_LEN + 2,
            EncryptionAlgorithm::OaepSha256Padding => 2 * OAEP_SHA256_DIGEST_LEN + 2,
        }
    }

    /// Largest plaintext that fits a single block for a modulus of `key_size_bytes`
    pub fn max_plaintext_len(self, key_size_bytes: usize) -> usize {
        key_size_bytes.saturating_sub(self.overhead())
    }
}

impl fmt::Display for EncryptionAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.transformation())
    }
}

impl FromStr for EncryptionAlgorithm {
    type Err = CryptoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|algo| algo.transformation() == s || algo.name() == s)
            .ok_or_else(|| CryptoError::UnsupportedAlgorithm(s.to_owned()))
    }
}
