// src/config/defaults.rs
use crate::algo::{EncryptionAlgorithm, SignatureAlgorithm};
use crate::config::app::{Algorithms, Logging};
use crate::consts::DEFAULT_LOG_FILTER;

impl Default for Algorithms {
    fn default() -> Self {
        Self {
            signature: SignatureAlgorithm::default(),
            encryption: EncryptionAlgorithm::default(),
        }
    }
}

impl Default for Logging {
    fn default() -> Self {
        Self {
            filter: DEFAULT_LOG_FILTER.into(),
        }
    }
}
