// src/config/app.rs
use std::path::Path;
use std::sync::OnceLock;

use serde::Deserialize;
use tracing::warn;

use crate::algo::{EncryptionAlgorithm, SignatureAlgorithm};
use crate::consts::{CONFIG_PATH_ENV, DEFAULT_CONFIG_PATH};
use crate::error::CryptoError;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub algorithms: Algorithms,
    pub logging: Logging,
}

/// Variants used by [`RsaCrypto`](crate::RsaCrypto) when built from config
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Algorithms {
    pub signature: SignatureAlgorithm,
    pub encryption: EncryptionAlgorithm,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Logging {
    /// `tracing_subscriber::EnvFilter` directive, overridden by `RUST_LOG`
    pub filter: String,
}

impl Config {
    pub fn from_toml_str(content: &str) -> Result<Self, CryptoError> {
        toml::from_str(content).map_err(|e| CryptoError::Config(e.to_string()))
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CryptoError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| CryptoError::Config(format!("{}: {e}", path.display())))?;
        Self::from_toml_str(&content)
    }
}

static CONFIG: OnceLock<Config> = OnceLock::new();

/// Load config once — falls back to defaults if missing or invalid
pub fn load() -> &'static Config {
    CONFIG.get_or_init(|| {
        let config_path =
            std::env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());

        if !Path::new(&config_path).exists() {
            warn!("{config_path} not found — using built-in defaults");
            return Config::default();
        }

        Config::from_path(&config_path).unwrap_or_else(|err| {
            warn!("{err} — using built-in defaults");
            Config::default()
        })
    })
}
