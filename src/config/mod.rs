// src/config/mod.rs
//! Configuration system for rsa-facade
//!
//! Central, lazy-loaded global config from a TOML file whose path comes from
//! the environment.

pub use app::{load, Algorithms, Config, Logging};

mod app;
mod defaults;
