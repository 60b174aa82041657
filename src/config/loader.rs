// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::config::consts::{DEFAULT_ENRICHER_NAME, DEFAULT_LOG_LEVEL, DEFAULT_WAIT_TIMEOUT_MS};
use crate::errors::ConfigError;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Main configuration structure for the attack pipeline.
///
/// Every section is optional and falls back to the values in
/// [`crate::config::consts`]. Loaded from YAML, or from TOML when the file
/// extension is `.toml`.
///
/// # Example
/// ```yaml
/// bus:
///   wait_timeout_ms: 250
/// pipeline:
///   default_enricher: default-enricher
///   enrichers: [default-enricher, param-enricher]
///   attackers: [auth-surface]
/// logging:
///   level: info
/// ```
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub bus: BusConfig,
    #[serde(default)]
    pub pipeline: PipelineConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Event bus tuning.
///
/// # Fields
/// * `wait_timeout_ms` - How long a driver waits on an empty channel before it
///   re-checks for cancellation. Must be non-zero.
#[derive(Debug, Deserialize)]
pub struct BusConfig {
    #[serde(default = "default_wait_timeout_ms")]
    pub wait_timeout_ms: u64,
}

impl Default for BusConfig {
    fn default() -> Self {
        Self {
            wait_timeout_ms: DEFAULT_WAIT_TIMEOUT_MS,
        }
    }
}

impl BusConfig {
    pub fn wait_timeout(&self) -> Duration {
        Duration::from_millis(self.wait_timeout_ms)
    }
}

/// Which workers to build and how to route unlabelled submissions.
///
/// # Fields
/// * `default_enricher` - Enricher used when a submission names none; must be
///   listed in `enrichers`
/// * `enrichers` - Local enricher implementations to register, by name
/// * `attackers` - Local attacker implementations to register, by name
#[derive(Debug, Deserialize)]
pub struct PipelineConfig {
    #[serde(default = "default_enricher_name")]
    pub default_enricher: String,
    #[serde(default = "default_enrichers")]
    pub enrichers: Vec<String>,
    #[serde(default)]
    pub attackers: Vec<String>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            default_enricher: default_enricher_name(),
            enrichers: default_enrichers(),
            attackers: Vec::new(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_wait_timeout_ms() -> u64 {
    DEFAULT_WAIT_TIMEOUT_MS
}

fn default_enricher_name() -> String {
    DEFAULT_ENRICHER_NAME.to_string()
}

fn default_enrichers() -> Vec<String> {
    vec![DEFAULT_ENRICHER_NAME.to_string()]
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

/// Load a config from a YAML or TOML file, chosen by extension.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let is_toml = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));
    let cfg = if is_toml {
        toml::from_str(&content)?
    } else {
        serde_yaml::from_str(&content)?
    };
    Ok(cfg)
}

/// Load a config and reject it if any field is out of range or names a
/// worker that does not exist. Every problem is reported, not just the first.
pub fn load_and_validate_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let cfg = load_config(path)?;
    crate::config::validate_config(&cfg).map_err(ConfigError::Invalid)?;
    Ok(cfg)
}
