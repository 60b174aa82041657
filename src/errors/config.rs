// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// The two capability kinds a worker can register as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WorkerKind {
    Enricher,
    Attacker,
}

impl fmt::Display for WorkerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WorkerKind::Enricher => f.write_str("enricher"),
            WorkerKind::Attacker => f.write_str("attacker"),
        }
    }
}

/// Startup-time wiring errors. All of these are fatal: the pipeline must not
/// start consuming while any of them is outstanding.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    /// Enrichers whose output no registered attacker consumes. Names are sorted.
    #[error("enrichers with no consuming attacker: {}", .names.join(", "))]
    UnconsumedEnrichers { names: Vec<String> },

    /// A different worker was registered under a name that is already taken.
    #[error("duplicate {kind} name '{name}'")]
    DuplicateWorker { kind: WorkerKind, name: String },

    /// An attacker declared an empty consumed-name set.
    #[error("attacker '{attacker}' does not consume any enricher")]
    EmptyConsumes { attacker: String },

    /// Configuration named a worker implementation that does not exist.
    #[error("unknown {kind} implementation '{name}'")]
    UnknownImplementation { kind: WorkerKind, name: String },
}

/// Errors raised while loading a configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid YAML config: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("invalid TOML config: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("configuration validation failed:\n{}", .0.join("\n"))]
    Invalid(Vec<String>),
}
