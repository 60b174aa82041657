// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::sync::Arc;

use crate::backends::local::LocalWorkerFactory;
use crate::config::Config;
use crate::engine::PipelineSettings;
use crate::errors::ConfigurationError;
use crate::registry::WorkerRegistry;
use crate::traits::FindingSink;

/// Pipeline runtime builder - turns a configuration into a populated registry
/// and driver settings.
///
/// The registry is returned unchecked. [`crate::engine::Pipeline::start`] runs
/// the completeness check before any driver starts.
///
/// # Examples
///
/// ```
/// use attack_bus::backends::local::MemoryFindingSink;
/// use attack_bus::config::{Config, RuntimeBuilder};
/// use std::sync::Arc;
///
/// let mut config = Config::default();
/// config.pipeline.attackers = vec!["auth-surface".to_string()];
///
/// let (registry, settings) =
///     RuntimeBuilder::from_config(&config, Arc::new(MemoryFindingSink::new())).unwrap();
///
/// assert_eq!(registry.attacker_names(), vec!["auth-surface"]);
/// assert_eq!(settings.default_enricher, "default-enricher");
/// ```
pub struct RuntimeBuilder;

impl RuntimeBuilder {
    /// Build every configured worker and register it, enrichers first and
    /// then attackers in configuration order. Attackers report to `sink`.
    pub fn from_config(
        cfg: &Config,
        sink: Arc<dyn FindingSink>,
    ) -> Result<(WorkerRegistry, PipelineSettings), ConfigurationError> {
        let mut registry = WorkerRegistry::new();

        for name in &cfg.pipeline.enrichers {
            registry.register_enricher(LocalWorkerFactory::create_enricher(name)?)?;
        }
        for name in &cfg.pipeline.attackers {
            registry.register_attacker(LocalWorkerFactory::create_attacker(
                name,
                Arc::clone(&sink),
            )?)?;
        }

        let settings = PipelineSettings {
            wait_timeout: cfg.bus.wait_timeout(),
            default_enricher: cfg.pipeline.default_enricher.clone(),
        };
        Ok((registry, settings))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backends::local::MemoryFindingSink;
    use crate::errors::WorkerKind;
    use std::time::Duration;

    fn sink() -> Arc<dyn FindingSink> {
        Arc::new(MemoryFindingSink::new())
    }

    #[test]
    fn test_builds_registry_and_settings() {
        let mut cfg = Config::default();
        cfg.bus.wait_timeout_ms = 40;
        cfg.pipeline.enrichers = vec!["default-enricher".into(), "param-enricher".into()];
        cfg.pipeline.attackers = vec!["auth-surface".into()];

        let (registry, settings) = RuntimeBuilder::from_config(&cfg, sink()).unwrap();

        assert_eq!(registry.enricher_names(), vec!["default-enricher", "param-enricher"]);
        assert_eq!(registry.attacker_names(), vec!["auth-surface"]);
        assert!(registry.sanity_check().is_ok());
        assert_eq!(settings.wait_timeout, Duration::from_millis(40));
        assert_eq!(settings.default_enricher, "default-enricher");
    }

    #[test]
    fn test_unknown_implementation_is_reported() {
        let mut cfg = Config::default();
        cfg.pipeline.attackers = vec!["sqli".into()];

        let err = RuntimeBuilder::from_config(&cfg, sink()).unwrap_err();

        assert_eq!(
            err,
            ConfigurationError::UnknownImplementation {
                kind: WorkerKind::Attacker,
                name: "sqli".to_string(),
            }
        );
    }

    #[test]
    fn test_duplicate_listing_is_a_duplicate_worker() {
        let mut cfg = Config::default();
        cfg.pipeline.enrichers = vec!["param-enricher".into(), "param-enricher".into()];

        let err = RuntimeBuilder::from_config(&cfg, sink()).unwrap_err();

        assert_eq!(
            err,
            ConfigurationError::DuplicateWorker {
                kind: WorkerKind::Enricher,
                name: "param-enricher".to_string(),
            }
        );
    }

    #[test]
    fn test_unconsumed_enricher_builds_but_fails_sanity_check() {
        let cfg = Config::default();

        let (registry, _) = RuntimeBuilder::from_config(&cfg, sink()).unwrap();

        assert_eq!(
            registry.sanity_check(),
            Err(ConfigurationError::UnconsumedEnrichers {
                names: vec!["default-enricher".to_string()],
            })
        );
    }
}
