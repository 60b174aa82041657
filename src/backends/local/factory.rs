// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::sync::Arc;

use super::attackers::*;
use super::enrichers::*;
use crate::errors::{ConfigurationError, WorkerKind};
use crate::traits::{Attacker, Enricher, FindingSink};

/// Factory for the in-process enrichers and attackers.
pub struct LocalWorkerFactory;

impl LocalWorkerFactory {
    /// Create an enricher by name:
    /// - "default-enricher" -> DefaultEnricher
    /// - "param-enricher" -> ParamEnricher
    pub fn create_enricher(name: &str) -> Result<Arc<dyn Enricher>, ConfigurationError> {
        match name {
            DEFAULT_ENRICHER => Ok(Arc::new(DefaultEnricher::new())),
            PARAM_ENRICHER => Ok(Arc::new(ParamEnricher::new())),
            _ => Err(ConfigurationError::UnknownImplementation {
                kind: WorkerKind::Enricher,
                name: name.to_string(),
            }),
        }
    }

    /// Create an attacker by name. Attackers report through `sink`.
    /// - "auth-surface" -> AuthSurfaceAttacker
    pub fn create_attacker(
        name: &str,
        sink: Arc<dyn FindingSink>,
    ) -> Result<Arc<dyn Attacker>, ConfigurationError> {
        match name {
            AUTH_SURFACE => Ok(Arc::new(AuthSurfaceAttacker::new(sink))),
            _ => Err(ConfigurationError::UnknownImplementation {
                kind: WorkerKind::Attacker,
                name: name.to_string(),
            }),
        }
    }

    pub fn list_available_enrichers() -> Vec<&'static str> {
        vec![DEFAULT_ENRICHER, PARAM_ENRICHER]
    }

    pub fn list_available_attackers() -> Vec<&'static str> {
        vec![AUTH_SURFACE]
    }

    pub fn is_implementation_available(kind: WorkerKind, name: &str) -> bool {
        match kind {
            WorkerKind::Enricher => Self::list_available_enrichers().contains(&name),
            WorkerKind::Attacker => Self::list_available_attackers().contains(&name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backends::local::MemoryFindingSink;

    #[test]
    fn test_every_listed_enricher_can_be_created() {
        for name in LocalWorkerFactory::list_available_enrichers() {
            let enricher = LocalWorkerFactory::create_enricher(name)
                .unwrap_or_else(|e| panic!("Failed to create enricher '{}': {}", name, e));
            assert_eq!(enricher.name(), name);
        }
    }

    #[test]
    fn test_every_listed_attacker_can_be_created() {
        let sink: Arc<dyn FindingSink> = Arc::new(MemoryFindingSink::new());
        for name in LocalWorkerFactory::list_available_attackers() {
            let attacker = LocalWorkerFactory::create_attacker(name, Arc::clone(&sink))
                .unwrap_or_else(|e| panic!("Failed to create attacker '{}': {}", name, e));
            assert_eq!(attacker.name(), name);
            assert!(!attacker.consumes().is_empty());
        }
    }

    #[test]
    fn test_unknown_names_are_rejected() {
        let sink: Arc<dyn FindingSink> = Arc::new(MemoryFindingSink::new());

        let enricher_err = LocalWorkerFactory::create_enricher("graphql-enricher").err();
        let attacker_err = LocalWorkerFactory::create_attacker("sqli", sink).err();

        assert_eq!(
            enricher_err,
            Some(ConfigurationError::UnknownImplementation {
                kind: WorkerKind::Enricher,
                name: "graphql-enricher".to_string(),
            })
        );
        assert_eq!(
            attacker_err,
            Some(ConfigurationError::UnknownImplementation {
                kind: WorkerKind::Attacker,
                name: "sqli".to_string(),
            })
        );
    }

    #[test]
    fn test_is_implementation_available() {
        assert!(LocalWorkerFactory::is_implementation_available(
            WorkerKind::Enricher,
            "param-enricher"
        ));
        assert!(!LocalWorkerFactory::is_implementation_available(
            WorkerKind::Attacker,
            "param-enricher"
        ));
    }
}
