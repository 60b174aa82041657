// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use super::dispatch::run_dispatch_driver;
use super::enrichment::run_enrichment_driver;
use super::ingest::Ingestor;
use crate::bus::EventBus;
use crate::config::consts::{DEFAULT_ENRICHER_NAME, DEFAULT_WAIT_TIMEOUT_MS};
use crate::errors::ConfigurationError;
use crate::registry::WorkerRegistry;

/// Knobs shared by both drivers and the ingestion boundary.
#[derive(Debug, Clone)]
pub struct PipelineSettings {
    /// Bounded wait on an empty channel before re-checking cancellation.
    pub wait_timeout: Duration,
    /// Enricher used when a submission does not name one.
    pub default_enricher: String,
}

impl Default for PipelineSettings {
    fn default() -> Self {
        Self {
            wait_timeout: Duration::from_millis(DEFAULT_WAIT_TIMEOUT_MS),
            default_enricher: DEFAULT_ENRICHER_NAME.to_string(),
        }
    }
}

/// What one driver loop did before it was cancelled. An item counts as
/// failed if it was dropped, or if any attacker assigned to it failed.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DriverReport {
    pub processed: u64,
    pub failed: u64,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PipelineReport {
    pub enrichment: DriverReport,
    pub dispatch: DriverReport,
}

/// A running pipeline: both driver loops plus the ingestion boundary that
/// feeds them.
///
/// ```text
/// Ingestor ──▶ raw ──▶ enrichment driver ──▶ enriched ──▶ dispatch driver ──▶ attackers
/// ```
pub struct Pipeline {
    bus: EventBus,
    ingestor: Ingestor,
    cancel: CancellationToken,
    enrichment: JoinHandle<DriverReport>,
    dispatch: JoinHandle<DriverReport>,
}

impl Pipeline {
    /// Check the registry's wiring and, only if it is complete, spawn both
    /// drivers on the current tokio runtime.
    ///
    /// The registry is moved in and frozen behind an `Arc`; nothing can
    /// register workers once the drivers are running.
    pub fn start(
        registry: WorkerRegistry,
        bus: EventBus,
        settings: PipelineSettings,
    ) -> Result<Self, ConfigurationError> {
        registry.sanity_check()?;

        let registry = Arc::new(registry);
        let cancel = CancellationToken::new();

        let enrichment = tokio::spawn(run_enrichment_driver(
            Arc::clone(&registry),
            bus.clone(),
            settings.clone(),
            cancel.child_token(),
        ));
        let dispatch = tokio::spawn(run_dispatch_driver(
            registry,
            bus.clone(),
            settings.clone(),
            cancel.child_token(),
        ));

        Ok(Self {
            ingestor: Ingestor::new(bus.clone(), settings.default_enricher),
            bus,
            cancel,
            enrichment,
            dispatch,
        })
    }

    pub fn ingestor(&self) -> &Ingestor {
        &self.ingestor
    }

    pub fn bus(&self) -> &EventBus {
        &self.bus
    }

    /// Stop both drivers and wait for them to exit.
    ///
    /// A driver finishes the item it is working on first. Items still queued
    /// on either channel are discarded.
    pub async fn shutdown(self) -> PipelineReport {
        self.cancel.cancel();
        PipelineReport {
            enrichment: self.enrichment.await.unwrap_or_default(),
            dispatch: self.dispatch.await.unwrap_or_default(),
        }
    }
}
