// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for driver lifecycle and per-item outcomes.
//!
//! Failure messages always carry the item tag and the worker name so a dropped
//! item can be reproduced from the log line alone.

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use std::time::Duration;
use tracing::Span;

/// A driver loop started consuming.
///
/// # Log Level
/// `info!` - Important operational event
///
/// # Example
/// ```
/// use attack_bus::observability::messages::pipeline::DriverStarted;
/// use std::time::Duration;
///
/// let msg = DriverStarted {
///     driver: "enrichment",
///     wait_timeout: Duration::from_millis(250),
/// };
///
/// tracing::info!("{}", msg);
/// ```
pub struct DriverStarted<'a> {
    pub driver: &'a str,
    pub wait_timeout: Duration,
}

impl Display for DriverStarted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Starting {} driver (wait_timeout={:?})",
            self.driver, self.wait_timeout
        )
    }
}

impl StructuredLog for DriverStarted<'_> {
    fn log(&self) {
        tracing::info!(
            driver = self.driver,
            wait_timeout_ms = self.wait_timeout.as_millis() as u64,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "driver",
            span_name = name,
            driver = self.driver,
        )
    }
}

/// A driver loop observed cancellation and exited.
///
/// # Log Level
/// `info!` - Important operational event
pub struct DriverStopped<'a> {
    pub driver: &'a str,
    pub processed: u64,
    pub failed: u64,
}

impl Display for DriverStopped<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Stopped {} driver: {} items processed, {} failed",
            self.driver, self.processed, self.failed
        )
    }
}

impl StructuredLog for DriverStopped<'_> {
    fn log(&self) {
        tracing::info!(
            driver = self.driver,
            processed = self.processed,
            failed = self.failed,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "driver_stopped",
            span_name = name,
            driver = self.driver,
            processed = self.processed,
            failed = self.failed,
        )
    }
}

/// An enricher produced an envelope.
///
/// # Log Level
/// `debug!` - Per-item event
pub struct ItemEnriched<'a> {
    pub enricher: &'a str,
    pub locator_count: usize,
    pub correlation_id: Option<&'a str>,
    pub duration: Duration,
}

impl Display for ItemEnriched<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Enricher '{}' extracted {} locators in {:?}",
            self.enricher, self.locator_count, self.duration
        )
    }
}

impl StructuredLog for ItemEnriched<'_> {
    fn log(&self) {
        tracing::debug!(
            enricher = self.enricher,
            locator_count = self.locator_count,
            correlation_id = self.correlation_id,
            duration_ms = self.duration.as_millis() as u64,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "item_enriched",
            span_name = name,
            enricher = self.enricher,
            correlation_id = self.correlation_id,
        )
    }
}

/// An enriched item is about to fan out to its attackers.
///
/// # Log Level
/// `debug!` - Per-item event
pub struct ItemDispatched<'a> {
    pub tag: &'a str,
    pub attacker_count: usize,
    pub correlation_id: Option<&'a str>,
}

impl Display for ItemDispatched<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Dispatching item tagged '{}' to {} attackers",
            self.tag, self.attacker_count
        )
    }
}

impl StructuredLog for ItemDispatched<'_> {
    fn log(&self) {
        tracing::debug!(
            tag = self.tag,
            attacker_count = self.attacker_count,
            correlation_id = self.correlation_id,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "dispatch",
            span_name = name,
            tag = self.tag,
            correlation_id = self.correlation_id,
        )
    }
}

/// An item was dropped before any worker could finish it.
///
/// # Log Level
/// `error!` - Failure requiring attention
///
/// # Example
/// ```
/// use attack_bus::observability::messages::pipeline::ItemDropped;
///
/// let error = std::io::Error::new(std::io::ErrorKind::Other, "no such enricher");
/// let msg = ItemDropped {
///     driver: "enrichment",
///     tag: "missing-enricher",
///     correlation_id: None,
///     error: &error,
/// };
///
/// tracing::error!("{}", msg);
/// ```
pub struct ItemDropped<'a> {
    pub driver: &'a str,
    pub tag: &'a str,
    pub correlation_id: Option<&'a str>,
    pub error: &'a dyn std::error::Error,
}

impl Display for ItemDropped<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Dropped item tagged '{}' in {} driver: {}",
            self.tag, self.driver, self.error
        )
    }
}

impl StructuredLog for ItemDropped<'_> {
    fn log(&self) {
        tracing::error!(
            driver = self.driver,
            tag = self.tag,
            correlation_id = self.correlation_id,
            error = %self.error,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::error_span!(
            "item_dropped",
            span_name = name,
            driver = self.driver,
            tag = self.tag,
            error = %self.error,
        )
    }
}

/// An attacker finished an item.
///
/// # Log Level
/// `debug!` - Per-worker event
pub struct AttackerCompleted<'a> {
    pub attacker: &'a str,
    pub tag: &'a str,
    pub duration: Duration,
}

impl Display for AttackerCompleted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Attacker '{}' ingested item tagged '{}' in {:?}",
            self.attacker, self.tag, self.duration
        )
    }
}

impl StructuredLog for AttackerCompleted<'_> {
    fn log(&self) {
        tracing::debug!(
            attacker = self.attacker,
            tag = self.tag,
            duration_ms = self.duration.as_millis() as u64,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "attacker_completed",
            span_name = name,
            attacker = self.attacker,
            tag = self.tag,
        )
    }
}

/// An attacker failed or panicked on an item. Other attackers are unaffected.
///
/// # Log Level
/// `error!` - Failure requiring attention
pub struct AttackerFailed<'a> {
    pub attacker: &'a str,
    pub tag: &'a str,
    pub correlation_id: Option<&'a str>,
    pub error: &'a dyn std::error::Error,
}

impl Display for AttackerFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Attacker '{}' failed on item tagged '{}': {}",
            self.attacker, self.tag, self.error
        )
    }
}

impl StructuredLog for AttackerFailed<'_> {
    fn log(&self) {
        tracing::error!(
            attacker = self.attacker,
            tag = self.tag,
            correlation_id = self.correlation_id,
            error = %self.error,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::error_span!(
            "attacker_failed",
            span_name = name,
            attacker = self.attacker,
            tag = self.tag,
            error = %self.error,
        )
    }
}
