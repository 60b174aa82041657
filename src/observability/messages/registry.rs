// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for worker registration and the startup completeness check.

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// A worker joined the registry.
///
/// # Log Level
/// `info!` - Startup event
pub struct WorkerRegistered<'a> {
    pub kind: &'a str,
    pub name: &'a str,
}

impl Display for WorkerRegistered<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Registered {} '{}'", self.kind, self.name)
    }
}

impl StructuredLog for WorkerRegistered<'_> {
    fn log(&self) {
        tracing::info!(kind = self.kind, worker = self.name, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "worker_registered",
            span_name = name,
            kind = self.kind,
            worker = self.name,
        )
    }
}

/// The same worker instance was registered twice; the second call is a no-op.
///
/// # Log Level
/// `debug!`
pub struct RegistrationRepeated<'a> {
    pub kind: &'a str,
    pub name: &'a str,
}

impl Display for RegistrationRepeated<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "{} '{}' already registered with the same instance, ignoring",
            self.kind, self.name
        )
    }
}

impl StructuredLog for RegistrationRepeated<'_> {
    fn log(&self) {
        tracing::debug!(kind = self.kind, worker = self.name, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "registration_repeated",
            span_name = name,
            kind = self.kind,
            worker = self.name,
        )
    }
}

/// Every enricher has at least one consumer.
///
/// # Log Level
/// `info!` - Startup event
pub struct SanityCheckPassed {
    pub enricher_count: usize,
    pub attacker_count: usize,
}

impl Display for SanityCheckPassed {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Worker wiring is complete: {} enrichers, {} attackers",
            self.enricher_count, self.attacker_count
        )
    }
}

impl StructuredLog for SanityCheckPassed {
    fn log(&self) {
        tracing::info!(
            enricher_count = self.enricher_count,
            attacker_count = self.attacker_count,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "sanity_check",
            span_name = name,
            enricher_count = self.enricher_count,
            attacker_count = self.attacker_count,
        )
    }
}

/// Enrichers whose output nothing consumes. Startup aborts after this.
///
/// # Log Level
/// `error!` - Fatal configuration problem
///
/// # Example
/// ```
/// use attack_bus::observability::messages::registry::UnconsumedEnrichers;
///
/// let names = vec!["param-enricher".to_string()];
/// let msg = UnconsumedEnrichers { names: &names };
///
/// tracing::error!("{}", msg);
/// ```
pub struct UnconsumedEnrichers<'a> {
    pub names: &'a [String],
}

impl Display for UnconsumedEnrichers<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "No attacker consumes the output of: {}",
            self.names.join(", ")
        )
    }
}

impl StructuredLog for UnconsumedEnrichers<'_> {
    fn log(&self) {
        tracing::error!(
            enrichers = %self.names.join(", "),
            count = self.names.len(),
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::error_span!(
            "unconsumed_enrichers",
            span_name = name,
            enrichers = %self.names.join(", "),
        )
    }
}

/// An attacker consumes a name no registered enricher produces. It will never
/// receive items under that tag.
///
/// # Log Level
/// `warn!` - Suspicious but not fatal
pub struct DanglingConsumer<'a> {
    pub attacker: &'a str,
    pub enricher: &'a str,
}

impl Display for DanglingConsumer<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Attacker '{}' consumes '{}' but no such enricher is registered",
            self.attacker, self.enricher
        )
    }
}

impl StructuredLog for DanglingConsumer<'_> {
    fn log(&self) {
        tracing::warn!(
            attacker = self.attacker,
            enricher = self.enricher,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::warn_span!(
            "dangling_consumer",
            span_name = name,
            attacker = self.attacker,
            enricher = self.enricher,
        )
    }
}
