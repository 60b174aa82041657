// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Name-keyed registry of enrichers and attackers.
//!
//! The registry is an ordinary value built during startup and then shared
//! read-only (`Arc<WorkerRegistry>`) with the drivers. Startup order is:
//!
//! 1. construct an empty [`WorkerRegistry`]
//! 2. register every enricher and attacker
//! 3. run [`WorkerRegistry::sanity_check`]
//! 4. start the drivers
//!
//! [`crate::engine::Pipeline::start`] runs step 3 itself, so a registry that
//! fails the check never reaches a driver.

mod sanity;

pub use sanity::{dangling_consumers, unconsumed_enrichers};

use std::collections::HashMap;
use std::sync::Arc;

use crate::errors::{ConfigurationError, WorkerKind};
use crate::observability::messages::registry::{
    DanglingConsumer, RegistrationRepeated, SanityCheckPassed, UnconsumedEnrichers,
    WorkerRegistered,
};
use crate::observability::messages::StructuredLog;
use crate::traits::{Attacker, Enricher};

#[derive(Default)]
pub struct WorkerRegistry {
    enrichers: HashMap<&'static str, Arc<dyn Enricher>>,
    /// Registration order is dispatch order.
    attackers: Vec<Arc<dyn Attacker>>,
}

impl WorkerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an enricher under its own `name()`.
    ///
    /// Registering the same instance again is a no-op. A different instance
    /// under a taken name is rejected rather than silently replacing the first.
    pub fn register_enricher(
        &mut self,
        enricher: Arc<dyn Enricher>,
    ) -> Result<(), ConfigurationError> {
        let name = enricher.name();
        if let Some(existing) = self.enrichers.get(name) {
            return repeat_or_duplicate(existing, &enricher, WorkerKind::Enricher, name);
        }

        self.enrichers.insert(name, enricher);
        WorkerRegistered {
            kind: "enricher",
            name,
        }
        .log();
        Ok(())
    }

    /// Add an attacker under its own `name()`. Its consumed-name set must be
    /// non-empty.
    pub fn register_attacker(
        &mut self,
        attacker: Arc<dyn Attacker>,
    ) -> Result<(), ConfigurationError> {
        let name = attacker.name();
        if let Some(existing) = self.attackers.iter().find(|a| a.name() == name) {
            return repeat_or_duplicate(existing, &attacker, WorkerKind::Attacker, name);
        }
        if attacker.consumes().is_empty() {
            return Err(ConfigurationError::EmptyConsumes {
                attacker: name.to_string(),
            });
        }

        self.attackers.push(attacker);
        WorkerRegistered {
            kind: "attacker",
            name,
        }
        .log();
        Ok(())
    }

    /// Fail if any registered enricher's output would never be analyzed.
    ///
    /// The error names every unconsumed enricher, sorted. Attackers consuming
    /// names that no enricher produces are logged as warnings only.
    pub fn sanity_check(&self) -> Result<(), ConfigurationError> {
        for (attacker, enricher) in dangling_consumers(self) {
            DanglingConsumer {
                attacker,
                enricher,
            }
            .log();
        }

        let names = unconsumed_enrichers(self);
        if !names.is_empty() {
            UnconsumedEnrichers { names: &names }.log();
            return Err(ConfigurationError::UnconsumedEnrichers { names });
        }

        SanityCheckPassed {
            enricher_count: self.enrichers.len(),
            attacker_count: self.attackers.len(),
        }
        .log();
        Ok(())
    }

    pub fn enricher(&self, name: &str) -> Option<&Arc<dyn Enricher>> {
        self.enrichers.get(name)
    }

    /// Every attacker whose consumed set contains `tag`, in registration order.
    pub fn attackers_for<'a>(
        &'a self,
        tag: &'a str,
    ) -> impl Iterator<Item = &'a Arc<dyn Attacker>> + 'a {
        self.attackers
            .iter()
            .filter(move |attacker| attacker.consumes().iter().any(|consumed| *consumed == tag))
    }

    /// Registered enricher names, sorted.
    pub fn enricher_names(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.enrichers.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Registered attacker names, in registration order.
    pub fn attacker_names(&self) -> Vec<&'static str> {
        self.attackers.iter().map(|attacker| attacker.name()).collect()
    }

    pub(crate) fn attackers(&self) -> &[Arc<dyn Attacker>] {
        &self.attackers
    }
}

impl std::fmt::Debug for WorkerRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WorkerRegistry")
            .field("enrichers", &self.enricher_names())
            .field("attackers", &self.attacker_names())
            .finish()
    }
}

fn repeat_or_duplicate<T: ?Sized>(
    existing: &Arc<T>,
    incoming: &Arc<T>,
    kind: WorkerKind,
    name: &str,
) -> Result<(), ConfigurationError> {
    // Compare data pointers only; vtable pointers for the same type can differ
    // between codegen units.
    let same = std::ptr::eq(
        Arc::as_ptr(existing) as *const (),
        Arc::as_ptr(incoming) as *const (),
    );
    if same {
        RegistrationRepeated {
            kind: match kind {
                WorkerKind::Enricher => "enricher",
                WorkerKind::Attacker => "attacker",
            },
            name,
        }
        .log();
        Ok(())
    } else {
        Err(ConfigurationError::DuplicateWorker {
            kind,
            name: name.to_string(),
        })
    }
}
