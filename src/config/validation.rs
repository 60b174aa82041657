// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Static checks on a loaded [`Config`].
//!
//! These run before any worker is built, so every problem in the file is
//! reported together:
//!
//! 1. **Bus**: `wait_timeout_ms` must be non-zero
//! 2. **Uniqueness**: no enricher or attacker listed twice
//! 3. **Availability**: every listed name has a local implementation
//! 4. **Routing**: `default_enricher` is one of the listed enrichers
//!
//! Wiring completeness (every enricher consumed by some attacker) is not
//! checked here. It depends on what the built workers declare, so it runs on
//! the registry in [`crate::registry::WorkerRegistry::sanity_check`].

use std::collections::HashSet;

use crate::backends::local::LocalWorkerFactory;
use crate::config::Config;
use crate::errors::WorkerKind;

pub fn validate_config(cfg: &Config) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if cfg.bus.wait_timeout_ms == 0 {
        errors.push("bus.wait_timeout_ms must be greater than zero".to_string());
    }

    if cfg.pipeline.enrichers.is_empty() {
        errors.push("pipeline.enrichers must list at least one enricher".to_string());
    }

    for (kind, names) in [
        (WorkerKind::Enricher, &cfg.pipeline.enrichers),
        (WorkerKind::Attacker, &cfg.pipeline.attackers),
    ] {
        let mut seen = HashSet::new();
        for name in names {
            if !seen.insert(name.as_str()) {
                errors.push(format!("{} '{}' is listed more than once", kind, name));
            } else if !LocalWorkerFactory::is_implementation_available(kind, name) {
                errors.push(format!("unknown {} implementation '{}'", kind, name));
            }
        }
    }

    if !cfg.pipeline.enrichers.is_empty()
        && !cfg.pipeline.enrichers.contains(&cfg.pipeline.default_enricher)
    {
        errors.push(format!(
            "pipeline.default_enricher '{}' is not listed in pipeline.enrichers",
            cfg.pipeline.default_enricher
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
