// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Wiring checks between enrichers and attackers.
//!
//! The pipeline is a two-level producer/consumer graph: enrichers produce
//! envelopes tagged with their own name and attackers consume the tags they
//! declare. Two things can be wrong with that graph:
//!
//! * **Unconsumed enricher** - `produced − consumed` is non-empty. Items routed
//!   through that enricher are enriched and then silently discarded. Fatal.
//! * **Dangling consumer** - an attacker declares a tag nobody produces. The
//!   attacker simply never fires for it. Reported, not fatal.
//!
//! Both checks are set differences over name sets, O(E + A·C) for E enrichers,
//! A attackers and C consumed names per attacker.

use std::collections::{BTreeSet, HashSet};

use super::WorkerRegistry;

/// Enricher names no registered attacker consumes, sorted.
pub fn unconsumed_enrichers(registry: &WorkerRegistry) -> Vec<String> {
    let consumed: HashSet<&str> = registry
        .attackers()
        .iter()
        .flat_map(|attacker| attacker.consumes().iter().copied())
        .collect();

    registry
        .enricher_names()
        .into_iter()
        .filter(|name| !consumed.contains(name))
        .map(str::to_string)
        .collect()
}

/// `(attacker, enricher)` pairs where the attacker consumes a name that no
/// registered enricher produces. Deduplicated and sorted.
pub fn dangling_consumers(registry: &WorkerRegistry) -> Vec<(&'static str, &'static str)> {
    let produced: HashSet<&str> = registry.enricher_names().into_iter().collect();

    registry
        .attackers()
        .iter()
        .flat_map(|attacker| {
            let attacker_name = attacker.name();
            attacker
                .consumes()
                .iter()
                .copied()
                .map(move |consumed| (attacker_name, consumed))
        })
        .filter(|(_, consumed)| !produced.contains(consumed))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
