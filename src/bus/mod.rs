// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! In-process event bus with two independent FIFO lanes.
//!
//! ```text
//! ingestion ──publish──▶ raw ──▶ enrichment driver ──publish──▶ enriched ──▶ dispatch driver
//! ```
//!
//! Ordering holds only within one channel. Nothing is persisted: unconsumed
//! items are lost when the process exits.

mod channel;

pub use channel::{Channel, Subscription};

use std::sync::Arc;

use crate::protocol::{AttackData, UserRef};

pub const RAW_CHANNEL: &str = "raw";
pub const ENRICHED_CHANNEL: &str = "enriched";

/// Item on the `raw` channel: a request exactly as submitted, not yet decoded.
#[derive(Debug, Clone)]
pub struct RawEvent {
    pub payload: serde_json::Value,
    pub user: UserRef,
    /// Selects the enricher, and transitively the attackers, for this request.
    pub enricher: String,
    pub correlation_id: Option<String>,
}

/// Item on the `enriched` channel, still tagged with the enricher that built it.
#[derive(Debug, Clone)]
pub struct EnrichedEvent {
    pub data: Arc<AttackData>,
    pub enricher: String,
    pub user: UserRef,
}

struct Lanes {
    raw: Channel<RawEvent>,
    enriched: Channel<EnrichedEvent>,
}

/// Cheaply clonable handle; every clone sees the same two channels.
#[derive(Clone)]
pub struct EventBus {
    lanes: Arc<Lanes>,
}

impl EventBus {
    pub fn new() -> Self {
        Self {
            lanes: Arc::new(Lanes {
                raw: Channel::new(RAW_CHANNEL),
                enriched: Channel::new(ENRICHED_CHANNEL),
            }),
        }
    }

    pub fn raw(&self) -> &Channel<RawEvent> {
        &self.lanes.raw
    }

    pub fn enriched(&self) -> &Channel<EnrichedEvent> {
        &self.lanes.enriched
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("raw_backlog", &self.lanes.raw.len())
            .field("enriched_backlog", &self.lanes.enriched.len())
            .finish()
    }
}
