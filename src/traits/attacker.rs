// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use async_trait::async_trait;
use std::sync::Arc;

use crate::errors::WorkerError;
use crate::protocol::{AttackData, Finding, UserRef};

/// Analyzes enriched envelopes for one class of vulnerability.
#[async_trait]
pub trait Attacker: Send + Sync {
    fn name(&self) -> &'static str;

    /// Names of the enrichers whose output this attacker understands. Must not
    /// be empty; the registry rejects attackers that consume nothing.
    fn consumes(&self) -> &[&'static str];

    /// Analyze one envelope. Side effects only (typically findings sent to a
    /// [`FindingSink`]). The envelope is shared and must not be mutated.
    async fn ingest(&self, user: &UserRef, data: Arc<AttackData>) -> Result<(), WorkerError>;
}

/// Append-only destination for findings, keyed by the originating request.
#[async_trait]
pub trait FindingSink: Send + Sync {
    async fn record(&self, finding: Finding) -> Result<(), WorkerError>;
}
