// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use async_trait::async_trait;

use crate::errors::WorkerError;
use crate::protocol::{AttackData, HttpRequestData, UserRef};

/// Turns a raw request into an envelope of analysis targets.
///
/// Every locator an implementation constructs must appear in the returned
/// envelope, unmodified and in the order it was built. Implementations should
/// not fail on well-formed input; an `Err` drops the item and is logged.
#[async_trait]
pub trait Enricher: Send + Sync {
    /// Unique name. Raw items and attacker `consumes()` sets refer to it.
    fn name(&self) -> &'static str;

    async fn enrich(
        &self,
        request: HttpRequestData,
        user: &UserRef,
    ) -> Result<AttackData, WorkerError>;
}
