// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Errors raised while items move through the drivers.
//!
//! Everything here is recoverable at item granularity: the driver logs it and
//! moves on to the next item.

use std::time::Duration;
use thiserror::Error;

use super::config::WorkerKind;

/// What worker code returns when it cannot complete an item.
#[derive(Debug, Error)]
pub enum WorkerError {
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("finding sink rejected record: {0}")]
    Sink(String),

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

/// A single item failed. Carries the tag and worker name needed to reproduce it.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("no {kind} registered under '{name}'")]
    UnknownWorker { kind: WorkerKind, name: String },

    #[error("raw payload for '{enricher}' is not a valid request: {source}")]
    MalformedPayload {
        enricher: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("{kind} '{worker}' failed on item tagged '{tag}': {source}")]
    WorkerExecution {
        kind: WorkerKind,
        worker: String,
        tag: String,
        #[source]
        source: WorkerError,
    },

    #[error("{kind} '{worker}' panicked on item tagged '{tag}'")]
    WorkerPanicked {
        kind: WorkerKind,
        worker: String,
        tag: String,
    },
}

/// A bounded wait on an empty channel elapsed. Expected; callers just retry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no item arrived within {0:?}")]
pub struct ChannelWaitTimeout(pub Duration);
