// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for event bus activity.
//!
//! These are high-frequency events and log at `trace!`/`debug!`.

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use std::time::Duration;
use tracing::Span;

/// An item was appended to a channel.
///
/// # Log Level
/// `trace!` - Per-item bookkeeping
pub struct ItemPublished<'a> {
    pub channel: &'a str,
    pub backlog: usize,
}

impl Display for ItemPublished<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Published to '{}' channel, backlog={}",
            self.channel, self.backlog
        )
    }
}

impl StructuredLog for ItemPublished<'_> {
    fn log(&self) {
        tracing::trace!(
            channel = self.channel,
            backlog = self.backlog,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::trace_span!(
            "item_published",
            span_name = name,
            channel = self.channel,
            backlog = self.backlog,
        )
    }
}

/// A bounded wait on an empty channel elapsed without an item.
///
/// # Log Level
/// `trace!` - Expected idle behavior
pub struct ChannelWaitElapsed<'a> {
    pub channel: &'a str,
    pub waited: Duration,
}

impl Display for ChannelWaitElapsed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "No item on '{}' channel after {:?}, re-checking",
            self.channel, self.waited
        )
    }
}

impl StructuredLog for ChannelWaitElapsed<'_> {
    fn log(&self) {
        tracing::trace!(
            channel = self.channel,
            waited_ms = self.waited.as_millis() as u64,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::trace_span!(
            "channel_wait_elapsed",
            span_name = name,
            channel = self.channel,
            waited = ?self.waited,
        )
    }
}

/// Raw traffic accepted at the ingestion boundary.
///
/// # Log Level
/// `debug!` - Per-request event
pub struct RawSubmitted<'a> {
    pub enricher: &'a str,
    pub user_id: &'a str,
    pub correlation_id: Option<&'a str>,
}

impl Display for RawSubmitted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Submitted raw traffic for user '{}' via '{}'",
            self.user_id, self.enricher
        )
    }
}

impl StructuredLog for RawSubmitted<'_> {
    fn log(&self) {
        tracing::debug!(
            enricher = self.enricher,
            user_id = self.user_id,
            correlation_id = self.correlation_id,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "raw_submitted",
            span_name = name,
            enricher = self.enricher,
            user_id = self.user_id,
            correlation_id = self.correlation_id,
        )
    }
}
