// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Centralized message types for structured logging.
//!
//! Each message is a small struct borrowing the values it reports. `Display`
//! renders the human-readable line; [`StructuredLog`] emits the same event with
//! its fields attached so they can be filtered and indexed.
//!
//! # Organization
//!
//! * `bus` - channel wait and backlog events
//! * `pipeline` - driver lifecycle, per-item and per-worker outcomes
//! * `registry` - worker registration and the startup completeness check
//!
//! # Usage Pattern
//!
//! ```rust
//! use attack_bus::observability::messages::StructuredLog;
//! use attack_bus::observability::messages::registry::WorkerRegistered;
//!
//! let msg = WorkerRegistered {
//!     kind: "enricher",
//!     name: "default-enricher",
//! };
//!
//! msg.log();
//! ```

pub mod bus;
pub mod pipeline;
pub mod registry;

use tracing::Span;

/// A message that knows how to emit itself with structured fields.
pub trait StructuredLog {
    /// Emit the event at the message's level.
    fn log(&self);

    /// Build a span carrying the message's fields.
    fn span(&self, name: &str) -> Span;
}
