// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Structured logging for the pipeline.
//!
//! Message types live in [`messages`], one struct per event, each with a
//! `Display` impl and a [`messages::StructuredLog`] impl. Keeping the wording in
//! one place means call sites never format log strings themselves.
//!
//! [`init_tracing`] installs the `tracing-subscriber` fmt layer for the binary.
//! Library code only emits events; it never installs a subscriber.

pub mod messages;

use tracing_subscriber::EnvFilter;

/// Install the global fmt subscriber.
///
/// `RUST_LOG` wins when set; otherwise `default_level` (for example `"info"` or
/// `"attack_bus=debug"`) is used. Calling this twice is harmless: the second
/// install fails and is ignored.
pub fn init_tracing(default_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_tracing_is_idempotent() {
        init_tracing("debug");
        init_tracing("not a valid ::: filter");
        tracing::info!("still logging");
    }
}
