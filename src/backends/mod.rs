// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Worker implementations for the attack pipeline.
//!
//! # Available Backends
//!
//! ## Local Backend
//! In-process enrichers and attackers, built by name from configuration:
//! - **Enrichers**: `default-enricher` (url, headers, body), `param-enricher`
//!   (query parameters, cookies)
//! - **Attackers**: `auth-surface` (records the authorization material an
//!   authorization test would swap between users)
//! - **Sinks**: `MemoryFindingSink`
//!
//! ## Stub Backend (Test-Only)
//! Recording, failing and panicking doubles for registry and driver tests.
//! Not available in production builds.
//!
//! # Architecture
//!
//! ```text
//! Configuration → LocalWorkerFactory → Arc<dyn Enricher | Attacker> → WorkerRegistry
//! ```
//!
//! # Examples
//!
//! ```rust
//! use attack_bus::backends::local::{LocalWorkerFactory, MemoryFindingSink};
//! use std::sync::Arc;
//!
//! let enricher = LocalWorkerFactory::create_enricher("default-enricher")?;
//! let attacker = LocalWorkerFactory::create_attacker(
//!     "auth-surface",
//!     Arc::new(MemoryFindingSink::new()),
//! )?;
//!
//! assert!(attacker.consumes().contains(&enricher.name()));
//! # Ok::<(), attack_bus::errors::ConfigurationError>(())
//! ```

pub mod local;
#[cfg(test)]
pub mod stub;
