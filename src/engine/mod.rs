// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Driver loops that move items through the bus.
//!
//! Per submitted request:
//!
//! ```text
//! submitted → raw-enqueued → enriching → enriched-enqueued → dispatching → {ingested | failed} per attacker
//!                               │
//!                               └─ unknown enricher / bad payload / enricher error → dropped
//! ```
//!
//! Delivery is at-most-once. An item dequeued but not finished when the
//! process dies is gone.

mod dispatch;
mod enrichment;
mod ingest;
mod pipeline;


pub use dispatch::run_dispatch_driver;
pub use enrichment::run_enrichment_driver;
pub use ingest::Ingestor;
pub use pipeline::{DriverReport, Pipeline, PipelineReport, PipelineSettings};
