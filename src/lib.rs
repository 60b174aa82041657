// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod backends;   // enrichers, attackers, finding sinks
pub mod bus;        // raw + enriched channels
pub mod config;     // config loading + runtime builder
pub mod engine;     // driver loops + pipeline handle
pub mod errors;     // error handling
pub mod observability;
pub mod protocol;   // envelope model
pub mod registry;   // worker registry + wiring checks
pub mod traits;     // worker contracts
