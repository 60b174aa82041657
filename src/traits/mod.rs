// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod attacker;
pub mod enricher;

pub use attacker::{Attacker, FindingSink};
pub use enricher::Enricher;
