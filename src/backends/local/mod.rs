// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod attackers;
pub mod enrichers;
pub mod factory;
pub mod sink;

pub use attackers::*;
pub use enrichers::*;
pub use factory::LocalWorkerFactory;
pub use sink::MemoryFindingSink;
