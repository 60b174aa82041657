// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod default_enricher;
pub mod param_enricher;

pub use default_enricher::{DefaultEnricher, DEFAULT_ENRICHER};
pub use param_enricher::{ParamEnricher, PARAM_ENRICHER};
