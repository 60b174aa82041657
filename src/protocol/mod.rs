// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Value types that travel through the pipeline.
//!
//! * [`HttpRequestData`] - an intercepted request, immutable after construction
//! * [`ResourceLocator`] - one analysis target inside a request
//! * [`AttackData`] - the envelope pairing a request with its ordered locators
//! * [`UserRef`] - the user context a request was captured under
//! * [`Finding`] - what an attacker reports to the persistence boundary

mod envelope;
mod finding;
mod headers;
mod request;

pub use envelope::{AttackData, RequestPart, ResourceLocator};
pub use finding::Finding;
pub use headers::HeaderMap;
pub use request::{HttpRequestData, UserRef};
