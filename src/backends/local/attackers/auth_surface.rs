// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Maps the authorization surface of a request.
//!
//! Every locator that carries credentials or session state is a target for an
//! authorization test: replaying the request with that value swapped for
//! another user's shows whether the server actually checks it. This attacker
//! records those targets as findings; it does not send any traffic.

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use std::sync::Arc;

use crate::backends::local::enrichers::{DEFAULT_ENRICHER, PARAM_ENRICHER};
use crate::errors::WorkerError;
use crate::protocol::{AttackData, Finding, RequestPart, ResourceLocator, UserRef};
use crate::traits::{Attacker, FindingSink};

pub const AUTH_SURFACE: &str = "auth-surface";

const AUTH_HEADERS: &[&str] = &[
    "authorization",
    "proxy-authorization",
    "cookie",
    "x-api-key",
    "x-auth-token",
];

const SESSION_MARKERS: &[&str] = &["session", "sess", "sid", "token", "auth", "jwt", "apikey", "api_key"];

pub struct AuthSurfaceAttacker {
    sink: Arc<dyn FindingSink>,
}

impl AuthSurfaceAttacker {
    pub fn new(sink: Arc<dyn FindingSink>) -> Self {
        Self { sink }
    }

    /// Describe why `locator` is authorization material, or `None` if it is not.
    pub fn classify(locator: &ResourceLocator) -> Option<String> {
        match locator.part {
            RequestPart::Header => {
                let (name, value) = locator.id.split_once(':')?;
                let lowered = name.trim().to_ascii_lowercase();
                if !AUTH_HEADERS.contains(&lowered.as_str()) {
                    return None;
                }
                Some(describe_header(name.trim(), value.trim()))
            }
            RequestPart::Param | RequestPart::Cookie => {
                let name = locator.id.split('=').next().unwrap_or_default();
                let lowered = name.to_ascii_lowercase();
                SESSION_MARKERS
                    .iter()
                    .any(|marker| lowered.contains(marker))
                    .then(|| format!("session-like {} '{}'", locator.part, name))
            }
            RequestPart::Url | RequestPart::Body => None,
        }
    }
}

fn describe_header(name: &str, value: &str) -> String {
    let (scheme, credentials) = value.split_once(' ').unwrap_or((value, ""));
    if scheme.eq_ignore_ascii_case("basic") {
        if let Some(principal) = basic_principal(credentials.trim()) {
            return format!("basic credentials for '{}' in header '{}'", principal, name);
        }
        return format!("undecodable basic credentials in header '{}'", name);
    }
    if scheme.eq_ignore_ascii_case("bearer") {
        return format!("bearer token in header '{}'", name);
    }
    format!("authorization material in header '{}'", name)
}

fn basic_principal(encoded: &str) -> Option<String> {
    let decoded = STANDARD.decode(encoded).ok()?;
    let decoded = String::from_utf8(decoded).ok()?;
    let (principal, _) = decoded.split_once(':')?;
    Some(principal.to_string())
}

#[async_trait]
impl Attacker for AuthSurfaceAttacker {
    fn name(&self) -> &'static str {
        AUTH_SURFACE
    }

    fn consumes(&self) -> &[&'static str] {
        &[DEFAULT_ENRICHER, PARAM_ENRICHER]
    }

    async fn ingest(&self, user: &UserRef, data: Arc<AttackData>) -> Result<(), WorkerError> {
        // The envelope does not carry its enricher tag; infer it from the parts.
        let enricher = if data
            .locators()
            .iter()
            .any(|locator| matches!(locator.part, RequestPart::Param | RequestPart::Cookie))
        {
            PARAM_ENRICHER
        } else {
            DEFAULT_ENRICHER
        };

        for locator in data.locators() {
            if let Some(detail) = Self::classify(locator) {
                let finding = Finding::for_locator(AUTH_SURFACE, enricher, user, &data, locator, detail);
                self.sink.record(finding).await?;
            }
        }
        Ok(())
    }
}
