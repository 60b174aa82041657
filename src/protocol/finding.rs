// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

use super::envelope::{AttackData, ResourceLocator};
use super::request::UserRef;

/// One result an attacker hands to the persistence boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    pub attacker: String,
    pub enricher: String,
    pub user_id: String,
    pub method: String,
    pub url: String,
    pub locator: ResourceLocator,
    pub detail: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub correlation_id: Option<String>,
    /// Milliseconds since the Unix epoch.
    pub observed_at: u64,
}

impl Finding {
    /// Build a finding about `locator` in `data`, keyed by the request it came from.
    pub fn for_locator(
        attacker: &str,
        enricher: &str,
        user: &UserRef,
        data: &AttackData,
        locator: &ResourceLocator,
        detail: impl Into<String>,
    ) -> Self {
        Self {
            attacker: attacker.to_string(),
            enricher: enricher.to_string(),
            user_id: user.id.clone(),
            method: data.request().method().to_string(),
            url: data.request().url().to_string(),
            locator: locator.clone(),
            detail: detail.into(),
            correlation_id: data.correlation_id().map(str::to_string),
            observed_at: unix_millis(),
        }
    }
}

fn unix_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as u64)
        .unwrap_or_default()
}
