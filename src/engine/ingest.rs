// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::bus::{EventBus, RawEvent};
use crate::observability::messages::bus::RawSubmitted;
use crate::observability::messages::StructuredLog;
use crate::protocol::{HttpRequestData, UserRef};

/// The ingestion boundary: turns a submission into an item on `raw`.
///
/// No validation happens here. A payload that is not a request, or an
/// enricher name nobody registered, fails later in the enrichment driver
/// without affecting other submissions.
#[derive(Debug, Clone)]
pub struct Ingestor {
    bus: EventBus,
    default_enricher: String,
    sequence: Arc<AtomicU64>,
}

impl Ingestor {
    pub fn new(bus: EventBus, default_enricher: impl Into<String>) -> Self {
        Self {
            bus,
            default_enricher: default_enricher.into(),
            sequence: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Publish `payload` for `enricher`, or for the default enricher when
    /// `None`. Returns the correlation id assigned to the submission.
    pub fn submit(
        &self,
        payload: serde_json::Value,
        user: UserRef,
        enricher: Option<&str>,
    ) -> String {
        let enricher = enricher.unwrap_or(self.default_enricher.as_str()).to_string();
        let correlation_id = format!("req-{}", self.sequence.fetch_add(1, Ordering::Relaxed) + 1);

        RawSubmitted {
            enricher: &enricher,
            user_id: &user.id,
            correlation_id: Some(&correlation_id),
        }
        .log();

        self.bus.raw().publish(RawEvent {
            payload,
            user,
            enricher,
            correlation_id: Some(correlation_id.clone()),
        });
        correlation_id
    }

    /// Convenience for callers holding a typed request.
    pub fn submit_request(
        &self,
        request: &HttpRequestData,
        user: UserRef,
        enricher: Option<&str>,
    ) -> Result<String, serde_json::Error> {
        let payload = serde_json::to_value(request)?;
        Ok(self.submit(payload, user, enricher))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::time::Duration;

    #[tokio::test]
    async fn test_submit_defaults_enricher_and_numbers_submissions() {
        let bus = EventBus::new();
        let ingestor = Ingestor::new(bus.clone(), "default-enricher");

        let first = ingestor.submit(json!({"method": "GET"}), UserRef::new("alice"), None);
        let second = ingestor.submit(
            json!({"method": "POST"}),
            UserRef::new("bob"),
            Some("param-enricher"),
        );

        assert_eq!(first, "req-1");
        assert_eq!(second, "req-2");

        let wait = Duration::from_millis(50);
        let a = bus.raw().recv_timeout(wait).await.unwrap();
        let b = bus.raw().recv_timeout(wait).await.unwrap();
        assert_eq!(a.enricher, "default-enricher");
        assert_eq!(a.user.id, "alice");
        assert_eq!(a.correlation_id.as_deref(), Some("req-1"));
        assert_eq!(b.enricher, "param-enricher");
        assert_eq!(b.payload, json!({"method": "POST"}));
    }

    #[tokio::test]
    async fn test_clones_share_the_sequence() {
        let ingestor = Ingestor::new(EventBus::new(), "default-enricher");
        let clone = ingestor.clone();

        ingestor.submit(json!({}), UserRef::new("alice"), None);
        let id = clone.submit(json!({}), UserRef::new("alice"), None);

        assert_eq!(id, "req-2");
    }
}
