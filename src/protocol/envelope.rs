// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde::{Deserialize, Serialize};
use std::fmt;

use super::request::HttpRequestData;

/// Which part of a request a locator points into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestPart {
    Url,
    Header,
    Body,
    Param,
    Cookie,
}

impl fmt::Display for RequestPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            RequestPart::Url => "url",
            RequestPart::Header => "header",
            RequestPart::Body => "body",
            RequestPart::Param => "param",
            RequestPart::Cookie => "cookie",
        };
        f.write_str(label)
    }
}

/// One concrete analysis target extracted from a request.
///
/// Locators have no key of their own; identity is position in the envelope
/// plus value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResourceLocator {
    pub id: String,
    pub part: RequestPart,
    #[serde(rename = "type")]
    pub kind: String,
}

impl ResourceLocator {
    pub fn new(id: impl Into<String>, part: RequestPart, kind: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            part,
            kind: kind.into(),
        }
    }
}

/// The unit of work carried from enrichment to attack dispatch.
///
/// Built once by an enricher and never mutated afterwards; the pipeline shares
/// it as `Arc<AttackData>`. Anything derived from it must be a new value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttackData {
    request: HttpRequestData,
    locators: Vec<ResourceLocator>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    correlation_id: Option<String>,
}

impl AttackData {
    pub fn new(request: HttpRequestData, locators: Vec<ResourceLocator>) -> Self {
        Self {
            request,
            locators,
            correlation_id: None,
        }
    }

    pub fn with_correlation_id(mut self, correlation_id: Option<String>) -> Self {
        self.correlation_id = correlation_id;
        self
    }

    pub fn request(&self) -> &HttpRequestData {
        &self.request
    }

    /// Locators in extraction order.
    pub fn locators(&self) -> &[ResourceLocator] {
        &self.locators
    }

    pub fn correlation_id(&self) -> Option<&str> {
        self.correlation_id.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::HeaderMap;

    #[test]
    fn locator_serializes_kind_as_type() {
        let locator = ResourceLocator::new("User-Agent:Test", RequestPart::Header, "header");
        let json = serde_json::to_value(&locator).unwrap();

        assert_eq!(
            json,
            serde_json::json!({"id": "User-Agent:Test", "part": "header", "type": "header"})
        );
    }

    #[test]
    fn request_part_display_matches_wire_name() {
        for part in [
            RequestPart::Url,
            RequestPart::Header,
            RequestPart::Body,
            RequestPart::Param,
            RequestPart::Cookie,
        ] {
            let wire = serde_json::to_value(part).unwrap();
            assert_eq!(wire, serde_json::Value::String(part.to_string()));
        }
    }

    #[test]
    fn envelope_keeps_locator_order() {
        let request = HttpRequestData::new("GET", "http://a.test", HeaderMap::new());
        let locators = vec![
            ResourceLocator::new("b", RequestPart::Param, "param"),
            ResourceLocator::new("a", RequestPart::Param, "param"),
            ResourceLocator::new("b", RequestPart::Param, "param"),
        ];

        let data = AttackData::new(request, locators.clone())
            .with_correlation_id(Some("req-7".to_string()));

        assert_eq!(data.locators(), locators.as_slice());
        assert_eq!(data.correlation_id(), Some("req-7"));
    }
}
