// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use async_trait::async_trait;

use crate::errors::WorkerError;
use crate::protocol::{AttackData, HttpRequestData, RequestPart, ResourceLocator, UserRef};
use crate::traits::Enricher;

pub const DEFAULT_ENRICHER: &str = "default-enricher";

/// Baseline enricher: the URL, then every header as `name:value`, then the body.
pub struct DefaultEnricher;

impl DefaultEnricher {
    pub fn new() -> Self {
        Self
    }

    /// Locators in emission order. Split out so tests can compare what was
    /// built against what ended up in the envelope.
    pub fn locators_for(request: &HttpRequestData) -> Vec<ResourceLocator> {
        let mut locators = Vec::with_capacity(request.headers().len() + 2);
        locators.push(ResourceLocator::new(request.url(), RequestPart::Url, "url"));

        for (name, value) in request.headers().iter() {
            locators.push(ResourceLocator::new(
                format!("{}:{}", name, value),
                RequestPart::Header,
                "header",
            ));
        }

        if let Some(body) = request.body() {
            locators.push(ResourceLocator::new(body, RequestPart::Body, "body"));
        }

        locators
    }
}

impl Default for DefaultEnricher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Enricher for DefaultEnricher {
    fn name(&self) -> &'static str {
        DEFAULT_ENRICHER
    }

    async fn enrich(
        &self,
        request: HttpRequestData,
        _user: &UserRef,
    ) -> Result<AttackData, WorkerError> {
        let locators = Self::locators_for(&request);
        Ok(AttackData::new(request, locators))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::HeaderMap;

    fn user() -> UserRef {
        UserRef::new("alice")
    }

    #[tokio::test]
    async fn test_url_and_header_without_body() {
        let mut headers = HeaderMap::new();
        headers.insert("User-Agent", "Test");
        let request = HttpRequestData::new("GET", "http://example.com", headers);

        let data = DefaultEnricher::new().enrich(request, &user()).await.unwrap();

        assert_eq!(
            data.locators(),
            &[
                ResourceLocator::new("http://example.com", RequestPart::Url, "url"),
                ResourceLocator::new("User-Agent:Test", RequestPart::Header, "header"),
            ]
        );
        assert_eq!(data.request().url(), "http://example.com");
        assert!(data.correlation_id().is_none());
    }

    #[tokio::test]
    async fn test_locator_order_table_driven() {
        struct TestCase {
            name: &'static str,
            headers: &'static [(&'static str, &'static str)],
            body: Option<&'static str>,
            expected: &'static [(&'static str, RequestPart)],
        }

        let test_cases = vec![
            TestCase {
                name: "bare url",
                headers: &[],
                body: None,
                expected: &[("http://example.com/a", RequestPart::Url)],
            },
            TestCase {
                name: "body is last",
                headers: &[("Content-Type", "application/json")],
                body: Some(r#"{"id":7}"#),
                expected: &[
                    ("http://example.com/a", RequestPart::Url),
                    ("Content-Type:application/json", RequestPart::Header),
                    (r#"{"id":7}"#, RequestPart::Body),
                ],
            },
            TestCase {
                name: "headers keep insertion order",
                headers: &[("X-B", "2"), ("X-A", "1"), ("Cookie", "sid=abc")],
                body: None,
                expected: &[
                    ("http://example.com/a", RequestPart::Url),
                    ("X-B:2", RequestPart::Header),
                    ("X-A:1", RequestPart::Header),
                    ("Cookie:sid=abc", RequestPart::Header),
                ],
            },
            TestCase {
                name: "empty body is still a body",
                headers: &[],
                body: Some(""),
                expected: &[
                    ("http://example.com/a", RequestPart::Url),
                    ("", RequestPart::Body),
                ],
            },
        ];

        for test_case in test_cases {
            let headers: HeaderMap = test_case.headers.iter().copied().collect();
            let mut request = HttpRequestData::new("POST", "http://example.com/a", headers);
            if let Some(body) = test_case.body {
                request = request.with_body(body);
            }

            let data = DefaultEnricher::new().enrich(request, &user()).await.unwrap();
            let actual: Vec<(&str, RequestPart)> = data
                .locators()
                .iter()
                .map(|locator| (locator.id.as_str(), locator.part))
                .collect();

            assert_eq!(
                actual,
                test_case.expected.to_vec(),
                "Test case '{}' failed",
                test_case.name
            );
        }
    }

    #[tokio::test]
    async fn test_every_built_locator_reaches_the_envelope() {
        let mut headers = HeaderMap::new();
        headers.insert("Authorization", "Bearer t");
        headers.insert("Accept", "*/*");
        let request = HttpRequestData::new("PUT", "http://example.com/items/3", headers)
            .with_body("name=x");

        let built = DefaultEnricher::locators_for(&request);
        let data = DefaultEnricher::new().enrich(request, &user()).await.unwrap();

        assert_eq!(data.locators(), built.as_slice());
    }
}
