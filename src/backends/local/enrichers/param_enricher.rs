// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use async_trait::async_trait;
use url::Url;

use crate::errors::WorkerError;
use crate::protocol::{AttackData, HttpRequestData, RequestPart, ResourceLocator, UserRef};
use crate::traits::Enricher;

pub const PARAM_ENRICHER: &str = "param-enricher";

/// Emits query parameters and then cookies, each as a `name=value` locator.
///
/// Query values are percent-decoded. Cookies come from every `Cookie` header,
/// matched case-insensitively, in header order.
pub struct ParamEnricher;

impl ParamEnricher {
    pub fn new() -> Self {
        Self
    }

    pub fn locators_for(request: &HttpRequestData) -> Result<Vec<ResourceLocator>, WorkerError> {
        let url = Url::parse(request.url()).map_err(|e| {
            WorkerError::InvalidRequest(format!("unparseable url '{}': {}", request.url(), e))
        })?;

        let mut locators: Vec<ResourceLocator> = url
            .query_pairs()
            .map(|(name, value)| {
                ResourceLocator::new(format!("{}={}", name, value), RequestPart::Param, "param")
            })
            .collect();

        let cookie_headers = request
            .headers()
            .iter()
            .filter(|(name, _)| name.eq_ignore_ascii_case("cookie"))
            .map(|(_, value)| value);

        for header in cookie_headers {
            for pair in header.split(';').map(str::trim).filter(|pair| !pair.is_empty()) {
                let (name, value) = pair.split_once('=').unwrap_or((pair, ""));
                locators.push(ResourceLocator::new(
                    format!("{}={}", name.trim(), value.trim()),
                    RequestPart::Cookie,
                    "cookie",
                ));
            }
        }

        Ok(locators)
    }
}

impl Default for ParamEnricher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Enricher for ParamEnricher {
    fn name(&self) -> &'static str {
        PARAM_ENRICHER
    }

    async fn enrich(
        &self,
        request: HttpRequestData,
        _user: &UserRef,
    ) -> Result<AttackData, WorkerError> {
        let locators = Self::locators_for(&request)?;
        Ok(AttackData::new(request, locators))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::HeaderMap;

    #[tokio::test]
    async fn test_params_and_cookies_table_driven() {
        struct TestCase {
            name: &'static str,
            url: &'static str,
            headers: &'static [(&'static str, &'static str)],
            expected: &'static [(&'static str, RequestPart)],
        }

        let test_cases = vec![
            TestCase {
                name: "nothing to extract",
                url: "http://example.com/",
                headers: &[("Accept", "*/*")],
                expected: &[],
            },
            TestCase {
                name: "query params in source order",
                url: "http://example.com/orders?user_id=42&page=2",
                headers: &[],
                expected: &[
                    ("user_id=42", RequestPart::Param),
                    ("page=2", RequestPart::Param),
                ],
            },
            TestCase {
                name: "percent-encoded value is decoded",
                url: "http://example.com/search?q=a%20b",
                headers: &[],
                expected: &[("q=a b", RequestPart::Param)],
            },
            TestCase {
                name: "cookies follow params",
                url: "http://example.com/?id=1",
                headers: &[("cookie", "sid=abc; theme=dark")],
                expected: &[
                    ("id=1", RequestPart::Param),
                    ("sid=abc", RequestPart::Cookie),
                    ("theme=dark", RequestPart::Cookie),
                ],
            },
            TestCase {
                name: "valueless cookie and stray separators",
                url: "http://example.com/",
                headers: &[("Cookie", "flag;; token=t ;")],
                expected: &[
                    ("flag=", RequestPart::Cookie),
                    ("token=t", RequestPart::Cookie),
                ],
            },
        ];

        for test_case in test_cases {
            let headers: HeaderMap = test_case.headers.iter().copied().collect();
            let request = HttpRequestData::new("GET", test_case.url, headers);

            let data = ParamEnricher::new()
                .enrich(request, &UserRef::new("bob"))
                .await
                .unwrap();
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
    async fn test_relative_url_is_rejected() {
        let request = HttpRequestData::new("GET", "/no/host?x=1", HeaderMap::new());

        let result = ParamEnricher::new().enrich(request, &UserRef::new("bob")).await;

        assert!(matches!(result, Err(WorkerError::InvalidRequest(_))));
    }
}
