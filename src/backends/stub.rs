// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Worker doubles for registry and driver tests.

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::errors::WorkerError;
use crate::protocol::{AttackData, HttpRequestData, RequestPart, ResourceLocator, UserRef};
use crate::traits::{Attacker, Enricher};

/// Emits a single URL locator and echoes the request.
pub struct StubEnricher {
    pub name: &'static str,
}

impl StubEnricher {
    pub fn new(name: &'static str) -> Self {
        Self { name }
    }
}

#[async_trait]
impl Enricher for StubEnricher {
    fn name(&self) -> &'static str {
        self.name
    }

    async fn enrich(
        &self,
        request: HttpRequestData,
        _user: &UserRef,
    ) -> Result<AttackData, WorkerError> {
        let locator = ResourceLocator::new(request.url(), RequestPart::Url, "url");
        Ok(AttackData::new(request, vec![locator]))
    }
}

/// Always fails, for per-item isolation tests.
pub struct FailingEnricher {
    pub name: &'static str,
}

#[async_trait]
impl Enricher for FailingEnricher {
    fn name(&self) -> &'static str {
        self.name
    }

    async fn enrich(
        &self,
        _request: HttpRequestData,
        _user: &UserRef,
    ) -> Result<AttackData, WorkerError> {
        Err(WorkerError::InvalidRequest("simulated enrichment failure".to_string()))
    }
}

/// Records every envelope it is handed.
pub struct StubAttacker {
    pub name: &'static str,
    pub consumes: Vec<&'static str>,
    seen: Mutex<Vec<(String, Arc<AttackData>)>>,
}

impl StubAttacker {
    pub fn new(name: &'static str, consumes: &[&'static str]) -> Self {
        Self {
            name,
            consumes: consumes.to_vec(),
            seen: Mutex::new(Vec::new()),
        }
    }

    pub fn call_count(&self) -> usize {
        self.seen.lock().unwrap().len()
    }

    /// `(user id, envelope)` pairs in arrival order.
    pub fn seen(&self) -> Vec<(String, Arc<AttackData>)> {
        self.seen.lock().unwrap().clone()
    }
}

#[async_trait]
impl Attacker for StubAttacker {
    fn name(&self) -> &'static str {
        self.name
    }

    fn consumes(&self) -> &[&'static str] {
        &self.consumes
    }

    async fn ingest(&self, user: &UserRef, data: Arc<AttackData>) -> Result<(), WorkerError> {
        self.seen.lock().unwrap().push((user.id.clone(), data));
        Ok(())
    }
}

/// Counts invocations and then fails, or panics when `panics` is set.
pub struct FailingAttacker {
    pub name: &'static str,
    pub consumes: Vec<&'static str>,
    pub panics: bool,
    calls: AtomicUsize,
}

impl FailingAttacker {
    pub fn new(name: &'static str, consumes: &[&'static str]) -> Self {
        Self {
            name,
            consumes: consumes.to_vec(),
            panics: false,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn panicking(name: &'static str, consumes: &[&'static str]) -> Self {
        Self {
            panics: true,
            ..Self::new(name, consumes)
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Attacker for FailingAttacker {
    fn name(&self) -> &'static str {
        self.name
    }

    fn consumes(&self) -> &[&'static str] {
        &self.consumes
    }

    async fn ingest(&self, _user: &UserRef, _data: Arc<AttackData>) -> Result<(), WorkerError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.panics {
            panic!("simulated attacker panic");
        }
        Err(WorkerError::Internal(anyhow::anyhow!(
            "simulated attacker failure"
        )))
    }
}

/// Poll `condition` until it holds or `timeout` elapses.
pub async fn eventually(timeout: Duration, condition: impl Fn() -> bool) -> bool {
    let deadline = tokio::time::Instant::now() + timeout;
    while tokio::time::Instant::now() < deadline {
        if condition() {
            return true;
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
    condition()
}
