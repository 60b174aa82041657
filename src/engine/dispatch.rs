// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::sync::Arc;
use std::time::Instant;
use tokio_util::sync::CancellationToken;

use super::pipeline::{DriverReport, PipelineSettings};
use crate::bus::{EnrichedEvent, EventBus};
use crate::errors::{PipelineError, WorkerError, WorkerKind};
use crate::observability::messages::pipeline::{
    AttackerCompleted, AttackerFailed, DriverStarted, DriverStopped, ItemDispatched,
};
use crate::observability::messages::StructuredLog;
use crate::registry::WorkerRegistry;
use crate::traits::Attacker;

const DRIVER: &str = "dispatch";

/// Consume `enriched` until cancelled, handing each item to every attacker
/// that consumes its tag.
pub async fn run_dispatch_driver(
    registry: Arc<WorkerRegistry>,
    bus: EventBus,
    settings: PipelineSettings,
    cancel: CancellationToken,
) -> DriverReport {
    DriverStarted {
        driver: DRIVER,
        wait_timeout: settings.wait_timeout,
    }
    .log();

    let mut report = DriverReport::default();
    let mut enriched = bus.enriched().consume(settings.wait_timeout);

    while !cancel.is_cancelled() {
        let Ok(event) = enriched.recv().await else {
            continue;
        };
        report.processed += 1;
        if dispatch_one(&registry, event).await > 0 {
            report.failed += 1;
        }
    }

    DriverStopped {
        driver: DRIVER,
        processed: report.processed,
        failed: report.failed,
    }
    .log();
    report
}

/// Run every assigned attacker on its own task and wait for all of them.
/// Returns how many failed or panicked.
async fn dispatch_one(registry: &WorkerRegistry, event: EnrichedEvent) -> usize {
    let EnrichedEvent {
        data,
        enricher: tag,
        user,
    } = event;
    let correlation_id = data.correlation_id();

    let attackers: Vec<Arc<dyn Attacker>> = registry.attackers_for(&tag).cloned().collect();
    ItemDispatched {
        tag: &tag,
        attacker_count: attackers.len(),
        correlation_id,
    }
    .log();

    let mut tasks = Vec::with_capacity(attackers.len());
    for attacker in attackers {
        let name = attacker.name();
        let user = user.clone();
        let data = Arc::clone(&data);
        let task = tokio::spawn(async move {
            let started = Instant::now();
            attacker.ingest(&user, data).await.map(|()| started.elapsed())
        });
        tasks.push((name, task));
    }

    let mut failed = 0;
    for (name, task) in tasks {
        let error = match task.await {
            Ok(Ok(duration)) => {
                AttackerCompleted {
                    attacker: name,
                    tag: &tag,
                    duration,
                }
                .log();
                continue;
            }
            Ok(Err(source)) => execution_failure(name, &tag, source),
            Err(join_error) if join_error.is_panic() => PipelineError::WorkerPanicked {
                kind: WorkerKind::Attacker,
                worker: name.to_string(),
                tag: tag.clone(),
            },
            Err(join_error) => {
                execution_failure(name, &tag, anyhow::Error::new(join_error).into())
            }
        };

        failed += 1;
        AttackerFailed {
            attacker: name,
            tag: &tag,
            correlation_id,
            error: &error,
        }
        .log();
    }
    failed
}

fn execution_failure(attacker: &str, tag: &str, source: WorkerError) -> PipelineError {
    PipelineError::WorkerExecution {
        kind: WorkerKind::Attacker,
        worker: attacker.to_string(),
        tag: tag.to_string(),
        source,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backends::stub::{eventually, FailingAttacker, StubAttacker};
    use crate::protocol::{AttackData, HeaderMap, HttpRequestData, UserRef};
    use std::time::Duration;

    fn enriched(tag: &str, url: &str) -> EnrichedEvent {
        let request = HttpRequestData::new("GET", url, HeaderMap::new());
        EnrichedEvent {
            data: Arc::new(AttackData::new(request, vec![])),
            enricher: tag.to_string(),
            user: UserRef::new("alice"),
        }
    }

    #[tokio::test]
    async fn test_only_matching_attackers_run() {
        let wanted = Arc::new(StubAttacker::new("wanted", &["default-enricher"]));
        let other = Arc::new(StubAttacker::new("other", &["param-enricher"]));
        let mut registry = WorkerRegistry::new();
        registry.register_attacker(wanted.clone()).unwrap();
        registry.register_attacker(other.clone()).unwrap();

        let failures = dispatch_one(&registry, enriched("default-enricher", "http://example.com/")).await;

        assert_eq!(failures, 0);
        assert_eq!(wanted.call_count(), 1);
        assert_eq!(other.call_count(), 0);
    }

    #[tokio::test]
    async fn test_failing_and_panicking_attackers_do_not_suppress_others() {
        let failing = Arc::new(FailingAttacker::new("failing", &["default-enricher"]));
        let panicking = Arc::new(FailingAttacker::panicking("panicking", &["default-enricher"]));
        let healthy = Arc::new(StubAttacker::new("healthy", &["default-enricher"]));
        let mut registry = WorkerRegistry::new();
        registry.register_attacker(failing.clone()).unwrap();
        registry.register_attacker(panicking.clone()).unwrap();
        registry.register_attacker(healthy.clone()).unwrap();

        let failures = dispatch_one(&registry, enriched("default-enricher", "http://example.com/")).await;

        assert_eq!(failures, 2);
        assert_eq!(failing.call_count(), 1);
        assert_eq!(panicking.call_count(), 1);
        assert_eq!(healthy.call_count(), 1);
    }

    #[tokio::test]
    async fn test_driver_processes_items_in_order_until_cancelled() {
        let attacker = Arc::new(StubAttacker::new("recorder", &["default-enricher"]));
        let mut registry = WorkerRegistry::new();
        registry.register_attacker(attacker.clone()).unwrap();

        let bus = EventBus::new();
        let cancel = CancellationToken::new();
        let settings = PipelineSettings {
            wait_timeout: Duration::from_millis(10),
            ..PipelineSettings::default()
        };
        let driver = tokio::spawn(run_dispatch_driver(
            Arc::new(registry),
            bus.clone(),
            settings,
            cancel.clone(),
        ));

        for i in 0..5 {
            bus.enriched()
                .publish(enriched("default-enricher", &format!("http://example.com/{}", i)));
        }
        assert!(eventually(Duration::from_secs(2), || attacker.call_count() == 5).await);

        cancel.cancel();
        let report = driver.await.unwrap();
        assert_eq!(report, DriverReport { processed: 5, failed: 0 });

        let urls: Vec<String> = attacker
            .seen()
            .iter()
            .map(|(_, data)| data.request().url().to_string())
            .collect();
        let expected: Vec<String> = (0..5).map(|i| format!("http://example.com/{}", i)).collect();
        assert_eq!(urls, expected);
    }
}
