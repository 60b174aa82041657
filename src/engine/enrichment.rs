// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::sync::Arc;
use std::time::Instant;
use tokio_util::sync::CancellationToken;

use super::pipeline::{DriverReport, PipelineSettings};
use crate::bus::{EnrichedEvent, EventBus, RawEvent};
use crate::errors::{PipelineError, WorkerError, WorkerKind};
use crate::observability::messages::pipeline::{
    DriverStarted, DriverStopped, ItemDropped, ItemEnriched,
};
use crate::observability::messages::StructuredLog;
use crate::protocol::HttpRequestData;
use crate::registry::WorkerRegistry;
use crate::traits::Enricher;

const DRIVER: &str = "enrichment";

/// Consume `raw` until cancelled, publishing one envelope onto `enriched` for
/// every item that enriches successfully.
///
/// Items are handled one at a time, so `enriched` keeps the order of `raw`.
/// A failing item is logged and dropped; only cancellation ends the loop.
pub async fn run_enrichment_driver(
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
    let mut raw = bus.raw().consume(settings.wait_timeout);

    while !cancel.is_cancelled() {
        let Ok(event) = raw.recv().await else {
            continue;
        };
        report.processed += 1;

        let tag = event.enricher.clone();
        let correlation_id = event.correlation_id.clone();
        if let Err(error) = enrich_one(&registry, &bus, event).await {
            report.failed += 1;
            ItemDropped {
                driver: DRIVER,
                tag: &tag,
                correlation_id: correlation_id.as_deref(),
                error: &error,
            }
            .log();
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

async fn enrich_one(
    registry: &WorkerRegistry,
    bus: &EventBus,
    event: RawEvent,
) -> Result<(), PipelineError> {
    let RawEvent {
        payload,
        user,
        enricher: tag,
        correlation_id,
    } = event;

    let enricher: Arc<dyn Enricher> = registry
        .enricher(&tag)
        .cloned()
        .ok_or_else(|| PipelineError::UnknownWorker {
            kind: WorkerKind::Enricher,
            name: tag.clone(),
        })?;

    let request: HttpRequestData =
        serde_json::from_value(payload).map_err(|source| PipelineError::MalformedPayload {
            enricher: tag.clone(),
            source,
        })?;

    // Run the worker on its own task so a panic stays with this item.
    let started = Instant::now();
    let task_user = user.clone();
    let task = tokio::spawn(async move { enricher.enrich(request, &task_user).await });

    let data = match task.await {
        Ok(Ok(data)) => data,
        Ok(Err(source)) => return Err(execution_failure(&tag, source)),
        Err(join_error) if join_error.is_panic() => {
            return Err(PipelineError::WorkerPanicked {
                kind: WorkerKind::Enricher,
                worker: tag.clone(),
                tag,
            })
        }
        Err(join_error) => return Err(execution_failure(&tag, anyhow::Error::new(join_error).into())),
    };

    // Keep the submission's correlation id unless the enricher set its own.
    let data = match correlation_id {
        Some(id) if data.correlation_id().is_none() => data.with_correlation_id(Some(id)),
        _ => data,
    };

    ItemEnriched {
        enricher: &tag,
        locator_count: data.locators().len(),
        correlation_id: data.correlation_id(),
        duration: started.elapsed(),
    }
    .log();

    bus.enriched().publish(EnrichedEvent {
        data: Arc::new(data),
        enricher: tag,
        user,
    });
    Ok(())
}

fn execution_failure(tag: &str, source: WorkerError) -> PipelineError {
    PipelineError::WorkerExecution {
        kind: WorkerKind::Enricher,
        worker: tag.to_string(),
        tag: tag.to_string(),
        source,
    }
}
