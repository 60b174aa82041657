// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use anyhow::Context;
use serde::Deserialize;
use std::env;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::sync::Arc;

use attack_bus::backends::local::MemoryFindingSink;
use attack_bus::bus::EventBus;
use attack_bus::config::{load_and_validate_config, RuntimeBuilder};
use attack_bus::engine::{Ingestor, Pipeline};
use attack_bus::observability::init_tracing;
use attack_bus::protocol::UserRef;

/// One line of a requests file.
#[derive(Deserialize)]
struct Submission {
    request: serde_json::Value,
    user: UserRef,
    #[serde(default)]
    enricher: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 || args.len() > 3 {
        eprintln!("Usage: {} <config.yaml|config.toml> [requests.jsonl]", args[0]);
        eprintln!("Example: {} configs/pipeline.yaml demos/requests.jsonl", args[0]);
        std::process::exit(1);
    }

    let config = load_and_validate_config(&args[1])?;
    init_tracing(&config.logging.level);

    let sink = Arc::new(MemoryFindingSink::new());
    let (registry, settings) = RuntimeBuilder::from_config(&config, sink.clone())?;

    println!("🛰️  attack-bus");
    println!("═══════════════════════════════════");
    println!("Config: {}", args[1]);
    println!("Enrichers: {}", registry.enricher_names().join(", "));
    println!("Attackers: {}", registry.attacker_names().join(", "));
    println!();

    let pipeline = Pipeline::start(registry, EventBus::new(), settings)?;

    if let Some(requests) = args.get(2) {
        let submitted = submit_file(pipeline.ingestor(), requests)?;
        println!("📥 Submitted {} requests from {}", submitted, requests);
    }

    println!("Running. Press Ctrl-C to stop.");
    tokio::signal::ctrl_c()
        .await
        .context("failed to listen for Ctrl-C")?;

    let report = pipeline.shutdown().await;
    println!();
    println!(
        "📊 Enrichment: {} processed, {} failed",
        report.enrichment.processed, report.enrichment.failed
    );
    println!(
        "📊 Dispatch:   {} processed, {} failed",
        report.dispatch.processed, report.dispatch.failed
    );

    let findings = sink.findings();
    println!("🔎 {} findings", findings.len());
    for finding in &findings {
        println!("{}", serde_json::to_string(finding)?);
    }

    Ok(())
}

/// Submit every non-blank line of a JSONL file. A malformed line is reported
/// and skipped.
fn submit_file(ingestor: &Ingestor, path: &str) -> anyhow::Result<usize> {
    let file = File::open(path).with_context(|| format!("failed to open '{}'", path))?;
    let mut submitted = 0;

    for (index, line) in BufReader::new(file).lines().enumerate() {
        let line = line.with_context(|| format!("failed to read '{}'", path))?;
        if line.trim().is_empty() {
            continue;
        }

        match serde_json::from_str::<Submission>(&line) {
            Ok(submission) => {
                ingestor.submit(
                    submission.request,
                    submission.user,
                    submission.enricher.as_deref(),
                );
                submitted += 1;
            }
            Err(e) => eprintln!("❌ {}:{}: skipping malformed line: {}", path, index + 1, e),
        }
    }

    Ok(submitted)
}
