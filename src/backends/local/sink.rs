// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use async_trait::async_trait;
use std::sync::Mutex;

use crate::errors::WorkerError;
use crate::protocol::Finding;
use crate::traits::FindingSink;

/// Keeps findings in memory, in the order attackers recorded them.
#[derive(Debug, Default)]
pub struct MemoryFindingSink {
    findings: Mutex<Vec<Finding>>,
}

impl MemoryFindingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything recorded so far.
    pub fn findings(&self) -> Vec<Finding> {
        match self.findings.lock() {
            Ok(findings) => findings.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub fn len(&self) -> usize {
        match self.findings.lock() {
            Ok(findings) => findings.len(),
            Err(poisoned) => poisoned.into_inner().len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl FindingSink for MemoryFindingSink {
    async fn record(&self, finding: Finding) -> Result<(), WorkerError> {
        self.findings
            .lock()
            .map_err(|_| WorkerError::Sink("finding store lock poisoned".to_string()))?
            .push(finding);
        Ok(())
    }
}
