/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use std::time::Duration;

use anyhow::anyhow;

use kvmeter_client::{BatchPolicy, WritePolicy};

use crate::types::TimeUnit;

#[cfg(feature = "yaml")]
mod yaml;

const DEFAULT_BATCH_SIZE: usize = 200;
const DEFAULT_STEP: Duration = Duration::from_secs(60);

/// Configuration for the export pipeline. Policy structs are passed
/// through to the storage client unmodified.
#[derive(Debug, Clone, PartialEq)]
pub struct KvExporterConfig {
    /// Storage cluster seed endpoints, `host:port`.
    pub hosts: Vec<String>,
    pub namespace: String,
    pub set_name: String,
    /// Prepended to every meter name before naming normalization.
    pub prefix: Option<String>,
    /// Max records per batch submission.
    pub batch_size: usize,
    /// Export interval.
    pub step: Duration,
    pub base_time_unit: TimeUnit,
    pub write_policy: WritePolicy,
    pub batch_policy: BatchPolicy,
}

impl Default for KvExporterConfig {
    fn default() -> Self {
        KvExporterConfig {
            hosts: vec!["127.0.0.1:3000".to_string()],
            namespace: "test".to_string(),
            set_name: "metrics".to_string(),
            prefix: None,
            batch_size: DEFAULT_BATCH_SIZE,
            step: DEFAULT_STEP,
            base_time_unit: TimeUnit::default(),
            write_policy: WritePolicy::default(),
            batch_policy: BatchPolicy::default(),
        }
    }
}

impl KvExporterConfig {
    pub fn check(&self) -> anyhow::Result<()> {
        if self.hosts.is_empty() {
            return Err(anyhow!("no storage endpoint set"));
        }
        if self.namespace.is_empty() {
            return Err(anyhow!("namespace is empty"));
        }
        if self.set_name.is_empty() {
            return Err(anyhow!("set name is empty"));
        }
        if self.batch_size == 0 {
            return Err(anyhow!("batch size should be positive"));
        }
        if self.step.is_zero() {
            return Err(anyhow!("step interval should be positive"));
        }
        Ok(())
    }
}
