/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use chrono::{DateTime, Utc};

use kvmeter_client::{
    BatchPolicy, BatchWrite, BatchWriteStatus, FieldWrite, KvClient, KvClientError, QueryFilter,
    RecordKey, StoredRecord, WritePolicy,
};

use crate::registry::MeterRegistry;
use crate::types::Meter;

/// Registry stub returning a fixed snapshot and a fixed wall clock.
pub(crate) struct StaticRegistry {
    meters: Vec<Meter>,
}

impl StaticRegistry {
    pub(crate) const WALL_TIME_MILLIS: i64 = 1_700_000_000_000;

    pub(crate) fn new(meters: Vec<Meter>) -> Self {
        StaticRegistry { meters }
    }
}

impl MeterRegistry for StaticRegistry {
    fn wall_time(&self) -> DateTime<Utc> {
        DateTime::from_timestamp_millis(Self::WALL_TIME_MILLIS).unwrap()
    }

    fn meters(&self) -> Vec<Meter> {
        self.meters.clone()
    }
}

/// Client stub capturing submitted batches; can simulate a failing
/// first submission or per-record partial failures.
#[derive(Default)]
pub(crate) struct CapturingClient {
    batches: Mutex<Vec<Vec<BatchWrite>>>,
    calls: AtomicUsize,
    fail_first: bool,
    partial: bool,
}

impl CapturingClient {
    pub(crate) fn failing_first() -> Self {
        CapturingClient {
            fail_first: true,
            ..Default::default()
        }
    }

    pub(crate) fn partial_failures() -> Self {
        CapturingClient {
            partial: true,
            ..Default::default()
        }
    }

    pub(crate) fn batches(&self) -> Vec<Vec<BatchWrite>> {
        self.batches.lock().unwrap().clone()
    }

    pub(crate) fn call_count(&self) -> usize {
        self.calls.load(Ordering::Relaxed)
    }
}

impl KvClient for CapturingClient {
    async fn put(
        &self,
        _policy: &WritePolicy,
        _key: &RecordKey,
        _fields: &[FieldWrite],
    ) -> Result<(), KvClientError> {
        unimplemented!()
    }

    async fn get(&self, _key: &RecordKey) -> Result<Option<StoredRecord>, KvClientError> {
        unimplemented!()
    }

    async fn delete(
        &self,
        _policy: &WritePolicy,
        _key: &RecordKey,
    ) -> Result<bool, KvClientError> {
        unimplemented!()
    }

    async fn exists(&self, _key: &RecordKey) -> Result<bool, KvClientError> {
        unimplemented!()
    }

    async fn touch(&self, _policy: &WritePolicy, _key: &RecordKey) -> Result<(), KvClientError> {
        unimplemented!()
    }

    async fn operate(
        &self,
        _policy: &WritePolicy,
        _key: &RecordKey,
        _fields: &[FieldWrite],
    ) -> Result<Option<StoredRecord>, KvClientError> {
        unimplemented!()
    }

    async fn batch_write(
        &self,
        _policy: &BatchPolicy,
        _write_policy: &WritePolicy,
        records: Vec<BatchWrite>,
    ) -> Result<BatchWriteStatus, KvClientError> {
        let seq = self.calls.fetch_add(1, Ordering::Relaxed);
        if self.fail_first && seq == 0 {
            return Err(KvClientError::Timeout);
        }
        let total = records.len();
        self.batches.lock().unwrap().push(records);
        if self.partial {
            Ok(BatchWriteStatus::new(total, 1))
        } else {
            Ok(BatchWriteStatus::all_ok(total))
        }
    }

    async fn batch_read(
        &self,
        _policy: &BatchPolicy,
        _keys: &[RecordKey],
    ) -> Result<Vec<Option<StoredRecord>>, KvClientError> {
        unimplemented!()
    }

    async fn scan(
        &self,
        _namespace: &str,
        _set_name: &str,
    ) -> Result<Vec<(RecordKey, StoredRecord)>, KvClientError> {
        unimplemented!()
    }

    async fn query(
        &self,
        _namespace: &str,
        _set_name: &str,
        _filter: &QueryFilter,
    ) -> Result<Vec<(RecordKey, StoredRecord)>, KvClientError> {
        unimplemented!()
    }

    async fn truncate(&self, _namespace: &str, _set_name: &str) -> Result<(), KvClientError> {
        unimplemented!()
    }

    async fn info(&self, _command: &str) -> Result<String, KvClientError> {
        unimplemented!()
    }
}
