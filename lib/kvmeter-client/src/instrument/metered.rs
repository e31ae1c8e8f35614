/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use std::time::Instant;

use crate::{
    BatchPolicy, BatchWrite, BatchWriteStatus, CallMeter, FieldWrite, KvClient, KvClientError,
    MeterPolicy, QueryFilter, RecordKey, StoredRecord, WritePolicy,
};

/// Pass-through decorator over a [`KvClient`] that emits call-count,
/// latency and error metrics for every operation.
///
/// Arguments, return values and errors are forwarded unchanged.
pub struct MeteredClient<C, M> {
    inner: C,
    meter: M,
    policy: MeterPolicy,
}

impl<C: KvClient, M: CallMeter> MeteredClient<C, M> {
    pub fn new(inner: C, meter: M) -> Self {
        Self::with_policy(inner, meter, MeterPolicy::default())
    }

    pub fn with_policy(inner: C, meter: M, policy: MeterPolicy) -> Self {
        MeteredClient {
            inner,
            meter,
            policy,
        }
    }

    pub fn into_inner(self) -> C {
        self.inner
    }

    async fn observe<T>(
        &self,
        method: &'static str,
        fut: impl Future<Output = Result<T, KvClientError>>,
    ) -> Result<T, KvClientError> {
        if self.policy.meter_calls() {
            self.meter.record_call(method);
        }
        let start = self.policy.meter_latency().then(Instant::now);
        let r = fut.await;
        if let Some(start) = start {
            self.meter.record_latency(method, start.elapsed());
        }
        if r.is_err() && self.policy.meter_errors() {
            self.meter.record_error(method);
        }
        r
    }
}

impl<C: KvClient, M: CallMeter> KvClient for MeteredClient<C, M> {
    async fn put(
        &self,
        policy: &WritePolicy,
        key: &RecordKey,
        fields: &[FieldWrite],
    ) -> Result<(), KvClientError> {
        self.observe("put", self.inner.put(policy, key, fields)).await
    }

    async fn get(&self, key: &RecordKey) -> Result<Option<StoredRecord>, KvClientError> {
        self.observe("get", self.inner.get(key)).await
    }

    async fn delete(&self, policy: &WritePolicy, key: &RecordKey) -> Result<bool, KvClientError> {
        self.observe("delete", self.inner.delete(policy, key)).await
    }

    async fn exists(&self, key: &RecordKey) -> Result<bool, KvClientError> {
        self.observe("exists", self.inner.exists(key)).await
    }

    async fn touch(&self, policy: &WritePolicy, key: &RecordKey) -> Result<(), KvClientError> {
        self.observe("touch", self.inner.touch(policy, key)).await
    }

    async fn operate(
        &self,
        policy: &WritePolicy,
        key: &RecordKey,
        fields: &[FieldWrite],
    ) -> Result<Option<StoredRecord>, KvClientError> {
        self.observe("operate", self.inner.operate(policy, key, fields))
            .await
    }

    async fn batch_write(
        &self,
        policy: &BatchPolicy,
        write_policy: &WritePolicy,
        records: Vec<BatchWrite>,
    ) -> Result<BatchWriteStatus, KvClientError> {
        self.observe(
            "batch_write",
            self.inner.batch_write(policy, write_policy, records),
        )
        .await
    }

    async fn batch_read(
        &self,
        policy: &BatchPolicy,
        keys: &[RecordKey],
    ) -> Result<Vec<Option<StoredRecord>>, KvClientError> {
        self.observe("batch_read", self.inner.batch_read(policy, keys))
            .await
    }

    async fn scan(
        &self,
        namespace: &str,
        set_name: &str,
    ) -> Result<Vec<(RecordKey, StoredRecord)>, KvClientError> {
        self.observe("scan", self.inner.scan(namespace, set_name)).await
    }

    async fn query(
        &self,
        namespace: &str,
        set_name: &str,
        filter: &QueryFilter,
    ) -> Result<Vec<(RecordKey, StoredRecord)>, KvClientError> {
        self.observe("query", self.inner.query(namespace, set_name, filter))
            .await
    }

    async fn truncate(&self, namespace: &str, set_name: &str) -> Result<(), KvClientError> {
        self.observe("truncate", self.inner.truncate(namespace, set_name))
            .await
    }

    async fn info(&self, command: &str) -> Result<String, KvClientError> {
        self.observe("info", self.inner.info(command)).await
    }
}
