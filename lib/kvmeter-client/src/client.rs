/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use crate::{
    BatchPolicy, BatchWrite, BatchWriteStatus, FieldValue, FieldWrite, KvClientError, RecordKey,
    StoredRecord, WritePolicy,
};

/// Equality filter for secondary-index queries.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryFilter {
    pub field: String,
    pub value: FieldValue,
}

impl QueryFilter {
    pub fn eq<N: Into<String>, V: Into<FieldValue>>(field: N, value: V) -> Self {
        QueryFilter {
            field: field.into(),
            value: value.into(),
        }
    }
}

/// The capability surface of the storage cluster client.
///
/// Implementations own transport, cluster discovery and retries; they
/// must be safe for concurrent use from multiple tasks, as application
/// call sites and the metrics publisher share one client instance.
pub trait KvClient: Send + Sync {
    fn put(
        &self,
        policy: &WritePolicy,
        key: &RecordKey,
        fields: &[FieldWrite],
    ) -> impl Future<Output = Result<(), KvClientError>> + Send;

    fn get(
        &self,
        key: &RecordKey,
    ) -> impl Future<Output = Result<Option<StoredRecord>, KvClientError>> + Send;

    /// Delete a record. Returns whether the record existed.
    fn delete(
        &self,
        policy: &WritePolicy,
        key: &RecordKey,
    ) -> impl Future<Output = Result<bool, KvClientError>> + Send;

    fn exists(
        &self,
        key: &RecordKey,
    ) -> impl Future<Output = Result<bool, KvClientError>> + Send;

    /// Reset the TTL of a record without touching its fields.
    fn touch(
        &self,
        policy: &WritePolicy,
        key: &RecordKey,
    ) -> impl Future<Output = Result<(), KvClientError>> + Send;

    /// Apply field writes and return the resulting record.
    fn operate(
        &self,
        policy: &WritePolicy,
        key: &RecordKey,
        fields: &[FieldWrite],
    ) -> impl Future<Output = Result<Option<StoredRecord>, KvClientError>> + Send;

    /// Submit many record writes as one atomic multi-key request; the
    /// write policy applies to every record in it.
    ///
    /// An `Ok` return means the request itself went through; individual
    /// records may still have failed, which the status reports.
    fn batch_write(
        &self,
        policy: &BatchPolicy,
        write_policy: &WritePolicy,
        records: Vec<BatchWrite>,
    ) -> impl Future<Output = Result<BatchWriteStatus, KvClientError>> + Send;

    fn batch_read(
        &self,
        policy: &BatchPolicy,
        keys: &[RecordKey],
    ) -> impl Future<Output = Result<Vec<Option<StoredRecord>>, KvClientError>> + Send;

    fn scan(
        &self,
        namespace: &str,
        set_name: &str,
    ) -> impl Future<Output = Result<Vec<(RecordKey, StoredRecord)>, KvClientError>> + Send;

    fn query(
        &self,
        namespace: &str,
        set_name: &str,
        filter: &QueryFilter,
    ) -> impl Future<Output = Result<Vec<(RecordKey, StoredRecord)>, KvClientError>> + Send;

    /// Admin: drop all records in a set.
    fn truncate(
        &self,
        namespace: &str,
        set_name: &str,
    ) -> impl Future<Output = Result<(), KvClientError>> + Send;

    /// Admin: run an info command against the cluster.
    fn info(&self, command: &str) -> impl Future<Output = Result<String, KvClientError>> + Send;
}
