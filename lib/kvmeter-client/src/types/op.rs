/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use super::{FieldValue, RecordKey};

/// One field assignment within a record write.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldWrite {
    pub name: String,
    pub value: FieldValue,
}

impl FieldWrite {
    pub fn new<N: Into<String>, V: Into<FieldValue>>(name: N, value: V) -> Self {
        FieldWrite {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// One record within a batched multi-key write: the target key and the
/// ordered field assignments to apply to it.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchWrite {
    pub key: RecordKey,
    pub fields: Vec<FieldWrite>,
}

impl BatchWrite {
    pub fn new(key: RecordKey, fields: Vec<FieldWrite>) -> Self {
        BatchWrite { key, fields }
    }

    pub fn field(&self, name: &str) -> Option<&FieldValue> {
        self.fields.iter().find(|f| f.name == name).map(|f| &f.value)
    }
}

/// Outcome of a batched write. The request as a whole may succeed while
/// individual records fail; callers check [`all_succeeded`] and use
/// [`failed`] for reporting.
///
/// [`all_succeeded`]: BatchWriteStatus::all_succeeded
/// [`failed`]: BatchWriteStatus::failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchWriteStatus {
    total: usize,
    failed: usize,
}

impl BatchWriteStatus {
    pub fn new(total: usize, failed: usize) -> Self {
        BatchWriteStatus { total, failed }
    }

    pub fn all_ok(total: usize) -> Self {
        BatchWriteStatus { total, failed: 0 }
    }

    #[inline]
    pub fn all_succeeded(&self) -> bool {
        self.failed == 0
    }

    #[inline]
    pub fn total(&self) -> usize {
        self.total
    }

    #[inline]
    pub fn failed(&self) -> usize {
        self.failed
    }
}

/// A record as returned by read operations.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StoredRecord {
    pub generation: u32,
    pub fields: Vec<FieldWrite>,
}

impl StoredRecord {
    pub fn field(&self, name: &str) -> Option<&FieldValue> {
        self.fields.iter().find(|f| f.name == name).map(|f| &f.value)
    }
}
