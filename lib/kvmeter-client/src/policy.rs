/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use std::time::Duration;

/// Per-record write knobs, passed through to the storage client
/// unmodified.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WritePolicy {
    pub total_timeout: Option<Duration>,
    /// Record TTL. `None` keeps the server default.
    pub expiration: Option<Duration>,
    pub durable_delete: bool,
    /// Store the user key with the record in addition to its digest.
    pub send_key: bool,
}

/// Batch request knobs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchPolicy {
    pub total_timeout: Option<Duration>,
    /// Max nodes queried in parallel for one batch request. 0 means no
    /// limit.
    pub max_concurrent_nodes: usize,
    pub respond_all_keys: bool,
}
