/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

mod types;
pub use types::{BatchWrite, BatchWriteStatus, FieldValue, FieldWrite, RecordKey, StoredRecord};

mod policy;
pub use policy::{BatchPolicy, WritePolicy};

mod error;
pub use error::KvClientError;

mod client;
pub use client::{KvClient, QueryFilter};

mod instrument;
pub use instrument::{CallMeter, MeterPolicy, MeterPolicyBuilder, MeteredClient};
