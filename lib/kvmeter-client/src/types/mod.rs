/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

mod value;
pub use value::FieldValue;

mod key;
pub use key::RecordKey;

mod op;
pub use op::{BatchWrite, BatchWriteStatus, FieldWrite, StoredRecord};
