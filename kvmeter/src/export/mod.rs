/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

mod record;
pub use record::RecordMapper;

mod publish;
pub use publish::KvExporter;

mod runtime;
pub use runtime::{ExportHandle, ExportRuntime};

#[cfg(test)]
pub(crate) mod test_util;
