/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

mod types;
pub use types::{Measurement, Meter, MeterId, MeterKind, MeterTag, TimeUnit};

pub mod naming;

mod registry;
pub use registry::MeterRegistry;

mod config;
pub use config::KvExporterConfig;

mod export;
pub use export::{ExportHandle, ExportRuntime, KvExporter, RecordMapper};
