/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

mod unit;
pub use unit::TimeUnit;

mod meter;
pub use meter::{Measurement, Meter, MeterId, MeterKind, MeterTag};
