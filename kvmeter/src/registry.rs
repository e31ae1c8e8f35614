/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use chrono::{DateTime, Utc};

use crate::Meter;

/// The pull boundary towards the in-process metrics registry.
///
/// The registry owns meter creation and the counter/timer math; this
/// crate only reads snapshots from it, once per export tick.
pub trait MeterRegistry: Send + Sync {
    /// Wall-clock timestamp stamped on every record of a tick.
    fn wall_time(&self) -> DateTime<Utc> {
        Utc::now()
    }

    /// Live-read snapshot of all currently registered meters.
    fn meters(&self) -> Vec<Meter>;
}
