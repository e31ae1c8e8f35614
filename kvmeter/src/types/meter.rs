/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

/// A key-value label attached to a meter's identity.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MeterTag {
    pub key: String,
    pub value: String,
}

impl MeterTag {
    pub fn new<K: Into<String>, V: Into<String>>(key: K, value: V) -> Self {
        MeterTag {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Meter identity: raw name plus ordered tag list. Immutable after
/// creation; naming normalization happens at export time.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MeterId {
    pub name: String,
    pub tags: Vec<MeterTag>,
}

impl MeterId {
    pub fn new<N: Into<String>>(name: N, tags: Vec<MeterTag>) -> Self {
        MeterId {
            name: name.into(),
            tags,
        }
    }
}

/// One statistic-tagged value of a custom meter.
#[derive(Debug, Clone, PartialEq)]
pub struct Measurement {
    pub statistic: String,
    pub value: f64,
}

impl Measurement {
    pub fn new<S: Into<String>>(statistic: S, value: f64) -> Self {
        Measurement {
            statistic: statistic.into(),
            value,
        }
    }
}

/// The measurements of one meter as read at export time.
///
/// Time-based measurements are carried in nanoseconds and converted to
/// the configured base time unit during mapping.
#[derive(Debug, Clone, PartialEq)]
pub enum MeterKind {
    Counter {
        count: f64,
    },
    Gauge {
        value: f64,
    },
    Timer {
        count: u64,
        max_nanos: f64,
        mean_nanos: f64,
        total_nanos: f64,
    },
    DistributionSummary {
        count: u64,
        max: f64,
        mean: f64,
        total: f64,
    },
    LongTaskTimer {
        active_tasks: u64,
        duration_nanos: f64,
    },
    TimeGauge {
        value_nanos: f64,
    },
    FunctionCounter {
        count: f64,
    },
    FunctionTimer {
        count: f64,
        mean_nanos: f64,
        total_nanos: f64,
    },
    /// Catch-all for meter shapes not enumerated above.
    Custom {
        measurements: Vec<Measurement>,
    },
}

impl MeterKind {
    pub fn type_str(&self) -> &'static str {
        match self {
            MeterKind::Counter { .. } => "Counter",
            MeterKind::Gauge { .. } => "Gauge",
            MeterKind::Timer { .. } => "Timer",
            MeterKind::DistributionSummary { .. } => "DistributionSummary",
            MeterKind::LongTaskTimer { .. } => "LongTaskTimer",
            MeterKind::TimeGauge { .. } => "TimeGauge",
            MeterKind::FunctionCounter { .. } => "FunctionCounter",
            MeterKind::FunctionTimer { .. } => "FunctionTimer",
            MeterKind::Custom { .. } => "Custom",
        }
    }
}

/// A meter snapshot handed over by the registry at one export tick.
#[derive(Debug, Clone, PartialEq)]
pub struct Meter {
    pub id: MeterId,
    pub kind: MeterKind,
}

impl Meter {
    pub fn new(id: MeterId, kind: MeterKind) -> Self {
        Meter { id, kind }
    }
}
