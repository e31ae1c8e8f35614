/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use kvmeter_client::{BatchWrite, FieldWrite, RecordKey};

use crate::config::KvExporterConfig;
use crate::naming::{NamingConvention, StoreNamingConvention};
use crate::types::{Meter, MeterKind, TimeUnit};

/// Maps one meter snapshot to one storage write record.
pub struct RecordMapper {
    convention: StoreNamingConvention,
    namespace: String,
    set_name: String,
    prefix: Option<String>,
    base_unit: TimeUnit,
}

impl RecordMapper {
    pub fn new(config: &KvExporterConfig) -> Self {
        Self::with_convention(config, StoreNamingConvention::default())
    }

    pub fn with_convention(config: &KvExporterConfig, convention: StoreNamingConvention) -> Self {
        RecordMapper {
            convention,
            namespace: config.namespace.clone(),
            set_name: config.set_name.clone(),
            prefix: config.prefix.clone(),
            base_unit: config.base_time_unit,
        }
    }

    fn normalized_name(&self, raw: &str) -> String {
        match &self.prefix {
            Some(prefix) => self.convention.meter_name(&format!("{prefix}.{raw}")),
            None => self.convention.meter_name(raw),
        }
    }

    /// Map a meter to a write record, or `None` if a non-finite scalar
    /// makes the record unsafe to store.
    ///
    /// The record key is `<normalized name>_<tick timestamp>` and does
    /// not include tags: two meters sharing a name in the same tick
    /// overwrite one another's record. Kept for compatibility with the
    /// established key scheme.
    pub fn map(&self, meter: &Meter, wall_time: i64) -> Option<BatchWrite> {
        let name = self.normalized_name(&meter.id.name);

        let mut fields = Vec::with_capacity(8 + meter.id.tags.len());
        fields.push(FieldWrite::new("type", meter.kind.type_str()));
        fields.push(FieldWrite::new("ts", wall_time));

        match &meter.kind {
            MeterKind::Counter { count } => {
                fields.push(FieldWrite::new("name", name.as_str()));
                fields.push(FieldWrite::new("count", *count));
            }
            MeterKind::Gauge { value } => {
                if !value.is_finite() {
                    return None;
                }
                fields.push(FieldWrite::new("name", name.as_str()));
                fields.push(FieldWrite::new("value", *value));
            }
            MeterKind::TimeGauge { value_nanos } => {
                let value = self.base_unit.from_nanos(*value_nanos);
                if !value.is_finite() {
                    return None;
                }
                fields.push(FieldWrite::new("name", name.as_str()));
                fields.push(FieldWrite::new("value", value));
            }
            MeterKind::FunctionCounter { count } => {
                if !count.is_finite() {
                    return None;
                }
                fields.push(FieldWrite::new("name", name.as_str()));
                fields.push(FieldWrite::new("count", *count));
            }
            MeterKind::Timer {
                count,
                max_nanos,
                mean_nanos,
                total_nanos,
            } => {
                fields.push(FieldWrite::new("name", name.as_str()));
                fields.push(FieldWrite::new("count", *count));
                fields.push(FieldWrite::new("max", self.base_unit.from_nanos(*max_nanos)));
                fields.push(FieldWrite::new("avg", self.base_unit.from_nanos(*mean_nanos)));
                fields.push(FieldWrite::new("sum", self.base_unit.from_nanos(*total_nanos)));
            }
            MeterKind::FunctionTimer {
                count,
                mean_nanos,
                total_nanos,
            } => {
                fields.push(FieldWrite::new("name", name.as_str()));
                fields.push(FieldWrite::new("count", *count));
                fields.push(FieldWrite::new("avg", self.base_unit.from_nanos(*mean_nanos)));
                fields.push(FieldWrite::new("sum", self.base_unit.from_nanos(*total_nanos)));
            }
            MeterKind::DistributionSummary {
                count,
                max,
                mean,
                total,
            } => {
                fields.push(FieldWrite::new("name", name.as_str()));
                fields.push(FieldWrite::new("count", *count));
                fields.push(FieldWrite::new("max", *max));
                fields.push(FieldWrite::new("avg", *mean));
                fields.push(FieldWrite::new("sum", *total));
            }
            MeterKind::LongTaskTimer {
                active_tasks,
                duration_nanos,
            } => {
                fields.push(FieldWrite::new("name", name.as_str()));
                fields.push(FieldWrite::new("activeTasks", *active_tasks));
                fields.push(FieldWrite::new(
                    "duration",
                    self.base_unit.from_nanos(*duration_nanos),
                ));
            }
            MeterKind::Custom { measurements } => {
                // custom meters drop per-field, not per-record
                for m in measurements {
                    if !m.value.is_finite() {
                        continue;
                    }
                    fields.push(FieldWrite::new(m.statistic.as_str(), m.value));
                }
            }
        }

        for tag in &meter.id.tags {
            fields.push(FieldWrite::new(
                format!("__{}", self.convention.tag_key(&tag.key)),
                self.convention.tag_value(&tag.value),
            ));
        }

        let key = RecordKey::new(
            self.namespace.as_str(),
            self.set_name.as_str(),
            format!("{name}_{wall_time}"),
        );
        Some(BatchWrite::new(key, fields))
    }
}
