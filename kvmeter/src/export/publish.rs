/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use std::sync::Arc;

use log::{debug, warn};

use kvmeter_client::{BatchPolicy, BatchWrite, KvClient, WritePolicy};

use crate::config::KvExporterConfig;
use crate::naming::StoreNamingConvention;
use crate::registry::MeterRegistry;

use super::RecordMapper;

/// Publishes registry snapshots to the storage cluster in fixed-size
/// batches, one tick at a time.
pub struct KvExporter<C: KvClient> {
    client: Arc<C>,
    mapper: RecordMapper,
    batch_size: usize,
    batch_policy: BatchPolicy,
    write_policy: WritePolicy,
}

impl<C: KvClient> KvExporter<C> {
    pub fn new(config: &KvExporterConfig, client: Arc<C>) -> Self {
        Self::with_convention(config, client, StoreNamingConvention::default())
    }

    pub fn with_convention(
        config: &KvExporterConfig,
        client: Arc<C>,
        convention: StoreNamingConvention,
    ) -> Self {
        KvExporter {
            client,
            mapper: RecordMapper::with_convention(config, convention),
            batch_size: config.batch_size.max(1),
            batch_policy: config.batch_policy.clone(),
            write_policy: config.write_policy.clone(),
        }
    }

    /// Run one export tick.
    ///
    /// Batches are independent: a partial failure or a submission error
    /// in one batch is logged and the remaining batches still go out.
    /// No error ever propagates out of a tick.
    pub async fn publish<R: MeterRegistry + ?Sized>(&self, registry: &R) {
        let wall_time = registry.wall_time().timestamp_millis();
        let meters = registry.meters();
        debug!("publishing {} meters", meters.len());

        for batch in meters.chunks(self.batch_size) {
            let records: Vec<BatchWrite> = batch
                .iter()
                .filter_map(|m| self.mapper.map(m, wall_time))
                .collect();
            if records.is_empty() {
                continue;
            }

            match self
                .client
                .batch_write(&self.batch_policy, &self.write_policy, records)
                .await
            {
                Ok(status) => {
                    if !status.all_succeeded() {
                        warn!(
                            "failed to write {} of {} metric records",
                            status.failed(),
                            status.total()
                        );
                    }
                }
                Err(e) => {
                    warn!("failed to write metric records batch: {e}");
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::test_util::{CapturingClient, StaticRegistry};
    use crate::types::{Meter, MeterId, MeterKind, MeterTag};
    use kvmeter_client::FieldValue;

    fn counters(n: usize) -> Vec<Meter> {
        (0..n)
            .map(|i| {
                Meter::new(
                    MeterId::new(format!("counter.{i}"), Vec::new()),
                    MeterKind::Counter { count: i as f64 },
                )
            })
            .collect()
    }

    #[tokio::test]
    async fn batch_count_is_ceil_of_snapshot_over_batch_size() {
        let config = KvExporterConfig {
            batch_size: 2,
            ..Default::default()
        };
        let client = Arc::new(CapturingClient::default());
        let exporter = KvExporter::new(&config, client.clone());
        let registry = StaticRegistry::new(counters(5));

        exporter.publish(&registry).await;

        let batches = client.batches();
        assert_eq!(batches.len(), 3);
        assert_eq!(batches[0].len(), 2);
        assert_eq!(batches[1].len(), 2);
        assert_eq!(batches[2].len(), 1);
    }

    #[tokio::test]
    async fn submission_error_does_not_block_later_batches() {
        let config = KvExporterConfig {
            batch_size: 1,
            ..Default::default()
        };
        let client = Arc::new(CapturingClient::failing_first());
        let exporter = KvExporter::new(&config, client.clone());
        let registry = StaticRegistry::new(counters(2));

        exporter.publish(&registry).await;

        // first call failed, second one was still made
        assert_eq!(client.call_count(), 2);
        assert_eq!(client.batches().len(), 1);
    }

    #[tokio::test]
    async fn partial_failure_continues() {
        let config = KvExporterConfig {
            batch_size: 1,
            ..Default::default()
        };
        let client = Arc::new(CapturingClient::partial_failures());
        let exporter = KvExporter::new(&config, client.clone());
        let registry = StaticRegistry::new(counters(3));

        exporter.publish(&registry).await;

        assert_eq!(client.batches().len(), 3);
    }

    #[tokio::test]
    async fn dropped_records_excluded_from_batches() {
        let config = KvExporterConfig {
            batch_size: 10,
            ..Default::default()
        };
        let client = Arc::new(CapturingClient::default());
        let exporter = KvExporter::new(&config, client.clone());
        let registry = StaticRegistry::new(vec![
            Meter::new(
                MeterId::new("ok", Vec::new()),
                MeterKind::Gauge { value: 1.0 },
            ),
            Meter::new(
                MeterId::new("bad", Vec::new()),
                MeterKind::Gauge { value: f64::NAN },
            ),
        ]);

        exporter.publish(&registry).await;

        let batches = client.batches();
        assert_eq!(batches.len(), 1);
        assert_eq!(batches[0].len(), 1);
        assert!(batches[0][0].key.user_key().starts_with("ok_"));
    }

    #[tokio::test]
    async fn all_records_dropped_skips_client_call() {
        let client = Arc::new(CapturingClient::default());
        let exporter = KvExporter::new(&KvExporterConfig::default(), client.clone());
        let registry = StaticRegistry::new(vec![Meter::new(
            MeterId::new("bad", Vec::new()),
            MeterKind::Gauge { value: f64::NAN },
        )]);

        exporter.publish(&registry).await;

        assert_eq!(client.call_count(), 0);
    }

    #[tokio::test]
    async fn end_to_end_normalized_counter() {
        let client = Arc::new(CapturingClient::default());
        let exporter = KvExporter::new(&KvExporterConfig::default(), client.clone());
        let registry = StaticRegistry::new(vec![Meter::new(
            MeterId::new(
                "requests (total)",
                vec![MeterTag::new("env", "prod,east")],
            ),
            MeterKind::Counter { count: 9.0 },
        )]);

        exporter.publish(&registry).await;

        let batches = client.batches();
        assert_eq!(batches.len(), 1);
        let record = &batches[0][0];
        for c in ['(', ')', ',', '{', '}', ':', '=', '[', ']'] {
            assert!(!record.key.user_key().contains(c));
        }
        let ts = StaticRegistry::WALL_TIME_MILLIS;
        assert_eq!(record.key.user_key(), format!("requests _total__{ts}"));
        assert_eq!(
            record.field("__env"),
            Some(&FieldValue::Text("prod_east".into()))
        );
        assert_eq!(record.field("count"), Some(&FieldValue::Double(9.0)));
    }
}
