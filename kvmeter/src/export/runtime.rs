/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use std::sync::Arc;
use std::time::Duration;

use log::debug;
use tokio::sync::mpsc;

use kvmeter_client::KvClient;

use crate::registry::MeterRegistry;

use super::KvExporter;

/// Stops the export loop after its current tick when dropped or on an
/// explicit [`stop`](ExportHandle::stop).
pub struct ExportHandle {
    quit_sender: mpsc::Sender<()>,
}

impl ExportHandle {
    pub fn stop(self) {
        drop(self.quit_sender);
    }
}

/// The step loop: publishes one tick per interval on the task it is
/// awaited on. Only one tick is ever in flight; the next interval fires
/// after the previous publish returned.
pub struct ExportRuntime<C: KvClient, R: MeterRegistry> {
    exporter: KvExporter<C>,
    registry: Arc<R>,
    step: Duration,
    quit_receiver: mpsc::Receiver<()>,
}

impl<C: KvClient, R: MeterRegistry> ExportRuntime<C, R> {
    pub fn new(
        exporter: KvExporter<C>,
        registry: Arc<R>,
        step: Duration,
    ) -> (Self, ExportHandle) {
        let (quit_sender, quit_receiver) = mpsc::channel(1);
        let runtime = ExportRuntime {
            exporter,
            registry,
            step,
            quit_receiver,
        };
        (runtime, ExportHandle { quit_sender })
    }

    pub async fn into_running(mut self) {
        let mut interval = tokio::time::interval(self.step);
        // the first interval tick completes immediately
        interval.tick().await;

        loop {
            tokio::select! {
                biased;

                _ = self.quit_receiver.recv() => break,
                _ = interval.tick() => {}
            }

            // awaited outside the select arm, so a stop request never
            // cancels an in-flight tick
            self.exporter.publish(self.registry.as_ref()).await;
        }
        debug!("export runtime stopped");
    }
}
