/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use std::time::Duration;

mod metered;
pub use metered::MeteredClient;

/// Receiver for client call metrics.
///
/// Implementations are expected to hand the values to a metrics
/// registry. They must not panic: a metering failure may never change
/// the outcome of the instrumented operation.
pub trait CallMeter: Send + Sync {
    fn record_call(&self, method: &'static str);
    fn record_latency(&self, method: &'static str, elapsed: Duration);
    fn record_error(&self, method: &'static str);
}

/// Toggles for the three independent metering dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MeterPolicy {
    meter_calls: bool,
    meter_latency: bool,
    meter_errors: bool,
}

impl Default for MeterPolicy {
    fn default() -> Self {
        MeterPolicy {
            meter_calls: true,
            meter_latency: true,
            meter_errors: true,
        }
    }
}

impl MeterPolicy {
    pub fn builder() -> MeterPolicyBuilder {
        MeterPolicyBuilder::default()
    }

    #[inline]
    pub fn meter_calls(&self) -> bool {
        self.meter_calls
    }

    #[inline]
    pub fn meter_latency(&self) -> bool {
        self.meter_latency
    }

    #[inline]
    pub fn meter_errors(&self) -> bool {
        self.meter_errors
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MeterPolicyBuilder {
    meter_calls: bool,
    meter_latency: bool,
    meter_errors: bool,
}

impl MeterPolicyBuilder {
    pub fn meter_calls(mut self, enable: bool) -> Self {
        self.meter_calls = enable;
        self
    }

    pub fn meter_latency(mut self, enable: bool) -> Self {
        self.meter_latency = enable;
        self
    }

    pub fn meter_errors(mut self, enable: bool) -> Self {
        self.meter_errors = enable;
        self
    }

    pub fn build(self) -> MeterPolicy {
        MeterPolicy {
            meter_calls: self.meter_calls,
            meter_latency: self.meter_latency,
            meter_errors: self.meter_errors,
        }
    }
}
