/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use std::str::FromStr;

use anyhow::anyhow;

/// The unit all time-based measurements are converted to before export.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TimeUnit {
    Nanoseconds,
    Microseconds,
    #[default]
    Milliseconds,
    Seconds,
}

impl TimeUnit {
    /// Convert a duration expressed in nanoseconds to this unit.
    pub fn from_nanos(&self, nanos: f64) -> f64 {
        match self {
            TimeUnit::Nanoseconds => nanos,
            TimeUnit::Microseconds => nanos / 1_000.0,
            TimeUnit::Milliseconds => nanos / 1_000_000.0,
            TimeUnit::Seconds => nanos / 1_000_000_000.0,
        }
    }
}

impl FromStr for TimeUnit {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ns" | "nanos" | "nanoseconds" => Ok(TimeUnit::Nanoseconds),
            "us" | "micros" | "microseconds" => Ok(TimeUnit::Microseconds),
            "ms" | "millis" | "milliseconds" => Ok(TimeUnit::Milliseconds),
            "s" | "seconds" => Ok(TimeUnit::Seconds),
            _ => Err(anyhow!("unsupported time unit {s}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn convert() {
        assert_eq!(TimeUnit::Milliseconds.from_nanos(1_500_000_000.0), 1500.0);
        assert_eq!(TimeUnit::Seconds.from_nanos(1_500_000_000.0), 1.5);
        assert_eq!(TimeUnit::Nanoseconds.from_nanos(42.0), 42.0);
        assert!(TimeUnit::Milliseconds.from_nanos(f64::NAN).is_nan());
    }

    #[test]
    fn parse() {
        assert_eq!(TimeUnit::from_str("ms").unwrap(), TimeUnit::Milliseconds);
        assert_eq!(TimeUnit::from_str("seconds").unwrap(), TimeUnit::Seconds);
        assert!(TimeUnit::from_str("fortnights").is_err());
    }
}
