/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use std::fmt;

/// A single field value as accepted by the storage cluster.
///
/// Numeric variants map to the cluster's integer/double field types,
/// `Text` to its string field type.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Double(f64),
    Signed(i64),
    Unsigned(u64),
    Text(String),
}

impl FieldValue {
    /// Whether this value may be written as-is.
    ///
    /// Integer and text values always are; doubles only when finite,
    /// as the cluster rejects NaN and infinite numerics.
    pub fn is_storable(&self) -> bool {
        match self {
            FieldValue::Double(f) => f.is_finite(),
            FieldValue::Signed(_) | FieldValue::Unsigned(_) | FieldValue::Text(_) => true,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            FieldValue::Double(f) => Some(*f),
            FieldValue::Signed(i) => Some(*i as f64),
            FieldValue::Unsigned(u) => Some(*u as f64),
            FieldValue::Text(_) => None,
        }
    }
}

impl From<f64> for FieldValue {
    fn from(v: f64) -> Self {
        FieldValue::Double(v)
    }
}

impl From<i64> for FieldValue {
    fn from(v: i64) -> Self {
        FieldValue::Signed(v)
    }
}

impl From<u64> for FieldValue {
    fn from(v: u64) -> Self {
        FieldValue::Unsigned(v)
    }
}

impl From<String> for FieldValue {
    fn from(v: String) -> Self {
        FieldValue::Text(v)
    }
}

impl From<&str> for FieldValue {
    fn from(v: &str) -> Self {
        FieldValue::Text(v.to_string())
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Double(v) => fmt::Display::fmt(ryu::Buffer::new().format(*v), f),
            FieldValue::Signed(i) => fmt::Display::fmt(itoa::Buffer::new().format(*i), f),
            FieldValue::Unsigned(u) => fmt::Display::fmt(itoa::Buffer::new().format(*u), f),
            FieldValue::Text(s) => f.write_str(s),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storable() {
        assert!(FieldValue::Double(1.5).is_storable());
        assert!(!FieldValue::Double(f64::NAN).is_storable());
        assert!(!FieldValue::Double(f64::INFINITY).is_storable());
        assert!(FieldValue::Signed(-1).is_storable());
        assert!(FieldValue::Unsigned(0).is_storable());
        assert!(FieldValue::Text(String::new()).is_storable());
    }

    #[test]
    fn numeric_widening() {
        assert_eq!(FieldValue::Double(1.5).as_f64(), Some(1.5));
        assert_eq!(FieldValue::Signed(-3).as_f64(), Some(-3.0));
        assert_eq!(FieldValue::Unsigned(7).as_f64(), Some(7.0));
        assert_eq!(FieldValue::Text("7".to_string()).as_f64(), None);
    }

    #[test]
    fn display() {
        assert_eq!(FieldValue::Unsigned(10).to_string(), "10");
        assert_eq!(FieldValue::Signed(-10).to_string(), "-10");
        assert_eq!(FieldValue::Double(1.0).to_string(), "1.0");
        assert_eq!(FieldValue::Text("abc".to_string()).to_string(), "abc");
    }
}
