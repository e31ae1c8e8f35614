/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use std::fmt;

/// Fully qualified record key: namespace + set + user key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RecordKey {
    namespace: String,
    set_name: String,
    user_key: String,
}

impl RecordKey {
    pub fn new<N, S, K>(namespace: N, set_name: S, user_key: K) -> Self
    where
        N: Into<String>,
        S: Into<String>,
        K: Into<String>,
    {
        RecordKey {
            namespace: namespace.into(),
            set_name: set_name.into(),
            user_key: user_key.into(),
        }
    }

    #[inline]
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    #[inline]
    pub fn set_name(&self) -> &str {
        &self.set_name
    }

    #[inline]
    pub fn user_key(&self) -> &str {
        &self.user_key
    }
}

impl fmt::Display for RecordKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.namespace, self.set_name, self.user_key)
    }
}
