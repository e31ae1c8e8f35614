/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum KvClientError {
    #[error("connection error: {0:?}")]
    Connection(io::Error),
    #[error("operation timed out")]
    Timeout,
    #[error("policy violation: {0}")]
    Policy(String),
    #[error("serialization error: {0}")]
    Serialization(String),
    #[error("server error code {0}")]
    Server(i32),
}
