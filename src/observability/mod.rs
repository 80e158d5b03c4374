// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Observability module for structured logging and tracing.
//!
//! Diagnostic output is described by message types in [`messages`], each with
//! a `Display` implementation and a [`messages::StructuredLog`] implementation
//! that attaches the message's fields to the emitted event. Call sites build a
//! message and call `.log()`; no log text is written inline.
//!
//! All diagnostics go to stderr. Stdout carries only the program's result line.
//!
//! # Usage
//!
//! ```rust
//! use stride_sum::observability::messages::{accumulator::AccumulationCompleted, StructuredLog};
//!
//! let msg = AccumulationCompleted { writes: 10, sum: 45 };
//! msg.log();
//! ```

pub mod messages;

use crate::config::consts::DEFAULT_LOG_FILTER;
use tracing_subscriber::EnvFilter;

/// Install the global stderr subscriber.
///
/// The filter is fixed at [`DEFAULT_LOG_FILTER`]; no environment variables are
/// read. Returns an error if a global subscriber is already installed.
pub fn init_tracing() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(DEFAULT_LOG_FILTER))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))
}
