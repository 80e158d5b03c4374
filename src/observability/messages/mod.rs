// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Centralized message types for structured logging.
//!
//! # Organization
//!
//! * `accumulator` - Strided write pass and reduction events
//! * `validation` - Workload loading and validation events
//!
//! # Usage Pattern
//!
//! ```rust
//! use stride_sum::observability::messages::{validation::ValidationStarted, StructuredLog};
//!
//! let msg = ValidationStarted {
//!     length: 10,
//!     stride: 1024,
//! };
//!
//! tracing::info!("{}", msg);
//! msg.log();
//! ```

pub mod accumulator;
pub mod validation;

use tracing::Span;

/// A message that knows its own log level and structured fields.
pub trait StructuredLog {
    /// Emit the message as a `tracing` event at its level.
    fn log(&self);

    /// Open a span at the message's level carrying the same fields.
    fn span(&self, name: &str) -> Span;
}
