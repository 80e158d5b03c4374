// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for workload loading and validation.

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// Workload validation started.
///
/// # Log Level
/// `debug!` - Internal detail
pub struct ValidationStarted {
    pub length: usize,
    pub stride: usize,
}

impl Display for ValidationStarted {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Validating workload (length {}, stride {})",
            self.length, self.stride
        )
    }
}

impl StructuredLog for ValidationStarted {
    fn log(&self) {
        tracing::debug!(length = self.length, stride = self.stride, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "validation",
            span_name = name,
            length = self.length,
            stride = self.stride,
        )
    }
}

/// Zero stride rejected.
///
/// # Log Level
/// `error!` - Failure requiring attention
pub struct ZeroStrideRejected;

impl Display for ZeroStrideRejected {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Stride of 0 rejected: the inner loop would never advance")
    }
}

impl StructuredLog for ZeroStrideRejected {
    fn log(&self) {
        tracing::error!("{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::error_span!("validation", span_name = name)
    }
}

/// Sequence length over the allocation limit.
///
/// # Log Level
/// `error!` - Failure requiring attention
///
/// # Example
/// ```
/// use stride_sum::observability::messages::validation::SequenceLengthRejected;
///
/// let msg = SequenceLengthRejected {
///     length: 2_000_000,
///     max: 1_048_576,
/// };
///
/// tracing::error!("{}", msg);
/// ```
pub struct SequenceLengthRejected {
    pub length: usize,
    pub max: usize,
}

impl Display for SequenceLengthRejected {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Sequence length {} rejected: limit is {}",
            self.length, self.max
        )
    }
}

impl StructuredLog for SequenceLengthRejected {
    fn log(&self) {
        tracing::error!(length = self.length, max = self.max, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::error_span!(
            "validation",
            span_name = name,
            length = self.length,
            max = self.max,
        )
    }
}

/// Outer pass count over the limit.
///
/// # Log Level
/// `error!` - Failure requiring attention
pub struct IterationCountRejected {
    pub iterations: usize,
    pub max: usize,
}

impl Display for IterationCountRejected {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Iteration count {} rejected: limit is {}",
            self.iterations, self.max
        )
    }
}

impl StructuredLog for IterationCountRejected {
    fn log(&self) {
        tracing::error!(iterations = self.iterations, max = self.max, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::error_span!(
            "validation",
            span_name = name,
            iterations = self.iterations,
            max = self.max,
        )
    }
}

/// Workload configuration file loaded.
///
/// # Log Level
/// `info!` - Important operational event
pub struct WorkloadConfigLoaded<'a> {
    pub path: &'a str,
    pub length: usize,
    pub iterations: usize,
    pub stride: usize,
}

impl Display for WorkloadConfigLoaded<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Loaded workload from '{}': length {}, {} passes, stride {}",
            self.path, self.length, self.iterations, self.stride
        )
    }
}

impl StructuredLog for WorkloadConfigLoaded<'_> {
    fn log(&self) {
        tracing::info!(
            path = self.path,
            length = self.length,
            iterations = self.iterations,
            stride = self.stride,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "validation",
            span_name = name,
            path = self.path,
            length = self.length,
            iterations = self.iterations,
            stride = self.stride,
        )
    }
}
