// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for the strided accumulation run.

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// Accumulation run started.
///
/// # Log Level
/// `debug!` - Internal detail
///
/// # Example
/// ```
/// use stride_sum::observability::messages::accumulator::AccumulationStarted;
///
/// let msg = AccumulationStarted {
///     length: 10,
///     iterations: 10,
///     stride: 1024,
/// };
///
/// tracing::debug!("{}", msg);
/// ```
pub struct AccumulationStarted {
    pub length: usize,
    pub iterations: usize,
    pub stride: usize,
}

impl Display for AccumulationStarted {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Accumulating over {} elements: {} passes with stride {}",
            self.length, self.iterations, self.stride
        )
    }
}

impl StructuredLog for AccumulationStarted {
    fn log(&self) {
        tracing::debug!(
            length = self.length,
            iterations = self.iterations,
            stride = self.stride,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "accumulation",
            span_name = name,
            length = self.length,
            iterations = self.iterations,
            stride = self.stride,
        )
    }
}

/// Stride is at least as wide as the sequence, so only index 0 is written.
///
/// # Log Level
/// `debug!` - The workload still runs as configured
pub struct StrideExceedsLength {
    pub length: usize,
    pub stride: usize,
}

impl Display for StrideExceedsLength {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Stride {} is not smaller than sequence length {}; only index 0 will be written",
            self.stride, self.length
        )
    }
}

impl StructuredLog for StrideExceedsLength {
    fn log(&self) {
        tracing::debug!(
            length = self.length,
            stride = self.stride,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "stride_coverage",
            span_name = name,
            length = self.length,
            stride = self.stride,
        )
    }
}

/// Accumulation run finished.
///
/// # Log Level
/// `info!` - Important operational event
pub struct AccumulationCompleted {
    pub writes: usize,
    pub sum: i32,
}

impl Display for AccumulationCompleted {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Accumulation completed: {} writes, sum {}", self.writes, self.sum)
    }
}

impl StructuredLog for AccumulationCompleted {
    fn log(&self) {
        tracing::info!(writes = self.writes, sum = self.sum, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "accumulation",
            span_name = name,
            writes = self.writes,
            sum = self.sum,
        )
    }
}
