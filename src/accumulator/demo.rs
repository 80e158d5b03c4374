// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::fmt::{Display, Formatter};

use crate::accumulator::Sequence;
use crate::config::{validate_workload, WorkloadConfig};
use crate::errors::ConfigError;
use crate::observability::messages::{accumulator::*, StructuredLog};

/// Result of one accumulation run.
///
/// `Display` renders the single output line, `Sum: <value>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Report {
    pub sum: i32,
    pub writes: usize,
    pub config: WorkloadConfig,
}

impl Display for Report {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Sum: {}", self.sum)
    }
}

/// Validate `config`, then allocate, stride-write and reduce a sequence.
///
/// ```
/// use stride_sum::accumulator::run;
/// use stride_sum::config::WorkloadConfig;
///
/// let config = WorkloadConfig { stride: 1, ..WorkloadConfig::default() };
/// assert_eq!(run(&config).unwrap().sum, 450);
/// ```
pub fn run(config: &WorkloadConfig) -> Result<Report, ConfigError> {
    validate_workload(config)?;
    Ok(accumulate(config))
}

/// Run the built-in 10-element, stride-1024 demo.
pub fn run_default() -> Report {
    accumulate(&WorkloadConfig::default())
}

fn accumulate(config: &WorkloadConfig) -> Report {
    let start_msg = AccumulationStarted {
        length: config.length,
        iterations: config.iterations,
        stride: config.stride,
    };

    let span = start_msg.span("accumulation");
    let _guard = span.enter();
    start_msg.log();

    if config.only_first_index_reachable() {
        StrideExceedsLength {
            length: config.length,
            stride: config.stride,
        }
        .log();
    }

    let mut sequence = Sequence::zeroed(config.length);
    let writes = sequence.strided_accumulate(config.iterations, config.stride);
    let sum = sequence.sum();

    AccumulationCompleted { writes, sum }.log();

    Report {
        sum,
        writes,
        config: *config,
    }
}
