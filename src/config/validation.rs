//! Workload validation.
//!
//! Checks run independently and every failure is collected, so a bad config
//! reports all of its problems in one pass.

use crate::config::consts::{MAX_ITERATIONS, MAX_SEQUENCE_LENGTH};
use crate::config::WorkloadConfig;
use crate::errors::ValidationError;
use crate::observability::messages::{
    validation::{
        IterationCountRejected, SequenceLengthRejected, ValidationStarted, ZeroStrideRejected,
    },
    StructuredLog,
};

/// Validates a workload's loop shape before a sequence is allocated.
///
/// Both `length` and `iterations` are capped, which bounds the number of
/// element writes a run can make. A zero `length` or zero `iterations` is accepted; both simply produce a
/// sum of 0.
///
/// # Examples
///
/// ```rust
/// use stride_sum::config::{validate_workload, WorkloadConfig};
/// use stride_sum::errors::ValidationError;
///
/// assert!(validate_workload(&WorkloadConfig::default()).is_ok());
///
/// let config = WorkloadConfig { stride: 0, ..WorkloadConfig::default() };
/// assert_eq!(validate_workload(&config), Err(vec![ValidationError::ZeroStride]));
/// ```
pub fn validate_workload(config: &WorkloadConfig) -> Result<(), Vec<ValidationError>> {
    ValidationStarted {
        length: config.length,
        stride: config.stride,
    }
    .log();

    let mut errors = Vec::new();

    if config.stride == 0 {
        ZeroStrideRejected.log();
        errors.push(ValidationError::ZeroStride);
    }

    if config.length > MAX_SEQUENCE_LENGTH {
        SequenceLengthRejected {
            length: config.length,
            max: MAX_SEQUENCE_LENGTH,
        }
        .log();
        errors.push(ValidationError::LengthTooLarge {
            length: config.length,
            max: MAX_SEQUENCE_LENGTH,
        });
    }

    if config.iterations > MAX_ITERATIONS {
        IterationCountRejected {
            iterations: config.iterations,
            max: MAX_ITERATIONS,
        }
        .log();
        errors.push(ValidationError::IterationsTooLarge {
            iterations: config.iterations,
            max: MAX_ITERATIONS,
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_workload_is_valid() {
        assert!(validate_workload(&WorkloadConfig::default()).is_ok());
    }

    #[test]
    fn test_empty_workload_is_valid() {
        let config = WorkloadConfig {
            length: 0,
            iterations: 0,
            stride: 1,
        };
        assert!(validate_workload(&config).is_ok());
    }

    #[test]
    fn test_length_at_limit_is_valid() {
        let config = WorkloadConfig {
            length: MAX_SEQUENCE_LENGTH,
            ..WorkloadConfig::default()
        };
        assert!(validate_workload(&config).is_ok());
    }

    #[test]
    fn test_iterations_at_limit_is_valid() {
        let config = WorkloadConfig {
            iterations: MAX_ITERATIONS,
            ..WorkloadConfig::default()
        };
        assert!(validate_workload(&config).is_ok());
    }

    #[test]
    fn test_iterations_past_limit_is_rejected() {
        let config = WorkloadConfig {
            iterations: MAX_ITERATIONS + 1,
            ..WorkloadConfig::default()
        };
        assert_eq!(
            validate_workload(&config),
            Err(vec![ValidationError::IterationsTooLarge {
                iterations: MAX_ITERATIONS + 1,
                max: MAX_ITERATIONS,
            }])
        );
    }

    #[test]
    fn test_unbounded_iterations_are_rejected() {
        let config = WorkloadConfig {
            length: MAX_SEQUENCE_LENGTH,
            iterations: usize::MAX,
            stride: 1,
        };
        let errors = validate_workload(&config).unwrap_err();
        assert!(matches!(
            errors.as_slice(),
            [ValidationError::IterationsTooLarge { .. }]
        ));
    }

    #[test]
    fn test_errors_accumulate() {
        let config = WorkloadConfig {
            length: MAX_SEQUENCE_LENGTH + 1,
            iterations: MAX_ITERATIONS + 1,
            stride: 0,
        };

        let errors = validate_workload(&config).unwrap_err();
        assert_eq!(
            errors,
            vec![
                ValidationError::ZeroStride,
                ValidationError::LengthTooLarge {
                    length: MAX_SEQUENCE_LENGTH + 1,
                    max: MAX_SEQUENCE_LENGTH,
                },
                ValidationError::IterationsTooLarge {
                    iterations: MAX_ITERATIONS + 1,
                    max: MAX_ITERATIONS,
                },
            ]
        );
    }
}
