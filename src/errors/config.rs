// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Errors for workload configuration loading and validation.

use thiserror::Error;

/// Problems found while validating a workload's loop shape.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A zero stride would never advance the inner loop
    #[error("Stride must be at least 1")]
    ZeroStride,

    /// The sequence would exceed the allocation limit
    #[error("Sequence length {length} exceeds the maximum of {max}")]
    LengthTooLarge {
        /// The requested length
        length: usize,
        /// The configured limit
        max: usize,
    },

    /// Too many outer passes requested
    #[error("Iteration count {iterations} exceeds the maximum of {max}")]
    IterationsTooLarge {
        /// The requested pass count
        iterations: usize,
        /// The configured limit
        max: usize,
    },
}

/// Errors that can occur while loading a workload configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// File could not be read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML document did not match the workload schema.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// TOML document did not match the workload schema.
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// The workload parsed but failed validation.
    #[error("Workload validation failed:\n{}", join_errors(.0))]
    Invalid(Vec<ValidationError>),
}

impl From<Vec<ValidationError>> for ConfigError {
    fn from(errors: Vec<ValidationError>) -> Self {
        ConfigError::Invalid(errors)
    }
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_lists_every_error() {
        let err = ConfigError::Invalid(vec![
            ValidationError::ZeroStride,
            ValidationError::LengthTooLarge { length: 9, max: 4 },
        ]);

        assert_eq!(
            err.to_string(),
            "Workload validation failed:\nStride must be at least 1\nSequence length 9 exceeds the maximum of 4"
        );
    }
}
