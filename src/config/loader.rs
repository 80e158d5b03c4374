// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::config::consts::{DEFAULT_ITERATIONS, DEFAULT_SEQUENCE_LENGTH, DEFAULT_STRIDE};
use crate::errors::ConfigError;
use crate::observability::messages::{validation::WorkloadConfigLoaded, StructuredLog};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Loop shape of the strided accumulation workload.
///
/// The default is the fixed demo: a 10-element sequence, 10 outer passes and a
/// stride of 1024. Because the stride is larger than the sequence, each pass
/// writes index 0 only.
///
/// # Fields
/// * `length` - Number of elements in the sequence
/// * `iterations` - Outer loop bound; pass `i` adds `i` to every visited element
/// * `stride` - Step between visited indices in the inner loop
///
/// # Example
/// ```yaml
/// length: 10
/// iterations: 10
/// stride: 1024
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WorkloadConfig {
    pub length: usize,
    pub iterations: usize,
    pub stride: usize,
}

impl Default for WorkloadConfig {
    fn default() -> Self {
        Self {
            length: DEFAULT_SEQUENCE_LENGTH,
            iterations: DEFAULT_ITERATIONS,
            stride: DEFAULT_STRIDE,
        }
    }
}

impl WorkloadConfig {
    /// Whether index 0 is the only element the inner loop writes.
    ///
    /// False for an empty sequence, where nothing is written at all.
    ///
    /// ```
    /// use stride_sum::config::WorkloadConfig;
    ///
    /// assert!(WorkloadConfig::default().only_first_index_reachable());
    ///
    /// let empty = WorkloadConfig { length: 0, ..WorkloadConfig::default() };
    /// assert!(!empty.only_first_index_reachable());
    /// ```
    pub fn only_first_index_reachable(&self) -> bool {
        self.length > 0 && self.stride >= self.length
    }
}

/// Config file syntax, chosen from the file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Yaml,
    Toml,
}

impl ConfigFormat {
    /// `.toml` selects TOML; everything else is read as YAML.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => ConfigFormat::Toml,
            _ => ConfigFormat::Yaml,
        }
    }
}

/// Parse a workload from an in-memory document.
pub fn parse_config(content: &str, format: ConfigFormat) -> Result<WorkloadConfig, ConfigError> {
    let cfg = match format {
        ConfigFormat::Yaml => serde_yaml::from_str(content)?,
        ConfigFormat::Toml => toml::from_str(content)?,
    };
    Ok(cfg)
}

/// Load a workload from a YAML or TOML file
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<WorkloadConfig, ConfigError> {
    let path = path.as_ref();
    let format = ConfigFormat::from_path(path);
    let content = fs::read_to_string(path)?;
    let cfg = parse_config(&content, format)?;

    WorkloadConfigLoaded {
        path: &path.display().to_string(),
        length: cfg.length,
        iterations: cfg.iterations,
        stride: cfg.stride,
    }
    .log();

    Ok(cfg)
}

/// Load and validate a workload from a YAML or TOML file
///
/// Every validation problem is reported at once in [`ConfigError::Invalid`].
pub fn load_and_validate_config<P: AsRef<Path>>(path: P) -> Result<WorkloadConfig, ConfigError> {
    let cfg = load_config(path)?;
    crate::config::validate_workload(&cfg)?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn parse_full_yaml_config() {
        let yaml = r#"
length: 64
iterations: 3
stride: 16
"#;

        let cfg = parse_config(yaml, ConfigFormat::Yaml).unwrap();
        assert_eq!(
            cfg,
            WorkloadConfig {
                length: 64,
                iterations: 3,
                stride: 16
            }
        );
    }

    #[test]
    fn missing_fields_take_defaults() {
        let cfg = parse_config("stride: 2\n", ConfigFormat::Yaml).unwrap();
        assert_eq!(cfg.length, DEFAULT_SEQUENCE_LENGTH);
        assert_eq!(cfg.iterations, DEFAULT_ITERATIONS);
        assert_eq!(cfg.stride, 2);
    }

    #[test]
    fn parse_toml_config() {
        let cfg = parse_config("length = 20\nstride = 4\n", ConfigFormat::Toml).unwrap();
        assert_eq!(cfg.length, 20);
        assert_eq!(cfg.iterations, DEFAULT_ITERATIONS);
        assert_eq!(cfg.stride, 4);
    }

    #[test]
    fn unknown_value_type_is_a_yaml_error() {
        let result = parse_config("length: lots\n", ConfigFormat::Yaml);
        assert!(matches!(result, Err(ConfigError::Yaml(_))));
    }

    #[test]
    fn misspelled_yaml_key_is_rejected() {
        let result = parse_config("strid: 1\n", ConfigFormat::Yaml);
        assert!(matches!(result, Err(ConfigError::Yaml(_))));
    }

    #[test]
    fn misspelled_toml_key_is_rejected() {
        let result = parse_config("strid = 1\n", ConfigFormat::Toml);
        assert!(matches!(result, Err(ConfigError::Toml(_))));
    }

    #[test]
    fn first_index_reachability() {
        let shape = |length, stride| WorkloadConfig {
            length,
            iterations: 1,
            stride,
        };
        assert!(shape(10, 10).only_first_index_reachable());
        assert!(shape(1, 1).only_first_index_reachable());
        assert!(!shape(10, 9).only_first_index_reachable());
        assert!(!shape(0, 1024).only_first_index_reachable());
    }

    #[test]
    fn format_follows_extension() {
        assert_eq!(ConfigFormat::from_path(Path::new("w.toml")), ConfigFormat::Toml);
        assert_eq!(ConfigFormat::from_path(Path::new("w.TOML")), ConfigFormat::Toml);
        assert_eq!(ConfigFormat::from_path(Path::new("w.yaml")), ConfigFormat::Yaml);
        assert_eq!(ConfigFormat::from_path(Path::new("workload")), ConfigFormat::Yaml);
    }

    #[test]
    fn test_load_and_validate_valid_config() {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        writeln!(file, "length: 10\niterations: 10\nstride: 1").unwrap();

        let cfg = load_and_validate_config(file.path()).unwrap();
        assert_eq!(cfg.stride, 1);
    }

    #[test]
    fn test_load_and_validate_zero_stride() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "stride = 0").unwrap();

        match load_and_validate_config(file.path()) {
            Err(ConfigError::Invalid(errors)) => {
                assert_eq!(errors, vec![crate::errors::ValidationError::ZeroStride]);
            }
            other => panic!("expected validation failure, got {:?}", other),
        }
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_config(dir.path().join("absent.yaml"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }
}
