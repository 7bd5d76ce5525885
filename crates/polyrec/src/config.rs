// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Codec and driver configuration

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default upper bound on the record count accepted from a stream.
pub const DEFAULT_MAX_RECORDS: usize = 1_000_000;

/// polyrec configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Largest record count a reader will allocate for
    pub max_records: usize,

    /// Log level for the CLI (trace, debug, info, warn, error)
    pub log_level: String,

    /// File used by `polyrec demo` when no output is given
    pub default_output: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_records: DEFAULT_MAX_RECORDS,
            log_level: "info".to_string(),
            default_output: PathBuf::from("records.txt"),
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Parse a JSON config. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a JSON config file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }
}

/// Config builder for fluent API
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    max_records: Option<usize>,
    log_level: Option<String>,
    default_output: Option<PathBuf>,
}

impl ConfigBuilder {
    /// Set the maximum record count accepted on read
    pub fn max_records(mut self, max: usize) -> Self {
        self.max_records = Some(max);
        self
    }

    /// Set log level
    pub fn log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = Some(level.into());
        self
    }

    /// Set default output path
    pub fn default_output(mut self, path: impl Into<PathBuf>) -> Self {
        self.default_output = Some(path.into());
        self
    }

    /// Build the configuration
    pub fn build(self) -> Config {
        let defaults = Config::default();

        Config {
            max_records: self.max_records.unwrap_or(defaults.max_records),
            log_level: self.log_level.unwrap_or(defaults.log_level),
            default_output: self.default_output.unwrap_or(defaults.default_output),
        }
    }
}
