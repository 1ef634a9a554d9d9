//! # Unified Configuration System
//!
//! All configuration structures for the compositing engine and its command
//! line front end live here.
//!
//! ## Configuration Categories
//!
//! - **Engine Config**: logging behaviour
//! - **Asset Config**: where bitmap file names are resolved
//! - **Output Config**: where rendered states are written

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub use crate::config::{Config, ConfigError};

/// # Engine Configuration
///
/// Core engine behaviour that affects every subsystem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Default log filter, overridden by `RUST_LOG`
    pub log_level: String,
}

impl EngineConfig {
    /// Create a new engine configuration
    pub fn new() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }

    /// Set log level
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// # Asset Configuration
///
/// Bitmap layers reference images by file name; the name is tried against
/// each search path in order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetConfig {
    /// Directories searched for bitmap files, first match wins
    pub search_paths: Vec<PathBuf>,
}

impl AssetConfig {
    /// Create a new asset configuration
    pub fn new() -> Self {
        Self {
            search_paths: vec![
                PathBuf::from("resources/images"),
                PathBuf::from("images"),
                PathBuf::from("."),
            ],
        }
    }

    /// Put a directory in front of the existing search paths
    pub fn with_search_path(mut self, dir: impl Into<PathBuf>) -> Self {
        self.search_paths.insert(0, dir.into());
        self
    }
}

impl Default for AssetConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// # Output Configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory rendered PNG files are written to
    pub output_dir: PathBuf,
    /// Prefix prepended to every output file name
    pub file_prefix: String,
}

impl OutputConfig {
    /// Create a new output configuration
    pub fn new() -> Self {
        Self {
            output_dir: PathBuf::from("rendered"),
            file_prefix: String::new(),
        }
    }

    /// Set output directory
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    /// Set file prefix
    pub fn with_file_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.file_prefix = prefix.into();
        self
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// # Complete Application Configuration
///
/// Top-level configuration that encompasses all engine subsystems.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApplicationConfig {
    /// Engine core configuration
    pub engine: EngineConfig,
    /// Asset system configuration
    pub assets: AssetConfig,
    /// Output configuration
    pub output: OutputConfig,
}

impl ApplicationConfig {
    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.engine.log_level.trim().is_empty() {
            return Err(ConfigError::Invalid("Log level cannot be empty".to_string()));
        }

        if self.assets.search_paths.is_empty() {
            return Err(ConfigError::Invalid("At least one asset search path is required".to_string()));
        }

        if self.output.output_dir.as_os_str().is_empty() {
            return Err(ConfigError::Invalid("Output directory cannot be empty".to_string()));
        }

        Ok(())
    }
}

impl Config for ApplicationConfig {}
