//! Configuration system
//!
//! Documents are read and written as TOML or RON, picked by file extension.

use std::path::Path;

pub use serde::{de::DeserializeOwned, Deserialize, Serialize};

/// Configuration trait
pub trait Config: Serialize + DeserializeOwned + Default {
    /// Load configuration from file
    fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        read_document(path)
    }

    /// Save configuration to file
    fn save_to_file(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        write_document(self, path)
    }
}

/// Supported document formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Toml,
    Ron,
}

impl Format {
    fn from_path(path: &Path) -> Result<Self, ConfigError> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Ok(Self::Toml),
            Some("ron") => Ok(Self::Ron),
            _ => Err(ConfigError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// Read any serde document from a `.toml` or `.ron` file
pub fn read_document<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T, ConfigError> {
    let path = path.as_ref();
    let format = Format::from_path(path)?;
    let contents = std::fs::read_to_string(path)?;
    parse_document(&contents, format)
}

fn parse_document<T: DeserializeOwned>(contents: &str, format: Format) -> Result<T, ConfigError> {
    match format {
        Format::Toml => toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string())),
        Format::Ron => ron::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string())),
    }
}

/// Write any serde document to a `.toml` or `.ron` file
pub fn write_document<T: Serialize>(value: &T, path: impl AsRef<Path>) -> Result<(), ConfigError> {
    let path = path.as_ref();
    let contents = match Format::from_path(path)? {
        Format::Toml => {
            toml::to_string_pretty(value).map_err(|e| ConfigError::Serialize(e.to_string()))?
        }
        Format::Ron => ron::ser::to_string_pretty(value, ron::ser::PrettyConfig::default())
            .map_err(|e| ConfigError::Serialize(e.to_string()))?,
    };

    std::fs::write(path, contents).map_err(ConfigError::Io)
}

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialize(String),

    /// Unsupported format
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    /// Values that parse but make no sense together
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
    struct Sample {
        name: String,
        count: u32,
    }

    impl Config for Sample {}

    #[test]
    fn test_unsupported_extension() {
        let result = Sample::load_from_file("settings.json");
        assert!(matches!(result, Err(ConfigError::UnsupportedFormat(_))));
    }

    #[test]
    fn test_parse_toml_and_ron() {
        let from_toml: Sample = parse_document("name = \"a\"\ncount = 3\n", Format::Toml).unwrap();
        let from_ron: Sample = parse_document("(name: \"a\", count: 3)", Format::Ron).unwrap();
        assert_eq!(from_toml, from_ron);
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let path = std::env::temp_dir().join(format!("button_engine_cfg_{}.ron", std::process::id()));
        let sample = Sample { name: "panel".to_string(), count: 7 };
        sample.save_to_file(&path).unwrap();
        let loaded = Sample::load_from_file(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(loaded, sample);
    }
}
