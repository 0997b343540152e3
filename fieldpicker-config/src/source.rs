//! Configuration file sources
//!
//! A source is an explicit file path plus the format detected from its
//! extension. Sources are merged in the order they were added.

use std::path::{Path, PathBuf};

use crate::error::{ConfigError, ConfigResult};

/// Configuration file format detected from file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    /// TOML format (.toml extension)
    Toml,
    /// YAML format (.yaml or .yml extensions)
    Yaml,
    /// JSON format (.json extension)
    Json,
}

impl ConfigFormat {
    /// Detect format from file extension
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "toml" => Some(Self::Toml),
            "yaml" | "yml" => Some(Self::Yaml),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// A configuration file to merge
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigFile {
    pub path: PathBuf,
    pub format: ConfigFormat,
}

impl ConfigFile {
    /// Build a source from a path, detecting the format from its extension
    pub fn from_path(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default();
        let format = ConfigFormat::from_extension(ext).ok_or_else(|| {
            ConfigError::UnsupportedFormat {
                format: ext.to_string(),
            }
        })?;
        Ok(Self {
            path: path.to_path_buf(),
            format,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_extension() {
        assert_eq!(ConfigFormat::from_extension("toml"), Some(ConfigFormat::Toml));
        assert_eq!(ConfigFormat::from_extension("YML"), Some(ConfigFormat::Yaml));
        assert_eq!(ConfigFormat::from_extension("json"), Some(ConfigFormat::Json));
        assert_eq!(ConfigFormat::from_extension("ini"), None);
    }

    #[test]
    fn test_from_path_rejects_unknown_extension() {
        let err = ConfigFile::from_path("picker.ini").unwrap_err();
        assert!(matches!(err, ConfigError::UnsupportedFormat { format } if format == "ini"));
    }

    #[test]
    fn test_from_path_without_extension() {
        assert!(ConfigFile::from_path("picker").is_err());
    }
}
