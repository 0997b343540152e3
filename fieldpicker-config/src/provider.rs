//! Configuration provider using Figment for fieldpicker

use crate::{
    error::{ConfigError, ConfigResult},
    source::{ConfigFile, ConfigFormat},
    types::PickerConfig,
};
use figment::{
    providers::{Env, Format, Json, Serialized, Toml, Yaml},
    Figment,
};
use std::path::Path;
use tracing::{debug, info, trace};

/// Prefix for environment overrides; nested keys are separated by `__`.
pub const ENV_PREFIX: &str = "FIELDPICKER_";

/// Configuration provider using figment
///
/// Sources are merged in precedence order (later sources override earlier ones):
/// 1. Default values (`PickerConfig::default()`)
/// 2. Configuration files, in the order they were added
/// 3. Environment variables (`FIELDPICKER_` prefix)
#[derive(Debug, Default)]
pub struct ConfigProvider {
    files: Vec<ConfigFile>,
}

impl ConfigProvider {
    /// Create a new configuration provider
    pub fn new() -> Self {
        Self { files: Vec::new() }
    }

    /// Add a configuration file. Its format comes from the extension.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> ConfigResult<Self> {
        self.files.push(ConfigFile::from_path(path)?);
        Ok(self)
    }

    /// Load and validate the picker configuration from all sources
    pub fn load(&self) -> ConfigResult<PickerConfig> {
        debug!("Loading picker configuration");

        let config: PickerConfig = self.build_figment().extract()?;
        validate(&config)?;

        info!(
            resources = config.resources.len(),
            multiple = config.fields.multiple.len(),
            single = config.fields.single.len(),
            "Loaded picker configuration"
        );
        Ok(config)
    }

    fn build_figment(&self) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(PickerConfig::default()));

        for file in &self.files {
            if !file.path.exists() {
                trace!("Skipping missing config file: {}", file.path.display());
                continue;
            }
            trace!(
                "Loading config file: {} ({:?})",
                file.path.display(),
                file.format
            );
            figment = match file.format {
                ConfigFormat::Toml => figment.merge(Toml::file(&file.path)),
                ConfigFormat::Yaml => figment.merge(Yaml::file(&file.path)),
                ConfigFormat::Json => figment.merge(Json::file(&file.path)),
            };
        }

        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }
}

fn validate(config: &PickerConfig) -> ConfigResult<()> {
    if config.load_timeout_ms == 0 {
        return Err(ConfigError::ValidationError {
            message: "load_timeout_ms must be greater than zero".to_string(),
        });
    }
    if config.resources.iter().any(|r| r.trim().is_empty()) {
        return Err(ConfigError::ValidationError {
            message: "resource names cannot be empty".to_string(),
        });
    }
    config.targets()?;
    Ok(())
}

/// Load configuration from `path` (if it exists) plus the environment.
pub fn load_configuration(path: impl AsRef<Path>) -> ConfigResult<PickerConfig> {
    ConfigProvider::new().with_file(path)?.load()
}
