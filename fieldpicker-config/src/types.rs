//! Picker deployment configuration

use std::time::Duration;

use fieldpicker_fields::{Cardinality, PickerSchema, TargetFieldSpec, TargetFields};
use serde::{Deserialize, Serialize};

/// Widget support scripts loaded before any picker is rendered.
pub const DEFAULT_RESOURCES: [&str; 4] = [
    "clienttemplates.js",
    "clientforms.js",
    "clientpeoplepicker.js",
    "autofill.js",
];

/// Which field titles become pickers, by cardinality.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct FieldsConfig {
    pub multiple: Vec<String>,
    pub single: Vec<String>,
}

impl Default for FieldsConfig {
    fn default() -> Self {
        Self {
            multiple: vec!["Project Sponsor".to_string()],
            single: vec!["Project Sponsor 2".to_string()],
        }
    }
}

/// Everything a deployment declares about its picker-backed fields.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PickerConfig {
    /// Absolute site URL the widget scripts are served under.
    pub site_url: String,
    /// Path below `site_url` holding the widget scripts.
    pub layouts_path: String,
    pub resources: Vec<String>,
    pub fields: FieldsConfig,
    pub schema: PickerSchema,
    pub load_timeout_ms: u64,
    /// Text color applied to a field once it is picker-backed.
    pub indicator_color: Option<String>,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            site_url: String::new(),
            layouts_path: "_layouts/15/".to_string(),
            resources: DEFAULT_RESOURCES.iter().map(|r| r.to_string()).collect(),
            fields: FieldsConfig::default(),
            schema: PickerSchema::default(),
            load_timeout_ms: 10_000,
            indicator_color: Some("green".to_string()),
        }
    }
}

impl PickerConfig {
    /// Full URL of every resource, joined with single slashes.
    pub fn resource_urls(&self) -> Vec<String> {
        let site = self.site_url.trim_end_matches('/');
        let layouts = self.layouts_path.trim_matches('/');
        self.resources
            .iter()
            .map(|resource| {
                let resource = resource.trim_start_matches('/');
                match (site.is_empty(), layouts.is_empty()) {
                    (true, true) => resource.to_string(),
                    (true, false) => format!("{layouts}/{resource}"),
                    (false, true) => format!("{site}/{resource}"),
                    (false, false) => format!("{site}/{layouts}/{resource}"),
                }
            })
            .collect()
    }

    /// Declared target fields, multi-valued ones first.
    pub fn targets(&self) -> fieldpicker_fields::Result<TargetFields> {
        let multiple = self
            .fields
            .multiple
            .iter()
            .map(|name| TargetFieldSpec::new(name.as_str(), Cardinality::Multiple));
        let single = self
            .fields
            .single
            .iter()
            .map(|name| TargetFieldSpec::new(name.as_str(), Cardinality::Single));
        TargetFields::from_specs(multiple.chain(single))
    }

    pub fn load_timeout(&self) -> Duration {
        Duration::from_millis(self.load_timeout_ms)
    }
}
