//! fieldpicker configuration management using Figment
//!
//! Declares which form fields become pickers, where the widget's support
//! scripts live, and the options each widget is initialized with.
//!
//! # Sources
//!
//! Precedence, later wins: defaults → config files (in the order added) → env.
//! Supported file formats are TOML, YAML and JSON, detected by extension.
//! Missing files are skipped so a deployment may ship without one.
//!
//! ## Example YAML Configuration
//!
//! ```yaml
//! site_url: https://contoso.sharepoint.com/sites/pwa
//! fields:
//!   multiple: [Customer Representative, Solution Architect]
//!   single: [Project Sponsor 2]
//! schema:
//!   account_types: [User, SecGroup]
//!   max_suggestions: 50
//!   width_px: 360
//! load_timeout_ms: 10000
//! ```
//!
//! # Environment Variables
//!
//! ```bash
//! export FIELDPICKER_SITE_URL="https://contoso.sharepoint.com/sites/pwa"
//! export FIELDPICKER_LOAD_TIMEOUT_MS=5000        # → load_timeout_ms
//! export FIELDPICKER_SCHEMA__WIDTH_PX=480        # → schema.width_px
//! ```
//!
//! ```no_run
//! use fieldpicker_config::load_configuration;
//!
//! let config = load_configuration("picker.yaml")?;
//! for url in config.resource_urls() {
//!     println!("{url}");
//! }
//! # Ok::<(), fieldpicker_config::ConfigError>(())
//! ```

pub mod error;
pub mod provider;
pub mod source;
pub mod types;

pub use error::{ConfigError, ConfigResult};
pub use provider::{load_configuration, ConfigProvider, ENV_PREFIX};
pub use source::{ConfigFile, ConfigFormat};
pub use types::{FieldsConfig, PickerConfig, DEFAULT_RESOURCES};
