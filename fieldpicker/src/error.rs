//! Error types for picker binding

use fieldpicker_config::ConfigError;
use fieldpicker_fields::FieldsError;
use thiserror::Error;

/// Result type for picker operations
pub type Result<T> = std::result::Result<T, PickerError>;

/// Errors raised while loading widget dependencies or attaching pickers.
///
/// None of these reach the user's form: on any of them the affected field
/// keeps its plain text input.
#[derive(Debug, Error)]
pub enum PickerError {
    /// A widget support resource failed to load
    #[error("failed to load picker dependency '{resource}': {message}")]
    DependencyLoad { resource: String, message: String },

    /// Widget support resources did not finish loading in time
    #[error("picker dependencies not ready after {timeout_ms}ms")]
    DependencyTimeout { timeout_ms: u64 },

    /// The widget refused to initialize in its container
    #[error("picker widget failed to initialize in '{container}': {message}")]
    WidgetInit { container: String, message: String },

    /// Configuration could not be loaded or validated
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Target field declarations were rejected
    #[error(transparent)]
    Fields(#[from] FieldsError),
}

impl PickerError {
    /// Whether this error means the widget library itself is unavailable.
    pub fn is_dependency_failure(&self) -> bool {
        matches!(
            self,
            PickerError::DependencyLoad { .. } | PickerError::DependencyTimeout { .. }
        )
    }
}
