//! Entity pickers for plain text fields
//!
//! `fieldpicker` lets a form field that stores a `;`-delimited list of
//! identifiers be edited through a picker widget while keeping its stored
//! format. The form, the widget library, and resource loading belong to the
//! host and are reached through the traits in [`host`] and [`bootstrap`].
//!
//! # Flow
//!
//! 1. [`bootstrap::install`] waits for the widget's support resources
//! 2. [`discovery::render_pickers`] finds each declared field by title
//! 3. One [`PickerAdapter`] per element seeds its widget from the stored value
//! 4. The host routes each widget notification through [`PickerSession::dispatch`],
//!    which writes the selections back and marks the form dirty on a net change
//!
//! If loading fails, no picker is bound and every field stays editable as text.

pub mod adapter;
pub mod bootstrap;
pub mod discovery;
pub mod error;
pub mod host;
pub mod logging;
pub mod session;

pub use adapter::{PickerAdapter, PickerIds, SyncOutcome};
pub use bootstrap::{ensure_dependencies, install, DependencyLoader};
pub use discovery::{discover, render_pickers, DiscoveredField};
pub use error::{PickerError, Result};
pub use host::{
    DirtyFlag, DirtySignal, FormDocument, FormField, HostServices, PickerFactory, PickerWidget,
    UserNotifier,
};
pub use logging::init_tracing;
pub use session::PickerSession;

pub use fieldpicker_config::{ConfigProvider, PickerConfig};
pub use fieldpicker_fields::{Cardinality, PickerEntity, PickerSchema, TargetFieldSpec, TargetFields};
