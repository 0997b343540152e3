//! Target field declarations and the delimited value format
//!
//! `fieldpicker-fields` is the pure half of fieldpicker. It knows how a picker
//! selection is stored in a plain text field and how many selections a field
//! may hold. It knows nothing about forms, widgets, or loading.
//!
//! # Architecture
//!
//! - **Codec**: `;`-delimited token lists, lenient on decode, legacy trailing `;` on encode
//! - **Policy**: `Cardinality::admit` decides whether a selection count is allowed
//! - **Registry**: `TargetFields` holds the declared fields, unique by name
//! - **Schema**: `PickerSchema` carries the widget options passed at initialization

pub mod codec;
pub mod error;
pub mod policy;
pub mod registry;
pub mod types;

pub use codec::{decode, encode, DELIMITER};
pub use error::{FieldsError, Result};
pub use policy::{Admission, SINGLE_SELECTION_WARNING};
pub use registry::TargetFields;
pub use types::{AccountType, Cardinality, EntityType, PickerEntity, PickerSchema, TargetFieldSpec};
