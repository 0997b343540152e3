//! Contracts with the host form and the picker widget library.
//!
//! Everything here is implemented by the embedding environment. Field and
//! widget types are handles: cloning one refers to the same element.

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use fieldpicker_fields::{PickerEntity, PickerSchema};

use crate::error::Result;

/// A string-valued input element on the host form.
pub trait FormField {
    /// Stable element id, unique within the document.
    fn id(&self) -> String;

    /// Title the field is matched by.
    fn title(&self) -> String;

    /// Current value; `None` when the element has no value at all.
    fn value(&self) -> Option<String>;

    fn set_value(&mut self, value: &str);

    /// Value as loaded from storage, used to detect a net change.
    fn original_value(&self) -> Option<String>;

    /// Hide the raw text input while a picker stands in for it.
    fn hide(&mut self);

    /// Cosmetic marker for picker-backed fields.
    fn set_text_color(&mut self, _color: &str) {}
}

/// The rendered form, as far as discovery needs it.
pub trait FormDocument {
    type Field: FormField;

    /// Text inputs whose title equals `title` exactly, in document order.
    fn text_inputs_titled(&self, title: &str) -> Vec<Self::Field>;

    /// Create an empty container with `container_id` next to `field`.
    fn append_container(&mut self, field: &Self::Field, container_id: &str);

    /// Remove a container created by [`FormDocument::append_container`].
    fn remove_container(&mut self, container_id: &str);
}

/// A live picker widget instance.
pub trait PickerWidget {
    /// Id of the widget's outermost element.
    fn top_level_element_id(&self) -> String;

    fn add_unresolved_selection(&mut self, entity: PickerEntity, resolve_immediately: bool);

    /// Current selections, in widget order.
    fn all_selections(&self) -> Vec<PickerEntity>;

    fn selection_count(&self) -> usize {
        self.all_selections().len()
    }

    /// Remove every selection after the first `len`.
    fn truncate_selections(&mut self, len: usize);
}

/// Creates picker widgets inside host containers.
pub trait PickerFactory {
    type Widget: PickerWidget;

    /// Render a widget into `container_id`.
    ///
    /// Fails with [`crate::PickerError::WidgetInit`] when the widget library
    /// cannot render there.
    fn initialize(
        &mut self,
        container_id: &str,
        initial_entities: &[PickerEntity],
        schema: &PickerSchema,
    ) -> Result<Self::Widget>;
}

/// The host form's "unsaved changes" signal.
pub trait DirtySignal {
    fn mark_dirty(&self);
}

/// Surfaces a message to the person editing the form.
pub trait UserNotifier {
    fn warn_user(&self, message: &str);
}

/// Shared dirty flag. Clones observe the same flag.
#[derive(Debug, Clone, Default)]
pub struct DirtyFlag(Arc<AtomicBool>);

impl DirtyFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_dirty(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }

    /// Reset after the host has saved. Adapters never call this.
    pub fn clear(&self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

impl DirtySignal for DirtyFlag {
    fn mark_dirty(&self) {
        self.0.store(true, Ordering::SeqCst);
    }
}

/// Host collaborators every adapter on a page shares.
#[derive(Clone)]
pub struct HostServices {
    pub dirty: Arc<dyn DirtySignal>,
    pub notifier: Arc<dyn UserNotifier>,
}

impl HostServices {
    pub fn new(dirty: Arc<dyn DirtySignal>, notifier: Arc<dyn UserNotifier>) -> Self {
        Self { dirty, notifier }
    }
}

impl fmt::Debug for HostServices {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HostServices").finish_non_exhaustive()
    }
}
