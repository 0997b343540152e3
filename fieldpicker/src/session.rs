//! The adapters bound on one form.
//!
//! Each widget has exactly one subscriber: the adapter registered under its
//! field id. The host routes a widget's change notification here by the
//! widget's top-level element id.

use std::collections::HashMap;

use tracing::trace;

use crate::adapter::{PickerAdapter, PickerIds, SyncOutcome};
use crate::host::{FormField, PickerWidget};

/// Adapters keyed by field element id, in binding order.
pub struct PickerSession<F, W> {
    adapters: Vec<PickerAdapter<F, W>>,
    id_index: HashMap<String, usize>,
}

impl<F, W> Default for PickerSession<F, W> {
    fn default() -> Self {
        Self {
            adapters: Vec::new(),
            id_index: HashMap::new(),
        }
    }
}

impl<F, W> PickerSession<F, W>
where
    F: FormField,
    W: PickerWidget,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether an adapter is already bound to this field element.
    pub fn contains(&self, field_id: &str) -> bool {
        self.id_index.contains_key(field_id)
    }

    /// Register an adapter. Returns it back if its field is already bound.
    pub fn insert(&mut self, adapter: PickerAdapter<F, W>) -> Option<PickerAdapter<F, W>> {
        let field_id = adapter.ids().field_id.clone();
        if self.id_index.contains_key(&field_id) {
            return Some(adapter);
        }
        self.id_index.insert(field_id, self.adapters.len());
        self.adapters.push(adapter);
        None
    }

    /// Deliver a selection-changed notification from the widget whose
    /// top-level element is `top_level_id`.
    pub fn dispatch(&mut self, top_level_id: &str) -> Option<SyncOutcome> {
        let Some(field_id) = PickerIds::field_id_from_top_level(top_level_id) else {
            trace!(top_level_id, "notification from unknown element");
            return None;
        };
        let adapter = self.get_mut(field_id)?;
        Some(adapter.on_selection_changed())
    }

    pub fn get(&self, field_id: &str) -> Option<&PickerAdapter<F, W>> {
        self.id_index.get(field_id).map(|&i| &self.adapters[i])
    }

    pub fn get_mut(&mut self, field_id: &str) -> Option<&mut PickerAdapter<F, W>> {
        let idx = *self.id_index.get(field_id)?;
        Some(&mut self.adapters[idx])
    }

    pub fn iter(&self) -> impl Iterator<Item = &PickerAdapter<F, W>> {
        self.adapters.iter()
    }

    pub fn len(&self) -> usize {
        self.adapters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.adapters.is_empty()
    }
}
