//! Binds one text field to one picker widget.
//!
//! On attach the field's stored value seeds the widget and the raw input is
//! hidden. After that every selection change is written back to the field
//! in the delimited format, with the field's cardinality enforced on the
//! widget itself.

use fieldpicker_fields::{
    decode, encode, Cardinality, PickerEntity, PickerSchema, TargetFieldSpec,
    SINGLE_SELECTION_WARNING,
};
use tracing::{debug, error, warn};

use crate::error::Result;
use crate::host::{FormDocument, FormField, HostServices, PickerFactory, PickerWidget};

const CONTAINER_SUFFIX: &str = "_PeoplePicker";
const TOP_SPAN_SUFFIX: &str = "_TopSpan";

/// Element ids derived from a field id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerIds {
    pub field_id: String,
    pub container_id: String,
    pub top_level_id: String,
}

impl PickerIds {
    pub fn for_field(field_id: &str) -> Self {
        let container_id = format!("{field_id}{CONTAINER_SUFFIX}");
        let top_level_id = format!("{container_id}{TOP_SPAN_SUFFIX}");
        Self {
            field_id: field_id.to_string(),
            container_id,
            top_level_id,
        }
    }

    /// Recover the field id from a widget's top-level element id.
    pub fn field_id_from_top_level(top_level_id: &str) -> Option<&str> {
        top_level_id
            .strip_suffix(TOP_SPAN_SUFFIX)?
            .strip_suffix(CONTAINER_SUFFIX)
    }
}

/// What one write-back did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncOutcome {
    /// Value written to the field.
    pub value: String,
    /// Extra selections were removed from the widget.
    pub truncated: bool,
    /// The value differs from the baseline and the form was marked dirty.
    pub marked_dirty: bool,
}

/// Keeps one field and one widget in step for the lifetime of the form.
pub struct PickerAdapter<F, W> {
    field: F,
    widget: W,
    spec: TargetFieldSpec,
    ids: PickerIds,
    baseline: String,
    host: HostServices,
}

impl<F, W> PickerAdapter<F, W>
where
    F: FormField,
    W: PickerWidget,
{
    /// Render a widget for `field` and seed it from the stored value.
    ///
    /// When the widget cannot be initialized its container is removed, the
    /// error is returned and the field is left visible and unchanged. Seeding neither writes the field
    /// nor marks the form dirty.
    pub fn attach<D, Fa>(
        doc: &mut D,
        mut field: F,
        factory: &mut Fa,
        spec: TargetFieldSpec,
        schema: &PickerSchema,
        host: HostServices,
        indicator_color: Option<&str>,
    ) -> Result<Self>
    where
        D: FormDocument<Field = F>,
        Fa: PickerFactory<Widget = W>,
    {
        let ids = PickerIds::for_field(&field.id());

        doc.append_container(&field, &ids.container_id);
        let mut widget = match factory.initialize(&ids.container_id, &[], schema) {
            Ok(widget) => widget,
            Err(e) => {
                error!(field = %spec.name, container = %ids.container_id, error = %e, "picker initialization failed");
                doc.remove_container(&ids.container_id);
                return Err(e);
            }
        };

        if let Some(color) = indicator_color {
            field.set_text_color(color);
        }
        field.hide();

        let stored = field.value();
        let tokens = decode(stored.as_deref());
        let limit = spec.cardinality.seed_limit().unwrap_or(tokens.len());
        for token in tokens.into_iter().take(limit) {
            widget.add_unresolved_selection(PickerEntity::unresolved(token), true);
        }

        let baseline = field.original_value().unwrap_or_default();
        debug!(
            field = %spec.name,
            id = %ids.field_id,
            cardinality = %spec.cardinality,
            seeded = widget.selection_count(),
            "picker attached"
        );

        Ok(Self {
            field,
            widget,
            spec,
            ids,
            baseline,
            host,
        })
    }

    /// Handle the widget's selection-changed notification.
    ///
    /// A single-valued picker holding more than one entity is cut back to its
    /// first entity before anything is written. The truncation will usually
    /// notify again; that second pass sees one entity and writes the same
    /// value.
    pub fn on_selection_changed(&mut self) -> SyncOutcome {
        let count = self.widget.selection_count();
        let admission = self.spec.cardinality.admit(count);

        let mut truncated = false;
        if let (false, Some(keep)) = (admission.accept, admission.truncate_to) {
            warn!(field = %self.spec.name, count, keep, "too many selections, truncating");
            self.host.notifier.warn_user(SINGLE_SELECTION_WARNING);
            self.widget.truncate_selections(keep);
            truncated = true;
        }

        let value = if self.widget.selection_count() == 0 {
            String::new()
        } else {
            encode(
                self.widget
                    .all_selections()
                    .into_iter()
                    .map(|entity| entity.display_text),
            )
        };
        self.field.set_value(&value);

        let marked_dirty = value != self.baseline;
        if marked_dirty {
            self.host.dirty.mark_dirty();
        }
        debug!(field = %self.spec.name, value = %value, marked_dirty, "field synchronized");

        SyncOutcome {
            value,
            truncated,
            marked_dirty,
        }
    }

    pub fn spec(&self) -> &TargetFieldSpec {
        &self.spec
    }

    pub fn cardinality(&self) -> Cardinality {
        self.spec.cardinality
    }

    pub fn ids(&self) -> &PickerIds {
        &self.ids
    }

    /// Stored value the form loaded with.
    pub fn baseline(&self) -> &str {
        &self.baseline
    }

    pub fn field(&self) -> &F {
        &self.field
    }

    pub fn widget(&self) -> &W {
        &self.widget
    }

    pub fn widget_mut(&mut self) -> &mut W {
        &mut self.widget
    }
}
