//! Field discovery: find declared fields on the form and bind pickers.

use fieldpicker_fields::{PickerSchema, TargetFieldSpec, TargetFields};
use tracing::{info, warn};

use crate::adapter::PickerAdapter;
use crate::host::{FormDocument, FormField, HostServices, PickerFactory};
use crate::session::PickerSession;

/// A form element matched to its declaration.
#[derive(Debug, Clone)]
pub struct DiscoveredField<F> {
    pub spec: TargetFieldSpec,
    pub field: F,
}

/// Match every declared field title against the form's text inputs.
///
/// Titles match exactly. Several elements may share a title; each one is
/// returned. Order is declaration order, then document order.
pub fn discover<D: FormDocument>(doc: &D, targets: &TargetFields) -> Vec<DiscoveredField<D::Field>> {
    targets
        .iter()
        .flat_map(|spec| {
            doc.text_inputs_titled(&spec.name)
                .into_iter()
                .map(move |field| DiscoveredField {
                    spec: spec.clone(),
                    field,
                })
        })
        .collect()
}

/// Bind one picker to every discovered field.
///
/// An element that is already bound is skipped. An element whose widget
/// fails to initialize keeps its plain input; the others still bind.
pub fn render_pickers<D, Fa>(
    doc: &mut D,
    factory: &mut Fa,
    targets: &TargetFields,
    schema: &PickerSchema,
    host: &HostServices,
    indicator_color: Option<&str>,
) -> PickerSession<D::Field, Fa::Widget>
where
    D: FormDocument,
    Fa: PickerFactory,
{
    let mut session = PickerSession::new();

    for DiscoveredField { spec, field } in discover(doc, targets) {
        let field_id = field.id();
        if session.contains(&field_id) {
            warn!(field = %spec.name, id = %field_id, "field already has a picker, skipping");
            continue;
        }

        let name = spec.name.clone();
        match PickerAdapter::attach(
            doc,
            field,
            factory,
            spec,
            schema,
            host.clone(),
            indicator_color,
        ) {
            Ok(adapter) => {
                session.insert(adapter);
                info!(field = %name, id = %field_id, "picker rendered");
            }
            Err(e) => {
                warn!(field = %name, id = %field_id, error = %e, "leaving field as plain text");
            }
        }
    }

    session
}
