//! Test utilities for fieldpicker crates
//!
//! In-memory stand-ins for everything the host provides: a form with text
//! inputs, a picker widget library, a resource loader, and a place to collect
//! user warnings. Handles are `Arc<Mutex<..>>` so a test can keep a clone and
//! inspect or drive the same element the adapter holds.
//!
//! ```no_run
//! use fieldpicker_test_utils::{FakeDocument, FakePickerFactory};
//!
//! let mut doc = FakeDocument::new();
//! let sponsor = doc.add_text_input("f1", "Project Sponsor", Some("alice;bob;"));
//! let mut factory = FakePickerFactory::new();
//! // attach an adapter, then drive factory.widget("f1_PeoplePicker")
//! ```

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use fieldpicker::{
    DependencyLoader, DirtyFlag, FormDocument, FormField, HostServices, PickerError,
    PickerFactory, PickerWidget, Result, UserNotifier,
};
use fieldpicker_fields::{PickerEntity, PickerSchema};

fn lock<T>(m: &Mutex<T>) -> MutexGuard<'_, T> {
    m.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[derive(Debug)]
struct FieldState {
    id: String,
    title: String,
    input_type: String,
    value: Option<String>,
    original: Option<String>,
    hidden: bool,
    color: Option<String>,
}

/// An input element on a [`FakeDocument`].
#[derive(Debug, Clone)]
pub struct FakeField(Arc<Mutex<FieldState>>);

impl FakeField {
    /// A text input whose stored and current value are both `value`.
    pub fn text(id: &str, title: &str, value: Option<&str>) -> Self {
        Self::with_type(id, title, "text", value)
    }

    pub fn with_type(id: &str, title: &str, input_type: &str, value: Option<&str>) -> Self {
        Self(Arc::new(Mutex::new(FieldState {
            id: id.to_string(),
            title: title.to_string(),
            input_type: input_type.to_string(),
            value: value.map(str::to_string),
            original: value.map(str::to_string),
            hidden: false,
            color: None,
        })))
    }

    pub fn is_hidden(&self) -> bool {
        lock(&self.0).hidden
    }

    pub fn color(&self) -> Option<String> {
        lock(&self.0).color.clone()
    }

    pub fn is_text(&self) -> bool {
        lock(&self.0).input_type == "text"
    }
}

impl FormField for FakeField {
    fn id(&self) -> String {
        lock(&self.0).id.clone()
    }

    fn title(&self) -> String {
        lock(&self.0).title.clone()
    }

    fn value(&self) -> Option<String> {
        lock(&self.0).value.clone()
    }

    fn set_value(&mut self, value: &str) {
        lock(&self.0).value = Some(value.to_string());
    }

    fn original_value(&self) -> Option<String> {
        lock(&self.0).original.clone()
    }

    fn hide(&mut self) {
        lock(&self.0).hidden = true;
    }

    fn set_text_color(&mut self, color: &str) {
        lock(&self.0).color = Some(color.to_string());
    }
}

/// A rendered form holding inputs in document order.
#[derive(Debug, Default)]
pub struct FakeDocument {
    fields: Vec<FakeField>,
    containers: Vec<(String, String)>,
}

impl FakeDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a text input and return a handle to it.
    pub fn add_text_input(&mut self, id: &str, title: &str, value: Option<&str>) -> FakeField {
        self.add(FakeField::text(id, title, value))
    }

    pub fn add(&mut self, field: FakeField) -> FakeField {
        self.fields.push(field.clone());
        field
    }

    /// Every input, in document order.
    pub fn fields(&self) -> &[FakeField] {
        &self.fields
    }

    /// `(field id, container id)` for every container appended.
    pub fn containers(&self) -> &[(String, String)] {
        &self.containers
    }
}

impl FormDocument for FakeDocument {
    type Field = FakeField;

    fn text_inputs_titled(&self, title: &str) -> Vec<FakeField> {
        self.fields
            .iter()
            .filter(|f| f.is_text() && f.title() == title)
            .cloned()
            .collect()
    }

    fn append_container(&mut self, field: &FakeField, container_id: &str) {
        self.containers
            .push((field.id(), container_id.to_string()));
    }

    fn remove_container(&mut self, container_id: &str) {
        self.containers.retain(|(_, id)| id != container_id);
    }
}

#[derive(Debug)]
struct PickerState {
    top_level_id: String,
    selections: Vec<PickerEntity>,
    schema: PickerSchema,
    resolve_requests: Vec<bool>,
}

/// A picker widget instance created by [`FakePickerFactory`].
#[derive(Debug, Clone)]
pub struct FakePicker(Arc<Mutex<PickerState>>);

impl FakePicker {
    /// Simulate the user picking an entity in the widget.
    pub fn user_add(&self, display_text: &str) {
        lock(&self.0)
            .selections
            .push(PickerEntity::resolved(display_text, display_text));
    }

    /// Simulate the user removing an entity by display text.
    pub fn user_remove(&self, display_text: &str) {
        lock(&self.0)
            .selections
            .retain(|e| e.display_text != display_text);
    }

    /// Display texts currently held, in order.
    pub fn display_texts(&self) -> Vec<String> {
        lock(&self.0)
            .selections
            .iter()
            .map(|e| e.display_text.clone())
            .collect()
    }

    pub fn schema(&self) -> PickerSchema {
        lock(&self.0).schema.clone()
    }

    /// `resolve_immediately` flag of every unresolved add, in order.
    pub fn resolve_requests(&self) -> Vec<bool> {
        lock(&self.0).resolve_requests.clone()
    }
}

impl PickerWidget for FakePicker {
    fn top_level_element_id(&self) -> String {
        lock(&self.0).top_level_id.clone()
    }

    fn add_unresolved_selection(&mut self, entity: PickerEntity, resolve_immediately: bool) {
        let mut state = lock(&self.0);
        state.selections.push(entity);
        state.resolve_requests.push(resolve_immediately);
    }

    fn all_selections(&self) -> Vec<PickerEntity> {
        lock(&self.0).selections.clone()
    }

    fn truncate_selections(&mut self, len: usize) {
        lock(&self.0).selections.truncate(len);
    }
}

/// Widget library that renders [`FakePicker`]s and remembers them by container.
#[derive(Debug, Default)]
pub struct FakePickerFactory {
    widgets: HashMap<String, FakePicker>,
    failing: HashSet<String>,
}

impl FakePickerFactory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make initialization fail for `container_id`.
    pub fn fail_container(mut self, container_id: &str) -> Self {
        self.failing.insert(container_id.to_string());
        self
    }

    /// The widget rendered into `container_id`, if any.
    pub fn widget(&self, container_id: &str) -> Option<FakePicker> {
        self.widgets.get(container_id).cloned()
    }

    pub fn rendered(&self) -> usize {
        self.widgets.len()
    }
}

impl PickerFactory for FakePickerFactory {
    type Widget = FakePicker;

    fn initialize(
        &mut self,
        container_id: &str,
        initial_entities: &[PickerEntity],
        schema: &PickerSchema,
    ) -> Result<FakePicker> {
        if self.failing.contains(container_id) {
            return Err(PickerError::WidgetInit {
                container: container_id.to_string(),
                message: "container not found".to_string(),
            });
        }
        let picker = FakePicker(Arc::new(Mutex::new(PickerState {
            top_level_id: format!("{container_id}_TopSpan"),
            selections: initial_entities.to_vec(),
            schema: schema.clone(),
            resolve_requests: Vec::new(),
        })));
        self.widgets.insert(container_id.to_string(), picker.clone());
        Ok(picker)
    }
}

/// Resource loader that fails the resources it is told to.
#[derive(Debug, Default)]
pub struct FakeLoader {
    failing: HashSet<String>,
    requested: Mutex<Vec<String>>,
}

impl FakeLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail any resource whose URL ends with `suffix`.
    pub fn fail(mut self, suffix: &str) -> Self {
        self.failing.insert(suffix.to_string());
        self
    }

    pub fn requested(&self) -> Vec<String> {
        lock(&self.requested).clone()
    }
}

#[async_trait]
impl DependencyLoader for FakeLoader {
    async fn load(&self, resource: &str) -> std::result::Result<(), String> {
        lock(&self.requested).push(resource.to_string());
        if self.failing.iter().any(|suffix| resource.ends_with(suffix.as_str())) {
            Err("404 Not Found".to_string())
        } else {
            Ok(())
        }
    }
}

/// Collects every warning shown to the user.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    messages: Mutex<Vec<String>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<String> {
        lock(&self.messages).clone()
    }
}

impl UserNotifier for RecordingNotifier {
    fn warn_user(&self, message: &str) {
        lock(&self.messages).push(message.to_string());
    }
}

/// A dirty flag, a notifier, and the [`HostServices`] wired to both.
pub struct TestHost {
    pub dirty: DirtyFlag,
    pub notifier: Arc<RecordingNotifier>,
    pub services: HostServices,
}

impl TestHost {
    pub fn new() -> Self {
        let dirty = DirtyFlag::new();
        let notifier = Arc::new(RecordingNotifier::new());
        let services = HostServices::new(Arc::new(dirty.clone()), notifier.clone());
        Self {
            dirty,
            notifier,
            services,
        }
    }
}

impl Default for TestHost {
    fn default() -> Self {
        Self::new()
    }
}
