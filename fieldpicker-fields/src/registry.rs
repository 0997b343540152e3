//! The declared set of picker-backed fields.
//!
//! Keeps declaration order (discovery binds fields in that order) and an
//! index by name so a title can only ever be declared once.

use std::collections::HashMap;

use tracing::debug;

use crate::error::{FieldsError, Result};
use crate::types::{Cardinality, TargetFieldSpec};

/// Ordered, name-unique collection of target field declarations.
///
/// ```rust
/// use fieldpicker_fields::{Cardinality, TargetFields};
///
/// let targets = TargetFields::new()
///     .multiple("Project Sponsor")?
///     .single("Project Sponsor 2")?;
/// assert_eq!(targets.get("Project Sponsor 2").map(|s| s.cardinality), Some(Cardinality::Single));
/// # Ok::<(), fieldpicker_fields::FieldsError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct TargetFields {
    specs: Vec<TargetFieldSpec>,
    name_index: HashMap<String, usize>,
}

impl TargetFields {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from an iterator of specs, failing on the first bad declaration.
    pub fn from_specs(specs: impl IntoIterator<Item = TargetFieldSpec>) -> Result<Self> {
        let mut targets = Self::new();
        for spec in specs {
            targets.insert(spec)?;
        }
        Ok(targets)
    }

    /// Declare a multi-valued field.
    pub fn multiple(mut self, name: impl Into<String>) -> Result<Self> {
        self.insert(TargetFieldSpec::new(name, Cardinality::Multiple))?;
        Ok(self)
    }

    /// Declare a single-valued field.
    pub fn single(mut self, name: impl Into<String>) -> Result<Self> {
        self.insert(TargetFieldSpec::new(name, Cardinality::Single))?;
        Ok(self)
    }

    /// Add a declaration. Names are trimmed before the uniqueness check.
    pub fn insert(&mut self, spec: TargetFieldSpec) -> Result<()> {
        let name = spec.name.trim().to_string();
        if name.is_empty() {
            return Err(FieldsError::EmptyFieldName);
        }
        if self.name_index.contains_key(&name) {
            return Err(FieldsError::DuplicateFieldName { name });
        }

        debug!(name = %name, cardinality = %spec.cardinality, "declared target field");
        let idx = self.specs.len();
        self.name_index.insert(name.clone(), idx);
        self.specs.push(TargetFieldSpec {
            name,
            cardinality: spec.cardinality,
        });
        Ok(())
    }

    /// Look up a declaration by exact field title.
    pub fn get(&self, name: &str) -> Option<&TargetFieldSpec> {
        self.name_index.get(name).map(|&i| &self.specs[i])
    }

    pub fn iter(&self) -> impl Iterator<Item = &TargetFieldSpec> {
        self.specs.iter()
    }

    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }
}

impl<'a> IntoIterator for &'a TargetFields {
    type Item = &'a TargetFieldSpec;
    type IntoIter = std::slice::Iter<'a, TargetFieldSpec>;

    fn into_iter(self) -> Self::IntoIter {
        self.specs.iter()
    }
}
