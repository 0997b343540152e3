//! Cardinality policy.
//!
//! Decides whether a picker may keep the selections it currently holds.
//! The policy only answers; the adapter owns every mutation.

use crate::types::Cardinality;

/// Shown to the user before a single-valued picker is cut back to one entry.
pub const SINGLE_SELECTION_WARNING: &str =
    "Only one selection is allowed. Extra entries will be removed.";

/// Outcome of checking a selection count against a cardinality.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Admission {
    pub accept: bool,
    /// When rejected, how many leading selections to keep.
    pub truncate_to: Option<usize>,
}

impl Admission {
    fn accepted() -> Self {
        Self {
            accept: true,
            truncate_to: None,
        }
    }

    fn truncate(to: usize) -> Self {
        Self {
            accept: false,
            truncate_to: Some(to),
        }
    }
}

impl Cardinality {
    /// Check `count` selections against this cardinality.
    pub fn admit(self, count: usize) -> Admission {
        match self {
            Cardinality::Multiple => Admission::accepted(),
            Cardinality::Single if count <= 1 => Admission::accepted(),
            Cardinality::Single => Admission::truncate(1),
        }
    }

    /// How many stored tokens may seed a picker, `None` for no bound.
    ///
    /// Legacy rows written while a field was multi-valued keep only their
    /// first token once the field is redeclared single.
    pub fn seed_limit(self) -> Option<usize> {
        match self {
            Cardinality::Single => Some(1),
            Cardinality::Multiple => None,
        }
    }
}
