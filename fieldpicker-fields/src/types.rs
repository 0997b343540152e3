//! Core types for target fields and picker entities.
//!
//! All types serialize to/from YAML via serde so deployments can declare
//! their target fields and widget options in configuration files.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FieldsError;

/// How many selections a target field may hold.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum Cardinality {
    /// Exactly one selection (or none).
    #[serde(alias = "one")]
    Single,
    /// Any number of selections.
    #[serde(alias = "many", alias = "multi")]
    Multiple,
}

impl Cardinality {
    pub fn as_str(self) -> &'static str {
        match self {
            Cardinality::Single => "single",
            Cardinality::Multiple => "multiple",
        }
    }
}

impl fmt::Display for Cardinality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Cardinality {
    type Err = FieldsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "single" | "one" => Ok(Cardinality::Single),
            "multiple" | "many" | "multi" => Ok(Cardinality::Multiple),
            _ => Err(FieldsError::UnknownCardinality {
                value: s.to_string(),
            }),
        }
    }
}

/// A field declared as picker-backed: its form title and cardinality.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TargetFieldSpec {
    pub name: String,
    pub cardinality: Cardinality,
}

impl TargetFieldSpec {
    pub fn new(name: impl Into<String>, cardinality: Cardinality) -> Self {
        Self {
            name: name.into(),
            cardinality,
        }
    }
}

/// Kind of principal a picker entity refers to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum EntityType {
    #[default]
    User,
    DistributionList,
    SecurityGroup,
    SharePointGroup,
}

/// Principal kinds the widget is allowed to search for.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum AccountType {
    User,
    #[serde(rename = "DL")]
    DistributionList,
    SecGroup,
    #[serde(rename = "SPGroup")]
    SharePointGroup,
}

impl AccountType {
    /// The token the widget expects in its account type filter.
    pub fn as_filter_token(self) -> &'static str {
        match self {
            AccountType::User => "User",
            AccountType::DistributionList => "DL",
            AccountType::SecGroup => "SecGroup",
            AccountType::SharePointGroup => "SPGroup",
        }
    }
}

/// One selection record held by a picker widget.
///
/// Unresolved entities carry only the free-text token the field stored; the
/// widget may resolve them against a directory later, which is outside our
/// concern. The display text is what gets written back to the field.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PickerEntity {
    pub key: String,
    pub display_text: String,
    #[serde(default)]
    pub entity_type: EntityType,
    #[serde(default)]
    pub resolved: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_fill_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_fill_display_text: Option<String>,
}

impl PickerEntity {
    /// Build an unresolved user entity whose key and display text are `token`.
    pub fn unresolved(token: impl Into<String>) -> Self {
        let token = token.into();
        Self {
            key: token.clone(),
            display_text: token.clone(),
            entity_type: EntityType::User,
            resolved: false,
            auto_fill_key: Some(token.clone()),
            auto_fill_display_text: Some(token),
        }
    }

    /// Build a resolved entity, as a widget would after a directory lookup.
    pub fn resolved(key: impl Into<String>, display_text: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            display_text: display_text.into(),
            entity_type: EntityType::User,
            resolved: true,
            auto_fill_key: None,
            auto_fill_display_text: None,
        }
    }
}

/// Principal source bitmask meaning "every source".
pub const PRINCIPAL_SOURCE_ALL: u8 = 15;

/// Widget options passed when a picker is initialized.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PickerSchema {
    pub account_types: Vec<AccountType>,
    pub search_source: u8,
    pub resolve_source: u8,
    pub allow_multiple: bool,
    pub max_suggestions: u32,
    pub width_px: u32,
}

impl Default for PickerSchema {
    fn default() -> Self {
        Self {
            account_types: vec![AccountType::User],
            search_source: PRINCIPAL_SOURCE_ALL,
            resolve_source: PRINCIPAL_SOURCE_ALL,
            allow_multiple: true,
            max_suggestions: 50,
            width_px: 360,
        }
    }
}

impl PickerSchema {
    /// Comma-joined account type filter, e.g. `User,DL,SecGroup`.
    pub fn account_type_filter(&self) -> String {
        self.account_types
            .iter()
            .map(|t| t.as_filter_token())
            .collect::<Vec<_>>()
            .join(",")
    }

    /// CSS width, e.g. `360px`.
    pub fn width(&self) -> String {
        format!("{}px", self.width_px)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cardinality_parses_aliases() {
        assert_eq!("single".parse::<Cardinality>().unwrap(), Cardinality::Single);
        assert_eq!(" One ".parse::<Cardinality>().unwrap(), Cardinality::Single);
        assert_eq!("multi".parse::<Cardinality>().unwrap(), Cardinality::Multiple);
        assert_eq!("MANY".parse::<Cardinality>().unwrap(), Cardinality::Multiple);
    }

    #[test]
    fn cardinality_rejects_unknown() {
        let err = "several".parse::<Cardinality>().unwrap_err();
        assert_eq!(
            err,
            FieldsError::UnknownCardinality {
                value: "several".into()
            }
        );
    }

    #[test]
    fn cardinality_yaml_accepts_aliases() {
        let parsed: Cardinality = serde_yaml_ng::from_str("many").unwrap();
        assert_eq!(parsed, Cardinality::Multiple);
        let yaml = serde_yaml_ng::to_string(&Cardinality::Single).unwrap();
        assert_eq!(yaml.trim(), "single");
    }

    #[test]
    fn target_field_spec_from_yaml() {
        let yaml_input = r#"
name: Project Sponsor
cardinality: multiple
"#;
        let spec: TargetFieldSpec = serde_yaml_ng::from_str(yaml_input).unwrap();
        assert_eq!(spec, TargetFieldSpec::new("Project Sponsor", Cardinality::Multiple));
    }

    #[test]
    fn unresolved_entity_uses_token_everywhere() {
        let entity = PickerEntity::unresolved("alice");
        assert_eq!(entity.key, "alice");
        assert_eq!(entity.display_text, "alice");
        assert_eq!(entity.auto_fill_key.as_deref(), Some("alice"));
        assert_eq!(entity.auto_fill_display_text.as_deref(), Some("alice"));
        assert_eq!(entity.entity_type, EntityType::User);
        assert!(!entity.resolved);
    }

    #[test]
    fn schema_defaults_match_widget_expectations() {
        let schema = PickerSchema::default();
        assert_eq!(schema.account_type_filter(), "User");
        assert_eq!(schema.search_source, 15);
        assert_eq!(schema.resolve_source, 15);
        assert!(schema.allow_multiple);
        assert_eq!(schema.max_suggestions, 50);
        assert_eq!(schema.width(), "360px");
    }

    #[test]
    fn schema_partial_yaml_keeps_defaults() {
        let yaml_input = r#"
account_types: [User, DL, SecGroup, SPGroup]
width_px: 480
"#;
        let schema: PickerSchema = serde_yaml_ng::from_str(yaml_input).unwrap();
        assert_eq!(schema.account_type_filter(), "User,DL,SecGroup,SPGroup");
        assert_eq!(schema.width(), "480px");
        assert_eq!(schema.max_suggestions, 50);
    }
}
