//! Org entity domain model.
//!
//! # Responsibility
//! - Define the canonical record shared by person and department chart nodes.
//! - Provide constructors and kind-specific field validation.
//!
//! # Invariants
//! - `id` is unique across a chart and never changes after creation.
//! - `title` and `is_secretary` are meaningful only for `EntityKind::Person`.
//! - `reports_to` may dangle; unresolved parents are treated as roots by the
//!   tree builder, never as errors.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for a chart entity.
///
/// Kept as an opaque string: freshly created entities get UUID text, but
/// imported records bring their own ids and those are preserved verbatim.
pub type EntityId = String;

/// Discriminator for the two chart record shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    /// A named person with a role title.
    Person,
    /// An organizational unit without a separate title.
    Department,
}

/// Kind-specific field constraint violations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntityValidationError {
    /// Department record carries a person-only title.
    DepartmentWithTitle(EntityId),
    /// Department record carries the secretary flag.
    DepartmentAsSecretary(EntityId),
    /// Person record is missing its title field (an empty title is allowed,
    /// an absent one is not).
    PersonWithoutTitle(EntityId),
}

impl Display for EntityValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DepartmentWithTitle(id) => {
                write!(f, "department must not carry a title: {id}")
            }
            Self::DepartmentAsSecretary(id) => {
                write!(f, "department must not carry the secretary flag: {id}")
            }
            Self::PersonWithoutTitle(id) => write!(f, "person must carry a title field: {id}"),
        }
    }
}

impl Error for EntityValidationError {}

/// Canonical flat record for one chart entry.
///
/// One storage shape covers both kinds; `title` and `is_secretary` are
/// projection fields that only persons use. Serialized field names match the
/// persisted JSON snapshot format (`reportsTo`, `type`, `isSecretary`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    /// Stable opaque ID used for parent links and search results.
    pub id: EntityId,
    /// Serialized as `type` to match the snapshot schema.
    #[serde(rename = "type")]
    pub kind: EntityKind,
    /// Display text; may be empty (the renderer shows a placeholder).
    pub name: String,
    /// Parent reference, `None` for forest roots.
    #[serde(rename = "reportsTo", default)]
    pub reports_to: Option<EntityId>,
    /// Role label. `Some` (possibly empty) for persons, `None` for departments.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Marks a person for side placement beside their manager.
    #[serde(rename = "isSecretary", default, skip_serializing_if = "is_false")]
    pub is_secretary: bool,
}

fn is_false(value: &bool) -> bool {
    !*value
}

impl Entity {
    /// Returns a fresh globally-unique entity id.
    pub fn new_id() -> EntityId {
        Uuid::new_v4().to_string()
    }

    /// Creates a person record.
    pub fn person(
        id: impl Into<EntityId>,
        name: impl Into<String>,
        title: impl Into<String>,
        reports_to: Option<EntityId>,
    ) -> Self {
        Self {
            id: id.into(),
            kind: EntityKind::Person,
            name: name.into(),
            reports_to,
            title: Some(title.into()),
            is_secretary: false,
        }
    }

    /// Creates a department record.
    pub fn department(
        id: impl Into<EntityId>,
        name: impl Into<String>,
        reports_to: Option<EntityId>,
    ) -> Self {
        Self {
            id: id.into(),
            kind: EntityKind::Department,
            name: name.into(),
            reports_to,
            title: None,
            is_secretary: false,
        }
    }

    /// Returns whether this record is a person.
    pub fn is_person(&self) -> bool {
        self.kind == EntityKind::Person
    }

    /// Checks kind-specific field constraints.
    ///
    /// Write paths must call this before persisting; read paths call it to
    /// reject invalid persisted state instead of masking it.
    pub fn validate(&self) -> Result<(), EntityValidationError> {
        match self.kind {
            EntityKind::Person => {
                if self.title.is_none() {
                    return Err(EntityValidationError::PersonWithoutTitle(self.id.clone()));
                }
            }
            EntityKind::Department => {
                if self.title.is_some() {
                    return Err(EntityValidationError::DepartmentWithTitle(self.id.clone()));
                }
                if self.is_secretary {
                    return Err(EntityValidationError::DepartmentAsSecretary(self.id.clone()));
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{Entity, EntityKind, EntityValidationError};

    #[test]
    fn person_constructor_sets_projection_fields() {
        let person = Entity::person("p1", "Ayşe", "Müdür", None);
        assert_eq!(person.kind, EntityKind::Person);
        assert_eq!(person.title.as_deref(), Some("Müdür"));
        assert!(!person.is_secretary);
        person.validate().expect("constructed person should be valid");
    }

    #[test]
    fn department_rejects_person_only_fields() {
        let mut department = Entity::department("d1", "Yazılım Birimi", None);
        department.validate().expect("plain department should be valid");

        department.title = Some("x".to_string());
        assert_eq!(
            department.validate().unwrap_err(),
            EntityValidationError::DepartmentWithTitle("d1".to_string())
        );

        department.title = None;
        department.is_secretary = true;
        assert_eq!(
            department.validate().unwrap_err(),
            EntityValidationError::DepartmentAsSecretary("d1".to_string())
        );
    }

    #[test]
    fn snapshot_field_names_round_trip() {
        let person = Entity::person("p1", "Ayşe", "Müdür", Some("d1".to_string()));
        let json = serde_json::to_string(&person).expect("entity should serialize");
        assert!(json.contains("\"reportsTo\":\"d1\""));
        assert!(json.contains("\"type\":\"person\""));

        let back: Entity = serde_json::from_str(&json).expect("entity should deserialize");
        assert_eq!(back, person);
    }

    #[test]
    fn secretary_flag_defaults_to_false_when_absent() {
        let raw = r#"{"id":"p1","type":"person","name":"Ali","reportsTo":null,"title":""}"#;
        let entity: Entity = serde_json::from_str(raw).expect("record should deserialize");
        assert!(!entity.is_secretary);
    }
}
