//! JSON export of the entity collection.

use crate::model::entity::Entity;

/// Default file name offered for the exported collection.
pub const JSON_EXPORT_FILE_NAME: &str = "organizasyon-semasi.json";

/// Pretty-printed JSON array of the full collection, field names matching
/// the persisted snapshot format.
pub fn to_pretty_json(entities: &[Entity]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(entities)
}
