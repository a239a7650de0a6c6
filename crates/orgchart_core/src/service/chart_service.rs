//! Chart use-case service.
//!
//! # Responsibility
//! - Own the live entity collection and apply the store mutation rules.
//! - Persist a snapshot after every accepted mutation, fire-and-forget.
//! - Orchestrate CSV import, JSON export and image-export scoping.
//!
//! # Invariants
//! - The in-memory collection is authoritative; persistence failures are
//!   logged and never surfaced as blocking errors.
//! - `id` and `kind` of an existing entity never change.
//! - The collection never becomes empty through `remove_entity`.

use crate::export::image::{self, ImageExportOptions};
use crate::export::json;
use crate::import::csv::{parse_csv, CsvImport, CsvImportError, SkippedRow};
use crate::model::entity::{Entity, EntityId, EntityValidationError};
use crate::model::sample::sample_org;
use crate::repo::snapshot_repo::SnapshotRepository;
use crate::search::filter::search_entities;
use crate::tree::builder::{build_forest, TreeNode};
use log::{error, info, warn};
use std::cell::Cell;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Default display values for freshly added records.
const NEW_PERSON_NAME: &str = "Yeni Kişi";
const NEW_PERSON_TITLE: &str = "Ünvan";
const NEW_DEPARTMENT_NAME: &str = "Yeni Bölüm";
const NEW_SECRETARY_NAME: &str = "Yeni Sekreter";
const NEW_SECRETARY_TITLE: &str = "Sekreter";

/// Errors from direct store mutations and exports.
#[derive(Debug)]
pub enum ChartError {
    /// Target entity does not exist.
    NotFound(EntityId),
    /// Update violates kind-specific field constraints.
    Validation(EntityValidationError),
    /// JSON encoding of the collection failed.
    Export(serde_json::Error),
}

impl Display for ChartError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(id) => write!(f, "entity not found: {id}"),
            Self::Validation(err) => write!(f, "{err}"),
            Self::Export(err) => write!(f, "json export failed: {err}"),
        }
    }
}

impl Error for ChartError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::NotFound(_) => None,
            Self::Validation(err) => Some(err),
            Self::Export(err) => Some(err),
        }
    }
}

impl From<EntityValidationError> for ChartError {
    fn from(value: EntityValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Errors from the CSV import operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportError {
    /// Structural CSV failure; nothing was imported.
    Csv(CsvImportError),
    /// Parse succeeded but no rows survived; the store is untouched.
    NoRows,
}

impl Display for ImportError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Csv(err) => write!(f, "{err}"),
            Self::NoRows => write!(f, "csv input contains no importable rows"),
        }
    }
}

impl Error for ImportError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Csv(err) => Some(err),
            Self::NoRows => None,
        }
    }
}

impl From<CsvImportError> for ImportError {
    fn from(value: CsvImportError) -> Self {
        Self::Csv(value)
    }
}

/// Mutable-field replacement shape for one entity.
///
/// `id` only selects the record; `kind` is not part of the shape, so neither
/// can change through an update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityUpdate {
    pub id: EntityId,
    pub name: String,
    pub reports_to: Option<EntityId>,
    pub title: Option<String>,
    pub is_secretary: bool,
}

impl From<&Entity> for EntityUpdate {
    fn from(entity: &Entity) -> Self {
        Self {
            id: entity.id.clone(),
            name: entity.name.clone(),
            reports_to: entity.reports_to.clone(),
            title: entity.title.clone(),
            is_secretary: entity.is_secretary,
        }
    }
}

/// Result of a successful CSV import.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportOutcome {
    /// Number of records now in the store.
    pub imported: usize,
    /// Rows dropped with warnings during parsing.
    pub skipped: Vec<SkippedRow>,
}

/// Use-case facade owning the chart state.
pub struct ChartService<R: SnapshotRepository> {
    repo: R,
    entities: Vec<Entity>,
    presentation: Cell<bool>,
}

impl<R: SnapshotRepository> ChartService<R> {
    /// Loads the persisted snapshot, falling back to the sample dataset when
    /// it is absent, empty or garbage.
    pub fn load_or_default(repo: R) -> Self {
        let entities = match repo.load() {
            Ok(Some(entities)) if !entities.is_empty() => {
                info!(
                    "event=snapshot_load module=service status=ok entities={}",
                    entities.len()
                );
                entities
            }
            Ok(_) => {
                info!("event=snapshot_load module=service status=empty fallback=sample");
                sample_org()
            }
            Err(err) => {
                error!("event=snapshot_load module=service status=error fallback=sample error={err}");
                sample_org()
            }
        };

        Self {
            repo,
            entities,
            presentation: Cell::new(false),
        }
    }

    /// The live collection in source order.
    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    /// Derives the rendered forest; recomputed on every call.
    pub fn tree(&self) -> Vec<TreeNode> {
        build_forest(&self.entities)
    }

    /// Runs the substring filter over the live collection.
    pub fn search(&self, query: &str) -> Vec<EntityId> {
        search_entities(&self.entities, query)
    }

    /// Adds a person reporting to the first entity, if any.
    pub fn add_person(&mut self) -> EntityId {
        let entity = Entity::person(
            Entity::new_id(),
            NEW_PERSON_NAME,
            NEW_PERSON_TITLE,
            self.default_parent(),
        );
        self.push(entity)
    }

    /// Adds a department reporting to the first entity, if any.
    pub fn add_department(&mut self) -> EntityId {
        let entity = Entity::department(Entity::new_id(), NEW_DEPARTMENT_NAME, self.default_parent());
        self.push(entity)
    }

    /// Adds a secretary person under the given manager.
    ///
    /// The manager id is not checked: a dangling reference renders as a
    /// forest root, same as any other unresolved parent.
    pub fn add_secretary(&mut self, manager_id: &str) -> EntityId {
        let mut entity = Entity::person(
            Entity::new_id(),
            NEW_SECRETARY_NAME,
            NEW_SECRETARY_TITLE,
            Some(manager_id.to_string()),
        );
        entity.is_secretary = true;
        self.push(entity)
    }

    /// Replaces the mutable fields of the entity selected by `update.id`.
    pub fn update_entity(&mut self, update: EntityUpdate) -> Result<(), ChartError> {
        let Some(position) = self
            .entities
            .iter()
            .position(|entity| entity.id == update.id)
        else {
            return Err(ChartError::NotFound(update.id));
        };

        let existing = &self.entities[position];
        let replacement = Entity {
            id: existing.id.clone(),
            kind: existing.kind,
            name: update.name,
            reports_to: update.reports_to,
            title: update.title,
            is_secretary: update.is_secretary,
        };
        replacement.validate()?;

        self.entities[position] = replacement;
        self.persist();
        Ok(())
    }

    /// Removes one entity and reparents its direct children to no-parent.
    ///
    /// Returns whether a record was removed. Refused when the collection
    /// holds a single record; a nonexistent id is a harmless no-op.
    pub fn remove_entity(&mut self, id: &str) -> bool {
        if self.entities.len() <= 1 {
            warn!("event=entity_remove module=service status=refused reason=last_entity");
            return false;
        }

        let before = self.entities.len();
        self.entities.retain(|entity| entity.id != id);
        if self.entities.len() == before {
            return false;
        }

        // One level only: children flatten to roots, they do not move up to
        // the removed entity's former parent.
        for entity in &mut self.entities {
            if entity.reports_to.as_deref() == Some(id) {
                entity.reports_to = None;
            }
        }

        self.persist();
        true
    }

    /// Replaces the whole collection from CSV text.
    ///
    /// No partial import: structural errors and zero-row results leave the
    /// store untouched.
    pub fn import_csv(&mut self, raw_text: &str) -> Result<ImportOutcome, ImportError> {
        let CsvImport { entities, skipped } = parse_csv(raw_text)?;
        if entities.is_empty() {
            warn!("event=csv_import module=service status=error reason=no_rows");
            return Err(ImportError::NoRows);
        }

        let imported = entities.len();
        info!(
            "event=csv_import module=service status=ok rows={imported} skipped={}",
            skipped.len()
        );
        self.entities = entities;
        self.persist();

        Ok(ImportOutcome { imported, skipped })
    }

    /// Pretty-printed JSON of the full collection, for file download.
    pub fn export_json(&self) -> Result<String, ChartError> {
        json::to_pretty_json(&self.entities).map_err(ChartError::Export)
    }

    /// Clears the stored snapshot and restores the sample dataset.
    ///
    /// Irreversible; user confirmation is a presentation-layer concern.
    pub fn reset(&mut self) {
        if let Err(err) = self.repo.clear() {
            error!("event=snapshot_clear module=service status=error error={err}");
        }
        self.entities = sample_org();
        self.persist();
        info!("event=chart_reset module=service status=ok");
    }

    /// Whether export-only affordances should currently be hidden.
    pub fn is_presentation_mode(&self) -> bool {
        self.presentation.get()
    }

    /// Runs a delegated image capture with the presentation marker set.
    ///
    /// The marker is cleared afterwards regardless of the capture outcome.
    pub fn export_image<T, E: Display>(
        &self,
        options: &ImageExportOptions,
        capture: impl FnOnce(&ImageExportOptions) -> Result<T, E>,
    ) -> Result<T, E> {
        let result = image::capture_with_presentation(&self.presentation, options, capture);
        if let Err(err) = &result {
            error!("event=image_export module=service status=error error={err}");
        }
        result
    }

    fn default_parent(&self) -> Option<EntityId> {
        self.entities.first().map(|entity| entity.id.clone())
    }

    fn push(&mut self, entity: Entity) -> EntityId {
        let id = entity.id.clone();
        self.entities.push(entity);
        self.persist();
        id
    }

    /// Fire-and-forget snapshot write.
    fn persist(&self) {
        if let Err(err) = self.repo.save(&self.entities) {
            error!("event=snapshot_save module=service status=error error={err}");
        }
    }
}
