//! Core domain logic for the organizational-chart editor.
//! This crate is the single source of truth for chart invariants.

pub mod db;
pub mod export;
pub mod import;
pub mod logging;
pub mod model;
pub mod repo;
pub mod search;
pub mod service;
pub mod tree;

pub use export::image::{ImageExportOptions, PresentationGuard, IMAGE_EXPORT_FILE_NAME};
pub use export::json::JSON_EXPORT_FILE_NAME;
pub use import::csv::{parse_csv, CsvImport, CsvImportError, SkipReason, SkippedRow};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::entity::{Entity, EntityId, EntityKind, EntityValidationError};
pub use model::sample::sample_org;
pub use repo::snapshot_repo::{
    RepoError, RepoResult, SnapshotRepository, SqliteSnapshotRepository, STORAGE_KEY,
};
pub use search::filter::{search_entities, SearchCursor};
pub use service::chart_service::{
    ChartError, ChartService, EntityUpdate, ImportError, ImportOutcome,
};
pub use tree::builder::{build_forest, forest_size, TreeNode};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
