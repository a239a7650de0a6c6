//! Snapshot repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Persist the full entity collection as one JSON array under a fixed key.
//! - Keep the read-once / rewrite-after-every-mutation contract cheap.
//!
//! # Invariants
//! - The whole collection is written atomically; there is no per-row state.
//! - `load` returns `Ok(None)` when no snapshot was ever written; garbage is
//!   an error the caller turns into a fallback, never a partial result.

use crate::db::DbError;
use crate::model::entity::{Entity, EntityValidationError};
use rusqlite::{params, Connection, OptionalExtension};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Fixed storage key holding the chart snapshot.
pub const STORAGE_KEY: &str = "org_chart_data";

pub type RepoResult<T> = Result<T, RepoError>;

/// Snapshot persistence and decoding errors.
#[derive(Debug)]
pub enum RepoError {
    Validation(EntityValidationError),
    Db(DbError),
    /// Snapshot text could not be encoded or decoded as an entity array.
    Serde(serde_json::Error),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::Serde(err) => write!(f, "invalid snapshot payload: {err}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Db(err) => Some(err),
            Self::Serde(err) => Some(err),
        }
    }
}

impl From<EntityValidationError> for RepoError {
    fn from(value: EntityValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

impl From<serde_json::Error> for RepoError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serde(value)
    }
}

/// Storage contract for the chart snapshot.
pub trait SnapshotRepository {
    /// Reads the stored collection, `None` when no snapshot exists.
    fn load(&self) -> RepoResult<Option<Vec<Entity>>>;
    /// Replaces the stored collection.
    fn save(&self, entities: &[Entity]) -> RepoResult<()>;
    /// Removes the stored snapshot entirely.
    fn clear(&self) -> RepoResult<()>;
}

/// SQLite-backed snapshot repository.
pub struct SqliteSnapshotRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteSnapshotRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl SnapshotRepository for SqliteSnapshotRepository<'_> {
    fn load(&self) -> RepoResult<Option<Vec<Entity>>> {
        let payload: Option<String> = self
            .conn
            .query_row(
                "SELECT value FROM snapshots WHERE key = ?1;",
                [STORAGE_KEY],
                |row| row.get(0),
            )
            .optional()?;

        let Some(payload) = payload else {
            return Ok(None);
        };

        let entities: Vec<Entity> = serde_json::from_str(&payload)?;
        for entity in &entities {
            entity.validate()?;
        }

        Ok(Some(entities))
    }

    fn save(&self, entities: &[Entity]) -> RepoResult<()> {
        for entity in entities {
            entity.validate()?;
        }

        let payload = serde_json::to_string(entities)?;
        self.conn.execute(
            "INSERT INTO snapshots (key, value, updated_at)
             VALUES (?1, ?2, strftime('%s', 'now') * 1000)
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at;",
            params![STORAGE_KEY, payload],
        )?;

        Ok(())
    }

    fn clear(&self) -> RepoResult<()> {
        self.conn
            .execute("DELETE FROM snapshots WHERE key = ?1;", [STORAGE_KEY])?;
        Ok(())
    }
}
