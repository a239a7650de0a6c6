//! Chart domain model.
//!
//! # Responsibility
//! - Define the canonical flat record for person/department chart entries.
//! - Ship the built-in fallback dataset used when no snapshot exists.
//!
//! # Invariants
//! - Every entity is identified by a stable opaque `EntityId`.
//! - Hierarchy lives only in `reports_to` pointers; tree shape is derived.

pub mod entity;
pub mod sample;
