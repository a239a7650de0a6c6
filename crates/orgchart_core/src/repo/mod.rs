//! Persistence layer abstractions and implementations.
//!
//! # Responsibility
//! - Define the snapshot storage contract used by the chart service.
//! - Isolate SQL details from business orchestration.
//!
//! # Invariants
//! - Write paths validate every entity before persistence.
//! - Read paths reject invalid persisted state instead of masking it.

pub mod snapshot_repo;
