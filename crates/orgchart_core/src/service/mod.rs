//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate store mutations, persistence and import/export flows.
//! - Keep embedding layers decoupled from storage details.

pub mod chart_service;
