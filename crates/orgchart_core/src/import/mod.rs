//! Chart data ingestion.
//!
//! # Responsibility
//! - Parse user-supplied delimited text into a replacement collection.
//! - Keep ingestion pure; file reading and store replacement live elsewhere.

pub mod csv;
