//! Chart search entry points.
//!
//! # Responsibility
//! - Expose the substring filter over the live entity collection.
//! - Keep match-list and cursor shaping inside core.

pub mod filter;
