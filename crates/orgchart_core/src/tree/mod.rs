//! Derived hierarchy views.
//!
//! # Responsibility
//! - Convert the flat entity collection into the rendered forest shape.
//! - Keep the derivation pure so it can run on every read.

pub mod builder;
