//! Bulk transfer entry points.
//!
//! # Responsibility
//! - Move gear records between the storage file and external JSON
//!   documents.
//! - Own the asymmetric import/export wire shapes.

pub mod json;
