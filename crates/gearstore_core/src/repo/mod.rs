//! Repository layer abstraction and persistence implementation.
//!
//! # Responsibility
//! - Define the data access contract for gear records.
//! - Isolate SQLite query details from the store facade.
//!
//! # Invariants
//! - Repository statements bind all values as parameters, never as
//!   interpolated literals.

pub mod gear_repo;
