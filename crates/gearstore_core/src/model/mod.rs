//! Domain model for the gear persistence layer.
//!
//! # Responsibility
//! - Define the canonical data structure mapped to storage rows.
//!
//! # Invariants
//! - Every record is identified by a stable caller-assigned `GearId`.
//! - There are no secondary entities or relationships.

pub mod gear;
