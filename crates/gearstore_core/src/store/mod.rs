//! Store facade over repository and transfer layers.
//!
//! # Responsibility
//! - Bind one storage path to the full operation surface.
//! - Enforce the one-connection-per-operation resource model.

pub mod gear_store;
