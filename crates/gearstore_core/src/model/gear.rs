//! Gear domain model.
//!
//! # Responsibility
//! - Define the canonical record persisted in the `gear` table.
//! - Provide small lifecycle helpers for packing state.
//!
//! # Invariants
//! - `id` is caller-assigned and unique across the backing table.
//! - In-memory values are disposable views; the table is the system of
//!   record.

use serde::{Deserialize, Serialize};

/// Caller-assigned identifier for a gear item.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type GearId = i64;

/// One piece of outdoor/travel equipment tracked for packing.
///
/// The storage column set matches this shape one-to-one; `is_packed` is
/// persisted as a 0/1 integer. The asymmetric JSON wire shapes used by bulk
/// import/export live in the transfer layer, not here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gear {
    /// Primary key in the backing table.
    pub id: GearId,
    /// Display name, e.g. "Backpack".
    pub name: String,
    /// Manufacturer, e.g. "North Face".
    pub producer: String,
    /// Manufacturer's model designation.
    pub model: String,
    /// Weight in kilograms by convention; the unit is not enforced.
    pub weight: f64,
    /// Whether the item is currently packed.
    pub is_packed: bool,
    /// Free-form category label; no enumerated set.
    pub category: String,
}

impl Gear {
    /// Creates a gear record with every field supplied by the caller.
    pub fn new(
        id: GearId,
        name: impl Into<String>,
        producer: impl Into<String>,
        model: impl Into<String>,
        weight: f64,
        is_packed: bool,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            producer: producer.into(),
            model: model.into(),
            weight,
            is_packed,
            category: category.into(),
        }
    }

    /// Marks this item as packed.
    pub fn pack(&mut self) {
        self.is_packed = true;
    }

    /// Marks this item as not packed.
    pub fn unpack(&mut self) {
        self.is_packed = false;
    }
}
