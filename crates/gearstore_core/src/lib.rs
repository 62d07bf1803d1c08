//! Core persistence layer for gear packing/inventory tracking.
//! This crate is the single source of truth for the gear storage contract.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod store;
pub mod transfer;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::gear::{Gear, GearId};
pub use repo::gear_repo::{GearRepository, RepoError, RepoResult, SqliteGearRepository};
pub use store::gear_store::{GearStore, StoreError, StoreResult, DEFAULT_STORE_FILE};
pub use transfer::json::{
    export_gear, import_gear, GearExportRecord, GearImportRecord, TransferError, TransferResult,
};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
