//! Gear store facade.
//!
//! # Responsibility
//! - Expose schema initialization, CRUD and bulk transfer against one
//!   named storage file.
//! - Open a dedicated connection per operation and drop it before
//!   returning.
//!
//! # Invariants
//! - No connection is ever reused across operations.
//! - No pooling and no background work.
//! - Only `initialize` creates schema; every other operation surfaces the
//!   engine's "no such table" failure against an uninitialized store.
//! - Failures propagate untranslated; there is no retry.

use crate::db::{open_store, schema, DbError};
use crate::model::gear::{Gear, GearId};
use crate::repo::gear_repo::{GearRepository, RepoError, SqliteGearRepository};
use crate::transfer::json::{export_gear, import_gear, TransferError};
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

/// Default storage file name used when the caller does not supply one.
pub const DEFAULT_STORE_FILE: &str = "gear.db";

/// Result type for store facade operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Facade error unifying the storage, repository and transfer layers.
#[derive(Debug)]
pub enum StoreError {
    Db(DbError),
    Repo(RepoError),
    Transfer(TransferError),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Repo(err) => write!(f, "{err}"),
            Self::Transfer(err) => write!(f, "{err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Repo(err) => Some(err),
            Self::Transfer(err) => Some(err),
        }
    }
}

impl From<DbError> for StoreError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<RepoError> for StoreError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

impl From<TransferError> for StoreError {
    fn from(value: TransferError) -> Self {
        Self::Transfer(value)
    }
}

/// Single-file gear store with per-operation connections.
///
/// Every method is a synchronous round trip: open the storage file,
/// execute, commit, drop the connection.
pub struct GearStore {
    db_path: PathBuf,
}

impl GearStore {
    /// Creates a store bound to the given storage file path.
    pub fn new(db_path: impl Into<PathBuf>) -> Self {
        Self {
            db_path: db_path.into(),
        }
    }

    /// Returns the bound storage file path.
    pub fn path(&self) -> &Path {
        &self.db_path
    }

    /// Creates the `gear` table if absent. Idempotent.
    pub fn initialize(&self) -> StoreResult<()> {
        let conn = open_store(&self.db_path)?;
        schema::ensure_gear_table(&conn)?;
        info!("event=store_initialize module=store status=ok");
        Ok(())
    }

    /// Inserts one record, failing on a duplicate `id`.
    pub fn insert(&self, gear: &Gear) -> StoreResult<GearId> {
        let conn = open_store(&self.db_path)?;
        let id = SqliteGearRepository::new(&conn).insert_gear(gear)?;
        Ok(id)
    }

    /// Updates all non-id fields of the row matching `gear.id`.
    ///
    /// Silently succeeds when the row does not exist.
    pub fn update(&self, gear: &Gear) -> StoreResult<()> {
        let conn = open_store(&self.db_path)?;
        SqliteGearRepository::new(&conn).update_gear(gear)?;
        Ok(())
    }

    /// Deletes the row with the given `id`, silently succeeding when
    /// absent.
    pub fn delete(&self, id: GearId) -> StoreResult<()> {
        let conn = open_store(&self.db_path)?;
        SqliteGearRepository::new(&conn).delete_gear(id)?;
        Ok(())
    }

    /// Returns the record with the given `id`, if any.
    pub fn get(&self, id: GearId) -> StoreResult<Option<Gear>> {
        let conn = open_store(&self.db_path)?;
        let gear = SqliteGearRepository::new(&conn).get_gear(id)?;
        Ok(gear)
    }

    /// Returns every record in storage-engine-default order.
    pub fn list(&self) -> StoreResult<Vec<Gear>> {
        let conn = open_store(&self.db_path)?;
        let items = SqliteGearRepository::new(&conn).list_gear()?;
        Ok(items)
    }

    /// Imports a JSON array of gear records from `source`.
    ///
    /// Inserts run as independent statements; a failure aborts the
    /// remainder of the batch but keeps earlier rows committed.
    pub fn import_from_file(&self, source: impl AsRef<Path>) -> StoreResult<usize> {
        let conn = open_store(&self.db_path)?;
        let imported = import_gear(&conn, source)?;
        info!("event=gear_import module=store status=ok count={imported}");
        Ok(imported)
    }

    /// Exports every record to a pretty-printed JSON document at
    /// `destination`, overwriting any existing file.
    pub fn export_to_file(&self, destination: impl AsRef<Path>) -> StoreResult<usize> {
        let conn = open_store(&self.db_path)?;
        let exported = export_gear(&conn, destination)?;
        info!("event=gear_export module=store status=ok count={exported}");
        Ok(exported)
    }
}

impl Default for GearStore {
    /// Binds the conventional `gear.db` file in the working directory.
    fn default() -> Self {
        Self::new(DEFAULT_STORE_FILE)
    }
}
