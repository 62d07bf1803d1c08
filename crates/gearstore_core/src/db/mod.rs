//! SQLite storage bootstrap and schema entry points.
//!
//! # Responsibility
//! - Open SQLite connections for the gear store.
//! - Provide the idempotent schema bootstrap used by initialization.
//!
//! # Invariants
//! - Connections carry engine defaults only: no busy timeout, no locking
//!   discipline beyond SQLite's own file locks.
//! - Only explicit initialization creates schema; every other operation
//!   fails against an uninitialized store.

use std::error::Error;
use std::fmt::{Display, Formatter};

mod open;
pub mod schema;

pub use open::{open_store, open_store_in_memory};

pub type DbResult<T> = Result<T, DbError>;

/// Storage-access failure surfaced unchanged from the engine.
#[derive(Debug)]
pub enum DbError {
    Sqlite(rusqlite::Error),
}

impl Display for DbError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "{err}"),
        }
    }
}

impl Error for DbError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
        }
    }
}

impl From<rusqlite::Error> for DbError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}
