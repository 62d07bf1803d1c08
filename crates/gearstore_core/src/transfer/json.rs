//! JSON bulk import/export for gear records.
//!
//! # Responsibility
//! - Read import documents and insert their records one statement at a
//!   time.
//! - Write export documents pretty-printed with 4-space indentation.
//!
//! # Invariants
//! - The import key is `isPacked` (boolean); the export key is `is_packed`
//!   (0/1 integer). The asymmetry is part of the documented contract, and
//!   an exported document does not re-import without a manual key rename.
//! - Import is not transactional: a failure at record k leaves records
//!   0..k committed.
//! - A document-level syntax error imports nothing.

use crate::model::gear::{Gear, GearId};
use crate::repo::gear_repo::{GearRepository, RepoError, SqliteGearRepository};
use rusqlite::Connection;
use serde::{Deserialize, Serialize};
use serde_json::ser::PrettyFormatter;
use serde_json::Serializer;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

/// Result type for bulk transfer APIs.
pub type TransferResult<T> = Result<T, TransferError>;

/// Transfer-layer error for document IO, decoding and persistence.
#[derive(Debug)]
pub enum TransferError {
    /// Underlying repository failure, including duplicate-id violations.
    Repo(RepoError),
    /// Source or destination file cannot be read or written.
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The document is not a JSON array.
    Document {
        path: PathBuf,
        source: serde_json::Error,
    },
    /// One record in the array is missing a key or holds a mistyped value.
    Record {
        index: usize,
        source: serde_json::Error,
    },
}

impl Display for TransferError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Repo(err) => write!(f, "{err}"),
            Self::Io { path, source } => {
                write!(f, "cannot access gear document `{}`: {source}", path.display())
            }
            Self::Document { path, source } => {
                write!(f, "invalid gear document `{}`: {source}", path.display())
            }
            Self::Record { index, source } => {
                write!(f, "invalid gear record at index {index}: {source}")
            }
        }
    }
}

impl Error for TransferError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            Self::Io { source, .. } => Some(source),
            Self::Document { source, .. } => Some(source),
            Self::Record { source, .. } => Some(source),
        }
    }
}

impl From<RepoError> for TransferError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

/// Import wire shape: `isPacked` is a camelCase boolean.
#[derive(Debug, Clone, Deserialize)]
pub struct GearImportRecord {
    pub id: GearId,
    pub name: String,
    pub producer: String,
    pub model: String,
    pub weight: f64,
    #[serde(rename = "isPacked")]
    pub is_packed: bool,
    pub category: String,
}

impl From<GearImportRecord> for Gear {
    fn from(record: GearImportRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
            producer: record.producer,
            model: record.model,
            weight: record.weight,
            is_packed: record.is_packed,
            category: record.category,
        }
    }
}

/// Export wire shape: `is_packed` is emitted as the stored 0/1 integer,
/// not a boolean.
#[derive(Debug, Clone, Serialize)]
pub struct GearExportRecord {
    pub id: GearId,
    pub name: String,
    pub producer: String,
    pub model: String,
    pub weight: f64,
    pub is_packed: i64,
    pub category: String,
}

impl From<Gear> for GearExportRecord {
    fn from(gear: Gear) -> Self {
        Self {
            id: gear.id,
            name: gear.name,
            producer: gear.producer,
            model: gear.model,
            weight: gear.weight,
            is_packed: i64::from(gear.is_packed),
            category: gear.category,
        }
    }
}

/// Imports a JSON array of gear records into the store.
///
/// Each record is inserted with an independent statement; there is no
/// wrapping transaction. On failure the error names the offending record,
/// and earlier records stay committed.
///
/// Returns the number of imported records.
pub fn import_gear(conn: &Connection, source: impl AsRef<Path>) -> TransferResult<usize> {
    let source = source.as_ref();
    let payload = std::fs::read_to_string(source).map_err(|err| TransferError::Io {
        path: source.to_path_buf(),
        source: err,
    })?;

    // Decode the array shell first so a syntax error never touches the
    // table; per-record decoding happens inside the insert loop.
    let raw_records: Vec<serde_json::Value> =
        serde_json::from_str(&payload).map_err(|err| TransferError::Document {
            path: source.to_path_buf(),
            source: err,
        })?;

    let repo = SqliteGearRepository::new(conn);
    let mut imported = 0usize;

    for (index, value) in raw_records.into_iter().enumerate() {
        let record: GearImportRecord = serde_json::from_value(value)
            .map_err(|err| TransferError::Record { index, source: err })?;
        repo.insert_gear(&Gear::from(record))?;
        imported += 1;
    }

    Ok(imported)
}

/// Exports every stored record to a JSON document at `destination`.
///
/// Rows are read in storage-engine-default order and written as a
/// 4-space-indented array, overwriting any existing file.
///
/// Returns the number of exported records.
pub fn export_gear(conn: &Connection, destination: impl AsRef<Path>) -> TransferResult<usize> {
    let destination = destination.as_ref();
    let repo = SqliteGearRepository::new(conn);
    let records: Vec<GearExportRecord> = repo
        .list_gear()?
        .into_iter()
        .map(GearExportRecord::from)
        .collect();

    let mut buffer = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = Serializer::with_formatter(&mut buffer, formatter);
    records
        .serialize(&mut serializer)
        .map_err(|err| TransferError::Document {
            path: destination.to_path_buf(),
            source: err,
        })?;

    std::fs::write(destination, buffer).map_err(|err| TransferError::Io {
        path: destination.to_path_buf(),
        source: err,
    })?;

    Ok(records.len())
}
