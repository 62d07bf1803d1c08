//! Gear repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide stable CRUD APIs over the single `gear` table.
//! - Keep SQL details inside the persistence boundary.
//!
//! # Invariants
//! - Every statement binds values as parameters; field content never
//!   reaches statement text, so quote characters round-trip literally.
//! - Read paths reject invalid persisted state instead of masking it.
//! - `update_gear` and `delete_gear` succeed silently when the row is
//!   absent; there is no not-found signal.

use crate::db::DbError;
use crate::model::gear::{Gear, GearId};
use rusqlite::{params, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

const GEAR_SELECT_SQL: &str = "SELECT
    id,
    name,
    producer,
    model,
    weight,
    is_packed,
    category
FROM gear";

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for gear persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    /// Underlying storage failure, including constraint violations.
    Db(DbError),
    /// Persisted data cannot be converted to a valid record.
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidData(message) => write!(f, "invalid persisted gear data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::InvalidData(_) => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Repository interface for gear CRUD operations.
pub trait GearRepository {
    /// Inserts one record. Fails with a primary-key violation when the
    /// `id` already exists.
    fn insert_gear(&self, gear: &Gear) -> RepoResult<GearId>;
    /// Updates all non-id columns of the row matching `gear.id`, affecting
    /// zero rows when it does not exist.
    fn update_gear(&self, gear: &Gear) -> RepoResult<()>;
    /// Returns the row with the given `id`, if any.
    fn get_gear(&self, id: GearId) -> RepoResult<Option<Gear>>;
    /// Returns every row in storage-engine-default order.
    fn list_gear(&self) -> RepoResult<Vec<Gear>>;
    /// Deletes the row with the given `id`, affecting zero rows when it
    /// does not exist.
    fn delete_gear(&self, id: GearId) -> RepoResult<()>;
}

/// SQLite-backed gear repository.
pub struct SqliteGearRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteGearRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl GearRepository for SqliteGearRepository<'_> {
    fn insert_gear(&self, gear: &Gear) -> RepoResult<GearId> {
        self.conn.execute(
            "INSERT INTO gear (
                id,
                name,
                producer,
                model,
                weight,
                is_packed,
                category
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7);",
            params![
                gear.id,
                gear.name.as_str(),
                gear.producer.as_str(),
                gear.model.as_str(),
                gear.weight,
                bool_to_int(gear.is_packed),
                gear.category.as_str(),
            ],
        )?;

        Ok(gear.id)
    }

    fn update_gear(&self, gear: &Gear) -> RepoResult<()> {
        self.conn.execute(
            "UPDATE gear
             SET
                name = ?1,
                producer = ?2,
                model = ?3,
                weight = ?4,
                is_packed = ?5,
                category = ?6
             WHERE id = ?7;",
            params![
                gear.name.as_str(),
                gear.producer.as_str(),
                gear.model.as_str(),
                gear.weight,
                bool_to_int(gear.is_packed),
                gear.category.as_str(),
                gear.id,
            ],
        )?;

        Ok(())
    }

    fn get_gear(&self, id: GearId) -> RepoResult<Option<Gear>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{GEAR_SELECT_SQL} WHERE id = ?1;"))?;

        let mut rows = stmt.query(params![id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_gear_row(row)?));
        }

        Ok(None)
    }

    fn list_gear(&self) -> RepoResult<Vec<Gear>> {
        let mut stmt = self.conn.prepare(&format!("{GEAR_SELECT_SQL};"))?;
        let mut rows = stmt.query([])?;
        let mut items = Vec::new();

        while let Some(row) = rows.next()? {
            items.push(parse_gear_row(row)?);
        }

        Ok(items)
    }

    fn delete_gear(&self, id: GearId) -> RepoResult<()> {
        self.conn
            .execute("DELETE FROM gear WHERE id = ?1;", params![id])?;

        Ok(())
    }
}

fn parse_gear_row(row: &Row<'_>) -> RepoResult<Gear> {
    let is_packed = match row.get::<_, i64>("is_packed")? {
        0 => false,
        1 => true,
        other => {
            return Err(RepoError::InvalidData(format!(
                "invalid is_packed value `{other}` in gear.is_packed"
            )));
        }
    };

    Ok(Gear {
        id: row.get("id")?,
        name: row.get("name")?,
        producer: row.get("producer")?,
        model: row.get("model")?,
        weight: row.get("weight")?,
        is_packed,
        category: row.get("category")?,
    })
}

fn bool_to_int(value: bool) -> i64 {
    if value {
        1
    } else {
        0
    }
}
