use gearstore_core::{Gear, GearStore, StoreError};
use rusqlite::Connection;

#[test]
fn initialize_creates_gear_table_with_expected_columns() {
    let dir = tempfile::tempdir().unwrap();
    let store = GearStore::new(dir.path().join("gear.db"));

    store.initialize().unwrap();

    let conn = Connection::open(store.path()).unwrap();
    assert_eq!(gear_table_count(&conn), 1);
    assert_eq!(
        table_columns(&conn, "gear"),
        vec![
            "id".to_string(),
            "name".to_string(),
            "producer".to_string(),
            "model".to_string(),
            "weight".to_string(),
            "is_packed".to_string(),
            "category".to_string(),
        ]
    );
}

#[test]
fn initialize_twice_is_idempotent_and_preserves_rows() {
    let dir = tempfile::tempdir().unwrap();
    let store = GearStore::new(dir.path().join("gear.db"));

    store.initialize().unwrap();
    store
        .insert(&Gear::new(1, "Stove", "MSR", "PocketRocket", 0.1, false, "Cooking"))
        .unwrap();
    store.initialize().unwrap();

    let conn = Connection::open(store.path()).unwrap();
    assert_eq!(gear_table_count(&conn), 1);
    assert_eq!(store.get(1).unwrap().unwrap().name, "Stove");
}

#[test]
fn operations_against_uninitialized_store_surface_missing_table() {
    let dir = tempfile::tempdir().unwrap();
    let store = GearStore::new(dir.path().join("fresh.db"));

    let err = store
        .insert(&Gear::new(1, "Stove", "MSR", "PocketRocket", 0.1, false, "Cooking"))
        .unwrap_err();
    assert!(matches!(err, StoreError::Repo(_)));
    assert!(err.to_string().contains("no such table"), "unexpected error: {err}");

    let err = store.list().unwrap_err();
    assert!(err.to_string().contains("no such table"), "unexpected error: {err}");
}

#[test]
fn initialize_on_unwritable_location_surfaces_db_error() {
    let dir = tempfile::tempdir().unwrap();
    let store = GearStore::new(dir.path().join("missing-subdir").join("gear.db"));

    let err = store.initialize().unwrap_err();
    assert!(matches!(err, StoreError::Db(_)));
}

fn gear_table_count(conn: &Connection) -> i64 {
    conn.query_row(
        "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = 'gear';",
        [],
        |row| row.get(0),
    )
    .unwrap()
}

fn table_columns(conn: &Connection, table_name: &str) -> Vec<String> {
    let mut stmt = conn
        .prepare(&format!("PRAGMA table_info({table_name});"))
        .unwrap();
    let mut rows = stmt.query([]).unwrap();
    let mut columns = Vec::new();
    while let Some(row) = rows.next().unwrap() {
        columns.push(row.get::<_, String>("name").unwrap());
    }
    columns
}
