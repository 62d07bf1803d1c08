use gearstore_core::db::{open_store_in_memory, schema, DbError};
use gearstore_core::{Gear, GearRepository, GearStore, RepoError, SqliteGearRepository};
use rusqlite::Connection;

#[test]
fn insert_and_get_roundtrip() {
    let conn = ready_connection();
    let repo = SqliteGearRepository::new(&conn);

    let gear = Gear::new(1, "Backpack", "North Face", "Terra 55", 2.0, true, "Backpack");
    let id = repo.insert_gear(&gear).unwrap();
    assert_eq!(id, 1);

    let loaded = repo.get_gear(id).unwrap().unwrap();
    assert_eq!(loaded, gear);
}

#[test]
fn get_missing_id_returns_none() {
    let conn = ready_connection();
    let repo = SqliteGearRepository::new(&conn);

    assert!(repo.get_gear(42).unwrap().is_none());
}

#[test]
fn insert_duplicate_id_fails_with_constraint_violation() {
    let conn = ready_connection();
    let repo = SqliteGearRepository::new(&conn);

    let gear = Gear::new(1, "Backpack", "North Face", "Terra 55", 2.0, true, "Backpack");
    repo.insert_gear(&gear).unwrap();

    let err = repo.insert_gear(&gear).unwrap_err();
    assert!(matches!(
        &err,
        RepoError::Db(DbError::Sqlite(rusqlite::Error::SqliteFailure(failure, _)))
            if failure.code == rusqlite::ErrorCode::ConstraintViolation
    ));
}

#[test]
fn update_changes_exactly_the_target_row() {
    let conn = ready_connection();
    let repo = SqliteGearRepository::new(&conn);

    let backpack = Gear::new(1, "Backpack", "North Face", "Terra 55", 2.0, true, "Backpack");
    let bag = Gear::new(2, "Sleeping Bag", "Marmot", "Spruce", 3.0, false, "Sleeping Bag");
    repo.insert_gear(&backpack).unwrap();
    repo.insert_gear(&bag).unwrap();

    let mut updated = backpack.clone();
    updated.name = "Daypack".to_string();
    updated.weight = 1.2;
    updated.is_packed = false;
    repo.update_gear(&updated).unwrap();

    assert_eq!(repo.get_gear(1).unwrap().unwrap(), updated);
    assert_eq!(repo.get_gear(2).unwrap().unwrap(), bag);
}

#[test]
fn update_missing_id_silently_leaves_table_unchanged() {
    let conn = ready_connection();
    let repo = SqliteGearRepository::new(&conn);

    let gear = Gear::new(1, "Backpack", "North Face", "Terra 55", 2.0, true, "Backpack");
    repo.insert_gear(&gear).unwrap();

    let ghost = Gear::new(99, "Ghost", "Nobody", "None", 0.0, false, "Ghost");
    repo.update_gear(&ghost).unwrap();

    let all = repo.list_gear().unwrap();
    assert_eq!(all, vec![gear]);
}

#[test]
fn delete_removes_exactly_one_row_and_is_silent_when_absent() {
    let conn = ready_connection();
    let repo = SqliteGearRepository::new(&conn);

    let backpack = Gear::new(1, "Backpack", "North Face", "Terra 55", 2.0, true, "Backpack");
    let bag = Gear::new(2, "Sleeping Bag", "Marmot", "Spruce", 3.0, false, "Sleeping Bag");
    repo.insert_gear(&backpack).unwrap();
    repo.insert_gear(&bag).unwrap();

    repo.delete_gear(1).unwrap();
    assert_eq!(repo.list_gear().unwrap(), vec![bag.clone()]);

    repo.delete_gear(1).unwrap();
    assert_eq!(repo.list_gear().unwrap(), vec![bag]);
}

#[test]
fn quote_characters_in_text_fields_round_trip_literally() {
    let conn = ready_connection();
    let repo = SqliteGearRepository::new(&conn);

    let gear = Gear::new(
        7,
        "Hiker's \"Trusty\" Stove",
        "O'Malley & Sons",
        "Rocket'; DROP TABLE gear; --",
        0.4,
        false,
        "Cooking",
    );
    repo.insert_gear(&gear).unwrap();

    let loaded = repo.get_gear(7).unwrap().unwrap();
    assert_eq!(loaded, gear);
    assert_eq!(repo.list_gear().unwrap().len(), 1);
}

#[test]
fn invalid_persisted_is_packed_value_is_reported() {
    let conn = ready_connection();
    conn.execute(
        "INSERT INTO gear (id, name, producer, model, weight, is_packed, category)
         VALUES (9, 'Mug', 'GSI', 'Infinity', 0.1, 7, 'Cooking');",
        [],
    )
    .unwrap();

    let repo = SqliteGearRepository::new(&conn);
    let err = repo.get_gear(9).unwrap_err();
    assert!(matches!(err, RepoError::InvalidData(_)));
    assert!(err.to_string().contains("is_packed"), "unexpected error: {err}");
}

#[test]
fn store_facade_insert_then_get_returns_matching_row() {
    let dir = tempfile::tempdir().unwrap();
    let store = GearStore::new(dir.path().join("gear.db"));
    store.initialize().unwrap();

    let tent = Gear::new(3, "Tent", "Big Agnes", "Copper Spur", 4.0, true, "Tent");
    store.insert(&tent).unwrap();

    let loaded = store.get(3).unwrap().unwrap();
    assert_eq!(loaded, tent);

    let raw: i64 = Connection::open(store.path())
        .unwrap()
        .query_row("SELECT is_packed FROM gear WHERE id = 3;", [], |row| {
            row.get(0)
        })
        .unwrap();
    assert_eq!(raw, 1);
}

#[test]
fn store_facade_update_and_delete_are_silent_on_missing_rows() {
    let dir = tempfile::tempdir().unwrap();
    let store = GearStore::new(dir.path().join("gear.db"));
    store.initialize().unwrap();

    let ghost = Gear::new(42, "Ghost", "Nobody", "None", 0.0, false, "Ghost");
    store.update(&ghost).unwrap();
    store.delete(42).unwrap();

    assert!(store.list().unwrap().is_empty());
}

fn ready_connection() -> Connection {
    let conn = open_store_in_memory().unwrap();
    schema::ensure_gear_table(&conn).unwrap();
    conn
}
