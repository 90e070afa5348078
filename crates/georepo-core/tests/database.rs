//! Tests for opening geographic databases from disk.

mod common;

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use georepo_core::{Country, Database, DatabaseSettings, Department, Error, Page, Region};
use pretty_assertions::assert_eq;

fn temp_db_path() -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    std::env::temp_dir().join(format!("georepo-{}-{nanos:x}.db", std::process::id()))
}

#[test]
fn test_open_missing_file_read_only() {
    let path = temp_db_path();

    match Database::open(&path) {
        Err(Error::NotFound(missing)) => assert_eq!(missing, path),
        Err(other) => panic!("expected NotFound, got {other}"),
        Ok(_) => panic!("opening a missing file read-only should fail"),
    }
}

#[test]
fn test_write_then_reopen_read_only() {
    let path = temp_db_path();

    {
        let mut settings = DatabaseSettings::new(&path);
        settings.read_only = false;
        let db = Database::open_with(&settings).unwrap();
        db.connection().execute_batch(common::SCHEMA).unwrap();
        db.connection().execute_batch(common::SEED).unwrap();
    }

    let db = Database::open(&path).unwrap();
    assert_eq!(db.count::<Country>().unwrap(), 3);
    assert_eq!(db.count::<Region>().unwrap(), 6);
    assert_eq!(db.count::<Department>().unwrap(), 5);

    let regions = db
        .repository()
        .regions_with_search(Page::default(), Some("peru"))
        .unwrap();
    assert_eq!(regions.len(), 3);

    let write = db
        .connection()
        .execute("DELETE FROM departments", []);
    assert!(write.is_err(), "read-only connection must reject writes");

    drop(db);
    std::fs::remove_file(&path).ok();
}

#[test]
fn test_count_rows() {
    let db = common::empty_db();
    assert_eq!(db.count::<Country>().unwrap(), 0);

    db.connection().execute_batch(common::SEED).unwrap();
    assert_eq!(db.count::<Country>().unwrap(), 3);
    assert_eq!(db.count::<Department>().unwrap(), 5);
}

#[test]
fn test_query_error_propagates() {
    // No schema: every listing fails with the driver's error.
    let db = Database::open_in_memory().unwrap();
    let result = db.repository().countries_with_search(Page::default(), None);

    assert!(matches!(result, Err(Error::Database(_))));
}
