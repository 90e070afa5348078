//! Shared fixtures for the repository integration tests.
#![allow(dead_code)]

use georepo_core::Database;
use rusqlite::Connection;

pub const SCHEMA: &str = r#"
    CREATE TABLE countries (
        id INTEGER PRIMARY KEY,
        shape_name TEXT NOT NULL,
        shape_name_en TEXT,
        shape_name_fr TEXT,
        shape_iso TEXT,
        shape_iso_2 TEXT,
        shape_city TEXT,
        shape_area_km2 REAL,
        shape_people INTEGER,
        created_at TEXT,
        updated_at TEXT,
        geometry TEXT
    );

    CREATE TABLE regions (
        id INTEGER PRIMARY KEY,
        shape_name TEXT NOT NULL,
        country_id INTEGER NOT NULL REFERENCES countries(id),
        shape_iso TEXT,
        shape_area_km2 REAL,
        shape_people INTEGER,
        created_at TEXT,
        updated_at TEXT,
        geometry TEXT
    );

    CREATE TABLE provinces (
        id INTEGER PRIMARY KEY,
        shape_name TEXT NOT NULL,
        region_id INTEGER NOT NULL REFERENCES regions(id),
        shape_iso TEXT,
        shape_area_km2 REAL,
        shape_people INTEGER,
        created_at TEXT,
        updated_at TEXT,
        geometry TEXT
    );

    CREATE TABLE departments (
        id INTEGER PRIMARY KEY,
        shape_name TEXT NOT NULL,
        province_id INTEGER NOT NULL REFERENCES provinces(id),
        shape_iso TEXT,
        shape_area_km2 REAL,
        shape_people INTEGER,
        created_at TEXT,
        updated_at TEXT,
        geometry TEXT
    );
"#;

/// Three countries, six regions, five provinces, five departments.
pub const SEED: &str = r#"
    INSERT INTO countries
        (id, shape_name, shape_name_en, shape_name_fr, shape_iso, shape_iso_2, shape_city,
         shape_area_km2, shape_people, created_at, updated_at, geometry)
    VALUES
        (1, 'Peru', 'Peru', 'Pérou', 'PER', 'PE', 'Lima', 1285216.0, 33715471,
         '2024-01-15 10:30:00', '2024-02-01 08:00:00', NULL),
        (2, 'France', 'France', 'France', 'FRA', 'FR', 'Paris', 551695.0, 68042591,
         NULL, NULL, NULL),
        (3, 'Nihon', 'Japan', 'Japon', 'JPN', 'JP', 'Tokyo', 377975.0, 124516650,
         NULL, NULL, NULL);

    INSERT INTO regions
        (id, shape_name, country_id, shape_iso, shape_area_km2, shape_people,
         created_at, updated_at, geometry)
    VALUES
        (10, 'Lima', 1, 'PE-LIM', 34801.6, 10628470,
         '2024-01-15 10:30:00', NULL, '{"type":"Point","coordinates":[-77.04,-12.05]}'),
        (11, 'Cusco', 1, 'PE-CUS', 71986.5, 1357075, NULL, NULL, NULL),
        (12, 'Arequipa', 1, 'PE-ARE', 63345.4, 1497438, NULL, NULL, NULL),
        (20, 'Ile-de-France', 2, 'FR-IDF', 12012.0, 12271794, NULL, NULL, NULL),
        (21, 'Bretagne', 2, 'FR-BRE', 27208.0, 3354854, NULL, NULL, NULL),
        (30, 'Kanto', 3, 'JP-KAN', 32424.0, 43470000, NULL, NULL, NULL);

    INSERT INTO provinces (id, shape_name, region_id, shape_iso) VALUES
        (100, 'Lima Metropolitana', 10, NULL),
        (101, 'Huaral', 10, NULL),
        (110, 'Urubamba', 11, NULL),
        (200, 'Paris', 20, 'FR-75'),
        (210, 'Finistere', 21, 'FR-29');

    INSERT INTO departments (id, shape_name, province_id) VALUES
        (1000, 'Miraflores', 100),
        (1001, 'San Isidro', 100),
        (1100, 'Ollantaytambo', 110),
        (2000, 'Paris 1er', 200),
        (2100, 'Brest', 210);
"#;

pub fn empty_db() -> Database {
    let conn = Connection::open_in_memory().expect("in-memory database");
    let db = Database::from_connection(conn).expect("search functions should register");
    db.connection()
        .execute_batch(SCHEMA)
        .expect("schema should apply");
    db
}

pub fn seeded_db() -> Database {
    let db = empty_db();
    db.connection().execute_batch(SEED).expect("seed should apply");
    db
}

/// The two-row hierarchy: Peru with its Lima region.
pub fn peru_lima_db() -> Database {
    let db = empty_db();
    db.connection()
        .execute_batch(
            "INSERT INTO countries (id, shape_name) VALUES (1, 'Peru');
             INSERT INTO regions (id, shape_name, country_id) VALUES (10, 'Lima', 1);",
        )
        .expect("seed should apply");
    db
}

/// Names whose capitals fall outside ASCII.
pub const ACCENTED_SEED: &str = r#"
    INSERT INTO countries (id, shape_name, shape_name_en, shape_name_fr, shape_iso, shape_iso_2, shape_city) VALUES
        (1, 'Ecuador', 'Ecuador', 'Équateur', 'ECU', 'EC', 'Quito'),
        (2, 'France', 'France', 'France', 'FRA', 'FR', 'Paris');

    INSERT INTO regions (id, shape_name, country_id) VALUES
        (10, 'Pichincha', 1),
        (20, 'Île-de-France', 2),
        (21, 'Bretagne', 2);

    INSERT INTO provinces (id, shape_name, region_id) VALUES
        (200, 'Paris', 20);

    INSERT INTO departments (id, shape_name, province_id) VALUES
        (2000, 'Paris 1er', 200);
"#;

pub fn accented_db() -> Database {
    let db = empty_db();
    db.connection()
        .execute_batch(ACCENTED_SEED)
        .expect("seed should apply");
    db
}

pub fn sorted(ids: impl IntoIterator<Item = i64>) -> Vec<i64> {
    let mut ids: Vec<i64> = ids.into_iter().collect();
    ids.sort_unstable();
    ids
}
