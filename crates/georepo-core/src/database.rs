//! Native SQLite database wrapper.
//!
//! Owns the connection that repositories borrow for their queries.

use std::path::Path;

use rusqlite::{Connection, OpenFlags};

use crate::config::DatabaseSettings;
use crate::entity::Entity;
use crate::error::{Error, Result};
use crate::query;
use crate::repository::GeographicRepository;

/// A SQLite connection holding the geographic hierarchy.
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open a database file read-only with default settings.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        Self::open_with(&DatabaseSettings::new(path.as_ref()))
    }

    /// Open a database file as described by `settings`.
    pub fn open_with(settings: &DatabaseSettings) -> Result<Self> {
        let flags = if settings.read_only {
            if !settings.path.exists() {
                return Err(Error::NotFound(settings.path.clone()));
            }
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX
        } else {
            OpenFlags::SQLITE_OPEN_READ_WRITE
                | OpenFlags::SQLITE_OPEN_CREATE
                | OpenFlags::SQLITE_OPEN_NO_MUTEX
        };

        let conn = Connection::open_with_flags(&settings.path, flags)?;
        conn.execute_batch(&settings.pragmas())?;
        query::register_search_functions(&conn)?;

        tracing::info!(
            path = %settings.path.display(),
            read_only = settings.read_only,
            "opened geographic database"
        );

        Ok(Self { conn })
    }

    /// Open a private in-memory database, mostly for tests and fixtures.
    pub fn open_in_memory() -> Result<Self> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    /// Wrap a connection the caller already configured.
    pub fn from_connection(conn: Connection) -> Result<Self> {
        query::register_search_functions(&conn)?;
        Ok(Self { conn })
    }

    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    /// A repository borrowing this connection for one unit of work.
    pub fn repository(&self) -> GeographicRepository<'_> {
        GeographicRepository::registered(&self.conn)
    }

    /// Number of rows in the table bound to `E`.
    pub fn count<E: Entity>(&self) -> Result<u64> {
        let sql = format!("SELECT COUNT(*) FROM {}", E::TABLE);
        let count: i64 = self.conn.query_row(&sql, [], |row| row.get(0))?;
        let count =
            u64::try_from(count).map_err(|_| rusqlite::Error::IntegralValueOutOfRange(0, count))?;
        Ok(count)
    }
}
