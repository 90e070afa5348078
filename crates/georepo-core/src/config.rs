//! Connection settings.

use std::path::PathBuf;

use serde::Deserialize;

/// How to open a geographic database.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DatabaseSettings {
    /// SQLite file holding the `countries`, `regions`, `provinces` and
    /// `departments` tables.
    pub path: PathBuf,
    pub read_only: bool,
    /// Page cache size in KiB (`PRAGMA cache_size = -N`).
    pub cache_size_kib: u32,
    pub mmap_size_bytes: u64,
}

impl DatabaseSettings {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            ..Self::default()
        }
    }

    /// Pragmas applied right after the connection is opened.
    pub fn pragmas(&self) -> String {
        format!(
            "PRAGMA cache_size = -{};
             PRAGMA mmap_size = {};
             PRAGMA temp_store = MEMORY;",
            self.cache_size_kib, self.mmap_size_bytes
        )
    }
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        Self {
            path: PathBuf::from("geographic.db"),
            read_only: true,
            cache_size_kib: 64_000,
            mmap_size_bytes: 268_435_456,
        }
    }
}
