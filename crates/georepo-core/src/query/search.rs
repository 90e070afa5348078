//! Search-term preparation for `LIKE` matching.

use rusqlite::functions::{Context, FunctionFlags};
use rusqlite::types::ValueRef;
use rusqlite::Connection;

/// Escape character declared in every generated `LIKE ... ESCAPE` clause.
pub const LIKE_ESCAPE: char = '\\';

/// SQL function folding a column to Unicode lower case before matching.
///
/// SQLite's own `lower()` and `LIKE` only fold ASCII.
pub const LOWER_FUNCTION: &str = "unicode_lower";

/// Register [`LOWER_FUNCTION`] on `conn`. Registering again replaces the
/// previous definition.
pub fn register_search_functions(conn: &Connection) -> rusqlite::Result<()> {
    conn.create_scalar_function(
        LOWER_FUNCTION,
        1,
        FunctionFlags::SQLITE_UTF8 | FunctionFlags::SQLITE_DETERMINISTIC,
        unicode_lower,
    )
}

fn unicode_lower(ctx: &Context<'_>) -> rusqlite::Result<Option<String>> {
    let folded = match ctx.get_raw(0) {
        ValueRef::Null | ValueRef::Blob(_) => None,
        ValueRef::Text(text) => Some(String::from_utf8_lossy(text).to_lowercase()),
        ValueRef::Integer(value) => Some(value.to_string()),
        ValueRef::Real(value) => Some(value.to_string()),
    };
    Ok(folded)
}

/// A case-insensitive substring pattern ready to bind against `LIKE`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTerm {
    pattern: String,
}

impl SearchTerm {
    /// Prepare a search term from optional user input.
    ///
    /// An absent or empty search means "no filter" and yields `None`.
    /// `%`, `_` and `\` in the input are matched literally, not as wildcards.
    pub fn parse(search: Option<&str>) -> Option<Self> {
        match search {
            Some(text) if !text.is_empty() => Some(Self {
                pattern: prepare_like_pattern(text),
            }),
            _ => None,
        }
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }
}

/// Lower-case `text`, escape LIKE wildcards so they match literally, and
/// wrap the result in `%` markers.
pub fn prepare_like_pattern(text: &str) -> String {
    let lowered = text.to_lowercase();
    let mut pattern = String::with_capacity(lowered.len() + 2);

    pattern.push('%');
    for ch in lowered.chars() {
        if matches!(ch, '%' | '_') || ch == LIKE_ESCAPE {
            pattern.push(LIKE_ESCAPE);
        }
        pattern.push(ch);
    }
    pattern.push('%');

    pattern
}
