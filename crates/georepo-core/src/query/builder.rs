//! Incremental SELECT builder with positional parameters.

use rusqlite::types::ToSql;

use super::search::{SearchTerm, LIKE_ESCAPE, LOWER_FUNCTION};
use crate::entity::{Ancestor, Entity};
use crate::types::Page;

/// A single-statement listing query under construction.
///
/// Parameters are numbered (`?1`, `?2`, ...) in the order they are added,
/// so one bound search pattern can be referenced by several columns.
pub struct ListQuery {
    columns: Vec<String>,
    from: String,
    joins: Vec<&'static str>,
    conditions: Vec<String>,
    params: Vec<Box<dyn ToSql>>,
}

/// Final SQL text plus its bound parameters.
pub struct BoundQuery {
    pub sql: String,
    params: Vec<Box<dyn ToSql>>,
}

impl ListQuery {
    /// Select every mapped column of `E` from its table.
    pub fn select<E: Entity>() -> Self {
        Self {
            columns: E::qualified_columns(),
            from: format!("{} {}", E::TABLE, E::ALIAS),
            joins: Vec::new(),
            conditions: Vec::new(),
            params: Vec::new(),
        }
    }

    /// Append an extra projected expression after the entity columns.
    pub fn column(mut self, expr: String) -> Self {
        self.columns.push(expr);
        self
    }

    pub fn join(mut self, ancestors: &[Ancestor]) -> Self {
        self.joins.extend(ancestors.iter().map(|a| a.join));
        self
    }

    pub fn filter_eq(mut self, column: String, value: impl ToSql + 'static) -> Self {
        self.params.push(Box::new(value));
        let index = self.params.len();
        self.conditions.push(format!("{column} = ?{index}"));
        self
    }

    /// Keep rows where any of `columns` contains `term`.
    ///
    /// Columns are folded with [`LOWER_FUNCTION`], which must be registered
    /// on the connection that runs the statement.
    pub fn filter_any_like(mut self, columns: &[String], term: &SearchTerm) -> Self {
        if columns.is_empty() {
            return self;
        }

        self.params.push(Box::new(term.pattern().to_owned()));
        let index = self.params.len();
        let clauses: Vec<String> = columns
            .iter()
            .map(|column| {
                format!("{LOWER_FUNCTION}({column}) LIKE ?{index} ESCAPE '{LIKE_ESCAPE}'")
            })
            .collect();
        self.conditions.push(format!("({})", clauses.join(" OR ")));
        self
    }

    /// Apply offset then limit and produce the statement.
    pub fn paginate(mut self, page: Page) -> BoundQuery {
        let mut sql = format!("SELECT {} FROM {}", self.columns.join(", "), self.from);

        for join in &self.joins {
            sql.push(' ');
            sql.push_str(join);
        }

        if !self.conditions.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&self.conditions.join(" AND "));
        }

        self.params.push(Box::new(page.limit));
        let limit_index = self.params.len();
        self.params.push(Box::new(page.skip));
        let offset_index = self.params.len();
        sql.push_str(&format!(" LIMIT ?{limit_index} OFFSET ?{offset_index}"));

        BoundQuery {
            sql,
            params: self.params,
        }
    }
}

impl BoundQuery {
    pub fn params(&self) -> Vec<&dyn ToSql> {
        self.params.iter().map(|p| p.as_ref()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{CountryId, Department, Region};

    #[test]
    fn test_plain_select_has_no_where() {
        let query = ListQuery::select::<Region>().paginate(Page::default());

        assert_eq!(
            query.sql,
            "SELECT r.id, r.shape_name, r.country_id, r.shape_iso, r.shape_area_km2, \
             r.shape_people, r.created_at, r.updated_at, r.geometry \
             FROM regions r LIMIT ?1 OFFSET ?2"
        );
        assert_eq!(query.params().len(), 2);
    }

    #[test]
    fn test_filters_are_numbered_in_order() {
        let term = SearchTerm::parse(Some("lim")).unwrap();
        let query = ListQuery::select::<Region>()
            .filter_eq(Region::qualified("country_id"), CountryId(1))
            .filter_any_like(&Region::qualified_search_columns(), &term)
            .paginate(Page::new(5, 10));

        assert!(query.sql.ends_with(
            "FROM regions r WHERE r.country_id = ?1 \
             AND (unicode_lower(r.shape_name) LIKE ?2 ESCAPE '\\') LIMIT ?3 OFFSET ?4"
        ));
        assert_eq!(query.params().len(), 4);
    }

    #[test]
    fn test_one_pattern_shared_across_columns() {
        let term = SearchTerm::parse(Some("andes")).unwrap();
        let mut columns = Department::qualified_search_columns();
        columns.extend(Department::ANCESTORS.iter().map(|a| a.display_name()));

        let query = ListQuery::select::<Department>()
            .join(Department::ANCESTORS)
            .filter_any_like(&columns, &term)
            .paginate(Page::default());

        assert!(query.sql.contains(
            "FROM departments d \
             JOIN provinces p ON p.id = d.province_id \
             JOIN regions r ON r.id = p.region_id \
             JOIN countries c ON c.id = r.country_id \
             WHERE (unicode_lower(d.shape_name) LIKE ?1 ESCAPE '\\' \
             OR unicode_lower(p.shape_name) LIKE ?1 ESCAPE '\\' \
             OR unicode_lower(r.shape_name) LIKE ?1 ESCAPE '\\' \
             OR unicode_lower(c.shape_name) LIKE ?1 ESCAPE '\\')"
        ));
        assert_eq!(query.params().len(), 3);
    }

    #[test]
    fn test_extra_column_is_projected_last() {
        let query = ListQuery::select::<Region>()
            .column("c.shape_name".to_string())
            .join(Region::ANCESTORS)
            .paginate(Page::default());

        assert!(query
            .sql
            .contains("r.geometry, c.shape_name FROM regions r JOIN countries c"));
    }
}
