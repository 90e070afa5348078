//! Query preparation.
//!
//! Listings come in two shapes. A hierarchy-wide listing matches the search
//! term against the entity's own name fields and, through joins, against
//! every ancestor's display name. A scoped listing pins the parent
//! reference and matches only the entity's own display name.

mod builder;
mod search;

pub use builder::{BoundQuery, ListQuery};
pub use search::{
    prepare_like_pattern, register_search_functions, SearchTerm, LIKE_ESCAPE, LOWER_FUNCTION,
};

use crate::entity::{Child, Entity, DISPLAY_NAME_COLUMN};
use crate::types::Page;

/// Which slice of the hierarchy a listing covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope<P> {
    /// Every row of the entity; search reaches ancestor names.
    Hierarchy,
    /// Children of one parent; search covers the own display name only.
    Parent(P),
}

/// Build a hierarchy-wide listing.
///
/// Ancestor joins are only added when there is a term to match against
/// them, so an unfiltered listing is a plain scan of the entity table.
pub fn hierarchy_query<E: Entity>(term: Option<&SearchTerm>, page: Page) -> BoundQuery {
    let query = ListQuery::select::<E>();

    let query = match term {
        Some(term) => query
            .join(E::ANCESTORS)
            .filter_any_like(&hierarchy_search_columns::<E>(), term),
        None => query,
    };

    query.paginate(page)
}

/// Build a listing restricted to the children of `parent`.
pub fn scoped_query<E: Child>(
    parent: E::ParentId,
    term: Option<&SearchTerm>,
    page: Page,
) -> BoundQuery {
    let query = ListQuery::select::<E>().filter_eq(E::qualified(E::PARENT_COLUMN), parent);

    let query = match term {
        Some(term) => query.filter_any_like(&[E::qualified(DISPLAY_NAME_COLUMN)], term),
        None => query,
    };

    query.paginate(page)
}

/// Dispatch on `scope` to [`hierarchy_query`] or [`scoped_query`].
pub fn list_query<E: Child>(
    scope: Scope<E::ParentId>,
    term: Option<&SearchTerm>,
    page: Page,
) -> BoundQuery {
    match scope {
        Scope::Hierarchy => hierarchy_query::<E>(term, page),
        Scope::Parent(parent) => scoped_query::<E>(parent, term, page),
    }
}

/// Build a hierarchy-wide listing that also projects every ancestor's
/// display name, nearest ancestor first, after the entity columns.
///
/// The joins are always present since the projection needs them.
pub fn hierarchy_info_query<E: Entity>(term: Option<&SearchTerm>, page: Page) -> BoundQuery {
    let query = E::ANCESTORS
        .iter()
        .fold(ListQuery::select::<E>(), |query, ancestor| {
            query.column(ancestor.display_name())
        })
        .join(E::ANCESTORS);

    let query = match term {
        Some(term) => query.filter_any_like(&hierarchy_search_columns::<E>(), term),
        None => query,
    };

    query.paginate(page)
}

/// Look up a single row by primary key.
pub fn by_id_query<E: Entity>(id: E::Id) -> BoundQuery {
    ListQuery::select::<E>()
        .filter_eq(E::qualified("id"), id)
        .paginate(Page::new(0, 1))
}

fn hierarchy_search_columns<E: Entity>() -> Vec<String> {
    let mut columns = E::qualified_search_columns();
    columns.extend(E::ANCESTORS.iter().map(|a| a.display_name()));
    columns
}
