//! Search-enabled listings over the geographic hierarchy.
//!
//! Every listing is a single statement: filters, ancestor joins and the
//! offset/limit window are folded into one query. Results come back in
//! store order. No listing raises on zero matches.

use rusqlite::{Connection, OptionalExtension, Row};

use crate::entity::{Child, Entity};
use crate::error::Result;
use crate::query::{self, BoundQuery, Scope, SearchTerm};
use crate::types::{
    Country, CountryId, Department, DepartmentId, DepartmentWithHierarchy, Page, Province,
    ProvinceId, ProvinceWithHierarchy, Region, RegionId, RegionWithCountry,
};

/// Read-only queries against a borrowed connection.
///
/// Cheap to construct; build one per request or unit of work. An absent or
/// empty `search` never filters. Matching folds case with Unicode rules.
#[derive(Clone, Copy)]
pub struct GeographicRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> GeographicRepository<'conn> {
    /// Borrow `conn`, registering the search functions the listings need.
    pub fn new(conn: &'conn Connection) -> Result<Self> {
        query::register_search_functions(conn)?;
        Ok(Self { conn })
    }

    /// Borrow a connection that already has the search functions.
    pub(crate) fn registered(conn: &'conn Connection) -> Self {
        Self { conn }
    }

    /// Countries whose display, English or French name, ISO or ISO-2 code,
    /// or capital contains `search`.
    #[tracing::instrument(err, skip(self), level = "debug")]
    pub fn countries_with_search(&self, page: Page, search: Option<&str>) -> Result<Vec<Country>> {
        let term = SearchTerm::parse(search);
        self.fetch(query::hierarchy_query::<Country>(term.as_ref(), page), |row| {
            Country::from_row(row, 0)
        })
    }

    /// Regions whose own name or country name contains `search`.
    #[tracing::instrument(err, skip(self), level = "debug")]
    pub fn regions_with_search(&self, page: Page, search: Option<&str>) -> Result<Vec<Region>> {
        self.list::<Region>(Scope::Hierarchy, page, search)
    }

    /// Regions of one country whose own name contains `search`.
    #[tracing::instrument(err, skip(self), level = "debug")]
    pub fn regions_by_country_with_search(
        &self,
        country_id: CountryId,
        page: Page,
        search: Option<&str>,
    ) -> Result<Vec<Region>> {
        self.list::<Region>(Scope::Parent(country_id), page, search)
    }

    /// Provinces whose own, region or country name contains `search`.
    #[tracing::instrument(err, skip(self), level = "debug")]
    pub fn provinces_with_search(&self, page: Page, search: Option<&str>) -> Result<Vec<Province>> {
        self.list::<Province>(Scope::Hierarchy, page, search)
    }

    #[tracing::instrument(err, skip(self), level = "debug")]
    pub fn provinces_by_region_with_search(
        &self,
        region_id: RegionId,
        page: Page,
        search: Option<&str>,
    ) -> Result<Vec<Province>> {
        self.list::<Province>(Scope::Parent(region_id), page, search)
    }

    /// Departments whose own name or any ancestor's name contains `search`.
    #[tracing::instrument(err, skip(self), level = "debug")]
    pub fn departments_with_search(
        &self,
        page: Page,
        search: Option<&str>,
    ) -> Result<Vec<Department>> {
        self.list::<Department>(Scope::Hierarchy, page, search)
    }

    #[tracing::instrument(err, skip(self), level = "debug")]
    pub fn departments_by_province_with_search(
        &self,
        province_id: ProvinceId,
        page: Page,
        search: Option<&str>,
    ) -> Result<Vec<Department>> {
        self.list::<Department>(Scope::Parent(province_id), page, search)
    }

    /// Same rows as [`Self::regions_with_search`], flattened with the
    /// country's display name.
    #[tracing::instrument(err, skip(self), level = "debug")]
    pub fn regions_with_country_info(
        &self,
        page: Page,
        search: Option<&str>,
    ) -> Result<Vec<RegionWithCountry>> {
        let term = SearchTerm::parse(search);
        let names = Region::COLUMNS.len();

        self.fetch(
            query::hierarchy_info_query::<Region>(term.as_ref(), page),
            |row| {
                Ok(RegionWithCountry {
                    region: Region::from_row(row, 0)?,
                    country_name: row.get(names)?,
                })
            },
        )
    }

    /// Same rows as [`Self::provinces_with_search`], with region and
    /// country names.
    #[tracing::instrument(err, skip(self), level = "debug")]
    pub fn provinces_with_hierarchy_info(
        &self,
        page: Page,
        search: Option<&str>,
    ) -> Result<Vec<ProvinceWithHierarchy>> {
        let term = SearchTerm::parse(search);
        let names = Province::COLUMNS.len();

        self.fetch(
            query::hierarchy_info_query::<Province>(term.as_ref(), page),
            |row| {
                Ok(ProvinceWithHierarchy {
                    province: Province::from_row(row, 0)?,
                    region_name: row.get(names)?,
                    country_name: row.get(names + 1)?,
                })
            },
        )
    }

    /// Same rows as [`Self::departments_with_search`], with every
    /// ancestor's name.
    #[tracing::instrument(err, skip(self), level = "debug")]
    pub fn departments_with_hierarchy_info(
        &self,
        page: Page,
        search: Option<&str>,
    ) -> Result<Vec<DepartmentWithHierarchy>> {
        let term = SearchTerm::parse(search);
        let names = Department::COLUMNS.len();

        self.fetch(
            query::hierarchy_info_query::<Department>(term.as_ref(), page),
            |row| {
                Ok(DepartmentWithHierarchy {
                    department: Department::from_row(row, 0)?,
                    province_name: row.get(names)?,
                    region_name: row.get(names + 1)?,
                    country_name: row.get(names + 2)?,
                })
            },
        )
    }

    #[tracing::instrument(err, skip(self), level = "debug")]
    pub fn country(&self, id: CountryId) -> Result<Option<Country>> {
        self.find::<Country>(id)
    }

    #[tracing::instrument(err, skip(self), level = "debug")]
    pub fn region(&self, id: RegionId) -> Result<Option<Region>> {
        self.find::<Region>(id)
    }

    #[tracing::instrument(err, skip(self), level = "debug")]
    pub fn province(&self, id: ProvinceId) -> Result<Option<Province>> {
        self.find::<Province>(id)
    }

    #[tracing::instrument(err, skip(self), level = "debug")]
    pub fn department(&self, id: DepartmentId) -> Result<Option<Department>> {
        self.find::<Department>(id)
    }

    fn list<E: Child>(
        &self,
        scope: Scope<E::ParentId>,
        page: Page,
        search: Option<&str>,
    ) -> Result<Vec<E>> {
        let term = SearchTerm::parse(search);
        self.fetch(query::list_query::<E>(scope, term.as_ref(), page), |row| {
            E::from_row(row, 0)
        })
    }

    fn find<E: Entity>(&self, id: E::Id) -> Result<Option<E>> {
        let query = query::by_id_query::<E>(id);
        tracing::trace!(sql = %query.sql, "lookup by id");

        let mut stmt = self.conn.prepare_cached(&query.sql)?;
        let found = stmt
            .query_row(query.params().as_slice(), |row| E::from_row(row, 0))
            .optional()?;

        Ok(found)
    }

    fn fetch<T>(
        &self,
        query: BoundQuery,
        map: impl FnMut(&Row<'_>) -> rusqlite::Result<T>,
    ) -> Result<Vec<T>> {
        tracing::trace!(sql = %query.sql, "listing");

        let mut stmt = self.conn.prepare_cached(&query.sql)?;
        let params = query.params();
        let rows = stmt.query_map(params.as_slice(), map)?;
        let items = rows.collect::<rusqlite::Result<Vec<T>>>()?;

        Ok(items)
    }
}
