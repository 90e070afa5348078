//! Table bindings for the four hierarchy levels.
//!
//! Each entity knows its table, the alias it takes in generated SQL, the
//! columns it decodes from, and the chain of joins leading up to the root.

use rusqlite::{types::ToSql, Row};

use crate::types::{
    Country, CountryId, Department, DepartmentId, Province, ProvinceId, Region, RegionId,
};

/// Column holding an entity's display name, shared by every level.
pub const DISPLAY_NAME_COLUMN: &str = "shape_name";

/// One step up the containment chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ancestor {
    pub alias: &'static str,
    pub join: &'static str,
}

impl Ancestor {
    /// Qualified display-name column of this ancestor.
    pub fn display_name(&self) -> String {
        format!("{}.{}", self.alias, DISPLAY_NAME_COLUMN)
    }
}

/// A row type bound to a table.
pub trait Entity: Sized {
    type Id: ToSql + Copy + 'static;

    const TABLE: &'static str;
    const ALIAS: &'static str;
    /// Columns in the order `from_row` reads them.
    const COLUMNS: &'static [&'static str];
    /// Own columns matched by a search.
    const SEARCH_COLUMNS: &'static [&'static str];
    /// Joins up to the root, nearest ancestor first.
    const ANCESTORS: &'static [Ancestor];

    /// Decode the entity from `row`, starting at column `offset`.
    fn from_row(row: &Row<'_>, offset: usize) -> rusqlite::Result<Self>;

    fn qualified_columns() -> Vec<String> {
        qualify(Self::ALIAS, Self::COLUMNS)
    }

    fn qualified_search_columns() -> Vec<String> {
        qualify(Self::ALIAS, Self::SEARCH_COLUMNS)
    }

    fn qualified(column: &str) -> String {
        format!("{}.{}", Self::ALIAS, column)
    }
}

/// An entity owned by exactly one parent.
pub trait Child: Entity {
    type ParentId: ToSql + Copy + 'static;

    const PARENT_COLUMN: &'static str;
}

fn qualify(alias: &str, columns: &[&str]) -> Vec<String> {
    columns.iter().map(|c| format!("{alias}.{c}")).collect()
}

const COUNTRY: Ancestor = Ancestor {
    alias: "c",
    join: "JOIN countries c ON c.id = r.country_id",
};

const REGION: Ancestor = Ancestor {
    alias: "r",
    join: "JOIN regions r ON r.id = p.region_id",
};

const PROVINCE: Ancestor = Ancestor {
    alias: "p",
    join: "JOIN provinces p ON p.id = d.province_id",
};

/// Columns shared by region, province and department after the parent reference.
const DETAIL_COLUMNS: [&str; 6] = [
    "shape_iso",
    "shape_area_km2",
    "shape_people",
    "created_at",
    "updated_at",
    "geometry",
];

impl Entity for Country {
    type Id = CountryId;

    const TABLE: &'static str = "countries";
    const ALIAS: &'static str = "c";
    const COLUMNS: &'static [&'static str] = &[
        "id",
        "shape_name",
        "shape_name_en",
        "shape_name_fr",
        "shape_iso",
        "shape_iso_2",
        "shape_city",
        "shape_area_km2",
        "shape_people",
        "created_at",
        "updated_at",
        "geometry",
    ];
    const SEARCH_COLUMNS: &'static [&'static str] = &[
        "shape_name",
        "shape_name_en",
        "shape_name_fr",
        "shape_iso",
        "shape_iso_2",
        "shape_city",
    ];
    const ANCESTORS: &'static [Ancestor] = &[];

    fn from_row(row: &Row<'_>, offset: usize) -> rusqlite::Result<Self> {
        Ok(Country {
            id: row.get(offset)?,
            display_name: row.get(offset + 1)?,
            name_en: row.get(offset + 2)?,
            name_fr: row.get(offset + 3)?,
            iso_code: row.get(offset + 4)?,
            iso2_code: row.get(offset + 5)?,
            capital: row.get(offset + 6)?,
            area_km2: row.get(offset + 7)?,
            population: row.get(offset + 8)?,
            created_at: row.get(offset + 9)?,
            updated_at: row.get(offset + 10)?,
            geometry: row.get(offset + 11)?,
        })
    }
}

impl Entity for Region {
    type Id = RegionId;

    const TABLE: &'static str = "regions";
    const ALIAS: &'static str = "r";
    const COLUMNS: &'static [&'static str] = &[
        "id",
        "shape_name",
        "country_id",
        DETAIL_COLUMNS[0],
        DETAIL_COLUMNS[1],
        DETAIL_COLUMNS[2],
        DETAIL_COLUMNS[3],
        DETAIL_COLUMNS[4],
        DETAIL_COLUMNS[5],
    ];
    const SEARCH_COLUMNS: &'static [&'static str] = &[DISPLAY_NAME_COLUMN];
    const ANCESTORS: &'static [Ancestor] = &[COUNTRY];

    fn from_row(row: &Row<'_>, offset: usize) -> rusqlite::Result<Self> {
        Ok(Region {
            id: row.get(offset)?,
            display_name: row.get(offset + 1)?,
            country_id: row.get(offset + 2)?,
            iso_code: row.get(offset + 3)?,
            area_km2: row.get(offset + 4)?,
            population: row.get(offset + 5)?,
            created_at: row.get(offset + 6)?,
            updated_at: row.get(offset + 7)?,
            geometry: row.get(offset + 8)?,
        })
    }
}

impl Child for Region {
    type ParentId = CountryId;

    const PARENT_COLUMN: &'static str = "country_id";
}

impl Entity for Province {
    type Id = ProvinceId;

    const TABLE: &'static str = "provinces";
    const ALIAS: &'static str = "p";
    const COLUMNS: &'static [&'static str] = &[
        "id",
        "shape_name",
        "region_id",
        DETAIL_COLUMNS[0],
        DETAIL_COLUMNS[1],
        DETAIL_COLUMNS[2],
        DETAIL_COLUMNS[3],
        DETAIL_COLUMNS[4],
        DETAIL_COLUMNS[5],
    ];
    const SEARCH_COLUMNS: &'static [&'static str] = &[DISPLAY_NAME_COLUMN];
    const ANCESTORS: &'static [Ancestor] = &[REGION, COUNTRY];

    fn from_row(row: &Row<'_>, offset: usize) -> rusqlite::Result<Self> {
        Ok(Province {
            id: row.get(offset)?,
            display_name: row.get(offset + 1)?,
            region_id: row.get(offset + 2)?,
            iso_code: row.get(offset + 3)?,
            area_km2: row.get(offset + 4)?,
            population: row.get(offset + 5)?,
            created_at: row.get(offset + 6)?,
            updated_at: row.get(offset + 7)?,
            geometry: row.get(offset + 8)?,
        })
    }
}

impl Child for Province {
    type ParentId = RegionId;

    const PARENT_COLUMN: &'static str = "region_id";
}

impl Entity for Department {
    type Id = DepartmentId;

    const TABLE: &'static str = "departments";
    const ALIAS: &'static str = "d";
    const COLUMNS: &'static [&'static str] = &[
        "id",
        "shape_name",
        "province_id",
        DETAIL_COLUMNS[0],
        DETAIL_COLUMNS[1],
        DETAIL_COLUMNS[2],
        DETAIL_COLUMNS[3],
        DETAIL_COLUMNS[4],
        DETAIL_COLUMNS[5],
    ];
    const SEARCH_COLUMNS: &'static [&'static str] = &[DISPLAY_NAME_COLUMN];
    const ANCESTORS: &'static [Ancestor] = &[PROVINCE, REGION, COUNTRY];

    fn from_row(row: &Row<'_>, offset: usize) -> rusqlite::Result<Self> {
        Ok(Department {
            id: row.get(offset)?,
            display_name: row.get(offset + 1)?,
            province_id: row.get(offset + 2)?,
            iso_code: row.get(offset + 3)?,
            area_km2: row.get(offset + 4)?,
            population: row.get(offset + 5)?,
            created_at: row.get(offset + 6)?,
            updated_at: row.get(offset + 7)?,
            geometry: row.get(offset + 8)?,
        })
    }
}

impl Child for Department {
    type ParentId = ProvinceId;

    const PARENT_COLUMN: &'static str = "province_id";
}
