//! Row types for the geographic hierarchy.

use std::fmt;

use chrono::{DateTime, Utc};
use rusqlite::types::{FromSql, FromSqlResult, ToSql, ToSqlOutput, ValueRef};
use serde::{Deserialize, Serialize};

macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub i64);

        impl $name {
            pub fn inner(self) -> i64 {
                self.0
            }
        }

        impl From<i64> for $name {
            fn from(value: i64) -> Self {
                Self(value)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl ToSql for $name {
            fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
                Ok(ToSqlOutput::from(self.0))
            }
        }

        impl FromSql for $name {
            fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
                i64::column_result(value).map(Self)
            }
        }
    };
}

entity_id!(
    /// Primary key of a row in `countries`.
    CountryId
);
entity_id!(
    /// Primary key of a row in `regions`.
    RegionId
);
entity_id!(
    /// Primary key of a row in `provinces`.
    ProvinceId
);
entity_id!(
    /// Primary key of a row in `departments`.
    DepartmentId
);

/// Offset/limit window applied after all filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    pub skip: u32,
    pub limit: u32,
}

impl Page {
    pub const DEFAULT_LIMIT: u32 = 100;

    pub fn new(skip: u32, limit: u32) -> Self {
        Self { skip, limit }
    }

    pub fn with_skip(mut self, skip: u32) -> Self {
        self.skip = skip;
        self
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }
}

impl Default for Page {
    fn default() -> Self {
        Self {
            skip: 0,
            limit: Self::DEFAULT_LIMIT,
        }
    }
}

/// Root of the hierarchy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Country {
    pub id: CountryId,
    pub display_name: String,
    pub name_en: Option<String>,
    pub name_fr: Option<String>,
    pub iso_code: Option<String>,
    pub iso2_code: Option<String>,
    /// Capital city name.
    pub capital: Option<String>,
    pub area_km2: Option<f64>,
    pub population: Option<i64>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    /// GeoJSON geometry.
    pub geometry: Option<serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Region {
    pub id: RegionId,
    pub display_name: String,
    pub country_id: CountryId,
    pub iso_code: Option<String>,
    pub area_km2: Option<f64>,
    pub population: Option<i64>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub geometry: Option<serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Province {
    pub id: ProvinceId,
    pub display_name: String,
    pub region_id: RegionId,
    pub iso_code: Option<String>,
    pub area_km2: Option<f64>,
    pub population: Option<i64>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub geometry: Option<serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Department {
    pub id: DepartmentId,
    pub display_name: String,
    pub province_id: ProvinceId,
    pub iso_code: Option<String>,
    pub area_km2: Option<f64>,
    pub population: Option<i64>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub geometry: Option<serde_json::Value>,
}

/// A region flattened together with its country's display name.
///
/// Serializes to a single flat object, so an API layer can return it
/// without a second lookup for the country.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionWithCountry {
    #[serde(flatten)]
    pub region: Region,
    pub country_name: String,
}

/// A province with the display names of its region and country.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProvinceWithHierarchy {
    #[serde(flatten)]
    pub province: Province,
    pub region_name: String,
    pub country_name: String,
}

/// A department with the display names of every ancestor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepartmentWithHierarchy {
    #[serde(flatten)]
    pub department: Department,
    pub province_name: String,
    pub region_name: String,
    pub country_name: String,
}
