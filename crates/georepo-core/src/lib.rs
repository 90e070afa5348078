//! Geographic Repository Core
//!
//! Read-only, search-enabled listings over the Country → Region →
//! Province → Department containment hierarchy, backed by SQLite.

pub mod config;
pub mod database;
pub mod entity;
pub mod error;
pub mod query;
pub mod repository;
pub mod types;

pub use config::DatabaseSettings;
pub use database::Database;
pub use entity::Entity;
pub use error::{Error, Result};
pub use repository::GeographicRepository;
pub use types::{
    Country, CountryId, Department, DepartmentId, DepartmentWithHierarchy, Page, Province,
    ProvinceId, ProvinceWithHierarchy, Region, RegionId, RegionWithCountry,
};
