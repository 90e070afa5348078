//! georepo — command-line access to the geographic repository
//!
//! Opens a SQLite database holding the `countries`, `regions`,
//! `provinces` and `departments` tables and runs one repository
//! operation, printing the result as JSON on stdout.
//!
//! Usage examples
//! --------------
//!
//! - Regions whose name or country name contains "peru"
//!   $ georepo --database geo.db regions --search peru
//!
//! - Provinces of region 10, second page of 20
//!   $ georepo -d geo.db provinces --region 10 --skip 20 --limit 20
//!
//! - Regions flattened with their country name
//!   $ georepo -d geo.db regions-info -s lima
//!
//! - One department by id
//!   $ georepo -d geo.db get department 2100
//!
//! Settings come from `--config <file.toml>`, then `GEOREPO_*` variables
//! (e.g. `GEOREPO_DATABASE__PATH`), then `--database`. Logs go to stderr,
//! filtered by `RUST_LOG`.
mod args;
mod settings;

use anyhow::Context;
use clap::Parser;
use georepo_core::{
    Country, CountryId, Database, Department, DepartmentId, Page, Province, ProvinceId, Region,
    RegionId,
};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use crate::args::{CliArgs, Commands, Kind, ListArgs};
use crate::settings::Settings;

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let settings = Settings::load(args.config.as_deref(), args.database)?;
    tracing::debug!(?settings, "loaded settings");

    let db = Database::open_with(&settings.database).with_context(|| {
        format!(
            "Failed to open database at {}",
            settings.database.path.display()
        )
    })?;
    let repo = db.repository();

    match args.command {
        Commands::Stats => print_json(&serde_json::json!({
            "countries": db.count::<Country>()?,
            "regions": db.count::<Region>()?,
            "provinces": db.count::<Province>()?,
            "departments": db.count::<Department>()?,
        })),

        Commands::Countries { list } => {
            let (page, search) = window(&list);
            print_json(&repo.countries_with_search(page, search)?)
        }

        Commands::Regions { country, list } => {
            let (page, search) = window(&list);
            let regions = match country {
                Some(id) => repo.regions_by_country_with_search(CountryId(id), page, search)?,
                None => repo.regions_with_search(page, search)?,
            };
            print_json(&regions)
        }

        Commands::Provinces { region, list } => {
            let (page, search) = window(&list);
            let provinces = match region {
                Some(id) => repo.provinces_by_region_with_search(RegionId(id), page, search)?,
                None => repo.provinces_with_search(page, search)?,
            };
            print_json(&provinces)
        }

        Commands::Departments { province, list } => {
            let (page, search) = window(&list);
            let departments = match province {
                Some(id) => {
                    repo.departments_by_province_with_search(ProvinceId(id), page, search)?
                }
                None => repo.departments_with_search(page, search)?,
            };
            print_json(&departments)
        }

        Commands::RegionsInfo { list } => {
            let (page, search) = window(&list);
            print_json(&repo.regions_with_country_info(page, search)?)
        }

        Commands::ProvincesInfo { list } => {
            let (page, search) = window(&list);
            print_json(&repo.provinces_with_hierarchy_info(page, search)?)
        }

        Commands::DepartmentsInfo { list } => {
            let (page, search) = window(&list);
            print_json(&repo.departments_with_hierarchy_info(page, search)?)
        }

        Commands::Get { kind, id } => {
            let found = match kind {
                Kind::Country => to_value(repo.country(CountryId(id))?)?,
                Kind::Region => to_value(repo.region(RegionId(id))?)?,
                Kind::Province => to_value(repo.province(ProvinceId(id))?)?,
                Kind::Department => to_value(repo.department(DepartmentId(id))?)?,
            };
            if found.is_null() {
                eprintln!("No {kind:?} found with id {id}");
            }
            print_json(&found)
        }
    }
}

fn window(list: &ListArgs) -> (Page, Option<&str>) {
    (Page::new(list.skip, list.limit), list.search.as_deref())
}

fn to_value<T: Serialize>(value: Option<T>) -> anyhow::Result<serde_json::Value> {
    Ok(serde_json::to_value(value)?)
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
