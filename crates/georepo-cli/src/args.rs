use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

/// CLI arguments for georepo
#[derive(Debug, Parser)]
#[command(
    name = "georepo",
    version,
    about = "Query the country/region/province/department hierarchy"
)]
pub struct CliArgs {
    /// Settings file (TOML); `GEOREPO_*` environment variables override it
    #[arg(short = 'c', long = "config", global = true)]
    pub config: Option<PathBuf>,

    /// SQLite database file; overrides the configured path
    #[arg(short = 'd', long = "database", global = true)]
    pub database: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Clone, Args)]
pub struct ListArgs {
    /// Case-insensitive substring to match
    #[arg(short = 's', long)]
    pub search: Option<String>,

    #[arg(long, default_value_t = 0)]
    pub skip: u32,

    #[arg(long, default_value_t = 100)]
    pub limit: u32,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Kind {
    Country,
    Region,
    Province,
    Department,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Row counts per table
    Stats,

    /// Search countries by any of their names, codes or capital
    Countries {
        #[command(flatten)]
        list: ListArgs,
    },

    /// Search regions, optionally within one country
    Regions {
        #[arg(long)]
        country: Option<i64>,
        #[command(flatten)]
        list: ListArgs,
    },

    /// Search provinces, optionally within one region
    Provinces {
        #[arg(long)]
        region: Option<i64>,
        #[command(flatten)]
        list: ListArgs,
    },

    /// Search departments, optionally within one province
    Departments {
        #[arg(long)]
        province: Option<i64>,
        #[command(flatten)]
        list: ListArgs,
    },

    /// Regions flattened with their country name
    RegionsInfo {
        #[command(flatten)]
        list: ListArgs,
    },

    /// Provinces with region and country names
    ProvincesInfo {
        #[command(flatten)]
        list: ListArgs,
    },

    /// Departments with province, region and country names
    DepartmentsInfo {
        #[command(flatten)]
        list: ListArgs,
    },

    /// Fetch one entity by id
    Get {
        #[arg(value_enum)]
        kind: Kind,
        id: i64,
    },
}
