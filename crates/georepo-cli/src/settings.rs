use std::path::{Path, PathBuf};

use anyhow::Context;
use georepo_core::DatabaseSettings;
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub database: DatabaseSettings,
}

impl Settings {
    /// Layer the optional settings file, then `GEOREPO_*` environment
    /// variables, then the `--database` flag.
    pub fn load(file: Option<&Path>, database: Option<PathBuf>) -> anyhow::Result<Self> {
        let mut builder = config::Config::builder();

        if let Some(file) = file {
            builder = builder.add_source(config::File::from(file));
        }

        let mut settings = builder
            .add_source(
                config::Environment::with_prefix("GEOREPO")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()
            .context("Failed to build configuration")?
            .try_deserialize::<Settings>()
            .context("Failed to deserialize settings")?;

        if let Some(path) = database {
            settings.database.path = path;
        }

        Ok(settings)
    }
}
