pub mod list;
pub mod render;
pub mod serve;

use anyhow::Result;
use districtmap::{Dashboard, DashboardConfig};

use crate::cli::Cli;

/// Resolve the config from the global flags and load both datasets.
pub fn load_dashboard(cli: &Cli) -> Result<Dashboard> {
    let mut config = match &cli.config {
        Some(path) => DashboardConfig::from_json_file(path)?,
        None => DashboardConfig::default(),
    };
    if let Some(path) = &cli.boundaries { config.boundaries = path.clone() }
    if let Some(path) = &cli.demographics { config.demographics = path.clone() }

    tracing::info!(
        "[load] boundaries={} demographics={}",
        config.boundaries.display(), config.demographics.display(),
    );
    Dashboard::load(&config)
}
