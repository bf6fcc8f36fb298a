use std::path::PathBuf;

use anyhow::Result;
use districtmap::{OutputFormat, Selection};
use tracing::warn;

use crate::cli::{Cli, Format, RenderArgs};

pub fn run(cli: &Cli, args: &RenderArgs) -> Result<()> {
    let dashboard = super::load_dashboard(cli)?;
    let out_dir = args.output.clone().unwrap_or_else(|| PathBuf::from("."));
    let format = match args.format {
        Format::Svg => OutputFormat::Svg,
        Format::Geojson => OutputFormat::GeoJson,
    };

    let mut selection = Selection::new(&args.region);
    if let Some(subregion) = &args.subregion {
        selection = selection.with_subregion(subregion);
    }

    let view = dashboard.view(&selection)?;
    if let Some(warning) = &view.warning {
        warn!("[render] {warning}");
    }

    for path in view.write_to_dir(&out_dir, format)? {
        println!("{}", path.display());
    }
    Ok(())
}
