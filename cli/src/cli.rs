use std::path::PathBuf;

/// District dashboard CLI (argument schema only)
#[derive(clap::Parser, Debug)]
#[command(name = "districtmap", version, about, propagate_version = true)]
pub struct Cli {
    /// Increase output verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// JSON config file (paths, column names, map styles)
    #[arg(short, long, global = true, value_hint = clap::ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Boundary GeoJSON file, overrides the config
    #[arg(long, global = true, value_hint = clap::ValueHint::FilePath)]
    pub boundaries: Option<PathBuf>,

    /// Census CSV file, overrides the config
    #[arg(long, global = true, value_hint = clap::ValueHint::FilePath)]
    pub demographics: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// List region names
    Regions,

    /// List the sub-regions of a region
    Subregions(SubregionsArgs),

    /// Write the region and sub-region maps for a selection
    Render(RenderArgs),

    /// Serve the interactive dashboard over HTTP
    Serve(ServeArgs),
}

#[derive(clap::Args, Debug)]
pub struct SubregionsArgs {
    /// Region name, exactly as in the boundary file
    pub region: String,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug, Default)]
pub enum Format {
    #[default]
    Svg,
    Geojson,
}

#[derive(clap::Args, Debug)]
pub struct RenderArgs {
    /// Region name
    #[arg(short, long)]
    pub region: String,

    /// Sub-region name, defaults to the first one of the region
    #[arg(short, long)]
    pub subregion: Option<String>,

    /// Output directory, defaults to "."
    #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t)]
    pub format: Format,
}

#[derive(clap::Args, Debug)]
pub struct ServeArgs {
    /// Listen address
    #[arg(short, long, default_value = "127.0.0.1:8501")]
    pub addr: String,
}
