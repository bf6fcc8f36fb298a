use anyhow::Result;

use crate::cli::{Cli, SubregionsArgs};

pub fn regions(cli: &Cli) -> Result<()> {
    let dashboard = super::load_dashboard(cli)?;
    for region in dashboard.regions() {
        println!("{region}");
    }
    Ok(())
}

pub fn subregions(cli: &Cli, args: &SubregionsArgs) -> Result<()> {
    let dashboard = super::load_dashboard(cli)?;
    for subregion in dashboard.subregions(&args.region)? {
        println!("{subregion}");
    }
    Ok(())
}
