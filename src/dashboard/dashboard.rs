use anyhow::{bail, Result};
use tracing::{debug, info, warn};

use crate::{
    config::{DashboardConfig, DashboardStyles},
    geom::estimate_center,
    io,
    types::{BoundaryCollection, Center, DemographicTable},
};
use super::{join, ChoroplethMap, DashboardView, Selection};

pub(crate) const SUBREGION_NOT_FOUND: &str = "District not found in boundary data.";

/// Loaded datasets plus panel styles. Built once at startup, then queried per selection.
#[derive(Debug, Clone)]
pub struct Dashboard {
    boundaries: BoundaryCollection,
    demographics: DemographicTable,
    styles: DashboardStyles,
}

impl Dashboard {
    pub fn new(boundaries: BoundaryCollection, demographics: DemographicTable, styles: DashboardStyles) -> Self {
        Self { boundaries, demographics, styles }
    }

    /// Read both input files named by `config`.
    pub fn load(config: &DashboardConfig) -> Result<Self> {
        let boundaries = io::geojson::read_boundaries(&config.boundaries, &config.boundary_schema)?;
        let demographics = io::csv::read_demographics(&config.demographics, &config.demographic_schema)?;
        info!(
            "[dashboard] ready: {} regions, {} boundary features, {} census rows",
            boundaries.regions().len(), boundaries.len(), demographics.len(),
        );
        Ok(Self::new(boundaries, demographics, config.styles()))
    }

    #[inline] pub fn boundaries(&self) -> &BoundaryCollection { &self.boundaries }

    #[inline] pub fn demographics(&self) -> &DemographicTable { &self.demographics }

    #[inline] pub fn styles(&self) -> &DashboardStyles { &self.styles }

    /// Options for the region selector.
    pub fn regions(&self) -> Vec<&str> { self.boundaries.regions() }

    /// Options for the sub-region selector; errors on an unknown region.
    pub fn subregions(&self, region: &str) -> Result<Vec<&str>> {
        if !self.boundaries.has_region(region) {
            bail!("[dashboard] Unknown region: {region:?}");
        }
        Ok(self.boundaries.subregions(region))
    }

    /// Answer one selection with both panels.
    pub fn view(&self, selection: &Selection) -> Result<DashboardView<'_>> {
        debug!("[dashboard] view {:?}", selection);
        let region = selection.region.as_str();
        let subregions = self.subregions(region)?;
        let subregion = selection.resolve_subregion(&subregions);

        let region_features = self.boundaries.in_region(region);
        let region_map = ChoroplethMap {
            title: format!("State Map: {region}"),
            rows: join::region_table(&region_features, &self.demographics),
            center: region_features.first().map_or(Center::DEFAULT, |&feature| estimate_center(feature)),
            features: region_features.clone(),
            style: &self.styles.region_map,
        };

        let matching = subregion.as_deref()
            .map(|name| region_features.iter().copied().filter(|feature| feature.subregion == name).collect::<Vec<_>>())
            .unwrap_or_default();

        let (subregion_map, warning) = match (subregion.as_deref(), matching.first()) {
            (Some(name), Some(&first)) => {
                let map = ChoroplethMap {
                    title: format!("District Map: {name}"),
                    rows: vec![join::subregion_row(region, name, &self.demographics)],
                    center: estimate_center(first),
                    features: matching.clone(),
                    style: &self.styles.subregion_map,
                };
                (Some(map), None)
            }
            (name, _) => {
                warn!("[dashboard] sub-region {:?} of {region:?} not found in boundary data", name);
                (None, Some(SUBREGION_NOT_FOUND.to_string()))
            }
        };

        Ok(DashboardView {
            region: region.to_string(),
            subregion,
            regions: self.regions(),
            subregions,
            region_map,
            subregion_map,
            warning,
        })
    }
}
