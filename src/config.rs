//! Dashboard configuration: input locations, dataset column names, and map styles.
//!
//! Every field has a default matching the stock census dataset, so an empty JSON
//! object (or no config file at all) yields a working setup.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::common;

/// Property names read from each boundary feature.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoundarySchema {
    pub region_property: String,
    pub subregion_property: String,
}

impl Default for BoundarySchema {
    fn default() -> Self {
        Self {
            region_property: "st_nm".to_string(),
            subregion_property: "district".to_string(),
        }
    }
}

/// Column names read from the census table (matched after trimming whitespace).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemographicSchema {
    pub region_column: String,
    pub subregion_column: String,
    pub male_column: String,
    pub female_column: String,
}

impl Default for DemographicSchema {
    fn default() -> Self {
        Self {
            region_column: "State name".to_string(),
            subregion_column: "District name".to_string(),
            male_column: "Male".to_string(),
            female_column: "Female".to_string(),
        }
    }
}

/// Presentation of one choropleth panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapStyle {
    pub fill: String, // CSS color used for every area
    pub zoom: f64,    // Web-map style zoom: the panel spans 360 / 2^zoom degrees of longitude
    pub opacity: f64,
    pub width: u32,
    pub height: u32,
}

impl MapStyle {
    pub fn region() -> Self {
        Self { fill: "#3498DB".to_string(), zoom: 5.0, opacity: 0.6, width: 600, height: 500 }
    }

    pub fn subregion() -> Self {
        Self { fill: "#F39C12".to_string(), zoom: 7.0, opacity: 0.8, width: 600, height: 400 }
    }
}

/// Styles for the two panels of the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardStyles {
    pub region_map: MapStyle,
    pub subregion_map: MapStyle,
}

impl Default for DashboardStyles {
    fn default() -> Self {
        Self { region_map: MapStyle::region(), subregion_map: MapStyle::subregion() }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// GeoJSON boundary file.
    pub boundaries: PathBuf,
    /// CSV census file.
    pub demographics: PathBuf,
    pub boundary_schema: BoundarySchema,
    pub demographic_schema: DemographicSchema,
    pub region_map: MapStyle,
    pub subregion_map: MapStyle,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            boundaries: PathBuf::from("dist.geojson"),
            demographics: PathBuf::from("census.csv"),
            boundary_schema: BoundarySchema::default(),
            demographic_schema: DemographicSchema::default(),
            region_map: MapStyle::region(),
            subregion_map: MapStyle::subregion(),
        }
    }
}

impl DashboardConfig {
    /// Read a config from a JSON file; missing fields take their defaults.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        common::require_file_exists(path)?;
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("[config] Failed to read {}", path.display()))?;
        Self::from_json_str(&text)
            .with_context(|| format!("[config] Failed to parse {}", path.display()))
    }

    pub fn from_json_str(text: &str) -> Result<Self> {
        serde_json::from_str(text).context("[config] Invalid dashboard config")
    }

    /// Styles of both panels.
    pub fn styles(&self) -> DashboardStyles {
        DashboardStyles {
            region_map: self.region_map.clone(),
            subregion_map: self.subregion_map.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_gives_defaults() {
        let config = DashboardConfig::from_json_str("{}").unwrap();
        assert_eq!(config, DashboardConfig::default());
        assert_eq!(config.boundaries, PathBuf::from("dist.geojson"));
        assert_eq!(config.boundary_schema.region_property, "st_nm");
        assert_eq!(config.demographic_schema.subregion_column, "District name");
        assert_eq!(config.region_map.fill, "#3498DB");
        assert_eq!(config.subregion_map.zoom, 7.0);
    }

    #[test]
    fn partial_schema_keeps_other_defaults() {
        let config = DashboardConfig::from_json_str(r#"{
            "demographics": "data/pop.csv",
            "demographic_schema": { "male_column": "Males" }
        }"#).unwrap();
        assert_eq!(config.demographics, PathBuf::from("data/pop.csv"));
        assert_eq!(config.demographic_schema.male_column, "Males");
        assert_eq!(config.demographic_schema.female_column, "Female");
        assert_eq!(config.boundaries, PathBuf::from("dist.geojson"));
    }

    #[test]
    fn map_style_requires_all_fields() {
        let err = DashboardConfig::from_json_str(r#"{ "region_map": { "fill": "red" } }"#);
        assert!(err.is_err());
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(DashboardConfig::from_json_file(&dir.path().join("nope.json")).is_err());
    }
}
