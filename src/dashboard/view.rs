use std::{io::Write, path::{Path, PathBuf}};

use ahash::AHashMap;
use anyhow::{Context, Result};
use serde_json::{json, Map, Value};
use tracing::info;

use crate::{
    common,
    config::MapStyle,
    geom::FeatureIndex,
    io::{geojson, svg::{self, Rgb, SvgStringWriter, SvgWriter, Viewport}},
    types::{BoundaryFeature, Center},
};
use super::PopulationRow;

/// Everything needed to draw one choropleth panel: the areas, their attribute rows
/// keyed by sub-region name, and the framing.
#[derive(Debug, Clone)]
pub struct ChoroplethMap<'a> {
    pub title: String,
    pub features: Vec<&'a BoundaryFeature>,
    pub rows: Vec<PopulationRow>,
    pub center: Center,
    pub style: &'a MapStyle,
}

impl<'a> ChoroplethMap<'a> {
    fn row_for(&self, subregion: &str) -> Option<&PopulationRow> {
        self.rows.iter().find(|row| row.subregion == subregion)
    }

    /// Render the panel as a standalone SVG document.
    pub fn to_svg_string(&self) -> Result<String> {
        let mut writer = SvgStringWriter::new();
        self.write_svg(&mut writer)?;
        writer.into_string()
    }

    /// Render the panel to an SVG file at `path`.
    pub fn to_svg(&self, path: &Path) -> Result<()> {
        let mut writer = SvgWriter::new(path)?;
        self.write_svg(&mut writer)?;
        writer.flush()
            .with_context(|| format!("[dashboard::view] Failed to write {}", path.display()))?;
        Ok(())
    }

    fn write_svg(&self, writer: &mut impl Write) -> Result<()> {
        let fill: Rgb = self.style.fill.parse()?;
        let viewport = Viewport::new(self.center, self.style.zoom, self.style.width, self.style.height);

        svg::write_svg_header(writer, self.style.width, self.style.height, &self.center, self.style.zoom)?;
        svg::write_svg_styles(writer, &fill.to_string(), self.style.opacity.clamp(0.0, 1.0))?;

        let rows: AHashMap<&str, &PopulationRow> = self.rows.iter()
            .map(|row| (row.subregion.as_str(), row))
            .collect();

        let index = FeatureIndex::new(&self.features);
        for i in index.query(&viewport.window()) {
            let feature = self.features[i];
            let Some(shape) = feature.geometry.to_multipolygon() else { continue };
            let title = match rows.get(feature.subregion.as_str()) {
                Some(row) => row.hover_text(),
                None => feature.subregion.clone(),
            };
            svg::draw_area(writer, &shape, &title, &viewport)?;
        }

        svg::write_svg_footer(writer)
    }

    /// Export the panel as a GeoJSON FeatureCollection. Population counts are merged into
    /// each feature's properties and the framing is attached as foreign members.
    pub fn to_geojson(&self) -> Value {
        let features: Vec<Value> = self.features.iter()
            .map(|feature| {
                let row = self.row_for(&feature.subregion);
                let mut extra = Map::new();
                extra.insert("male_population".to_string(), json!(row.and_then(|r| r.male)));
                extra.insert("female_population".to_string(), json!(row.and_then(|r| r.female)));
                geojson::feature_to_geojson(feature, extra)
            })
            .collect();

        json!({
            "type": "FeatureCollection",
            "features": features,
            "title": self.title,
            "center": self.center,
            "zoom": self.style.zoom,
            "fill": self.style.fill,
            "opacity": self.style.opacity,
            "width": self.style.width,
            "height": self.style.height,
        })
    }
}

/// Output format for writing a view to disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Svg,
    GeoJson,
}

impl OutputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Svg => "svg",
            OutputFormat::GeoJson => "geojson",
        }
    }
}

/// The response to one selection: option lists for both selectors and both panels.
#[derive(Debug, Clone)]
pub struct DashboardView<'a> {
    pub region: String,
    pub subregion: Option<String>,
    pub regions: Vec<&'a str>,
    pub subregions: Vec<&'a str>,
    pub region_map: ChoroplethMap<'a>,
    /// `None` when the selected sub-region has no boundary feature.
    pub subregion_map: Option<ChoroplethMap<'a>>,
    pub warning: Option<String>,
}

impl<'a> DashboardView<'a> {
    /// JSON payload for API clients; maps are embedded as GeoJSON.
    pub fn to_json(&self) -> Value {
        json!({
            "region": self.region,
            "subregion": self.subregion,
            "regions": self.regions,
            "subregions": self.subregions,
            "region_map": self.region_map.to_geojson(),
            "subregion_map": self.subregion_map.as_ref().map(ChoroplethMap::to_geojson),
            "warning": self.warning,
        })
    }

    /// Write `region.<ext>` and, when present, `subregion.<ext>` into `dir`.
    pub fn write_to_dir(&self, dir: &Path, format: OutputFormat) -> Result<Vec<PathBuf>> {
        common::ensure_dir_exists(dir)?;

        let maps = [("region", Some(&self.region_map)), ("subregion", self.subregion_map.as_ref())];
        let mut written = Vec::new();
        for (name, map) in maps {
            let Some(map) = map else { continue };
            let path = dir.join(format!("{name}.{}", format.extension()));
            match format {
                OutputFormat::Svg => map.to_svg(&path)?,
                OutputFormat::GeoJson => {
                    let text = serde_json::to_string(&map.to_geojson())
                        .context("[dashboard::view] Failed to serialize GeoJSON")?;
                    std::fs::write(&path, text)
                        .with_context(|| format!("[dashboard::view] Failed to write {}", path.display()))?;
                }
            }
            info!("[dashboard::view] wrote {}", path.display());
            written.push(path);
        }
        Ok(written)
    }
}
