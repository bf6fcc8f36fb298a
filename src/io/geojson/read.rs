//! GeoJSON boundary reading.

use std::path::Path;

use anyhow::{anyhow, bail, Context, Result};
use serde_json::Value;
use tracing::info;

use crate::{common, config::BoundarySchema, types::{BoundaryCollection, BoundaryFeature, Geometry, Position, Ring}};

/// Read a GeoJSON FeatureCollection of boundary features from `path`.
pub fn read_boundaries(path: &Path, schema: &BoundarySchema) -> Result<BoundaryCollection> {
    common::require_file_exists(path)?;
    let bytes = std::fs::read(path)
        .with_context(|| format!("[io::geojson::read] Failed to read {}", path.display()))?;
    let collection = read_boundaries_bytes(&bytes, schema)
        .with_context(|| format!("[io::geojson::read] Failed to load boundaries from {}", path.display()))?;
    info!("[io::geojson] loaded {} boundary features from {}", collection.len(), path.display());
    Ok(collection)
}

/// Read boundary features from a GeoJSON string.
pub fn read_boundaries_str(geojson: &str, schema: &BoundarySchema) -> Result<BoundaryCollection> {
    read_boundaries_bytes(geojson.as_bytes(), schema)
}

fn read_boundaries_bytes(bytes: &[u8], schema: &BoundarySchema) -> Result<BoundaryCollection> {
    let value: Value = serde_json::from_slice(bytes).context("[io::geojson::read] Failed to parse GeoJSON")?;
    let features = value["features"].as_array()
        .ok_or_else(|| anyhow!("[io::geojson::read] Expected a FeatureCollection with a \"features\" array"))?;

    features.iter().enumerate()
        .map(|(i, feature)| parse_feature(feature, schema)
            .with_context(|| format!("[io::geojson::read] Invalid feature at index {i}")))
        .collect()
}

fn parse_feature(feature: &Value, schema: &BoundarySchema) -> Result<BoundaryFeature> {
    let property = |name: &str| -> Result<String> {
        feature["properties"][name].as_str()
            .map(str::to_string)
            .ok_or_else(|| anyhow!("missing string property {name:?}"))
    };

    Ok(BoundaryFeature {
        region: property(&schema.region_property)?,
        subregion: property(&schema.subregion_property)?,
        geometry: parse_geometry(&feature["geometry"])?,
    })
}

/// Parse a GeoJSON geometry object. Types other than Polygon and MultiPolygon are kept as `Other`.
fn parse_geometry(geometry: &Value) -> Result<Geometry> {
    if geometry.is_null() {
        return Ok(Geometry::Other { kind: "null".to_string() });
    }

    let kind = geometry["type"].as_str()
        .ok_or_else(|| anyhow!("geometry has no \"type\""))?;
    let coords = &geometry["coordinates"];

    match kind {
        "Polygon" => Ok(Geometry::Polygon(parse_polygon(coords)?)),
        "MultiPolygon" => Ok(Geometry::MultiPolygon(
            as_array(coords, "MultiPolygon coordinates")?.iter()
                .map(parse_polygon)
                .collect::<Result<_>>()?
        )),
        other => Ok(Geometry::Other { kind: other.to_string() }),
    }
}

/// Parse polygon coordinates: `[[[lon, lat], ...], ...]`.
fn parse_polygon(coords: &Value) -> Result<Vec<Ring>> {
    as_array(coords, "polygon")?.iter()
        .map(parse_ring)
        .collect()
}

/// Parse a ring: `[[lon, lat], ...]`. Extra ordinates (altitude) are dropped.
fn parse_ring(coords: &Value) -> Result<Ring> {
    as_array(coords, "ring")?.iter()
        .map(parse_position)
        .collect()
}

fn parse_position(coord: &Value) -> Result<Position> {
    let pair = as_array(coord, "position")?;
    if pair.len() < 2 {
        bail!("position needs at least two ordinates, got {}", pair.len());
    }
    let lon = pair[0].as_f64().ok_or_else(|| anyhow!("longitude must be a number"))?;
    let lat = pair[1].as_f64().ok_or_else(|| anyhow!("latitude must be a number"))?;
    Ok([lon, lat])
}

fn as_array<'a>(value: &'a Value, what: &str) -> Result<&'a Vec<Value>> {
    value.as_array().ok_or_else(|| anyhow!("{what} must be an array"))
}
