use tracing::warn;

use crate::types::{BoundaryFeature, Center, Geometry};

impl Geometry {
    /// Approximate center: the plain mean of every vertex across all rings and polygons.
    /// Holes are averaged in as if solid and the closing vertex of each ring counts again,
    /// so this is a framing hint, not a true centroid.
    /// Returns `None` for non-polygonal or empty geometries.
    pub fn center(&self) -> Option<Center> {
        if !self.is_polygonal() { return None }

        let (mut lon_sum, mut lat_sum, mut count) = (0.0, 0.0, 0usize);
        for &[lon, lat] in self.vertices() {
            lon_sum += lon;
            lat_sum += lat;
            count += 1;
        }
        if count == 0 { return None }

        Some(Center::new(lat_sum / count as f64, lon_sum / count as f64))
    }
}

/// Estimate the map center of one feature, falling back to `Center::DEFAULT`.
pub fn estimate_center(feature: &BoundaryFeature) -> Center {
    match feature.geometry.center() {
        Some(center) => center,
        None => {
            if feature.geometry.is_polygonal() {
                warn!(
                    "[geom::center] {} geometry of {}/{} has no vertices; using default center",
                    feature.geometry.kind(), feature.region, feature.subregion,
                );
            }
            Center::DEFAULT
        }
    }
}
