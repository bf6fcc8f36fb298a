//! GeoJSON writing for filtered boundary features.

use serde_json::{json, Map, Value};

use crate::types::{BoundaryFeature, Geometry, Ring};

/// Convert a geometry to a GeoJSON geometry object (`null` for non-polygonal geometry).
pub(crate) fn geometry_to_geojson(geometry: &Geometry) -> Value {
    match geometry {
        Geometry::Polygon(rings) => json!({ "type": "Polygon", "coordinates": rings_to_json(rings) }),
        Geometry::MultiPolygon(polygons) => json!({
            "type": "MultiPolygon",
            "coordinates": polygons.iter().map(|rings| rings_to_json(rings)).collect::<Vec<_>>(),
        }),
        Geometry::Other { .. } => Value::Null,
    }
}

fn rings_to_json(rings: &[Ring]) -> Value {
    json!(rings)
}

/// Build a GeoJSON Feature with the standard region/sub-region properties plus `extra`.
pub(crate) fn feature_to_geojson(feature: &BoundaryFeature, extra: Map<String, Value>) -> Value {
    let mut properties = Map::new();
    properties.insert("region".to_string(), json!(feature.region));
    properties.insert("subregion".to_string(), json!(feature.subregion));
    properties.extend(extra);

    json!({
        "type": "Feature",
        "id": feature.subregion, // Feature id used as the choropleth location key
        "geometry": geometry_to_geojson(&feature.geometry),
        "properties": properties,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn polygon_round_trips_as_standard_geojson() {
        let geometry = Geometry::Polygon(vec![vec![[1.0, 2.0], [3.0, 4.0]]]);
        assert_eq!(
            geometry_to_geojson(&geometry),
            json!({ "type": "Polygon", "coordinates": [[[1.0, 2.0], [3.0, 4.0]]] }),
        );
    }

    #[test]
    fn feature_carries_extra_properties() {
        let feature = BoundaryFeature::new("Goa", "North Goa", Geometry::Other { kind: "Point".into() });
        let mut extra = Map::new();
        extra.insert("male".to_string(), Value::Null);
        let value = feature_to_geojson(&feature, extra);

        assert_eq!(value["id"], "North Goa");
        assert_eq!(value["geometry"], Value::Null);
        assert_eq!(value["properties"]["region"], "Goa");
        assert!(value["properties"]["male"].is_null());
    }
}
