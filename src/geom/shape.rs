use geo::{BoundingRect, LineString, MultiPolygon, Polygon, Rect};

use crate::types::{Geometry, Ring};

impl Geometry {
    /// Convert to a `geo::MultiPolygon`; `None` for non-polygonal geometry.
    /// The first ring of each polygon is the exterior, the rest are holes.
    pub fn to_multipolygon(&self) -> Option<MultiPolygon<f64>> {
        match self {
            Geometry::Polygon(rings) => Some(MultiPolygon(to_polygon(rings).into_iter().collect())),
            Geometry::MultiPolygon(polygons) => Some(MultiPolygon(
                polygons.iter().filter_map(|rings| to_polygon(rings)).collect()
            )),
            Geometry::Other { .. } => None,
        }
    }

    /// Bounding rectangle in lon/lat, if the geometry has any vertices.
    pub fn bounding_rect(&self) -> Option<Rect<f64>> {
        self.to_multipolygon()?.bounding_rect()
    }
}

fn to_polygon(rings: &[Ring]) -> Option<Polygon<f64>> {
    let (exterior, interiors) = rings.split_first()?;
    if exterior.is_empty() { return None }

    Some(Polygon::new(
        LineString::from(exterior.clone()),
        interiors.iter()
            .filter(|ring| !ring.is_empty())
            .map(|ring| LineString::from(ring.clone()))
            .collect(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn polygon_rings_become_exterior_and_holes() {
        let geometry = Geometry::Polygon(vec![
            vec![[0.0, 0.0], [4.0, 0.0], [4.0, 4.0], [0.0, 0.0]],
            vec![[1.0, 1.0], [2.0, 1.0], [2.0, 2.0], [1.0, 1.0]],
        ]);
        let mp = geometry.to_multipolygon().unwrap();
        assert_eq!(mp.0.len(), 1);
        assert_eq!(mp.0[0].interiors().len(), 1);
    }

    #[test]
    fn bounding_rect_covers_all_parts() {
        let geometry = Geometry::MultiPolygon(vec![
            vec![vec![[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 0.0]]],
            vec![vec![[5.0, 5.0], [6.0, 5.0], [6.0, 7.0], [5.0, 5.0]]],
        ]);
        let rect = geometry.bounding_rect().unwrap();
        assert_eq!((rect.min().x, rect.min().y), (0.0, 0.0));
        assert_eq!((rect.max().x, rect.max().y), (6.0, 7.0));
    }

    #[test]
    fn non_polygonal_has_no_shape() {
        let geometry = Geometry::Other { kind: "LineString".into() };
        assert!(geometry.to_multipolygon().is_none());
        assert!(geometry.bounding_rect().is_none());
        assert!(Geometry::Polygon(vec![]).bounding_rect().is_none());
    }
}
