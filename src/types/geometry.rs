/// A `[longitude, latitude]` vertex.
pub type Position = [f64; 2];

/// An ordered ring of vertices, kept exactly as read (closing vertex included).
pub type Ring = Vec<Position>;

/// Boundary geometry of a single feature.
/// Only polygonal geometries are drawn; anything else is carried as `Other`
/// so that loading never fails on an unexpected geometry type.
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    Polygon(Vec<Ring>),
    MultiPolygon(Vec<Vec<Ring>>),
    Other { kind: String },
}

impl Geometry {
    /// GeoJSON type name of this geometry.
    pub fn kind(&self) -> &str {
        match self {
            Geometry::Polygon(_) => "Polygon",
            Geometry::MultiPolygon(_) => "MultiPolygon",
            Geometry::Other { kind } => kind,
        }
    }

    /// Iterate over every vertex of every ring, or nothing for non-polygonal geometry.
    pub fn vertices(&self) -> Box<dyn Iterator<Item = &Position> + '_> {
        match self {
            Geometry::Polygon(rings) => Box::new(rings.iter().flatten()),
            Geometry::MultiPolygon(polygons) => Box::new(polygons.iter().flatten().flatten()),
            Geometry::Other { .. } => Box::new(std::iter::empty()),
        }
    }

    /// True for Polygon and MultiPolygon.
    #[inline] pub fn is_polygonal(&self) -> bool { !matches!(self, Geometry::Other { .. }) }
}
