mod center;
mod demographic;
mod feature;
mod geometry;

pub use center::Center;
pub use demographic::{DemographicRow, DemographicTable};
pub use feature::{BoundaryCollection, BoundaryFeature};
pub use geometry::{Geometry, Position, Ring};
