mod bbox;
mod center;
mod index;
mod shape;

use bbox::BoundingBox;
pub use center::estimate_center;
pub(crate) use index::FeatureIndex;
