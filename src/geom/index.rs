use geo::Rect;
use rstar::{RTree, AABB};

use crate::{geom::BoundingBox, types::BoundaryFeature};

/// R-tree over feature bounding boxes, used to cull features outside a map viewport.
/// Features without polygonal vertices are not indexed.
#[derive(Debug)]
pub(crate) struct FeatureIndex {
    rtree: RTree<BoundingBox>,
}

impl FeatureIndex {
    pub(crate) fn new(features: &[&BoundaryFeature]) -> Self {
        Self {
            rtree: RTree::bulk_load(
                features.iter().enumerate()
                    .filter_map(|(i, feature)| feature.geometry.bounding_rect().map(|rect| BoundingBox::new(i, rect)))
                    .collect()
            ),
        }
    }

    /// Indices of features whose bounding box intersects `window`, in ascending order.
    pub(crate) fn query(&self, window: &Rect<f64>) -> Vec<usize> {
        let envelope = AABB::from_corners(window.min().into(), window.max().into());
        let mut indices: Vec<usize> = self.rtree.locate_in_envelope_intersecting(&envelope)
            .map(|bbox| bbox.idx())
            .collect();
        indices.sort_unstable();
        indices
    }
}
