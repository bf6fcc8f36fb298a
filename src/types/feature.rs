use super::Geometry;

/// One boundary unit: a sub-region polygon tagged with its region.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundaryFeature {
    pub region: String,    // e.g. "Maharashtra"
    pub subregion: String, // e.g. "Pune"
    pub geometry: Geometry,
}

impl BoundaryFeature {
    pub fn new(region: impl Into<String>, subregion: impl Into<String>, geometry: Geometry) -> Self {
        Self { region: region.into(), subregion: subregion.into(), geometry }
    }
}

/// All boundary features of a dataset, in file order. Read-only after load.
#[derive(Debug, Clone, Default)]
pub struct BoundaryCollection {
    features: Vec<BoundaryFeature>,
}

impl BoundaryCollection {
    pub fn new(features: Vec<BoundaryFeature>) -> Self { Self { features } }

    #[inline] pub fn len(&self) -> usize { self.features.len() }

    #[inline] pub fn is_empty(&self) -> bool { self.features.is_empty() }

    #[inline] pub fn features(&self) -> &[BoundaryFeature] { &self.features }

    #[inline] pub fn iter(&self) -> std::slice::Iter<'_, BoundaryFeature> { self.features.iter() }
}

impl FromIterator<BoundaryFeature> for BoundaryCollection {
    fn from_iter<I: IntoIterator<Item = BoundaryFeature>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
