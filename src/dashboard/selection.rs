use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::types::{BoundaryCollection, BoundaryFeature};

impl BoundaryCollection {
    /// Distinct region names, sorted.
    pub fn regions(&self) -> Vec<&str> {
        self.iter()
            .map(|feature| feature.region.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Distinct sub-region names of `region` (exact match), sorted.
    pub fn subregions(&self, region: &str) -> Vec<&str> {
        self.in_region(region).into_iter()
            .map(|feature| feature.subregion.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Features of `region` in file order.
    pub fn in_region(&self, region: &str) -> Vec<&BoundaryFeature> {
        self.iter().filter(|feature| feature.region == region).collect()
    }

    pub fn has_region(&self, region: &str) -> bool {
        self.iter().any(|feature| feature.region == region)
    }
}

/// The user's choice of region and, optionally, sub-region.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Selection {
    pub region: String,
    #[serde(default)]
    pub subregion: Option<String>,
}

impl Selection {
    pub fn new(region: impl Into<String>) -> Self {
        Self { region: region.into(), subregion: None }
    }

    pub fn with_subregion(mut self, subregion: impl Into<String>) -> Self {
        self.subregion = Some(subregion.into());
        self
    }

    /// The sub-region to show given the current option list: the explicit choice when
    /// there is one (even if it is not an option), else the first option.
    pub fn resolve_subregion(&self, options: &[&str]) -> Option<String> {
        match &self.subregion {
            Some(subregion) => Some(subregion.clone()),
            None => options.first().map(|s| s.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Geometry;

    fn collection(pairs: &[(&str, &str)]) -> BoundaryCollection {
        pairs.iter()
            .map(|&(region, subregion)| BoundaryFeature::new(region, subregion, Geometry::Polygon(vec![])))
            .collect()
    }

    #[test]
    fn regions_are_distinct_and_sorted() {
        let boundaries = collection(&[("Maharashtra", "Pune"), ("Goa", "North Goa"), ("Maharashtra", "Nashik")]);
        assert_eq!(boundaries.regions(), vec!["Goa", "Maharashtra"]);
    }

    #[test]
    fn subregions_are_deduplicated_and_sorted() {
        let boundaries = collection(&[
            ("Maharashtra", "Pune"),
            ("Maharashtra", "Nashik"),
            ("Maharashtra", "Pune"),
            ("Goa", "North Goa"),
        ]);
        assert_eq!(boundaries.subregions("Maharashtra"), vec!["Nashik", "Pune"]);
    }

    #[test]
    fn subregions_are_a_subset_of_all_subregions() {
        let boundaries = collection(&[("A", "x"), ("B", "y"), ("A", "z"), ("B", "x")]);
        let all: BTreeSet<&str> = boundaries.iter().map(|f| f.subregion.as_str()).collect();
        for region in boundaries.regions() {
            let subs = boundaries.subregions(region);
            assert!(subs.iter().all(|s| all.contains(s)));
            assert!(subs.iter().all(|s| boundaries.in_region(region).iter().any(|f| f.subregion == *s)));
        }
        assert_eq!(boundaries.subregions("A"), vec!["x", "z"]);
    }

    #[test]
    fn region_match_is_exact() {
        let boundaries = collection(&[("Goa", "North Goa")]);
        assert!(boundaries.subregions("goa").is_empty());
        assert!(!boundaries.has_region("goa"));
        assert!(boundaries.has_region("Goa"));
    }

    #[test]
    fn in_region_keeps_file_order() {
        let boundaries = collection(&[("A", "z"), ("B", "y"), ("A", "x")]);
        let names: Vec<&str> = boundaries.in_region("A").iter().map(|f| f.subregion.as_str()).collect();
        assert_eq!(names, vec!["z", "x"]);
    }

    #[test]
    fn missing_subregion_defaults_to_first_option() {
        let selection = Selection::new("Maharashtra");
        assert_eq!(selection.resolve_subregion(&["Nashik", "Pune"]), Some("Nashik".to_string()));
        assert_eq!(selection.resolve_subregion(&[]), None);

        let explicit = Selection::new("Maharashtra").with_subregion("Thane");
        assert_eq!(explicit.resolve_subregion(&["Nashik", "Pune"]), Some("Thane".to_string()));
    }
}
