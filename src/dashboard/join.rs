use ahash::AHashSet;
use serde::Serialize;
use tracing::debug;

use crate::types::{BoundaryFeature, DemographicTable};

/// Attribute row for one map area; counts are `None` when the census has no match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PopulationRow {
    pub subregion: String,
    pub male: Option<u64>,
    pub female: Option<u64>,
}

impl PopulationRow {
    /// Tooltip text: the sub-region name followed by both counts.
    pub fn hover_text(&self) -> String {
        fn count(value: Option<u64>) -> String {
            value.map_or_else(|| "N/A".to_string(), |v| v.to_string())
        }
        format!("{}\nMale Population: {}\nFemale Population: {}", self.subregion, count(self.male), count(self.female))
    }
}

/// Look up the census counts for one sub-region.
pub fn subregion_row(region: &str, subregion: &str, demographics: &DemographicTable) -> PopulationRow {
    let row = demographics.lookup(region, subregion);
    if row.is_none() {
        debug!("[dashboard::join] no census row for {region}/{subregion}");
    }
    PopulationRow {
        subregion: subregion.to_string(),
        male: row.map(|r| r.male),
        female: row.map(|r| r.female),
    }
}

/// One row per distinct sub-region of `features`, in first-seen order.
pub fn region_table(features: &[&BoundaryFeature], demographics: &DemographicTable) -> Vec<PopulationRow> {
    let mut seen = AHashSet::new();
    features.iter()
        .filter(|&&feature| seen.insert(feature.subregion.as_str()))
        .map(|feature| subregion_row(&feature.region, &feature.subregion, demographics))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{DemographicRow, Geometry};

    fn demographics() -> DemographicTable {
        DemographicTable::new(vec![
            DemographicRow::new("Maharashtra", "Pune", 100, 90),
            DemographicRow::new("Maharashtra", "Nashik", 50, 45),
            DemographicRow::new("Bihar", "Aurangabad", 7, 8),
        ])
    }

    fn feature(region: &str, subregion: &str) -> BoundaryFeature {
        BoundaryFeature::new(region, subregion, Geometry::Polygon(vec![]))
    }

    #[test]
    fn region_table_has_one_row_per_subregion() {
        let features = [
            feature("Maharashtra", "Pune"),
            feature("Maharashtra", "Nashik"),
            feature("Maharashtra", "Pune"),
        ];
        let refs: Vec<&BoundaryFeature> = features.iter().collect();
        let table = region_table(&refs, &demographics());

        assert_eq!(table.len(), 2);
        assert_eq!(table[0], PopulationRow { subregion: "Pune".into(), male: Some(100), female: Some(90) });
        assert_eq!(table[1].subregion, "Nashik");
    }

    #[test]
    fn unmatched_rows_have_no_counts() {
        let features = [feature("Maharashtra", "Thane"), feature("Maharashtra", "Aurangabad")];
        let refs: Vec<&BoundaryFeature> = features.iter().collect();
        let table = region_table(&refs, &demographics());

        assert!(table.iter().all(|row| row.male.is_none() && row.female.is_none()));
    }

    #[test]
    fn subregion_lookup_ignores_case() {
        let row = subregion_row("maharashtra", "PUNE", &demographics());
        assert_eq!(row.subregion, "PUNE");
        assert_eq!((row.male, row.female), (Some(100), Some(90)));
    }

    #[test]
    fn unmatched_subregion_has_null_counts() {
        let row = subregion_row("Goa", "North Goa", &demographics());
        assert_eq!(row, PopulationRow { subregion: "North Goa".into(), male: None, female: None });
        assert_eq!(row.hover_text(), "North Goa\nMale Population: N/A\nFemale Population: N/A");
    }

    #[test]
    fn hover_text_lists_counts() {
        let row = subregion_row("Maharashtra", "Nashik", &demographics());
        assert_eq!(row.hover_text(), "Nashik\nMale Population: 50\nFemale Population: 45");
    }
}
