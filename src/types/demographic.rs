use ahash::AHashMap;
use serde::Serialize;

/// Population counts for one sub-region, as read from the census table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DemographicRow {
    pub region: String,
    pub subregion: String,
    pub male: u64,
    pub female: u64,
}

impl DemographicRow {
    pub fn new(region: impl Into<String>, subregion: impl Into<String>, male: u64, female: u64) -> Self {
        Self { region: region.into(), subregion: subregion.into(), male, female }
    }
}

/// Census rows plus a lookup index on the folded (region, subregion) pair.
#[derive(Debug, Clone, Default)]
pub struct DemographicTable {
    rows: Vec<DemographicRow>,
    index: AHashMap<(String, String), usize>,
}

impl DemographicTable {
    /// Build the table; on duplicate keys the first row wins.
    pub fn new(rows: Vec<DemographicRow>) -> Self {
        let mut index = AHashMap::with_capacity(rows.len());
        for (i, row) in rows.iter().enumerate() {
            index.entry(join_key(&row.region, &row.subregion)).or_insert(i);
        }
        Self { rows, index }
    }

    #[inline] pub fn len(&self) -> usize { self.rows.len() }

    #[inline] pub fn is_empty(&self) -> bool { self.rows.is_empty() }

    #[inline] pub fn rows(&self) -> &[DemographicRow] { &self.rows }

    /// Find the row for a sub-region, ignoring case and surrounding whitespace.
    pub fn lookup(&self, region: &str, subregion: &str) -> Option<&DemographicRow> {
        self.index.get(&join_key(region, subregion)).map(|&i| &self.rows[i])
    }
}

impl FromIterator<DemographicRow> for DemographicTable {
    fn from_iter<I: IntoIterator<Item = DemographicRow>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Normalized join key shared by every demographic lookup.
fn join_key(region: &str, subregion: &str) -> (String, String) {
    (region.trim().to_lowercase(), subregion.trim().to_lowercase())
}
