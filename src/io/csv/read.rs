//! CSV reading operations.

use std::{fs::File, io::Cursor, path::Path};

use anyhow::{anyhow, Context, Result};
use polars::{frame::DataFrame, io::SerReader, prelude::{Column, CsvReader, DataType}};
use tracing::info;

use crate::{common, config::DemographicSchema, types::{DemographicRow, DemographicTable}};

/// Reads the census CSV at `path` into a demographic table.
pub fn read_demographics(path: &Path, schema: &DemographicSchema) -> Result<DemographicTable> {
    common::require_file_exists(path)?;
    let file = File::open(path)
        .with_context(|| format!("[io::csv::read] Failed to open CSV file: {}", path.display()))?;
    let df = CsvReader::new(file)
        .finish()
        .with_context(|| format!("[io::csv::read] Failed to read CSV from {:?}", path))?;
    let table = demographics_from_frame(df, schema)
        .with_context(|| format!("[io::csv::read] Invalid census table in {}", path.display()))?;
    info!("[io::csv] loaded {} demographic rows from {}", table.len(), path.display());
    Ok(table)
}

/// Reads census CSV text into a demographic table.
pub fn read_demographics_str(csv: &str, schema: &DemographicSchema) -> Result<DemographicTable> {
    let df = CsvReader::new(Cursor::new(csv.as_bytes()))
        .finish()
        .context("[io::csv::read] Failed to read CSV from string")?;
    demographics_from_frame(df, schema)
}

/// Trim whitespace around every column name.
fn trim_column_names(df: &mut DataFrame) -> Result<()> {
    let names: Vec<String> = df.get_column_names().iter()
        .map(|name| name.trim().to_string())
        .collect();
    df.set_column_names(names)
        .context("[io::csv::read] Failed to rename columns")?;
    Ok(())
}

/// Extract typed rows from the schema columns of a raw census frame.
fn demographics_from_frame(mut df: DataFrame, schema: &DemographicSchema) -> Result<DemographicTable> {
    trim_column_names(&mut df)?;

    let column = |name: &str, dtype: &DataType| -> Result<Column> {
        df.column(name)
            .with_context(|| format!("[io::csv::read] Missing column {name:?}"))?
            .cast(dtype)
            .with_context(|| format!("[io::csv::read] Column {name:?} cannot be read as {dtype}"))
    };

    let regions = column(&schema.region_column, &DataType::String)?;
    let subregions = column(&schema.subregion_column, &DataType::String)?;
    let males = column(&schema.male_column, &DataType::UInt64)?;
    let females = column(&schema.female_column, &DataType::UInt64)?;

    regions.str()?.into_iter()
        .zip(subregions.str()?.into_iter())
        .zip(males.u64()?.into_iter().zip(females.u64()?.into_iter()))
        .enumerate()
        .map(|(i, ((region, subregion), (male, female)))| {
            let missing = |column: &str| anyhow!("[io::csv::read] Row {}: missing or invalid {column:?}", i + 1);
            Ok(DemographicRow {
                region: region.ok_or_else(|| missing(&schema.region_column))?.to_string(),
                subregion: subregion.ok_or_else(|| missing(&schema.subregion_column))?.to_string(),
                male: male.ok_or_else(|| missing(&schema.male_column))?,
                female: female.ok_or_else(|| missing(&schema.female_column))?,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const CENSUS: &str = "\
State name , District name,Male ,Female
Maharashtra,Pune,4924105,4505303
Maharashtra,Nashik,3157186,2950001
Goa,North Goa,416677,401331
";

    #[test]
    fn reads_rows_with_padded_headers() {
        let table = read_demographics_str(CENSUS, &DemographicSchema::default()).unwrap();
        assert_eq!(table.len(), 3);
        assert_eq!(table.rows()[0], DemographicRow::new("Maharashtra", "Pune", 4924105, 4505303));
        assert_eq!(table.lookup("goa", "north goa").unwrap().female, 401331);
    }

    #[test]
    fn missing_column_is_fatal() {
        let err = read_demographics_str("State name,District name,Male\nA,B,1\n", &DemographicSchema::default())
            .unwrap_err();
        assert!(format!("{err:#}").contains("Female"));
    }

    #[test]
    fn missing_count_is_fatal() {
        let csv = "State name,District name,Male,Female\nA,B,1,2\nA,C,,4\n";
        let err = read_demographics_str(csv, &DemographicSchema::default()).unwrap_err();
        assert!(format!("{err:#}").contains("Row 2"));
    }

    #[test]
    fn custom_column_names() {
        let schema = DemographicSchema {
            region_column: "state".into(),
            subregion_column: "district".into(),
            male_column: "m".into(),
            female_column: "f".into(),
        };
        let table = read_demographics_str("state,district,m,f\nKerala,Idukki,10,11\n", &schema).unwrap();
        assert_eq!(table.lookup("Kerala", "Idukki").unwrap().male, 10);
    }

    #[test]
    fn reads_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("census.csv");
        std::fs::write(&path, CENSUS).unwrap();
        let table = read_demographics(&path, &DemographicSchema::default()).unwrap();
        assert_eq!(table.len(), 3);
        assert!(read_demographics(&dir.path().join("missing.csv"), &DemographicSchema::default()).is_err());
    }
}
