//! IO module for format-specific reading and writing operations.
//!
//! - `geojson` - boundary features in, filtered map layers out
//! - `csv` - census table in
//! - `svg` - choropleth panel export

pub(crate) mod csv;
pub(crate) mod geojson;
pub(crate) mod svg;
