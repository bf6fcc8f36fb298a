#![doc = "districtmap public API"]
mod common;
mod config;
mod dashboard;
mod geom;
mod io;
mod types;

#[doc(inline)]
pub use config::{BoundarySchema, DashboardConfig, DashboardStyles, DemographicSchema, MapStyle};

#[doc(inline)]
pub use dashboard::{region_table, subregion_row, ChoroplethMap, Dashboard, DashboardView, OutputFormat, PopulationRow, Selection};

#[doc(inline)]
pub use geom::estimate_center;

#[doc(inline)]
pub use io::{csv::{read_demographics, read_demographics_str}, geojson::{read_boundaries, read_boundaries_str}};

#[doc(inline)]
pub use types::{BoundaryCollection, BoundaryFeature, Center, DemographicRow, DemographicTable, Geometry, Position, Ring};
