mod dashboard;
mod join;
mod selection;
mod view;

pub use dashboard::Dashboard;
pub use join::{region_table, subregion_row, PopulationRow};
pub use selection::Selection;
pub use view::{ChoroplethMap, DashboardView, OutputFormat};
