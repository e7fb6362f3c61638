//! china-map: drill-down choropleth map of China.
//!
//! The crate owns the view-state machine (national view vs. one province),
//! the region name index and the per-scope view configurations. Drawing is
//! delegated to a charting engine behind the [`surface::ChartSurface`] trait.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod surface;
pub mod telemetry;
pub mod view;

pub use api::{DrilldownCatalog, MapViewController, ViewState};
pub use error::{MapError, MapResult};
