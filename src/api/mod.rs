mod catalog;
mod controller;
mod manifest;

pub use catalog::{DrilldownCatalog, FeatureClass, ScopeEntry};
pub use controller::{Lifecycle, MapViewController, Transition, ViewState};
pub use manifest::{CatalogManifest, NationalManifest, ProvinceManifest};
