pub mod boundary;
pub mod color;
pub mod region;
mod region_table;

pub use boundary::{BoundaryDataset, MapKey};
pub use color::Color;
pub use region::{RegionCode, RegionNameIndex};
