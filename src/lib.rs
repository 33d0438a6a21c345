pub mod region;
pub mod algebra;
pub mod io;
pub mod config;
pub mod utils;
pub mod commands;
pub mod api;

pub use crate::api::RegionKit;

pub use region::{BoundingBox, PlaneStack, RasterScanCursor, Region, RegionBuilder, RegionError, RegionResult};
pub use algebra::{Connectivity, SetOperation};
pub use config::EngineConfig;
