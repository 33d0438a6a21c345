//! Run-length region data model
//!
//! This module provides the region representation (empty, rectangle or
//! rows of spans), its construction from raster-ordered spans, raster
//! scanning, structural verification and repair, standardization, and the
//! plane-stack extension for 3D regions.

pub mod errors;
pub mod bounds;
pub mod span;
pub mod domain;
pub mod cursor;
pub mod builder;
pub mod verify;
pub mod standardize;
pub mod plane_stack;
#[cfg(test)]
mod tests;

pub use bounds::BoundingBox;
pub use builder::{BuildMode, RegionBuilder};
pub use cursor::{Interval, PairedLine, PairedScan, RasterScanCursor, Scan, ScanSpan};
pub use domain::{IntervalDomain, Region};
pub use errors::{RegionError, RegionResult};
pub use plane_stack::PlaneStack;
pub use span::{Row, Span};
pub use standardize::{standardize, standardized};
pub use verify::{check, repair, verify, Violation};
