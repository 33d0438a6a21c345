//! Set algebra and morphology on run-length regions
//!
//! Every operation here streams over raster scans of its inputs and builds
//! a new region, leaving the inputs untouched. Given structurally valid
//! inputs the only possible failure is running out of memory.

pub mod span_ops;
pub mod difference;
pub mod intersect;
pub mod union;
pub mod morphology;
#[cfg(test)]
mod tests;

pub use difference::difference;
pub use intersect::{intersect_all, intersection};
pub use morphology::{contract, dilate};
pub use union::{union, union_all};

use crate::region::{Region, RegionError, RegionResult};

/// Neighbourhood used by contraction and dilation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Connectivity {
    /// Edge neighbours only
    #[default]
    Four,
    /// Edge and corner neighbours
    Eight,
}

impl Connectivity {
    /// Parse "4" or "8"
    pub fn from_code(code: i64) -> RegionResult<Self> {
        match code {
            4 => Ok(Connectivity::Four),
            8 => Ok(Connectivity::Eight),
            other => Err(RegionError::GenericError(format!("Unsupported connectivity: {}", other))),
        }
    }

    pub fn code(&self) -> i64 {
        match self {
            Connectivity::Four => 4,
            Connectivity::Eight => 8,
        }
    }
}

/// Binary set operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetOperation {
    Union,
    Intersection,
    Difference,
}

impl SetOperation {
    /// Look an operation up by name
    pub fn from_name(name: &str) -> RegionResult<Self> {
        match name.to_lowercase().as_str() {
            "union" | "or" => Ok(SetOperation::Union),
            "intersect" | "intersection" | "and" => Ok(SetOperation::Intersection),
            "diff" | "difference" | "subtract" => Ok(SetOperation::Difference),
            other => Err(RegionError::GenericError(format!("Unknown set operation: {}", other))),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            SetOperation::Union => "union",
            SetOperation::Intersection => "intersection",
            SetOperation::Difference => "difference",
        }
    }

    /// Apply the operation to two regions
    pub fn apply(&self, a: &Region, b: &Region) -> RegionResult<Region> {
        match self {
            SetOperation::Union => union(a, b),
            SetOperation::Intersection => intersection(a, b),
            SetOperation::Difference => difference(a, b),
        }
    }
}

impl Region {
    /// Pixels in either region
    pub fn union(&self, other: &Region) -> RegionResult<Region> {
        union(self, other)
    }

    /// Pixels in both regions
    pub fn intersection(&self, other: &Region) -> RegionResult<Region> {
        intersection(self, other)
    }

    /// Pixels of this region not covered by `other`
    pub fn difference(&self, other: &Region) -> RegionResult<Region> {
        difference(self, other)
    }

    /// One-unit erosion
    pub fn contract(&self, connectivity: Connectivity) -> RegionResult<Region> {
        contract(self, connectivity)
    }

    /// One-unit dilation
    pub fn dilate(&self, connectivity: Connectivity) -> RegionResult<Region> {
        dilate(self, connectivity)
    }
}
