//! Plane stacks: 3D regions as an ordered run of 2D regions
//!
//! Plane `p` is stored at `planes[p - plane_first]`. Each plane is an
//! independent [`Region`]; a standardized stack neither starts nor ends with
//! an empty plane.

use log::debug;

use crate::algebra::Connectivity;
use crate::region::bounds::BoundingBox;
use crate::region::domain::Region;
use crate::region::errors::RegionResult;
use crate::region::verify::{self, Violation};

/// Ordered sequence of per-plane regions
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PlaneStack {
    plane_first: i32,
    planes: Vec<Region>,
}

static EMPTY_PLANE: Region = Region::Empty;

impl PlaneStack {
    /// Stack whose first entry is plane `plane_first`
    pub fn new(plane_first: i32, planes: Vec<Region>) -> Self {
        PlaneStack { plane_first, planes }
    }

    /// Stack without planes
    pub fn empty() -> Self {
        PlaneStack::default()
    }

    pub fn plane_first(&self) -> i32 {
        self.plane_first
    }

    /// Last plane index, `None` when no planes are stored
    pub fn plane_last(&self) -> Option<i32> {
        if self.planes.is_empty() {
            None
        } else {
            Some(self.plane_first.saturating_add(self.planes.len() as i32 - 1))
        }
    }

    pub fn planes(&self) -> &[Region] {
        &self.planes
    }

    /// Region of a plane; planes outside the stack are empty
    pub fn plane(&self, plane: i32) -> &Region {
        if plane < self.plane_first {
            return &EMPTY_PLANE;
        }
        self.planes.get((plane as i64 - self.plane_first as i64) as usize).unwrap_or(&EMPTY_PLANE)
    }

    /// Region of the plane `offset` away from `plane`; empty past the `i32` range
    fn neighbour(&self, plane: i32, offset: i32) -> &Region {
        plane.checked_add(offset).map_or(&EMPTY_PLANE, |p| self.plane(p))
    }

    /// True when every plane is empty
    pub fn is_empty(&self) -> bool {
        self.planes.iter().all(Region::is_empty)
    }

    /// Number of voxels covered
    pub fn volume(&self) -> i64 {
        self.planes.iter().map(Region::area).sum()
    }

    /// Union of the per-plane bounding boxes
    pub fn bounding_box(&self) -> Option<BoundingBox> {
        self.planes.iter()
            .filter_map(Region::bounding_box)
            .reduce(|acc, b| acc.union(&b))
    }

    /// Standardize every plane and drop empty planes at either end
    pub fn standardize(&mut self) -> bool {
        let mut changed = false;
        for plane in self.planes.iter_mut() {
            changed |= crate::region::standardize::standardize(plane);
        }

        let first = self.planes.iter().position(|p| !p.is_empty());
        let last = self.planes.iter().rposition(|p| !p.is_empty());
        match (first, last) {
            (Some(first), Some(last)) => {
                if first > 0 || last + 1 < self.planes.len() {
                    self.planes.truncate(last + 1);
                    self.planes.drain(..first);
                    self.plane_first += first as i32;
                    changed = true;
                }
            }
            _ => {
                if !self.planes.is_empty() {
                    self.planes.clear();
                    changed = true;
                }
                self.plane_first = 0;
            }
        }
        if changed {
            debug!("Standardized plane stack to {} planes from {}", self.planes.len(), self.plane_first);
        }
        changed
    }

    /// Report the first violation in any plane or in the plane range
    pub fn check(&self) -> Result<(), Violation> {
        for (i, plane) in self.planes.iter().enumerate() {
            verify::check(plane).map_err(|v| Violation::InPlane {
                plane: self.plane_first.saturating_add(i as i32),
                violation: Box::new(v),
            })?;
        }
        let loose_start = self.planes.first().map_or(false, Region::is_empty);
        let loose_end = self.planes.last().map_or(false, Region::is_empty);
        if loose_start || loose_end {
            return Err(Violation::LoosePlaneRange {
                plane_first: self.plane_first,
                plane_last: self.plane_last().unwrap_or(self.plane_first),
            });
        }
        Ok(())
    }

    pub fn verify(&self) -> RegionResult<()> {
        self.check().map_err(Into::into)
    }

    /// Combined plane range of two stacks
    fn joint_range(&self, other: &PlaneStack) -> Option<(i32, i32)> {
        match (self.plane_last(), other.plane_last()) {
            (None, None) => None,
            (Some(last), None) => Some((self.plane_first, last)),
            (None, Some(last)) => Some((other.plane_first, last)),
            (Some(a), Some(b)) => Some((self.plane_first.min(other.plane_first), a.max(b))),
        }
    }

    fn combine<F>(&self, other: &PlaneStack, op: F) -> RegionResult<PlaneStack>
    where
        F: Fn(&Region, &Region) -> RegionResult<Region>,
    {
        let (first, last) = match self.joint_range(other) {
            Some(range) => range,
            None => return Ok(PlaneStack::empty()),
        };
        let mut planes = Vec::new();
        planes.try_reserve((last as i64 - first as i64 + 1) as usize)?;
        for p in first..=last {
            planes.push(op(self.plane(p), other.plane(p))?);
        }
        let mut stack = PlaneStack::new(first, planes);
        stack.standardize();
        Ok(stack)
    }

    /// Plane-by-plane union
    pub fn union(&self, other: &PlaneStack) -> RegionResult<PlaneStack> {
        self.combine(other, |a, b| a.union(b))
    }

    /// Plane-by-plane intersection
    pub fn intersection(&self, other: &PlaneStack) -> RegionResult<PlaneStack> {
        self.combine(other, |a, b| a.intersection(b))
    }

    /// Plane-by-plane difference
    pub fn difference(&self, other: &PlaneStack) -> RegionResult<PlaneStack> {
        self.combine(other, |a, b| a.difference(b))
    }

    /// 6-connected erosion: each plane is contracted in 2D and then
    /// intersected with its neighbouring planes
    pub fn contract(&self) -> RegionResult<PlaneStack> {
        let last = match self.plane_last() {
            Some(last) => last,
            None => return Ok(PlaneStack::empty()),
        };
        let mut planes = Vec::new();
        planes.try_reserve(self.planes.len())?;
        for p in self.plane_first..=last {
            let eroded = self.plane(p).contract(Connectivity::Four)?;
            let eroded = eroded.intersection(self.neighbour(p, -1))?;
            planes.push(eroded.intersection(self.neighbour(p, 1))?);
        }
        let mut stack = PlaneStack::new(self.plane_first, planes);
        stack.standardize();
        Ok(stack)
    }

    /// 6-connected dilation: each plane is dilated in 2D and joined with its
    /// neighbouring planes
    ///
    /// Growth stops at the ends of the `i32` plane range.
    pub fn dilate(&self) -> RegionResult<PlaneStack> {
        let last = match self.plane_last() {
            Some(last) => last,
            None => return Ok(PlaneStack::empty()),
        };
        let mut planes = Vec::new();
        planes.try_reserve(self.planes.len() + 2)?;
        let first = self.plane_first.saturating_sub(1);
        for p in first..=last.saturating_add(1) {
            let grown = self.plane(p).dilate(Connectivity::Four)?;
            let grown = grown.union(self.neighbour(p, -1))?;
            planes.push(grown.union(self.neighbour(p, 1))?);
        }
        let mut stack = PlaneStack::new(first, planes);
        stack.standardize();
        Ok(stack)
    }
}
