//! Region union
//!
//! Lines present in both regions are merged and any spans that end up
//! touching are joined, so every output row keeps a gap of at least one
//! column between spans.

use log::debug;

use crate::algebra::span_ops::merge_spans;
use crate::region::{PairedScan, Region, RegionBuilder, RegionResult};

/// Compute `a ∪ b`
pub fn union(a: &Region, b: &Region) -> RegionResult<Region> {
    if a.is_empty() {
        return Ok(b.clone());
    }
    if b.is_empty() {
        return Ok(a.clone());
    }

    let mut scan = PairedScan::new(a, b);
    let mut out = RegionBuilder::coalescing();
    let mut merged = Vec::new();

    while let Some(pair) = scan.next_pair() {
        merge_spans(pair.first, pair.second, &mut merged);
        out.push_row(pair.line, &merged)?;
    }

    debug!("Union produced {} spans", out.span_count());
    out.finish()
}

/// Union of any number of regions
pub fn union_all(regions: &[Region]) -> RegionResult<Region> {
    let mut acc = Region::Empty;
    for region in regions {
        acc = union(&acc, region)?;
    }
    Ok(acc)
}
