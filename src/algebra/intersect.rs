//! Region intersection

use log::debug;

use crate::algebra::span_ops::intersect_spans;
use crate::region::{PairedScan, Region, RegionBuilder, RegionResult};

/// Compute `a ∩ b`
pub fn intersection(a: &Region, b: &Region) -> RegionResult<Region> {
    match (a, b) {
        (Region::Empty, _) | (_, Region::Empty) => return Ok(Region::Empty),
        (Region::Rectangle(x), Region::Rectangle(y)) => {
            return Ok(x.intersection(y).map_or(Region::Empty, Region::Rectangle));
        }
        _ => {}
    }

    let mut scan = PairedScan::new(a, b);
    let mut out = RegionBuilder::coalescing();
    let mut common = Vec::new();

    while let Some(pair) = scan.next_pair() {
        if pair.first.is_empty() || pair.second.is_empty() {
            continue;
        }
        intersect_spans(pair.first, pair.second, &mut common);
        out.push_row(pair.line, &common)?;
    }

    debug!("Intersection produced {} spans", out.span_count());
    out.finish()
}

/// Intersection of any number of regions; empty input gives `Empty`
pub fn intersect_all(regions: &[Region]) -> RegionResult<Region> {
    let (first, rest) = match regions.split_first() {
        Some(split) => split,
        None => return Ok(Region::Empty),
    };
    let mut acc = first.clone();
    for region in rest {
        if acc.is_empty() {
            break;
        }
        acc = intersection(&acc, region)?;
    }
    Ok(acc)
}
