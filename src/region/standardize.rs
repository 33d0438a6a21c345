//! Bounding box standardization
//!
//! Shrinks a general region's box to the tightest box holding at least one
//! span and drops empty rows at either end. Standardizing twice gives the
//! same result as standardizing once.

use log::debug;

use crate::region::domain::Region;
use crate::region::span::Span;
use crate::region::verify::tight_bounds;

/// Standardize a region in place, returning whether anything changed
///
/// A general region without spans becomes `Region::Empty`.
pub fn standardize(region: &mut Region) -> bool {
    let domain = match region {
        Region::Empty | Region::Rectangle(_) => return false,
        Region::General(domain) => domain,
    };

    let tight = match tight_bounds(domain) {
        Some(tight) => tight,
        None => {
            debug!("Standardize: no spans left, region is empty");
            *region = Region::Empty;
            return true;
        }
    };

    let old = domain.bounds();
    let stored_rows = domain.rows().len();
    let last = (tight.line_last as i64 - old.line_first as i64) as usize;
    if tight == old && stored_rows <= last + 1 {
        return false;
    }

    let first = (tight.line_first as i64 - old.line_first as i64) as usize;
    let shift = tight.col_first - old.col_first;
    let rows = domain.rows_mut();
    rows.truncate(last + 1);
    rows.drain(..first);

    if shift != 0 {
        for row in rows.iter_mut() {
            for span in row.spans_mut().iter_mut() {
                *span = Span::raw(span.start() - shift, span.end() - shift);
            }
        }
    }
    *domain.bounds_mut() = tight;

    debug!("Standardized bounds from {} to {}", old, tight);
    true
}

/// Standardized copy of a region
pub fn standardized(region: &Region) -> Region {
    let mut copy = region.clone();
    standardize(&mut copy);
    copy
}
