//! Region difference
//!
//! Single streaming pass over both regions. Columns covered by the
//! subtrahend are removed from the minuend, including columns on a shared
//! boundary; lines of the subtrahend outside the minuend are ignored.

use log::debug;

use crate::region::{Interval, RasterScanCursor, Region, RegionBuilder, RegionResult, ScanSpan};

/// Compute `a \ b`
pub fn difference(a: &Region, b: &Region) -> RegionResult<Region> {
    if a.is_empty() {
        return Ok(Region::Empty);
    }
    if b.is_empty() {
        return Ok(a.clone());
    }

    let minuend = RasterScanCursor::new(a)?;
    let mut subtrahend = RasterScanCursor::new(b)?;
    let mut out = RegionBuilder::coalescing();
    let mut line_spans: Vec<Interval> = Vec::new();

    let mut cut: Option<ScanSpan> = subtrahend.next();

    for span in minuend {
        // skip cuts that end before this span or sit on earlier lines
        while let Some(c) = cut {
            if c.line < span.line || (c.line == span.line && c.right < span.left) {
                cut = subtrahend.next();
            } else {
                break;
            }
        }

        match cut {
            Some(c) if c.line == span.line && c.left <= span.right => {
                if c.left > span.left {
                    line_spans.push(Interval::new(span.left, c.left - 1));
                }
                let mut current = c;
                while current.right < span.right {
                    let left = current.right + 1;
                    cut = subtrahend.next();
                    match cut {
                        Some(next) if next.line == span.line && next.left <= span.right => {
                            line_spans.push(Interval::new(left, next.left - 1));
                            current = next;
                        }
                        _ => {
                            line_spans.push(Interval::new(left, span.right));
                            break;
                        }
                    }
                }
            }
            _ => line_spans.push(Interval::new(span.left, span.right)),
        }

        if span.remaining == 0 {
            out.push_row(span.line, &line_spans)?;
            line_spans.clear();
        }
    }

    debug!("Difference kept {} spans", out.span_count());
    out.finish()
}
