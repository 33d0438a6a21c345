//! Region data model
//!
//! A region is either empty, a plain rectangle, or a general interval
//! domain holding one row of spans per line of its bounding box.

use crate::region::bounds::BoundingBox;
use crate::region::cursor::{RasterScanCursor, ScanSpan};
use crate::region::span::{Row, Span};

/// Line-by-line span storage of an irregular region
///
/// `rows[i]` holds line `line_first + i`. Rows past the end of the vector
/// and rows without spans are empty lines.
#[derive(Debug, Clone)]
pub struct IntervalDomain {
    bounds: BoundingBox,
    rows: Vec<Row>,
}

impl IntervalDomain {
    /// Assemble a domain from parts without checking any invariant
    ///
    /// Run [`crate::region::verify::verify`] on the result before trusting it.
    pub fn from_raw_parts(bounds: BoundingBox, rows: Vec<Row>) -> Self {
        IntervalDomain { bounds, rows }
    }

    pub fn bounds(&self) -> BoundingBox {
        self.bounds
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Row stored for a line, if the line is inside the domain
    pub fn row(&self, line: i32) -> Option<&Row> {
        if line < self.bounds.line_first || line > self.bounds.line_last {
            return None;
        }
        self.rows.get((line as i64 - self.bounds.line_first as i64) as usize)
    }

    /// Total number of spans over all rows
    pub fn span_count(&self) -> usize {
        self.rows.iter().map(|r| r.spans().len()).sum()
    }

    pub(crate) fn bounds_mut(&mut self) -> &mut BoundingBox {
        &mut self.bounds
    }

    pub(crate) fn rows_mut(&mut self) -> &mut Vec<Row> {
        &mut self.rows
    }
}

/// A 2D raster region in run-length form
#[derive(Debug, Clone)]
pub enum Region {
    /// Covers no pixels
    Empty,
    /// Covers every pixel of the box
    Rectangle(BoundingBox),
    /// Arbitrary region stored as rows of spans
    General(IntervalDomain),
}

impl Region {
    /// The empty region
    pub fn empty() -> Self {
        Region::Empty
    }

    /// A filled rectangle, or `Empty` when the box has an inverted range
    pub fn rectangle(bounds: BoundingBox) -> Self {
        if bounds.is_ordered() {
            Region::Rectangle(bounds)
        } else {
            Region::Empty
        }
    }

    /// Build a region from `(line, left, right)` triples in raster order
    ///
    /// Columns are absolute. Out-of-order, overlapping or touching input is
    /// rejected rather than corrected.
    pub fn from_triples<I>(triples: I) -> crate::region::RegionResult<Self>
    where
        I: IntoIterator<Item = (i32, i32, i32)>,
    {
        let mut builder = crate::region::RegionBuilder::strict();
        for (line, left, right) in triples {
            builder.push(line, left, right)?;
        }
        builder.finish()
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Region::Empty)
    }

    /// Bounding box of the region, `None` when empty
    pub fn bounding_box(&self) -> Option<BoundingBox> {
        match self {
            Region::Empty => None,
            Region::Rectangle(bounds) => Some(*bounds),
            Region::General(domain) => Some(domain.bounds()),
        }
    }

    /// Number of pixels covered
    pub fn area(&self) -> i64 {
        match self {
            Region::Empty => 0,
            Region::Rectangle(b) => b.height().saturating_mul(b.width()),
            Region::General(domain) => domain.rows().iter().map(Row::area).sum(),
        }
    }

    /// Number of spans a raster scan would produce
    pub fn span_count(&self) -> usize {
        match self {
            Region::Empty => 0,
            Region::Rectangle(b) => b.height() as usize,
            Region::General(domain) => domain.span_count(),
        }
    }

    /// Number of lines holding at least one span
    pub fn line_count(&self) -> usize {
        match self {
            Region::Empty => 0,
            Region::Rectangle(b) => b.height() as usize,
            Region::General(domain) => domain.rows().iter().filter(|r| !r.is_empty()).count(),
        }
    }

    /// Check if the pixel at `(line, col)` lies inside the region
    pub fn contains(&self, line: i32, col: i32) -> bool {
        match self {
            Region::Empty => false,
            Region::Rectangle(b) => b.contains(line, col),
            Region::General(domain) => {
                let bounds = domain.bounds();
                if !bounds.contains(line, col) {
                    return false;
                }
                let rel = col - bounds.col_first;
                match domain.row(line) {
                    Some(row) => {
                        let spans = row.spans();
                        let idx = spans.partition_point(|s| s.end() < rel);
                        spans.get(idx).map_or(false, |s| s.start() <= rel)
                    }
                    None => false,
                }
            }
        }
    }

    /// Translate the region by a line and column offset
    ///
    /// `None` when the moved region would leave the `i32` coordinate range.
    pub fn shifted(&self, d_line: i32, d_col: i32) -> Option<Region> {
        match self {
            Region::Empty => Some(Region::Empty),
            Region::Rectangle(b) => b.shifted(d_line, d_col).map(Region::Rectangle),
            Region::General(domain) => {
                let bounds = domain.bounds().shifted(d_line, d_col)?;
                // spans are relative to col_first, so only the box and row lines move
                let rows = domain.rows().iter()
                    .enumerate()
                    .map(|(i, row)| Row::from_spans(bounds.line_first.saturating_add(i as i32), row.spans().to_vec()))
                    .collect();
                Some(Region::General(IntervalDomain::from_raw_parts(bounds, rows)))
            }
        }
    }

    /// Start a raster scan over the region
    pub fn scan(&self) -> crate::region::RegionResult<RasterScanCursor<'_>> {
        RasterScanCursor::new(self)
    }

    /// All spans in raster order as absolute `(line, left, right)` triples
    pub fn to_triples(&self) -> Vec<(i32, i32, i32)> {
        match RasterScanCursor::new(self) {
            Ok(cursor) => cursor.map(|s| (s.line, s.left, s.right)).collect(),
            Err(_) => Vec::new(),
        }
    }

    /// Convert a rectangle into the equivalent general domain
    pub fn to_general(&self) -> Region {
        match self {
            Region::Rectangle(b) => {
                let rows = (b.line_first..=b.line_last)
                    .map(|line| Row::from_spans(line, vec![Span::raw(0, b.col_last - b.col_first)]))
                    .collect();
                Region::General(IntervalDomain::from_raw_parts(*b, rows))
            }
            other => other.clone(),
        }
    }
}

fn scan_key(span: ScanSpan) -> (i32, i32, i32) {
    (span.line, span.left, span.right)
}

/// Regions compare by coverage: a rectangle equals the general region
/// covering the same pixels.
impl PartialEq for Region {
    fn eq(&self, other: &Self) -> bool {
        match (RasterScanCursor::new(self), RasterScanCursor::new(other)) {
            (Ok(a), Ok(b)) => a.map(scan_key).eq(b.map(scan_key)),
            (Err(_), Err(_)) => true,
            _ => false,
        }
    }
}

impl Eq for Region {}

impl Default for Region {
    fn default() -> Self {
        Region::Empty
    }
}
