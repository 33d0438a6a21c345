//! Raster scan over region spans
//!
//! The cursor walks a region top to bottom and left to right, producing one
//! span at a time in absolute coordinates. Each span carries the number of
//! spans still to come on its line so consumers can flush per-line state
//! when it reaches zero.

use crate::region::bounds::BoundingBox;
use crate::region::domain::{IntervalDomain, Region};
use crate::region::errors::{RegionError, RegionResult};

/// A span produced by a raster scan, in absolute columns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanSpan {
    pub line: i32,
    pub left: i32,
    pub right: i32,
    /// Spans left on this line after this one
    pub remaining: usize,
}

/// Result of advancing a cursor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scan {
    Span(ScanSpan),
    /// The scan is exhausted; not an error
    EndOfObject,
}

/// Closed absolute column range used by the per-line merges
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interval {
    pub left: i32,
    pub right: i32,
}

impl Interval {
    pub fn new(left: i32, right: i32) -> Self {
        Interval { left, right }
    }

    pub fn width(&self) -> i32 {
        self.right - self.left + 1
    }
}

#[derive(Clone, Copy)]
enum ScanSource<'a> {
    Rectangle(BoundingBox),
    General(&'a IntervalDomain),
}

/// Single-threaded raster order iterator over one region
pub struct RasterScanCursor<'a> {
    source: ScanSource<'a>,
    /// Index of the row the last span came from
    row: usize,
    /// Index of the next row to visit
    next_row: usize,
    span: usize,
    remaining: usize,
    finished: bool,
}

impl<'a> RasterScanCursor<'a> {
    /// Start a scan; empty regions cannot be scanned
    pub fn new(region: &'a Region) -> RegionResult<Self> {
        let source = match region {
            Region::Empty => return Err(RegionError::EmptyRegion),
            Region::Rectangle(bounds) => ScanSource::Rectangle(*bounds),
            Region::General(domain) => ScanSource::General(domain),
        };
        Ok(RasterScanCursor {
            source,
            row: 0,
            next_row: 0,
            span: 0,
            remaining: 0,
            finished: false,
        })
    }

    /// Produce the next span in raster order
    ///
    /// Once `EndOfObject` has been returned every further call returns it
    /// again.
    pub fn advance(&mut self) -> Scan {
        if self.finished {
            return Scan::EndOfObject;
        }
        let scan = match self.source {
            ScanSource::Rectangle(bounds) => {
                if self.next_row as i64 >= bounds.height() {
                    Scan::EndOfObject
                } else {
                    let line = bounds.line_first + self.next_row as i32;
                    self.next_row += 1;
                    Scan::Span(ScanSpan {
                        line,
                        left: bounds.col_first,
                        right: bounds.col_last,
                        remaining: 0,
                    })
                }
            }
            ScanSource::General(domain) => Self::advance_general(
                domain,
                &mut self.row,
                &mut self.next_row,
                &mut self.span,
                &mut self.remaining,
            ),
        };
        if scan == Scan::EndOfObject {
            self.finished = true;
        }
        scan
    }

    fn advance_general(
        domain: &IntervalDomain,
        row: &mut usize,
        next_row: &mut usize,
        span: &mut usize,
        remaining: &mut usize,
    ) -> Scan {
        let bounds = domain.bounds();
        let rows = domain.rows();

        if *remaining > 0 {
            *span += 1;
            *remaining -= 1;
        } else {
            let line_count = bounds.height().max(0) as usize;
            loop {
                if *next_row >= rows.len() || *next_row >= line_count {
                    return Scan::EndOfObject;
                }
                let candidate = *next_row;
                *next_row += 1;
                let len = rows[candidate].spans().len();
                if len > 0 {
                    *row = candidate;
                    *span = 0;
                    *remaining = len - 1;
                    break;
                }
            }
        }

        let s = rows[*row].spans()[*span];
        Scan::Span(ScanSpan {
            line: bounds.line_first + *row as i32,
            left: bounds.col_first + s.start(),
            right: bounds.col_first + s.end(),
            remaining: *remaining,
        })
    }

    /// Read every span of the next non-empty line into `buf`
    ///
    /// Returns the line number, or `None` once the scan is exhausted.
    pub fn next_line(&mut self, buf: &mut Vec<Interval>) -> Option<i32> {
        buf.clear();
        loop {
            match self.advance() {
                Scan::Span(s) => {
                    buf.push(Interval::new(s.left, s.right));
                    if s.remaining == 0 {
                        return Some(s.line);
                    }
                }
                Scan::EndOfObject => return None,
            }
        }
    }
}

impl<'a> Iterator for RasterScanCursor<'a> {
    type Item = ScanSpan;

    fn next(&mut self) -> Option<ScanSpan> {
        match self.advance() {
            Scan::Span(span) => Some(span),
            Scan::EndOfObject => None,
        }
    }
}

const NO_SPANS: &[Interval] = &[];

/// One line of a lock-step scan over two regions
///
/// A side without spans on the line gets an empty slice.
pub struct PairedLine<'s> {
    pub line: i32,
    pub first: &'s [Interval],
    pub second: &'s [Interval],
}

struct LineSide<'a> {
    cursor: Option<RasterScanCursor<'a>>,
    buf: Vec<Interval>,
    line: Option<i32>,
    consumed: bool,
}

impl<'a> LineSide<'a> {
    fn new(region: &'a Region) -> Self {
        LineSide {
            cursor: RasterScanCursor::new(region).ok(),
            buf: Vec::new(),
            line: None,
            consumed: true,
        }
    }

    fn refill(&mut self) {
        if self.consumed {
            self.line = match self.cursor.as_mut() {
                Some(cursor) => cursor.next_line(&mut self.buf),
                None => None,
            };
            self.consumed = false;
        }
    }
}

/// Walks two regions line by line in step, for the binary set operations
pub struct PairedScan<'a> {
    first: LineSide<'a>,
    second: LineSide<'a>,
}

impl<'a> PairedScan<'a> {
    /// Pair two regions; either may be empty
    pub fn new(first: &'a Region, second: &'a Region) -> Self {
        PairedScan {
            first: LineSide::new(first),
            second: LineSide::new(second),
        }
    }

    /// Next line present in either region, in ascending line order
    pub fn next_pair(&mut self) -> Option<PairedLine<'_>> {
        self.first.refill();
        self.second.refill();

        let (take_first, take_second, line) = match (self.first.line, self.second.line) {
            (None, None) => return None,
            (Some(a), None) => (true, false, a),
            (None, Some(b)) => (false, true, b),
            (Some(a), Some(b)) if a == b => (true, true, a),
            (Some(a), Some(b)) if a < b => (true, false, a),
            (Some(_), Some(b)) => (false, true, b),
        };
        self.first.consumed = take_first;
        self.second.consumed = take_second;

        Some(PairedLine {
            line,
            first: if take_first { self.first.buf.as_slice() } else { NO_SPANS },
            second: if take_second { self.second.buf.as_slice() } else { NO_SPANS },
        })
    }
}
