//! Structural verification and repair
//!
//! [`check`] walks a region and reports the first broken invariant.
//! [`repair`] applies a fixed, deterministic fix for every violation it
//! meets and leaves a region that passes [`check`]. Repair may drop, clip
//! or merge data, it never adds covered pixels.

use std::fmt;

use log::{debug, warn};

use crate::region::bounds::{BoundingBox, MAX_EXTENT};
use crate::region::domain::{IntervalDomain, Region};
use crate::region::errors::RegionResult;
use crate::region::span::{Row, Span};
use crate::region::standardize::standardize;

/// A broken structural invariant
///
/// Span columns are reported as stored, i.e. relative to the region's first
/// column, except where a builder reports absolute input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    /// First line after last line
    LineOrder { line_first: i32, line_last: i32 },
    /// First column after last column
    ColumnOrder { col_first: i32, col_last: i32 },
    /// More lines than a region can index
    LineRangeTooLarge { line_first: i32, line_last: i32 },
    /// More columns than a relative span can address
    ColumnRangeTooLarge { col_first: i32, col_last: i32 },
    /// Row stored at a position belonging to another line
    RowOutOfPlace { line: i32, expected: i32 },
    /// More rows stored than the line range holds
    RowBeyondRange { line: i32, line_last: i32 },
    /// A serialized line declared a negative span count
    SpanCountNegative { line: i32, count: i64 },
    /// Span starts left of the region's first column
    SpanBoundNegative { line: i32, index: usize, start: i32 },
    /// Span ends right of the region's last column
    SpanBeyondBounds { line: i32, index: usize, end: i32, width: i32 },
    /// Span end before span start
    SpanOrderInverted { line: i32, index: usize, start: i32, end: i32 },
    /// Span overlaps, touches or precedes the span to its left
    SpansAdjacentOrOverlapping { line: i32, index: usize, prev_end: i32, next_start: i32 },
    /// Declared bounding box is not the tightest box around the spans
    LooseBounds { declared: BoundingBox, tight: BoundingBox },
    /// General region without a single span
    EmptyGeneral,
    /// A plane of a plane stack is malformed
    InPlane { plane: i32, violation: Box<Violation> },
    /// A plane stack starts or ends with empty planes
    LoosePlaneRange { plane_first: i32, plane_last: i32 },
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::LineOrder { line_first, line_last } =>
                write!(f, "first line {} is after last line {}", line_first, line_last),
            Violation::ColumnOrder { col_first, col_last } =>
                write!(f, "first column {} is after last column {}", col_first, col_last),
            Violation::LineRangeTooLarge { line_first, line_last } =>
                write!(f, "line range {}..={} holds more than {} lines", line_first, line_last, MAX_EXTENT),
            Violation::ColumnRangeTooLarge { col_first, col_last } =>
                write!(f, "column range {}..={} holds more than {} columns", col_first, col_last, MAX_EXTENT),
            Violation::RowOutOfPlace { line, expected } =>
                write!(f, "row for line {} is labelled line {}", expected, line),
            Violation::RowBeyondRange { line, line_last } =>
                write!(f, "line {}: row stored past the last line {}", line, line_last),
            Violation::SpanCountNegative { line, count } =>
                write!(f, "line {}: negative span count {}", line, count),
            Violation::SpanBoundNegative { line, index, start } =>
                write!(f, "line {}: span {} starts at negative offset {}", line, index, start),
            Violation::SpanBeyondBounds { line, index, end, width } =>
                write!(f, "line {}: span {} ends at offset {} outside width {}", line, index, end, width),
            Violation::SpanOrderInverted { line, index, start, end } =>
                write!(f, "line {}: span {} is inverted ({} > {})", line, index, start, end),
            Violation::SpansAdjacentOrOverlapping { line, index, prev_end, next_start } =>
                write!(f, "line {}: span {} starting at {} touches or overlaps the previous span ending at {}",
                       line, index, next_start, prev_end),
            Violation::LooseBounds { declared, tight } =>
                write!(f, "declared bounds {} are not the tight bounds {}", declared, tight),
            Violation::EmptyGeneral => write!(f, "general region has no spans"),
            Violation::InPlane { plane, violation } => write!(f, "plane {}: {}", plane, violation),
            Violation::LoosePlaneRange { plane_first, plane_last } =>
                write!(f, "plane range {}..={} starts or ends with an empty plane", plane_first, plane_last),
        }
    }
}

/// Check one span against the width of its region
pub fn check_span(span: &Span, line: i32, index: usize, width: i32) -> Result<(), Violation> {
    if span.start() > span.end() {
        return Err(Violation::SpanOrderInverted { line, index, start: span.start(), end: span.end() });
    }
    if span.start() < 0 {
        return Err(Violation::SpanBoundNegative { line, index, start: span.start() });
    }
    if span.end() >= width {
        return Err(Violation::SpanBeyondBounds { line, index, end: span.end(), width });
    }
    Ok(())
}

/// Check a row: every span valid and each pair separated by a gap
pub fn check_row(row: &Row, line: i32, width: i32) -> Result<(), Violation> {
    let spans = row.spans();
    for (index, span) in spans.iter().enumerate() {
        check_span(span, line, index, width)?;
        if index > 0 {
            let prev = &spans[index - 1];
            if prev.gap_to(span) < 2 {
                return Err(Violation::SpansAdjacentOrOverlapping {
                    line,
                    index,
                    prev_end: prev.end(),
                    next_start: span.start(),
                });
            }
        }
    }
    Ok(())
}

/// Validate a span count read from serialized data
///
/// In repair mode a negative count is clamped to zero.
pub fn check_span_count(line: i32, count: i64, repair: bool) -> Result<usize, Violation> {
    if count >= 0 {
        return Ok(count as usize);
    }
    if repair {
        warn!("Line {}: clamping negative span count {} to zero", line, count);
        Ok(0)
    } else {
        Err(Violation::SpanCountNegative { line, count })
    }
}

/// Tightest box around the spans of a domain, `None` without spans
pub(crate) fn tight_bounds(domain: &IntervalDomain) -> Option<BoundingBox> {
    let bounds = domain.bounds();
    let mut first_row = None;
    let mut last_row = 0usize;
    let mut min_start = i32::MAX;
    let mut max_end = i32::MIN;

    for (i, row) in domain.rows().iter().enumerate() {
        if let (Some(first), Some(last)) = (row.spans().first(), row.spans().last()) {
            first_row.get_or_insert(i);
            last_row = i;
            min_start = min_start.min(first.start());
            max_end = max_end.max(last.end());
        }
    }

    first_row.map(|first| BoundingBox::new(
        bounds.line_first.saturating_add(first as i32),
        bounds.line_first.saturating_add(last_row as i32),
        bounds.col_first.saturating_add(min_start),
        bounds.col_first.saturating_add(max_end),
    ))
}

/// Report the first structural violation in a region
pub fn check(region: &Region) -> Result<(), Violation> {
    let domain = match region {
        Region::Empty => return Ok(()),
        Region::Rectangle(b) => return check_bounds(b),
        Region::General(domain) => domain,
    };

    let bounds = domain.bounds();
    check_bounds(&bounds)?;

    // check_bounds keeps both extents inside i32
    let height = bounds.height() as usize;
    let width = bounds.width() as i32;
    for (i, row) in domain.rows().iter().enumerate() {
        if i >= height {
            return Err(Violation::RowBeyondRange {
                line: bounds.line_last.saturating_add(1),
                line_last: bounds.line_last,
            });
        }
        let expected = bounds.line_first + i as i32;
        if row.line() != expected {
            return Err(Violation::RowOutOfPlace { line: row.line(), expected });
        }
        check_row(row, expected, width)?;
    }

    match tight_bounds(domain) {
        None => Err(Violation::EmptyGeneral),
        Some(tight) if tight != bounds => Err(Violation::LooseBounds { declared: bounds, tight }),
        Some(_) => Ok(()),
    }
}

pub fn check_bounds(bounds: &BoundingBox) -> Result<(), Violation> {
    if bounds.line_first > bounds.line_last {
        return Err(Violation::LineOrder { line_first: bounds.line_first, line_last: bounds.line_last });
    }
    if bounds.col_first > bounds.col_last {
        return Err(Violation::ColumnOrder { col_first: bounds.col_first, col_last: bounds.col_last });
    }
    if bounds.height() > MAX_EXTENT {
        return Err(Violation::LineRangeTooLarge { line_first: bounds.line_first, line_last: bounds.line_last });
    }
    if bounds.width() > MAX_EXTENT {
        return Err(Violation::ColumnRangeTooLarge { col_first: bounds.col_first, col_last: bounds.col_last });
    }
    Ok(())
}

/// Verify a region, turning a violation into an error
pub fn verify(region: &Region) -> RegionResult<()> {
    check(region).map_err(Into::into)
}

pub fn repair_bounds(bounds: &mut BoundingBox, fixed: &mut Vec<Violation>) {
    if bounds.line_first > bounds.line_last {
        fixed.push(Violation::LineOrder { line_first: bounds.line_first, line_last: bounds.line_last });
        std::mem::swap(&mut bounds.line_first, &mut bounds.line_last);
    }
    if bounds.col_first > bounds.col_last {
        fixed.push(Violation::ColumnOrder { col_first: bounds.col_first, col_last: bounds.col_last });
        std::mem::swap(&mut bounds.col_first, &mut bounds.col_last);
    }
    // keep the first line and column, drop what lies past the last addressable one
    let max_offset = MAX_EXTENT as i32 - 1;
    if bounds.height() > MAX_EXTENT {
        fixed.push(Violation::LineRangeTooLarge { line_first: bounds.line_first, line_last: bounds.line_last });
        bounds.line_last = bounds.line_first + max_offset;
    }
    if bounds.width() > MAX_EXTENT {
        fixed.push(Violation::ColumnRangeTooLarge { col_first: bounds.col_first, col_last: bounds.col_last });
        bounds.col_last = bounds.col_first + max_offset;
    }
}

/// Repair the spans of one row in place
///
/// Inverted spans are swapped and spans reaching left of the origin are
/// clipped, or dropped when nothing is left. Spans found out of order are
/// sorted once by start. A single forward pass then merges each touching or
/// overlapping pair, re-checking the merged span against its next
/// neighbour.
pub fn repair_row(row: &mut Row, line: i32, fixed: &mut Vec<Violation>) {
    let spans = row.spans_mut();

    let mut kept = 0;
    for i in 0..spans.len() {
        let (mut start, mut end) = (spans[i].start(), spans[i].end());
        if start > end {
            fixed.push(Violation::SpanOrderInverted { line, index: i, start, end });
            std::mem::swap(&mut start, &mut end);
        }
        if end < 0 {
            fixed.push(Violation::SpanBoundNegative { line, index: i, start });
            continue;
        }
        if start < 0 {
            fixed.push(Violation::SpanBoundNegative { line, index: i, start });
            start = 0;
        }
        spans[kept] = Span::raw(start, end);
        kept += 1;
    }
    spans.truncate(kept);

    if let Some(i) = (1..spans.len()).find(|&i| spans[i].start() < spans[i - 1].start()) {
        fixed.push(Violation::SpansAdjacentOrOverlapping {
            line,
            index: i,
            prev_end: spans[i - 1].end(),
            next_start: spans[i].start(),
        });
        spans.sort_unstable_by_key(|s| (s.start(), s.end()));
    }

    let mut kept = 0;
    for i in 0..spans.len() {
        let cur = spans[i];
        if kept > 0 {
            let prev = spans[kept - 1];
            // starts are sorted and non-negative, so the gap cannot overflow
            if prev.gap_to(&cur) < 2 {
                fixed.push(Violation::SpansAdjacentOrOverlapping {
                    line,
                    index: i,
                    prev_end: prev.end(),
                    next_start: cur.start(),
                });
                spans[kept - 1] = Span::raw(prev.start(), prev.end().max(cur.end()));
                continue;
            }
        }
        spans[kept] = cur;
        kept += 1;
    }
    spans.truncate(kept);
}

/// Drop the part of a repaired row lying right of the last column
fn clip_row(row: &mut Row, line: i32, width: i32, fixed: &mut Vec<Violation>) {
    let spans = row.spans_mut();
    let inside = spans.partition_point(|s| s.start() < width);
    if let Some(last) = spans.last() {
        if last.end() >= width {
            fixed.push(Violation::SpanBeyondBounds { line, index: spans.len() - 1, end: last.end(), width });
        }
    }
    spans.truncate(inside);
    if let Some(last) = spans.last_mut() {
        if last.end() >= width {
            *last = Span::raw(last.start(), width - 1);
        }
    }
}

/// Repair a region in place and return the violations that were fixed
///
/// The result always passes [`check`]. A general region left without spans
/// becomes `Region::Empty`.
pub fn repair(region: &mut Region) -> Vec<Violation> {
    let mut fixed = Vec::new();

    match region {
        Region::Empty => {}
        Region::Rectangle(bounds) => repair_bounds(bounds, &mut fixed),
        Region::General(domain) => {
            repair_bounds(domain.bounds_mut(), &mut fixed);

            // repair_bounds leaves both extents inside i32
            let bounds = domain.bounds();
            let height = bounds.height() as usize;
            if domain.rows().len() > height {
                fixed.push(Violation::RowBeyondRange {
                    line: bounds.line_last.saturating_add(1),
                    line_last: bounds.line_last,
                });
                domain.rows_mut().truncate(height);
            }

            let line_first = bounds.line_first;
            let width = bounds.width() as i32;
            for (i, row) in domain.rows_mut().iter_mut().enumerate() {
                let expected = line_first + i as i32;
                if row.line() != expected {
                    fixed.push(Violation::RowOutOfPlace { line: row.line(), expected });
                    row.set_line(expected);
                }
                repair_row(row, expected, &mut fixed);
                clip_row(row, expected, width, &mut fixed);
            }

            match tight_bounds(domain) {
                None => fixed.push(Violation::EmptyGeneral),
                Some(tight) if tight != domain.bounds() => {
                    fixed.push(Violation::LooseBounds { declared: domain.bounds(), tight });
                }
                Some(_) => {}
            }
        }
    }

    standardize(region);

    for violation in &fixed {
        warn!("Repaired: {}", violation);
    }
    debug!("Repair fixed {} violations", fixed.len());
    fixed
}
