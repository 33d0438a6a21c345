//! Region construction from raster-ordered spans
//!
//! Every producer of regions, from collaborators handing over raw
//! `(line, left, right)` triples to the set operations, goes through
//! [`RegionBuilder`]. Columns passed in are absolute; the builder works out
//! the bounding box and stores spans relative to its first column.

use log::debug;

use crate::region::bounds::BoundingBox;
use crate::region::cursor::Interval;
use crate::region::domain::{IntervalDomain, Region};
use crate::region::errors::{RegionError, RegionResult};
use crate::region::span::{Row, Span};
use crate::region::verify::{check_bounds, Violation};

/// How the builder treats spans that touch or overlap their left neighbour
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildMode {
    /// Reject touching, overlapping or inverted spans
    Strict,
    /// Merge touching or overlapping spans; drop inverted ones
    Coalesce,
}

/// Accumulates spans in raster order and produces a [`Region`]
pub struct RegionBuilder {
    mode: BuildMode,
    lines: Vec<(i32, Vec<Interval>)>,
    span_count: usize,
}

impl RegionBuilder {
    /// Builder for collaborator input: malformed input is an error
    pub fn strict() -> Self {
        RegionBuilder::new(BuildMode::Strict)
    }

    /// Builder for merge output: touching spans are merged
    pub fn coalescing() -> Self {
        RegionBuilder::new(BuildMode::Coalesce)
    }

    pub fn new(mode: BuildMode) -> Self {
        RegionBuilder {
            mode,
            lines: Vec::new(),
            span_count: 0,
        }
    }

    pub fn mode(&self) -> BuildMode {
        self.mode
    }

    /// Number of spans accepted so far (after merging)
    pub fn span_count(&self) -> usize {
        self.span_count
    }

    /// Append one span
    ///
    /// Lines must not decrease and, within a line, spans must arrive in
    /// ascending column order.
    pub fn push(&mut self, line: i32, left: i32, right: i32) -> RegionResult<()> {
        if left > right {
            return match self.mode {
                BuildMode::Coalesce => Ok(()),
                BuildMode::Strict => Err(Violation::SpanOrderInverted {
                    line,
                    index: self.spans_on(line),
                    start: left,
                    end: right,
                }.into()),
            };
        }

        if let Some((prev_line, spans)) = self.lines.last_mut() {
            let prev_line = *prev_line;
            if line < prev_line {
                let prev_left = spans.last().map_or(left, |s| s.left);
                return Err(RegionError::UnsortedInput { line, left, prev_line, prev_left });
            }
            if line == prev_line {
                let count = spans.len();
                if let Some(prev) = spans.last_mut() {
                    if left < prev.left {
                        return Err(RegionError::UnsortedInput {
                            line,
                            left,
                            prev_line,
                            prev_left: prev.left,
                        });
                    }
                    if left <= prev.right.saturating_add(1) {
                        match self.mode {
                            BuildMode::Coalesce => {
                                prev.right = prev.right.max(right);
                                return Ok(());
                            }
                            BuildMode::Strict => {
                                return Err(Violation::SpansAdjacentOrOverlapping {
                                    line,
                                    index: count,
                                    prev_end: prev.right,
                                    next_start: left,
                                }.into());
                            }
                        }
                    }
                }
                spans.try_reserve(1)?;
                spans.push(Interval::new(left, right));
                self.span_count += 1;
                return Ok(());
            }
        }

        self.lines.try_reserve(1)?;
        let mut spans = Vec::new();
        spans.try_reserve(1)?;
        spans.push(Interval::new(left, right));
        self.lines.push((line, spans));
        self.span_count += 1;
        Ok(())
    }

    /// Append a whole line of spans
    pub fn push_row(&mut self, line: i32, spans: &[Interval]) -> RegionResult<()> {
        for span in spans {
            self.push(line, span.left, span.right)?;
        }
        Ok(())
    }

    fn spans_on(&self, line: i32) -> usize {
        match self.lines.last() {
            Some((l, spans)) if *l == line => spans.len(),
            _ => 0,
        }
    }

    /// Finish construction
    ///
    /// The result has the tightest bounding box around the accepted spans;
    /// with no spans it is `Region::Empty`. Spans further apart than a
    /// stored region can address are rejected.
    pub fn finish(self) -> RegionResult<Region> {
        let (line_first, line_last) = match (self.lines.first(), self.lines.last()) {
            (Some((first, _)), Some((last, _))) => (*first, *last),
            _ => return Ok(Region::Empty),
        };

        let mut col_first = i32::MAX;
        let mut col_last = i32::MIN;
        for (_, spans) in &self.lines {
            if let (Some(first), Some(last)) = (spans.first(), spans.last()) {
                col_first = col_first.min(first.left);
                col_last = col_last.max(last.right);
            }
        }

        let bounds = BoundingBox::new(line_first, line_last, col_first, col_last);
        check_bounds(&bounds)?;
        let mut rows: Vec<Row> = Vec::new();
        rows.try_reserve(bounds.height() as usize)?;

        for (line, spans) in self.lines {
            while line_first + (rows.len() as i32) < line {
                rows.push(Row::new(line_first + rows.len() as i32));
            }
            let mut stored = Vec::new();
            stored.try_reserve(spans.len())?;
            stored.extend(spans.iter().map(|s| Span::raw(s.left - col_first, s.right - col_first)));
            rows.push(Row::from_spans(line, stored));
        }

        debug!("Built region over {} with {} spans", bounds, self.span_count);
        Ok(Region::General(IntervalDomain::from_raw_parts(bounds, rows)))
    }
}

impl Default for RegionBuilder {
    fn default() -> Self {
        RegionBuilder::strict()
    }
}
