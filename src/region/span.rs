//! Spans and rows
//!
//! A span is a closed column range stored relative to the owning region's
//! first column. A row is the ordered span list of one raster line.

/// Closed column range `[start, end]` relative to the region's `col_first`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    start: i32,
    end: i32,
}

impl Span {
    /// Create a span, `None` unless `0 <= start <= end`
    pub fn new(start: i32, end: i32) -> Option<Self> {
        if start < 0 || start > end {
            None
        } else {
            Some(Span { start, end })
        }
    }

    /// Create a span without checking its bounds
    ///
    /// Used by decoders and the verifier's tests, which must be able to hold
    /// malformed data long enough to report or repair it.
    pub fn raw(start: i32, end: i32) -> Self {
        Span { start, end }
    }

    pub fn start(&self) -> i32 {
        self.start
    }

    pub fn end(&self) -> i32 {
        self.end
    }

    /// Number of columns covered
    pub fn width(&self) -> i32 {
        self.end - self.start + 1
    }

    /// Column gap to a span on the right; at least 2 for well-formed rows
    pub fn gap_to(&self, right: &Span) -> i32 {
        right.start - self.end
    }
}

/// Spans of a single raster line
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Row {
    line: i32,
    spans: Vec<Span>,
}

impl Row {
    /// Create an empty row for a line
    pub fn new(line: i32) -> Self {
        Row { line, spans: Vec::new() }
    }

    /// Create a row from an existing span list without validation
    pub fn from_spans(line: i32, spans: Vec<Span>) -> Self {
        Row { line, spans }
    }

    pub fn line(&self) -> i32 {
        self.line
    }

    pub fn spans(&self) -> &[Span] {
        &self.spans
    }

    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// Total columns covered by the row
    pub fn area(&self) -> i64 {
        self.spans.iter().map(|s| s.width() as i64).sum()
    }

    pub(crate) fn set_line(&mut self, line: i32) {
        self.line = line;
    }

    pub(crate) fn spans_mut(&mut self) -> &mut Vec<Span> {
        &mut self.spans
    }
}
