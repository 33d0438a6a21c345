//! Bounding box structure for raster regions

/// Most lines or columns a stored region may span
///
/// Spans are stored relative to `col_first` and rows are indexed from
/// `line_first`, so a larger box cannot be stored.
pub const MAX_EXTENT: i64 = i32::MAX as i64;

/// Inclusive line/column bounding box of a region
///
/// Lines run top to bottom and columns left to right; both ends of each
/// range are part of the box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    /// First line covered
    pub line_first: i32,
    /// Last line covered
    pub line_last: i32,
    /// First column covered
    pub col_first: i32,
    /// Last column covered
    pub col_last: i32,
}

impl BoundingBox {
    /// Create a new bounding box
    pub fn new(line_first: i32, line_last: i32, col_first: i32, col_last: i32) -> Self {
        BoundingBox {
            line_first,
            line_last,
            col_first,
            col_last,
        }
    }

    /// Number of lines in the box
    ///
    /// Computed in 64 bits: a box spanning the whole `i32` range holds
    /// more lines than `i32` can count.
    pub fn height(&self) -> i64 {
        self.line_last as i64 - self.line_first as i64 + 1
    }

    /// Number of columns in the box
    pub fn width(&self) -> i64 {
        self.col_last as i64 - self.col_first as i64 + 1
    }

    /// Check that both ranges are non-empty
    pub fn is_ordered(&self) -> bool {
        self.line_first <= self.line_last && self.col_first <= self.col_last
    }

    /// Check if this bounding box contains a pixel
    pub fn contains(&self, line: i32, col: i32) -> bool {
        line >= self.line_first && line <= self.line_last &&
            col >= self.col_first && col <= self.col_last
    }

    /// Smallest box covering both boxes
    pub fn union(&self, other: &BoundingBox) -> BoundingBox {
        BoundingBox::new(
            self.line_first.min(other.line_first),
            self.line_last.max(other.line_last),
            self.col_first.min(other.col_first),
            self.col_last.max(other.col_last),
        )
    }

    /// Overlap of two boxes, if any
    pub fn intersection(&self, other: &BoundingBox) -> Option<BoundingBox> {
        let bbox = BoundingBox::new(
            self.line_first.max(other.line_first),
            self.line_last.min(other.line_last),
            self.col_first.max(other.col_first),
            self.col_last.min(other.col_last),
        );
        if bbox.is_ordered() { Some(bbox) } else { None }
    }

    /// Translate the box by a line and column offset
    ///
    /// `None` when a corner would leave the `i32` range.
    pub fn shifted(&self, d_line: i32, d_col: i32) -> Option<BoundingBox> {
        Some(BoundingBox::new(
            self.line_first.checked_add(d_line)?,
            self.line_last.checked_add(d_line)?,
            self.col_first.checked_add(d_col)?,
            self.col_last.checked_add(d_col)?,
        ))
    }

    /// Shrink the box by one on every side, `None` if nothing is left
    pub fn shrunk(&self) -> Option<BoundingBox> {
        let bbox = BoundingBox::new(
            self.line_first.checked_add(1)?,
            self.line_last.checked_sub(1)?,
            self.col_first.checked_add(1)?,
            self.col_last.checked_sub(1)?,
        );
        if bbox.is_ordered() { Some(bbox) } else { None }
    }

    /// Grow the box by one on every side, clipped to the `i32` range
    pub fn grown(&self) -> BoundingBox {
        BoundingBox::new(
            self.line_first.saturating_sub(1),
            self.line_last.saturating_add(1),
            self.col_first.saturating_sub(1),
            self.col_last.saturating_add(1),
        )
    }
}

impl std::fmt::Display for BoundingBox {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "lines {}..={}, columns {}..={}",
               self.line_first, self.line_last, self.col_first, self.col_last)
    }
}
