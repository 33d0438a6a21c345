//! Tests for the raster scan cursor

extern crate std;

use crate::region::{BoundingBox, Interval, PairedScan, RasterScanCursor, Region, RegionError, Scan, ScanSpan};
use super::test_utils::region;

#[test]
fn test_empty_region_cannot_be_scanned() {
    let empty = Region::Empty;
    let result = RasterScanCursor::new(&empty);
    std::assert!(matches!(result, Err(RegionError::EmptyRegion)));
}

#[test]
fn test_general_scan_reports_remaining_spans() {
    let r = region(&[(0, 2, 4), (0, 7, 8), (2, 1, 1)]);
    let mut cursor = RasterScanCursor::new(&r).unwrap();

    std::assert_eq!(cursor.advance(), Scan::Span(ScanSpan { line: 0, left: 2, right: 4, remaining: 1 }));
    std::assert_eq!(cursor.advance(), Scan::Span(ScanSpan { line: 0, left: 7, right: 8, remaining: 0 }));
    std::assert_eq!(cursor.advance(), Scan::Span(ScanSpan { line: 2, left: 1, right: 1, remaining: 0 }));
    std::assert_eq!(cursor.advance(), Scan::EndOfObject);
    std::assert_eq!(cursor.advance(), Scan::EndOfObject);
}

#[test]
fn test_rectangle_scan_yields_one_span_per_line() {
    let r = Region::rectangle(BoundingBox::new(3, 5, -1, 2));
    let spans: Vec<ScanSpan> = RasterScanCursor::new(&r).unwrap().collect();

    std::assert_eq!(spans.len(), 3);
    for (i, span) in spans.iter().enumerate() {
        std::assert_eq!(span.line, 3 + i as i32);
        std::assert_eq!((span.left, span.right, span.remaining), (-1, 2, 0));
    }
}

#[test]
fn test_rectangle_scan_ends_on_last_representable_line() {
    let r = Region::rectangle(BoundingBox::new(i32::MAX - 1, i32::MAX, 0, 0));
    let lines: Vec<i32> = RasterScanCursor::new(&r).unwrap().map(|s| s.line).collect();
    std::assert_eq!(lines, vec![i32::MAX - 1, i32::MAX]);
}

#[test]
fn test_next_line_reads_whole_lines() {
    let r = region(&[(-2, 0, 1), (-2, 5, 6), (1, 3, 3)]);
    let mut cursor = r.scan().unwrap();
    let mut buf = Vec::new();

    std::assert_eq!(cursor.next_line(&mut buf), Some(-2));
    std::assert_eq!(buf, vec![Interval::new(0, 1), Interval::new(5, 6)]);
    std::assert_eq!(cursor.next_line(&mut buf), Some(1));
    std::assert_eq!(buf, vec![Interval::new(3, 3)]);
    std::assert_eq!(cursor.next_line(&mut buf), None);
    std::assert!(buf.is_empty());
}

#[test]
fn test_paired_scan_visits_lines_of_either_region() {
    let a = region(&[(0, 0, 1), (2, 0, 1)]);
    let b = region(&[(1, 5, 6), (2, 4, 4)]);
    let mut scan = PairedScan::new(&a, &b);

    let mut seen = Vec::new();
    while let Some(pair) = scan.next_pair() {
        seen.push((pair.line, pair.first.len(), pair.second.len()));
    }
    std::assert_eq!(seen, vec![(0, 1, 0), (1, 0, 1), (2, 1, 1)]);
}

#[test]
fn test_paired_scan_with_empty_side() {
    let a = region(&[(4, 0, 0)]);
    let empty = Region::Empty;
    let mut scan = PairedScan::new(&empty, &a);

    let pair = scan.next_pair().unwrap();
    std::assert_eq!(pair.line, 4);
    std::assert!(pair.first.is_empty());
    std::assert_eq!(pair.second, &[Interval::new(0, 0)]);
    std::assert!(scan.next_pair().is_none());
}
