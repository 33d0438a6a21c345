//! Tests for the text region format

use crate::io::region_codec::DecodeOptions;
use crate::io::text_format::{from_text, to_text};
use crate::region::{BoundingBox, Region, RegionError, Violation};

const STRICT: DecodeOptions = DecodeOptions { repair: false };
const REPAIR: DecodeOptions = DecodeOptions { repair: true };

#[test]
fn test_parse_with_comments() {
    let text = "# two lines\n\nregion 10 12 3 9\n10: 2 3,4 7,9\n  # the gap line\n12: 1 3,9\n";
    let region = from_text(text, STRICT).unwrap();
    assert_eq!(region.to_triples(), vec![(10, 3, 4), (10, 7, 9), (12, 3, 9)]);
    assert_eq!(region.bounding_box(), Some(BoundingBox::new(10, 12, 3, 9)));
}

#[test]
fn test_text_round_trip() {
    let region = Region::from_triples(vec![(-1, -5, -3), (0, 0, 0), (0, 2, 8)]).unwrap();
    let text = to_text(&region);
    assert_eq!(text, "region -1 0 -5 8\n-1: 1 -5,-3\n0: 2 0,0 2,8\n");
    assert_eq!(from_text(&text, STRICT).unwrap(), region);
}

#[test]
fn test_empty_and_rectangle_headers() {
    assert!(from_text("empty\n", STRICT).unwrap().is_empty());
    assert_eq!(
        from_text("rect 0 1 2 3", STRICT).unwrap(),
        Region::rectangle(BoundingBox::new(0, 1, 2, 3))
    );
    assert_eq!(to_text(&Region::Empty), "empty\n");
}

#[test]
fn test_count_mismatch() {
    let text = "region 0 0 0 9\n0: 1 0,1 5,9\n";
    assert!(matches!(from_text(text, STRICT), Err(RegionError::InvalidFormat(_))));

    let repaired = from_text(text, REPAIR).unwrap();
    assert_eq!(repaired.to_triples(), vec![(0, 0, 1)]);
}

#[test]
fn test_negative_count() {
    let text = "region 0 0 0 5\n0: -1\n";
    assert!(matches!(
        from_text(text, STRICT),
        Err(RegionError::StructuralViolation(Violation::SpanCountNegative { line: 0, count: -1 }))
    ));
    assert!(from_text(text, REPAIR).unwrap().is_empty());
}

#[test]
fn test_malformed_text() {
    assert!(matches!(from_text("", STRICT), Err(RegionError::InvalidFormat(_))));
    assert!(matches!(from_text("blob 1 2 3 4", STRICT), Err(RegionError::InvalidFormat(_))));
    assert!(matches!(from_text("region 1 2", STRICT), Err(RegionError::InvalidFormat(_))));
    assert!(matches!(from_text("region", STRICT), Err(RegionError::InvalidFormat(_))));
    assert!(matches!(from_text("region 0 0 0 3\n0: 1 0-3", STRICT), Err(RegionError::InvalidFormat(_))));
    assert!(matches!(from_text("rect 0 0 0 0\n0: 1 0,0", STRICT), Err(RegionError::InvalidFormat(_))));
}

#[test]
fn test_loose_header_is_rejected_unless_repairing() {
    let text = "region 0 5 0 5\n2: 1 1,2\n";
    assert!(matches!(
        from_text(text, STRICT),
        Err(RegionError::StructuralViolation(Violation::LooseBounds { .. }))
    ));
    let repaired = from_text(text, REPAIR).unwrap();
    assert_eq!(repaired.bounding_box(), Some(BoundingBox::new(2, 2, 1, 2)));
}

#[test]
fn test_coordinates_at_the_ends_of_the_range() {
    let far = "region 0 0 -5 2147483647\n0: 1 2147483647,2147483647\n";
    assert!(matches!(from_text(far, STRICT), Err(RegionError::InvalidFormat(_))));

    let huge = "rect -2147483648 2147483647 0 3";
    assert!(matches!(
        from_text(huge, STRICT),
        Err(RegionError::StructuralViolation(Violation::LineRangeTooLarge { .. }))
    ));
    let clipped = from_text(huge, REPAIR).unwrap();
    assert_eq!(clipped.bounding_box(), Some(BoundingBox::new(i32::MIN, -2, 0, 3)));

    let edge = "region 2147483647 2147483647 2147483645 2147483647\n2147483647: 1 2147483645,2147483647\n";
    let region = from_text(edge, STRICT).unwrap();
    assert_eq!(region.to_triples(), vec![(i32::MAX, i32::MAX - 2, i32::MAX)]);
}
