//! Tests for the plane stack extension

use crate::region::{BoundingBox, PlaneStack, Region, Violation};
use super::test_utils::{raw_general, region};

fn rect(line_first: i32, line_last: i32, col_first: i32, col_last: i32) -> Region {
    Region::rectangle(BoundingBox::new(line_first, line_last, col_first, col_last))
}

#[test]
fn test_standardize_drops_empty_end_planes() {
    let mut stack = PlaneStack::new(3, vec![
        Region::Empty,
        rect(0, 1, 0, 1),
        Region::Empty,
        rect(5, 5, 5, 5),
        Region::Empty,
    ]);
    assert!(stack.standardize());

    assert_eq!(stack.plane_first(), 4);
    assert_eq!(stack.plane_last(), Some(6));
    assert!(stack.plane(5).is_empty());
    assert!(!stack.standardize());
}

#[test]
fn test_standardize_all_empty_stack() {
    let mut stack = PlaneStack::new(7, vec![Region::Empty, Region::Empty]);
    assert!(stack.standardize());
    assert!(stack.is_empty());
    assert_eq!(stack.plane_first(), 0);
    assert_eq!(stack.plane_last(), None);
}

#[test]
fn test_standardize_tightens_each_plane() {
    let mut stack = PlaneStack::new(0, vec![
        raw_general(BoundingBox::new(0, 3, 0, 3), &[(1, &[(1, 2)])]),
    ]);
    stack.standardize();
    assert_eq!(stack.plane(0).bounding_box(), Some(BoundingBox::new(1, 1, 1, 2)));
}

#[test]
fn test_check_reports_plane_and_range_violations() {
    let loose = PlaneStack::new(0, vec![rect(0, 0, 0, 0), Region::Empty]);
    assert_eq!(loose.check(), Err(Violation::LoosePlaneRange { plane_first: 0, plane_last: 1 }));

    let broken = PlaneStack::new(2, vec![raw_general(BoundingBox::new(0, 0, 0, 3), &[])]);
    assert_eq!(broken.check(), Err(Violation::InPlane {
        plane: 2,
        violation: Box::new(Violation::EmptyGeneral),
    }));
    assert!(broken.verify().is_err());
}

#[test]
fn test_volume_and_bounding_box() {
    let stack = PlaneStack::new(-1, vec![rect(0, 1, 0, 1), region(&[(5, -2, -1)])]);
    assert_eq!(stack.volume(), 6);
    assert_eq!(stack.bounding_box(), Some(BoundingBox::new(0, 5, -2, 1)));
    assert!(stack.plane(-2).is_empty());
    assert!(stack.plane(1).is_empty());
}

#[test]
fn test_union_over_disjoint_plane_ranges() {
    let a = PlaneStack::new(0, vec![rect(0, 0, 0, 0)]);
    let b = PlaneStack::new(2, vec![rect(1, 1, 1, 1)]);
    let joined = a.union(&b).unwrap();

    assert_eq!(joined.plane_first(), 0);
    assert_eq!(joined.plane_last(), Some(2));
    assert!(joined.plane(1).is_empty());
    assert_eq!(joined.volume(), 2);
}

#[test]
fn test_intersection_and_difference() {
    let a = PlaneStack::new(0, vec![rect(0, 3, 0, 3), rect(0, 3, 0, 3)]);
    let b = PlaneStack::new(1, vec![rect(2, 5, 2, 5)]);

    let common = a.intersection(&b).unwrap();
    assert_eq!(common.plane_first(), 1);
    assert_eq!(common.planes().len(), 1);
    assert_eq!(common.volume(), 4);

    let rest = a.difference(&b).unwrap();
    assert_eq!(rest.plane_first(), 0);
    assert_eq!(rest.volume(), 16 + 12);

    let none = a.intersection(&PlaneStack::new(9, vec![rect(0, 0, 0, 0)])).unwrap();
    assert!(none.is_empty());
}

#[test]
fn test_contract_uses_neighbouring_planes() {
    let cube = PlaneStack::new(0, vec![rect(0, 2, 0, 4), rect(0, 2, 0, 4), rect(0, 2, 0, 4)]);
    let core = cube.contract().unwrap();

    assert_eq!(core.plane_first(), 1);
    assert_eq!(core.plane_last(), Some(1));
    assert_eq!(core.plane(1).to_triples(), vec![(1, 1, 3)]);
}

#[test]
fn test_dilate_single_voxel() {
    let voxel = PlaneStack::new(0, vec![rect(0, 0, 0, 0)]);
    let grown = voxel.dilate().unwrap();

    assert_eq!(grown.plane_first(), -1);
    assert_eq!(grown.plane_last(), Some(1));
    assert_eq!(grown.volume(), 7);
    assert_eq!(grown.plane(-1), &rect(0, 0, 0, 0));
    assert_eq!(grown.plane(0).area(), 5);
}

#[test]
fn test_dilate_stops_at_last_plane() {
    let stack = PlaneStack::new(i32::MAX, vec![rect(0, 0, 0, 0)]);
    let grown = stack.dilate().unwrap();

    assert_eq!(grown.plane_first(), i32::MAX - 1);
    assert_eq!(grown.plane_last(), Some(i32::MAX));
    assert_eq!(grown.plane(i32::MAX - 1), &rect(0, 0, 0, 0));
    assert_eq!(grown.plane(i32::MAX).area(), 5);
    assert!(grown.plane(i32::MIN).is_empty());
}
