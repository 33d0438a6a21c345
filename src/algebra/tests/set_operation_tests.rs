//! Tests for union, intersection and difference

extern crate std;

use crate::algebra::{difference, intersect_all, intersection, union, union_all, SetOperation};
use crate::region::Region;
use super::test_utils::{assert_well_formed, fixtures, is_subset, rect, region};

#[test]
fn test_difference_splits_span() {
    let a = region(&[(0, 2, 8)]);
    let b = region(&[(0, 4, 5)]);
    std::assert_eq!(difference(&a, &b).unwrap().to_triples(), vec![(0, 2, 3), (0, 6, 8)]);
}

#[test]
fn test_difference_and_intersection_with_empty() {
    let a = region(&[(0, 0, 10)]);
    std::assert_eq!(difference(&a, &Region::Empty).unwrap(), a);
    std::assert!(intersection(&a, &Region::Empty).unwrap().is_empty());
    std::assert!(difference(&Region::Empty, &a).unwrap().is_empty());
}

#[test]
fn test_difference_removes_shared_boundary_columns() {
    let a = region(&[(0, 2, 8)]);
    std::assert_eq!(difference(&a, &region(&[(0, 8, 10)])).unwrap().to_triples(), vec![(0, 2, 7)]);
    std::assert_eq!(difference(&a, &region(&[(0, 0, 2)])).unwrap().to_triples(), vec![(0, 3, 8)]);
    std::assert!(difference(&a, &region(&[(0, 2, 8)])).unwrap().is_empty());
}

#[test]
fn test_difference_with_several_cuts() {
    let a = region(&[(0, 0, 20)]);
    let b = region(&[(0, 3, 4), (0, 8, 8), (0, 15, 25)]);
    std::assert_eq!(
        difference(&a, &b).unwrap().to_triples(),
        vec![(0, 0, 2), (0, 5, 7), (0, 9, 14)]
    );
}

#[test]
fn test_difference_cut_spanning_two_spans() {
    let a = region(&[(0, 0, 4), (0, 8, 12), (1, 0, 0)]);
    let b = region(&[(0, 3, 9)]);
    std::assert_eq!(
        difference(&a, &b).unwrap().to_triples(),
        vec![(0, 0, 2), (0, 10, 12), (1, 0, 0)]
    );
}

#[test]
fn test_difference_ignores_lines_only_in_subtrahend() {
    let a = region(&[(1, 0, 5), (3, 0, 5)]);
    let b = region(&[(0, 0, 5), (2, 0, 5), (4, 0, 5)]);
    std::assert_eq!(difference(&a, &b).unwrap(), a);
}

#[test]
fn test_difference_with_rectangles() {
    let hole = difference(&rect(0, 2, 0, 2), &rect(1, 1, 1, 1)).unwrap();
    std::assert_eq!(hole.area(), 8);
    std::assert_eq!(hole.to_triples(), vec![(0, 0, 2), (1, 0, 0), (1, 2, 2), (2, 0, 2)]);
}

#[test]
fn test_union_coalesces_touching_spans() {
    let a = region(&[(0, 0, 3)]);
    let b = region(&[(0, 4, 7)]);
    let joined = union(&a, &b).unwrap();
    std::assert_eq!(joined.to_triples(), vec![(0, 0, 7)]);
    assert_well_formed(&joined);
}

#[test]
fn test_union_keeps_one_column_gap() {
    let joined = union(&region(&[(0, 0, 3)]), &region(&[(0, 5, 7), (2, 0, 0)])).unwrap();
    std::assert_eq!(joined.to_triples(), vec![(0, 0, 3), (0, 5, 7), (2, 0, 0)]);
}

#[test]
fn test_intersection_of_ragged_regions() {
    let a = region(&[(0, 0, 4), (0, 8, 12), (1, 0, 12)]);
    let b = region(&[(0, 2, 9), (0, 11, 20), (2, 0, 1)]);
    std::assert_eq!(
        intersection(&a, &b).unwrap().to_triples(),
        vec![(0, 2, 4), (0, 8, 9), (0, 11, 12)]
    );
}

#[test]
fn test_intersection_of_rectangles_stays_rectangle() {
    let common = intersection(&rect(0, 5, 0, 5), &rect(3, 9, -2, 4)).unwrap();
    std::assert!(matches!(common, Region::Rectangle(_)));
    std::assert_eq!(common, rect(3, 5, 0, 4));
    std::assert!(intersection(&rect(0, 1, 0, 1), &rect(3, 4, 0, 1)).unwrap().is_empty());
}

#[test]
fn test_identities_over_fixtures() {
    let regions = fixtures();
    for a in &regions {
        std::assert!(difference(a, a).unwrap().is_empty());
        std::assert_eq!(&difference(a, &Region::Empty).unwrap(), a);

        for b in &regions {
            let joined = union(a, b).unwrap();
            let common = intersection(a, b).unwrap();
            let rest = difference(a, b).unwrap();
            for result in [&joined, &common, &rest] {
                assert_well_formed(result);
            }

            std::assert_eq!(&intersection(a, &joined).unwrap(), a);
            std::assert_eq!(&union(a, &common).unwrap(), a);
            std::assert!(is_subset(&difference(&joined, b).unwrap(), a));
            std::assert_eq!(joined, union(b, a).unwrap());
            std::assert_eq!(common, intersection(b, a).unwrap());
            std::assert_eq!(rest.area() + common.area(), a.area());
        }
    }
}

#[test]
fn test_nary_operations() {
    let parts = vec![region(&[(0, 0, 1)]), region(&[(0, 2, 3)]), region(&[(1, 0, 3)])];
    std::assert_eq!(union_all(&parts).unwrap(), rect(0, 1, 0, 3));
    std::assert!(union_all(&[]).unwrap().is_empty());

    let layers = vec![rect(0, 9, 0, 9), rect(2, 7, 2, 7), rect(4, 12, 4, 12)];
    std::assert_eq!(intersect_all(&layers).unwrap(), rect(4, 7, 4, 7));
    std::assert!(intersect_all(&[]).unwrap().is_empty());
}

#[test]
fn test_set_operation_by_name() {
    let a = rect(0, 0, 0, 5);
    let b = rect(0, 0, 3, 8);
    let op = SetOperation::from_name("diff").unwrap();
    std::assert_eq!(op, SetOperation::Difference);
    std::assert_eq!(op.apply(&a, &b).unwrap(), rect(0, 0, 0, 2));
    std::assert_eq!(SetOperation::from_name("AND").unwrap(), SetOperation::Intersection);
    std::assert!(SetOperation::from_name("xor").is_err());
}
