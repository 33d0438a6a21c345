//! Tests for contraction and dilation

use crate::algebra::{contract, dilate, Connectivity};
use crate::region::Region;
use super::test_utils::{assert_well_formed, fixtures, is_subset, rect, region};

fn plus() -> Region {
    region(&[(0, 2, 2), (1, 1, 3), (2, 0, 4), (3, 1, 3), (4, 2, 2)])
}

#[test]
fn test_contract_loses_top_and_bottom_lines() {
    let band = region(&[(0, 0, 4), (1, 0, 4), (2, 0, 4)]);
    let core = contract(&band, Connectivity::Four).unwrap();
    assert_eq!(core.to_triples(), vec![(1, 1, 3)]);
    assert_well_formed(&core);

    let as_rect = contract(&rect(0, 2, 0, 4), Connectivity::Four).unwrap();
    assert_eq!(as_rect, core);
}

#[test]
fn test_contract_thin_regions_to_empty() {
    let two_lines = region(&[(0, 0, 9), (1, 0, 9)]);
    assert!(contract(&two_lines, Connectivity::Four).unwrap().is_empty());

    let two_columns = region(&[(0, 0, 1), (1, 0, 1), (2, 0, 1), (3, 0, 1)]);
    assert!(contract(&two_columns, Connectivity::Four).unwrap().is_empty());

    assert!(contract(&rect(0, 1, 0, 9), Connectivity::Eight).unwrap().is_empty());
    assert!(contract(&Region::Empty, Connectivity::Four).unwrap().is_empty());
}

#[test]
fn test_contract_needs_all_four_neighbours() {
    let core = contract(&plus(), Connectivity::Four).unwrap();
    assert_eq!(core.to_triples(), vec![(1, 2, 2), (2, 1, 3), (3, 2, 2)]);
}

#[test]
fn test_contract_eight_needs_full_block() {
    let core = contract(&plus(), Connectivity::Eight).unwrap();
    assert_eq!(core.to_triples(), vec![(2, 2, 2)]);
}

#[test]
fn test_contract_skips_lines_without_neighbours() {
    // line 3 is missing, so lines 2 and 4 have no neighbour on one side
    let gapped = region(&[(0, 0, 6), (1, 0, 6), (2, 0, 6), (4, 0, 6), (5, 0, 6), (6, 0, 6)]);
    let core = contract(&gapped, Connectivity::Four).unwrap();
    assert_eq!(core.to_triples(), vec![(1, 1, 5), (5, 1, 5)]);
}

#[test]
fn test_contract_shrinks_every_fixture() {
    for r in fixtures() {
        for connectivity in [Connectivity::Four, Connectivity::Eight] {
            let core = contract(&r, connectivity).unwrap();
            assert_well_formed(&core);
            assert!(is_subset(&core, &r));
            if !r.is_empty() {
                assert!(core.area() < r.area());
            }
        }
    }
}

#[test]
fn test_dilate_single_pixel() {
    let pixel = region(&[(0, 0, 0)]);
    let cross = dilate(&pixel, Connectivity::Four).unwrap();
    assert_eq!(cross.to_triples(), vec![(-1, 0, 0), (0, -1, 1), (1, 0, 0)]);

    let block = dilate(&pixel, Connectivity::Eight).unwrap();
    assert_eq!(block, rect(-1, 1, -1, 1));
    assert_eq!(dilate(&rect(0, 0, 0, 0), Connectivity::Eight).unwrap(), block);
}

#[test]
fn test_dilate_joins_nearby_spans() {
    let grown = dilate(&region(&[(0, 0, 0), (0, 2, 2)]), Connectivity::Four).unwrap();
    assert_eq!(grown.to_triples(), vec![(-1, 0, 0), (-1, 2, 2), (0, -1, 3), (1, 0, 0), (1, 2, 2)]);
    assert_well_formed(&grown);
}

#[test]
fn test_dilate_then_contract_contains_original() {
    for r in fixtures() {
        for connectivity in [Connectivity::Four, Connectivity::Eight] {
            let grown = dilate(&r, connectivity).unwrap();
            assert_well_formed(&grown);
            assert!(is_subset(&r, &grown));
            assert!(is_subset(&r, &contract(&grown, connectivity).unwrap()));
        }
    }
}

#[test]
fn test_connectivity_codes() {
    assert_eq!(Connectivity::from_code(8).unwrap(), Connectivity::Eight);
    assert_eq!(Connectivity::default().code(), 4);
    assert!(Connectivity::from_code(6).is_err());
}

#[test]
fn test_dilate_stops_at_coordinate_range() {
    let edge = region(&[(0, i32::MAX - 2, i32::MAX)]);
    let grown = dilate(&edge, Connectivity::Four).unwrap();
    assert_eq!(grown.to_triples(), vec![
        (-1, i32::MAX - 2, i32::MAX),
        (0, i32::MAX - 3, i32::MAX),
        (1, i32::MAX - 2, i32::MAX),
    ]);

    let bottom = region(&[(i32::MAX, 0, 0)]);
    let grown = dilate(&bottom, Connectivity::Eight).unwrap();
    assert_eq!(grown, rect(i32::MAX - 1, i32::MAX, -1, 1));
    assert_well_formed(&grown);
}

#[test]
fn test_dilate_past_storable_width_is_an_error() {
    let widest = rect(0, 0, i32::MIN, -2);
    assert!(dilate(&widest, Connectivity::Eight).is_err());
    assert!(dilate(&widest, Connectivity::Four).is_err());
}

#[test]
fn test_contract_rectangle_on_last_line() {
    let strip = rect(i32::MAX, i32::MAX, 0, 5);
    assert_eq!(contract(&strip, Connectivity::Four).unwrap(), Region::Empty);
}
