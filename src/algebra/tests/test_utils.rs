//! Fixture regions shared by the algebra tests

use crate::region::{check, BoundingBox, Region};

pub fn region(triples: &[(i32, i32, i32)]) -> Region {
    Region::from_triples(triples.iter().copied()).unwrap()
}

pub fn rect(line_first: i32, line_last: i32, col_first: i32, col_last: i32) -> Region {
    Region::rectangle(BoundingBox::new(line_first, line_last, col_first, col_last))
}

/// A mix of empty, rectangular, ragged and disjoint regions
pub fn fixtures() -> Vec<Region> {
    vec![
        Region::Empty,
        rect(0, 2, 0, 4),
        region(&[(0, 2, 8), (1, 0, 1), (1, 5, 9), (3, 3, 3)]),
        region(&[(1, 1, 6), (2, 0, 10), (3, 0, 2), (3, 4, 4)]),
        region(&[(-1, -4, -2), (0, 0, 0), (0, 2, 2), (0, 4, 4), (2, -1, 12)]),
        rect(10, 12, 10, 12),
    ]
}

/// Every pixel of `inner` lies inside `outer`
pub fn is_subset(inner: &Region, outer: &Region) -> bool {
    inner.to_triples().iter()
        .all(|&(line, left, right)| (left..=right).all(|col| outer.contains(line, col)))
}

/// Structurally valid with every row keeping a gap between spans
pub fn assert_well_formed(r: &Region) {
    assert_eq!(check(r), Ok(()), "malformed result {:?}", r);
    let triples = r.to_triples();
    for pair in triples.windows(2) {
        if pair[0].0 == pair[1].0 {
            assert!(pair[1].1 - pair[0].2 >= 2, "touching spans in {:?}", triples);
        }
    }
}
