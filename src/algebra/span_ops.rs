//! Per-line span merges shared by the set operations and morphology
//!
//! All inputs are sorted, non-adjacent span lists of one line in absolute
//! columns; all outputs keep that form.

use crate::region::Interval;

/// Intersect two span lists into `out`
///
/// Advances whichever side ends first; both on a tie.
pub fn intersect_spans(a: &[Interval], b: &[Interval], out: &mut Vec<Interval>) {
    out.clear();
    let (mut i, mut j) = (0, 0);
    while i < a.len() && j < b.len() {
        let left = a[i].left.max(b[j].left);
        let right = a[i].right.min(b[j].right);
        if left <= right {
            out.push(Interval::new(left, right));
        }
        if a[i].right < b[j].right {
            i += 1;
        } else if a[i].right > b[j].right {
            j += 1;
        } else {
            i += 1;
            j += 1;
        }
    }
}

/// Push a span, merging it into the last one when the gap is under 2
fn push_coalescing(out: &mut Vec<Interval>, span: Interval) {
    match out.last_mut() {
        Some(last) if span.left <= last.right.saturating_add(1) => last.right = last.right.max(span.right),
        _ => out.push(span),
    }
}

/// Merge two span lists into `out`, joining touching and overlapping spans
pub fn merge_spans(a: &[Interval], b: &[Interval], out: &mut Vec<Interval>) {
    out.clear();
    let (mut i, mut j) = (0, 0);
    loop {
        let next = match (a.get(i), b.get(j)) {
            (Some(x), Some(y)) if x.left <= y.left => { i += 1; *x }
            (Some(_), Some(y)) => { j += 1; *y }
            (Some(x), None) => { i += 1; *x }
            (None, Some(y)) => { j += 1; *y }
            (None, None) => break,
        };
        push_coalescing(out, next);
    }
    debug_assert!(is_normalized(out));
}

/// Shrink every span by one column at each end, dropping spans that vanish
pub fn shrink_spans(spans: &[Interval], out: &mut Vec<Interval>) {
    out.clear();
    out.extend(spans.iter()
        .filter_map(|s| Some(Interval::new(s.left.checked_add(1)?, s.right.checked_sub(1)?)))
        .filter(|s| s.left <= s.right));
}

/// Grow every span by one column at each end, joining spans that meet
///
/// Growth stops at the ends of the `i32` column range.
pub fn grow_spans(spans: &[Interval], out: &mut Vec<Interval>) {
    out.clear();
    for s in spans {
        push_coalescing(out, Interval::new(s.left.saturating_sub(1), s.right.saturating_add(1)));
    }
}

/// Check that spans are sorted, non-empty and separated by a gap
pub fn is_normalized(spans: &[Interval]) -> bool {
    spans.iter().all(|s| s.left <= s.right)
        && spans.windows(2).all(|w| w[1].left > w[0].right.saturating_add(1))
}
