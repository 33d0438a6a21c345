//! Contraction and dilation by one unit
//!
//! Contraction keeps the pixels whose whole neighbourhood lies inside the
//! region. With 4-connectivity the neighbourhood is the pixel and its four
//! edge neighbours, with 8-connectivity the full 3x3 block. Dilation adds
//! every pixel whose neighbourhood touches the region.

use log::debug;

use crate::algebra::span_ops::{grow_spans, intersect_spans, shrink_spans};
use crate::algebra::union::union;
use crate::algebra::Connectivity;
use crate::region::verify::check_bounds;
use crate::region::{Interval, RasterScanCursor, Region, RegionBuilder, RegionResult};

type Line = (i32, Vec<Interval>);

fn read_line(cursor: &mut RasterScanCursor<'_>) -> Option<Line> {
    let mut spans = Vec::new();
    cursor.next_line(&mut spans).map(|line| (line, spans))
}

/// Scratch buffers reused across lines
#[derive(Default)]
struct Scratch {
    shrunk: Vec<Interval>,
    above: Vec<Interval>,
    below: Vec<Interval>,
    partial: Vec<Interval>,
    result: Vec<Interval>,
}

fn erode_line(connectivity: Connectivity, above: &[Interval], here: &[Interval],
              below: &[Interval], s: &mut Scratch) {
    shrink_spans(here, &mut s.shrunk);
    match connectivity {
        Connectivity::Four => {
            intersect_spans(&s.shrunk, above, &mut s.partial);
            intersect_spans(&s.partial, below, &mut s.result);
        }
        Connectivity::Eight => {
            shrink_spans(above, &mut s.above);
            shrink_spans(below, &mut s.below);
            intersect_spans(&s.shrunk, &s.above, &mut s.partial);
            intersect_spans(&s.partial, &s.below, &mut s.result);
        }
    }
}

/// Shrink a region by one unit
///
/// The first and last line always vanish. Regions spanning fewer than three
/// lines or three columns contract to `Empty` without allocating.
pub fn contract(region: &Region, connectivity: Connectivity) -> RegionResult<Region> {
    let bounds = match region {
        Region::Empty => return Ok(Region::Empty),
        Region::Rectangle(b) => return Ok(b.shrunk().map_or(Region::Empty, Region::Rectangle)),
        Region::General(domain) => domain.bounds(),
    };
    if bounds.height() < 3 || bounds.width() < 3 {
        debug!("Contraction of {} leaves nothing", bounds);
        return Ok(Region::Empty);
    }

    let mut cursor = RasterScanCursor::new(region)?;
    let mut out = RegionBuilder::coalescing();
    let mut scratch = Scratch::default();

    let mut prev: Option<Line> = None;
    let mut cur = read_line(&mut cursor);
    let mut next = read_line(&mut cursor);

    while let Some(line) = cur.as_ref().map(|(l, _)| *l) {
        if let (Some((above_line, above)), Some((_, here)), Some((below_line, below))) =
            (&prev, &cur, &next)
        {
            if *above_line == line - 1 && *below_line == line + 1 {
                erode_line(connectivity, above, here, below, &mut scratch);
                out.push_row(line, &scratch.result)?;
            }
        }
        prev = cur.take();
        cur = next.take();
        next = read_line(&mut cursor);
    }

    debug!("Contraction ({:?}) kept {} spans", connectivity, out.span_count());
    out.finish()
}

/// Grow every span by one column on each side
fn grow_columns(region: &Region) -> RegionResult<Region> {
    let mut cursor = RasterScanCursor::new(region)?;
    let mut out = RegionBuilder::coalescing();
    let mut spans = Vec::new();
    let mut grown = Vec::new();
    while let Some(line) = cursor.next_line(&mut spans) {
        grow_spans(&spans, &mut grown);
        out.push_row(line, &grown)?;
    }
    out.finish()
}

/// Move every line by `d_line`, dropping lines that leave the `i32` range
fn shift_lines(region: &Region, d_line: i32) -> RegionResult<Region> {
    let mut cursor = RasterScanCursor::new(region)?;
    let mut out = RegionBuilder::coalescing();
    let mut spans = Vec::new();
    while let Some(line) = cursor.next_line(&mut spans) {
        if let Some(moved) = line.checked_add(d_line) {
            out.push_row(moved, &spans)?;
        }
    }
    out.finish()
}

/// Grow a region by one unit
///
/// Growth stops at the ends of the `i32` coordinate range. A result wider
/// or taller than a region can store is an error.
pub fn dilate(region: &Region, connectivity: Connectivity) -> RegionResult<Region> {
    match (region, connectivity) {
        (Region::Empty, _) => return Ok(Region::Empty),
        (Region::Rectangle(b), Connectivity::Eight) => {
            let grown = b.grown();
            check_bounds(&grown)?;
            return Ok(Region::Rectangle(grown));
        }
        _ => {}
    }

    let grown = grow_columns(region)?;
    let source = match connectivity {
        Connectivity::Four => region,
        Connectivity::Eight => &grown,
    };
    let vertical = union(&shift_lines(source, -1)?, &shift_lines(source, 1)?)?;
    let result = union(&grown, &vertical)?;
    debug!("Dilation ({:?}) produced {} spans", connectivity, result.span_count());
    Ok(result)
}
