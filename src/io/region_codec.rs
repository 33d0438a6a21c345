//! Binary region format
//!
//! Layout, in the byte order given by the two-byte marker:
//!
//! ```text
//! marker   u16   "II" or "MM"
//! version  u16
//! kind     u16   0 empty, 1 rectangle, 2 general, 3 plane stack
//! -- rectangle / general --
//! line_first line_last col_first col_last   i32 x 4
//! -- general only --
//! lines    u32   number of non-empty lines
//!   line   i32
//!   count  i32
//!   (start i32, end i32) x count, relative to col_first
//! -- plane stack --
//! plane_first i32, planes u32, then each plane from `kind` on
//! ```

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};

use log::{debug, info, warn};

use crate::io::byte_order::{ByteOrder, ByteOrderHandler};
use crate::region::verify::{self, check_span_count};
use crate::region::{
    BoundingBox, IntervalDomain, PlaneStack, Region, RegionError, RegionResult, Row, Span,
};

/// Current format version
pub const FORMAT_VERSION: u16 = 1;

const KIND_EMPTY: u16 = 0;
const KIND_RECTANGLE: u16 = 1;
const KIND_GENERAL: u16 = 2;
const KIND_PLANE_STACK: u16 = 3;

/// How malformed input is treated while decoding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DecodeOptions {
    /// Repair structural violations instead of rejecting them
    pub repair: bool,
}

/// Check or repair decoded bounds, as selected by `options`
fn settle_bounds(bounds: &mut BoundingBox, options: DecodeOptions) -> RegionResult<()> {
    if options.repair {
        let mut fixed = Vec::new();
        verify::repair_bounds(bounds, &mut fixed);
        for violation in fixed {
            warn!("Repaired: {}", violation);
        }
    } else {
        verify::check_bounds(bounds)?;
    }
    Ok(())
}

/// Decoded rectangle, checked or repaired
pub(crate) fn rectangle(bounds: BoundingBox, options: DecodeOptions) -> RegionResult<Region> {
    let mut bounds = bounds;
    settle_bounds(&mut bounds, options)?;
    Ok(Region::Rectangle(bounds))
}

/// Place decoded lines into a region and verify or repair it
///
/// `lines` holds `(line, spans)` pairs with spans relative to the first
/// column of `bounds`; lines must be inside the box and strictly increasing.
pub(crate) fn assemble(
    bounds: BoundingBox,
    lines: Vec<(i32, Vec<Span>)>,
    options: DecodeOptions,
) -> RegionResult<Region> {
    let mut bounds = bounds;
    settle_bounds(&mut bounds, options)?;

    let mut rows: Vec<Row> = Vec::new();
    for (line, spans) in lines {
        if line < bounds.line_first || line > bounds.line_last {
            return Err(RegionError::InvalidFormat(format!(
                "line {} lies outside lines {}..={}", line, bounds.line_first, bounds.line_last
            )));
        }
        // settled bounds hold at most i32::MAX lines
        let index = (line as i64 - bounds.line_first as i64) as usize;
        if index < rows.len() {
            let prev_line = bounds.line_first + rows.len() as i32 - 1;
            let absolute = |span: Option<&Span>| {
                span.map_or(bounds.col_first, |s| bounds.col_first.saturating_add(s.start()))
            };
            return Err(RegionError::UnsortedInput {
                line,
                left: absolute(spans.first()),
                prev_line,
                prev_left: absolute(rows.last().and_then(|r| r.spans().first())),
            });
        }
        rows.try_reserve(index + 1 - rows.len())?;
        while rows.len() < index {
            rows.push(Row::new(bounds.line_first + rows.len() as i32));
        }
        rows.push(Row::from_spans(line, spans));
    }

    let mut region = Region::General(IntervalDomain::from_raw_parts(bounds, rows));
    if options.repair {
        verify::repair(&mut region);
    } else {
        verify::verify(&region)?;
    }
    Ok(region)
}

fn write_bounds(handler: &dyn ByteOrderHandler, writer: &mut dyn Write, b: &BoundingBox) -> RegionResult<()> {
    handler.write_i32(writer, b.line_first)?;
    handler.write_i32(writer, b.line_last)?;
    handler.write_i32(writer, b.col_first)?;
    handler.write_i32(writer, b.col_last)?;
    Ok(())
}

fn read_bounds(handler: &dyn ByteOrderHandler, reader: &mut dyn Read) -> RegionResult<BoundingBox> {
    let line_first = handler.read_i32(reader)?;
    let line_last = handler.read_i32(reader)?;
    let col_first = handler.read_i32(reader)?;
    let col_last = handler.read_i32(reader)?;
    Ok(BoundingBox::new(line_first, line_last, col_first, col_last))
}

/// Write the kind tag and body of one region
fn write_body(handler: &dyn ByteOrderHandler, writer: &mut dyn Write, region: &Region) -> RegionResult<()> {
    match region {
        Region::Empty => handler.write_u16(writer, KIND_EMPTY)?,
        Region::Rectangle(bounds) => {
            handler.write_u16(writer, KIND_RECTANGLE)?;
            write_bounds(handler, writer, bounds)?;
        }
        Region::General(domain) => {
            handler.write_u16(writer, KIND_GENERAL)?;
            write_bounds(handler, writer, &domain.bounds())?;
            let rows: Vec<&Row> = domain.rows().iter().filter(|r| !r.is_empty()).collect();
            handler.write_u32(writer, rows.len() as u32)?;
            for row in rows {
                handler.write_i32(writer, row.line())?;
                handler.write_i32(writer, row.spans().len() as i32)?;
                for span in row.spans() {
                    handler.write_i32(writer, span.start())?;
                    handler.write_i32(writer, span.end())?;
                }
            }
        }
    }
    Ok(())
}

fn read_general(handler: &dyn ByteOrderHandler, reader: &mut dyn Read, options: DecodeOptions) -> RegionResult<Region> {
    let bounds = read_bounds(handler, reader)?;
    let line_count = handler.read_u32(reader)? as usize;
    let mut lines = Vec::new();
    lines.try_reserve(line_count)?;

    for _ in 0..line_count {
        let line = handler.read_i32(reader)?;
        let declared = handler.read_i32(reader)?;
        let count = check_span_count(line, declared as i64, options.repair)?;
        let mut spans = Vec::new();
        spans.try_reserve(count)?;
        for _ in 0..count {
            let start = handler.read_i32(reader)?;
            let end = handler.read_i32(reader)?;
            spans.push(Span::raw(start, end));
        }
        if !spans.is_empty() {
            lines.push((line, spans));
        }
    }
    assemble(bounds, lines, options)
}

/// Read the kind tag and body of one region
fn read_body(handler: &dyn ByteOrderHandler, reader: &mut dyn Read, options: DecodeOptions) -> RegionResult<Region> {
    match handler.read_u16(reader)? {
        KIND_EMPTY => Ok(Region::Empty),
        KIND_RECTANGLE => rectangle(read_bounds(handler, reader)?, options),
        KIND_GENERAL => read_general(handler, reader, options),
        other => Err(RegionError::InvalidFormat(format!("Unknown region kind: {}", other))),
    }
}

fn write_header(writer: &mut dyn Write, byte_order: ByteOrder) -> RegionResult<Box<dyn ByteOrderHandler>> {
    byte_order.write_marker(writer)?;
    let handler = byte_order.create_handler();
    handler.write_u16(writer, FORMAT_VERSION)?;
    Ok(handler)
}

fn read_header(reader: &mut dyn Read) -> RegionResult<Box<dyn ByteOrderHandler>> {
    let byte_order = ByteOrder::detect(reader)?;
    let handler = byte_order.create_handler();
    let version = handler.read_u16(reader)?;
    if version != FORMAT_VERSION {
        return Err(RegionError::InvalidFormat(format!("Unsupported format version: {}", version)));
    }
    debug!("Reading region data in {}", byte_order.name());
    Ok(handler)
}

/// Encode a region
pub fn encode(region: &Region, writer: &mut dyn Write, byte_order: ByteOrder) -> RegionResult<()> {
    let handler = write_header(writer, byte_order)?;
    write_body(handler.as_ref(), writer, region)
}

/// Decode a region
pub fn decode(reader: &mut dyn Read, options: DecodeOptions) -> RegionResult<Region> {
    let handler = read_header(reader)?;
    read_body(handler.as_ref(), reader, options)
}

/// Encode a plane stack
pub fn encode_stack(stack: &PlaneStack, writer: &mut dyn Write, byte_order: ByteOrder) -> RegionResult<()> {
    let handler = write_header(writer, byte_order)?;
    handler.write_u16(writer, KIND_PLANE_STACK)?;
    handler.write_i32(writer, stack.plane_first())?;
    handler.write_u32(writer, stack.planes().len() as u32)?;
    for plane in stack.planes() {
        write_body(handler.as_ref(), writer, plane)?;
    }
    Ok(())
}

/// Decode a plane stack; a single region decodes as a one-plane stack
pub fn decode_stack(reader: &mut dyn Read, options: DecodeOptions) -> RegionResult<PlaneStack> {
    let handler = read_header(reader)?;
    let mut kind_bytes = [0u8; 2];
    reader.read_exact(&mut kind_bytes)?;
    let kind = handler.read_u16(&mut &kind_bytes[..])?;
    if kind != KIND_PLANE_STACK {
        let mut chained = (&kind_bytes[..]).chain(reader);
        let region = read_body(handler.as_ref(), &mut chained, options)?;
        return Ok(PlaneStack::new(0, vec![region]));
    }

    let plane_first = handler.read_i32(reader)?;
    let count = handler.read_u32(reader)? as usize;
    if plane_first as i64 + count as i64 - 1 > i32::MAX as i64 {
        return Err(RegionError::InvalidFormat(format!(
            "{} planes from plane {} run past the last plane index", count, plane_first
        )));
    }
    let mut planes = Vec::new();
    planes.try_reserve(count)?;
    for _ in 0..count {
        planes.push(read_body(handler.as_ref(), reader, options)?);
    }
    let mut stack = PlaneStack::new(plane_first, planes);
    if options.repair {
        stack.standardize();
    } else {
        stack.verify()?;
    }
    Ok(stack)
}

/// Write a region to a file
pub fn write_file(region: &Region, path: &str, byte_order: ByteOrder) -> RegionResult<()> {
    info!("Writing region to {}", path);
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    encode(region, &mut writer, byte_order)?;
    writer.flush()?;
    Ok(())
}

/// Read a region from a file
pub fn read_file(path: &str, options: DecodeOptions) -> RegionResult<Region> {
    info!("Reading region from {}", path);
    let file = File::open(path)?;
    let mut reader = BufReader::new(file);
    decode(&mut reader, options)
}
