//! Plain-text region format
//!
//! ```text
//! # comments and blank lines are ignored
//! region 10 12 3 9
//! 10: 2 3,4 7,9
//! 12: 1 3,9
//! ```
//!
//! The header is `empty`, `rect <lines> <cols>` or `region <lines> <cols>`.
//! Each span line gives the line number, the declared span count and the
//! spans as absolute `start,end` column pairs.

use std::fmt::Write as _;
use std::fs;

use lazy_static::lazy_static;
use log::{debug, info};
use regex::Regex;

use crate::io::region_codec::{assemble, rectangle, DecodeOptions};
use crate::region::verify::check_span_count;
use crate::region::{BoundingBox, Region, RegionError, RegionResult, Span};

lazy_static! {
    static ref HEADER: Regex =
        Regex::new(r"^(empty|rect|region)(?:\s+(-?\d+)\s+(-?\d+)\s+(-?\d+)\s+(-?\d+))?$")
            .unwrap();
    static ref SPAN_LINE: Regex = Regex::new(r"^(-?\d+)\s*:\s*(-?\d+)((?:\s+-?\d+\s*,\s*-?\d+)*)$").unwrap();
    static ref PAIR: Regex = Regex::new(r"(-?\d+)\s*,\s*(-?\d+)").unwrap();
}

fn parse_int(text: &str, line_no: usize) -> RegionResult<i32> {
    text.parse::<i32>().map_err(|e| {
        RegionError::InvalidFormat(format!("line {}: bad number '{}': {}", line_no, text, e))
    })
}

/// Render a region as text
pub fn to_text(region: &Region) -> String {
    let mut out = String::new();
    match region {
        Region::Empty => out.push_str("empty\n"),
        Region::Rectangle(b) => {
            let _ = writeln!(out, "rect {} {} {} {}", b.line_first, b.line_last, b.col_first, b.col_last);
        }
        Region::General(domain) => {
            let b = domain.bounds();
            let _ = writeln!(out, "region {} {} {} {}", b.line_first, b.line_last, b.col_first, b.col_last);
            for row in domain.rows().iter().filter(|r| !r.is_empty()) {
                let _ = write!(out, "{}: {}", row.line(), row.spans().len());
                for span in row.spans() {
                    let _ = write!(out, " {},{}", span.start() + b.col_first, span.end() + b.col_first);
                }
                out.push('\n');
            }
        }
    }
    out
}

/// Parse a region from text
pub fn from_text(text: &str, options: DecodeOptions) -> RegionResult<Region> {
    let mut lines = text
        .lines()
        .enumerate()
        .map(|(i, l)| (i + 1, l.trim()))
        .filter(|(_, l)| !l.is_empty() && !l.starts_with('#'));

    let (header_no, header) = lines
        .next()
        .ok_or_else(|| RegionError::InvalidFormat("missing region header".to_string()))?;
    let caps = HEADER.captures(header).ok_or_else(|| {
        RegionError::InvalidFormat(format!("line {}: bad header '{}'", header_no, header))
    })?;

    let kind = &caps[1];
    if kind == "empty" {
        if let Some((no, _)) = lines.next() {
            return Err(RegionError::InvalidFormat(format!("line {}: data after 'empty'", no)));
        }
        return Ok(Region::Empty);
    }

    let mut coords = [0i32; 4];
    for (i, slot) in coords.iter_mut().enumerate() {
        let m = caps.get(i + 2).ok_or_else(|| {
            RegionError::InvalidFormat(format!("line {}: '{}' needs four bounds", header_no, kind))
        })?;
        *slot = parse_int(m.as_str(), header_no)?;
    }
    let bounds = BoundingBox::new(coords[0], coords[1], coords[2], coords[3]);
    debug!("Parsed {} header: {}", kind, bounds);

    if kind == "rect" {
        if let Some((no, _)) = lines.next() {
            return Err(RegionError::InvalidFormat(format!("line {}: data after 'rect'", no)));
        }
        return rectangle(bounds, options);
    }

    let mut rows = Vec::new();
    for (no, text) in lines {
        let caps = SPAN_LINE.captures(text).ok_or_else(|| {
            RegionError::InvalidFormat(format!("line {}: bad span line '{}'", no, text))
        })?;
        let line = parse_int(&caps[1], no)?;
        let declared = parse_int(&caps[2], no)?;
        let count = check_span_count(line, declared as i64, options.repair)?;

        let mut spans = Vec::new();
        for pair in PAIR.captures_iter(&caps[3]) {
            let start = parse_int(&pair[1], no)?;
            let end = parse_int(&pair[2], no)?;
            let relative = |col: i32| {
                col.checked_sub(bounds.col_first).ok_or_else(|| {
                    RegionError::InvalidFormat(format!(
                        "line {}: column {} is too far from first column {}", no, col, bounds.col_first
                    ))
                })
            };
            spans.push(Span::raw(relative(start)?, relative(end)?));
        }
        if spans.len() != count {
            if !options.repair {
                return Err(RegionError::InvalidFormat(format!(
                    "line {}: declared {} spans but found {}", no, count, spans.len()
                )));
            }
            spans.truncate(count);
        }
        if !spans.is_empty() {
            rows.push((line, spans));
        }
    }
    assemble(bounds, rows, options)
}

/// Write a region to a text file
pub fn write_text_file(region: &Region, path: &str) -> RegionResult<()> {
    info!("Writing region text to {}", path);
    fs::write(path, to_text(region))?;
    Ok(())
}

/// Read a region from a text file
pub fn read_text_file(path: &str, options: DecodeOptions) -> RegionResult<Region> {
    info!("Reading region text from {}", path);
    let text = fs::read_to_string(path)?;
    from_text(&text, options)
}
