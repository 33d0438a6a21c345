//! Byte order handling for binary region files
//!
//! This module implements the Strategy pattern for handling different
//! byte orders (little-endian vs big-endian) when reading and writing
//! region data.

use byteorder::{BigEndian, LittleEndian, ReadBytesExt, WriteBytesExt};
use std::io::{Read, Result, Write};

use crate::region::errors::{RegionError, RegionResult};

/// Marker for little-endian files ("II")
pub const LITTLE_ENDIAN_MARKER: u16 = 0x4949;
/// Marker for big-endian files ("MM")
pub const BIG_ENDIAN_MARKER: u16 = 0x4D4D;

/// Represents the byte order of a region file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ByteOrder {
    /// Little-endian byte order (II)
    #[default]
    LittleEndian,
    /// Big-endian byte order (MM)
    BigEndian,
}

impl ByteOrder {
    /// Detects the byte order from the file marker
    pub fn detect(reader: &mut dyn Read) -> RegionResult<Self> {
        let marker = reader.read_u16::<LittleEndian>()?;
        match marker {
            LITTLE_ENDIAN_MARKER => Ok(ByteOrder::LittleEndian),
            BIG_ENDIAN_MARKER => Ok(ByteOrder::BigEndian),
            _ => Err(RegionError::InvalidByteOrder(marker)),
        }
    }

    /// Parse a configured byte order name
    pub fn from_name(name: &str) -> RegionResult<Self> {
        match name.to_lowercase().as_str() {
            "little" | "le" | "ii" => Ok(ByteOrder::LittleEndian),
            "big" | "be" | "mm" => Ok(ByteOrder::BigEndian),
            other => Err(RegionError::ConfigError(format!("Unknown byte order: {}", other))),
        }
    }

    /// Returns a string representation of this byte order
    pub fn name(&self) -> &'static str {
        match self {
            ByteOrder::LittleEndian => "Little Endian (II)",
            ByteOrder::BigEndian => "Big Endian (MM)",
        }
    }

    /// Writes the marker identifying this byte order
    pub fn write_marker(&self, writer: &mut dyn Write) -> Result<()> {
        let marker = match self {
            ByteOrder::LittleEndian => LITTLE_ENDIAN_MARKER,
            ByteOrder::BigEndian => BIG_ENDIAN_MARKER,
        };
        // both markers are palindromes, so the order used here is irrelevant
        writer.write_u16::<LittleEndian>(marker)
    }

    /// Creates the appropriate handler for this byte order
    pub fn create_handler(&self) -> Box<dyn ByteOrderHandler> {
        match self {
            ByteOrder::LittleEndian => Box::new(LittleEndianHandler),
            ByteOrder::BigEndian => Box::new(BigEndianHandler),
        }
    }
}

/// Trait for byte order handling strategies
pub trait ByteOrderHandler: Send + Sync {
    /// Read a u16 value
    fn read_u16(&self, reader: &mut dyn Read) -> Result<u16>;

    /// Read a u32 value
    fn read_u32(&self, reader: &mut dyn Read) -> Result<u32>;

    /// Read an i32 value
    fn read_i32(&self, reader: &mut dyn Read) -> Result<i32>;

    /// Write a u16 value
    fn write_u16(&self, writer: &mut dyn Write, value: u16) -> Result<()>;

    /// Write a u32 value
    fn write_u32(&self, writer: &mut dyn Write, value: u32) -> Result<()>;

    /// Write an i32 value
    fn write_i32(&self, writer: &mut dyn Write, value: i32) -> Result<()>;
}

/// Little-endian byte order handler
pub struct LittleEndianHandler;

impl ByteOrderHandler for LittleEndianHandler {
    fn read_u16(&self, reader: &mut dyn Read) -> Result<u16> {
        reader.read_u16::<LittleEndian>()
    }

    fn read_u32(&self, reader: &mut dyn Read) -> Result<u32> {
        reader.read_u32::<LittleEndian>()
    }

    fn read_i32(&self, reader: &mut dyn Read) -> Result<i32> {
        reader.read_i32::<LittleEndian>()
    }

    fn write_u16(&self, writer: &mut dyn Write, value: u16) -> Result<()> {
        writer.write_u16::<LittleEndian>(value)
    }

    fn write_u32(&self, writer: &mut dyn Write, value: u32) -> Result<()> {
        writer.write_u32::<LittleEndian>(value)
    }

    fn write_i32(&self, writer: &mut dyn Write, value: i32) -> Result<()> {
        writer.write_i32::<LittleEndian>(value)
    }
}

/// Big-endian byte order handler
pub struct BigEndianHandler;

impl ByteOrderHandler for BigEndianHandler {
    fn read_u16(&self, reader: &mut dyn Read) -> Result<u16> {
        reader.read_u16::<BigEndian>()
    }

    fn read_u32(&self, reader: &mut dyn Read) -> Result<u32> {
        reader.read_u32::<BigEndian>()
    }

    fn read_i32(&self, reader: &mut dyn Read) -> Result<i32> {
        reader.read_i32::<BigEndian>()
    }

    fn write_u16(&self, writer: &mut dyn Write, value: u16) -> Result<()> {
        writer.write_u16::<BigEndian>(value)
    }

    fn write_u32(&self, writer: &mut dyn Write, value: u32) -> Result<()> {
        writer.write_u32::<BigEndian>(value)
    }

    fn write_i32(&self, writer: &mut dyn Write, value: i32) -> Result<()> {
        writer.write_i32::<BigEndian>(value)
    }
}
