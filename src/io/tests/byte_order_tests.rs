//! Tests for the byte order module

extern crate std;

use std::io::Cursor;
use byteorder::{LittleEndian, BigEndian, WriteBytesExt};
use crate::io::byte_order::{ByteOrder, ByteOrderHandler, LittleEndianHandler, BigEndianHandler};
use crate::region::RegionError;

#[test]
fn test_byte_order_detection() {
    let mut little = Cursor::new(vec![0x49, 0x49]);
    std::assert_eq!(ByteOrder::detect(&mut little).unwrap(), ByteOrder::LittleEndian);

    let mut big = Cursor::new(vec![0x4D, 0x4D]);
    std::assert_eq!(ByteOrder::detect(&mut big).unwrap(), ByteOrder::BigEndian);
}

#[test]
fn test_byte_order_detection_invalid() {
    let mut buffer = Vec::new();
    buffer.write_u16::<LittleEndian>(0x1234).unwrap();
    let mut cursor = Cursor::new(buffer);

    let result = ByteOrder::detect(&mut cursor);
    std::assert!(matches!(result, Err(RegionError::InvalidByteOrder(0x1234))));
}

#[test]
fn test_little_endian_handler() {
    let mut buffer = Vec::new();
    buffer.write_u16::<LittleEndian>(0x1234).unwrap();
    buffer.write_u32::<LittleEndian>(0x12345678).unwrap();
    buffer.write_i32::<LittleEndian>(-42).unwrap();
    let mut cursor = Cursor::new(buffer);

    let handler = LittleEndianHandler;
    std::assert_eq!(handler.read_u16(&mut cursor).unwrap(), 0x1234);
    std::assert_eq!(handler.read_u32(&mut cursor).unwrap(), 0x12345678);
    std::assert_eq!(handler.read_i32(&mut cursor).unwrap(), -42);
}

#[test]
fn test_big_endian_handler_writes_most_significant_first() {
    let handler = BigEndianHandler;
    let mut buffer = Vec::new();
    handler.write_u16(&mut buffer, 0x0102).unwrap();
    handler.write_i32(&mut buffer, -2).unwrap();
    std::assert_eq!(buffer, vec![0x01, 0x02, 0xFF, 0xFF, 0xFF, 0xFE]);

    let mut cursor = Cursor::new(buffer);
    std::assert_eq!(handler.read_u16(&mut cursor).unwrap(), 0x0102);
    std::assert_eq!(handler.read_i32(&mut cursor).unwrap(), -2);
}

#[test]
fn test_byte_order_names() {
    std::assert_eq!(ByteOrder::from_name("BIG").unwrap(), ByteOrder::BigEndian);
    std::assert_eq!(ByteOrder::from_name("le").unwrap(), ByteOrder::LittleEndian);
    std::assert!(ByteOrder::from_name("middle").is_err());
    std::assert_eq!(ByteOrder::BigEndian.name(), "Big Endian (MM)");
}
