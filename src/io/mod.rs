//! Reading and writing regions
//!
//! Two formats are supported: a compact binary layout with an explicit
//! byte order marker, and a line-oriented text layout for hand-written
//! fixtures.

pub mod byte_order;
pub mod region_codec;
pub mod text_format;

pub use byte_order::ByteOrder;
pub use region_codec::{decode, decode_stack, encode, encode_stack, read_file, write_file, DecodeOptions};
pub use text_format::{from_text, read_text_file, to_text, write_text_file};

#[cfg(test)]
mod tests;
