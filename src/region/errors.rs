//! Custom error types for region processing

use std::collections::TryReserveError;
use std::fmt;
use std::io;

use crate::region::verify::Violation;

/// Region-specific error types
#[derive(Debug)]
pub enum RegionError {
    /// A region broke one of its structural invariants
    StructuralViolation(Violation),
    /// Attempted to scan an empty region
    EmptyRegion,
    /// Construction input was not in raster order
    UnsortedInput {
        line: i32,
        left: i32,
        prev_line: i32,
        prev_left: i32,
    },
    /// Output storage could not be reserved
    AllocationFailure,
    /// I/O error
    IoError(io::Error),
    /// Malformed serialized region
    InvalidFormat(String),
    /// Invalid byte order marker
    InvalidByteOrder(u16),
    /// Image decoding or encoding failed
    ImageError(String),
    /// Invalid configuration
    ConfigError(String),
    /// Generic error with message
    GenericError(String),
}

impl fmt::Display for RegionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegionError::StructuralViolation(v) => write!(f, "Malformed region: {}", v),
            RegionError::EmptyRegion => write!(f, "Cannot scan an empty region"),
            RegionError::UnsortedInput { line, left, prev_line, prev_left } => write!(
                f,
                "Span at line {} column {} does not follow line {} column {} in raster order",
                line, left, prev_line, prev_left
            ),
            RegionError::AllocationFailure => write!(f, "Failed to allocate region storage"),
            RegionError::IoError(e) => write!(f, "I/O error: {}", e),
            RegionError::InvalidFormat(msg) => write!(f, "Invalid region data: {}", msg),
            RegionError::InvalidByteOrder(v) => write!(f, "Invalid byte order marker: {:#06x}", v),
            RegionError::ImageError(msg) => write!(f, "Image error: {}", msg),
            RegionError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            RegionError::GenericError(msg) => write!(f, "Region error: {}", msg),
        }
    }
}

impl std::error::Error for RegionError {}

impl From<io::Error> for RegionError {
    fn from(error: io::Error) -> Self {
        RegionError::IoError(error)
    }
}

impl From<TryReserveError> for RegionError {
    fn from(_: TryReserveError) -> Self {
        RegionError::AllocationFailure
    }
}

impl From<Violation> for RegionError {
    fn from(violation: Violation) -> Self {
        RegionError::StructuralViolation(violation)
    }
}

/// Result type for region operations
pub type RegionResult<T> = Result<T, RegionError>;

impl From<String> for RegionError {
    fn from(msg: String) -> Self {
        RegionError::GenericError(msg)
    }
}
