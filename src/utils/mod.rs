//! Utility modules for common functionality

pub mod logger;
pub mod format_utils;
pub mod mask_utils;
