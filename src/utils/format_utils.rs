//! Region file format detection
//!
//! The format of a region file is picked from its extension.

use std::path::Path;

/// On-disk representation of a region
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegionFormat {
    /// Binary run-length layout
    Binary,
    /// Line-oriented text layout
    Text,
    /// Raster image; non-zero pixels belong to the region
    Mask,
}

impl RegionFormat {
    /// Detect the format of `path` from its extension, defaulting to text
    pub fn from_path(path: &str) -> Self {
        let ext = Path::new(path)
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .unwrap_or_default();
        match ext.as_str() {
            "rgn" | "bin" => RegionFormat::Binary,
            "png" | "bmp" | "gif" | "jpg" | "jpeg" | "tif" | "tiff" | "pgm" => RegionFormat::Mask,
            _ => RegionFormat::Text,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            RegionFormat::Binary => "binary",
            RegionFormat::Text => "text",
            RegionFormat::Mask => "mask image",
        }
    }
}
