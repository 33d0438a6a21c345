//! Conversion between regions and raster masks
//!
//! Image rows map to region lines and image columns to region columns,
//! with pixel (0, 0) at line 0, column 0 unless an origin is given.

use image::{DynamicImage, GrayImage, Luma};
use log::{debug, info};

use crate::region::{BoundingBox, Region, RegionBuilder, RegionError, RegionResult};

/// Build a region from the pixels of `image` whose luma is at least `threshold`
///
/// # Arguments
/// * `image` - The mask image
/// * `threshold` - Minimum luma of a pixel inside the region
/// * `origin` - `(line, column)` of the top-left pixel
pub fn region_from_mask(image: &DynamicImage, threshold: u8, origin: (i32, i32)) -> RegionResult<Region> {
    let gray = image.to_luma8();
    let mut builder = RegionBuilder::strict();

    for (y, row) in gray.rows().enumerate() {
        let line = origin.0 + y as i32;
        let mut run_start: Option<i32> = None;
        for (x, pixel) in row.enumerate() {
            let col = origin.1 + x as i32;
            match (pixel[0] >= threshold, run_start) {
                (true, None) => run_start = Some(col),
                (false, Some(start)) => {
                    builder.push(line, start, col - 1)?;
                    run_start = None;
                }
                _ => {}
            }
        }
        if let Some(start) = run_start {
            builder.push(line, start, origin.1 + gray.width() as i32 - 1)?;
        }
    }

    debug!("Mask of {}x{} produced {} spans", gray.width(), gray.height(), builder.span_count());
    builder.finish()
}

/// Load a mask image from disk and convert it to a region
pub fn load_mask(path: &str, threshold: u8) -> RegionResult<Region> {
    info!("Reading mask image {}", path);
    let image = image::open(path)
        .map_err(|e| RegionError::ImageError(format!("Failed to open {}: {}", path, e)))?;
    region_from_mask(&image, threshold, (0, 0))
}

/// Render the part of `region` inside `frame` as a white-on-black mask
pub fn render_mask(region: &Region, frame: &BoundingBox) -> RegionResult<GrayImage> {
    if !frame.is_ordered() {
        return Err(RegionError::GenericError(format!("Cannot render into inverted frame {}", frame)));
    }
    let size = |extent: i64| {
        u32::try_from(extent)
            .map_err(|_| RegionError::ImageError(format!("Frame {} is too large for an image", frame)))
    };
    let mut image = GrayImage::new(size(frame.width())?, size(frame.height())?);
    if region.is_empty() {
        return Ok(image);
    }

    for span in region.scan()? {
        if span.line < frame.line_first || span.line > frame.line_last {
            continue;
        }
        let left = span.left.max(frame.col_first);
        let right = span.right.min(frame.col_last);
        let y = (span.line - frame.line_first) as u32;
        for col in left..=right {
            image.put_pixel((col - frame.col_first) as u32, y, Luma([255]));
        }
    }
    Ok(image)
}

/// Render a region over its own bounding box and save it
pub fn save_mask(region: &Region, path: &str) -> RegionResult<()> {
    let frame = region
        .bounding_box()
        .ok_or_else(|| RegionError::GenericError("Cannot render an empty region".to_string()))?;
    let image = render_mask(region, &frame)?;
    info!("Writing {}x{} mask to {}", image.width(), image.height(), path);
    image
        .save(path)
        .map_err(|e| RegionError::ImageError(format!("Failed to save image: {}", e)))
}
