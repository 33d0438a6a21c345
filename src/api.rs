use log::{info, warn};

use crate::algebra::{Connectivity, SetOperation};
use crate::config::EngineConfig;
use crate::io::{self, DecodeOptions};
use crate::region::{standardize, verify, Region, RegionResult};
use crate::utils::format_utils::RegionFormat;
use crate::utils::mask_utils;

/// Main interface to the RegionKit library
///
/// Wraps the engine with file handling driven by an [`EngineConfig`].
pub struct RegionKit {
    config: EngineConfig,
}

impl RegionKit {
    /// Create a RegionKit with the given configuration
    pub fn new(config: EngineConfig) -> Self {
        RegionKit { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    fn decode_options(&self, repair: bool) -> DecodeOptions {
        DecodeOptions { repair: repair || self.config.repair_on_load }
    }

    /// Load a region, choosing the format from the file extension
    ///
    /// # Arguments
    /// * `path` - File to read
    /// * `repair` - Repair structural violations instead of failing
    pub fn load(&self, path: &str, repair: bool) -> RegionResult<Region> {
        let format = RegionFormat::from_path(path);
        info!("Loading {} region from {}", format.name(), path);
        let options = self.decode_options(repair);
        match format {
            RegionFormat::Binary => io::read_file(path, options),
            RegionFormat::Text => io::read_text_file(path, options),
            RegionFormat::Mask => mask_utils::load_mask(path, self.config.mask_threshold),
        }
    }

    /// Save a region, choosing the format from the file extension
    pub fn save(&self, region: &Region, path: &str) -> RegionResult<()> {
        let mut region = region.clone();
        if self.config.standardize_output && standardize(&mut region) {
            info!("Standardized region before writing");
        }
        match RegionFormat::from_path(path) {
            RegionFormat::Binary => io::write_file(&region, path, self.config.byte_order),
            RegionFormat::Text => io::write_text_file(&region, path),
            RegionFormat::Mask => mask_utils::save_mask(&region, path),
        }
    }

    /// Apply a set operation to two region files
    pub fn combine(&self, operation: SetOperation, first: &str, second: &str) -> RegionResult<Region> {
        let a = self.load(first, false)?;
        let b = self.load(second, false)?;
        info!("Computing {} of {} and {}", operation.name(), first, second);
        operation.apply(&a, &b)
    }

    /// Contract a region file by one unit
    pub fn contract(&self, path: &str, connectivity: Option<Connectivity>) -> RegionResult<Region> {
        let region = self.load(path, false)?;
        region.contract(connectivity.unwrap_or(self.config.connectivity))
    }

    /// Dilate a region file by one unit
    pub fn dilate(&self, path: &str, connectivity: Option<Connectivity>) -> RegionResult<Region> {
        let region = self.load(path, false)?;
        region.dilate(connectivity.unwrap_or(self.config.connectivity))
    }

    /// Check a region file, returning its summary when it is well formed
    pub fn verify(&self, path: &str) -> RegionResult<String> {
        let region = self.load(path, false)?;
        verify(&region)?;
        Ok(Self::describe(&region))
    }

    /// Load a region file with repair enabled
    pub fn repair(&self, path: &str) -> RegionResult<Region> {
        let region = self.load(path, true)?;
        if region.is_empty() {
            warn!("Repaired region {} is empty", path);
        }
        Ok(region)
    }

    /// Human-readable summary of a region
    pub fn describe(region: &Region) -> String {
        let kind = match region {
            Region::Empty => "empty",
            Region::Rectangle(_) => "rectangle",
            Region::General(_) => "general",
        };
        let mut result = format!("Region kind: {}\n", kind);
        match region.bounding_box() {
            Some(bounds) => result.push_str(&format!("  Bounds: {}\n", bounds)),
            None => result.push_str("  Bounds: none\n"),
        }
        result.push_str(&format!("  Lines with spans: {}\n", region.line_count()));
        result.push_str(&format!("  Spans: {}\n", region.span_count()));
        result.push_str(&format!("  Area: {}\n", region.area()));
        result
    }
}

impl Default for RegionKit {
    fn default() -> Self {
        RegionKit::new(EngineConfig::default())
    }
}
