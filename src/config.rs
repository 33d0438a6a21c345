//! Engine configuration
//!
//! Settings are read from a TOML document with three optional tables:
//!
//! ```toml
//! [engine]
//! connectivity = 4
//! repair_on_load = false
//! standardize_output = true
//!
//! [io]
//! byte_order = "little"
//! mask_threshold = 128
//!
//! [logging]
//! level = "info"
//! file = "regionkit.log"
//! ```
//!
//! Missing keys keep their defaults.

use std::fs;

use log::{debug, LevelFilter};

use crate::algebra::Connectivity;
use crate::io::ByteOrder;
use crate::region::{RegionError, RegionResult};

/// Runtime settings for the engine and CLI
#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    /// Neighbourhood used by contract and dilate
    pub connectivity: Connectivity,
    /// Repair malformed regions on load instead of rejecting them
    pub repair_on_load: bool,
    /// Standardize results before writing them
    pub standardize_output: bool,
    /// Byte order for binary output
    pub byte_order: ByteOrder,
    /// Luma value at or above which a mask pixel is inside the region
    pub mask_threshold: u8,
    /// Log verbosity
    pub log_level: LevelFilter,
    /// Optional log file
    pub log_file: Option<String>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            connectivity: Connectivity::Four,
            repair_on_load: false,
            standardize_output: true,
            byte_order: ByteOrder::LittleEndian,
            mask_threshold: 128,
            log_level: LevelFilter::Info,
            log_file: None,
        }
    }
}

fn config_error(key: &str, expected: &str) -> RegionError {
    RegionError::ConfigError(format!("'{}' must be {}", key, expected))
}

fn get_bool(table: &toml::Value, key: &str) -> RegionResult<Option<bool>> {
    match table.get(key) {
        None => Ok(None),
        Some(v) => v.as_bool().map(Some).ok_or_else(|| config_error(key, "a boolean")),
    }
}

fn get_int(table: &toml::Value, key: &str) -> RegionResult<Option<i64>> {
    match table.get(key) {
        None => Ok(None),
        Some(v) => v.as_integer().map(Some).ok_or_else(|| config_error(key, "an integer")),
    }
}

fn get_str<'v>(table: &'v toml::Value, key: &str) -> RegionResult<Option<&'v str>> {
    match table.get(key) {
        None => Ok(None),
        Some(v) => v.as_str().map(Some).ok_or_else(|| config_error(key, "a string")),
    }
}

/// Parse a log level name
pub fn parse_level(name: &str) -> RegionResult<LevelFilter> {
    match name.to_lowercase().as_str() {
        "off" => Ok(LevelFilter::Off),
        "error" => Ok(LevelFilter::Error),
        "warn" | "warning" => Ok(LevelFilter::Warn),
        "info" => Ok(LevelFilter::Info),
        "debug" => Ok(LevelFilter::Debug),
        "trace" => Ok(LevelFilter::Trace),
        other => Err(RegionError::ConfigError(format!("Unknown log level: {}", other))),
    }
}

impl EngineConfig {
    /// Parse a TOML document
    pub fn from_toml_str(content: &str) -> RegionResult<Self> {
        let value: toml::Value = content
            .parse()
            .map_err(|e| RegionError::ConfigError(format!("Failed to parse config: {}", e)))?;
        let mut config = EngineConfig::default();

        if let Some(engine) = value.get("engine") {
            if let Some(code) = get_int(engine, "connectivity")? {
                config.connectivity = Connectivity::from_code(code)
                    .map_err(|_| config_error("connectivity", "4 or 8"))?;
            }
            if let Some(repair) = get_bool(engine, "repair_on_load")? {
                config.repair_on_load = repair;
            }
            if let Some(standardize) = get_bool(engine, "standardize_output")? {
                config.standardize_output = standardize;
            }
        }

        if let Some(io) = value.get("io") {
            if let Some(order) = get_str(io, "byte_order")? {
                config.byte_order = ByteOrder::from_name(order)?;
            }
            if let Some(threshold) = get_int(io, "mask_threshold")? {
                config.mask_threshold = u8::try_from(threshold)
                    .map_err(|_| config_error("mask_threshold", "between 0 and 255"))?;
            }
        }

        if let Some(logging) = value.get("logging") {
            if let Some(level) = get_str(logging, "level")? {
                config.log_level = parse_level(level)?;
            }
            if let Some(file) = get_str(logging, "file")? {
                config.log_file = Some(file.to_string());
            }
        }

        debug!("Loaded configuration: {:?}", config);
        Ok(config)
    }

    /// Load configuration from a file
    pub fn from_file(path: &str) -> RegionResult<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }
}
