//! CLI command implementations
//!
//! This module contains implementations of the commands
//! supported by the CLI application using the Command pattern.

pub mod command_traits;
pub mod algebra_command;
pub mod morphology_command;
pub mod inspect_command;

pub use command_traits::{Command, CommandFactory};
pub use algebra_command::AlgebraCommand;
pub use morphology_command::MorphologyCommand;
pub use inspect_command::{InspectCommand, InspectMode};

use clap::ArgMatches;
use crate::api::RegionKit;
use crate::config::EngineConfig;
use crate::region::{Region, RegionError, RegionResult};
use crate::utils::logger::Logger;
use crate::utils::mask_utils;

/// Factory for creating command instances based on CLI arguments
///
/// Examines `--op` and builds the matching command, all sharing one
/// engine configuration.
pub struct RegionkitCommandFactory {
    config: EngineConfig,
}

impl RegionkitCommandFactory {
    /// Create a new factory instance
    pub fn new(config: EngineConfig) -> Self {
        RegionkitCommandFactory { config }
    }
}

impl<'a> CommandFactory<'a> for RegionkitCommandFactory {
    fn create_command(&self, args: &ArgMatches, logger: &'a Logger) -> RegionResult<Box<dyn Command + 'a>> {
        let kit = RegionKit::new(self.config.clone());
        let op = args.get_one::<String>("op").map(String::as_str).unwrap_or("info");
        match op {
            "union" | "intersect" | "diff" => Ok(Box::new(AlgebraCommand::new(args, kit, logger)?)),
            "contract" | "dilate" => Ok(Box::new(MorphologyCommand::new(args, kit, logger)?)),
            "verify" | "repair" | "standardize" | "info" => Ok(Box::new(InspectCommand::new(args, kit, logger)?)),
            other => Err(RegionError::GenericError(format!("Unknown operation: {}", other))),
        }
    }
}

/// Read a required string argument
pub(crate) fn required_arg(args: &ArgMatches, name: &str, what: &str) -> RegionResult<String> {
    args.get_one::<String>(name)
        .cloned()
        .ok_or_else(|| RegionError::GenericError(format!("Missing {}", what)))
}

/// Write a command result to `--output` and `--render`, or print its summary
pub(crate) fn emit_result(
    kit: &RegionKit,
    logger: &Logger,
    region: &Region,
    output: Option<&str>,
    render: Option<&str>,
) -> RegionResult<()> {
    let summary = RegionKit::describe(region);
    logger.log(&summary)?;
    match output {
        Some(path) => kit.save(region, path)?,
        None => print!("{}", summary),
    }
    if let Some(path) = render {
        mask_utils::save_mask(region, path)?;
    }
    Ok(())
}
