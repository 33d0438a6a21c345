//! Region inspection command
//!
//! Verifies, repairs, standardizes or summarizes a single region file.

use clap::ArgMatches;
use log::{info, warn};

use crate::api::RegionKit;
use crate::commands::command_traits::Command;
use crate::commands::{emit_result, required_arg};
use crate::region::{standardize, RegionError, RegionResult};
use crate::utils::logger::Logger;

/// What the inspect command does with its input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InspectMode {
    Verify,
    Repair,
    Standardize,
    Info,
}

impl InspectMode {
    pub fn from_name(name: &str) -> RegionResult<Self> {
        match name {
            "verify" => Ok(InspectMode::Verify),
            "repair" => Ok(InspectMode::Repair),
            "standardize" => Ok(InspectMode::Standardize),
            "info" => Ok(InspectMode::Info),
            other => Err(RegionError::GenericError(format!("Unknown inspect mode: {}", other))),
        }
    }
}

/// Command for checking and normalizing one region file
pub struct InspectCommand<'a> {
    mode: InspectMode,
    input_file: String,
    output_file: Option<String>,
    render_file: Option<String>,
    kit: RegionKit,
    /// Logger for recording operations
    logger: &'a Logger,
}

impl<'a> InspectCommand<'a> {
    /// Create a new inspect command
    pub fn new(args: &ArgMatches, kit: RegionKit, logger: &'a Logger) -> RegionResult<Self> {
        let mode = match args.get_one::<String>("op") {
            Some(op) => InspectMode::from_name(op)?,
            None => InspectMode::Info,
        };
        Ok(InspectCommand {
            mode,
            input_file: required_arg(args, "input", "input file")?,
            output_file: args.get_one::<String>("output").cloned(),
            render_file: args.get_one::<String>("render").cloned(),
            kit,
            logger,
        })
    }
}

impl<'a> Command for InspectCommand<'a> {
    fn execute(&self) -> RegionResult<()> {
        match self.mode {
            InspectMode::Verify => {
                let summary = self.kit.verify(&self.input_file)?;
                info!("{} is well formed", self.input_file);
                self.logger.log(&summary)?;
                print!("{}", summary);
                Ok(())
            }
            InspectMode::Repair => {
                let region = self.kit.repair(&self.input_file)?;
                if self.output_file.is_none() {
                    warn!("No --output given; repaired region is not saved");
                }
                emit_result(&self.kit, self.logger, &region,
                            self.output_file.as_deref(), self.render_file.as_deref())
            }
            InspectMode::Standardize => {
                let mut region = self.kit.load(&self.input_file, false)?;
                if standardize(&mut region) {
                    info!("Tightened {}", self.input_file);
                }
                emit_result(&self.kit, self.logger, &region,
                            self.output_file.as_deref(), self.render_file.as_deref())
            }
            InspectMode::Info => {
                let region = self.kit.load(&self.input_file, false)?;
                emit_result(&self.kit, self.logger, &region,
                            self.output_file.as_deref(), self.render_file.as_deref())
            }
        }
    }
}
