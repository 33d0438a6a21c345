//! Set operation command
//!
//! Combines the input region with `--other` by union, intersection or
//! difference.

use clap::ArgMatches;
use log::info;

use crate::api::RegionKit;
use crate::algebra::SetOperation;
use crate::commands::command_traits::Command;
use crate::commands::{emit_result, required_arg};
use crate::region::RegionResult;
use crate::utils::logger::Logger;

/// Command applying a binary set operation to two region files
pub struct AlgebraCommand<'a> {
    operation: SetOperation,
    input_file: String,
    other_file: String,
    output_file: Option<String>,
    render_file: Option<String>,
    kit: RegionKit,
    /// Logger for recording operations
    logger: &'a Logger,
}

impl<'a> AlgebraCommand<'a> {
    /// Create a new set operation command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `kit` - Configured engine facade
    /// * `logger` - Logger for recording operations
    pub fn new(args: &ArgMatches, kit: RegionKit, logger: &'a Logger) -> RegionResult<Self> {
        let op = required_arg(args, "op", "operation")?;
        let operation = SetOperation::from_name(&op)?;
        let input_file = required_arg(args, "input", "input file")?;
        let other_file = required_arg(args, "other", "second region (--other) for a set operation")?;

        Ok(AlgebraCommand {
            operation,
            input_file,
            other_file,
            output_file: args.get_one::<String>("output").cloned(),
            render_file: args.get_one::<String>("render").cloned(),
            kit,
            logger,
        })
    }
}

impl<'a> Command for AlgebraCommand<'a> {
    fn execute(&self) -> RegionResult<()> {
        let result = self.kit.combine(self.operation, &self.input_file, &self.other_file)?;
        info!("{} produced {} spans", self.operation.name(), result.span_count());
        self.logger.log(&format!(
            "{} {} {}", self.input_file, self.operation.name(), self.other_file
        ))?;
        emit_result(&self.kit, self.logger, &result,
                    self.output_file.as_deref(), self.render_file.as_deref())
    }
}
