//! Contraction and dilation command

use clap::ArgMatches;
use log::info;

use crate::api::RegionKit;
use crate::algebra::Connectivity;
use crate::commands::command_traits::Command;
use crate::commands::{emit_result, required_arg};
use crate::region::{RegionError, RegionResult};
use crate::utils::logger::Logger;

/// Command contracting or dilating a region file by one unit
pub struct MorphologyCommand<'a> {
    dilate: bool,
    connectivity: Option<Connectivity>,
    input_file: String,
    output_file: Option<String>,
    render_file: Option<String>,
    kit: RegionKit,
    /// Logger for recording operations
    logger: &'a Logger,
}

impl<'a> MorphologyCommand<'a> {
    /// Create a new morphology command
    ///
    /// `--connectivity` overrides the configured neighbourhood.
    pub fn new(args: &ArgMatches, kit: RegionKit, logger: &'a Logger) -> RegionResult<Self> {
        let op = required_arg(args, "op", "operation")?;
        let input_file = required_arg(args, "input", "input file")?;

        let connectivity = match args.get_one::<String>("connectivity") {
            Some(code) => {
                let code = code.parse::<i64>()
                    .map_err(|_| RegionError::GenericError(format!("Invalid connectivity: {}", code)))?;
                Some(Connectivity::from_code(code)?)
            }
            None => None,
        };

        Ok(MorphologyCommand {
            dilate: op == "dilate",
            connectivity,
            input_file,
            output_file: args.get_one::<String>("output").cloned(),
            render_file: args.get_one::<String>("render").cloned(),
            kit,
            logger,
        })
    }
}

impl<'a> Command for MorphologyCommand<'a> {
    fn execute(&self) -> RegionResult<()> {
        let connectivity = self.connectivity.unwrap_or(self.kit.config().connectivity);
        let (name, result) = if self.dilate {
            ("Dilation", self.kit.dilate(&self.input_file, Some(connectivity))?)
        } else {
            ("Contraction", self.kit.contract(&self.input_file, Some(connectivity))?)
        };
        info!("{} with {}-connectivity of {}", name, connectivity.code(), self.input_file);
        self.logger.log(&format!("{} of {}", name, self.input_file))?;
        emit_result(&self.kit, self.logger, &result,
                    self.output_file.as_deref(), self.render_file.as_deref())
    }
}
