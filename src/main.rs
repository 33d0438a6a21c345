use clap::{Arg, Command as ClapCommand, ArgAction};
use std::path::Path;
use std::process;
use log::{error, LevelFilter};

use regionkit::config::EngineConfig;
use regionkit::utils::logger::Logger;
use regionkit::commands::{CommandFactory, RegionkitCommandFactory};

/// `regionkit.log` -> `regionkit-global.log`
fn global_log_path(path: &str) -> String {
    let p = Path::new(path);
    let stem = p.file_stem().map(|s| s.to_string_lossy().to_string()).unwrap_or_default();
    let name = match p.extension() {
        Some(ext) => format!("{}-global.{}", stem, ext.to_string_lossy()),
        None => format!("{}-global", stem),
    };
    p.with_file_name(name).to_string_lossy().to_string()
}

fn main() {
    let matches = ClapCommand::new("RegionKit")
        .version("0.1")
        .about("Set algebra and morphology on run-length encoded raster regions")
        .arg(
            Arg::new("input")
                .help("Input region (.rgn binary, .txt text, or a mask image)")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("op")
                .long("op")
                .help("Operation to perform")
                .value_name("OP")
                .value_parser(["union", "intersect", "diff", "contract", "dilate",
                               "verify", "repair", "standardize", "info"])
                .default_value("info"),
        )
        .arg(
            Arg::new("other")
                .long("other")
                .help("Second region for union, intersect and diff")
                .value_name("FILE")
                .required(false),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .help("Output region file")
                .value_name("FILE")
                .required(false),
        )
        .arg(
            Arg::new("render")
                .long("render")
                .help("Also render the result as a mask image")
                .value_name("FILE")
                .required(false),
        )
        .arg(
            Arg::new("connectivity")
                .long("connectivity")
                .help("Neighbourhood for contract and dilate (4 or 8)")
                .value_name("N")
                .required(false),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("TOML configuration file")
                .value_name("FILE")
                .required(false),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose output")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    let mut config = match matches.get_one::<String>("config") {
        Some(path) => match EngineConfig::from_file(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Error loading configuration: {}", e);
                process::exit(1);
            }
        },
        None => EngineConfig::default(),
    };
    if matches.get_flag("verbose") {
        config.log_level = LevelFilter::Debug;
    }

    let logger = match &config.log_file {
        Some(path) => {
            if let Err(e) = Logger::init_global_logger(&global_log_path(path), config.log_level) {
                eprintln!("Error setting up global logger: {}", e);
                process::exit(1);
            }
            match Logger::new(path, config.log_level) {
                Ok(l) => l,
                Err(e) => {
                    eprintln!("Error initializing logger: {}", e);
                    process::exit(1);
                }
            }
        }
        None => {
            env_logger::Builder::new()
                .filter_level(config.log_level)
                .parse_default_env()
                .init();
            Logger::console(config.log_level)
        }
    };

    let factory = RegionkitCommandFactory::new(config);

    let command_result = factory.create_command(&matches, &logger);
    match command_result {
        Ok(command) => {
            if let Err(e) = command.execute() {
                error!("Command execution error: {}", e);
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        },
        Err(e) => {
            error!("Failed to create command: {}", e);
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };
}
