use clap::{Arg, ArgAction, Command as ClapCommand};
use log::error;
use std::process;

// Import from your library
use assetkit::commands::{AssetkitCommandFactory, CommandFactory};
use assetkit::utils::logger::Logger;

fn main() {
    let matches = ClapCommand::new("AssetKit")
        .version("0.1")
        .about("Extract app icon and splash screen assets from a combined image")
        .arg(
            Arg::new("input")
                .help("Path to the input image (or the destination path with --generate)")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("output-dir")
                .long("output-dir")
                .help("Output directory for the extracted assets")
                .value_name("DIR")
                .default_value("extracted_assets")
                .required(false),
        )
        .arg(
            Arg::new("svg-only")
                .long("svg-only")
                .help("Skip detection and cropping, only write the SVG files")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("generate")
                .long("generate")
                .help("Write a synthetic combined test image to the input path and exit")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose output")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    let log_file = "assetkit.log";
    let logger = match Logger::new(log_file) {
        Ok(l) => l,
        Err(e) => {
            eprintln!("Error initializing logger: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = Logger::init_global_logger("assetkit-global.log", matches.get_flag("verbose")) {
        eprintln!("Error setting up global logger: {}", e);
        process::exit(1);
    }

    let factory = AssetkitCommandFactory::new();

    let command_result = factory.create_command(&matches, &logger);
    match command_result {
        Ok(command) => {
            if let Err(e) = command.execute() {
                error!("Command execution error: {}", e);
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        }
        Err(e) => {
            error!("Failed to create command: {}", e);
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };
}
