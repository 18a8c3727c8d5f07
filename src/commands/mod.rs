//! CLI command implementations
//!
//! This module contains implementations of the commands supported by the
//! CLI application using the Command pattern.

pub mod command_traits;
pub mod extract_command;
pub mod svg_command;
pub mod generate_command;


pub use command_traits::{Command, CommandFactory};
pub use extract_command::ExtractCommand;
pub use svg_command::SvgCommand;
pub use generate_command::GenerateCommand;

use clap::ArgMatches;
use crate::asset::AssetResult;
use crate::utils::logger::Logger;

/// Factory for creating command instances based on CLI arguments
///
/// This factory examines the command-line arguments and creates
/// the appropriate command instance for execution.
pub struct AssetkitCommandFactory;

impl AssetkitCommandFactory {
    /// Create a new factory instance
    pub fn new() -> Self {
        AssetkitCommandFactory
    }
}

impl Default for AssetkitCommandFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> CommandFactory<'a> for AssetkitCommandFactory {
    fn create_command(&self, args: &ArgMatches, logger: &'a Logger) -> AssetResult<Box<dyn Command + 'a>> {
        if args.get_flag("generate") {
            Ok(Box::new(GenerateCommand::new(args, logger)?))
        } else if args.get_flag("svg-only") {
            Ok(Box::new(SvgCommand::new(args, logger)?))
        } else {
            Ok(Box::new(ExtractCommand::new(args, logger)?))
        }
    }
}
