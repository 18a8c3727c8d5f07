//! Command pattern interfaces
//!
//! Each CLI operation is wrapped in a Command object so argument
//! digestion and execution stay separate and individually testable.

use crate::asset::AssetResult;
use crate::utils::logger::Logger;

/// An executable CLI operation
pub trait Command {
    /// Run the operation to completion
    ///
    /// # Returns
    /// Result indicating success or an error
    fn execute(&self) -> AssetResult<()>;
}

/// Builds the right Command for a set of parsed CLI arguments
pub trait CommandFactory<'a> {
    /// Create a Command instance based on CLI arguments
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `logger` - Logger for recording operations
    ///
    /// # Returns
    /// A boxed command ready to execute, or an error
    fn create_command(&self, args: &clap::ArgMatches, logger: &'a Logger) -> AssetResult<Box<dyn Command + 'a>>;
}
