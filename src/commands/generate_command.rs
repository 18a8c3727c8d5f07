//! Test-image generation command
//!
//! Draws the synthetic combined image (circular icon plus tall splash
//! rectangle) and writes it to the given path, giving the extraction
//! pipeline a known-good input to chew on.

use clap::ArgMatches;
use log::info;
use std::path::Path;

use crate::asset::{AssetError, AssetResult};
use crate::commands::command_traits::Command;
use crate::generator::generate_combined_image;
use crate::utils::logger::Logger;

/// Command for generating the synthetic combined test image
pub struct GenerateCommand<'a> {
    /// Path the generated image is written to
    output_path: String,
    /// Logger for recording operations
    logger: &'a Logger,
}

impl<'a> GenerateCommand<'a> {
    /// Create a new generate command from CLI arguments
    ///
    /// In generate mode the positional argument is the destination path
    /// rather than an existing input image.
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> AssetResult<Self> {
        let output_path = args
            .get_one::<String>("input")
            .ok_or_else(|| AssetError::GenericError("Missing output path for generated image".to_string()))?
            .clone();
        info!("Generating combined test image at: {}", output_path);

        Ok(GenerateCommand {
            output_path,
            logger,
        })
    }
}

impl<'a> Command for GenerateCommand<'a> {
    fn execute(&self) -> AssetResult<()> {
        generate_combined_image(Path::new(&self.output_path))?;
        self.logger
            .log(&format!("Test image created: {}", self.output_path))?;
        Ok(())
    }
}
