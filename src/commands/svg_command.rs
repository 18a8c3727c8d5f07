//! SVG-only emission command
//!
//! Writes the two static SVG documents without touching the detection
//! path. The input image is still existence-checked for CLI parity with
//! the full pipeline, but it is never opened or decoded.

use clap::ArgMatches;
use log::info;
use std::path::Path;

use crate::asset::{AssetError, AssetResult};
use crate::commands::command_traits::Command;
use crate::svg::SvgEmitter;
use crate::utils::logger::Logger;

/// Command for emitting only the SVG assets
pub struct SvgCommand<'a> {
    /// Path to the input image (checked for existence, never read)
    input_file: String,
    /// Directory the SVG files are written to
    output_dir: String,
    /// Logger for recording operations
    logger: &'a Logger,
}

impl<'a> SvgCommand<'a> {
    /// Create a new SVG-only command from CLI arguments
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> AssetResult<Self> {
        let input_file = args
            .get_one::<String>("input")
            .ok_or_else(|| AssetError::GenericError("Missing input image path".to_string()))?
            .clone();

        let output_dir = args
            .get_one::<String>("output-dir")
            .cloned()
            .unwrap_or_else(|| "extracted_assets".to_string());

        Ok(SvgCommand {
            input_file,
            output_dir,
            logger,
        })
    }
}

impl<'a> Command for SvgCommand<'a> {
    fn execute(&self) -> AssetResult<()> {
        if !Path::new(&self.input_file).exists() {
            return Err(AssetError::InputNotFound(self.input_file.clone()));
        }

        let (icon_svg, splash_svg) = SvgEmitter::emit(Path::new(&self.output_dir))?;

        self.logger.log("SVG emission complete:")?;
        self.logger.log(&format!("  - {}", icon_svg.display()))?;
        self.logger.log(&format!("  - {}", splash_svg.display()))?;
        info!("SVG-only run complete, output in '{}'", self.output_dir);
        Ok(())
    }
}
