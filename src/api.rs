use std::path::Path;

use crate::asset::AssetResult;
use crate::commands::{Command, ExtractCommand};
use crate::generator::generate_combined_image;
use crate::svg::SvgEmitter;
use crate::utils::logger::Logger;

/// Main interface to the assetkit library
pub struct AssetKit {
    logger: Logger,
}

impl AssetKit {
    /// Create a new AssetKit instance
    ///
    /// # Arguments
    /// * `log_file` - Optional path to log file, defaults to "assetkit.log"
    ///
    /// # Returns
    /// An AssetKit instance or an error if initialization fails
    pub fn new(log_file: Option<&str>) -> AssetResult<Self> {
        let log_path = log_file.unwrap_or("assetkit.log");
        let logger = Logger::new(log_path)?;
        Ok(AssetKit { logger })
    }

    /// Run the full extraction pipeline on a combined image
    ///
    /// Detects and crops the app icon and splash screen, then emits the
    /// two SVG documents. Detection misses are logged and skipped; only a
    /// missing input path or an I/O failure on the SVG step is an error.
    pub fn extract(&self, input_path: &str, output_dir: &str) -> AssetResult<()> {
        ExtractCommand::from_paths(input_path, output_dir, false, &self.logger).execute()
    }

    /// Emit only the two static SVG documents
    pub fn emit_svg(&self, output_dir: &str) -> AssetResult<()> {
        SvgEmitter::emit(Path::new(output_dir))?;
        Ok(())
    }

    /// Write the synthetic combined test image to `path`
    pub fn generate_test_image(&self, path: &str) -> AssetResult<()> {
        generate_combined_image(Path::new(path))
    }
}
