//! Asset extraction command
//!
//! This module implements the full pipeline driver: locate and crop the
//! app icon, then the splash screen, then emit the static SVG documents.
//! The two detection attempts are independent, and a miss on one never
//! blocks the other or the SVG step.

use clap::ArgMatches;
use image::DynamicImage;
use log::{error, info, warn};
use std::path::{Path, PathBuf};

use crate::asset::{AssetError, AssetKind, AssetResult, AssetSpec};
use crate::commands::command_traits::Command;
use crate::detector::RegionLocator;
use crate::extractor::AssetCropper;
use crate::svg::SvgEmitter;
use crate::utils::logger::Logger;

/// Command for extracting both assets from a combined image
pub struct ExtractCommand<'a> {
    /// Path to the input image
    input_file: String,
    /// Directory the output files are written to
    output_dir: String,
    /// Skip detection and cropping, emit only the SVG documents
    svg_only: bool,
    /// Logger for recording operations
    logger: &'a Logger,
}

impl<'a> ExtractCommand<'a> {
    /// Create a new extract command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `logger` - Logger for recording operations
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> AssetResult<Self> {
        let input_file = args
            .get_one::<String>("input")
            .ok_or_else(|| AssetError::GenericError("Missing input image path".to_string()))?
            .clone();
        info!("Input file: {}", input_file);

        let output_dir = args
            .get_one::<String>("output-dir")
            .cloned()
            .unwrap_or_else(|| "extracted_assets".to_string());
        info!("Output directory: {}", output_dir);

        let svg_only = args.get_flag("svg-only");

        Ok(ExtractCommand {
            input_file,
            output_dir,
            svg_only,
            logger,
        })
    }

    /// Build directly from paths, for library callers
    pub fn from_paths(input_file: &str, output_dir: &str, svg_only: bool, logger: &'a Logger) -> Self {
        ExtractCommand {
            input_file: input_file.to_string(),
            output_dir: output_dir.to_string(),
            svg_only,
            logger,
        }
    }

    /// Locate and crop a single asset
    fn extract_asset(
        image: &DynamicImage,
        spec: &AssetSpec,
        output_dir: &Path,
    ) -> AssetResult<PathBuf> {
        let region = RegionLocator::locate(image, spec)?;
        AssetCropper::extract(image, region, spec, output_dir)
    }
}

impl<'a> Command for ExtractCommand<'a> {
    fn execute(&self) -> AssetResult<()> {
        info!("Processing image: {}", self.input_file);

        if !Path::new(&self.input_file).exists() {
            return Err(AssetError::InputNotFound(self.input_file.clone()));
        }

        let output_dir = Path::new(&self.output_dir);
        let mut written: Vec<PathBuf> = Vec::new();

        if !self.svg_only {
            match image::open(&self.input_file) {
                Ok(image) => {
                    // Icon first, then splash. Neither attempt shares state
                    // with the other, so a miss is contained to its asset.
                    for kind in [AssetKind::Icon, AssetKind::Splash] {
                        let spec = AssetSpec::for_kind(kind);
                        match Self::extract_asset(&image, &spec, output_dir) {
                            Ok(path) => written.push(path),
                            Err(e) => warn!("Skipping {}: {}", spec.name, e),
                        }
                    }
                }
                Err(e) => {
                    let err = AssetError::ImageDecodeFailed(format!(
                        "{}: {}",
                        self.input_file, e
                    ));
                    error!("{}", err);
                }
            }
        }

        let (icon_svg, splash_svg) = SvgEmitter::emit(output_dir)?;
        written.push(icon_svg);
        written.push(splash_svg);

        self.logger.log("Asset extraction complete:")?;
        for path in &written {
            self.logger.log(&format!("  - {}", path.display()))?;
        }
        info!(
            "Asset extraction complete, {} file(s) written to '{}'",
            written.len(),
            self.output_dir
        );
        Ok(())
    }
}
