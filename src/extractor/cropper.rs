//! Asset cropping and resizing
//!
//! Takes a detected region, crops it out of the source raster and resizes
//! the crop to the asset's fixed target resolution before writing it to
//! the output directory as PNG.

use std::fs;
use std::path::{Path, PathBuf};

use image::imageops::FilterType;
use image::DynamicImage;
use log::{debug, info};

use crate::asset::{AssetResult, AssetSpec};
use crate::extractor::Region;

/// Crops detected regions out of a source image at fixed target sizes
pub struct AssetCropper;

impl AssetCropper {
    /// Crop `region` out of `image` and write it to
    /// `output_dir/<asset name>.png` at the spec's target resolution.
    ///
    /// The resize is exact: the output always has the spec's dimensions,
    /// distorting the crop when its aspect ratio differs. The output
    /// directory is created if it does not exist yet.
    ///
    /// # Returns
    /// The path of the written PNG file
    pub fn extract(
        image: &DynamicImage,
        region: Region,
        spec: &AssetSpec,
        output_dir: &Path,
    ) -> AssetResult<PathBuf> {
        debug!("Cropping {} region: {:?}", spec.name, region);

        let cropped = image.crop_imm(region.x, region.y, region.width, region.height);
        let resized = cropped.resize_exact(
            spec.target_width,
            spec.target_height,
            FilterType::Triangle,
        );

        fs::create_dir_all(output_dir)?;

        let output_path = output_dir.join(spec.png_name());
        resized
            .save(&output_path)
            .map_err(|e| format!("Failed to save {}: {}", output_path.display(), e))?;

        info!(
            "{} extracted and saved to: {}",
            spec.name,
            output_path.display()
        );
        Ok(output_path)
    }
}
