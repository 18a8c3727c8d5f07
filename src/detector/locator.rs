//! Region locator
//!
//! Finds the bounding region of one asset inside the combined image. The
//! detection is a fixed heuristic chain, not a learned model: Canny edges
//! at thresholds 50/150, external contours, then per-asset filtering on
//! enclosed area and bounding-rectangle aspect ratio.

use image::DynamicImage;
use imageproc::contours::find_contours;
use imageproc::edges::canny;
use log::{debug, info, warn};

use crate::asset::{AssetError, AssetResult, AssetSpec};
use crate::asset::spec::{CANNY_HIGH_THRESHOLD, CANNY_LOW_THRESHOLD};
use crate::detector::contour::{bounding_rect, contour_area, external_contours};
use crate::extractor::Region;

/// Locates asset regions via edge detection and contour heuristics
pub struct RegionLocator;

impl RegionLocator {
    /// Locate the region for `spec` in `image`.
    ///
    /// Candidate selection iterates contours in the order the contour
    /// finder enumerates them and replaces the current champion only on a
    /// strictly greater area, so the first-discovered contour wins ties.
    /// The returned region is the winning contour's bounding rectangle
    /// expanded by the spec's padding and clamped to the image bounds.
    ///
    /// # Returns
    /// The padded region, or `DetectionFailed` when no contour survives
    /// the spec's filters
    pub fn locate(image: &DynamicImage, spec: &AssetSpec) -> AssetResult<Region> {
        let gray = image.to_luma8();
        let edges = canny(&gray, CANNY_LOW_THRESHOLD, CANNY_HIGH_THRESHOLD);

        let contours = external_contours(find_contours::<i32>(&edges));
        debug!(
            "Found {} external contours while locating {}",
            contours.len(),
            spec.name
        );

        let mut best: Option<(Region, f64)> = None;
        for contour in &contours {
            let area = contour_area(&contour.points);

            if let Some(min_area) = spec.min_area {
                if area <= min_area {
                    continue;
                }
            }

            let Some(rect) = bounding_rect(&contour.points) else {
                continue;
            };

            if let Some((min_ratio, max_ratio)) = spec.aspect_ratio_range {
                let aspect_ratio = if rect.height > 0 {
                    rect.width as f64 / rect.height as f64
                } else {
                    0.0
                };
                if aspect_ratio < min_ratio || aspect_ratio > max_ratio {
                    continue;
                }
                info!(
                    "Found rectangle: {}, {}, {}, {}, aspect_ratio: {:.2}, area: {}",
                    rect.x, rect.y, rect.width, rect.height, aspect_ratio, area
                );
            }

            match best {
                Some((_, best_area)) if area <= best_area => {}
                _ => best = Some((rect, area)),
            }
        }

        let Some((rect, area)) = best else {
            warn!("No contour passed the {} filters", spec.name);
            return Err(AssetError::DetectionFailed(spec.name));
        };

        let padded = rect.padded(spec.padding_px, image.width(), image.height());
        debug!(
            "Selected {} contour with area {:.0}, padded region {:?}",
            spec.name, area, padded
        );
        Ok(padded)
    }
}
