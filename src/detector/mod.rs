//! Region detection in the combined source image
//!
//! This module locates the app icon and splash screen regions using
//! generic edge detection and contour analysis: grayscale conversion,
//! Canny edge detection, external contour extraction and a handful of
//! fixed shape heuristics per asset kind.

mod contour;
mod locator;

#[cfg(test)]
mod tests;

pub use contour::{bounding_rect, contour_area, external_contours};
pub use locator::RegionLocator;
