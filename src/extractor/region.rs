//! Region structure for defining the crop area
//!
//! This module defines the Region structure that specifies a rectangular
//! area of an image for extraction. The coordinates are in pixels and
//! follow the typical image coordinate system where (0,0) is the top-left
//! corner of the image.

/// Region for asset extraction (in pixel coordinates)
///
/// Represents a rectangular area defined by its top-left corner coordinates
/// and dimensions. This is what the region locator hands to the cropper.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    /// X-coordinate of the top-left corner (pixels from left)
    pub x: u32,

    /// Y-coordinate of the top-left corner (pixels from top)
    pub y: u32,

    /// Width of the region in pixels
    pub width: u32,

    /// Height of the region in pixels
    pub height: u32,
}

impl Region {
    /// Create a new region
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Region { x, y, width, height }
    }

    /// Get the rightmost X coordinate (exclusive)
    pub fn end_x(&self) -> u32 {
        self.x + self.width
    }

    /// Get the bottommost Y coordinate (exclusive)
    pub fn end_y(&self) -> u32 {
        self.y + self.height
    }

    /// Expand the region by a fixed margin on all sides, clamped to the
    /// image bounds.
    ///
    /// The origin moves up-left by `padding` but never below zero, then the
    /// size grows by `2 * padding` but never past the image edge measured
    /// from the already clamped origin. The result always satisfies
    /// `x + width <= img_width` and `y + height <= img_height`.
    pub fn padded(&self, padding: u32, img_width: u32, img_height: u32) -> Region {
        let x = self.x.saturating_sub(padding);
        let y = self.y.saturating_sub(padding);
        let width = (self.width + 2 * padding).min(img_width.saturating_sub(x));
        let height = (self.height + 2 * padding).min(img_height.saturating_sub(y));
        Region { x, y, width, height }
    }

    /// Check whether this region fully contains another
    pub fn contains(&self, other: &Region) -> bool {
        self.x <= other.x
            && self.y <= other.y
            && self.end_x() >= other.end_x()
            && self.end_y() >= other.end_y()
    }
}
