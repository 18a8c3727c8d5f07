//! Asset extraction from the source raster
//!
//! This module turns a detected region into a fixed-size output raster:
//! crop, exact resize, PNG write.

mod region;
mod cropper;

#[cfg(test)]
mod tests;

pub use region::Region;
pub use cropper::AssetCropper;
