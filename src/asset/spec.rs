//! Static asset specifications
//!
//! Each extractable asset kind carries a fixed specification: output file
//! name, target resolution and the detection constants that pick its
//! contour out of the combined image. The values mirror the Expo asset
//! conventions the tool was built around and are not runtime-configurable.

use std::collections::HashMap;
use lazy_static::lazy_static;

/// Low threshold for Canny edge detection
pub const CANNY_LOW_THRESHOLD: f32 = 50.0;

/// High threshold for Canny edge detection
pub const CANNY_HIGH_THRESHOLD: f32 = 150.0;

/// The two asset kinds this tool knows how to extract
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetKind {
    /// Circular app icon, largest contour in the image
    Icon,
    /// Tall rectangular splash screen
    Splash,
}

/// Fixed specification for one asset kind
#[derive(Debug, Clone, Copy)]
pub struct AssetSpec {
    /// Which asset this spec describes
    pub kind: AssetKind,
    /// Output file stem, e.g. "app-icon" -> app-icon.png / app-icon.svg
    pub name: &'static str,
    /// Output raster width in pixels
    pub target_width: u32,
    /// Output raster height in pixels
    pub target_height: u32,
    /// Inclusive width/height ratio band a contour's bounding rectangle
    /// must fall in, or None for no aspect filtering.
    ///
    /// The splash band (0.3..=0.8) is a deliberately narrow heuristic
    /// tuned for a tall rectangle roughly half as wide as it is high.
    /// Differently proportioned splash regions fail detection.
    pub aspect_ratio_range: Option<(f64, f64)>,
    /// Minimum enclosed contour area in square pixels, or None
    pub min_area: Option<f64>,
    /// Margin added around the detected bounding rectangle before
    /// cropping, to avoid clipping anti-aliased edges
    pub padding_px: u32,
}

lazy_static! {
    /// Registry of specifications, one per asset kind
    pub static ref ASSET_SPECS: HashMap<AssetKind, AssetSpec> = {
        let mut specs = HashMap::new();
        specs.insert(AssetKind::Icon, AssetSpec {
            kind: AssetKind::Icon,
            name: "app-icon",
            target_width: 1024,
            target_height: 1024,
            aspect_ratio_range: None,
            min_area: None,
            padding_px: 20,
        });
        specs.insert(AssetKind::Splash, AssetSpec {
            kind: AssetKind::Splash,
            name: "splash-screen",
            target_width: 400,
            target_height: 800,
            aspect_ratio_range: Some((0.3, 0.8)),
            min_area: Some(1000.0),
            padding_px: 20,
        });
        specs
    };
}

impl AssetSpec {
    /// Look up the spec for an asset kind
    pub fn for_kind(kind: AssetKind) -> AssetSpec {
        ASSET_SPECS[&kind]
    }

    /// Output PNG file name for this asset
    pub fn png_name(&self) -> String {
        format!("{}.png", self.name)
    }

    /// Output SVG file name for this asset
    pub fn svg_name(&self) -> String {
        format!("{}.svg", self.name)
    }
}
