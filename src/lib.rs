pub mod asset;
pub mod detector;
pub mod extractor;
pub mod svg;
pub mod generator;
pub mod commands;
pub mod utils;
pub mod api;

pub use crate::api::AssetKit;

pub use asset::{AssetError, AssetKind, AssetResult, AssetSpec};
pub use detector::RegionLocator;
pub use extractor::{AssetCropper, Region};
pub use svg::SvgEmitter;
