//! Core asset definitions
//!
//! This module holds the error types shared across the crate and the
//! static specifications describing each extractable asset kind.

pub mod errors;
pub mod spec;

pub use errors::{AssetError, AssetResult};
pub use spec::{AssetKind, AssetSpec, ASSET_SPECS, CANNY_LOW_THRESHOLD, CANNY_HIGH_THRESHOLD};
