//! Custom error types for asset extraction

use std::fmt;
use std::io;

/// Asset-pipeline error types
#[derive(Debug)]
pub enum AssetError {
    /// I/O error
    IoError(io::Error),
    /// Input image path does not exist
    InputNotFound(String),
    /// Input raster could not be loaded or parsed
    ImageDecodeFailed(String),
    /// No contour satisfied the asset's detection filter
    DetectionFailed(&'static str),
    /// Generic error with message
    GenericError(String),
}

impl fmt::Display for AssetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssetError::IoError(e) => write!(f, "I/O error: {}", e),
            AssetError::InputNotFound(path) => write!(f, "Input image not found: {}", path),
            AssetError::ImageDecodeFailed(msg) => write!(f, "Could not decode image: {}", msg),
            AssetError::DetectionFailed(name) => write!(f, "Could not detect {} region", name),
            AssetError::GenericError(msg) => write!(f, "Asset error: {}", msg),
        }
    }
}

impl std::error::Error for AssetError {}

impl From<io::Error> for AssetError {
    fn from(error: io::Error) -> Self {
        AssetError::IoError(error)
    }
}

impl From<String> for AssetError {
    fn from(msg: String) -> Self {
        AssetError::GenericError(msg)
    }
}

/// Result type for asset operations
pub type AssetResult<T> = Result<T, AssetError>;
