//! Synthetic combined-image generation
//!
//! Produces the 2048x1024 "combined" image the extraction pipeline is
//! built to pull apart: a large dark circle (the app icon) on the left
//! and a tall dark rectangle (the splash screen) on the right, both on a
//! white background and decorated with a star field and a small UFO.

mod test_image;

pub use test_image::generate_combined_image;
