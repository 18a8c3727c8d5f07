//! Static SVG asset emission
//!
//! The vector versions of the two assets are fixed hand-authored
//! documents, compiled in as constants and written verbatim. They are a
//! redrawn rendition of the assets, not a trace of the input image, so
//! emission is independent of the detection pipeline.

mod templates;
mod emitter;

pub use emitter::SvgEmitter;
pub use templates::{APP_ICON_SVG, SPLASH_SCREEN_SVG};
