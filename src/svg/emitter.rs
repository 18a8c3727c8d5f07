//! SVG file emission

use std::fs;
use std::path::{Path, PathBuf};

use log::info;

use crate::asset::{AssetKind, AssetResult, AssetSpec};
use crate::svg::templates::{APP_ICON_SVG, SPLASH_SCREEN_SVG};

/// Writes the two fixed SVG documents to an output directory
pub struct SvgEmitter;

impl SvgEmitter {
    /// Write `app-icon.svg` and `splash-screen.svg` under `output_dir`,
    /// creating the directory if needed. Existing files are overwritten.
    ///
    /// # Returns
    /// The paths of the two written files, icon first
    pub fn emit(output_dir: &Path) -> AssetResult<(PathBuf, PathBuf)> {
        fs::create_dir_all(output_dir)?;

        let icon_path = output_dir.join(AssetSpec::for_kind(AssetKind::Icon).svg_name());
        let splash_path = output_dir.join(AssetSpec::for_kind(AssetKind::Splash).svg_name());

        fs::write(&icon_path, APP_ICON_SVG)?;
        fs::write(&splash_path, SPLASH_SCREEN_SVG)?;

        info!("SVG files created:");
        info!("  - {}", icon_path.display());
        info!("  - {}", splash_path.display());

        Ok((icon_path, splash_path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quick_xml::events::Event;
    use quick_xml::Reader;

    fn assert_well_formed(xml: &str) {
        let mut reader = Reader::from_str(xml);
        let mut depth = 0usize;
        loop {
            match reader.read_event() {
                Ok(Event::Start(_)) => depth += 1,
                Ok(Event::End(_)) => {
                    assert!(depth > 0, "closing tag without opener");
                    depth -= 1;
                }
                Ok(Event::Eof) => break,
                Err(e) => panic!("XML parse error: {}", e),
                Ok(_) => {}
            }
        }
        assert_eq!(depth, 0, "unbalanced tags");
    }

    #[test]
    fn templates_are_well_formed_xml() {
        assert_well_formed(APP_ICON_SVG);
        assert_well_formed(SPLASH_SCREEN_SVG);
    }

    #[test]
    fn emit_writes_both_files() {
        let dir = tempfile::tempdir().unwrap();
        let (icon, splash) = SvgEmitter::emit(dir.path()).unwrap();

        assert_eq!(std::fs::read_to_string(&icon).unwrap(), APP_ICON_SVG);
        assert_eq!(std::fs::read_to_string(&splash).unwrap(), SPLASH_SCREEN_SVG);
    }

    #[test]
    fn emit_is_byte_identical_across_runs() {
        let dir = tempfile::tempdir().unwrap();
        let (icon, _) = SvgEmitter::emit(dir.path()).unwrap();
        let first = std::fs::read(&icon).unwrap();

        let (icon, _) = SvgEmitter::emit(dir.path()).unwrap();
        assert_eq!(std::fs::read(&icon).unwrap(), first);
    }
}
