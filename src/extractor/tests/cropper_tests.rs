//! Tests for the asset cropper

use image::{DynamicImage, Rgb, RgbImage};

use crate::asset::{AssetKind, AssetSpec};
use crate::extractor::{AssetCropper, Region};

fn source_image() -> DynamicImage {
    DynamicImage::ImageRgb8(RgbImage::from_pixel(640, 480, Rgb([40, 80, 120])))
}

#[test]
fn output_matches_icon_target_size() {
    let dir = tempfile::tempdir().unwrap();
    let spec = AssetSpec::for_kind(AssetKind::Icon);

    let path = AssetCropper::extract(
        &source_image(),
        Region::new(10, 10, 200, 150),
        &spec,
        dir.path(),
    )
    .unwrap();

    let written = image::open(&path).unwrap();
    assert_eq!((written.width(), written.height()), (1024, 1024));
}

#[test]
fn output_matches_splash_target_size_even_when_distorting() {
    let dir = tempfile::tempdir().unwrap();
    let spec = AssetSpec::for_kind(AssetKind::Splash);

    // A square crop still comes out at 400x800
    let path = AssetCropper::extract(
        &source_image(),
        Region::new(0, 0, 300, 300),
        &spec,
        dir.path(),
    )
    .unwrap();

    let written = image::open(&path).unwrap();
    assert_eq!((written.width(), written.height()), (400, 800));
}

#[test]
fn creates_missing_output_directory() {
    let dir = tempfile::tempdir().unwrap();
    let nested = dir.path().join("a").join("b");
    let spec = AssetSpec::for_kind(AssetKind::Icon);

    let path = AssetCropper::extract(
        &source_image(),
        Region::new(0, 0, 100, 100),
        &spec,
        &nested,
    )
    .unwrap();

    assert!(path.exists());
    assert_eq!(path.file_name().unwrap(), "app-icon.png");
}
