//! Tests for the region locator heuristics

use crate::asset::{AssetError, AssetKind, AssetSpec};
use crate::detector::RegionLocator;
use crate::extractor::Region;

use super::test_utils::{add_ellipse, add_rect, blank_canvas, into_dynamic};

#[test]
fn icon_locator_contains_single_ellipse() {
    let mut canvas = blank_canvas(800, 600);
    add_ellipse(&mut canvas, 400, 300, 150, 100);
    let image = into_dynamic(canvas);

    let spec = AssetSpec::for_kind(AssetKind::Icon);
    let region = RegionLocator::locate(&image, &spec).unwrap();

    // Padded region must contain the ellipse's bounding rectangle
    let ellipse_bbox = Region::new(250, 200, 300, 200);
    assert!(region.contains(&ellipse_bbox), "{:?} should contain {:?}", region, ellipse_bbox);
}

#[test]
fn icon_locator_picks_largest_shape() {
    let mut canvas = blank_canvas(1200, 600);
    add_ellipse(&mut canvas, 300, 300, 200, 200);
    add_ellipse(&mut canvas, 1000, 300, 40, 40);
    let image = into_dynamic(canvas);

    let spec = AssetSpec::for_kind(AssetKind::Icon);
    let region = RegionLocator::locate(&image, &spec).unwrap();

    let big_bbox = Region::new(100, 100, 400, 400);
    assert!(region.contains(&big_bbox));
    // The small ellipse at x=960.. lies well outside the selected region
    assert!(region.end_x() < 900);
}

#[test]
fn icon_locator_fails_on_blank_image() {
    let image = into_dynamic(blank_canvas(400, 400));

    let spec = AssetSpec::for_kind(AssetKind::Icon);
    match RegionLocator::locate(&image, &spec) {
        Err(AssetError::DetectionFailed(name)) => assert_eq!(name, "app-icon"),
        other => panic!("expected DetectionFailed, got {:?}", other),
    }
}

#[test]
fn splash_locator_picks_tall_rectangle() {
    let mut canvas = blank_canvas(1000, 800);
    // A square (aspect 1.0, outside the band) and a tall rectangle
    // (aspect 100/300 = 0.33, inside the band)
    add_rect(&mut canvas, 100, 200, 200, 200);
    add_rect(&mut canvas, 600, 200, 100, 300);
    let image = into_dynamic(canvas);

    let spec = AssetSpec::for_kind(AssetKind::Splash);
    let region = RegionLocator::locate(&image, &spec).unwrap();

    let tall_bbox = Region::new(600, 200, 100, 300);
    assert!(region.contains(&tall_bbox), "{:?} should contain {:?}", region, tall_bbox);
    // And it must be the tall rectangle, not the square: the region stays
    // within the padded neighbourhood of the tall rect
    assert!(region.x >= 600 - spec.padding_px - 4);
    assert!(region.width <= 100 + 2 * spec.padding_px + 8);
    assert!(region.height <= 300 + 2 * spec.padding_px + 8);
}

#[test]
fn splash_locator_rejects_wrong_aspect() {
    let mut canvas = blank_canvas(600, 600);
    add_rect(&mut canvas, 100, 100, 300, 300);
    let image = into_dynamic(canvas);

    let spec = AssetSpec::for_kind(AssetKind::Splash);
    assert!(matches!(
        RegionLocator::locate(&image, &spec),
        Err(AssetError::DetectionFailed("splash-screen"))
    ));
}

#[test]
fn splash_locator_rejects_small_contours() {
    let mut canvas = blank_canvas(600, 600);
    // Aspect 0.5 but only ~450 px^2 of enclosed area
    add_rect(&mut canvas, 100, 100, 15, 30);
    let image = into_dynamic(canvas);

    let spec = AssetSpec::for_kind(AssetKind::Splash);
    assert!(matches!(
        RegionLocator::locate(&image, &spec),
        Err(AssetError::DetectionFailed(_))
    ));
}

#[test]
fn padded_region_is_clamped_to_image_bounds() {
    let mut canvas = blank_canvas(300, 300);
    // Shape touching the top-left corner area, padding would go negative
    add_ellipse(&mut canvas, 60, 60, 50, 50);
    let image = into_dynamic(canvas);

    let spec = AssetSpec::for_kind(AssetKind::Icon);
    let region = RegionLocator::locate(&image, &spec).unwrap();

    assert!(region.end_x() <= 300);
    assert!(region.end_y() <= 300);
}
