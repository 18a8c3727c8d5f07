//! Tests for region padding and clamping

use crate::extractor::Region;

#[test]
fn padding_expands_on_all_sides() {
    let region = Region::new(100, 100, 50, 50);
    let padded = region.padded(20, 1000, 1000);
    assert_eq!(padded, Region::new(80, 80, 90, 90));
}

#[test]
fn padding_clamps_at_origin() {
    let region = Region::new(5, 5, 50, 50);
    let padded = region.padded(20, 1000, 1000);
    // Origin clamps to zero, the size still grows by the full 2 * padding
    assert_eq!(padded, Region::new(0, 0, 90, 90));
}

#[test]
fn padding_clamps_at_far_edge() {
    let region = Region::new(60, 60, 50, 50);
    let padded = region.padded(20, 120, 130);
    assert_eq!(padded, Region::new(40, 40, 80, 90));
    assert!(padded.end_x() <= 120);
    assert!(padded.end_y() <= 130);
}

#[test]
fn padded_region_never_exceeds_image() {
    let region = Region::new(0, 0, 100, 100);
    let padded = region.padded(20, 100, 100);
    assert_eq!(padded, Region::new(0, 0, 100, 100));
}

#[test]
fn contains_is_inclusive() {
    let outer = Region::new(10, 10, 100, 100);
    assert!(outer.contains(&Region::new(10, 10, 100, 100)));
    assert!(outer.contains(&Region::new(20, 20, 50, 50)));
    assert!(!outer.contains(&Region::new(5, 20, 50, 50)));
    assert!(!outer.contains(&Region::new(20, 20, 100, 50)));
}
