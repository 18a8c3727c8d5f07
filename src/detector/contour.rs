//! Contour helpers
//!
//! Thin layer over imageproc's contour extraction: external-contour
//! filtering, enclosed area and axis-aligned bounding rectangles. A
//! contour here is an ordered sequence of integer points describing a
//! closed boundary traced out of a binary edge map.

use imageproc::contours::{BorderType, Contour};
use imageproc::point::Point;

use crate::extractor::Region;

/// Filter a contour set down to external contours
///
/// Keeps only outer borders without a parent, matching the "external
/// retrieval" mode of classic contour finders: holes and nested borders
/// are ignored. Enumeration order is preserved.
pub fn external_contours(contours: Vec<Contour<i32>>) -> Vec<Contour<i32>> {
    contours
        .into_iter()
        .filter(|c| c.border_type == BorderType::Outer && c.parent.is_none())
        .collect()
}

/// Enclosed area of a contour in square pixels
///
/// Shoelace formula over the boundary points. Degenerate contours with
/// fewer than three points enclose no area.
pub fn contour_area(points: &[Point<i32>]) -> f64 {
    if points.len() < 3 {
        return 0.0;
    }

    let mut sum: i64 = 0;
    for i in 0..points.len() {
        let p = points[i];
        let q = points[(i + 1) % points.len()];
        sum += p.x as i64 * q.y as i64 - q.x as i64 * p.y as i64;
    }

    sum.abs() as f64 / 2.0
}

/// Smallest axis-aligned rectangle enclosing the contour points
///
/// Returns None for an empty point list. Point coordinates come from
/// image scanning and are never negative.
pub fn bounding_rect(points: &[Point<i32>]) -> Option<Region> {
    let first = points.first()?;
    let (mut min_x, mut min_y) = (first.x, first.y);
    let (mut max_x, mut max_y) = (first.x, first.y);

    for p in &points[1..] {
        min_x = min_x.min(p.x);
        min_y = min_y.min(p.y);
        max_x = max_x.max(p.x);
        max_y = max_y.max(p.y);
    }

    Some(Region::new(
        min_x as u32,
        min_y as u32,
        (max_x - min_x + 1) as u32,
        (max_y - min_y + 1) as u32,
    ))
}
