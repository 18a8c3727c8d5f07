//! Shared fixtures for detection tests

use image::{DynamicImage, Rgb, RgbImage};
use imageproc::drawing::{draw_filled_ellipse_mut, draw_filled_rect_mut};
use imageproc::rect::Rect;

pub const DARK: Rgb<u8> = Rgb([10, 10, 26]);
pub const WHITE: Rgb<u8> = Rgb([255, 255, 255]);

/// A white canvas of the given size
pub fn blank_canvas(width: u32, height: u32) -> RgbImage {
    RgbImage::from_pixel(width, height, WHITE)
}

/// Draw a dark filled ellipse centered at `(cx, cy)` with the given radii
pub fn add_ellipse(canvas: &mut RgbImage, cx: i32, cy: i32, rx: i32, ry: i32) {
    draw_filled_ellipse_mut(canvas, (cx, cy), rx, ry, DARK);
}

/// Draw a dark filled rectangle with top-left `(x, y)`
pub fn add_rect(canvas: &mut RgbImage, x: i32, y: i32, width: u32, height: u32) {
    draw_filled_rect_mut(canvas, Rect::at(x, y).of_size(width, height), DARK);
}

pub fn into_dynamic(canvas: RgbImage) -> DynamicImage {
    DynamicImage::ImageRgb8(canvas)
}
