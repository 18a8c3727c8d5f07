//! Combined test-image drawing

use std::path::Path;

use image::{Rgb, RgbImage};
use imageproc::drawing::{draw_filled_circle_mut, draw_filled_ellipse_mut, draw_filled_rect_mut};
use imageproc::rect::Rect;
use log::info;

use crate::asset::AssetResult;

const CANVAS_WIDTH: u32 = 2048;
const CANVAS_HEIGHT: u32 = 1024;

const ICON_SIZE: i32 = 800;
const ICON_X: i32 = 100;

const SPLASH_WIDTH: i32 = 600;
const SPLASH_HEIGHT: i32 = 800;

const BACKGROUND: Rgb<u8> = Rgb([255, 255, 255]);
const SPACE_BLUE: Rgb<u8> = Rgb([10, 10, 26]);
const UFO_BODY: Rgb<u8> = Rgb([44, 44, 44]);
const UFO_DOME: Rgb<u8> = Rgb([135, 206, 235]);
const UFO_GLOW: Rgb<u8> = Rgb([255, 107, 53]);
const STAR_WHITE: Rgb<u8> = Rgb([255, 255, 255]);

/// Draw the combined image and save it as PNG at `path`.
///
/// Star placement uses fixed modular arithmetic, so repeated runs produce
/// identical images.
pub fn generate_combined_image(path: &Path) -> AssetResult<()> {
    let mut image = RgbImage::from_pixel(CANVAS_WIDTH, CANVAS_HEIGHT, BACKGROUND);

    draw_icon(&mut image);
    draw_splash(&mut image);

    image
        .save(path)
        .map_err(|e| format!("Failed to save {}: {}", path.display(), e))?;
    info!("Combined test image created: {}", path.display());
    Ok(())
}

/// The circular app icon on the left: dark disc, star field, UFO
fn draw_icon(image: &mut RgbImage) {
    let icon_y = (CANVAS_HEIGHT as i32 - ICON_SIZE) / 2;
    let center = (ICON_X + ICON_SIZE / 2, icon_y + ICON_SIZE / 2);

    draw_filled_circle_mut(image, center, ICON_SIZE / 2, SPACE_BLUE);

    for i in 0..20i32 {
        let x = ICON_X + 50 + (i * 35) % (ICON_SIZE - 100);
        let y = icon_y + 50 + (i * 25) % (ICON_SIZE - 100);
        draw_filled_circle_mut(image, (x, y), 2, STAR_WHITE);
    }

    let (ufo_x, ufo_y) = (center.0, center.1 - 50);
    draw_filled_ellipse_mut(image, (ufo_x, ufo_y), 60, 20, UFO_BODY);
    draw_filled_ellipse_mut(image, (ufo_x, ufo_y - 20), 40, 15, UFO_DOME);
    draw_filled_ellipse_mut(image, (ufo_x, ufo_y + 35), 30, 15, UFO_GLOW);
}

/// The tall rectangular splash screen on the right
fn draw_splash(image: &mut RgbImage) {
    let splash_x = CANVAS_WIDTH as i32 - SPLASH_WIDTH - 100;
    let splash_y = (CANVAS_HEIGHT as i32 - SPLASH_HEIGHT) / 2;

    draw_filled_rect_mut(
        image,
        Rect::at(splash_x, splash_y).of_size(SPLASH_WIDTH as u32, SPLASH_HEIGHT as u32),
        SPACE_BLUE,
    );

    for i in 0..15i32 {
        let x = splash_x + 30 + (i * 40) % (SPLASH_WIDTH - 60);
        let y = splash_y + 30 + (i * 50) % (SPLASH_HEIGHT - 60);
        draw_filled_circle_mut(image, (x, y), 1, STAR_WHITE);
    }

    let ufo_x = splash_x + SPLASH_WIDTH / 2;
    let ufo_y = splash_y + SPLASH_HEIGHT / 2 + 50;
    draw_filled_ellipse_mut(image, (ufo_x, ufo_y), 40, 15, UFO_BODY);
    draw_filled_ellipse_mut(image, (ufo_x, ufo_y - 15), 25, 10, UFO_DOME);
    draw_filled_ellipse_mut(image, (ufo_x, ufo_y + 25), 20, 10, UFO_GLOW);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_image_has_expected_dimensions() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("combined.png");
        generate_combined_image(&path).unwrap();

        let img = image::open(&path).unwrap();
        assert_eq!(img.width(), CANVAS_WIDTH);
        assert_eq!(img.height(), CANVAS_HEIGHT);
    }

    #[test]
    fn generation_is_deterministic() {
        let dir = tempfile::tempdir().unwrap();
        let a = dir.path().join("a.png");
        let b = dir.path().join("b.png");
        generate_combined_image(&a).unwrap();
        generate_combined_image(&b).unwrap();

        assert_eq!(std::fs::read(&a).unwrap(), std::fs::read(&b).unwrap());
    }
}
