//! Rounded-corner masking for app icons: a filled rounded rectangle
//! spanning the full canvas becomes the image's new alpha channel, with
//! the corner radius fixed at a fifth of the shorter side.

use image::{GrayImage, Luma, RgbaImage};
use imageproc::drawing::{draw_filled_circle_mut, draw_filled_rect_mut};
use imageproc::rect::Rect;

/// Fraction of the shorter dimension used as the corner radius.
pub const RADIUS_RATIO: f64 = 0.2;

const OPAQUE: Luma<u8> = Luma([255]);

/// Corner radius for a canvas of the given dimensions:
/// `floor(0.2 * min(width, height))`.
pub fn corner_radius(width: u32, height: u32) -> u32 {
    (f64::from(width.min(height)) * RADIUS_RATIO).floor() as u32
}

/// Rasterizes a filled rounded rectangle covering the whole canvas into
/// a fresh single-channel mask: 255 inside the shape, 0 outside.
///
/// The shape is the union of two axis-aligned rectangles (the cross
/// between the corner circles) and one filled circle per corner. A zero
/// radius degenerates to a fully opaque mask; radii larger than half
/// the shorter side are clamped to it.
pub fn rounded_rect_mask(width: u32, height: u32, radius: u32) -> GrayImage {
    let mut mask = GrayImage::new(width, height);
    if width == 0 || height == 0 {
        return mask;
    }

    let radius = radius.min(width.min(height) / 2);
    if radius == 0 {
        draw_filled_rect_mut(&mut mask, Rect::at(0, 0).of_size(width, height), OPAQUE);
        return mask;
    }

    let r = radius as i32;

    if width > 2 * radius {
        draw_filled_rect_mut(
            &mut mask,
            Rect::at(r, 0).of_size(width - 2 * radius, height),
            OPAQUE,
        );
    }
    if height > 2 * radius {
        draw_filled_rect_mut(
            &mut mask,
            Rect::at(0, r).of_size(width, height - 2 * radius),
            OPAQUE,
        );
    }

    let right = width as i32 - 1 - r;
    let bottom = height as i32 - 1 - r;
    for center in [(r, r), (right, r), (r, bottom), (right, bottom)] {
        draw_filled_circle_mut(&mut mask, center, r, OPAQUE);
    }

    mask
}

/// Returns a copy of `img` with its alpha channel replaced wholesale by
/// a full-canvas rounded-rectangle mask. Color channels pass through
/// untouched; any alpha the source carried is discarded.
pub fn round_corners(img: &RgbaImage) -> RgbaImage {
    let (width, height) = img.dimensions();
    let mask = rounded_rect_mask(width, height, corner_radius(width, height));

    let mut out = img.clone();
    for (x, y, pixel) in out.enumerate_pixels_mut() {
        pixel[3] = mask.get_pixel(x, y)[0];
    }
    out
}
