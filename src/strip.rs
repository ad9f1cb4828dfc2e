//! Bottom-strip geometry and fill.
//!
//! The template carries its logo and URL in a band along the bottom edge. The
//! band is `floor(height * STRIP_FRACTION)` rows tall and spans the full width;
//! it is painted over with a solid cream that matches the template background.

use image::{DynamicImage, Rgb, Rgba};
use imageproc::drawing::{draw_filled_rect_mut, Canvas};
use imageproc::rect::Rect;

/// Share of the image height covered by the logo strip.
pub const STRIP_FRACTION: f64 = 0.08;

/// Cream/off-white used to paint over the strip.
pub const FILL_COLOR: [u8; 3] = [248, 246, 240];

/// Height in rows of the bottom strip for an image `height` pixels tall.
///
/// Truncates toward zero, so a height of 801 gives 64 (not 64.08 rounded).
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn strip_height(height: u32) -> u32 {
    (f64::from(height) * STRIP_FRACTION).floor() as u32
}

/// First row of the strip (inclusive) for an image `height` pixels tall.
#[must_use]
pub fn strip_top(height: u32) -> u32 {
    height - strip_height(height)
}

/// Return a copy of `image` with its bottom strip painted in [`FILL_COLOR`].
///
/// The source is left untouched. Images whose color type carries alpha are
/// worked on as RGBA so the untouched region keeps its transparency; the strip
/// itself is filled fully opaque. Everything else is worked on as RGB.
#[must_use]
pub fn erase_bottom_strip(image: &DynamicImage) -> DynamicImage {
    let [r, g, b] = FILL_COLOR;

    if image.color().has_alpha() {
        let mut copy = image.to_rgba8();
        fill_from_row(&mut copy, strip_top(image.height()), Rgba([r, g, b, u8::MAX]));
        DynamicImage::ImageRgba8(copy)
    } else {
        let mut copy = image.to_rgb8();
        fill_from_row(&mut copy, strip_top(image.height()), Rgb([r, g, b]));
        DynamicImage::ImageRgb8(copy)
    }
}

/// Overwrite every pixel in rows `top..height` with `fill`.
fn fill_from_row<C: Canvas>(canvas: &mut C, top: u32, fill: C::Pixel) {
    let (width, height) = canvas.dimensions();
    if top >= height || width == 0 {
        return;
    }
    let Ok(y) = i32::try_from(top) else {
        return;
    };
    draw_filled_rect_mut(canvas, Rect::at(0, y).of_size(width, height - top), fill);
}
