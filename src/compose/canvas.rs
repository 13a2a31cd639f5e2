//! Pixel-level canvas operations: blank fill, paste and rectangle outlines

use crate::io::configuration::BACKGROUND_COLOR;
use crate::layout::{CanvasSize, Outline};
use image::{Rgb, RgbImage, imageops};
use imageproc::drawing::draw_hollow_rect_mut;
use imageproc::rect::Rect;

/// White canvas of exactly `size`
pub fn blank_canvas(size: CanvasSize) -> RgbImage {
    RgbImage::from_pixel(size.width, size.height, Rgb(BACKGROUND_COLOR))
}

/// Copy `tile` onto `canvas` with its top-left corner at `origin`
///
/// Pixels falling outside the canvas are discarded.
pub fn paste(canvas: &mut RgbImage, tile: &RgbImage, origin: (u32, u32)) {
    imageops::replace(canvas, tile, i64::from(origin.0), i64::from(origin.1));
}

/// Draw a rectangle outline `width` pixels thick, growing inwards from the
/// inclusive corners of `outline`
///
/// The stroke is made of `width` nested hollow rectangles. Parts beyond the
/// canvas are clipped.
pub fn draw_outline(canvas: &mut RgbImage, outline: &Outline, width: u32, color: [u8; 3]) {
    if outline.right < outline.left || outline.bottom < outline.top {
        return;
    }

    let (canvas_width, canvas_height) = canvas.dimensions();
    if outline.left >= canvas_width || outline.top >= canvas_height {
        return;
    }

    // Off-canvas edges stay off-canvas for every inset
    let right = outline.right.min(canvas_width.saturating_add(width));
    let bottom = outline.bottom.min(canvas_height.saturating_add(width));
    let (Ok(left), Ok(top), Ok(_), Ok(_)) = (
        i32::try_from(outline.left),
        i32::try_from(outline.top),
        i32::try_from(right),
        i32::try_from(bottom),
    ) else {
        return;
    };

    let span_width = right - outline.left + 1;
    let span_height = bottom - outline.top + 1;
    for inset in 0..width {
        let Ok(offset) = i32::try_from(inset) else {
            break;
        };
        let rect_width = span_width.saturating_sub(2 * inset);
        let rect_height = span_height.saturating_sub(2 * inset);
        if rect_width == 0 || rect_height == 0 {
            break;
        }

        let rect = Rect::at(left + offset, top + offset).of_size(rect_width, rect_height);
        draw_hollow_rect_mut(canvas, rect, Rgb(color));
    }
}
