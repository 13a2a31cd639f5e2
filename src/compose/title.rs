//! Title font discovery and text rasterisation onto the canvas

use crate::io::configuration::DEFAULT_FONT_CANDIDATES;
use crate::io::error::{CollageError, Result};
use ab_glyph::{Font, FontVec, PxScale, ScaleFont, point};
use image::{Rgb, RgbImage};
use std::path::{Path, PathBuf};

/// A loaded outline font used for the collage title
pub struct TitleFont {
    font: FontVec,
    path: PathBuf,
}

impl std::fmt::Debug for TitleFont {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TitleFont").field("path", &self.path).finish()
    }
}

impl TitleFont {
    /// Load a TrueType or OpenType font file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or does not parse as a font
    pub fn load(path: &Path) -> Result<Self> {
        let data = std::fs::read(path).map_err(|e| CollageError::FontLoad {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        let font = FontVec::try_from_vec(data).map_err(|e| CollageError::FontLoad {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            font,
            path: path.to_path_buf(),
        })
    }

    /// Load `explicit` if given, otherwise the first loadable well-known font
    ///
    /// # Errors
    ///
    /// Returns the failure for `explicit`, or for the last candidate when none load
    pub fn discover(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        let mut last_error = None;
        for candidate in DEFAULT_FONT_CANDIDATES {
            match Self::load(Path::new(candidate)) {
                Ok(font) => return Ok(font),
                Err(e) => last_error = Some(e),
            }
        }

        Err(last_error.unwrap_or_else(|| CollageError::FontLoad {
            path: PathBuf::new(),
            reason: "no font candidates configured".to_string(),
        }))
    }

    /// File the font was read from
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Scale at which one em spans `size` pixels
    pub fn scale_for_em(&self, size: f32) -> PxScale {
        match self.font.units_per_em() {
            Some(units_per_em) if units_per_em > 0.0 => {
                PxScale::from(size * self.font.height_unscaled() / units_per_em)
            }
            _ => PxScale::from(size),
        }
    }

    /// Draw single-line `text` with the ascender line at `position.1`
    ///
    /// Glyph coverage is blended over the existing pixels; anything outside the
    /// canvas is clipped.
    pub fn render(
        &self,
        canvas: &mut RgbImage,
        text: &str,
        position: (i32, i32),
        size: f32,
        color: [u8; 3],
    ) {
        let scale = self.scale_for_em(size);
        let scaled = self.font.as_scaled(scale);
        let baseline = position.1 as f32 + scaled.ascent();
        let mut caret = position.0 as f32;
        let mut previous = None;

        for ch in text.chars() {
            let glyph_id = self.font.glyph_id(ch);
            if let Some(prev) = previous {
                caret += scaled.kern(prev, glyph_id);
            }

            let glyph = glyph_id.with_scale_and_position(scale, point(caret, baseline));
            if let Some(outlined) = self.font.outline_glyph(glyph) {
                let bounds = outlined.px_bounds();
                outlined.draw(|gx, gy, coverage| {
                    let x = bounds.min.x as i32 + gx as i32;
                    let y = bounds.min.y as i32 + gy as i32;
                    blend_pixel(canvas, x, y, color, coverage);
                });
            }

            caret += scaled.h_advance(glyph_id);
            previous = Some(glyph_id);
        }
    }
}

fn blend_pixel(canvas: &mut RgbImage, x: i32, y: i32, color: [u8; 3], coverage: f32) {
    let (Ok(x), Ok(y)) = (u32::try_from(x), u32::try_from(y)) else {
        return;
    };
    let Some(pixel) = canvas.get_pixel_mut_checked(x, y) else {
        return;
    };

    let alpha = coverage.clamp(0.0, 1.0);
    let Rgb(current) = *pixel;
    let mut blended = current;
    for ((out, dst), src) in blended.iter_mut().zip(current).zip(color) {
        *out = f32::from(src)
            .mul_add(alpha, f32::from(dst) * (1.0 - alpha))
            .round()
            .clamp(0.0, 255.0) as u8;
    }
    *pixel = Rgb(blended);
}
