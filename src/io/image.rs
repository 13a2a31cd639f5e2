//! Output format resolution and collage export

use crate::io::configuration::OUTPUT_STEM;
use crate::io::error::{CollageError, Result};
use image::{DynamicImage, ImageFormat};
use std::io::Cursor;
use std::path::{Path, PathBuf};

/// Map a user-supplied format name onto an encoder
///
/// Matching ignores case and accepts the usual aliases (`jpg`/`jpeg`,
/// `tif`/`tiff`).
///
/// # Errors
///
/// Returns an error if the name does not denote any known image format
pub fn resolve_format(format: &str) -> Result<ImageFormat> {
    ImageFormat::from_extension(format.trim().to_ascii_lowercase())
        .ok_or_else(|| CollageError::UnsupportedFormat {
            format: format.to_string(),
        })
}

/// `collage.<format>` inside `output_dir`, with the format lower-cased
pub fn output_path(output_dir: &Path, format: &str) -> PathBuf {
    output_dir.join(format!("{OUTPUT_STEM}.{}", format.trim().to_lowercase()))
}

/// Encode `image` with `format` and write it to `collage.<format>`
///
/// Encoding happens in memory first so a rejected image never leaves a
/// partial file behind. An existing file of the same name is overwritten.
///
/// # Errors
///
/// Returns an error if:
/// - The format is unknown
/// - The encoder rejects the image or cannot write the format
/// - The output directory cannot be created or the file cannot be written
pub fn save_collage(image: &DynamicImage, format: &str, output_dir: &Path) -> Result<PathBuf> {
    let image_format = resolve_format(format)?;
    let path = output_path(output_dir, format);

    let mut encoded = Cursor::new(Vec::new());
    image
        .write_to(&mut encoded, image_format)
        .map_err(|e| CollageError::ImageExport {
            path: path.clone(),
            source: e,
        })?;

    std::fs::create_dir_all(output_dir).map_err(|e| CollageError::FileSystem {
        path: output_dir.to_path_buf(),
        operation: "create directory",
        source: e,
    })?;

    std::fs::write(&path, encoded.into_inner()).map_err(|e| CollageError::FileSystem {
        path: path.clone(),
        operation: "write collage",
        source: e,
    })?;

    Ok(path)
}
