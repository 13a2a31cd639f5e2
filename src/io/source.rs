//! Discovery and decoding of collage source images

use crate::io::configuration::SOURCE_EXTENSIONS;
use crate::io::error::{CollageError, Result};
use crate::io::progress::LoadProgress;
use image::{DynamicImage, ImageError, ImageReader};
use log::{debug, warn};
use std::path::{Path, PathBuf};

/// Supplies decoded images for a directory, in placement order
pub trait ImageSource {
    /// Decode the source images found in `directory`
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be enumerated
    fn load(&self, directory: &Path) -> Result<Vec<DynamicImage>>;
}

/// Whether the file name of `path` ends in `.jpg`, `.jpeg` or `.png`, ignoring case
///
/// Dot files such as `.png` qualify; a bare `xpng` does not.
pub fn is_source_image(path: &Path) -> bool {
    let Some(name) = path.file_name() else {
        return false;
    };
    let name = name.to_string_lossy().to_lowercase();
    SOURCE_EXTENSIONS
        .iter()
        .any(|accepted| name.ends_with(&format!(".{accepted}")))
}

/// Decode `path`, detecting the format from the file contents
///
/// The extension is only used when the contents match no known format.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or decoded
pub fn decode_source(path: &Path) -> Result<DynamicImage> {
    let load_error = |source: ImageError| CollageError::ImageLoad {
        path: path.to_path_buf(),
        source,
    };

    ImageReader::open(path)
        .and_then(ImageReader::with_guessed_format)
        .map_err(|e| load_error(ImageError::IoError(e)))?
        .decode()
        .map_err(load_error)
}

/// Regular files in `directory` with an accepted extension, sorted by name
///
/// # Errors
///
/// Returns an error if the directory cannot be read
pub fn list_source_files(directory: &Path) -> Result<Vec<PathBuf>> {
    let read_error = |e: std::io::Error| CollageError::DirectoryRead {
        path: directory.to_path_buf(),
        source: e,
    };

    let mut files = Vec::new();
    for entry in std::fs::read_dir(directory).map_err(read_error)? {
        let path = entry.map_err(read_error)?.path();
        if path.is_file() && is_source_image(&path) {
            files.push(path);
        }
    }
    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    Ok(files)
}

/// Loads every accepted file of a directory from disk
///
/// Files that fail to decode are reported and skipped; they do not occupy a
/// grid cell.
#[derive(Debug, Clone, Copy, Default)]
pub struct DirectorySource {
    show_progress: bool,
}

impl DirectorySource {
    /// Create a source, optionally drawing a progress bar while decoding
    pub const fn new(show_progress: bool) -> Self {
        Self { show_progress }
    }
}

impl ImageSource for DirectorySource {
    fn load(&self, directory: &Path) -> Result<Vec<DynamicImage>> {
        let files = list_source_files(directory)?;
        let progress = LoadProgress::new(files.len(), self.show_progress);

        let mut images = Vec::with_capacity(files.len());
        for path in &files {
            progress.start_file(path);
            match decode_source(path) {
                Ok(image) => images.push(image),
                Err(e) => warn!("{e}; skipping"),
            }
            progress.advance();
        }
        debug!(
            "Decoded {} of {} source file(s) in {}",
            images.len(),
            progress.position(),
            directory.display()
        );
        progress.finish();

        Ok(images)
    }
}
