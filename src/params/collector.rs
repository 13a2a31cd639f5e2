//! Collection of the six collage parameters from loosely typed user input

use crate::io::configuration::{DEFAULT_CANVAS_SIZE, DEFAULT_FORMAT, DEFAULT_GRID};
use crate::layout::{CanvasSize, GridSize};
use log::debug;
use std::path::PathBuf;

/// Immutable description of one collage request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollageParameters {
    /// Directory holding the source images
    pub directory: Option<PathBuf>,
    /// Title rendered in the header band; empty for none
    pub title: String,
    /// Grid dimensions
    pub grid: GridSize,
    /// Convert every source image to luminance before layout
    pub grayscale: bool,
    /// Output canvas dimensions
    pub canvas: CanvasSize,
    /// Output format name, resolved only when saving
    pub format: String,
}

impl Default for CollageParameters {
    fn default() -> Self {
        Self {
            directory: None,
            title: String::new(),
            grid: GridSize::new(DEFAULT_GRID.0, DEFAULT_GRID.1),
            grayscale: false,
            canvas: CanvasSize::new(DEFAULT_CANVAS_SIZE.0, DEFAULT_CANVAS_SIZE.1),
            format: DEFAULT_FORMAT.to_string(),
        }
    }
}

/// Accumulates parameters one answer at a time
///
/// Setters never fail: malformed numeric text leaves the previous value in
/// place, and a cancelled answer (`None`) resets the field as a dismissed
/// dialog would.
#[derive(Debug, Clone, Default)]
pub struct ParameterCollector {
    params: CollageParameters,
}

impl ParameterCollector {
    /// Start from the default parameters
    pub fn new() -> Self {
        Self::default()
    }

    /// Select the source directory; `None` or an empty path clears it
    pub fn set_directory(&mut self, directory: Option<PathBuf>) {
        self.params.directory = directory.filter(|path| !path.as_os_str().is_empty());
    }

    /// Set the title; a cancelled answer clears it
    pub fn set_title(&mut self, title: Option<&str>) {
        self.params.title = title.unwrap_or_default().to_string();
    }

    /// Set the grid from `<rows>x<cols>` text
    ///
    /// Returns whether the value was accepted.
    pub fn set_grid(&mut self, text: &str) -> bool {
        if let Some((rows, cols)) = parse_dimensions(text) {
            self.params.grid = GridSize::new(rows, cols);
            true
        } else {
            debug!("Ignoring malformed grid '{text}'");
            false
        }
    }

    /// Toggle grayscale conversion
    pub const fn set_grayscale(&mut self, enabled: bool) {
        self.params.grayscale = enabled;
    }

    /// Set the canvas from `<width>x<height>` text
    ///
    /// Returns whether the value was accepted.
    pub fn set_canvas_size(&mut self, text: &str) -> bool {
        if let Some((width, height)) = parse_dimensions(text) {
            self.params.canvas = CanvasSize::new(width, height);
            true
        } else {
            debug!("Ignoring malformed canvas size '{text}'");
            false
        }
    }

    /// Set the output format; a cancelled answer stores the empty string
    pub fn set_format(&mut self, format: Option<&str>) {
        self.params.format = format.unwrap_or_default().to_string();
    }

    /// Parameters gathered so far
    pub const fn parameters(&self) -> &CollageParameters {
        &self.params
    }

    /// Hand over the gathered parameters
    pub fn finish(self) -> CollageParameters {
        self.params
    }
}

/// Parse `<a>x<b>` into two positive integers
///
/// Whitespace around each number is tolerated. Zero, negative and
/// non-numeric parts, or any count of parts other than two, yield `None`.
pub fn parse_dimensions(text: &str) -> Option<(u32, u32)> {
    let mut parts = text.split('x');
    let first = parse_positive(parts.next()?)?;
    let second = parse_positive(parts.next()?)?;
    if parts.next().is_some() {
        return None;
    }
    Some((first, second))
}

fn parse_positive(part: &str) -> Option<u32> {
    part.trim().parse::<u32>().ok().filter(|value| *value > 0)
}
