//! Uniform grid geometry for collage cells
//!
//! Every cell shares one width and one height derived from the canvas, the grid
//! dimensions and the reserved title band. Images are stretched into their cell
//! minus padding; indices past the grid capacity have no placement.

use crate::io::configuration::{CELL_PADDING, CELL_SHRINK, HEADER_HEIGHT};
use crate::io::error::{Result, invalid_parameter, layout_error};

/// Grid dimensions in cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridSize {
    /// Number of cell rows
    pub rows: u32,
    /// Number of cell columns
    pub cols: u32,
}

impl GridSize {
    /// Create a grid of `rows` by `cols` cells
    pub const fn new(rows: u32, cols: u32) -> Self {
        Self { rows, cols }
    }

    /// Number of images the grid can hold
    pub const fn capacity(&self) -> usize {
        self.rows as usize * self.cols as usize
    }
}

/// Output canvas dimensions in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanvasSize {
    /// Canvas width
    pub width: u32,
    /// Canvas height including the title band
    pub height: u32,
}

impl CanvasSize {
    /// Create a canvas of `width` by `height` pixels
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Where the bottom edge of a cell outline is drawn
///
/// The historical geometry adds the title band height to the bottom edge a
/// second time, so outlines reach into the next row. `CellBounds` stops the
/// outline at the cell height instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutlineStyle {
    /// Bottom edge at `y + cell_height + HEADER_HEIGHT`
    #[default]
    HeaderOffset,
    /// Bottom edge at `y + cell_height`
    CellBounds,
}

/// Rectangle given by inclusive corner coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outline {
    /// Leftmost column
    pub left: u32,
    /// Topmost row
    pub top: u32,
    /// Rightmost column (inclusive)
    pub right: u32,
    /// Bottom row (inclusive)
    pub bottom: u32,
}

/// Destination of one source image on the canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    /// Position of the image in placement order
    pub index: usize,
    /// Grid row
    pub row: u32,
    /// Grid column
    pub col: u32,
    /// Top-left paste origin (x, y)
    pub origin: (u32, u32),
    /// Stretched image size (width, height)
    pub size: (u32, u32),
    /// Cell outline drawn after pasting
    pub outline: Outline,
}

/// Precomputed cell geometry for one canvas and grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollageLayout {
    canvas: CanvasSize,
    grid: GridSize,
    cell_width: u32,
    cell_height: u32,
    outline_style: OutlineStyle,
}

impl CollageLayout {
    /// Compute cell geometry for `canvas` divided into `grid`
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Any grid or canvas dimension is zero
    /// - The canvas is not taller than the title band
    /// - A cell is too small to hold an image after padding
    pub fn new(canvas: CanvasSize, grid: GridSize, outline_style: OutlineStyle) -> Result<Self> {
        if grid.rows == 0 || grid.cols == 0 {
            return Err(invalid_parameter(
                "grid",
                &format!("{}x{}", grid.rows, grid.cols),
                &"rows and columns must be positive",
            ));
        }
        if canvas.width == 0 || canvas.height == 0 {
            return Err(invalid_parameter(
                "size",
                &format!("{}x{}", canvas.width, canvas.height),
                &"width and height must be positive",
            ));
        }
        if canvas.height <= HEADER_HEIGHT {
            return Err(layout_error(&format!(
                "canvas height {} leaves no room below the {HEADER_HEIGHT}px title band",
                canvas.height
            )));
        }

        let cell_width = canvas.width / grid.cols;
        let cell_height = (canvas.height - HEADER_HEIGHT) / grid.rows;

        if cell_width <= CELL_SHRINK || cell_height <= CELL_SHRINK {
            return Err(layout_error(&format!(
                "cells of {cell_width}x{cell_height}px cannot hold an image after {CELL_SHRINK}px padding"
            )));
        }

        Ok(Self {
            canvas,
            grid,
            cell_width,
            cell_height,
            outline_style,
        })
    }

    /// Canvas the layout was computed for
    pub const fn canvas(&self) -> CanvasSize {
        self.canvas
    }

    /// Grid the layout was computed for
    pub const fn grid(&self) -> GridSize {
        self.grid
    }

    /// Shared cell width
    pub const fn cell_width(&self) -> u32 {
        self.cell_width
    }

    /// Shared cell height
    pub const fn cell_height(&self) -> u32 {
        self.cell_height
    }

    /// Maximum number of placed images
    pub const fn capacity(&self) -> usize {
        self.grid.capacity()
    }

    /// Size every image is stretched to
    pub const fn image_size(&self) -> (u32, u32) {
        (
            self.cell_width - CELL_SHRINK,
            self.cell_height - CELL_SHRINK,
        )
    }

    /// Placement for the image at `index`, or `None` past the grid capacity
    pub fn placement(&self, index: usize) -> Option<Placement> {
        if index >= self.capacity() {
            return None;
        }

        let cols = self.grid.cols as usize;
        let col = (index % cols) as u32;
        let row = (index / cols) as u32;

        let x = col * self.cell_width + CELL_PADDING;
        let y = row * self.cell_height + HEADER_HEIGHT + CELL_PADDING;

        // Corners past the canvas are clipped when drawn
        let bottom = match self.outline_style {
            OutlineStyle::HeaderOffset => y
                .saturating_add(self.cell_height)
                .saturating_add(HEADER_HEIGHT),
            OutlineStyle::CellBounds => y.saturating_add(self.cell_height),
        };

        Some(Placement {
            index,
            row,
            col,
            origin: (x, y),
            size: self.image_size(),
            outline: Outline {
                left: x,
                top: y,
                right: x.saturating_add(self.cell_width),
                bottom,
            },
        })
    }

    /// Placements for the first `count` images, truncated at capacity
    pub fn placements(&self, count: usize) -> Vec<Placement> {
        (0..count.min(self.capacity()))
            .filter_map(|index| self.placement(index))
            .collect()
    }

    /// Number of trailing images that do not fit
    pub const fn dropped(&self, count: usize) -> usize {
        count.saturating_sub(self.capacity())
    }
}
