//! Collage assembly: title band, stretched cell images and cell outlines

use crate::compose::canvas::{blank_canvas, draw_outline, paste};
use crate::compose::title::TitleFont;
use crate::io::configuration::{INK_COLOR, OUTLINE_WIDTH, TITLE_FONT_SIZE, TITLE_POSITION};
use crate::io::error::{CollageError, Result};
use crate::io::image::save_collage;
use crate::io::source::ImageSource;
use crate::layout::{CollageLayout, OutlineStyle};
use crate::params::CollageParameters;
use image::DynamicImage;
use image::imageops::FilterType;
use log::{debug, warn};
use std::path::{Path, PathBuf};

/// Filter used when stretching source images into their cells
pub const RESIZE_FILTER: FilterType = FilterType::CatmullRom;

/// A composed collage kept in memory
#[derive(Debug, Clone)]
pub struct Collage {
    /// Finished canvas; single-channel luma in grayscale mode, RGB otherwise
    pub image: DynamicImage,
    /// Number of images pasted onto the canvas
    pub placed: usize,
    /// Number of trailing images that did not fit the grid
    pub dropped: usize,
    /// Whether the title was drawn
    pub title_rendered: bool,
}

/// Builds collages from parameters and decoded images
#[derive(Debug, Clone, Default)]
pub struct Composer {
    outline_style: OutlineStyle,
    font_path: Option<PathBuf>,
}

impl Composer {
    /// Composer with the historical outline geometry and font discovery
    pub fn new() -> Self {
        Self::default()
    }

    /// Choose the outline geometry
    #[must_use]
    pub const fn with_outline_style(mut self, outline_style: OutlineStyle) -> Self {
        self.outline_style = outline_style;
        self
    }

    /// Use a specific font file for the title instead of probing well-known paths
    #[must_use]
    pub fn with_font(mut self, font_path: Option<PathBuf>) -> Self {
        self.font_path = font_path;
        self
    }

    /// Cell geometry for `params`
    ///
    /// # Errors
    ///
    /// Returns an error if the canvas and grid cannot hold any image
    pub fn layout(&self, params: &CollageParameters) -> Result<CollageLayout> {
        CollageLayout::new(params.canvas, params.grid, self.outline_style)
    }

    /// Compose `images` in order according to `params`
    ///
    /// Images beyond the grid capacity are dropped without error.
    ///
    /// # Errors
    ///
    /// Returns an error if the canvas and grid cannot hold any image
    pub fn compose(&self, params: &CollageParameters, images: Vec<DynamicImage>) -> Result<Collage> {
        let layout = self.layout(params)?;
        Ok(self.compose_with_layout(&layout, params, images))
    }

    /// Run a full request: load sources, compose and save `collage.<format>`
    /// into `output_dir`
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No source directory was selected
    /// - The canvas and grid cannot hold any image
    /// - The source directory cannot be listed
    /// - The format is unknown or the file cannot be written
    pub fn create(
        &self,
        params: &CollageParameters,
        source: &impl ImageSource,
        output_dir: &Path,
    ) -> Result<PathBuf> {
        let directory = params
            .directory
            .as_deref()
            .ok_or(CollageError::MissingDirectory)?;
        let layout = self.layout(params)?;

        let images = source.load(directory)?;
        let collage = self.compose_with_layout(&layout, params, images);

        debug!(
            "Placed {} image(s) on a {}x{} grid, dropped {}",
            collage.placed, params.grid.rows, params.grid.cols, collage.dropped
        );

        save_collage(&collage.image, &params.format, output_dir)
    }

    fn compose_with_layout(
        &self,
        layout: &CollageLayout,
        params: &CollageParameters,
        images: Vec<DynamicImage>,
    ) -> Collage {
        let images: Vec<DynamicImage> = if params.grayscale {
            images
                .into_iter()
                .map(|image| DynamicImage::ImageLuma8(image.to_luma8()))
                .collect()
        } else {
            images
        };

        let mut canvas = blank_canvas(layout.canvas());

        let title_rendered = !params.title.is_empty() && self.draw_title(&mut canvas, &params.title);

        let (width, height) = layout.image_size();
        let mut placed = 0;
        for (index, image) in images.iter().enumerate() {
            let Some(placement) = layout.placement(index) else {
                break;
            };

            let tile = image.resize_exact(width, height, RESIZE_FILTER).to_rgb8();
            paste(&mut canvas, &tile, placement.origin);
            draw_outline(&mut canvas, &placement.outline, OUTLINE_WIDTH, INK_COLOR);
            placed += 1;
        }

        let image = if params.grayscale {
            DynamicImage::ImageLuma8(DynamicImage::ImageRgb8(canvas).to_luma8())
        } else {
            DynamicImage::ImageRgb8(canvas)
        };

        Collage {
            image,
            placed,
            dropped: layout.dropped(images.len()),
            title_rendered,
        }
    }

    // Font failures leave the header band empty
    fn draw_title(&self, canvas: &mut image::RgbImage, title: &str) -> bool {
        match TitleFont::discover(self.font_path.as_deref()) {
            Ok(font) => {
                debug!("Rendering title with {}", font.path().display());
                font.render(canvas, title, TITLE_POSITION, TITLE_FONT_SIZE, INK_COLOR);
                true
            }
            Err(e) => {
                warn!("{e}; title omitted");
                false
            }
        }
    }
}
