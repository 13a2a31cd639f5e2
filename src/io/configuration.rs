//! Layout constants and runtime configuration defaults

// Canvas geometry
/// Height of the band reserved for the title at the top of the canvas
pub const HEADER_HEIGHT: u32 = 50;
/// Gap between a cell's top-left corner and the pasted image
pub const CELL_PADDING: u32 = 5;
/// Total amount each cell dimension shrinks by before an image is stretched into it
pub const CELL_SHRINK: u32 = CELL_PADDING * 2;
/// Thickness of the cell outline in pixels
pub const OUTLINE_WIDTH: u32 = 2;

// Title rendering
/// Top-left corner of the title text
pub const TITLE_POSITION: (i32, i32) = (10, 10);
/// Em size of the title font in pixels
pub const TITLE_FONT_SIZE: f32 = 30.0;

// Colors
/// Canvas background
pub const BACKGROUND_COLOR: [u8; 3] = [255, 255, 255];
/// Title text and cell outlines
pub const INK_COLOR: [u8; 3] = [0, 0, 0];

// Default values for configurable parameters
/// Default grid as (rows, cols)
pub const DEFAULT_GRID: (u32, u32) = (2, 2);
/// Default canvas as (width, height)
pub const DEFAULT_CANVAS_SIZE: (u32, u32) = (800, 600);
/// Default output format name
pub const DEFAULT_FORMAT: &str = "png";

// Source discovery
/// File extensions accepted as collage sources (compared case-insensitively)
pub const SOURCE_EXTENSIONS: [&str; 3] = ["jpg", "jpeg", "png"];

// Output settings
/// File stem of the written collage; the extension is the requested format
pub const OUTPUT_STEM: &str = "collage";

// Fonts probed, in order, when no explicit font is given
/// Well-known locations of a regular sans-serif font
pub const DEFAULT_FONT_CANDIDATES: [&str; 8] = [
    "arial.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/gnu-free/FreeSans.otf",
    "/Library/Fonts/Arial.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

// Progress bar display settings
/// Width of the decoding progress bar in characters
pub const PROGRESS_BAR_WIDTH: u16 = 30;
