//! Collage geometry: cell sizing, paste origins and truncation

/// Grid, canvas and per-image placement calculations
pub mod grid;

pub use grid::{CanvasSize, CollageLayout, GridSize, Outline, OutlineStyle, Placement};
