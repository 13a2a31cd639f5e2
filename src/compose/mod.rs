//! Collage composition from decoded images

/// Blank canvas, paste and outline primitives
pub mod canvas;
/// Orchestration of title, layout and pasting
pub mod composer;
/// Title font loading and text drawing
pub mod title;

pub use composer::{Collage, Composer};
