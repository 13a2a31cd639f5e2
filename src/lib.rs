//! Grid collage composition for a directory of images
//!
//! Source images are stretched into a uniform grid below a title band, optionally
//! converted to grayscale, and written as a single `collage.<format>` file.

#![forbid(unsafe_code)]

/// Collage assembly: canvas primitives, title rendering and the composer
pub mod compose;
/// Input/output operations and error handling
pub mod io;
/// Cell geometry and placement calculations
pub mod layout;
/// Parameter collection and the immutable request description
pub mod params;

pub use compose::{Collage, Composer};
pub use io::error::{CollageError, Result};
pub use params::{CollageParameters, ParameterCollector};
