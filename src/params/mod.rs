//! Parameter collection for a single collage request

/// Field-by-field parameter setters and the immutable result
pub mod collector;

pub use collector::{CollageParameters, ParameterCollector};
