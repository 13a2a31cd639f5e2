//! Error types for collage composition and its surrounding I/O

use std::fmt;
use std::path::PathBuf;

/// Main error type for all collage operations
#[derive(Debug)]
pub enum CollageError {
    /// Composition was requested before a source directory was chosen
    MissingDirectory,

    /// Failed to enumerate the source directory
    DirectoryRead {
        /// Directory being listed
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Failed to decode a source image
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image loading error
        source: image::ImageError,
    },

    /// No usable font could be loaded for the title
    FontLoad {
        /// Font file that was tried last
        path: PathBuf,
        /// Description of the failure
        reason: String,
    },

    /// Output format name does not map to a known encoder
    UnsupportedFormat {
        /// Format text as supplied by the user
        format: String,
    },

    /// Failed to encode or write the collage
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Parameter value rejected
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Canvas and grid combination cannot hold any image
    Layout {
        /// Description of the geometry problem
        reason: String,
    },
}

impl fmt::Display for CollageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingDirectory => {
                write!(f, "No image directory selected")
            }
            Self::DirectoryRead { path, source } => {
                write!(f, "Failed to read directory '{}': {source}", path.display())
            }
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::FontLoad { path, reason } => {
                write!(f, "Failed to load font '{}': {reason}", path.display())
            }
            Self::UnsupportedFormat { format } => {
                write!(f, "Unsupported output format '{format}'")
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::Layout { reason } => {
                write!(f, "Invalid collage layout: {reason}")
            }
        }
    }
}

impl std::error::Error for CollageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::DirectoryRead { source, .. } | Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for collage results
pub type Result<T> = std::result::Result<T, CollageError>;

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> CollageError {
    CollageError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a layout geometry error
pub fn layout_error(reason: &impl ToString) -> CollageError {
    CollageError::Layout {
        reason: reason.to_string(),
    }
}
