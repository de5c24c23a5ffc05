//! Error types for engine construction and file operations
//!
//! Contradictions during synthesis are not errors: they are a terminal engine
//! state that the driver recovers from with a reset. Everything in here is fatal
//! to the operation that produced it.

use std::fmt;
use std::path::PathBuf;

/// Main error type for all synthesis operations
#[derive(Debug)]
pub enum SynthesisError {
    /// Failed to load an exemplar image from the filesystem or memory
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image loading error
        source: image::ImageError,
    },

    /// Selector does not name any bundled exemplar
    UnknownExemplar {
        /// The selector that was requested
        selector: String,
        /// Names of the bundled exemplars
        available: Vec<&'static str>,
    },

    /// Exemplar is smaller than the pattern size in at least one dimension
    ExemplarTooSmall {
        /// Exemplar width in pixels
        width: usize,
        /// Exemplar height in pixels
        height: usize,
        /// Side length of the square patterns
        pattern_size: usize,
    },

    /// Pattern extraction produced no patterns at all
    EmptyCatalog,

    /// Requested output grid has a zero or oversized dimension
    InvalidGridSize {
        /// Requested width in cells
        width: usize,
        /// Requested height in cells
        height: usize,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Failed to save a rendered image to disk
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
}

impl fmt::Display for SynthesisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::UnknownExemplar {
                selector,
                available,
            } => {
                write!(
                    f,
                    "Unknown exemplar '{selector}' (available: {})",
                    available.join(", ")
                )
            }
            Self::ExemplarTooSmall {
                width,
                height,
                pattern_size,
            } => {
                write!(
                    f,
                    "Exemplar of {width}x{height} pixels is smaller than the \
                     {pattern_size}x{pattern_size} pattern size"
                )
            }
            Self::EmptyCatalog => write!(f, "Exemplar produced no patterns"),
            Self::InvalidGridSize { width, height } => {
                write!(f, "Invalid output grid size {width}x{height}")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
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
        }
    }
}

impl std::error::Error for SynthesisError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for synthesis results
pub type Result<T> = std::result::Result<T, SynthesisError>;

impl From<image::ImageError> for SynthesisError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageLoad {
            path: PathBuf::from("<memory>"),
            source: err,
        }
    }
}

impl From<std::io::Error> for SynthesisError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> SynthesisError {
    SynthesisError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
