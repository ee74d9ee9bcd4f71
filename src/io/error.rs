//! Error types for catalog reads, part selection and image output

use std::fmt;
use std::path::PathBuf;

/// Main error type for all avatar generation operations
#[derive(Debug)]
pub enum RoboHashError {
    /// An expected catalog directory or file is missing or unreadable
    CatalogRead {
        /// Catalog-relative path that was being read
        path: String,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// A mandatory category has no files to choose from
    ///
    /// Raised for an empty foreground category, and for an empty list of
    /// sets or colors when one must be drawn
    EmptyCategory {
        /// Catalog-relative path of the empty category
        path: String,
    },

    /// A part file is not a valid image
    Decode {
        /// Catalog-relative path of the part
        path: String,
        /// Underlying image decoding error
        source: image::ImageError,
    },

    /// Failed to save the assembled image to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure outside the catalog
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Caller-supplied parameter could not be interpreted
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },
}

/// Coarse failure classes surfaced to callers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The catalog is missing or unreadable at an expected path
    CatalogReadFailure,
    /// A required category has zero entries
    EmptyCategory,
    /// A part file could not be decoded
    DecodeFailure,
    /// Writing the result failed
    Output,
    /// Caller input was rejected
    InvalidInput,
}

impl RoboHashError {
    /// Failure class of this error
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::CatalogRead { .. } => ErrorKind::CatalogReadFailure,
            Self::EmptyCategory { .. } => ErrorKind::EmptyCategory,
            Self::Decode { .. } => ErrorKind::DecodeFailure,
            Self::ImageExport { .. } | Self::FileSystem { .. } => ErrorKind::Output,
            Self::InvalidParameter { .. } => ErrorKind::InvalidInput,
        }
    }
}

impl fmt::Display for RoboHashError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CatalogRead { path, source } => {
                write!(f, "Failed to read catalog path '{path}': {source}")
            }
            Self::EmptyCategory { path } => {
                write!(f, "No parts found in '{path}'")
            }
            Self::Decode { path, source } => {
                write!(f, "Failed to decode part '{path}': {source}")
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
        }
    }
}

impl std::error::Error for RoboHashError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::CatalogRead { source, .. } | Self::FileSystem { source, .. } => Some(source),
            Self::Decode { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::EmptyCategory { .. } | Self::InvalidParameter { .. } => None,
        }
    }
}

/// Convenience type alias for avatar generation results
pub type Result<T> = std::result::Result<T, RoboHashError>;

/// Create a catalog read error for the given path
pub fn catalog_read(path: &str, source: std::io::Error) -> RoboHashError {
    RoboHashError::CatalogRead {
        path: path.to_string(),
        source,
    }
}

/// Create an empty category error for the given path
pub fn empty_category(path: &str) -> RoboHashError {
    RoboHashError::EmptyCategory {
        path: path.to_string(),
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> RoboHashError {
    RoboHashError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
