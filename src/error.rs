//! Error types for building a paper size registry

use thiserror::Error;

/// Result type alias using RegistryError
pub type Result<T> = std::result::Result<T, RegistryError>;

/// Errors that can occur while assembling a registry
///
/// Lookups never produce these; an unknown name is reported as `None`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// The same standard was declared twice
    #[error("Standard {0:?} is declared more than once")]
    DuplicateStandard(String),

    /// A size refers to a standard that was never declared
    #[error("Size {size:?} references unknown standard {standard:?}")]
    UnknownStandard { size: String, standard: String },

    /// Width or height is zero
    #[error("Size {size:?} has invalid dimensions {width}x{height} mm")]
    InvalidDimensions {
        size: String,
        width: u32,
        height: u32,
    },
}
