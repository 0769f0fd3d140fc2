//! A read-only registry of paper sizes
//!
//! Maps size names such as "A4" or "C5" to their exact width and height in
//! millimetres, and standard names such as "ISO-216" to the standard that
//! defines them. The built-in table covers the ISO 216 A and B series, the
//! ISO 269 C series and the DIN 476 D series, oversized and small sheets.
//!
//! ```
//! let a4 = papersizes::primary_size("A4").unwrap();
//! assert_eq!(a4.dimensions(), (210, 297));
//! assert_eq!(a4.standard.name, papersizes::ISO_216);
//!
//! assert!(papersizes::lookup_sizes("a4").is_none());
//! ```

pub mod constants;
pub mod error;
pub mod registry;
pub mod size;
pub mod standard;
pub mod table;

pub use constants::{DIN_476, ISO_216, ISO_269};
pub use error::{RegistryError, Result};
pub use registry::{Registry, RegistryBuilder, registry};
pub use size::{Size, SizeEntry};
pub use standard::Standard;

/// Look up a standard in the built-in registry by its exact name
pub fn lookup_standard(name: &str) -> Option<&'static Standard> {
    registry().lookup_standard(name)
}

/// Look up every built-in size with the exact name, most common first
///
/// The returned slice is never empty.
pub fn lookup_sizes(name: &str) -> Option<&'static [Size]> {
    registry().lookup_sizes(name)
}

/// The most common built-in size with the exact name
pub fn primary_size(name: &str) -> Option<&'static Size> {
    registry().primary_size(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_size_b5() {
        let b5 = primary_size("B5").unwrap();
        assert_eq!((b5.width, b5.height), (176, 250));
    }

    #[test]
    fn test_unknown_names_are_absent() {
        assert!(lookup_standard("nonexistent").is_none());
        assert!(lookup_sizes("nonexistent").is_none());
        assert!(primary_size("").is_none());
    }
}
