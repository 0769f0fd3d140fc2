//! Paper size records

use crate::standard::Standard;
use std::fmt;

/// One authored row of a size table: name, standard name, width and height in mm
pub type SizeEntry = (&'static str, &'static str, u32, u32);

/// A concrete paper size defined by a standard
///
/// `width` and `height` are kept exactly as the standard lists them; the
/// pair is never swapped to force portrait orientation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    /// Canonical name as defined by the relevant standard
    pub name: String,
    /// Standard defining this paper size
    pub standard: Standard,
    /// Width in exact millimetres
    pub width: u32,
    /// Height in exact millimetres
    pub height: u32,
}

impl Size {
    /// Create a size record
    pub fn new<S: Into<String>>(name: S, standard: Standard, width: u32, height: u32) -> Self {
        Self {
            name: name.into(),
            standard,
            width,
            height,
        }
    }

    /// `(width, height)` in millimetres
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}): {} x {} mm",
            self.name, self.standard, self.width, self.height
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimensions_keep_authored_order() {
        let size = Size::new("X1", Standard::new("Test"), 300, 200);
        assert_eq!(size.dimensions(), (300, 200));
    }

    #[test]
    fn test_size_display() {
        let size = Size::new("A4", Standard::new("ISO-216"), 210, 297);
        assert_eq!(size.to_string(), "A4 (ISO-216): 210 x 297 mm");
    }
}
