//! The built-in paper size table
//!
//! Dimensions follow the Wikipedia "Paper size" article.

use crate::constants::{DIN_476, ISO_216, ISO_269};
use crate::size::SizeEntry;

/// Every built-in size, in the order lookups and iteration report them
pub const SIZE_TABLE: &[SizeEntry] = &[
    // A series
    ("A0", ISO_216, 841, 1189),
    ("A1", ISO_216, 594, 841),
    ("A2", ISO_216, 420, 594),
    ("A3", ISO_216, 297, 420),
    ("A4", ISO_216, 210, 297),
    ("A5", ISO_216, 148, 210),
    ("A6", ISO_216, 105, 148),
    ("A7", ISO_216, 74, 105),
    ("A8", ISO_216, 52, 74),
    ("A9", ISO_216, 37, 52),
    ("A10", ISO_216, 26, 37),
    ("A11", DIN_476, 18, 26),
    ("A12", DIN_476, 13, 18),
    ("A13", DIN_476, 9, 13),
    // B series
    ("B0", ISO_216, 1000, 1414),
    ("B1", ISO_216, 707, 1000),
    ("B2", ISO_216, 500, 707),
    ("B3", ISO_216, 353, 500),
    ("B4", ISO_216, 250, 353),
    ("B5", ISO_216, 176, 250),
    ("B6", ISO_216, 125, 176),
    ("B7", ISO_216, 88, 125),
    ("B8", ISO_216, 62, 88),
    ("B9", ISO_216, 44, 62),
    ("B10", ISO_216, 31, 44),
    ("B11", DIN_476, 22, 31),
    ("B12", DIN_476, 15, 22),
    ("B13", DIN_476, 11, 15),
    // C series (envelopes)
    ("C0", ISO_269, 917, 1297),
    ("C1", ISO_269, 648, 917),
    ("C2", ISO_269, 458, 648),
    ("C3", ISO_269, 324, 458),
    ("C4", ISO_269, 229, 324),
    ("C5", ISO_269, 162, 229),
    ("C6", ISO_269, 114, 162),
    ("C7", ISO_269, 81, 114),
    ("C8", ISO_269, 57, 81),
    ("C9", ISO_269, 40, 57),
    ("C10", ISO_269, 28, 40),
    // D series
    ("D0", DIN_476, 771, 1090),
    ("D1", DIN_476, 545, 771),
    ("D2", DIN_476, 385, 545),
    ("D3", DIN_476, 272, 385),
    ("D4", DIN_476, 192, 272),
    ("D5", DIN_476, 136, 192),
    ("D6", DIN_476, 96, 136),
    ("D7", DIN_476, 68, 96),
    ("D8", DIN_476, 48, 68),
    // Oversized sheets
    ("4A0", DIN_476, 1682, 2378),
    ("2A0", DIN_476, 1189, 1682),
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_table_names_are_unique() {
        let names: HashSet<_> = SIZE_TABLE.iter().map(|(name, ..)| *name).collect();
        assert_eq!(names.len(), SIZE_TABLE.len());
        assert_eq!(SIZE_TABLE.len(), 50);
    }

    #[test]
    fn test_each_a_size_halves_the_previous() {
        // The long side of A(n+1) is the short side of A(n)
        let a_series: Vec<_> = SIZE_TABLE
            .iter()
            .filter(|(name, ..)| name.starts_with('A'))
            .collect();
        for pair in a_series.windows(2) {
            assert_eq!(pair[1].3, pair[0].2, "{} -> {}", pair[0].0, pair[1].0);
        }
    }
}
