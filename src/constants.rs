//! Names of the supported paper size standards

/// ISO 216, the A and B series
///
/// Older copies of this table used the label "ISO-126". Only "ISO-216" is
/// registered now.
pub const ISO_216: &str = "ISO-216";

/// ISO 269, the C (envelope) series
pub const ISO_269: &str = "ISO-269";

/// DIN 476, the D series plus the oversized and sub-A10/B10 sheets
pub const DIN_476: &str = "DIN 476";

/// Every standard known to the built-in table, in declaration order
pub const STANDARDS: [&str; 3] = [ISO_216, ISO_269, DIN_476];
