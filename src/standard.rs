//! Paper sizing standards

use std::fmt;

/// A standard body's paper sizing specification, e.g. ISO 216
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Standard {
    /// Name of the standard
    pub name: String,
}

impl Standard {
    /// Create a standard with the given name
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self { name: name.into() }
    }
}

impl fmt::Display for Standard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_equality_is_by_name() {
        assert_eq!(Standard::new("ISO-269"), Standard::new(String::from("ISO-269")));
        assert_ne!(Standard::new("ISO-269"), Standard::new("DIN 476"));
    }

    #[test]
    fn test_standard_display() {
        assert_eq!(Standard::new("DIN 476").to_string(), "DIN 476");
    }
}
