//! Paper size registry and its builder

use crate::constants::STANDARDS;
use crate::error::{RegistryError, Result};
use crate::size::{Size, SizeEntry};
use crate::standard::Standard;
use crate::table::SIZE_TABLE;
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::LazyLock;
use tracing::{debug, instrument, trace};

static BUILTIN: LazyLock<Registry> = LazyLock::new(|| {
    Registry::builtin().expect("built-in paper size table must be valid")
});

/// The process-wide registry built from the built-in table
pub fn registry() -> &'static Registry {
    &BUILTIN
}

/// Immutable lookup tables mapping names to standards and sizes
///
/// Every size name maps to a non-empty sequence; the first element is the
/// most common size carrying that name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registry {
    standards: HashMap<String, Standard>,
    standard_order: Vec<String>,
    sizes: HashMap<String, Vec<Size>>,
    size_order: Vec<String>,
}

impl Registry {
    /// Start building a custom registry
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    /// Build a fresh registry from the built-in table
    pub fn builtin() -> Result<Self> {
        STANDARDS
            .iter()
            .fold(Self::builder(), |builder, name| builder.standard(*name))
            .entries(SIZE_TABLE)
            .build()
    }

    /// Look up a standard by its exact name
    pub fn lookup_standard(&self, name: &str) -> Option<&Standard> {
        let standard = self.standards.get(name);
        if standard.is_none() {
            trace!(name, "standard not found");
        }
        standard
    }

    /// Look up every size registered under an exact name, most common first
    pub fn lookup_sizes(&self, name: &str) -> Option<&[Size]> {
        let sizes = self.sizes.get(name).map(Vec::as_slice);
        if sizes.is_none() {
            trace!(name, "size not found");
        }
        sizes
    }

    /// The most common size registered under an exact name
    pub fn primary_size(&self, name: &str) -> Option<&Size> {
        self.lookup_sizes(name).and_then(|sizes| sizes.first())
    }

    /// All standards in declaration order
    pub fn standards(&self) -> impl Iterator<Item = &Standard> {
        self.standard_order
            .iter()
            .filter_map(|name| self.standards.get(name))
    }

    /// All size names in the order they were first added
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.size_order.iter().map(String::as_str)
    }

    /// Every size record, grouped by name in insertion order
    pub fn sizes(&self) -> impl Iterator<Item = &Size> {
        self.size_order
            .iter()
            .filter_map(|name| self.sizes.get(name))
            .flatten()
    }

    /// Every size record defined by the named standard
    pub fn sizes_for_standard<'a>(&'a self, standard: &'a str) -> impl Iterator<Item = &'a Size> {
        self.sizes().filter(move |size| size.standard.name == standard)
    }

    /// Number of distinct size names
    pub fn len(&self) -> usize {
        self.size_order.len()
    }

    /// Whether no sizes are registered
    pub fn is_empty(&self) -> bool {
        self.size_order.is_empty()
    }
}

/// Collects standards and sizes, then validates them all at once
#[derive(Debug, Clone, Default)]
pub struct RegistryBuilder {
    standards: Vec<String>,
    sizes: Vec<(String, String, u32, u32)>,
}

impl RegistryBuilder {
    /// Create an empty builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a standard
    pub fn standard<S: Into<String>>(mut self, name: S) -> Self {
        self.standards.push(name.into());
        self
    }

    /// Add a size; repeating a name appends an alternative after the existing ones
    pub fn size<N, S>(mut self, name: N, standard: S, width: u32, height: u32) -> Self
    where
        N: Into<String>,
        S: Into<String>,
    {
        self.sizes.push((name.into(), standard.into(), width, height));
        self
    }

    /// Add every row of a size table
    pub fn entries(self, entries: &[SizeEntry]) -> Self {
        entries
            .iter()
            .fold(self, |builder, &(name, standard, width, height)| {
                builder.size(name, standard, width, height)
            })
    }

    /// Validate the collected rows and produce a registry
    ///
    /// Nothing is returned unless every row is valid.
    #[instrument(skip(self), fields(standards = self.standards.len(), sizes = self.sizes.len()))]
    pub fn build(self) -> Result<Registry> {
        let mut standards = HashMap::with_capacity(self.standards.len());
        for name in &self.standards {
            match standards.entry(name.clone()) {
                Entry::Occupied(_) => {
                    return Err(RegistryError::DuplicateStandard(name.clone()));
                }
                Entry::Vacant(slot) => {
                    slot.insert(Standard::new(name.clone()));
                }
            }
        }

        let mut sizes: HashMap<String, Vec<Size>> = HashMap::new();
        let mut size_order = Vec::new();
        for (name, standard_name, width, height) in self.sizes {
            if width == 0 || height == 0 {
                return Err(RegistryError::InvalidDimensions {
                    size: name,
                    width,
                    height,
                });
            }

            let Some(standard) = standards.get(&standard_name) else {
                return Err(RegistryError::UnknownStandard {
                    size: name,
                    standard: standard_name,
                });
            };

            trace!("Adding {} ({}) {}x{}", name, standard_name, width, height);
            let size = Size::new(name.clone(), standard.clone(), width, height);
            match sizes.entry(name) {
                Entry::Occupied(mut slot) => slot.get_mut().push(size),
                Entry::Vacant(slot) => {
                    size_order.push(slot.key().clone());
                    slot.insert(vec![size]);
                }
            }
        }

        debug!(
            "Built registry with {} standards and {} size names",
            standards.len(),
            size_order.len()
        );

        Ok(Registry {
            standards,
            standard_order: self.standards,
            sizes,
            size_order,
        })
    }
}
