//! Process-scoped registry of magician types.

use super::model::MagicianType;
use crate::error::{PwmError, Result};

/// Ordered registry of the known magician types.
///
/// Built once at startup and passed by reference into the services that
/// need it; there is no global mutable state. Lookup is exact-match on
/// the category name and an unknown name is an error, not a fallback.
#[derive(Debug, Clone, Default)]
pub struct MagicianTypeRegistry {
    types: Vec<MagicianType>,
}

impl MagicianTypeRegistry {
    /// The fixed category names, in display order.
    pub const STANDARD_NAMES: [&'static str; 7] = [
        "Neophyte",
        "Enthusiast",
        "Hobbyist",
        "Semi-Professional",
        "Professional",
        "Historian",
        "Collector",
    ];

    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a registry populated with the standard category set.
    pub fn standard() -> Self {
        let mut registry = Self::new();
        for name in Self::STANDARD_NAMES {
            registry.register(name);
        }
        registry
    }

    /// Adds a category if it is not already present.
    ///
    /// Registering the same name twice is a no-op, so repeated
    /// initialization cannot create duplicate categories.
    pub fn register(&mut self, name: impl Into<String>) {
        let name = name.into();
        if !self.contains(&name) {
            self.types.push(MagicianType::new(name));
        }
    }

    /// Exact-match lookup by category name.
    ///
    /// # Returns
    ///
    /// - `Ok(&MagicianType)`: The registered category
    /// - `Err(PwmError::InvalidReference)`: The name is not in the registry
    pub fn get_by_name(&self, name: &str) -> Result<&MagicianType> {
        self.types
            .iter()
            .find(|t| t.name == name)
            .ok_or_else(|| PwmError::invalid_reference(name))
    }

    /// Whether the given name is a registered category.
    pub fn contains(&self, name: &str) -> bool {
        self.types.iter().any(|t| t.name == name)
    }

    /// All categories in registration order.
    pub fn list_all(&self) -> &[MagicianType] {
        &self.types
    }
}
