//! MagicianType domain model.

use serde::{Deserialize, Serialize};

/// A named experience-level category assigned to a magician.
///
/// Immutable reference data: the set of categories is loaded once at
/// startup and records store the resolved category, never a raw string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MagicianType {
    /// Display name of the category (e.g. "Professional")
    pub name: String,
}

impl MagicianType {
    /// Creates a category with the given display name.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl std::fmt::Display for MagicianType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}
