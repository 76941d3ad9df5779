//! Magician type reference data and registry.
//!
//! Every magician record carries exactly one experience-level category.
//! The category set is fixed at startup and looked up by name.

mod model;
mod registry;

pub use model::MagicianType;
pub use registry::MagicianTypeRegistry;
