//! Magician domain model, form bindings, and repository trait.

mod model;
mod repository;
mod request;

pub use model::Magician;
pub use repository::MagicianRepository;
pub use request::{AccountRequest, ProfileRequest};
