//! Magician repository trait.
//!
//! Defines the interface for magician persistence operations.

use async_trait::async_trait;

use super::model::Magician;
use crate::error::Result;

/// An abstract repository for managing magician persistence.
///
/// This trait defines the contract for persisting and retrieving
/// magician records, decoupling the account service from the specific
/// storage mechanism (in-memory map, JSON directory, database).
///
/// # Implementation Notes
///
/// Implementations must:
/// - assign the next numeric id on insert (`save` with `id == 0`)
/// - enforce email uniqueness at the storage boundary: a save that would
///   give two distinct ids the same email fails with `Conflict`, never
///   silently creating a second record
/// - keep writes atomic per record, so a racing conflicting save loses
///   cleanly instead of corrupting the store
#[async_trait]
pub trait MagicianRepository: Send + Sync {
    /// Finds a magician by id.
    ///
    /// # Returns
    ///
    /// - `Ok(Magician)`: Record found
    /// - `Err(PwmError::NotFound)`: No record with that id
    async fn find_by_id(&self, id: u64) -> Result<Magician>;

    /// Finds a magician by email (exact match).
    ///
    /// # Returns
    ///
    /// - `Ok(Magician)`: Record found
    /// - `Err(PwmError::NotFound)`: No record with that email
    async fn find_by_email(&self, email: &str) -> Result<Magician>;

    /// Whether a record with the given email exists.
    async fn exists_by_email(&self, email: &str) -> Result<bool>;

    /// Saves a magician record.
    ///
    /// Inserts and assigns the next id when `magician.id == 0`, updates
    /// in place otherwise. Updating an id that was never assigned fails
    /// with `NotFound`.
    ///
    /// # Returns
    ///
    /// - `Ok(Magician)`: The persisted record, with its assigned id
    /// - `Err(PwmError::Conflict)`: The email belongs to another record
    async fn save(&self, magician: Magician) -> Result<Magician>;

    /// Deletes a magician record by id.
    ///
    /// Hard delete: anything referencing the record is left dangling.
    ///
    /// # Returns
    ///
    /// - `Ok(())`: Record removed
    /// - `Err(PwmError::NotFound)`: No record with that id
    async fn delete(&self, id: u64) -> Result<()>;

    /// Lists all magician records in ascending id order.
    async fn list_all(&self) -> Result<Vec<Magician>>;
}
