//! Routine repository trait.

use async_trait::async_trait;

use super::model::Routine;
use crate::error::Result;

/// An abstract repository for managing routine persistence.
///
/// Same id-assignment contract as the magician repository: `save` with
/// `id == 0` inserts and assigns the next numeric id, any other id
/// updates in place. Routines have no logical unique key beyond the id.
#[async_trait]
pub trait RoutineRepository: Send + Sync {
    /// Finds a routine by id.
    ///
    /// # Returns
    ///
    /// - `Ok(Routine)`: Record found
    /// - `Err(PwmError::NotFound)`: No record with that id
    async fn find_by_id(&self, id: u64) -> Result<Routine>;

    /// Saves a routine, inserting when `routine.id == 0`.
    async fn save(&self, routine: Routine) -> Result<Routine>;

    /// Deletes a routine by id; `NotFound` if absent.
    async fn delete(&self, id: u64) -> Result<()>;

    /// Lists all routines in ascending id order.
    async fn list_all(&self) -> Result<Vec<Routine>>;
}
