//! Routine catalog service.
//!
//! Thin orchestration over the routine repository: form-driven
//! add/edit, deletion, and listing for the catalog pages.

use std::sync::Arc;

use pwm_core::error::Result;
use pwm_core::routine::{Routine, RoutineRepository, RoutineRequest};

/// Service for managing the routine catalog.
pub struct RoutineCatalogService {
    repository: Arc<dyn RoutineRepository>,
}

impl RoutineCatalogService {
    /// Creates a new RoutineCatalogService.
    pub fn new(repository: Arc<dyn RoutineRepository>) -> Self {
        Self { repository }
    }

    /// Adds a routine (`id == 0`) or overwrites an existing one.
    ///
    /// # Returns
    ///
    /// - `Ok(Routine)`: The persisted record, with its assigned id
    /// - `Err(PwmError::Validation)`: A required field is missing
    /// - `Err(PwmError::NotFound)`: Update of a nonexistent id
    pub async fn create_or_update(&self, request: RoutineRequest) -> Result<Routine> {
        request.validate()?;
        tracing::debug!(id = request.id, name = %request.name, "routine form submitted");

        if request.id == 0 {
            let saved = self.repository.save(request.into_routine()).await?;
            tracing::info!(id = saved.id, "new routine created");
            return Ok(saved);
        }

        let mut record = self.repository.find_by_id(request.id).await?;
        request.apply_to(&mut record);
        self.repository.save(record).await
    }

    /// Fetches a routine by id; `NotFound` if absent.
    pub async fn get(&self, id: u64) -> Result<Routine> {
        self.repository.find_by_id(id).await
    }

    /// Deletes a routine by id; `NotFound` if absent.
    pub async fn delete(&self, id: u64) -> Result<()> {
        self.repository.delete(id).await?;
        tracing::info!(id, "routine deleted");
        Ok(())
    }

    /// All routines in catalog (id) order.
    pub async fn list_all(&self) -> Result<Vec<Routine>> {
        self.repository.list_all().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pwm_infrastructure::MemoryRoutineRepository;

    fn service() -> RoutineCatalogService {
        RoutineCatalogService::new(Arc::new(MemoryRoutineRepository::new()))
    }

    fn request(name: &str) -> RoutineRequest {
        RoutineRequest {
            id: 0,
            name: name.to_string(),
            description: "A routine for testing".to_string(),
            duration_minutes: 5,
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_create_and_list() {
        let service = service();

        let first = service.create_or_update(request("First")).await.unwrap();
        service.create_or_update(request("Second")).await.unwrap();

        assert_eq!(first.id, 1);
        let names: Vec<String> = service
            .list_all()
            .await
            .unwrap()
            .into_iter()
            .map(|r| r.name)
            .collect();
        assert_eq!(names, vec!["First", "Second"]);
    }

    #[tokio::test]
    async fn test_update_overwrites_fields() {
        let service = service();
        let saved = service.create_or_update(request("First")).await.unwrap();

        let mut edit = RoutineRequest::from_routine(&saved);
        edit.duration_minutes = 12;
        edit.method = Some("Sleight of hand".to_string());
        let updated = service.create_or_update(edit).await.unwrap();

        assert_eq!(updated.id, saved.id);
        assert_eq!(updated.duration_minutes, 12);
        assert_eq!(updated.method.as_deref(), Some("Sleight of hand"));
    }

    #[tokio::test]
    async fn test_invalid_form_is_rejected() {
        let service = service();
        let mut bad = request("First");
        bad.duration_minutes = 0;

        assert!(service.create_or_update(bad).await.unwrap_err().is_validation());
        assert!(service.list_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_unknown_id_fails() {
        let service = service();
        assert!(service.delete(7).await.unwrap_err().is_not_found());
    }
}
