//! In-memory RoutineRepository implementation.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use pwm_core::error::{PwmError, Result};
use pwm_core::routine::{Routine, RoutineRepository};

struct Inner {
    records: HashMap<u64, Routine>,
    next_id: u64,
}

/// Map-backed routine repository.
pub struct MemoryRoutineRepository {
    inner: RwLock<Inner>,
}

impl MemoryRoutineRepository {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                records: HashMap::new(),
                next_id: 1,
            }),
        }
    }
}

impl Default for MemoryRoutineRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RoutineRepository for MemoryRoutineRepository {
    async fn find_by_id(&self, id: u64) -> Result<Routine> {
        let inner = self.inner.read().await;
        inner
            .records
            .get(&id)
            .cloned()
            .ok_or_else(|| PwmError::not_found("routine", id.to_string()))
    }

    async fn save(&self, mut routine: Routine) -> Result<Routine> {
        let mut inner = self.inner.write().await;

        if routine.id == 0 {
            routine.id = inner.next_id;
            inner.next_id += 1;
        } else if !inner.records.contains_key(&routine.id) {
            return Err(PwmError::not_found("routine", routine.id.to_string()));
        }

        inner.records.insert(routine.id, routine.clone());
        Ok(routine)
    }

    async fn delete(&self, id: u64) -> Result<()> {
        let mut inner = self.inner.write().await;
        inner
            .records
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| PwmError::not_found("routine", id.to_string()))
    }

    async fn list_all(&self) -> Result<Vec<Routine>> {
        let inner = self.inner.read().await;
        let mut records: Vec<Routine> = inner.records.values().cloned().collect();
        records.sort_by_key(|r| r.id);
        Ok(records)
    }
}
