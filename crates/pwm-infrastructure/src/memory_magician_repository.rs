//! In-memory MagicianRepository implementation.
//!
//! Backs the service tests and any embedding that wants an ephemeral
//! store. Same contract as the directory-backed store: numeric id
//! assignment on insert and the unique-email check at the storage
//! boundary.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use pwm_core::error::{PwmError, Result};
use pwm_core::magician::{Magician, MagicianRepository};

struct Inner {
    records: HashMap<u64, Magician>,
    next_id: u64,
}

/// Map-backed magician repository.
pub struct MemoryMagicianRepository {
    inner: RwLock<Inner>,
}

impl MemoryMagicianRepository {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                records: HashMap::new(),
                next_id: 1,
            }),
        }
    }
}

impl Default for MemoryMagicianRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MagicianRepository for MemoryMagicianRepository {
    async fn find_by_id(&self, id: u64) -> Result<Magician> {
        let inner = self.inner.read().await;
        inner
            .records
            .get(&id)
            .cloned()
            .ok_or_else(|| PwmError::not_found("magician", id.to_string()))
    }

    async fn find_by_email(&self, email: &str) -> Result<Magician> {
        let inner = self.inner.read().await;
        inner
            .records
            .values()
            .find(|m| m.email == email)
            .cloned()
            .ok_or_else(|| PwmError::not_found("magician", email))
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool> {
        let inner = self.inner.read().await;
        Ok(inner.records.values().any(|m| m.email == email))
    }

    async fn save(&self, mut magician: Magician) -> Result<Magician> {
        // One write lock covers the uniqueness check and the insert, so
        // the last conflicting save fails instead of overwriting.
        let mut inner = self.inner.write().await;

        let duplicate = inner
            .records
            .values()
            .any(|m| m.email == magician.email && m.id != magician.id);
        if duplicate {
            return Err(PwmError::conflict(&magician.email));
        }

        if magician.id == 0 {
            magician.id = inner.next_id;
            inner.next_id += 1;
            tracing::debug!(id = magician.id, "assigned id to new magician record");
        } else if !inner.records.contains_key(&magician.id) {
            return Err(PwmError::not_found("magician", magician.id.to_string()));
        }

        inner.records.insert(magician.id, magician.clone());
        Ok(magician)
    }

    async fn delete(&self, id: u64) -> Result<()> {
        let mut inner = self.inner.write().await;
        inner
            .records
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| PwmError::not_found("magician", id.to_string()))
    }

    async fn list_all(&self) -> Result<Vec<Magician>> {
        let inner = self.inner.read().await;
        let mut records: Vec<Magician> = inner.records.values().cloned().collect();
        records.sort_by_key(|m| m.id);
        Ok(records)
    }
}
