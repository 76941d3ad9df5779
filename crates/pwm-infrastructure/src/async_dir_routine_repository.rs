//! Directory-backed RoutineRepository implementation.
//!
//! One routine = one JSON file under `<data_dir>/routines/<id>.json`,
//! materials included inline in the record.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tokio::sync::Mutex;

use pwm_core::error::{PwmError, Result};
use pwm_core::routine::{Routine, RoutineRepository};

use crate::paths::StoragePaths;

/// File-per-record routine repository.
pub struct AsyncDirRoutineRepository {
    dir: PathBuf,
    write_lock: Mutex<()>,
}

impl AsyncDirRoutineRepository {
    /// Creates a repository rooted at the platform data dir, or at a
    /// custom base directory (for testing).
    pub async fn new(base_dir: Option<&Path>) -> Result<Self> {
        let paths = StoragePaths::new(base_dir);
        let dir = paths
            .routines_dir()
            .map_err(|e| PwmError::config(e.to_string()))?;
        fs::create_dir_all(&dir)
            .await
            .map_err(|e| PwmError::io(format!("Failed to create routines dir: {}", e)))?;
        Ok(Self {
            dir,
            write_lock: Mutex::new(()),
        })
    }

    fn record_path(&self, id: u64) -> PathBuf {
        self.dir.join(format!("{}.json", id))
    }

    async fn load_record(&self, path: &Path) -> Result<Routine> {
        let content = fs::read_to_string(path)
            .await
            .map_err(|e| PwmError::io(format!("Failed to read routine record: {}", e)))?;
        let routine: Routine = serde_json::from_str(&content)?;
        Ok(routine)
    }

    async fn load_all(&self) -> Result<Vec<Routine>> {
        let mut records = Vec::new();
        let mut entries = fs::read_dir(&self.dir)
            .await
            .map_err(|e| PwmError::io(format!("Failed to read routines dir: {}", e)))?;

        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| PwmError::io(e.to_string()))?
        {
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            records.push(self.load_record(&path).await?);
        }

        records.sort_by_key(|r| r.id);
        Ok(records)
    }

    async fn store(&self, routine: &Routine) -> Result<()> {
        let path = self.record_path(routine.id);
        let json = serde_json::to_string_pretty(routine)?;

        let tmp_path = self.dir.join(format!(".{}.json.tmp", routine.id));
        fs::write(&tmp_path, json)
            .await
            .map_err(|e| PwmError::io(format!("Failed to write routine record: {}", e)))?;
        fs::rename(&tmp_path, &path)
            .await
            .map_err(|e| PwmError::io(format!("Failed to commit routine record: {}", e)))?;

        Ok(())
    }
}

#[async_trait]
impl RoutineRepository for AsyncDirRoutineRepository {
    async fn find_by_id(&self, id: u64) -> Result<Routine> {
        let path = self.record_path(id);
        if !path.exists() {
            return Err(PwmError::not_found("routine", id.to_string()));
        }
        self.load_record(&path).await
    }

    async fn save(&self, mut routine: Routine) -> Result<Routine> {
        let _guard = self.write_lock.lock().await;

        if routine.id == 0 {
            let existing = self.load_all().await?;
            routine.id = existing.last().map(|r| r.id).unwrap_or(0) + 1;
            tracing::debug!(id = routine.id, "assigned id to new routine record");
        } else if !self.record_path(routine.id).exists() {
            return Err(PwmError::not_found("routine", routine.id.to_string()));
        }

        self.store(&routine).await?;
        Ok(routine)
    }

    async fn delete(&self, id: u64) -> Result<()> {
        let _guard = self.write_lock.lock().await;

        let path = self.record_path(id);
        if !path.exists() {
            return Err(PwmError::not_found("routine", id.to_string()));
        }
        fs::remove_file(&path)
            .await
            .map_err(|e| PwmError::io(format!("Failed to delete routine record: {}", e)))?;
        Ok(())
    }

    async fn list_all(&self) -> Result<Vec<Routine>> {
        self.load_all().await
    }
}
