//! Directory-backed MagicianRepository implementation.
//!
//! One magician = one JSON file under `<data_dir>/magicians/<id>.json`.
//! Writes go through a temporary file and an atomic rename; inserts and
//! updates take a mutex so id assignment and the unique-email check see
//! a consistent directory.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tokio::sync::Mutex;

use pwm_core::error::{PwmError, Result};
use pwm_core::magician::{Magician, MagicianRepository};

use crate::paths::StoragePaths;

/// File-per-record magician repository.
pub struct AsyncDirMagicianRepository {
    dir: PathBuf,
    write_lock: Mutex<()>,
}

impl AsyncDirMagicianRepository {
    /// Creates a repository rooted at the platform data dir, or at a
    /// custom base directory (for testing).
    pub async fn new(base_dir: Option<&Path>) -> Result<Self> {
        let paths = StoragePaths::new(base_dir);
        let dir = paths
            .magicians_dir()
            .map_err(|e| PwmError::config(e.to_string()))?;
        fs::create_dir_all(&dir)
            .await
            .map_err(|e| PwmError::io(format!("Failed to create magicians dir: {}", e)))?;
        Ok(Self {
            dir,
            write_lock: Mutex::new(()),
        })
    }

    fn record_path(&self, id: u64) -> PathBuf {
        self.dir.join(format!("{}.json", id))
    }

    async fn load_record(&self, path: &Path) -> Result<Magician> {
        let content = fs::read_to_string(path)
            .await
            .map_err(|e| PwmError::io(format!("Failed to read magician record: {}", e)))?;
        let magician: Magician = serde_json::from_str(&content)?;
        Ok(magician)
    }

    async fn load_all(&self) -> Result<Vec<Magician>> {
        let mut records = Vec::new();
        let mut entries = fs::read_dir(&self.dir)
            .await
            .map_err(|e| PwmError::io(format!("Failed to read magicians dir: {}", e)))?;

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

        records.sort_by_key(|m| m.id);
        Ok(records)
    }

    async fn store(&self, magician: &Magician) -> Result<()> {
        let path = self.record_path(magician.id);
        let json = serde_json::to_string_pretty(magician)?;

        // Tmp file + rename keeps a crashed write from leaving a
        // half-written record behind.
        let tmp_path = self.dir.join(format!(".{}.json.tmp", magician.id));
        fs::write(&tmp_path, json)
            .await
            .map_err(|e| PwmError::io(format!("Failed to write magician record: {}", e)))?;
        fs::rename(&tmp_path, &path)
            .await
            .map_err(|e| PwmError::io(format!("Failed to commit magician record: {}", e)))?;

        Ok(())
    }
}

#[async_trait]
impl MagicianRepository for AsyncDirMagicianRepository {
    async fn find_by_id(&self, id: u64) -> Result<Magician> {
        let path = self.record_path(id);
        if !path.exists() {
            return Err(PwmError::not_found("magician", id.to_string()));
        }
        self.load_record(&path).await
    }

    async fn find_by_email(&self, email: &str) -> Result<Magician> {
        self.load_all()
            .await?
            .into_iter()
            .find(|m| m.email == email)
            .ok_or_else(|| PwmError::not_found("magician", email))
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool> {
        Ok(self.load_all().await?.iter().any(|m| m.email == email))
    }

    async fn save(&self, mut magician: Magician) -> Result<Magician> {
        let _guard = self.write_lock.lock().await;

        let existing = self.load_all().await?;
        let duplicate = existing
            .iter()
            .any(|m| m.email == magician.email && m.id != magician.id);
        if duplicate {
            return Err(PwmError::conflict(&magician.email));
        }

        if magician.id == 0 {
            magician.id = existing.last().map(|m| m.id).unwrap_or(0) + 1;
            tracing::debug!(id = magician.id, "assigned id to new magician record");
        } else if !self.record_path(magician.id).exists() {
            return Err(PwmError::not_found("magician", magician.id.to_string()));
        }

        self.store(&magician).await?;
        Ok(magician)
    }

    async fn delete(&self, id: u64) -> Result<()> {
        let _guard = self.write_lock.lock().await;

        let path = self.record_path(id);
        if !path.exists() {
            return Err(PwmError::not_found("magician", id.to_string()));
        }
        fs::remove_file(&path)
            .await
            .map_err(|e| PwmError::io(format!("Failed to delete magician record: {}", e)))?;
        tracing::debug!(id, "deleted magician record");
        Ok(())
    }

    async fn list_all(&self) -> Result<Vec<Magician>> {
        self.load_all().await
    }
}
