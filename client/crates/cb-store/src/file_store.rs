//! # Filesystem-backed key-value store
//!
//! [`FileStore`] keeps each key in its own JSON file so that a write touches
//! exactly one file.
//!
//! ```text
//! <dir>/
//! ├── user.json                        # serialized session record
//! └── bookmarkedRecipes_<id>.json      # saved recipe ids
//! ```
//!
//! Writes go through a temp file, `fsync`, then an atomic rename, so a crash
//! mid-write leaves the previous value intact.

use crate::{KeyValueStore, StoreError, StoreResult, validate_key};

use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use log::debug;
use tokio::fs;
use tokio::io::AsyncWriteExt;

static TEMP_COUNTER: AtomicU64 = AtomicU64::new(0);

#[derive(Clone, Debug)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn item_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }

    fn temp_path(&self, key: &str) -> PathBuf {
        let seq = TEMP_COUNTER.fetch_add(1, Ordering::Relaxed);
        self.dir
            .join(format!("{key}.json.tmp.{}.{seq}", std::process::id()))
    }
}

#[async_trait]
impl KeyValueStore for FileStore {
    async fn get_item(&self, key: &str) -> StoreResult<Option<String>> {
        validate_key(key)?;
        let path = self.item_path(key);

        match fs::read_to_string(&path).await {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StoreError::read(path, e)),
        }
    }

    async fn set_item(&self, key: &str, value: &str) -> StoreResult<()> {
        validate_key(key)?;

        fs::create_dir_all(&self.dir)
            .await
            .map_err(|e| StoreError::dir_creation(self.dir.clone(), e))?;

        let final_path = self.item_path(key);
        let temp_path = self.temp_path(key);

        {
            let mut file = fs::File::create(&temp_path)
                .await
                .map_err(|e| StoreError::write(temp_path.clone(), e))?;

            file.write_all(value.as_bytes())
                .await
                .map_err(|e| StoreError::write(temp_path.clone(), e))?;

            file.sync_all()
                .await
                .map_err(|e| StoreError::write(temp_path.clone(), e))?;
        }

        if let Err(e) = fs::rename(&temp_path, &final_path).await {
            let _ = fs::remove_file(&temp_path).await;
            return Err(StoreError::write(final_path, e));
        }

        debug!("Stored key '{key}' at {final_path:?}");
        Ok(())
    }

    async fn remove_item(&self, key: &str) -> StoreResult<()> {
        validate_key(key)?;
        let path = self.item_path(key);

        match fs::remove_file(&path).await {
            Ok(()) => {
                debug!("Removed key '{key}'");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StoreError::remove(path, e)),
        }
    }
}
