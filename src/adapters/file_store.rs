use crate::domain::model::{PollRecord, StoredPoll};
use crate::domain::ports::PollStore;
use crate::utils::error::Result;
use async_trait::async_trait;
use chrono::Utc;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::Mutex;
use uuid::Uuid;

/// Stores each poll as a pretty-printed JSON document named after its
/// `reg_idx` under `base_path`.
///
/// Inserts are serialized, so concurrent resubmissions of one `reg_idx`
/// all see the same document id. Clones share the lock.
#[derive(Debug, Clone)]
pub struct FileStore {
    base_path: PathBuf,
    write_lock: Arc<Mutex<()>>,
}

impl FileStore {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Create the store directory if it does not exist yet.
    pub async fn open(base_path: impl Into<PathBuf>) -> Result<Self> {
        let store = Self::new(base_path);
        tokio::fs::create_dir_all(&store.base_path).await?;
        tracing::info!("Using file store at {}", store.base_path.display());
        Ok(store)
    }

    fn document_path(&self, reg_idx: i64) -> PathBuf {
        self.base_path.join(format!("poll_{}.json", reg_idx))
    }

    async fn read_document(path: &Path) -> Result<Option<StoredPoll>> {
        match tokio::fs::read(path).await {
            Ok(data) => Ok(Some(serde_json::from_slice(&data)?)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}

#[async_trait]
impl PollStore for FileStore {
    async fn insert(&self, record: PollRecord) -> Result<StoredPoll> {
        let path = self.document_path(record.reg_idx());
        let _guard = self.write_lock.lock().await;

        let stored = match Self::read_document(&path).await? {
            Some(existing) => StoredPoll { record, ..existing },
            None => StoredPoll {
                id: Uuid::new_v4(),
                created_at: Utc::now().naive_utc(),
                record,
            },
        };

        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        // write then rename so readers never see a half-written document
        let tmp_path = path.with_extension(format!("{}.tmp", Uuid::new_v4()));
        let data = serde_json::to_vec_pretty(&stored)?;
        let written = match tokio::fs::write(&tmp_path, &data).await {
            Ok(()) => tokio::fs::rename(&tmp_path, &path).await,
            Err(e) => Err(e),
        };
        if let Err(e) = written {
            if let Err(cleanup) = tokio::fs::remove_file(&tmp_path).await {
                tracing::debug!("Could not remove {}: {}", tmp_path.display(), cleanup);
            }
            return Err(e.into());
        }

        tracing::debug!(
            "Wrote poll {} ({} bytes) to {}",
            stored.record.reg_idx(),
            data.len(),
            path.display()
        );
        Ok(stored)
    }

    async fn get(&self, reg_idx: i64) -> Result<Option<StoredPoll>> {
        Self::read_document(&self.document_path(reg_idx)).await
    }

    async fn list(&self) -> Result<Vec<StoredPoll>> {
        let mut polls = Vec::new();
        let mut entries = match tokio::fs::read_dir(&self.base_path).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(polls),
            Err(e) => return Err(e.into()),
        };

        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            let is_document = path
                .file_name()
                .and_then(|name| name.to_str())
                .is_some_and(|name| name.starts_with("poll_") && name.ends_with(".json"));
            if !is_document {
                continue;
            }
            if let Some(poll) = Self::read_document(&path).await? {
                polls.push(poll);
            }
        }

        polls.sort_by_key(|p| p.record.reg_idx());
        Ok(polls)
    }
}
