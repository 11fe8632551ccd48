use crate::domain::model::{PollRecord, StoredPoll};
use crate::domain::ports::PollStore;
use crate::utils::error::Result;
use async_trait::async_trait;
use chrono::Utc;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::Mutex;
use uuid::Uuid;

/// In-memory store for development and tests. Contents are lost on exit.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    polls: Arc<Mutex<BTreeMap<i64, StoredPoll>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.polls.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.polls.lock().await.is_empty()
    }
}

#[async_trait]
impl PollStore for MemoryStore {
    async fn insert(&self, record: PollRecord) -> Result<StoredPoll> {
        let mut polls = self.polls.lock().await;
        let reg_idx = record.reg_idx();

        let stored = match polls.remove(&reg_idx) {
            Some(existing) => StoredPoll { record, ..existing },
            None => StoredPoll {
                id: Uuid::new_v4(),
                created_at: Utc::now().naive_utc(),
                record,
            },
        };
        polls.insert(reg_idx, stored.clone());

        tracing::debug!("Stored poll {} with id {}", reg_idx, stored.id);
        Ok(stored)
    }

    async fn get(&self, reg_idx: i64) -> Result<Option<StoredPoll>> {
        Ok(self.polls.lock().await.get(&reg_idx).cloned())
    }

    async fn list(&self) -> Result<Vec<StoredPoll>> {
        Ok(self.polls.lock().await.values().cloned().collect())
    }
}
