use crate::core::{FormFields, FormNormalizer, NormalizerOptions, PollRecord, PollStore};
use crate::domain::model::StoredPoll;
use crate::utils::error::{IntakeError, Result};
use std::sync::Arc;

/// Normalizes submissions and hands them to the injected store.
#[derive(Clone)]
pub struct IntakeService {
    normalizer: FormNormalizer,
    store: Arc<dyn PollStore>,
}

impl IntakeService {
    pub fn new(store: Arc<dyn PollStore>, options: NormalizerOptions) -> Self {
        Self {
            normalizer: FormNormalizer::new(options),
            store,
        }
    }

    pub fn normalize(&self, fields: &FormFields) -> Result<PollRecord> {
        self.normalizer.normalize(fields)
    }

    pub async fn submit(&self, fields: &FormFields) -> Result<StoredPoll> {
        tracing::debug!("Normalizing submission with {} fields", fields.len());

        let record = match self.normalize(fields) {
            Ok(record) => record,
            Err(e) => {
                tracing::info!("Rejected submission: {}", e);
                return Err(e);
            }
        };

        let stored = self.store.insert(record).await?;
        tracing::info!(
            reg_idx = stored.record.reg_idx(),
            id = %stored.id,
            poll_duration = stored.record.basic.poll_duration,
            "Stored poll submission"
        );
        Ok(stored)
    }

    pub async fn detail(&self, reg_idx: i64) -> Result<StoredPoll> {
        self.store
            .get(reg_idx)
            .await?
            .ok_or(IntakeError::NotFound { reg_idx })
    }

    pub async fn list(&self) -> Result<Vec<StoredPoll>> {
        self.store.list().await
    }
}
