use crate::domain::model::{PollRecord, StoredPoll};
use crate::utils::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Document store for normalized poll records, keyed by `reg_idx`.
#[async_trait]
pub trait PollStore: Send + Sync {
    /// Persist a record and assign it a durable id. A record with the same
    /// `reg_idx` replaces the previous document.
    async fn insert(&self, record: PollRecord) -> Result<StoredPoll>;
    async fn get(&self, reg_idx: i64) -> Result<Option<StoredPoll>>;
    async fn list(&self) -> Result<Vec<StoredPoll>>;
}

/// Order in which members of an indexed group are paired.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "snake_case")]
pub enum GroupOrder {
    /// Keep the order the fields were submitted in.
    AsSubmitted,
    /// Sort each group by the numeric suffix of its field names.
    #[default]
    BySuffix,
}

/// What to do when zipped groups have different lengths.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "snake_case")]
pub enum MismatchPolicy {
    /// Drop trailing entries so the shortest group wins.
    #[default]
    Truncate,
    /// Fail with `AlignmentMismatch`.
    Reject,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizerOptions {
    #[serde(default)]
    pub group_order: GroupOrder,
    #[serde(default)]
    pub on_mismatch: MismatchPolicy,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "snake_case")]
pub enum StoreKind {
    #[default]
    File,
    Memory,
}

pub trait ConfigProvider: Send + Sync {
    fn bind_addr(&self) -> &str;
    fn store_kind(&self) -> StoreKind;
    fn store_path(&self) -> &str;
    fn normalizer_options(&self) -> NormalizerOptions;
}
