pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{open_store, FileStore, MemoryStore};
pub use app::IntakeService;
pub use config::IntakeConfig;
pub use core::{FormFields, FormNormalizer};
pub use domain::model::{PollRecord, StoredPoll};
pub use utils::error::{IntakeError, Result};
