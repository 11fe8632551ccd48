pub mod duration;
pub mod fields;
pub mod groups;
pub mod normalizer;

pub use crate::domain::model::PollRecord;
pub use crate::domain::ports::{ConfigProvider, NormalizerOptions, PollStore};
pub use crate::utils::error::Result;
pub use fields::FormFields;
pub use normalizer::FormNormalizer;
