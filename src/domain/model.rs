use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One survey-taking window. `end >= start` is not checked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PollTimeWindow {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AreaSample {
    pub area: String,
    pub original: i64,
    pub weighted: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Basic {
    pub reg_idx: i64,
    pub elect_category: String,
    pub elect_area: String,
    pub elect_name: String,
    pub client_name: String,
    pub subject: String,
    pub cosubject: Option<String>,
    pub poll_area: String,
    pub poll_time: Vec<PollTimeWindow>,
    /// Whole hours summed over `poll_time`.
    pub poll_duration: i64,
    pub poll_day: i64,
    pub poll_target: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SampleCount {
    pub original: i64,
    pub weighted: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenderCount {
    pub male: i64,
    pub female: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenderSample {
    pub original: GenderCount,
    pub weighted: GenderCount,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgeCount {
    pub _20: i64,
    pub _30: i64,
    pub _40: i64,
    pub _50: i64,
    pub _60: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgeSample {
    pub original: AgeCount,
    pub weighted: AgeCount,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SampleSize {
    pub whole: SampleCount,
    pub gender: GenderSample,
    pub age: AgeSample,
    pub area: Vec<AreaSample>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub frame: String,
    pub size: i64,
    pub method: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub mobile_ratio: f64,
    #[serde(rename = "R")]
    pub r: i64,
    #[serde(rename = "I")]
    pub i: i64,
    pub sum: i64,
    pub contact_ratio: f64,
    pub response_ratio: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampleMethod {
    pub selection: Selection,
    pub contact: Contact,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeightingStep {
    pub calculation: Option<String>,
    pub apply: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Weighting {
    pub standard: WeightingStep,
    pub additional: WeightingStep,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StandardDeviation {
    pub trust: f64,
    pub error: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Publish {
    pub media: String,
    pub publisher: String,
    pub date: NaiveDateTime,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub weighting: Weighting,
    pub standard_deviation: StandardDeviation,
    pub publish: Publish,
}

/// The full disclosure document for one election poll.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PollRecord {
    pub basic: Basic,
    pub sample_size: SampleSize,
    pub sample_method: SampleMethod,
    pub summary: Summary,
}

impl PollRecord {
    pub fn reg_idx(&self) -> i64 {
        self.basic.reg_idx
    }
}

/// A record as held by a `PollStore`, with the id the store assigned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredPoll {
    pub id: Uuid,
    pub created_at: NaiveDateTime,
    pub record: PollRecord,
}
