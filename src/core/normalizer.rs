use crate::core::duration::total_hours;
use crate::core::fields::{parse_int, parse_window_timestamp, FormFields};
use crate::core::groups::{paired_len, IndexedGroups};
use crate::domain::model::{
    AgeCount, AgeSample, AreaSample, Basic, Contact, GenderCount, GenderSample, PollRecord,
    PollTimeWindow, Publish, SampleCount, SampleMethod, SampleSize, Selection, StandardDeviation,
    Summary, Weighting, WeightingStep,
};
use crate::domain::ports::NormalizerOptions;
use crate::utils::error::Result;

/// Turns a flat form submission into a `PollRecord`.
///
/// Pure apart from log output: the same fields and options always give the
/// same record or the same error.
#[derive(Debug, Clone, Copy, Default)]
pub struct FormNormalizer {
    options: NormalizerOptions,
}

impl FormNormalizer {
    pub fn new(options: NormalizerOptions) -> Self {
        Self { options }
    }

    pub fn normalize(&self, fields: &FormFields) -> Result<PollRecord> {
        let groups = IndexedGroups::extract(fields, self.options.group_order);

        let poll_time = self.poll_windows(&groups)?;
        let poll_duration = total_hours(&poll_time);
        let area = self.area_samples(&groups)?;

        let record = PollRecord {
            basic: Basic {
                reg_idx: fields.required_int("reg_idx")?,
                elect_category: fields.required_string("elect_category")?,
                elect_area: fields.required_string("elect_area")?,
                elect_name: fields.required_string("elect_name")?,
                client_name: fields.required_string("client_name")?,
                subject: fields.required_string("subject")?,
                cosubject: fields.optional_string("cosubject"),
                poll_area: fields.required_string("poll_area")?,
                poll_time,
                poll_duration,
                poll_day: fields.required_int("poll_day")?,
                poll_target: fields.required_string("poll_target")?,
            },
            sample_size: SampleSize {
                whole: SampleCount {
                    original: fields.required_int("whole_orig")?,
                    weighted: fields.required_int("whole_weight")?,
                },
                gender: GenderSample {
                    original: GenderCount {
                        male: fields.required_int("man_orig")?,
                        female: fields.required_int("woman_orig")?,
                    },
                    weighted: GenderCount {
                        male: fields.required_int("man_weight")?,
                        female: fields.required_int("woman_weight")?,
                    },
                },
                age: AgeSample {
                    original: age_counts(fields, "orig")?,
                    weighted: age_counts(fields, "weight")?,
                },
                area,
            },
            sample_method: SampleMethod {
                selection: Selection {
                    frame: fields.required_string("sample_frame")?,
                    size: fields.required_int("sample_size")?,
                    method: fields.required_string("sample_method")?,
                },
                contact: Contact {
                    mobile_ratio: fields.required_float("mobile_ratio")?,
                    r: fields.required_int("sample_R")?,
                    i: fields.required_int("sample_I")?,
                    sum: fields.required_int("sample_sum")?,
                    contact_ratio: fields.required_float("contact_ratio")?,
                    response_ratio: fields.required_float("response_ratio")?,
                },
            },
            summary: Summary {
                weighting: Weighting {
                    standard: WeightingStep {
                        calculation: fields.optional_string("weight1_calc"),
                        apply: fields.optional_string("weight1_apply"),
                    },
                    additional: WeightingStep {
                        calculation: fields.optional_string("weight2_calc"),
                        apply: fields.optional_string("weight2_apply"),
                    },
                },
                standard_deviation: StandardDeviation {
                    trust: fields.required_float("trust")?,
                    error: fields.required_float("error")?,
                },
                publish: Publish {
                    media: fields.required_string("publish_media")?,
                    publisher: fields.required_string("publisher")?,
                    date: fields.required_timestamp("publish_date")?,
                },
            },
        };

        tracing::debug!(
            reg_idx = record.basic.reg_idx,
            windows = record.basic.poll_time.len(),
            areas = record.sample_size.area.len(),
            poll_duration = record.basic.poll_duration,
            "Normalized poll submission"
        );
        Ok(record)
    }

    fn poll_windows(&self, groups: &IndexedGroups) -> Result<Vec<PollTimeWindow>> {
        let len = paired_len(
            "poll_time",
            &[groups.poll_start.len(), groups.poll_end.len()],
            self.options.on_mismatch,
        )?;

        groups
            .poll_start
            .iter()
            .zip(&groups.poll_end)
            .take(len)
            .map(|(start, end)| {
                Ok(PollTimeWindow {
                    start: parse_window_timestamp(&start.key, &start.value)?,
                    end: parse_window_timestamp(&end.key, &end.value)?,
                })
            })
            .collect()
    }

    fn area_samples(&self, groups: &IndexedGroups) -> Result<Vec<AreaSample>> {
        let len = paired_len(
            "area",
            &[
                groups.area_name.len(),
                groups.area_orig.len(),
                groups.area_weight.len(),
            ],
            self.options.on_mismatch,
        )?;

        groups
            .area_name
            .iter()
            .zip(&groups.area_orig)
            .zip(&groups.area_weight)
            .take(len)
            .map(|((name, orig), weight)| {
                Ok(AreaSample {
                    area: name.value.clone(),
                    original: parse_int(&orig.key, &orig.value)?,
                    weighted: parse_int(&weight.key, &weight.value)?,
                })
            })
            .collect()
    }
}

fn age_counts(fields: &FormFields, kind: &str) -> Result<AgeCount> {
    let field = |decade: u8| fields.required_int(&format!("_{}_{}", decade, kind));
    Ok(AgeCount {
        _20: field(20)?,
        _30: field(30)?,
        _40: field(40)?,
        _50: field(50)?,
        _60: field(60)?,
    })
}
