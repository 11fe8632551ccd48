use askama::Template;

use crate::core::duration::window_hours;
use crate::domain::model::StoredPoll;

#[derive(Template, Default)]
#[template(path = "input.html")]
pub struct InputTemplate {
    pub error: Option<String>,
}

pub struct WindowRow {
    pub start: String,
    pub end: String,
    pub hours: i64,
}

#[derive(Template)]
#[template(path = "detail.html")]
pub struct DetailTemplate {
    pub poll: StoredPoll,
    pub windows: Vec<WindowRow>,
    pub cosubject: String,
    pub standard_calc: String,
    pub standard_apply: String,
    pub additional_calc: String,
    pub additional_apply: String,
}

impl DetailTemplate {
    pub fn new(poll: StoredPoll) -> Self {
        let windows = poll
            .record
            .basic
            .poll_time
            .iter()
            .map(|w| WindowRow {
                start: w.start.format("%Y-%m-%d %H:%M").to_string(),
                end: w.end.format("%Y-%m-%d %H:%M").to_string(),
                hours: window_hours(w),
            })
            .collect();
        let weighting = &poll.record.summary.weighting;

        Self {
            cosubject: or_dash(&poll.record.basic.cosubject),
            standard_calc: or_dash(&weighting.standard.calculation),
            standard_apply: or_dash(&weighting.standard.apply),
            additional_calc: or_dash(&weighting.additional.calculation),
            additional_apply: or_dash(&weighting.additional.apply),
            windows,
            poll,
        }
    }
}

fn or_dash(value: &Option<String>) -> String {
    value.clone().unwrap_or_else(|| "-".to_string())
}
