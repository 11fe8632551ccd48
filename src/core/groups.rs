//! Discovery of indexed groups: repeated sub-records submitted as
//! `<prefix>_<n>` fields, such as `polltime_start_1` or `area_name_3`.

use crate::core::fields::FormFields;
use crate::domain::ports::{GroupOrder, MismatchPolicy};
use crate::utils::error::{IntakeError, Result};
use regex::Regex;
use std::sync::LazyLock;

static INDEXED_KEY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(polltime_start|polltime_end|area_orig|area_weight|area_name)_(.*)$").unwrap()
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupPrefix {
    PollTimeStart,
    PollTimeEnd,
    AreaOrig,
    AreaWeight,
    AreaName,
}

impl GroupPrefix {
    fn from_name(prefix: &str) -> Option<Self> {
        match prefix {
            "polltime_start" => Some(GroupPrefix::PollTimeStart),
            "polltime_end" => Some(GroupPrefix::PollTimeEnd),
            "area_orig" => Some(GroupPrefix::AreaOrig),
            "area_weight" => Some(GroupPrefix::AreaWeight),
            "area_name" => Some(GroupPrefix::AreaName),
            _ => None,
        }
    }
}

/// Split an indexed field name into its prefix and suffix.
pub fn classify(key: &str) -> Option<(GroupPrefix, &str)> {
    let caps = INDEXED_KEY.captures(key)?;
    let prefix = GroupPrefix::from_name(caps.get(1)?.as_str())?;
    Some((prefix, caps.get(2)?.as_str()))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexedValue {
    pub key: String,
    pub index: Option<u64>,
    pub value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IndexedGroups {
    pub poll_start: Vec<IndexedValue>,
    pub poll_end: Vec<IndexedValue>,
    pub area_orig: Vec<IndexedValue>,
    pub area_weight: Vec<IndexedValue>,
    pub area_name: Vec<IndexedValue>,
}

impl IndexedGroups {
    pub fn extract(fields: &FormFields, order: GroupOrder) -> Self {
        let mut groups = IndexedGroups::default();

        for (key, value) in fields.iter() {
            let Some((prefix, suffix)) = classify(key) else {
                continue;
            };
            let entry = IndexedValue {
                key: key.to_string(),
                index: suffix.parse::<u64>().ok(),
                value: value.to_string(),
            };
            match prefix {
                GroupPrefix::PollTimeStart => groups.poll_start.push(entry),
                GroupPrefix::PollTimeEnd => groups.poll_end.push(entry),
                GroupPrefix::AreaOrig => groups.area_orig.push(entry),
                GroupPrefix::AreaWeight => groups.area_weight.push(entry),
                GroupPrefix::AreaName => groups.area_name.push(entry),
            }
        }

        if order == GroupOrder::BySuffix {
            for group in [
                &mut groups.poll_start,
                &mut groups.poll_end,
                &mut groups.area_orig,
                &mut groups.area_weight,
                &mut groups.area_name,
            ] {
                // stable: unnumbered keys keep their relative order, last
                group.sort_by_key(|v| (v.index.is_none(), v.index));
            }
        }

        groups
    }
}

/// Number of rows that can be paired from groups of the given lengths.
pub fn paired_len(group: &str, lengths: &[usize], policy: MismatchPolicy) -> Result<usize> {
    let shortest = lengths.iter().copied().min().unwrap_or(0);
    let longest = lengths.iter().copied().max().unwrap_or(0);
    if shortest == longest {
        return Ok(shortest);
    }

    match policy {
        MismatchPolicy::Truncate => {
            tracing::warn!(
                group,
                ?lengths,
                kept = shortest,
                "Indexed group lengths differ, dropping trailing entries"
            );
            Ok(shortest)
        }
        MismatchPolicy::Reject => Err(IntakeError::AlignmentMismatch {
            group: group.to_string(),
            lengths: lengths.to_vec(),
        }),
    }
}
