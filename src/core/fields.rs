use crate::utils::error::{IntakeError, Result};
use chrono::NaiveDateTime;
use std::collections::HashMap;

/// Format of `datetime-local` inputs, used for poll time windows.
pub const WINDOW_FORMAT: &str = "%Y-%m-%dT%H:%M";

const PUBLISH_FORMATS: &[&str] = &[WINDOW_FORMAT, "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"];

/// A decoded form submission.
///
/// Keys are kept in the order they first appeared; when a name is submitted
/// more than once the last value wins. This is how multipart/urlencoded form
/// maps usually behave and the normalizer relies on it for group ordering.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    entries: Vec<(String, String)>,
    positions: HashMap<String, usize>,
}

impl FormFields {
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut fields = Self::default();
        for (key, value) in pairs {
            let key = key.into();
            let value = value.into();
            match fields.positions.get(&key) {
                Some(&pos) => fields.entries[pos].1 = value,
                None => {
                    fields.positions.insert(key.clone(), fields.entries.len());
                    fields.entries.push((key, value));
                }
            }
        }
        fields
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.positions
            .get(name)
            .map(|&pos| self.entries[pos].1.as_str())
    }

    pub fn required(&self, name: &str) -> Result<&str> {
        self.get(name).ok_or_else(|| IntakeError::missing(name))
    }

    pub fn required_string(&self, name: &str) -> Result<String> {
        self.required(name).map(str::to_string)
    }

    /// Empty or whitespace-only values count as absent.
    pub fn optional_string(&self, name: &str) -> Option<String> {
        self.get(name)
            .filter(|v| !v.trim().is_empty())
            .map(str::to_string)
    }

    pub fn required_int(&self, name: &str) -> Result<i64> {
        parse_int(name, self.required(name)?)
    }

    pub fn required_float(&self, name: &str) -> Result<f64> {
        let raw = self.required(name)?;
        raw.trim()
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| IntakeError::coercion(name, raw, "number"))
    }

    pub fn required_timestamp(&self, name: &str) -> Result<NaiveDateTime> {
        let raw = self.required(name)?;
        let trimmed = raw.trim();
        PUBLISH_FORMATS
            .iter()
            .find_map(|fmt| NaiveDateTime::parse_from_str(trimmed, fmt).ok())
            .ok_or_else(|| IntakeError::coercion(name, raw, "timestamp"))
    }
}

pub fn parse_int(name: &str, raw: &str) -> Result<i64> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| IntakeError::coercion(name, raw, "integer"))
}

/// Parse a poll window bound. Only the `datetime-local` form is accepted.
pub fn parse_window_timestamp(name: &str, raw: &str) -> Result<NaiveDateTime> {
    NaiveDateTime::parse_from_str(raw.trim(), WINDOW_FORMAT)
        .map_err(|_| IntakeError::coercion(name, raw, "timestamp"))
}
