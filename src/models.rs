use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Per-day counts as stored on disk.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct DayCounts {
    #[serde(default)]
    pub leetcode: u32,
    #[serde(default)]
    pub github: u32,
}

impl DayCounts {
    pub fn total(&self) -> u32 {
        self.leetcode.saturating_add(self.github)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ActivityStore {
    pub days: BTreeMap<String, DayCounts>,
}

/// A single (date, count) pair feeding the heatmap.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActivityRecord {
    pub date: String,
    pub count: u32,
}

impl ActivityRecord {
    pub fn new(date: impl Into<String>, count: u32) -> Self {
        Self {
            date: date.into(),
            count,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ActivityRange {
    #[default]
    #[serde(rename = "1y")]
    OneYear,
    #[serde(rename = "90d")]
    NinetyDays,
    #[serde(rename = "30d")]
    ThirtyDays,
}

impl ActivityRange {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OneYear => "1y",
            Self::NinetyDays => "90d",
            Self::ThirtyDays => "30d",
        }
    }

    /// Number of days covered, today included.
    pub fn span_days(&self) -> i64 {
        match self {
            Self::OneYear => 365,
            Self::NinetyDays => 90,
            Self::ThirtyDays => 30,
        }
    }
}

impl fmt::Display for ActivityRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActivityRange {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim() {
            "1y" => Ok(Self::OneYear),
            "90d" => Ok(Self::NinetyDays),
            "30d" => Ok(Self::ThirtyDays),
            other => Err(format!("unknown activity range '{other}'")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityDay {
    /// Missing, null or non-string dates decode as empty and are skipped by the lookup.
    #[serde(default, deserialize_with = "lenient_date")]
    pub date: String,
    pub total: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub leetcode: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<u32>,
}

fn lenient_date<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(date) => Ok(date),
        _ => Ok(String::new()),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityResponse {
    pub range: ActivityRange,
    pub days: Vec<ActivityDay>,
}

#[derive(Debug, Deserialize)]
pub struct ActivityQuery {
    pub range: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ActivityUpsert {
    pub date: String,
    pub leetcode: Option<u32>,
    pub github: Option<u32>,
}
