//! Wire DTOs for the schedules REST API.
//!
//! DESIGN
//! ======
//! Records are owned by the remote service; the client only caches them.
//! Fields the table does not know about are carried in `extra` so an update
//! echoes the full record back instead of silently dropping columns.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Opaque record identifier; the service may hand out numbers or strings.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ScheduleId {
    Number(i64),
    Text(String),
}

impl ScheduleId {
    /// Whether the id is unusable for a remote call (`0` or an empty string).
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Number(n) => *n == 0,
            Self::Text(s) => s.is_empty(),
        }
    }
}

impl fmt::Display for ScheduleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for ScheduleId {
    fn from(value: i64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for ScheduleId {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

/// One weekly schedule entry as served by the API.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScheduleRecord {
    pub id: ScheduleId,
    /// Weekday name (`"Monday"` .. `"Sunday"`); empty when unset.
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub day: String,
    /// Start of the window, `HH:MM`.
    #[serde(rename = "timeF", default, deserialize_with = "deserialize_nullable_string")]
    pub time_from: String,
    /// End of the window, `HH:MM`. Not checked against `time_from`.
    #[serde(rename = "timeT", default, deserialize_with = "deserialize_nullable_string")]
    pub time_to: String,
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub note: String,
    /// Area label shown in the AREA column.
    #[serde(rename = "barangay", default, deserialize_with = "deserialize_nullable_string")]
    pub area: String,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl ScheduleRecord {
    /// Build a record with no extra fields.
    pub fn new(
        id: impl Into<ScheduleId>,
        day: &str,
        time_from: &str,
        time_to: &str,
        note: &str,
        area: &str,
    ) -> Self {
        Self {
            id: id.into(),
            day: day.to_owned(),
            time_from: time_from.to_owned(),
            time_to: time_to.to_owned(),
            note: note.to_owned(),
            area: area.to_owned(),
            extra: serde_json::Map::new(),
        }
    }

    /// `"08:00 - 09:30"` for the TIME column.
    pub fn time_window(&self) -> String {
        format!("{} - {}", self.time_from, self.time_to)
    }
}

/// List responses come either bare or wrapped as `{ "data": [...] }`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum SchedulesPayload {
    Envelope { data: Vec<ScheduleRecord> },
    Bare(Vec<ScheduleRecord>),
}

impl SchedulesPayload {
    pub fn into_records(self) -> Vec<ScheduleRecord> {
        match self {
            Self::Envelope { data } | Self::Bare(data) => data,
        }
    }
}

/// Single-record responses, bare or wrapped as `{ "data": {...} }`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum SchedulePayload {
    Envelope { data: ScheduleRecord },
    Bare(ScheduleRecord),
}

impl SchedulePayload {
    pub fn into_record(self) -> ScheduleRecord {
        match self {
            Self::Envelope { data } | Self::Bare(data) => data,
        }
    }
}

fn deserialize_nullable_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
