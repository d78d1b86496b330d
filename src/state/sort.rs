//! Client-side ordering of the schedule list.
//!
//! DESIGN
//! ======
//! Each column maps a record to a sort key (weekday rank, colon-free start
//! time, or lowercased text) and the list is reordered with a stable sort.
//! Records with equal keys keep their previous relative order in both
//! directions, so repeated sorts on different columns compose.

#[cfg(test)]
#[path = "sort_test.rs"]
mod sort_test;

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::net::types::ScheduleRecord;

/// Weekday names in rank order; Monday ranks 1.
pub const WEEKDAYS: [&str; 7] = ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday", "Sunday"];

/// Key substituted for a missing start time.
const MISSING_TIME_KEY: &str = "0000";

/// Sortable table column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SortField {
    Day,
    Time,
    Note,
    Area,
}

impl SortField {
    pub const ALL: [Self; 4] = [Self::Day, Self::Time, Self::Note, Self::Area];

    /// Value used by the sort select control.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Day => "day",
            Self::Time => "time",
            Self::Note => "note",
            Self::Area => "area",
        }
    }

    /// Human label for menus.
    pub fn label(self) -> &'static str {
        match self {
            Self::Day => "Day",
            Self::Time => "Time",
            Self::Note => "Note",
            Self::Area => "Area",
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown sort field: {0}")]
pub struct UnknownSortField(pub String);

impl FromStr for SortField {
    type Err = UnknownSortField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "day" => Ok(Self::Day),
            "time" => Ok(Self::Time),
            "note" => Ok(Self::Note),
            "area" => Ok(Self::Area),
            other => Err(UnknownSortField(other.to_owned())),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl SortOrder {
    pub fn label(self) -> &'static str {
        match self {
            Self::Ascending => "ascending",
            Self::Descending => "descending",
        }
    }
}

/// Direction for a click on `field`.
///
/// Re-selecting the current column while ascending flips to descending; any
/// other selection (including a new column) starts ascending.
pub fn next_order(field: SortField, current_field: Option<SortField>, current_order: SortOrder) -> SortOrder {
    if current_field == Some(field) && current_order == SortOrder::Ascending {
        SortOrder::Descending
    } else {
        SortOrder::Ascending
    }
}

/// Rank of a weekday name, Monday = 1 .. Sunday = 7. Unknown names rank 0.
pub fn weekday_rank(day: &str) -> u8 {
    WEEKDAYS
        .iter()
        .position(|d| *d == day)
        .and_then(|i| u8::try_from(i + 1).ok())
        .unwrap_or(0)
}

/// Start time with colons removed, so `"08:30"` compares as `"0830"`.
pub fn time_key(time: &str) -> String {
    if time.is_empty() {
        MISSING_TIME_KEY.to_owned()
    } else {
        time.replace(':', "")
    }
}

fn text_key(text: &str) -> String {
    text.to_lowercase()
}

/// Compare two records on a single column, ascending.
pub fn compare_by(field: SortField, a: &ScheduleRecord, b: &ScheduleRecord) -> Ordering {
    match field {
        SortField::Day => weekday_rank(&a.day).cmp(&weekday_rank(&b.day)),
        SortField::Time => time_key(&a.time_from).cmp(&time_key(&b.time_from)),
        SortField::Note => text_key(&a.note).cmp(&text_key(&b.note)),
        SortField::Area => text_key(&a.area).cmp(&text_key(&b.area)),
    }
}

/// Reorder `records` in place by `field` and `order`.
pub fn sort_records(records: &mut [ScheduleRecord], field: SortField, order: SortOrder) {
    match order {
        SortOrder::Ascending => records.sort_by(|a, b| compare_by(field, a, b)),
        SortOrder::Descending => records.sort_by(|a, b| compare_by(field, b, a)),
    }
}
