//! Edit dialog state: closed, or editing a draft copy of one record.
//!
//! DESIGN
//! ======
//! The draft is a detached copy. Edits never touch the table until the server
//! accepts an update, and cancelling simply drops the copy.

#[cfg(test)]
#[path = "dialog_test.rs"]
mod dialog_test;

use crate::net::types::{ScheduleId, ScheduleRecord};

/// Editable fields exposed by the dialog form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DraftField {
    Note,
    Area,
    TimeFrom,
    TimeTo,
    Day,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub enum EditDialog {
    #[default]
    Closed,
    Editing(ScheduleRecord),
}

impl EditDialog {
    /// Start editing a copy of `record`, replacing any draft in progress.
    pub fn open(&mut self, record: &ScheduleRecord) {
        *self = Self::Editing(record.clone());
    }

    /// Discard the draft.
    pub fn cancel(&mut self) {
        *self = Self::Closed;
    }

    pub fn is_open(&self) -> bool {
        matches!(self, Self::Editing(_))
    }

    pub fn draft(&self) -> Option<&ScheduleRecord> {
        match self {
            Self::Editing(draft) => Some(draft),
            Self::Closed => None,
        }
    }

    pub fn draft_id(&self) -> Option<&ScheduleId> {
        self.draft().map(|d| &d.id)
    }

    /// Overwrite one field of the draft. Ignored while closed.
    pub fn edit(&mut self, field: DraftField, value: impl Into<String>) {
        let Self::Editing(draft) = self else {
            return;
        };
        let value = value.into();
        match field {
            DraftField::Note => draft.note = value,
            DraftField::Area => draft.area = value,
            DraftField::TimeFrom => draft.time_from = value,
            DraftField::TimeTo => draft.time_to = value,
            DraftField::Day => draft.day = value,
        }
    }

    /// Current value of one draft field, empty while closed.
    pub fn value(&self, field: DraftField) -> String {
        self.draft()
            .map(|draft| match field {
                DraftField::Note => draft.note.clone(),
                DraftField::Area => draft.area.clone(),
                DraftField::TimeFrom => draft.time_from.clone(),
                DraftField::TimeTo => draft.time_to.clone(),
                DraftField::Day => draft.day.clone(),
            })
            .unwrap_or_default()
    }
}
