//! Local projection of the schedule list behind the table view.
//!
//! SYSTEM CONTEXT
//! ==============
//! The parent page hands down server snapshots; this state caches them,
//! carries the current sort, tracks rows with a delete in flight, and owns
//! the edit dialog.
//!
//! DESIGN
//! ======
//! Snapshots are merged append-only (`synchronize`). A snapshot may be stale
//! or partial, so overwriting would resurrect rows deleted locally or drop
//! rows the snapshot does not include.

#[cfg(test)]
#[path = "schedules_test.rs"]
mod schedules_test;

use std::collections::HashSet;

use super::dialog::EditDialog;
use super::sort::{SortField, SortOrder, next_order, sort_records};
use crate::net::types::{ScheduleId, ScheduleRecord};

/// Append the records of `incoming` whose ids are not already in `current`.
///
/// Existing entries keep their position and contents; new ones follow in
/// `incoming` order. Repeated ids inside `incoming` are taken once.
pub fn synchronize(current: &[ScheduleRecord], incoming: &[ScheduleRecord]) -> Vec<ScheduleRecord> {
    let mut seen: HashSet<&ScheduleId> = current.iter().map(|r| &r.id).collect();
    let mut merged = current.to_vec();
    for record in incoming {
        if seen.insert(&record.id) {
            merged.push(record.clone());
        }
    }
    merged
}

/// State behind the schedule table.
#[derive(Clone, Debug, Default)]
pub struct ScheduleTableState {
    /// Visible rows, in display order.
    pub items: Vec<ScheduleRecord>,
    /// Column of the last sort, `None` until the user picks one.
    pub sort_field: Option<SortField>,
    pub sort_order: SortOrder,
    /// Rows with a delete request in flight.
    pub deleting: HashSet<ScheduleId>,
    pub dialog: EditDialog,
}

impl ScheduleTableState {
    pub fn with_items(items: Vec<ScheduleRecord>) -> Self {
        Self { items: synchronize(&[], &items), ..Self::default() }
    }

    /// Merge a server snapshot into the local list.
    pub fn merge_incoming(&mut self, incoming: &[ScheduleRecord]) {
        if incoming.iter().all(|r| self.contains(&r.id)) {
            return;
        }
        self.items = synchronize(&self.items, incoming);
    }

    /// Sort by `field`, toggling direction when it is already the sort column.
    /// Returns the direction applied.
    pub fn sort_by(&mut self, field: SortField) -> SortOrder {
        let order = next_order(field, self.sort_field, self.sort_order);
        self.sort_field = Some(field);
        self.sort_order = order;
        sort_records(&mut self.items, field, order);
        order
    }

    /// Direction arrow for a column header, if that column is the sort column.
    pub fn sort_indicator(&self, field: SortField) -> Option<SortOrder> {
        (self.sort_field == Some(field)).then_some(self.sort_order)
    }

    /// `"Sorted by day (ascending)"`, or `None` before any sort.
    pub fn sort_caption(&self) -> Option<String> {
        self.sort_field.map(|field| format!("Sorted by {field} ({})", self.sort_order.label()))
    }

    pub fn contains(&self, id: &ScheduleId) -> bool {
        self.items.iter().any(|r| &r.id == id)
    }

    pub fn get(&self, id: &ScheduleId) -> Option<&ScheduleRecord> {
        self.items.iter().find(|r| &r.id == id)
    }

    /// Drop the row with `id`. Returns whether a row was removed.
    pub fn remove(&mut self, id: &ScheduleId) -> bool {
        let before = self.items.len();
        self.items.retain(|r| &r.id != id);
        self.items.len() != before
    }

    /// Swap the row with `id` for `record`, keeping its position.
    /// Returns whether a row matched.
    pub fn replace(&mut self, id: &ScheduleId, record: ScheduleRecord) -> bool {
        match self.items.iter_mut().find(|r| &r.id == id) {
            Some(slot) => {
                *slot = record;
                true
            }
            None => false,
        }
    }

    /// Mark a delete as started. Returns `false` if one is already running
    /// for this row.
    pub fn begin_delete(&mut self, id: &ScheduleId) -> bool {
        self.deleting.insert(id.clone())
    }

    pub fn end_delete(&mut self, id: &ScheduleId) {
        self.deleting.remove(id);
    }

    pub fn is_deleting(&self, id: &ScheduleId) -> bool {
        self.deleting.contains(id)
    }

    /// Begin editing the row with `id`. Returns whether the row exists.
    pub fn open_editor(&mut self, id: &ScheduleId) -> bool {
        let Some(record) = self.items.iter().find(|r| &r.id == id) else {
            return false;
        };
        self.dialog.open(record);
        true
    }

    /// Adopt the server's copy of the edited record and close the dialog.
    pub fn apply_update(&mut self, id: &ScheduleId, authoritative: ScheduleRecord) {
        self.replace(id, authoritative);
        self.dialog.cancel();
    }
}
