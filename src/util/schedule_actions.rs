//! Delete and update actions for the schedule table.
//!
//! Both actions follow the same shape:
//!
//! 1. **Check**: bail out before any request when there is nothing to act on
//!    (blank id, no open draft). These are logged only; no toast is raised.
//! 2. **Call**: one request through `ScheduleService`. Nothing is changed
//!    locally before the server answers, so a failure needs no rollback.
//! 3. **Settle**: on success apply the result to the table and raise a
//!    success toast; on failure raise an error toast and leave the table as
//!    it was.
//!
//! The actions are generic over where the table lives (`TableStore`) and
//! where toasts go (`Notifier`) so they run the same against the reactive
//! signals in the app and plain cells in tests.

#[cfg(test)]
#[path = "schedule_actions_test.rs"]
mod schedule_actions_test;

use std::cell::RefCell;

use leptos::prelude::*;

use crate::net::api::ScheduleService;
use crate::net::error::ApiError;
use crate::net::types::ScheduleId;
use crate::state::schedules::ScheduleTableState;
use crate::state::toast::{Notification, Notifier};

pub const DELETE_SUCCESS_MESSAGE: &str = "Schedule Deleted Successfully";
pub const DELETE_FAILURE_MESSAGE: &str = "Failed to delete schedule. Please try again.";
pub const UPDATE_SUCCESS_MESSAGE: &str = "Schedule Updated Successfully";
pub const UPDATE_FAILURE_MESSAGE: &str = "Failed to update schedule. Please try again.";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ActionError {
    #[error("no schedule id provided")]
    MissingId,
    #[error("no schedule selected for update")]
    NothingSelected,
    #[error("delete already in progress for schedule {0}")]
    AlreadyPending(ScheduleId),
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Somewhere a `ScheduleTableState` can be read and mutated.
pub trait TableStore {
    fn with_table<R>(&self, f: impl FnOnce(&ScheduleTableState) -> R) -> R;
    fn update_table(&self, f: impl FnOnce(&mut ScheduleTableState));
}

impl TableStore for RwSignal<ScheduleTableState> {
    fn with_table<R>(&self, f: impl FnOnce(&ScheduleTableState) -> R) -> R {
        self.with_untracked(f)
    }

    fn update_table(&self, f: impl FnOnce(&mut ScheduleTableState)) {
        self.update(f);
    }
}

impl TableStore for RefCell<ScheduleTableState> {
    fn with_table<R>(&self, f: impl FnOnce(&ScheduleTableState) -> R) -> R {
        f(&self.borrow())
    }

    fn update_table(&self, f: impl FnOnce(&mut ScheduleTableState)) {
        f(&mut self.borrow_mut());
    }
}

/// Delete the schedule `id` remotely, then drop it from the table.
///
/// The row is marked busy while the request runs; a second delete for the
/// same row is rejected until the first settles. `on_removed` runs only after
/// a successful delete.
///
/// # Errors
///
/// Returns `MissingId` for a blank id, `AlreadyPending` if the row is already
/// being deleted, and `Api` when the request fails.
pub async fn remove_schedule<S, T, N>(
    service: &S,
    table: &T,
    notifier: &N,
    id: Option<&ScheduleId>,
    on_removed: impl FnOnce(),
) -> Result<(), ActionError>
where
    S: ScheduleService,
    T: TableStore,
    N: Notifier,
{
    let Some(id) = id.filter(|id| !id.is_blank()) else {
        leptos::logging::warn!("No schedule ID provided");
        return Err(ActionError::MissingId);
    };

    let mut started = false;
    table.update_table(|t| started = t.begin_delete(id));
    if !started {
        return Err(ActionError::AlreadyPending(id.clone()));
    }

    let result = service.delete_schedule(id).await;

    table.update_table(|t| {
        t.end_delete(id);
        if result.is_ok() {
            t.remove(id);
        }
    });

    match result {
        Ok(()) => {
            notifier.notify(Notification::success(DELETE_SUCCESS_MESSAGE));
            on_removed();
            Ok(())
        }
        Err(err) => {
            leptos::logging::error!("Delete Error: schedule {id}: {err}");
            notifier.notify(Notification::error(DELETE_FAILURE_MESSAGE));
            Err(err.into())
        }
    }
}

/// Send the dialog's draft to the server and adopt the record it returns.
///
/// On success the table row takes the server's copy (not the draft) and the
/// dialog closes. On failure the dialog stays open with the draft untouched.
///
/// # Errors
///
/// Returns `NothingSelected` when no draft is open and `Api` when the request
/// fails.
pub async fn commit_schedule_update<S, T, N>(service: &S, table: &T, notifier: &N) -> Result<(), ActionError>
where
    S: ScheduleService,
    T: TableStore,
    N: Notifier,
{
    let Some(draft) = table.with_table(|t| t.dialog.draft().cloned()) else {
        leptos::logging::warn!("No schedule selected for update.");
        return Err(ActionError::NothingSelected);
    };

    leptos::logging::log!("Updating schedule {}", draft.id);
    match service.update_schedule(&draft).await {
        Ok(updated) => {
            table.update_table(|t| t.apply_update(&draft.id, updated));
            notifier.notify(Notification::success(UPDATE_SUCCESS_MESSAGE));
            Ok(())
        }
        Err(err) => {
            leptos::logging::error!("Update Error: schedule {}: {err}", draft.id);
            notifier.notify(Notification::error(UPDATE_FAILURE_MESSAGE));
            Err(err.into())
        }
    }
}
