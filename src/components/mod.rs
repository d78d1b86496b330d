//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the schedule table, its edit dialog, and toasts while
//! reading shared state from Leptos context providers.

pub mod schedule_edit_dialog;
pub mod schedule_table;
pub mod toast;
