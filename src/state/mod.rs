//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`schedules`, `sort`, `dialog`, `toast`) so the
//! table logic can be exercised without rendering anything.

pub mod dialog;
pub mod schedules;
pub mod sort;
pub mod toast;
