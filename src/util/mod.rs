//! Helpers shared across the schedule UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Keeps async request orchestration out of components so it can be tested
//! without a browser.

pub mod schedule_actions;
