//! Networking modules for the schedules REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues HTTP calls, `types` defines the wire schema, and `error`
//! carries the failure type both share with callers.

pub mod api;
pub mod error;
pub mod types;
