//! Client configuration fixed at build time.
//!
//! The WASM bundle has no process environment, so values are captured with
//! `option_env!` when the crate is compiled and parsed once at startup.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE: &str = "/api";
pub const DEFAULT_TOAST_DURATION_MS: u32 = 3000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleConfig {
    /// Path prefix for REST calls, without a trailing slash.
    pub api_base: String,
    /// How long a toast stays visible.
    pub toast_duration_ms: u32,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self { api_base: DEFAULT_API_BASE.to_owned(), toast_duration_ms: DEFAULT_TOAST_DURATION_MS }
    }
}

impl ScheduleConfig {
    /// Build config from the variables present when the crate was compiled.
    ///
    /// Optional:
    /// - `SCHEDULE_API_BASE`: default `/api`
    /// - `SCHEDULE_TOAST_MS`: default 3000
    pub fn from_build_env() -> Self {
        Self::from_lookup(|key| match key {
            "SCHEDULE_API_BASE" => option_env!("SCHEDULE_API_BASE").map(str::to_owned),
            "SCHEDULE_TOAST_MS" => option_env!("SCHEDULE_TOAST_MS").map(str::to_owned),
            _ => None,
        })
    }

    /// Build config from an arbitrary key lookup. Missing or unparsable values
    /// fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let api_base = lookup("SCHEDULE_API_BASE")
            .map(|v| v.trim().trim_end_matches('/').to_owned())
            .unwrap_or_else(|| DEFAULT_API_BASE.to_owned());
        let toast_duration_ms = lookup("SCHEDULE_TOAST_MS")
            .and_then(|v| v.trim().parse::<u32>().ok())
            .unwrap_or(DEFAULT_TOAST_DURATION_MS);

        Self { api_base, toast_duration_ms }
    }

    /// Collection endpoint, e.g. `/api/schedules`.
    pub fn schedules_endpoint(&self) -> String {
        format!("{}/schedules", self.api_base)
    }
}
