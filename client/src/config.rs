//! Build-time client configuration.
//!
//! The API base URL is baked in at compile time from `DASHBOARD_API_URL`;
//! a blank value falls back to the local development backend.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_URL: &str = "http://localhost:9090/api";

/// Resolved API base URL for this build.
pub fn api_base_url() -> String {
    resolve_api_url(option_env!("DASHBOARD_API_URL"))
}

fn resolve_api_url(raw: Option<&str>) -> String {
    raw.map(str::trim)
        .filter(|url| !url.is_empty())
        .unwrap_or(DEFAULT_API_URL)
        .trim_end_matches('/')
        .to_owned()
}
