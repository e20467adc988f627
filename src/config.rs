//! Backend endpoint configuration.
//!
//! The base URL is fixed at compile time: `FOLIO_API_URL` in the build
//! environment overrides the local development default.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

const DEFAULT_API_URL: &str = "http://localhost:5001/api";

/// Base URL for the portfolio REST API, without a trailing slash.
pub fn api_base_url() -> String {
    normalize_base_url(option_env!("FOLIO_API_URL").unwrap_or(DEFAULT_API_URL))
}

/// Strip trailing slashes so path joins stay single-slashed.
fn normalize_base_url(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_owned()
}
