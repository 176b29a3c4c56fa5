//! Build-time settings of the dashboard.
//!
//! Values are read from the environment when the bundle is compiled
//! (`TALENTX_API_BASE_URL=https://… trunk build`), so the same sources serve
//! every deployment without a runtime config file.

use common::fetcher::DEFAULT_PAGE_SIZE;

const DEFAULT_API_BASE_URL: &str = "/api";
const DEFAULT_PASSWORD_SALT: &str = "talentx";

/// Upper bound for any request to the API.
pub const REQUEST_TIMEOUT_MS: u32 = 15_000;

/// How long the "Copied!" hint stays next to an email.
pub const COPY_FEEDBACK_MS: u32 = 2_000;

pub const PAGE_SIZE: u32 = DEFAULT_PAGE_SIZE;

/// Base URL of the API without a trailing slash.
pub fn api_base_url() -> &'static str {
    option_env!("TALENTX_API_BASE_URL")
        .map(|url| url.trim_end_matches('/'))
        .filter(|url| !url.is_empty())
        .unwrap_or(DEFAULT_API_BASE_URL)
}

pub fn password_salt() -> &'static str {
    option_env!("TALENTX_PASSWORD_SALT").unwrap_or(DEFAULT_PASSWORD_SALT)
}

pub fn endpoint(path: &str) -> String {
    format!("{}/{}", api_base_url(), path.trim_start_matches('/'))
}
